//! Domain types for stackgen.
//!
//! All path fields use `PathBuf`; never `&str` or `String` for filesystem paths.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default prefix prepended to every derived stack name.
pub const DEFAULT_STACK_PREFIX: &str = "lambda-eb";

/// Fixed prefix stripped from parameter file names under the filename-derived policy.
pub const PARAM_FILE_PREFIX: &str = "parameters_";

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A strongly-typed derived stack name (no `.yaml` suffix).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StackName(pub String);

impl fmt::Display for StackName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for StackName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for StackName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// How output names are derived from a configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamingPolicy {
    /// Strip `parameters_`/`.yaml` from the source file name. Deprecated:
    /// every configuration in one file maps to the same output path.
    FileStem,
    /// Join `schema_name` and `table_name` with `-`. When `normalize` is
    /// set, underscores become hyphens for CloudFormation compliance.
    SchemaTable { normalize: bool },
}

impl Default for NamingPolicy {
    fn default() -> Self {
        NamingPolicy::SchemaTable { normalize: true }
    }
}

impl fmt::Display for NamingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NamingPolicy::FileStem => write!(f, "file-stem"),
            NamingPolicy::SchemaTable { .. } => write!(f, "schema-table"),
        }
    }
}

/// What to do when two configurations derive the same output path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollisionPolicy {
    /// Last write wins (the historical behavior).
    #[default]
    Overwrite,
    /// Abort the run, naming the colliding path and both source files.
    Fail,
}

impl fmt::Display for CollisionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollisionPolicy::Overwrite => write!(f, "overwrite"),
            CollisionPolicy::Fail => write!(f, "fail"),
        }
    }
}

// ---------------------------------------------------------------------------
// JobConfig
// ---------------------------------------------------------------------------

/// Everything a generation run needs, passed explicitly — no process-wide
/// template or environment singletons.
#[derive(Debug, Clone)]
pub struct JobConfig {
    /// Path to the Tera template file.
    pub template_path: PathBuf,
    /// Directory holding per-team parameter files (`*.yaml`).
    pub params_dir: PathBuf,
    /// Directory rendered outputs are written to (created if absent).
    pub output_dir: PathBuf,
    /// Prefix prepended to every derived stack name.
    pub stack_prefix: String,
    /// Output naming policy.
    pub naming: NamingPolicy,
    /// Behavior on duplicate output paths.
    pub on_collision: CollisionPolicy,
    /// Continue with the remaining parameter files after one fails.
    pub keep_going: bool,
}

impl JobConfig {
    /// Build a job with the default prefix and policies.
    pub fn new(template_path: PathBuf, params_dir: PathBuf, output_dir: PathBuf) -> Self {
        Self {
            template_path,
            params_dir,
            output_dir,
            stack_prefix: DEFAULT_STACK_PREFIX.to_string(),
            naming: NamingPolicy::default(),
            on_collision: CollisionPolicy::default(),
            keep_going: false,
        }
    }
}
