//! Stackgen — CloudFormation stack templating CLI.
//!
//! # Usage
//!
//! ```text
//! stackgen render [--template <file>] [--params <dir>] [--out <dir>]
//!                 [--naming schema-table|file-stem] [--keep-underscores]
//!                 [--stack-prefix <prefix>] [--on-collision overwrite|fail]
//!                 [--keep-going] [--dry-run]
//! stackgen list   [--json]
//! stackgen diff
//! ```

mod commands;

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use commands::{diff::DiffArgs, list::ListArgs, render::RenderArgs};
use stackgen_core::{CollisionPolicy, JobConfig, NamingPolicy};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "stackgen",
    version,
    about = "Render a CloudFormation stack template against per-team parameter files",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render every configuration and write the output files.
    Render(RenderArgs),

    /// Show the configurations and derived stack names without rendering.
    List(ListArgs),

    /// Show unified diffs of what render would write.
    Diff(DiffArgs),
}

// ---------------------------------------------------------------------------
// Shared job options — parsed from CLI strings, convert to core JobConfig
// ---------------------------------------------------------------------------

/// Input/output paths and policies shared by all subcommands.
#[derive(Args, Debug)]
pub struct JobOpts {
    /// Path to the Tera template file.
    #[arg(long, default_value = "templates/lambda-eventbridge.yaml.tera")]
    pub template: PathBuf,

    /// Directory of per-team parameter files (*.yaml).
    #[arg(long, default_value = "team_configs")]
    pub params: PathBuf,

    /// Output directory, created if absent.
    #[arg(long, default_value = "output")]
    pub out: PathBuf,

    /// Naming policy: schema-table, or file-stem (deprecated).
    #[arg(long, default_value = "schema-table", value_name = "POLICY")]
    pub naming: NamingPolicyArg,

    /// Keep underscores in derived names instead of replacing them with hyphens.
    #[arg(long)]
    pub keep_underscores: bool,

    /// Prefix prepended to every derived stack name.
    #[arg(long, default_value = "lambda-eb", value_name = "PREFIX")]
    pub stack_prefix: String,

    /// Behavior when two configurations derive the same output path.
    #[arg(long, default_value = "overwrite", value_name = "POLICY")]
    pub on_collision: CollisionPolicyArg,
}

impl JobOpts {
    fn to_job(&self) -> JobConfig {
        let naming = match self.naming {
            NamingPolicyArg::SchemaTable => {
                NamingPolicy::SchemaTable { normalize: !self.keep_underscores }
            }
            NamingPolicyArg::FileStem => NamingPolicy::FileStem,
        };
        let mut job =
            JobConfig::new(self.template.clone(), self.params.clone(), self.out.clone());
        job.stack_prefix = self.stack_prefix.clone();
        job.naming = naming;
        job.on_collision = self.on_collision.0;
        job
    }
}

/// Thin wrapper so clap can parse [`NamingPolicy`] from CLI args.
#[derive(Debug, Clone, Copy, Default)]
pub enum NamingPolicyArg {
    #[default]
    SchemaTable,
    FileStem,
}

impl FromStr for NamingPolicyArg {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "schema-table" => Ok(Self::SchemaTable),
            "file-stem" => Ok(Self::FileStem),
            other => Err(format!(
                "unknown naming policy '{other}'; expected: schema-table, file-stem"
            )),
        }
    }
}

impl fmt::Display for NamingPolicyArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SchemaTable => write!(f, "schema-table"),
            Self::FileStem => write!(f, "file-stem"),
        }
    }
}

/// Thin wrapper so clap can parse [`CollisionPolicy`] from CLI args.
#[derive(Debug, Clone, Copy, Default)]
pub struct CollisionPolicyArg(pub CollisionPolicy);

impl FromStr for CollisionPolicyArg {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "overwrite" => Ok(Self(CollisionPolicy::Overwrite)),
            "fail" => Ok(Self(CollisionPolicy::Fail)),
            other => Err(format!(
                "unknown collision policy '{other}'; expected: overwrite, fail"
            )),
        }
    }
}

impl fmt::Display for CollisionPolicyArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Render(args) => args.run(),
        Commands::List(args) => args.run(),
        Commands::Diff(args) => args.run(),
    }
}
