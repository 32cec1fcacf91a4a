//! Error types for stackgen-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from parameter loading and name derivation.
#[derive(Debug, Error)]
pub enum ParamsError {
    /// Underlying I/O failure (file not found, permission denied, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parse error on load — includes file path and line context from serde_yaml.
    #[error("failed to parse parameters at {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The parameter directory did not exist at the expected path.
    #[error("parameter directory not found at {}", .path.display())]
    DirNotFound { path: PathBuf },

    /// The YAML document is neither a mapping nor a sequence of mappings.
    #[error("{}: expected a configuration mapping or a sequence of mappings", .path.display())]
    InvalidDocument { path: PathBuf },

    /// A sequence entry that is not a mapping.
    #[error("{}: configuration entry {index} is not a mapping", .path.display())]
    InvalidEntry { path: PathBuf, index: usize },

    /// A configuration field required by the naming policy is absent.
    #[error("missing required field '{field}' in {}", .path.display())]
    MissingField { path: PathBuf, field: &'static str },

    /// A naming field is present but not a plain string.
    #[error("field '{field}' in {} must be a string", .path.display())]
    NonStringField { path: PathBuf, field: &'static str },
}
