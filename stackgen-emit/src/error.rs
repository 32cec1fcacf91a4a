//! Error types for stackgen-emit.

use std::path::PathBuf;

use thiserror::Error;

use stackgen_core::ParamsError;
use stackgen_renderer::RenderError;

/// All errors that can arise from generation runs.
#[derive(Debug, Error)]
pub enum EmitError {
    /// An error from the rendering engine.
    #[error("render error: {0}")]
    Render(#[from] RenderError),

    /// An error from parameter loading or name derivation.
    #[error("parameter error: {0}")]
    Params(#[from] ParamsError),

    /// An I/O error, with annotated path for context.
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Two configurations derived the same output path under the `fail` policy.
    #[error("output collision at {}: derived from both {} and {}", .path.display(), .first.display(), .second.display())]
    Collision {
        path: PathBuf,
        first: PathBuf,
        second: PathBuf,
    },
}

/// Convenience constructor for [`EmitError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> EmitError {
    EmitError::Io { path: path.into(), source }
}
