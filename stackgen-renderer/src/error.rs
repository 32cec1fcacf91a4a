//! Error types for stackgen-renderer.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from template rendering operations.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Tera template engine error (syntax or registration).
    #[error("template engine error: {0}")]
    Tera(#[from] tera::Error),

    /// Render-time failure with the full cause chain flattened — this is
    /// where "Variable `x` not found" from an unresolved placeholder lands.
    #[error("template render error: {detail}")]
    Render { detail: String },

    /// The template file did not exist at the expected path.
    #[error("template not found at {}", .path.display())]
    TemplateNotFound { path: PathBuf },

    /// Filesystem error while loading the template.
    #[error("template io error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A configuration key is not a plain string and cannot name a placeholder.
    #[error("configuration key {key} is not a string")]
    NonStringKey { key: String },
}
