//! Tera rendering engine wrapping the single stack template.
//!
//! The template is loaded once and is read-only for the process lifetime.
//! Tera renders with strict variable lookup: a placeholder with no matching
//! configuration key fails the render rather than passing through raw.

use std::error::Error as _;
use std::path::Path;

use tera::Tera;

use crate::context::RenderContext;
use crate::error::RenderError;

/// Internal name the stack template is registered under.
const TEMPLATE_NAME: &str = "stack";

/// Tera-based engine for rendering one template against many configurations.
///
/// Create once with [`TemplateEngine::from_file`] and reuse.
#[derive(Debug)]
pub struct TemplateEngine {
    tera: Tera,
}

impl TemplateEngine {
    /// Load and compile the template at `path`.
    pub fn from_file(path: &Path) -> Result<Self, RenderError> {
        if !path.is_file() {
            return Err(RenderError::TemplateNotFound { path: path.to_path_buf() });
        }
        let source = std::fs::read_to_string(path)
            .map_err(|e| RenderError::Io { path: path.to_path_buf(), source: e })?;
        Self::from_source(&source)
    }

    /// Compile a template from an in-memory string.
    pub fn from_source(source: &str) -> Result<Self, RenderError> {
        let mut tera = Tera::default();
        tera.add_raw_template(TEMPLATE_NAME, source)?;
        Ok(Self { tera })
    }

    /// Render the template with the supplied context.
    pub fn render(&self, ctx: &RenderContext) -> Result<String, RenderError> {
        let tera_ctx = ctx.to_tera_context()?;
        self.tera
            .render(TEMPLATE_NAME, &tera_ctx)
            .map_err(|e| RenderError::Render { detail: flatten_error_chain(&e) })
    }
}

/// Tera wraps the interesting part ("Variable `x` not found ...") in its
/// source chain; flatten the chain so error messages name the missing key.
fn flatten_error_chain(err: &tera::Error) -> String {
    let mut detail = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        detail.push_str(": ");
        detail.push_str(&cause.to_string());
        source = cause.source();
    }
    detail
}
