//! # stackgen-renderer
//!
//! Tera-based engine that renders the stack template against per-team
//! configuration mappings.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//! use stackgen_renderer::{RenderContext, TemplateEngine};
//!
//! fn render_one(config: &serde_yaml::Mapping) {
//!     if let Ok(engine) = TemplateEngine::from_file(Path::new("templates/stack.yaml.tera")) {
//!         if let Ok(ctx) = RenderContext::from_config(config) {
//!             if let Ok(output) = engine.render(&ctx) {
//!                 println!("{} bytes", output.len());
//!             }
//!         }
//!     }
//! }
//! ```

pub mod context;
pub mod engine;
pub mod error;

pub use context::RenderContext;
pub use engine::TemplateEngine;
pub use error::RenderError;
