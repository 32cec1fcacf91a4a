//! Render context — the string-keyed substitution payload for one configuration.

use serde_yaml::{Mapping, Value};

use crate::error::RenderError;

/// Substitution values for a single render.
///
/// The template dereferences configuration keys by name, so every key must
/// be a plain string. Values may be scalars or structured YAML — structured
/// values are reachable from the template with dotted access.
#[derive(Debug, Clone)]
pub struct RenderContext {
    values: Mapping,
}

impl RenderContext {
    /// Build a context from one configuration mapping.
    ///
    /// Rejects non-string keys up front so the failure names the offending
    /// key instead of surfacing as an opaque serialization error.
    pub fn from_config(config: &Mapping) -> Result<Self, RenderError> {
        for key in config.keys() {
            if !key.is_string() {
                return Err(RenderError::NonStringKey {
                    key: serde_yaml::to_string(key)
                        .unwrap_or_else(|_| "<unprintable>".to_string())
                        .trim_end()
                        .to_string(),
                });
            }
        }
        Ok(Self { values: config.clone() })
    }

    /// Look up a string value by key.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.values.get(key).and_then(Value::as_str)
    }

    /// Convert to a [`tera::Context`] for rendering.
    pub fn to_tera_context(&self) -> Result<tera::Context, RenderError> {
        tera::Context::from_serialize(&self.values).map_err(RenderError::from)
    }
}
