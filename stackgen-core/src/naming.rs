//! Stack-name derivation.
//!
//! Two policies exist because the original tooling evolved from
//! filename-derived names to content-derived ones:
//!
//! - `FileStem`: `parameters_victory.yaml` → `lambda-eb-victory`
//! - `SchemaTable`: `{schema_name: sales_eu, table_name: orders}` →
//!   `lambda-eb-sales-eu-orders` (with normalization)
//!
//! `SchemaTable` is the default; `FileStem` gives every configuration in a
//! file the same output path and is kept only for compatibility.

use serde_yaml::Mapping;

use crate::error::ParamsError;
use crate::params::{str_field, ParamFile};
use crate::types::{NamingPolicy, StackName, PARAM_FILE_PREFIX};

/// Derive the stack name for one configuration.
pub fn stack_name(
    policy: NamingPolicy,
    prefix: &str,
    file: &ParamFile,
    config: &Mapping,
) -> Result<StackName, ParamsError> {
    let base = match policy {
        NamingPolicy::FileStem => {
            let stem = file
                .file_name
                .strip_suffix(".yaml")
                .unwrap_or(&file.file_name);
            stem.strip_prefix(PARAM_FILE_PREFIX).unwrap_or(stem).to_string()
        }
        NamingPolicy::SchemaTable { normalize } => {
            let schema = str_field(config, "schema_name", &file.path)?;
            let table = str_field(config, "table_name", &file.path)?;
            let joined = format!("{schema}-{table}");
            if normalize {
                joined.replace('_', "-")
            } else {
                joined
            }
        }
    };
    Ok(StackName(format!("{prefix}-{base}")))
}

/// Output file name for a stack: `<stack-name>.yaml`.
pub fn output_file_name(name: &StackName) -> String {
    format!("{name}.yaml")
}
