//! Parameter file loading.
//!
//! # Input layout
//!
//! ```text
//! team_configs/
//!   parameters_victory.yaml   (single mapping OR sequence of mappings)
//!   parameters_sales.yaml
//! ```
//!
//! Each mapping is one configuration; a file may carry several. Files that
//! do not end in `.yaml` are ignored. The directory listing is sorted by
//! file name so processing order is stable across platforms — the original
//! script inherited whatever order the filesystem returned.

use std::path::{Path, PathBuf};

use serde_yaml::{Mapping, Value};

use crate::error::ParamsError;

/// One parsed parameter file and its configurations.
#[derive(Debug, Clone)]
pub struct ParamFile {
    /// Full path to the source file.
    pub path: PathBuf,
    /// Bare file name, e.g. `parameters_victory.yaml`.
    pub file_name: String,
    /// Configuration mappings, in document order.
    pub configs: Vec<Mapping>,
}

/// Parse a single parameter file.
///
/// Accepts a top-level mapping (one configuration) or a sequence of
/// mappings. An empty document yields zero configurations. Anything else is
/// `ParamsError::InvalidDocument`.
pub fn parse_param_file(path: &Path) -> Result<ParamFile, ParamsError> {
    let contents = std::fs::read_to_string(path)?;
    let doc: Value = serde_yaml::from_str(&contents)
        .map_err(|e| ParamsError::Parse { path: path.to_path_buf(), source: e })?;

    let configs = match doc {
        Value::Mapping(m) => vec![m],
        Value::Sequence(entries) => {
            let mut configs = Vec::with_capacity(entries.len());
            for (index, entry) in entries.into_iter().enumerate() {
                match entry {
                    Value::Mapping(m) => configs.push(m),
                    _ => {
                        return Err(ParamsError::InvalidEntry {
                            path: path.to_path_buf(),
                            index,
                        })
                    }
                }
            }
            configs
        }
        Value::Null => vec![],
        _ => return Err(ParamsError::InvalidDocument { path: path.to_path_buf() }),
    };

    let file_name = path
        .file_name()
        .unwrap_or_else(|| path.as_os_str())
        .to_string_lossy()
        .into_owned();

    Ok(ParamFile { path: path.to_path_buf(), file_name, configs })
}

/// List every `*.yaml` parameter file path under `dir`, sorted by file name.
///
/// Returns `ParamsError::DirNotFound` if the directory is absent.
pub fn list_param_paths(dir: &Path) -> Result<Vec<PathBuf>, ParamsError> {
    if !dir.is_dir() {
        return Err(ParamsError::DirNotFound { path: dir.to_path_buf() });
    }

    let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().map(|t| t.is_file()).unwrap_or(false))
        .map(|e| e.path())
        .filter(|p| p.extension().and_then(|s| s.to_str()) == Some("yaml"))
        .collect();
    paths.sort();
    Ok(paths)
}

/// Load and parse every parameter file under `dir`, sorted by file name.
///
/// Any parse failure aborts the whole load — callers wanting per-file
/// isolation should use [`list_param_paths`] and parse one file at a time.
pub fn load_param_dir(dir: &Path) -> Result<Vec<ParamFile>, ParamsError> {
    list_param_paths(dir)?.iter().map(|p| parse_param_file(p)).collect()
}

/// Fetch a required string field from a configuration.
pub fn str_field<'a>(
    config: &'a Mapping,
    field: &'static str,
    path: &Path,
) -> Result<&'a str, ParamsError> {
    let value = config
        .get(field)
        .ok_or_else(|| ParamsError::MissingField { path: path.to_path_buf(), field })?;
    value
        .as_str()
        .ok_or_else(|| ParamsError::NonStringField { path: path.to_path_buf(), field })
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
