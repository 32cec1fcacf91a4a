//! Generation pipeline: load template → enumerate parameters → render → write.
//!
//! This is the canonical entrypoint for `stackgen render`. The pass is a
//! single sequential loop over parameter files (sorted) and the
//! configurations inside each one. The default propagation policy is fail
//! fast: the first error aborts the run and already-written files stay in
//! place. `JobConfig::keep_going` switches to per-file isolation — a failing
//! parameter file is recorded and the remaining files still process.

use std::collections::HashMap;
use std::path::PathBuf;

use stackgen_core::{
    naming::{output_file_name, stack_name},
    params::{list_param_paths, parse_param_file, ParamFile},
    CollisionPolicy, JobConfig, StackName,
};
use stackgen_renderer::{RenderContext, TemplateEngine};

use crate::error::{io_err, EmitError};
use crate::writer::{atomic_write, WriteResult};

/// One rendered-and-written output.
#[derive(Debug)]
pub struct GeneratedFile {
    /// Derived stack name.
    pub stack_name: StackName,
    /// Write outcome with the output path.
    pub write: WriteResult,
}

/// Outcome for a single parameter file.
#[derive(Debug)]
pub struct FileReport {
    /// Source parameter file.
    pub source: PathBuf,
    /// Outputs produced from this file, in configuration order. Kept even
    /// when a later configuration in the same file fails.
    pub outputs: Vec<GeneratedFile>,
    /// Set when the file failed under `keep_going`.
    pub error: Option<EmitError>,
}

/// Summary of a whole generation run.
#[derive(Debug)]
pub struct RunSummary {
    /// One report per parameter file, in processing order.
    pub reports: Vec<FileReport>,
}

impl RunSummary {
    /// Number of files actually written.
    pub fn written(&self) -> usize {
        self.count(|w| matches!(w, WriteResult::Written { .. }))
    }

    /// Number of outputs skipped because the disk content already matched.
    pub fn unchanged(&self) -> usize {
        self.count(|w| matches!(w, WriteResult::Unchanged { .. }))
    }

    /// Number of outputs a dry run would have written.
    pub fn would_write(&self) -> usize {
        self.count(|w| matches!(w, WriteResult::WouldWrite { .. }))
    }

    /// Number of parameter files that failed (non-empty only under `keep_going`).
    pub fn failed_files(&self) -> usize {
        self.reports.iter().filter(|r| r.error.is_some()).count()
    }

    fn count(&self, pred: impl Fn(&WriteResult) -> bool) -> usize {
        self.reports
            .iter()
            .flat_map(|r| r.outputs.iter())
            .filter(|g| pred(&g.write))
            .count()
    }
}

/// Run the generation pipeline for a job.
///
/// Loads the template once, then renders and writes every configuration in
/// every parameter file. With `dry_run` nothing touches the filesystem, not
/// even the output directory.
pub fn run(job: &JobConfig, dry_run: bool) -> Result<RunSummary, EmitError> {
    let engine = TemplateEngine::from_file(&job.template_path)?;
    let paths = list_param_paths(&job.params_dir)?;

    if !dry_run {
        std::fs::create_dir_all(&job.output_dir).map_err(|e| io_err(&job.output_dir, e))?;
    }

    // Output path → parameter file that first produced it.
    let mut seen: HashMap<PathBuf, PathBuf> = HashMap::new();

    let mut reports = Vec::with_capacity(paths.len());
    for path in &paths {
        // Parse inside the loop so keep_going also isolates malformed YAML.
        // Outputs written before a mid-file failure stay in the report so the
        // caller can still account for them.
        let mut outputs = Vec::new();
        let outcome = parse_param_file(path)
            .map_err(EmitError::from)
            .and_then(|file| generate_file(job, &engine, &file, dry_run, &mut seen, &mut outputs));
        match outcome {
            Ok(()) => {
                reports.push(FileReport { source: path.clone(), outputs, error: None });
            }
            Err(err) if job.keep_going => {
                tracing::warn!("skipping {}: {err}", path.display());
                reports.push(FileReport { source: path.clone(), outputs, error: Some(err) });
            }
            Err(err) => return Err(err),
        }
    }

    Ok(RunSummary { reports })
}

fn generate_file(
    job: &JobConfig,
    engine: &TemplateEngine,
    file: &ParamFile,
    dry_run: bool,
    seen: &mut HashMap<PathBuf, PathBuf>,
    outputs: &mut Vec<GeneratedFile>,
) -> Result<(), EmitError> {
    outputs.reserve(file.configs.len());
    for config in &file.configs {
        let name = stack_name(job.naming, &job.stack_prefix, file, config)?;
        let path = job.output_dir.join(output_file_name(&name));

        if let Some(first) = seen.get(&path) {
            match job.on_collision {
                CollisionPolicy::Fail => {
                    return Err(EmitError::Collision {
                        path,
                        first: first.clone(),
                        second: file.path.clone(),
                    })
                }
                CollisionPolicy::Overwrite => {
                    tracing::debug!(
                        "overwriting {} (first derived from {})",
                        path.display(),
                        first.display()
                    );
                }
            }
        }

        let ctx = RenderContext::from_config(config)?;
        let content = engine.render(&ctx)?;
        let write = atomic_write(&path, &content, dry_run)?;

        seen.entry(path).or_insert_with(|| file.path.clone());
        outputs.push(GeneratedFile { stack_name: name, write });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
