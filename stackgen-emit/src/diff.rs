//! Dry-run unified diff support for `stackgen diff`.

use std::collections::HashMap;
use std::path::PathBuf;

use similar::TextDiff;

use stackgen_core::{
    naming::{output_file_name, stack_name},
    params::load_param_dir,
    CollisionPolicy, JobConfig,
};
use stackgen_renderer::{RenderContext, TemplateEngine};

use crate::error::EmitError;
use crate::writer::read_existing;

/// A single rendered file diff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDiff {
    pub path: PathBuf,
    pub unified_diff: String,
}

/// Render what `render` would write and compare it to current on-disk content.
///
/// No files are written. Outputs whose rendered content matches the disk are
/// omitted. Collisions follow the job's policy; under `overwrite` the last
/// rendered content is the one diffed, matching what a real run would leave.
pub fn diff_outputs(job: &JobConfig) -> Result<Vec<FileDiff>, EmitError> {
    let engine = TemplateEngine::from_file(&job.template_path)?;
    let files = load_param_dir(&job.params_dir)?;

    // Ordered rendered outputs with last-write-wins collision handling.
    let mut rendered: Vec<(PathBuf, String)> = Vec::new();
    let mut index: HashMap<PathBuf, usize> = HashMap::new();
    let mut first_source: HashMap<PathBuf, PathBuf> = HashMap::new();

    for file in &files {
        for config in &file.configs {
            let name = stack_name(job.naming, &job.stack_prefix, file, config)?;
            let path = job.output_dir.join(output_file_name(&name));
            let ctx = RenderContext::from_config(config)?;
            let content = normalize_line_endings(&engine.render(&ctx)?);

            if let Some(&i) = index.get(&path) {
                if job.on_collision == CollisionPolicy::Fail {
                    return Err(EmitError::Collision {
                        first: first_source[&path].clone(),
                        second: file.path.clone(),
                        path,
                    });
                }
                rendered[i].1 = content;
            } else {
                index.insert(path.clone(), rendered.len());
                first_source.insert(path.clone(), file.path.clone());
                rendered.push((path, content));
            }
        }
    }

    let mut diffs = Vec::new();
    for (path, content) in rendered {
        let existing = read_existing(&path)?
            .map(|c| normalize_line_endings(&c))
            .unwrap_or_default();
        if existing == content {
            continue;
        }

        let relative = path.strip_prefix(&job.output_dir).unwrap_or(path.as_path());
        let old_header = format!("a/{}", relative.display());
        let new_header = format!("b/{}", relative.display());
        let unified = TextDiff::from_lines(&existing, &content)
            .unified_diff()
            .header(&old_header, &new_header)
            .context_radius(3)
            .to_string();

        diffs.push(FileDiff { path, unified_diff: unified });
    }

    Ok(diffs)
}

fn normalize_line_endings(content: &str) -> String {
    content.replace("\r\n", "\n")
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use crate::pipeline::run;

    use super::*;

    const TEMPLATE: &str = "schema: {{ schema_name }}\ntable: {{ table_name }}\n";

    fn setup() -> (TempDir, JobConfig) {
        let root = TempDir::new().unwrap();
        let template_path = root.path().join("stack.yaml.tera");
        fs::write(&template_path, TEMPLATE).unwrap();
        let params_dir = root.path().join("team_configs");
        fs::create_dir_all(&params_dir).unwrap();
        fs::write(
            params_dir.join("parameters_sales.yaml"),
            "schema_name: sales\ntable_name: orders\n",
        )
        .unwrap();
        let job = JobConfig::new(template_path, params_dir, root.path().join("output"));
        (root, job)
    }

    #[test]
    fn no_diffs_after_clean_run() {
        let (_root, job) = setup();
        run(&job, false).expect("render");
        let diffs = diff_outputs(&job).expect("diff");
        assert!(diffs.is_empty(), "freshly rendered outputs should have no diff");
    }

    #[test]
    fn local_edit_produces_unified_diff() {
        let (_root, job) = setup();
        run(&job, false).expect("render");

        let target = job.output_dir.join("lambda-eb-sales-orders.yaml");
        let edited = format!("{}manual tweak\n", fs::read_to_string(&target).unwrap());
        fs::write(&target, edited).unwrap();

        let diffs = diff_outputs(&job).expect("diff");
        assert_eq!(diffs.len(), 1);
        let diff = &diffs[0].unified_diff;
        assert!(diff.contains("--- a/lambda-eb-sales-orders.yaml"));
        assert!(diff.contains("+++ b/lambda-eb-sales-orders.yaml"));
        assert!(diff.contains("@@"));
        assert!(diff.contains("-manual tweak"));
    }

    #[test]
    fn never_rendered_outputs_diff_against_empty() {
        let (_root, job) = setup();
        let diffs = diff_outputs(&job).expect("diff");
        assert_eq!(diffs.len(), 1);
        assert!(diffs[0].unified_diff.contains("+schema: sales"));
        assert!(!job.output_dir.exists(), "diff must not create the output dir");
    }
}
