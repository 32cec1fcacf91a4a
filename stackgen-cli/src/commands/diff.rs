//! `stackgen diff` — show unified diffs for what render would write.

use anyhow::{Context, Result};
use clap::Args;

use stackgen_emit::diff_outputs;

use crate::JobOpts;

/// Arguments for `stackgen diff`.
#[derive(Args, Debug)]
pub struct DiffArgs {
    #[command(flatten)]
    pub job: JobOpts,
}

impl DiffArgs {
    pub fn run(self) -> Result<()> {
        let job = self.job.to_job();
        let diffs = diff_outputs(&job)
            .with_context(|| format!("diff failed for '{}'", job.params_dir.display()))?;

        if diffs.is_empty() {
            println!("No differences for '{}'.", job.output_dir.display());
            return Ok(());
        }

        for diff in diffs {
            print!("{}", diff.unified_diff);
            if !diff.unified_diff.ends_with('\n') {
                println!();
            }
        }

        Ok(())
    }
}
