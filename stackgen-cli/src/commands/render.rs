//! `stackgen render` — render every configuration and write the outputs.

use anyhow::{bail, Context, Result};
use clap::Args;
use colored::Colorize;

use stackgen_emit::{pipeline, FileReport, WriteResult};

use crate::JobOpts;

/// Arguments for `stackgen render`.
#[derive(Args, Debug)]
pub struct RenderArgs {
    #[command(flatten)]
    pub job: JobOpts,

    /// Show what would be written without actually writing any files.
    #[arg(long)]
    pub dry_run: bool,

    /// Continue with the remaining parameter files after one fails.
    #[arg(long)]
    pub keep_going: bool,
}

impl RenderArgs {
    pub fn run(self) -> Result<()> {
        let mut job = self.job.to_job();
        job.keep_going = self.keep_going;

        let summary = pipeline::run(&job, self.dry_run)
            .with_context(|| format!("render failed for '{}'", job.params_dir.display()))?;

        for report in &summary.reports {
            print_report(report, self.dry_run);
        }

        if summary.reports.is_empty() {
            println!("No parameter files found in '{}'.", job.params_dir.display());
            return Ok(());
        }

        if self.dry_run {
            println!(
                "[dry-run] ~ {} would write, {} unchanged, {} failed",
                summary.would_write(),
                summary.unchanged(),
                summary.failed_files(),
            );
        } else {
            println!(
                "✓ {} written, {} unchanged, {} failed",
                summary.written(),
                summary.unchanged(),
                summary.failed_files(),
            );
        }

        if summary.failed_files() > 0 {
            bail!("{} parameter file(s) failed", summary.failed_files());
        }
        Ok(())
    }
}

fn print_report(report: &FileReport, dry_run: bool) {
    let source = report
        .source
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| report.source.display().to_string());

    // A file can fail partway through; the outputs it did produce still get
    // their confirmation lines before the error.
    let prefix = if dry_run { "[dry-run] " } else { "" };
    for generated in &report.outputs {
        match &generated.write {
            WriteResult::Written { path } => {
                println!("{prefix}✓ Generated: {} from {source}", path.display());
            }
            WriteResult::WouldWrite { path } => {
                println!("{prefix}~ Would generate: {} from {source}", path.display());
            }
            WriteResult::Unchanged { path } => {
                println!("{prefix}· Unchanged: {} from {source}", path.display());
            }
        }
    }

    if let Some(err) = &report.error {
        println!("{} {source}: {err}", "✗".red());
    }
}
