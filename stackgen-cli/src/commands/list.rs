//! `stackgen list` — show configurations and their derived stack names.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use stackgen_core::{
    naming::{output_file_name, stack_name},
    params::load_param_dir,
};

use crate::JobOpts;

/// Arguments for `stackgen list`.
#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub job: JobOpts,

    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Serialize)]
struct ConfigEntry {
    source: String,
    stack_name: String,
    output: String,
}

#[derive(Serialize)]
struct ListReportJson {
    parameter_files: usize,
    configurations: Vec<ConfigEntry>,
}

#[derive(Tabled)]
struct ListTableRow {
    #[tabled(rename = "source")]
    source: String,
    #[tabled(rename = "stack name")]
    stack_name: String,
    #[tabled(rename = "output")]
    output: String,
}

impl ListArgs {
    pub fn run(self) -> Result<()> {
        let job = self.job.to_job();
        let files = load_param_dir(&job.params_dir)
            .with_context(|| format!("failed to load '{}'", job.params_dir.display()))?;

        let mut entries = Vec::new();
        for file in &files {
            for config in &file.configs {
                let name = stack_name(job.naming, &job.stack_prefix, file, config)
                    .with_context(|| format!("cannot derive a name in '{}'", file.file_name))?;
                entries.push(ConfigEntry {
                    source: file.file_name.clone(),
                    stack_name: name.to_string(),
                    output: job.output_dir.join(output_file_name(&name)).display().to_string(),
                });
            }
        }

        if self.json {
            let payload = ListReportJson {
                parameter_files: files.len(),
                configurations: entries,
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&payload).context("failed to serialize list JSON")?
            );
            return Ok(());
        }

        println!(
            "stackgen v{} | {} parameter files | {} configurations",
            env!("CARGO_PKG_VERSION"),
            files.len(),
            entries.len(),
        );
        if entries.is_empty() {
            println!("No configurations found in '{}'.", job.params_dir.display());
            return Ok(());
        }

        println!("{}", format!("naming: {}", job.naming).bright_black());
        let rows: Vec<ListTableRow> = entries
            .into_iter()
            .map(|e| ListTableRow { source: e.source, stack_name: e.stack_name, output: e.output })
            .collect();
        let mut table = Table::new(rows);
        table.with(Style::rounded());
        println!("{table}");
        Ok(())
    }
}
