//! End-to-end run: configuration, input, aggregation, output

use crate::app::config::AppConfig;
use crate::cli::Cli;
use crate::config::{FileConfig, RunConfig};
use crate::input::{resolve_inputs, LogLines, STDIN_ARG};
use crate::trace::{Counter, RunStats, Table};
use anyhow::{Context, Result};
use std::fmt::Write as _;
use std::path::PathBuf;
use tracing::info;

/// Outcome of a completed run
#[derive(Debug)]
pub struct RunReport {
    pub table: Table,
    pub stats: RunStats,
    pub output_path: PathBuf,
}

/// Reads the configured log(s), bins them and writes the table
pub fn execute(cli: &Cli, app: &AppConfig) -> Result<RunReport> {
    let explicit_config = cli.config.as_deref().map(|p| app.resolve(p));
    let mut file = FileConfig::discover(explicit_config.as_deref(), &app.working_dir)?;
    file.merge_env_vars();
    let config = RunConfig::resolve(file, &cli.overrides());

    let log_path = app.resolve(&config.log_path);
    let fallbacks: Vec<PathBuf> = cli
        .inputs
        .iter()
        .map(|p| {
            if p.as_os_str() == STDIN_ARG {
                p.clone()
            } else {
                app.resolve(p)
            }
        })
        .collect();
    let sources = resolve_inputs(&log_path, &fallbacks)?;
    info!(
        "Reading {}",
        sources
            .iter()
            .map(|s| s.label())
            .collect::<Vec<_>>()
            .join(", ")
    );

    let (table, stats) = config.aggregator()?.run_lines(LogLines::new(sources))?;
    info!(
        "Read {} lines: {} events, {} counted, {} filtered, {} skipped",
        stats.lines_read,
        stats.events_accepted,
        stats.events_counted,
        stats.lines_filtered,
        stats.lines_skipped
    );

    let output_path = app.resolve(&config.output_path);
    table
        .save(&output_path)
        .with_context(|| format!("Failed to write table with {} rows", table.len()))?;
    info!("Wrote {} rows to {}", table.len(), output_path.display());

    Ok(RunReport {
        table,
        stats,
        output_path,
    })
}

/// Text printed to stdout after a run
pub fn render_report(report: &RunReport, quiet: bool, summary: bool) -> String {
    let mut out = String::new();
    if !quiet {
        let _ = writeln!(out, "--- Read Logfile ---");
        let _ = write!(out, "{}", report.table);
        let _ = writeln!(out, " ");
    }
    if summary {
        let totals = report.table.totals();
        for counter in Counter::ALL {
            let _ = writeln!(out, "{}: {}", counter.name(), totals.get(counter));
        }
    }
    out
}
