//! The worked example run by the `tally` binary

use crate::commands::Cli;
use crate::error::CliResult;
use std::io::Write;
use std::thread;
use std::time::Duration;
use tally::{check, check_eq, check_gt, check_ne, RunReport, RunSummary, SummaryConfig};

/// Resolve the summary configuration from the process environment
pub fn build_config(cli: &Cli) -> CliResult<SummaryConfig> {
    build_config_with(cli, |key| std::env::var(key).ok())
}

/// Resolve the summary configuration; `--color` skips the environment
pub fn build_config_with<F>(cli: &Cli, lookup: F) -> CliResult<SummaryConfig>
where
    F: Fn(&str) -> Option<String>,
{
    match cli.color {
        Some(color) => Ok(SummaryConfig::new().with_color(color.into())),
        None => Ok(SummaryConfig::from_env_vars(lookup)?),
    }
}

/// Run the four-assertion example against `summary` and finalize it
///
/// Two of the four checks fail, so the report carries two failures.
pub fn run_worked_example<W: Write>(mut summary: RunSummary<W>, delay: Duration) -> RunReport {
    let a = 5;
    let b = 10;

    check_eq!(summary, 6, a);
    check_gt!(summary, b, a);
    check_ne!(summary, 5, b);
    check!(summary, a == b);

    if !delay.is_zero() {
        tracing::info!(?delay, "delaying finalization");
        thread::sleep(delay);
    }
    summary.finish().unwrap_or_else(|| summary.report())
}

/// Full CLI run: configure, execute, export
pub fn run(cli: &Cli) -> CliResult<RunReport> {
    let config = build_config(cli)?;
    let summary = RunSummary::with_config(config);
    let report = run_worked_example(summary, Duration::from_millis(cli.delay_ms));
    if let Some(path) = &cli.json {
        report.write_json(path)?;
        tracing::info!(path = %path.display(), "report written");
    }
    Ok(report)
}
