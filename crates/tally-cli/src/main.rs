//! `tally` binary entry point

use clap::Parser;
use std::process::ExitCode;
use tally_cli::{logging, runner, Cli};

/// Exit code for configuration or export errors, distinct from failed checks
const ERROR_EXIT: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("Error: {e}");
        return ExitCode::from(ERROR_EXIT);
    }

    match runner::run(&cli) {
        Ok(report) => report.exit_code(),
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(ERROR_EXIT)
        }
    }
}
