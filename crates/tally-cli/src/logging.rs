//! Tracing subscriber setup

use crate::error::{CliError, CliResult};
use tracing_subscriber::EnvFilter;

/// Default filter directive for a verbosity count
#[must_use]
pub fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Install the global fmt subscriber on stderr
///
/// `RUST_LOG` takes precedence over the verbosity flag.
pub fn init(verbose: u8) -> CliResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| CliError::logging(e.to_string()))
}
