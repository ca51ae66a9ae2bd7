//! Tally CLI: reference test entry point
//!
//! ## Usage
//!
//! ```bash
//! tally                          # run the worked example, exit 1 on failures
//! tally --color never            # plain diagnostics
//! tally --json target/run.json   # also export the final counts
//! ```

#![warn(missing_docs)]

pub mod commands;
pub mod error;
pub mod logging;
pub mod runner;

pub use commands::{Cli, ColorArg};
pub use error::{CliError, CliResult};
