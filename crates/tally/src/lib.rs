//! Tally: inline assertions with collected failures and an end-of-run summary
//!
//! Tally is meant to be dropped into a program's test entry point. The entry
//! point owns one [`RunSummary`]; each `check*` macro evaluates its operands
//! once, counts the assertion, and on failure prints a diagnostic naming the
//! source text, file, line and running failure number. Failures never abort
//! the run. When the summary is finished (or dropped) it prints the totals
//! and the elapsed wall-clock time.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  test entry point (host)                                     │
//! │                                                              │
//! │   check!/check_eq!/check_ne!/check_gt!                       │
//! │        │  evaluate once, stringify!, file!, line!            │
//! │        ▼                                                     │
//! │   RunSummary::record ──► counters ──► failure line (stderr)  │
//! │        │                                                     │
//! │        ▼  finish() or drop                                   │
//! │   RunReport ──► Total / Passed / Failed / Running Time       │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```no_run
//! use tally::{check, check_eq, RunSummary};
//! use std::process::ExitCode;
//!
//! fn main() -> ExitCode {
//!     let mut summary = RunSummary::new();
//!     check_eq!(summary, 2 + 2, 4);
//!     check!(summary, "tally".starts_with('t'));
//!     summary.finish().map_or(ExitCode::SUCCESS, |report| report.exit_code())
//! }
//! ```

#![warn(missing_docs)]

mod config;
mod output;
mod recorder;
mod result;
mod summary;

pub use config::{ColorChoice, SummaryConfig, COLOR_ENV, NO_COLOR_ENV};
pub use recorder::{AssertionKind, AssertionResult};
pub use result::{TallyError, TallyResult};
pub use summary::{RunReport, RunSummary, SummaryState};

/// Prelude for convenient imports
pub mod prelude {
    pub use super::{
        check, check_eq, check_gt, check_ne, AssertionKind, AssertionResult, ColorChoice,
        RunReport, RunSummary, SummaryConfig, TallyError, TallyResult,
    };
}
