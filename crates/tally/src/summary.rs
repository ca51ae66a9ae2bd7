//! Run summary lifecycle
//!
//! A [`RunSummary`] is created at the start of a test run, receives every
//! assertion through [`RunSummary::record`] (usually via the `check*` macros),
//! and prints the final report exactly once: either on an explicit
//! [`RunSummary::finish`] or when it is dropped.
//!
//! ```text
//!   new() ──► Active ──finish() / drop──► Finalized
//!               │ ▲
//!               └─┘ record()
//! ```
//!
//! Every mutation takes `&mut self`, so one summary is driven from one
//! thread. Hosts that assert from several threads must wrap the summary in
//! their own lock; none is provided here.

use crate::config::SummaryConfig;
use crate::output::{self, Palette};
use crate::recorder::{AssertionKind, AssertionResult};
use crate::result::TallyResult;
use console::Term;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;
use std::path::Path;
use std::process::ExitCode;
use std::time::{Duration, Instant};

/// Lifecycle state of a summary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryState {
    /// Accepting assertions
    Active,
    /// Report has been emitted
    Finalized,
}

/// Aggregate counts for one test run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    /// Assertions evaluated
    pub total: usize,
    /// Assertions that held
    pub passed: usize,
    /// Assertions that failed
    pub failed: usize,
    /// Wall-clock time since the summary was created
    #[serde(rename = "elapsed_ms", with = "elapsed_ms")]
    pub elapsed: Duration,
}

impl RunReport {
    /// Elapsed time in fractional milliseconds
    #[must_use]
    pub fn elapsed_ms(&self) -> f64 {
        duration_ms(self.elapsed)
    }

    /// Check if no assertion failed
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.failed == 0
    }

    /// Process exit code a host may return for this run
    #[must_use]
    pub fn exit_code(&self) -> ExitCode {
        if self.is_success() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }

    /// The four plain summary lines
    #[must_use]
    pub fn lines(&self) -> [String; 4] {
        [
            format!("Total Tests: {}", self.total),
            format!("Passed Tests: {}", self.passed),
            format!("Failed Tests: {}", self.failed),
            format!("Running Time: {}ms", self.elapsed_ms()),
        ]
    }

    /// Serialize the report as pretty JSON
    pub fn to_json(&self) -> TallyResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the report as JSON to `path`
    pub fn write_json(&self, path: &Path) -> TallyResult<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

fn duration_ms(duration: Duration) -> f64 {
    duration.as_nanos() as f64 / 1_000_000.0
}

mod elapsed_ms {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(elapsed: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(super::duration_ms(*elapsed))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let ms = f64::deserialize(deserializer)?;
        Duration::try_from_secs_f64(ms / 1000.0)
            .map_err(|e| D::Error::custom(format!("invalid elapsed_ms {ms}: {e}")))
    }
}

/// Pass/fail counters and start time for one test run
pub struct RunSummary<W: Write = Term> {
    total_tests: usize,
    failure_count: usize,
    start: Instant,
    state: SummaryState,
    palette: Palette,
    writer: W,
}

impl RunSummary<Term> {
    /// Create a summary reporting to stderr with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(SummaryConfig::default())
    }

    /// Create a summary reporting to stderr
    #[must_use]
    pub fn with_config(config: SummaryConfig) -> Self {
        Self::build(Term::stderr(), Palette::for_stderr(config.color))
    }
}

impl Default for RunSummary<Term> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> RunSummary<W> {
    /// Create a summary reporting to an arbitrary writer
    #[must_use]
    pub fn with_writer(writer: W, config: SummaryConfig) -> Self {
        Self::build(writer, Palette::for_writer(config.color))
    }

    fn build(writer: W, palette: Palette) -> Self {
        tracing::debug!(color = palette.use_color(), "tally run started");
        Self {
            total_tests: 0,
            failure_count: 0,
            start: Instant::now(),
            state: SummaryState::Active,
            palette,
            writer,
        }
    }

    /// Record one evaluated assertion
    ///
    /// Counts the assertion, and on failure counts it again as a failure and
    /// writes its diagnostic line. Never panics and never short-circuits the
    /// caller.
    pub fn record(
        &mut self,
        kind: AssertionKind,
        passed: bool,
        expression: &'static str,
        file: &'static str,
        line: u32,
    ) -> AssertionResult {
        self.total_tests += 1;

        let mut result = AssertionResult {
            kind,
            passed,
            expression,
            file,
            line,
            failure_number: None,
        };
        if passed {
            return result;
        }

        self.failure_count += 1;
        result.failure_number = Some(self.failure_count);
        tracing::debug!(
            kind = kind.label(),
            file,
            line,
            failure_number = self.failure_count,
            "assertion failed"
        );
        if self.state == SummaryState::Finalized {
            tracing::warn!(kind = kind.label(), file, line, "assertion recorded after finish");
        }
        let text = self.palette.failure_line(&result);
        output::write_line(&mut self.writer, &text);
        result
    }

    /// Assertions evaluated so far
    #[must_use]
    pub const fn total_tests(&self) -> usize {
        self.total_tests
    }

    /// Assertions failed so far
    #[must_use]
    pub const fn failure_count(&self) -> usize {
        self.failure_count
    }

    /// Assertions passed so far
    #[must_use]
    pub const fn passed_tests(&self) -> usize {
        self.total_tests - self.failure_count
    }

    /// Time since the summary was created
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Current lifecycle state
    #[must_use]
    pub const fn state(&self) -> SummaryState {
        self.state
    }

    /// Check if the report has already been emitted
    #[must_use]
    pub fn is_finalized(&self) -> bool {
        self.state == SummaryState::Finalized
    }

    /// Snapshot of the counters without finalizing
    #[must_use]
    pub fn report(&self) -> RunReport {
        RunReport {
            total: self.total_tests,
            passed: self.passed_tests(),
            failed: self.failure_count,
            elapsed: self.elapsed(),
        }
    }

    /// Emit the summary report and finalize
    ///
    /// Returns the report on the first call and `None` afterwards; the later
    /// drop does not print again.
    pub fn finish(&mut self) -> Option<RunReport> {
        if self.is_finalized() {
            return None;
        }
        let report = self.report();
        for line in self.palette.summary_lines(&report) {
            output::write_line(&mut self.writer, &line);
        }
        self.state = SummaryState::Finalized;
        tracing::info!(
            total = report.total,
            passed = report.passed,
            failed = report.failed,
            elapsed_ms = report.elapsed_ms(),
            "tally run finished"
        );
        Some(report)
    }
}

impl<W: Write> Drop for RunSummary<W> {
    fn drop(&mut self) {
        let _ = self.finish();
    }
}

impl<W: Write> fmt::Debug for RunSummary<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RunSummary")
            .field("total_tests", &self.total_tests)
            .field("failure_count", &self.failure_count)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
