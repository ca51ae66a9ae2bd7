//! Console output formatting
//!
//! Colour is decoration only: with styling disabled, every line is exactly
//! the plain diagnostic or summary text.

use crate::config::ColorChoice;
use crate::recorder::AssertionResult;
use crate::summary::RunReport;
use console::style;
use std::io::Write;

/// Line styling resolved for one sink
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Palette {
    use_color: bool,
}

impl Palette {
    /// Palette for the stderr terminal
    pub(crate) fn for_stderr(choice: ColorChoice) -> Self {
        Self {
            use_color: choice.should_color(console::colors_enabled_stderr()),
        }
    }

    /// Palette for an injected writer, never treated as a terminal
    pub(crate) const fn for_writer(choice: ColorChoice) -> Self {
        Self {
            use_color: choice.should_color(false),
        }
    }

    pub(crate) const fn use_color(self) -> bool {
        self.use_color
    }

    /// Diagnostic line for a failed assertion
    pub(crate) fn failure_line(self, result: &AssertionResult) -> String {
        if !self.use_color {
            return result.to_string();
        }
        let label = style(format!("{} failed: ", result.kind.label()))
            .red()
            .force_styling(true);
        let number = style("failure number: ").red().force_styling(true);
        format!(
            "{label}{} in file {} at line {}; {number}{};",
            result.expression,
            result.file,
            result.line,
            result.failure_number.unwrap_or_default()
        )
    }

    /// The four end-of-run summary lines
    pub(crate) fn summary_lines(self, report: &RunReport) -> [String; 4] {
        let plain = report.lines();
        if !self.use_color {
            return plain;
        }
        let [total, passed, failed, time] = plain;
        [
            style(total).cyan().force_styling(true).to_string(),
            style(passed).green().force_styling(true).to_string(),
            style(failed).red().force_styling(true).to_string(),
            style(time).yellow().force_styling(true).to_string(),
        ]
    }
}

/// Write one line, logging instead of failing when the sink is broken
pub(crate) fn write_line<W: Write>(writer: &mut W, line: &str) {
    if let Err(e) = writeln!(writer, "{line}").and_then(|()| writer.flush()) {
        tracing::warn!(error = %e, "failed to write tally output");
    }
}
