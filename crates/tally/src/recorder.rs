//! Assertion recorder
//!
//! Four assertion kinds, each recorded against an explicit
//! [`RunSummary`](crate::RunSummary). A failed assertion never aborts the
//! run: it bumps the failure counter and writes one diagnostic line, and the
//! caller carries on with the next check.
//!
//! ## Example
//!
//! ```
//! use tally::{check, check_eq, check_gt, check_ne, RunSummary, SummaryConfig};
//!
//! let mut out = Vec::new();
//! {
//!     let mut summary = RunSummary::with_writer(&mut out, SummaryConfig::new());
//!     let a = 5;
//!     let b = 10;
//!
//!     check_eq!(summary, 6, a);
//!     check_gt!(summary, b, a);
//!     check_ne!(summary, 5, b);
//!     check!(summary, a == b);
//! }
//! let text = String::from_utf8(out).unwrap();
//! assert!(text.contains("TestEqual failed: 6 == a in file"));
//! assert!(text.contains("Failed Tests: 2"));
//! ```

use std::fmt;

/// The kind of check an assertion performs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssertionKind {
    /// Boolean expression must hold
    Expression,
    /// `expected == received`
    Equal,
    /// `expected != received`
    Unequal,
    /// `expected > received`
    Larger,
}

impl AssertionKind {
    /// Label used at the start of a diagnostic line
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Expression => "TestExpression",
            Self::Equal => "TestEqual",
            Self::Unequal => "TestUnEqual",
            Self::Larger => "TestLarger",
        }
    }
}

impl fmt::Display for AssertionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of a single recorded assertion
///
/// Transient: the summary keeps only counters, never the results themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssertionResult {
    /// Which check was performed
    pub kind: AssertionKind,
    /// Whether the predicate held
    pub passed: bool,
    /// Source text of the operand expression(s)
    pub expression: &'static str,
    /// Source file of the call site
    pub file: &'static str,
    /// Source line of the call site
    pub line: u32,
    /// 1-based failure index within the run, set only on failure
    pub failure_number: Option<usize>,
}

impl AssertionResult {
    /// Check if the assertion passed
    #[must_use]
    pub const fn is_passed(&self) -> bool {
        self.passed
    }

    /// Check if the assertion failed
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        !self.passed
    }
}

/// Renders the uncoloured diagnostic line for a failure.
///
/// `TestEqual failed: 6 == a in file main.rs at line 12; failure number: 1;`
impl fmt::Display for AssertionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} failed: {} in file {} at line {}; failure number: {};",
            self.kind.label(),
            self.expression,
            self.file,
            self.line,
            self.failure_number.unwrap_or_default()
        )
    }
}

/// Record that a boolean expression holds.
///
/// `check!(summary, expr)` evaluates `expr` once and records a
/// `TestExpression` assertion. Returns the [`AssertionResult`].
#[macro_export]
macro_rules! check {
    ($summary:expr, $expression:expr $(,)?) => {{
        let passed: bool = $expression;
        $summary.record(
            $crate::AssertionKind::Expression,
            passed,
            ::core::stringify!($expression),
            ::core::file!(),
            ::core::line!(),
        )
    }};
}

/// Record that `expected == received`.
///
/// Each operand is evaluated exactly once.
#[macro_export]
macro_rules! check_eq {
    ($summary:expr, $expected:expr, $received:expr $(,)?) => {
        match (&$expected, &$received) {
            (expected, received) => {
                let passed = *expected == *received;
                $summary.record(
                    $crate::AssertionKind::Equal,
                    passed,
                    ::core::concat!(
                        ::core::stringify!($expected),
                        " == ",
                        ::core::stringify!($received)
                    ),
                    ::core::file!(),
                    ::core::line!(),
                )
            }
        }
    };
}

/// Record that `expected != received`.
#[macro_export]
macro_rules! check_ne {
    ($summary:expr, $expected:expr, $received:expr $(,)?) => {
        match (&$expected, &$received) {
            (expected, received) => {
                let passed = *expected != *received;
                $summary.record(
                    $crate::AssertionKind::Unequal,
                    passed,
                    ::core::concat!(
                        ::core::stringify!($expected),
                        " != ",
                        ::core::stringify!($received)
                    ),
                    ::core::file!(),
                    ::core::line!(),
                )
            }
        }
    };
}

/// Record that `expected > received`.
///
/// Note the operand order: `check_gt!(s, 10, 5)` passes.
#[macro_export]
macro_rules! check_gt {
    ($summary:expr, $expected:expr, $received:expr $(,)?) => {
        match (&$expected, &$received) {
            (expected, received) => {
                let passed = *expected > *received;
                $summary.record(
                    $crate::AssertionKind::Larger,
                    passed,
                    ::core::concat!(
                        ::core::stringify!($expected),
                        " > ",
                        ::core::stringify!($received)
                    ),
                    ::core::file!(),
                    ::core::line!(),
                )
            }
        }
    };
}
