//! Result and error types for Tally.
//!
//! A failed assertion is not an error: it is counted on the
//! [`RunSummary`](crate::RunSummary) and reported, never propagated.
//! `TallyError` covers the surfaces around the recorder (configuration and
//! report export).

use thiserror::Error;

/// Result type for Tally operations
pub type TallyResult<T> = Result<T, TallyError>;

/// Errors that can occur in Tally
#[derive(Debug, Error)]
pub enum TallyError {
    /// Unknown colour keyword
    #[error("Invalid color choice '{value}' (expected auto, always or never)")]
    InvalidColorChoice {
        /// Value that failed to parse
        value: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TallyError {
    /// Create an invalid colour choice error
    #[must_use]
    pub fn invalid_color_choice(value: impl Into<String>) -> Self {
        Self::InvalidColorChoice {
            value: value.into(),
        }
    }
}
