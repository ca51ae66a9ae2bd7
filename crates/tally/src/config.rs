//! Summary configuration

use crate::result::{TallyError, TallyResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Environment variable selecting the colour mode (`auto`, `always`, `never`)
pub const COLOR_ENV: &str = "TALLY_COLOR";

/// Environment variable from the `NO_COLOR` convention
pub const NO_COLOR_ENV: &str = "NO_COLOR";

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Always use colors
    Always,
    /// Use colors when output is a terminal
    #[default]
    Auto,
    /// Never use colors
    Never,
}

impl ColorChoice {
    /// Should use colors, given whether the sink is an attended terminal
    #[must_use]
    pub const fn should_color(self, is_terminal: bool) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => is_terminal,
        }
    }
}

impl FromStr for ColorChoice {
    type Err = TallyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "always" => Ok(Self::Always),
            "auto" => Ok(Self::Auto),
            "never" => Ok(Self::Never),
            _ => Err(TallyError::invalid_color_choice(s)),
        }
    }
}

/// Configuration for a [`RunSummary`](crate::RunSummary)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryConfig {
    /// Color output choice
    pub color: ColorChoice,
}

impl SummaryConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set color choice
    #[must_use]
    pub const fn with_color(mut self, color: ColorChoice) -> Self {
        self.color = color;
        self
    }

    /// Build configuration from the process environment
    ///
    /// `TALLY_COLOR` wins over `NO_COLOR`.
    pub fn from_env() -> TallyResult<Self> {
        Self::from_env_vars(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    pub fn from_env_vars<F>(lookup: F) -> TallyResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let color = match lookup(COLOR_ENV) {
            Some(value) => value.parse()?,
            None if lookup(NO_COLOR_ENV).is_some_and(|v| !v.is_empty()) => ColorChoice::Never,
            None => ColorChoice::Auto,
        };
        Ok(Self::new().with_color(color))
    }
}
