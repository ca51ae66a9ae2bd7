//! CLI argument definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tally::ColorChoice;

/// Tally: run the worked assertion example and print the run summary
#[derive(Parser, Debug)]
#[command(name = "tally")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Color output (auto, always, never); overrides TALLY_COLOR and NO_COLOR
    #[arg(long)]
    pub color: Option<ColorArg>,

    /// Also write the final report as JSON to this path
    #[arg(long, value_name = "PATH")]
    pub json: Option<PathBuf>,

    /// Milliseconds to wait before finalizing the run
    #[arg(long, default_value = "0", value_name = "N")]
    pub delay_ms: u64,
}

/// Color argument for CLI
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}
