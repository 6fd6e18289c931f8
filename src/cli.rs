//! Command-line argument definitions for `fogline`.
//!
//! Uses [`clap`] derive macros for argument parsing.

use clap::{Parser, ValueEnum};
use clap_complete::Shell;

use crate::level::Level;

/// Render JSON log lines from stdin as aligned, colorized text.
///
/// Reads logrus-style JSON log lines from stdin and writes one formatted
/// line per record to stdout. Non-JSON lines are passed through unchanged.
#[derive(Debug, Parser)]
#[command(name = "fogline", version, about, long_about = None)]
pub struct Cli {
    /// Control color output.
    ///
    /// `auto` enables colors only when stdout is a TTY and `NO_COLOR` is unset.
    #[arg(short = 'c', long, value_enum)]
    pub color: Option<ColorMode>,

    /// Minimum severity level to display.
    #[arg(short = 'l', long, value_parser = parse_level_arg)]
    pub level: Option<String>,

    /// Show the whole call-site path instead of its trailing segments.
    #[arg(long)]
    pub full_path: bool,

    /// Width of the call-site column.
    #[arg(short = 'w', long)]
    pub width: Option<usize>,

    /// Number of trailing path segments shown for call-sites.
    #[arg(long)]
    pub segments: Option<usize>,

    /// Timestamp display format (strftime syntax).
    #[arg(short = 't', long)]
    pub timestamp_format: Option<String>,

    /// Leave call-site information out of the output.
    #[arg(long)]
    pub no_caller: bool,

    /// Render timestamps in the system time zone instead of UTC.
    #[arg(long)]
    pub local_time: bool,

    /// Path to configuration file.
    #[arg(long)]
    pub config: Option<std::path::PathBuf>,

    /// Print shell completions and exit.
    #[arg(long, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

/// Color output mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Enable colors only when stdout is a TTY.
    Auto,
    /// Always enable colors.
    Always,
    /// Never enable colors.
    Never,
}

impl ColorMode {
    /// Parse a config-file color setting. Unknown values mean `auto`.
    pub fn from_config_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "always" => Self::Always,
            "never" => Self::Never,
            _ => Self::Auto,
        }
    }
}

/// Parse level argument as case-insensitive string.
fn parse_level_arg(s: &str) -> Result<String, String> {
    match s.parse::<Level>() {
        Ok(_) => Ok(s.to_lowercase()),
        Err(_) => Err(format!(
            "invalid level '{s}': expected one of trace, debug, info, warn, error, fatal, panic"
        )),
    }
}
