//! Log level representation with parsing, labels, and colors.
//!
//! The five core levels (debug, info, warn, error, fatal) plus the `trace`
//! and `panic` extension levels understood by logrus-style emitters.

use std::fmt;
use std::str::FromStr;

use crate::error::LogError;
use crate::palette::Color;

/// Canonical log level enumeration.
///
/// Ordered by severity (ascending) for `>=` filtering via [`Ord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
    Panic,
}

impl Level {
    /// All levels, least severe first.
    pub const ALL: [Self; 7] = [
        Self::Trace,
        Self::Debug,
        Self::Info,
        Self::Warn,
        Self::Error,
        Self::Fatal,
        Self::Panic,
    ];

    /// Upper-case level name (e.g., `"INFO"`).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Trace => "TRACE",
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
            Self::Fatal => "FATAL",
            Self::Panic => "PANIC",
        }
    }

    /// Bracketed label for the level column.
    ///
    /// The widths are deliberately uneven and must stay that way: `INFO` is
    /// padded out to the width of the six-column labels, `WARN` carries no
    /// interior padding, and every other level sits in a six-character field.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Info => "[ INFO  ]",
            Self::Warn => "[WARN]",
            Self::Trace => "[ TRACE ]",
            Self::Debug => "[ DEBUG ]",
            Self::Error => "[ ERROR ]",
            Self::Fatal => "[ FATAL ]",
            Self::Panic => "[ PANIC ]",
        }
    }

    /// Color used for the label, separators and field keys.
    ///
    /// Levels outside the core set fall back to the terminal default.
    pub const fn color(self) -> Color {
        match self {
            Self::Debug => Color::Cyan,
            Self::Info => Color::Green,
            Self::Warn => Color::Yellow,
            Self::Error | Self::Fatal | Self::Panic => Color::Red,
            Self::Trace => Color::Default,
        }
    }

    /// Parse a string into a [`Level`], case-insensitive.
    ///
    /// Returns `None` for unrecognized strings.
    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "trace" | "trc" => Some(Self::Trace),
            "debug" | "dbg" => Some(Self::Debug),
            "info" | "inf" | "information" => Some(Self::Info),
            "warn" | "warning" | "wrn" => Some(Self::Warn),
            "error" | "err" => Some(Self::Error),
            "fatal" | "critical" | "crit" => Some(Self::Fatal),
            "panic" | "emerg" | "emergency" => Some(Self::Panic),
            _ => None,
        }
    }

    /// Parse a level from a JSON value (string names only).
    pub fn from_json_value(value: &serde_json::Value) -> Option<Self> {
        value.as_str().and_then(Self::from_str_loose)
    }
}

impl FromStr for Level {
    type Err = LogError;

    /// Strict parse for configured levels: the level names (any case) plus
    /// `warning`. Abbreviations accepted in log input are rejected here.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            "fatal" => Ok(Self::Fatal),
            "panic" => Ok(Self::Panic),
            _ => Err(LogError::InvalidLevel(s.to_string())),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
