//! Error types for `fogline`.
//!
//! Uses [`thiserror`] for ergonomic error derivation.

use thiserror::Error;

/// Errors that can occur while configuring or driving a logger.
///
/// Maps to CLI exit codes: configuration variants → exit 1,
/// [`Io`](Self::Io) → exit 2.
#[derive(Debug, Error)]
pub enum LogError {
    /// Configuration error (unreadable config file, bad flag combination).
    #[error("configuration error: {0}")]
    Config(String),

    /// The configured log level is not one of the known levels.
    #[error("invalid log level: {0:?} (expected one of trace, debug, info, warn, error, fatal, panic)")]
    InvalidLevel(String),

    /// The configured timestamp pattern cannot be rendered.
    #[error("invalid timestamp format {pattern:?}: {reason}")]
    TimestampFormat { pattern: String, reason: String },

    /// I/O error while writing to the output sink.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML deserialization error.
    #[error("config file error: {0}")]
    Toml(#[from] toml::de::Error),
}
