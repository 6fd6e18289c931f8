//! The structured log record handed to the formatter.

use std::collections::HashMap;
use std::panic::Location;

use crate::level::Level;
use crate::value::FieldValue;

/// Source location a log call originated from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallSite {
    pub file: String,
    pub line: u32,
}

impl CallSite {
    pub fn new(file: impl Into<String>, line: u32) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }

    /// Call-site of a `#[track_caller]` location.
    pub fn from_location(location: &Location<'_>) -> Self {
        Self::new(location.file().replace('\\', "/"), location.line())
    }
}

/// Key/value fields attached to a record.
///
/// Iteration order is unspecified; the formatter sorts keys itself.
pub type Fields = HashMap<String, FieldValue>;

/// One log entry: what happened, when, where, and with what data.
#[derive(Debug, Clone)]
pub struct LogRecord {
    pub level: Level,
    pub timestamp: jiff::Timestamp,
    pub message: String,
    pub call_site: Option<CallSite>,
    pub fields: Fields,
}

impl LogRecord {
    /// A record with no call-site and no fields.
    pub fn new(level: Level, timestamp: jiff::Timestamp, message: impl Into<String>) -> Self {
        Self {
            level,
            timestamp,
            message: message.into(),
            call_site: None,
            fields: Fields::new(),
        }
    }

    #[must_use]
    pub fn with_call_site(mut self, file: impl Into<String>, line: u32) -> Self {
        self.call_site = Some(CallSite::new(file, line));
        self
    }

    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }
}
