//! The logger value: a formatter bound to a level threshold and a writer.
//!
//! There is no global logger. Build one [`Logger`] at startup and pass it by
//! reference to whatever needs to emit lines.
//!
//! ```
//! use fogline::{Level, Logger, Palette};
//! use fogline::formatter::{Formatter, FormatterConfig};
//!
//! let formatter = Formatter::new(FormatterConfig::default(), Palette::Plain).unwrap();
//! let logger = Logger::new(formatter, Level::Info, true, Vec::new());
//!
//! logger.with_field("width", 80).with_field("height", 24).info("Map Settings");
//! logger.debug("below threshold, dropped");
//!
//! let out = String::from_utf8(logger.into_inner()).unwrap();
//! assert!(out.contains("Map Settings"));
//! assert!(out.contains("height⇒24 ¤ width⇒80"));
//! assert_eq!(out.lines().count(), 1);
//! ```

use std::borrow::Cow;
use std::io::Write;
use std::panic::Location;
use std::sync::{Mutex, PoisonError};

use crate::config::LoggingConfig;
use crate::error::LogError;
use crate::formatter::Formatter;
use crate::level::Level;
use crate::palette::Palette;
use crate::record::{CallSite, Fields, LogRecord};
use crate::session::SessionContext;
use crate::value::FieldValue;

/// Formats records and writes them to `W`.
///
/// The writer sits behind a mutex so a shared `&Logger` can be used from
/// several threads; each line is written with a single `write_all`.
#[derive(Debug)]
pub struct Logger<W: Write> {
    formatter: Formatter,
    min_level: Level,
    report_caller: bool,
    writer: Mutex<W>,
}

macro_rules! level_methods {
    ($($(#[$doc:meta])* $name:ident => $level:expr;)*) => {
        $(
            $(#[$doc])*
            #[track_caller]
            pub fn $name(self, message: &str) {
                self.emit($level, message, Location::caller());
            }
        )*
    };
}

macro_rules! logger_level_methods {
    ($($(#[$doc:meta])* $name:ident => $level:expr;)*) => {
        $(
            $(#[$doc])*
            #[track_caller]
            pub fn $name(&self, message: &str) {
                self.emit($level, message, Fields::new(), Location::caller());
            }
        )*
    };
}

impl<W: Write> Logger<W> {
    pub fn new(formatter: Formatter, min_level: Level, report_caller: bool, writer: W) -> Self {
        Self {
            formatter,
            min_level,
            report_caller,
            writer: Mutex::new(writer),
        }
    }

    /// Build a logger from the `[logging]` configuration.
    ///
    /// Fails on an unknown level name or an unusable timestamp pattern;
    /// no logger is produced in either case.
    pub fn from_config(
        config: &LoggingConfig,
        palette: Palette,
        writer: W,
    ) -> Result<Self, LogError> {
        let min_level: Level = config.level.parse()?;
        let formatter = Formatter::new(config.formatter_config(), palette)?;
        Ok(Self::new(formatter, min_level, config.report_caller, writer))
    }

    pub const fn formatter(&self) -> &Formatter {
        &self.formatter
    }

    pub const fn min_level(&self) -> Level {
        self.min_level
    }

    /// Whether records at `level` pass the threshold.
    pub fn enabled(&self, level: Level) -> bool {
        level >= self.min_level
    }

    /// Format and write `record` if its level passes the threshold.
    ///
    /// The call-site is left out when caller reporting is off.
    pub fn log(&self, record: &LogRecord) -> Result<(), LogError> {
        if !self.enabled(record.level) {
            return Ok(());
        }

        let record = if !self.report_caller && record.call_site.is_some() {
            Cow::Owned(LogRecord {
                call_site: None,
                ..record.clone()
            })
        } else {
            Cow::Borrowed(record)
        };

        let line = self.formatter.format(&record);
        self.write_bytes(line.as_bytes())
    }

    /// Write an already rendered line, followed by a newline.
    pub fn write_raw(&self, line: &str) -> Result<(), LogError> {
        let mut buf = String::with_capacity(line.len() + 1);
        buf.push_str(line);
        buf.push('\n');
        self.write_bytes(buf.as_bytes())
    }

    pub fn flush(&self) -> Result<(), LogError> {
        self.lock().flush()?;
        Ok(())
    }

    /// Consume the logger and hand back its writer.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Start an entry carrying one field.
    pub fn with_field(&self, key: impl Into<String>, value: impl Into<FieldValue>) -> Entry<'_, W> {
        Entry::new(self).with_field(key, value)
    }

    /// Start an entry carrying several fields.
    pub fn with_fields<K, V, I>(&self, fields: I) -> Entry<'_, W>
    where
        K: Into<String>,
        V: Into<FieldValue>,
        I: IntoIterator<Item = (K, V)>,
    {
        Entry::new(self).with_fields(fields)
    }

    /// Start an entry tagged with a `correlation_id` field.
    pub fn with_correlation_id(&self, id: impl Into<String>) -> Entry<'_, W> {
        self.with_field("correlation_id", id.into())
    }

    /// Start an entry carrying `session` as its `context` field.
    pub fn with_session(&self, session: &SessionContext) -> Entry<'_, W> {
        Entry::new(self).with_session(session)
    }

    logger_level_methods! {
        trace => Level::Trace;
        debug => Level::Debug;
        info => Level::Info;
        warn => Level::Warn;
        error => Level::Error;
        /// Logs at fatal level. The process keeps running.
        fatal => Level::Fatal;
        /// Logs at panic level. Does not unwind.
        panic => Level::Panic;
    }

    fn emit(&self, level: Level, message: &str, fields: Fields, location: &Location<'_>) {
        if !self.enabled(level) {
            return;
        }
        let record = LogRecord {
            level,
            timestamp: jiff::Timestamp::now(),
            message: message.to_string(),
            call_site: self.report_caller.then(|| CallSite::from_location(location)),
            fields,
        };
        if let Err(e) = self.log(&record) {
            eprintln!("fogline: failed to write log line: {e}");
        }
    }

    fn write_bytes(&self, bytes: &[u8]) -> Result<(), LogError> {
        self.lock().write_all(bytes)?;
        Ok(())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, W> {
        self.writer.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// A pending log line with fields attached.
///
/// Created by [`Logger::with_field`] and friends; consumed by one of the
/// level methods.
#[must_use = "an entry does nothing until a level method is called"]
pub struct Entry<'a, W: Write> {
    logger: &'a Logger<W>,
    fields: Fields,
}

impl<'a, W: Write> Entry<'a, W> {
    fn new(logger: &'a Logger<W>) -> Self {
        Self {
            logger,
            fields: Fields::new(),
        }
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn with_fields<K, V, I>(mut self, fields: I) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
        I: IntoIterator<Item = (K, V)>,
    {
        self.fields
            .extend(fields.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    pub fn with_correlation_id(self, id: impl Into<String>) -> Self {
        self.with_field("correlation_id", id.into())
    }

    pub fn with_session(self, session: &SessionContext) -> Self {
        self.with_field("context", session)
    }

    level_methods! {
        trace => Level::Trace;
        debug => Level::Debug;
        info => Level::Info;
        warn => Level::Warn;
        error => Level::Error;
        fatal => Level::Fatal;
        panic => Level::Panic;
    }

    fn emit(self, level: Level, message: &str, location: &Location<'_>) {
        self.logger.emit(level, message, self.fields, location);
    }
}
