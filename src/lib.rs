//! `fogline` — aligned, colorized single-line log rendering.
//!
//! Renders structured log records as one human-readable line each, with a
//! fixed-width call-site column and sorted key/value fields:
//!
//! ```text
//! [2024-01-02 ¤ 03:04:05] [ INFO  ] ►►► logging/logger.go:42   ►►► Map Settings ► [height⇒24 ¤ width⇒80]
//! ```
//!
//! # Example
//!
//! ```
//! use fogline::{Formatter, FormatterConfig, Level, LogRecord, Palette};
//!
//! let formatter = Formatter::new(FormatterConfig::default(), Palette::Plain).unwrap();
//! let record = LogRecord::new(Level::Info, "2024-01-02T03:04:05Z".parse().unwrap(), "Map Settings")
//!     .with_call_site("internal/core/logging/logger.go", 42)
//!     .with_field("width", 80)
//!     .with_field("height", 24);
//!
//! let line = formatter.format(&record);
//! assert!(line.starts_with("[2024-01-02 ¤ 03:04:05] [ INFO  ] ►►► logging/logger.go:42"));
//! assert!(line.ends_with("Map Settings ► [height⇒24 ¤ width⇒80]\n"));
//! ```

pub mod banner;
pub mod callsite;
pub mod cli;
pub mod config;
pub mod error;
pub mod fields;
pub mod formatter;
pub mod level;
pub mod logger;
pub mod palette;
pub mod parser;
pub mod record;
pub mod session;
pub mod timestamp;
pub mod value;

// Re-export primary API types for convenience.
pub use config::{Config, LoggingConfig};
pub use error::LogError;
pub use formatter::{Formatter, FormatterConfig};
pub use level::Level;
pub use logger::{Entry, Logger};
pub use palette::{Color, Palette};
pub use parser::{LineKind, parse_line};
pub use record::{CallSite, Fields, LogRecord};
pub use session::SessionContext;
pub use value::FieldValue;
