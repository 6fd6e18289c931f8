//! Single-line, colorized rendering of [`LogRecord`]s.
//!
//! Output layout:
//! ```text
//! [2024-01-02 ¤ 03:04:05] [ INFO  ] ►►► logging/logger.go:42   ►►► Map Settings ► [height⇒24 ¤ width⇒80]
//! ```
//! - bracketed timestamp
//! - level label in the level color
//! - call-site between two `►►►` markers, fixed width
//! - message text
//! - fields sorted by key, `key⇒value`, joined by `¤`

use std::borrow::Cow;

use jiff::tz::TimeZone;

use crate::callsite;
use crate::error::LogError;
use crate::palette::Palette;
use crate::record::{CallSite, LogRecord};
use crate::timestamp;

/// Marker placed on both sides of the call-site column.
pub const SEPARATOR: &str = "►►►";

/// Marker introducing the fields block.
pub const FIELDS_ARROW: &str = "►";

/// Joins `key⇒value` entries inside the fields block.
pub const FIELD_DIAMOND: &str = "¤";

/// Between a field key and its value.
pub const KEY_VALUE_ARROW: &str = "⇒";

/// Default call-site column width.
pub const DEFAULT_WIDTH: usize = 22;

/// Default number of trailing path segments shown for call-sites.
pub const DEFAULT_PATH_SEGMENTS: usize = 2;

/// Display options, fixed for the lifetime of a [`Formatter`].
#[derive(Debug, Clone)]
pub struct FormatterConfig {
    /// strftime pattern for the timestamp column.
    pub timestamp_format: String,
    /// Show the whole call-site path instead of its trailing segments.
    pub show_full_path: bool,
    /// Call-site column width in characters.
    pub display_width: usize,
    /// Trailing path segments kept when `show_full_path` is off.
    pub path_segments: usize,
    /// Zone timestamps are rendered in.
    pub time_zone: TimeZone,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            timestamp_format: timestamp::DEFAULT_FORMAT.to_string(),
            show_full_path: false,
            display_width: DEFAULT_WIDTH,
            path_segments: DEFAULT_PATH_SEGMENTS,
            time_zone: TimeZone::UTC,
        }
    }
}

/// Renders records into newline-terminated lines.
///
/// Holds no mutable state; one instance can format from any number of
/// threads at once.
#[derive(Debug, Clone)]
pub struct Formatter {
    config: FormatterConfig,
    palette: Palette,
}

impl Formatter {
    /// Build a formatter, rejecting timestamp patterns that cannot render.
    pub fn new(config: FormatterConfig, palette: Palette) -> Result<Self, LogError> {
        timestamp::validate_format(&config.timestamp_format)?;
        Ok(Self { config, palette })
    }

    pub const fn config(&self) -> &FormatterConfig {
        &self.config
    }

    pub const fn palette(&self) -> Palette {
        self.palette
    }

    /// Format `record` into a fresh line.
    pub fn format(&self, record: &LogRecord) -> String {
        let mut out = String::with_capacity(128);
        self.format_into(record, &mut out);
        out
    }

    /// Append the formatted line for `record` to `out`.
    pub fn format_into(&self, record: &LogRecord, out: &mut String) {
        let color = record.level.color();
        let paint = self.palette;

        out.push('[');
        out.push_str(&timestamp::render(
            record.timestamp,
            &self.config.time_zone,
            &self.config.timestamp_format,
        ));
        out.push_str("] ");

        paint.paint(out, color, record.level.label());
        out.push(' ');

        if let Some(ref site) = record.call_site {
            paint.paint(out, color, SEPARATOR);
            out.push(' ');
            out.push_str(&self.call_site_column(site));
            out.push(' ');
            paint.paint(out, color, SEPARATOR);
            out.push(' ');
        }

        out.push_str(&escape_line_breaks(&record.message));

        if !record.fields.is_empty() {
            out.push(' ');
            paint.paint(out, color, FIELDS_ARROW);
            out.push_str(" [");

            let mut keys: Vec<&String> = record.fields.keys().collect();
            keys.sort_unstable();

            for (i, key) in keys.into_iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                    paint.paint(out, color, FIELD_DIAMOND);
                    out.push(' ');
                }
                let value = &record.fields[key];
                let key = escape_line_breaks(key);
                paint.paint(out, color, &format!("{key}{KEY_VALUE_ARROW}"));
                paint.paint(out, value.color(), &escape_line_breaks(&value.format()));
            }

            out.push(']');
        }

        out.push('\n');
    }

    /// The fixed-width call-site column for `site`.
    pub fn call_site_column(&self, site: &CallSite) -> String {
        let file = if self.config.show_full_path {
            site.file.as_str()
        } else {
            callsite::shorten_path(&site.file, self.config.path_segments)
        };
        callsite::fit(file, site.line, self.config.display_width)
    }
}

/// Replace `\n` and `\r` with their two-character escapes so a record
/// always renders as exactly one line.
fn escape_line_breaks(text: &str) -> Cow<'_, str> {
    if !text.contains(['\n', '\r']) {
        return Cow::Borrowed(text);
    }
    let mut escaped = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            c => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}
