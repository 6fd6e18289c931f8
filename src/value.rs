//! Typed field values and their display rules.
//!
//! A [`FieldValue`] is a closed set of shapes, so both the text rendering
//! ([`FieldValue::format`]) and the color choice ([`FieldValue::color`]) are
//! exhaustive matches.

use std::fmt;
use std::time::Duration;

use jiff::SignedDuration;
use jiff::fmt::friendly::{Designator, Spacing, SpanPrinter};

use crate::palette::Color;

/// A structured field value attached to a log record.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Any integer width, signed or unsigned.
    Integer(i128),
    Float(f64),
    Bool(bool),
    String(String),
    Duration(Duration),
    StringList(Vec<String>),
    /// Anything else, already rendered to text.
    Other(String),
}

impl FieldValue {
    /// Render the value as display text.
    ///
    /// - durations: compact human form (`1h45m`)
    /// - integers: decimal
    /// - floats: exactly two decimal places
    /// - string lists: `[ a, b, c ]`
    /// - everything else: its plain text
    pub fn format(&self) -> String {
        match self {
            Self::Duration(d) => format_duration(*d),
            Self::Integer(i) => i.to_string(),
            Self::Float(f) => format!("{f:.2}"),
            Self::StringList(items) => format!("[ {} ]", items.join(", ")),
            Self::Bool(b) => b.to_string(),
            Self::String(s) | Self::Other(s) => s.clone(),
        }
    }

    /// Color for the value text.
    pub const fn color(&self) -> Color {
        match self {
            Self::Integer(_) | Self::Float(_) => Color::Cyan,
            Self::Bool(true) => Color::Green,
            Self::Bool(false) => Color::Red,
            Self::String(_) => Color::Magenta,
            Self::Duration(_) | Self::StringList(_) | Self::Other(_) => Color::Yellow,
        }
    }
}

pub(crate) fn format_duration(d: Duration) -> String {
    let printer = SpanPrinter::new()
        .designator(Designator::Compact)
        .spacing(Spacing::None);
    match SignedDuration::try_from(d) {
        Ok(signed) => printer.duration_to_string(&signed),
        Err(_) => format!("{d:?}"),
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(impl From<$t> for FieldValue {
            fn from(v: $t) -> Self {
                Self::Integer(i128::from(v))
            }
        })*
    };
}

impl_from_int!(i8, i16, i32, i64, i128, u8, u16, u32, u64);

impl From<usize> for FieldValue {
    fn from(v: usize) -> Self {
        Self::Integer(v as i128)
    }
}

impl From<isize> for FieldValue {
    fn from(v: isize) -> Self {
        Self::Integer(v as i128)
    }
}

impl From<f32> for FieldValue {
    fn from(v: f32) -> Self {
        Self::Float(f64::from(v))
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<bool> for FieldValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<Duration> for FieldValue {
    fn from(v: Duration) -> Self {
        Self::Duration(v)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(v: Vec<String>) -> Self {
        Self::StringList(v)
    }
}

impl From<&[&str]> for FieldValue {
    fn from(v: &[&str]) -> Self {
        Self::StringList(v.iter().map(|s| (*s).to_string()).collect())
    }
}
