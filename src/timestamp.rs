//! Timestamp parsing and rendering.
//!
//! Parsing supports ISO 8601, RFC 3339, `YYYY-MM-DD HH:MM:SS` strings, and
//! numeric Unix epochs (seconds, milliseconds, nanoseconds) using a
//! magnitude-based heuristic for disambiguation. Rendering goes through
//! strftime patterns, validated once up front.

use jiff::Timestamp;
use jiff::fmt::strtime;
use jiff::tz::TimeZone;

use crate::error::LogError;

/// Default display pattern: `2024-01-02 ¤ 03:04:05`.
pub const DEFAULT_FORMAT: &str = "%Y-%m-%d ¤ %H:%M:%S";

/// Render `ts` in `tz` with a strftime `pattern`.
///
/// Falls back to RFC 3339 when the pattern cannot be applied; patterns that
/// went through [`validate_format`] never hit the fallback.
pub fn render(ts: Timestamp, tz: &TimeZone, pattern: &str) -> String {
    let zdt = ts.to_zoned(tz.clone());
    strtime::format(pattern, &zdt).unwrap_or_else(|_| zdt.timestamp().to_string())
}

/// Check that `pattern` can render a zoned timestamp.
pub fn validate_format(pattern: &str) -> Result<(), LogError> {
    let probe = Timestamp::UNIX_EPOCH.to_zoned(TimeZone::UTC);
    strtime::format(pattern, &probe)
        .map(|_| ())
        .map_err(|e| LogError::TimestampFormat {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })
}

/// Parse a timestamp from a [`serde_json::Value`].
pub fn from_json_value(value: &serde_json::Value) -> Option<Timestamp> {
    match value {
        serde_json::Value::String(s) => parse_string(s),
        serde_json::Value::Number(n) => parse_number(n),
        _ => None,
    }
}

fn parse_string(s: &str) -> Option<Timestamp> {
    if let Ok(ts) = s.parse::<Timestamp>() {
        return Some(ts);
    }

    // No zone offset: assume UTC.
    for pattern in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(dt) = jiff::civil::DateTime::strptime(pattern, s)
            && let Ok(zdt) = dt.to_zoned(TimeZone::UTC)
        {
            return Some(zdt.timestamp());
        }
    }

    None
}

/// Numeric epochs:
/// - value < 1e12 → seconds
/// - value < 1e15 → milliseconds
/// - value ≥ 1e15 → nanoseconds
fn parse_number(n: &serde_json::Number) -> Option<Timestamp> {
    if let Some(i) = n.as_i64() {
        from_epoch_integer(i)
    } else {
        n.as_f64().and_then(from_epoch_float)
    }
}

fn from_epoch_integer(value: i64) -> Option<Timestamp> {
    if value < 1_000_000_000_000 {
        Timestamp::from_second(value).ok()
    } else if value < 1_000_000_000_000_000 {
        Timestamp::from_millisecond(value).ok()
    } else {
        Timestamp::from_nanosecond(i128::from(value)).ok()
    }
}

fn from_epoch_float(value: f64) -> Option<Timestamp> {
    if value < 1e12 {
        #[allow(clippy::cast_possible_truncation)]
        let secs = value.trunc() as i64;
        #[allow(clippy::cast_possible_truncation)]
        let nanos = (value.fract() * 1_000_000_000.0) as i32;
        Timestamp::new(secs, nanos).ok()
    } else if value < 1e15 {
        #[allow(clippy::cast_possible_truncation)]
        let ms = value as i64;
        Timestamp::from_millisecond(ms).ok()
    } else {
        #[allow(clippy::cast_possible_truncation)]
        let ns = value as i128;
        Timestamp::from_nanosecond(ns).ok()
    }
}
