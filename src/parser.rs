//! JSON log line parser.
//!
//! Turns logrus-style JSON lines into [`LogRecord`]s:
//!
//! ```text
//! {"time":"2024-01-02T03:04:05Z","level":"info","msg":"Map Settings",
//!  "file":"internal/core/logging/logger.go:42","width":80,"height":24}
//! ```
//!
//! Anything that is not a JSON object is [`LineKind::Raw`] and passes
//! through untouched.

use crate::fields;
use crate::level::Level;
use crate::record::{CallSite, Fields, LogRecord};
use crate::timestamp;
use crate::value::FieldValue;

/// The parsed classification of an input line.
#[derive(Debug)]
pub enum LineKind {
    Record(LogRecord),
    Raw,
}

/// Parse a single input line.
///
/// Missing or unreadable timestamps fall back to the current time, and
/// missing or unknown levels to [`Level::Info`].
pub fn parse_line(line: &str) -> LineKind {
    let trimmed = line.trim();
    if !trimmed.starts_with('{') {
        return LineKind::Raw;
    }
    let Ok(serde_json::Value::Object(mut map)) = serde_json::from_str(trimmed) else {
        return LineKind::Raw;
    };

    let timestamp = fields::find_and_remove(&mut map, fields::TIMESTAMP_ALIASES)
        .and_then(|(_, v)| timestamp::from_json_value(&v))
        .unwrap_or_else(jiff::Timestamp::now);

    let level = fields::find_and_remove(&mut map, fields::LEVEL_ALIASES)
        .and_then(|(_, v)| Level::from_json_value(&v))
        .unwrap_or(Level::Info);

    let message = fields::find_and_remove(&mut map, fields::MESSAGE_ALIASES)
        .map(|(_, v)| value_to_string(v))
        .unwrap_or_default();

    let mut call_site = None;
    if let Some((key, value)) = fields::find_and_remove(&mut map, fields::CALLER_ALIASES) {
        match parse_call_site(&value) {
            Some(site) => call_site = Some(site),
            None => {
                map.insert(key, value);
            }
        }
    }

    for key in fields::IGNORED_KEYS {
        map.remove(*key);
    }

    let fields: Fields = map
        .into_iter()
        .map(|(k, v)| (k, field_value(v)))
        .collect();

    LineKind::Record(LogRecord {
        level,
        timestamp,
        message,
        call_site,
        fields,
    })
}

/// `path:line` → [`CallSite`]. The split is on the last colon.
fn parse_call_site(value: &serde_json::Value) -> Option<CallSite> {
    let (file, line) = value.as_str()?.rsplit_once(':')?;
    let line = line.trim().parse::<u32>().ok()?;
    if file.is_empty() {
        return None;
    }
    Some(CallSite::new(file, line))
}

fn value_to_string(v: serde_json::Value) -> String {
    match v {
        serde_json::Value::String(s) => s,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Map a JSON value onto the closest [`FieldValue`] shape.
fn field_value(v: serde_json::Value) -> FieldValue {
    match v {
        serde_json::Value::Bool(b) => FieldValue::Bool(b),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                FieldValue::Integer(i128::from(i))
            } else if let Some(u) = n.as_u64() {
                FieldValue::Integer(i128::from(u))
            } else if let Some(f) = n.as_f64() {
                FieldValue::Float(f)
            } else {
                FieldValue::Other(n.to_string())
            }
        }
        serde_json::Value::String(s) => FieldValue::String(s),
        serde_json::Value::Array(items) if items.iter().all(serde_json::Value::is_string) => {
            FieldValue::StringList(items.into_iter().map(value_to_string).collect())
        }
        other => FieldValue::Other(other.to_string()),
    }
}
