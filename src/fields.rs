//! Key alias tables for picking the well-known fields out of a JSON log line.
//!
//! First match wins during extraction.

pub const TIMESTAMP_ALIASES: &[&str] = &["time", "ts", "timestamp", "@timestamp", "datetime"];

pub const LEVEL_ALIASES: &[&str] = &["level", "severity", "lvl", "log_level"];

pub const MESSAGE_ALIASES: &[&str] = &["msg", "message", "text"];

/// Keys holding a `path:line` call-site.
pub const CALLER_ALIASES: &[&str] = &["file", "caller", "source"];

/// Keys dropped without display (function names reported next to the file).
pub const IGNORED_KEYS: &[&str] = &["func", "function"];

/// Remove and return the first alias present in `map`.
pub fn find_and_remove(
    map: &mut serde_json::Map<String, serde_json::Value>,
    aliases: &[&str],
) -> Option<(String, serde_json::Value)> {
    for &alias in aliases {
        if let Some(val) = map.remove(alias) {
            return Some((alias.to_string(), val));
        }
    }
    None
}
