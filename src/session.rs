//! Per-session tracing context attached to records as a single field.

use std::fmt;
use std::time::Duration;

use jiff::Timestamp;

use crate::value::{self, FieldValue};

/// Identifies a session and the action in flight, so related lines can be
/// grouped when reading the log.
///
/// Rendered as `sid:<id> ¤ pid:<player> ¤ type:<action> ¤ dur:<elapsed>`.
/// Empty identifiers are left out; the elapsed time is always last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    pub session_id: String,
    pub action_id: String,
    pub player_id: String,
    pub action_type: String,
    pub start_time: Timestamp,
}

impl SessionContext {
    /// A context for `session_id`, started now.
    pub fn new(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            action_id: String::new(),
            player_id: String::new(),
            action_type: String::new(),
            start_time: Timestamp::now(),
        }
    }

    pub fn with_player(mut self, player_id: impl Into<String>) -> Self {
        self.player_id = player_id.into();
        self
    }

    /// Start tracking a new action within this session. The clock restarts.
    pub fn with_action(
        mut self,
        action_id: impl Into<String>,
        action_type: impl Into<String>,
    ) -> Self {
        self.action_id = action_id.into();
        self.action_type = action_type.into();
        self.start_time = Timestamp::now();
        self
    }

    pub fn with_start_time(mut self, start_time: Timestamp) -> Self {
        self.start_time = start_time;
        self
    }

    /// Time since `start_time` as of `now`, rounded to the millisecond.
    /// A start time in the future counts as zero.
    pub fn elapsed_at(&self, now: Timestamp) -> Duration {
        let nanos = now.duration_since(self.start_time).as_nanos();
        if nanos <= 0 {
            return Duration::ZERO;
        }
        let millis = (nanos + 500_000) / 1_000_000;
        Duration::from_millis(u64::try_from(millis).unwrap_or(u64::MAX))
    }

    /// The rendered context as of `now`.
    pub fn render_at(&self, now: Timestamp) -> String {
        let mut parts = Vec::with_capacity(4);
        if !self.session_id.is_empty() {
            parts.push(format!("sid:{}", self.session_id));
        }
        if !self.player_id.is_empty() {
            parts.push(format!("pid:{}", self.player_id));
        }
        if !self.action_type.is_empty() {
            parts.push(format!("type:{}", self.action_type));
        }
        parts.push(format!(
            "dur:{}",
            value::format_duration(self.elapsed_at(now))
        ));
        parts.join(" ¤ ")
    }
}

impl fmt::Display for SessionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_at(Timestamp::now()))
    }
}

impl From<&SessionContext> for FieldValue {
    fn from(ctx: &SessionContext) -> Self {
        Self::Other(ctx.to_string())
    }
}
