//! Activity types: a single recorded event on the timeline.

use std::fmt;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque, unique identifier for an activity.
///
/// New ids are random UUIDs, but any string read back from storage is kept
/// as-is: ids are never parsed or reinterpreted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityId(String);

impl ActivityId {
    /// Generates a fresh id that has never been handed out before.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl From<&str> for ActivityId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Display for ActivityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single recorded event.
///
/// Serialized exactly as stored: `{ id, title, date, link? }`, with the date
/// as `YYYY-MM-DD` and `link` omitted when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub id: ActivityId,

    /// Trimmed, non-empty title.
    pub title: String,

    /// Calendar day the activity happened. No time-of-day.
    pub date: Date,

    /// Absolute URL, kept exactly as entered once it has been validated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}
