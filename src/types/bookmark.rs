use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Title given to a bookmark when the page offers no usable one.
pub const FALLBACK_TITLE: &str = "Untitled Video";

/// Every saved bookmark, keyed by video id.
///
/// This whole map is the unit of persistence: the store reads it and writes
/// it back as one value.
pub type BookmarkMap = BTreeMap<String, Vec<Bookmark>>;

/// A saved position within a video.
///
/// Serialized field names are the persisted JSON shape; panel-side renderers
/// read them as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    /// Playback position in whole seconds, floored at capture time.
    pub timestamp_seconds: u64,
    pub title: String,
    pub note: String,
    /// Cached human-readable rendering of `timestamp_seconds`.
    pub display_time: String,
    /// ISO 8601 creation time with millisecond precision, UTC.
    pub created_at: String,
}

impl Bookmark {
    /// Creates a bookmark at the given position, stamping `display_time` and
    /// `created_at`. Empty or whitespace titles fall back to [`FALLBACK_TITLE`].
    pub fn at(timestamp_seconds: u64, title: &str, note: &str) -> Self {
        let title = if title.trim().is_empty() {
            FALLBACK_TITLE.to_string()
        } else {
            title.to_string()
        };
        Self {
            timestamp_seconds,
            title,
            note: note.to_string(),
            display_time: format_display_time(timestamp_seconds),
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// Renders a whole-second position as `M:SS`, or `H:MM:SS` once it reaches
/// an hour. Seconds are always two digits; minutes only once hours appear;
/// hours are never padded.
pub fn format_display_time(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{}:{:02}", minutes, seconds)
    }
}
