use serde::{Deserialize, Serialize};

/// Snapshot of the playing video on the active page.
///
/// The serialized form is exactly what crosses the panel/agent wire as the
/// `getVideoInfo` result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoContext {
    pub video_id: String,
    /// Playback position in whole seconds.
    pub current_time: u64,
    /// Total length in whole seconds; 0 until the media element has metadata.
    pub duration: u64,
    pub url: String,
}

/// Raw playback readings from the page's media element, as the host reports
/// them. Values are floating-point seconds and may be NaN before metadata
/// has loaded.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaybackState {
    pub position: f64,
    pub duration: f64,
}
