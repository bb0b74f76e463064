//! Video context derivation.
//!
//! Turns a page URL and raw media readings into the [`VideoContext`] the
//! rest of the crate consumes. "No playable video" is modeled as `None`,
//! not an error: pages without video are an ordinary state.

use log::debug;
use url::Url;

use crate::host::PageAccess;
use crate::types::video::VideoContext;

/// Extracts the video id (the `v` query parameter) from a watch URL.
///
/// `None` when the URL does not parse, carries no `v` parameter, or carries
/// an empty one.
pub fn parse_video_id(page_url: &str) -> Option<String> {
    let url = Url::parse(page_url).ok()?;
    url.query_pairs()
        .find(|(key, _)| key == "v")
        .map(|(_, value)| value.into_owned())
        .filter(|id| !id.is_empty())
}

/// Whether the URL points at a watch page (a `watch` path segment).
pub fn is_watch_page(page_url: &str) -> bool {
    let url = match Url::parse(page_url) {
        Ok(u) => u,
        Err(_) => return false,
    };
    url.path_segments()
        .map(|mut segments| segments.any(|s| s == "watch"))
        .unwrap_or(false)
}

/// Floors a raw playback reading to whole seconds. Non-finite or negative
/// readings clamp to 0.
pub fn floor_seconds(value: f64) -> u64 {
    if value.is_finite() && value > 0.0 {
        value.floor() as u64
    } else {
        0
    }
}

/// Reads the current video context from the page.
///
/// `None` when the page reports no media element or its URL carries no
/// video id. That is the unavailable signal, not a failure.
pub fn read_context<P: PageAccess>(page: &P) -> Option<VideoContext> {
    let url = page.page_url();
    let video_id = match parse_video_id(&url) {
        Some(id) => id,
        None => {
            debug!("no video id in {}", url);
            return None;
        }
    };
    let playback = page.playback()?;
    Some(VideoContext {
        video_id,
        current_time: floor_seconds(playback.position),
        duration: floor_seconds(playback.duration),
        url,
    })
}
