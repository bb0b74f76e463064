//! Host capability traits.
//!
//! The surrounding platform (an extension runtime, the demo binary, a test
//! harness) supplies page access, tab access, notice delivery, and control
//! presence upkeep through these seams. The crate ships no production
//! implementations; those belong to the host.

use serde_json::Value;

use crate::types::errors::MessengerError;
use crate::types::video::PlaybackState;

/// What the on-page agent can see and do on its page.
pub trait PageAccess {
    /// Full URL of the page the agent lives in.
    fn page_url(&self) -> String;

    /// Video title scraped from the page, if any element carries one.
    fn video_title(&self) -> Option<String>;

    /// Raw playback readings, or `None` when the page has no media element.
    fn playback(&self) -> Option<PlaybackState>;

    /// Seeks the media element to `seconds` and resumes playback.
    /// Returns `false` when the page has no media element.
    fn seek_and_play(&self, seconds: u64) -> bool;
}

/// The panel's window onto the active browser tab.
pub trait ActiveTab {
    /// URL of the active tab, or `None` when no tab is active.
    fn url(&self) -> Option<String>;

    /// Sends a request to the tab's agent and waits for the reply,
    /// unwrapping the result/error envelope.
    ///
    /// `Err(MessengerError::Unreachable)` when no agent answers at all, such
    /// as on a page loaded before the extension was (re)installed.
    /// `Err(MessengerError::Failed)` when the agent replies with an error.
    fn request_agent(&self, message: &Value) -> Result<Value, MessengerError>;

    /// Out-of-band seek executed directly against the tab's media element,
    /// bypassing the agent. Returns `false` when the seek could not run.
    fn direct_seek(&self, seconds: u64) -> bool;
}

/// Fire-and-forget delivery of agent notices toward the panel.
pub trait PanelNotifier {
    /// Tells the panel a bookmark was just saved. Failure means the notice
    /// was not delivered; the bookmark itself is already persisted.
    fn bookmark_added(&self) -> Result<(), MessengerError>;
}

/// Keeps the on-page bookmark control alive.
///
/// Contract: exactly one control exists on a qualifying watch page, and when
/// the host page rebuilds its chrome and drops the control, the maintainer
/// puts it back. Retry cadence and watchdog period come from
/// [`ControlSettings`](crate::types::settings::ControlSettings); how the page
/// is observed is the host's business.
pub trait PresenceMaintainer {
    /// Ensures the control exists now, creating it if missing.
    fn ensure_control(&self);
}
