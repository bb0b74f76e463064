//! On-page agent endpoint.
//!
//! One agent lives in each watch page. It reads the video context, performs
//! seeks, saves bookmarks when the page control is clicked, and answers
//! panel requests arriving over the messenger.

use log::{debug, warn};
use serde_json::{json, Value};

use crate::host::{PageAccess, PanelNotifier};
use crate::managers::bookmark_editor::{
    BookmarkEditor, BookmarkEditorTrait, CreateOutcome, DuplicateDecision,
};
use crate::services::video_context;
use crate::types::bookmark::Bookmark;
use crate::types::errors::AgentError;
use crate::types::message::{KIND_GET_VIDEO_INFO, KIND_JUMP_TO_TIMESTAMP};
use crate::types::video::VideoContext;

/// Agent endpoint bound to one page.
pub struct Agent<P: PageAccess, N: PanelNotifier> {
    page: P,
    notifier: N,
    editor: BookmarkEditor,
}

impl<P: PageAccess, N: PanelNotifier> Agent<P, N> {
    /// Creates an agent over the given page, notifier, and editor.
    pub fn new(page: P, notifier: N, editor: BookmarkEditor) -> Self {
        Self {
            page,
            notifier,
            editor,
        }
    }

    /// Current video context, or `None` when the page has no playable video.
    pub fn video_info(&self) -> Option<VideoContext> {
        video_context::read_context(&self.page)
    }

    /// Seeks the page's video to `seconds` and resumes playback.
    /// Returns `false` when the page has no media element to seek.
    pub fn jump_to(&self, seconds: u64) -> bool {
        debug!("seeking page video to {}s", seconds);
        self.page.seek_and_play(seconds)
    }

    /// Saves a bookmark at the current playback position.
    ///
    /// This is the flow behind the page control: read the context, take the
    /// page's scraped title, create through the editor, then wake the panel.
    /// The notice is best-effort; an absent panel never fails the save.
    pub fn bookmark_current<F>(
        &self,
        note: &str,
        on_duplicate: F,
    ) -> Result<CreateOutcome, AgentError>
    where
        F: FnOnce(&Bookmark) -> DuplicateDecision,
    {
        let context = self.video_info().ok_or(AgentError::ContextUnavailable)?;
        let title = self.page.video_title().unwrap_or_default();

        let outcome = self
            .editor
            .create(
                &context.video_id,
                context.current_time,
                &title,
                note,
                on_duplicate,
            )
            .map_err(|e| AgentError::SaveFailed(e.to_string()))?;

        if let CreateOutcome::Created { .. } = &outcome {
            if let Err(e) = self.notifier.bookmark_added() {
                warn!("bookmark saved but panel notice failed: {}", e);
            }
        }
        Ok(outcome)
    }

    /// Handles one messenger message addressed to this agent.
    ///
    /// Returns `None` for messages without a recognized `kind`; they get no
    /// response at all. A recognized kind with a bad payload gets an error
    /// reply.
    pub fn handle(&self, message: &Value) -> Option<Result<Value, String>> {
        let kind = message.get("kind").and_then(|v| v.as_str())?;
        match kind {
            KIND_GET_VIDEO_INFO => {
                // An unavailable context is a null result, not an error.
                Some(Ok(json!(self.video_info())))
            }
            KIND_JUMP_TO_TIMESTAMP => {
                let timestamp = match message
                    .get("payload")
                    .and_then(|p| p.get("timestamp"))
                    .and_then(|t| t.as_u64())
                {
                    Some(t) => t,
                    None => return Some(Err("missing timestamp".to_string())),
                };
                if !self.jump_to(timestamp) {
                    debug!("jump request with no media element on the page");
                }
                // Acknowledged regardless; the panel treats the jump as done.
                Some(Ok(json!({"success": true})))
            }
            _ => {
                debug!("ignoring message of unrecognized kind {}", kind);
                None
            }
        }
    }
}
