//! Management panel endpoint.
//!
//! The panel lists, deletes, and jumps to bookmarks for the video in the
//! active tab. It talks to the on-page agent over the messenger and falls
//! back to direct media manipulation when no agent answers.

use log::{debug, info, warn};
use serde_json::{json, Value};

use crate::host::ActiveTab;
use crate::managers::bookmark_editor::{BookmarkEditor, BookmarkEditorTrait};
use crate::services::video_context;
use crate::types::bookmark::Bookmark;
use crate::types::errors::{EditorError, MessengerError, PanelError};
use crate::types::message::{AgentNotice, PanelCommand};
use crate::types::settings::PanelSettings;
use crate::types::video::VideoContext;

/// Which path performed a jump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpPath {
    /// The on-page agent handled the request.
    Agent,
    /// The agent was unreachable; the direct media fallback ran instead.
    DirectFallback,
}

/// Outcome of a successful jump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JumpOutcome {
    pub path: JumpPath,
    /// Whether the renderer should close the panel now, per settings.
    pub close_panel: bool,
}

/// Panel endpoint over the active tab.
pub struct Panel<T: ActiveTab> {
    tab: T,
    editor: BookmarkEditor,
    settings: PanelSettings,
}

impl<T: ActiveTab> Panel<T> {
    /// Creates a panel over the given tab, editor, and panel settings.
    pub fn new(tab: T, editor: BookmarkEditor, settings: PanelSettings) -> Self {
        Self {
            tab,
            editor,
            settings,
        }
    }

    /// Video id of the active tab, after qualifying the page.
    fn current_video_id(&self) -> Result<String, PanelError> {
        let url = self.tab.url().ok_or(PanelError::NoActiveTab)?;
        if !video_context::is_watch_page(&url) {
            return Err(PanelError::NotVideoPage);
        }
        video_context::parse_video_id(&url).ok_or(PanelError::NoVideo)
    }

    /// Bookmarks of the active tab's video, in playback order.
    pub fn bookmarks(&self) -> Result<Vec<Bookmark>, PanelError> {
        let video_id = self.current_video_id()?;
        self.editor.list(&video_id).map_err(map_editor)
    }

    /// Deletes the bookmark at `index` and returns the refreshed list.
    ///
    /// An out-of-range index deletes nothing; the refreshed list is returned
    /// either way.
    pub fn delete(&self, index: usize) -> Result<Vec<Bookmark>, PanelError> {
        let video_id = self.current_video_id()?;
        let removed = self.editor.delete(&video_id, index).map_err(map_editor)?;
        if removed {
            info!("deleted bookmark {} of video {}", index, video_id);
        } else {
            debug!("delete request for out-of-range index {}", index);
        }
        self.editor.list(&video_id).map_err(map_editor)
    }

    /// Jumps the active tab's video to `timestamp`.
    ///
    /// Tries the agent first. When no agent answers, falls back to the
    /// direct seek path. Fails only when both paths fail.
    pub fn jump(&self, timestamp: u64) -> Result<JumpOutcome, PanelError> {
        // Jump requests only make sense against a qualified page.
        self.current_video_id()?;

        let command = json!(PanelCommand::JumpToTimestamp { timestamp });
        match self.tab.request_agent(&command) {
            Ok(_) => Ok(JumpOutcome {
                path: JumpPath::Agent,
                close_panel: self.settings.close_on_jump,
            }),
            Err(MessengerError::Unreachable(reason)) => {
                warn!("agent unreachable ({}), trying direct seek", reason);
                if self.tab.direct_seek(timestamp) {
                    Ok(JumpOutcome {
                        path: JumpPath::DirectFallback,
                        close_panel: self.settings.close_on_jump,
                    })
                } else {
                    Err(PanelError::JumpFailed(
                        "agent unreachable and direct seek failed".to_string(),
                    ))
                }
            }
            Err(MessengerError::Failed(msg)) => Err(PanelError::JumpFailed(msg)),
        }
    }

    /// Video context of the active tab, by asking its agent.
    ///
    /// `Ok(None)` covers both an unavailable context and an agent that is
    /// not answering; the panel renders "no video" for either.
    pub fn video_info(&self) -> Result<Option<VideoContext>, PanelError> {
        let command = json!(PanelCommand::GetVideoInfo);
        match self.tab.request_agent(&command) {
            Ok(Value::Null) => Ok(None),
            Ok(value) => match serde_json::from_value(value) {
                Ok(context) => Ok(Some(context)),
                Err(e) => {
                    warn!("unparseable getVideoInfo reply: {}", e);
                    Ok(None)
                }
            },
            Err(e) => {
                debug!("agent not answering getVideoInfo: {}", e);
                Ok(None)
            }
        }
    }

    /// Handles a notice arriving from the agent side.
    ///
    /// A `bookmarkAdded` notice reloads the list from storage; anything else
    /// is ignored with no response.
    pub fn handle_notice(&self, message: &Value) -> Option<Result<Vec<Bookmark>, PanelError>> {
        match serde_json::from_value(message.clone()) {
            Ok(AgentNotice::BookmarkAdded) => Some(self.bookmarks()),
            Err(_) => {
                debug!("ignoring notice of unrecognized kind: {}", message);
                None
            }
        }
    }
}

fn map_editor(e: EditorError) -> PanelError {
    match e {
        EditorError::EmptyVideoId => PanelError::NoVideo,
        EditorError::Storage(msg) => PanelError::Storage(msg),
    }
}
