use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Message kind the panel sends to read the current video context.
pub const KIND_GET_VIDEO_INFO: &str = "getVideoInfo";
/// Message kind the panel sends to seek the page's video.
pub const KIND_JUMP_TO_TIMESTAMP: &str = "jumpToTimestamp";
/// Notice kind the agent fires toward the panel after saving a bookmark.
pub const KIND_BOOKMARK_ADDED: &str = "bookmarkAdded";

/// Requests the panel addresses to the on-page agent.
///
/// Wire form: `{"kind": "...", "payload": {...}}`, with `payload` omitted
/// for kinds that carry none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "payload", rename_all = "camelCase")]
pub enum PanelCommand {
    GetVideoInfo,
    JumpToTimestamp { timestamp: u64 },
}

/// Fire-and-forget notices the agent sends toward the panel.
///
/// No reply is expected and delivery is not guaranteed; a panel that is not
/// open simply never sees the notice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum AgentNotice {
    BookmarkAdded,
}

/// Reply half of the panel/agent wire: exactly one of `result` or `error`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Reply {
    Result(Value),
    Error(String),
}

impl Reply {
    /// Wraps a handler outcome into the wire reply.
    pub fn from_outcome(outcome: Result<Value, String>) -> Self {
        match outcome {
            Ok(value) => Reply::Result(value),
            Err(message) => Reply::Error(message),
        }
    }

    /// Unwraps a wire reply back into a handler outcome.
    pub fn into_outcome(self) -> Result<Value, String> {
        match self {
            Reply::Result(value) => Ok(value),
            Reply::Error(message) => Err(message),
        }
    }
}
