use std::fmt;

// === StoreError ===

/// Errors from the bookmark persistence layer.
#[derive(Debug)]
pub enum StoreError {
    /// The underlying key-value storage could not be read or written.
    Unavailable(String),
    /// Stored data exists but could not be parsed as bookmark JSON.
    Malformed(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Unavailable(msg) => write!(f, "Bookmark storage unavailable: {}", msg),
            StoreError::Malformed(msg) => write!(f, "Malformed bookmark data: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

// === EditorError ===

/// Errors from bookmark create/delete/list operations.
#[derive(Debug)]
pub enum EditorError {
    /// The video id was empty; nothing can be keyed against it.
    EmptyVideoId,
    /// The persistence layer failed beneath the editor.
    Storage(String),
}

impl fmt::Display for EditorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditorError::EmptyVideoId => write!(f, "Cannot save a bookmark without a video id"),
            EditorError::Storage(msg) => write!(f, "Bookmark storage failed: {}", msg),
        }
    }
}

impl std::error::Error for EditorError {}

// === MessengerError ===

/// Errors from the panel/agent message channel.
#[derive(Debug)]
pub enum MessengerError {
    /// No agent answered on the other side of the channel.
    Unreachable(String),
    /// The agent answered with an error reply.
    Failed(String),
}

impl fmt::Display for MessengerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessengerError::Unreachable(msg) => write!(f, "Agent unreachable: {}", msg),
            MessengerError::Failed(msg) => write!(f, "Agent request failed: {}", msg),
        }
    }
}

impl std::error::Error for MessengerError {}

// === AgentError ===

/// Errors the on-page agent surfaces to the user.
#[derive(Debug)]
pub enum AgentError {
    /// No playable video was found on the page.
    ContextUnavailable,
    /// The bookmark could not be saved.
    SaveFailed(String),
}

impl fmt::Display for AgentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgentError::ContextUnavailable => {
                write!(f, "Video not found. Wait for the video to load and try again.")
            }
            AgentError::SaveFailed(msg) => write!(f, "Failed to save bookmark: {}", msg),
        }
    }
}

impl std::error::Error for AgentError {}

// === PanelError ===

/// Errors the management panel surfaces to the user.
#[derive(Debug)]
pub enum PanelError {
    /// No browser tab is active.
    NoActiveTab,
    /// The active tab is not a video watch page.
    NotVideoPage,
    /// The watch page URL carries no video id.
    NoVideo,
    /// Loading or mutating stored bookmarks failed.
    Storage(String),
    /// Neither the agent nor the direct fallback could perform the seek.
    JumpFailed(String),
}

impl fmt::Display for PanelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PanelError::NoActiveTab => write!(f, "No active browser tab"),
            PanelError::NotVideoPage => {
                write!(f, "Not a video page. Open a watch page to start bookmarking.")
            }
            PanelError::NoVideo => write!(f, "No video detected in the current page URL"),
            PanelError::Storage(msg) => write!(f, "Bookmark storage failed: {}", msg),
            PanelError::JumpFailed(msg) => {
                write!(
                    f,
                    "Failed to jump to timestamp: {}. Refresh the video page and try again.",
                    msg
                )
            }
        }
    }
}

impl std::error::Error for PanelError {}

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    IoError(String),
    /// Failed to serialize or deserialize settings.
    SerializationError(String),
    /// The provided settings key is invalid.
    InvalidKey(String),
    /// The provided settings value is invalid.
    InvalidValue(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::IoError(msg) => write!(f, "Settings I/O error: {}", msg),
            SettingsError::SerializationError(msg) => {
                write!(f, "Settings serialization error: {}", msg)
            }
            SettingsError::InvalidKey(key) => write!(f, "Invalid settings key: {}", key),
            SettingsError::InvalidValue(msg) => {
                write!(f, "Invalid settings value: {}", msg)
            }
        }
    }
}

impl std::error::Error for SettingsError {}
