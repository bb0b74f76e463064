//! Bookmark Editor for Seekmark.
//!
//! Implements `BookmarkEditorTrait`: create with near-duplicate detection,
//! delete by position, and listing, over the single-mapping [`BookmarkStore`].

use log::info;

use crate::storage::bookmark_store::BookmarkStore;
use crate::types::bookmark::Bookmark;
use crate::types::errors::EditorError;

/// Two bookmarks closer than this many seconds count as duplicates.
pub const DUPLICATE_WINDOW_SECS: u64 = 2;

/// Caller's verdict at the duplicate decision point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicateDecision {
    /// Save the new bookmark anyway.
    Proceed,
    /// Abandon the create; storage stays untouched.
    Decline,
}

/// Result of a create operation.
#[derive(Debug, Clone, PartialEq)]
pub enum CreateOutcome {
    /// The bookmark was saved at `index` within the video's ordered list.
    Created { bookmark: Bookmark, index: usize },
    /// A near-duplicate existed and the caller declined to proceed.
    DuplicateDeclined,
}

/// Trait defining bookmark editing operations.
pub trait BookmarkEditorTrait {
    /// Creates a bookmark for `video_id` at `timestamp_seconds`.
    ///
    /// When a stored bookmark lies within [`DUPLICATE_WINDOW_SECS`] of the new
    /// position, `on_duplicate` is consulted with the first such match before
    /// anything is written. Empty titles fall back to the untitled label.
    fn create<F>(
        &self,
        video_id: &str,
        timestamp_seconds: u64,
        title: &str,
        note: &str,
        on_duplicate: F,
    ) -> Result<CreateOutcome, EditorError>
    where
        F: FnOnce(&Bookmark) -> DuplicateDecision;

    /// Deletes the bookmark at `index` within the video's ordered list.
    ///
    /// Returns `true` if a bookmark was removed. An out-of-range index is a
    /// no-op returning `false`; nothing is written.
    fn delete(&self, video_id: &str, index: usize) -> Result<bool, EditorError>;

    /// Lists the video's bookmarks in playback order.
    fn list(&self, video_id: &str) -> Result<Vec<Bookmark>, EditorError>;
}

/// Bookmark editor backed by a [`BookmarkStore`].
pub struct BookmarkEditor {
    store: BookmarkStore,
}

impl BookmarkEditor {
    /// Creates a new `BookmarkEditor` over the given store.
    pub fn new(store: BookmarkStore) -> Self {
        Self { store }
    }
}

impl BookmarkEditorTrait for BookmarkEditor {
    fn create<F>(
        &self,
        video_id: &str,
        timestamp_seconds: u64,
        title: &str,
        note: &str,
        on_duplicate: F,
    ) -> Result<CreateOutcome, EditorError>
    where
        F: FnOnce(&Bookmark) -> DuplicateDecision,
    {
        if video_id.is_empty() {
            return Err(EditorError::EmptyVideoId);
        }

        let mut list = self
            .store
            .get_for(video_id)
            .map_err(|e| EditorError::Storage(e.to_string()))?;

        if let Some(existing) = list
            .iter()
            .find(|b| b.timestamp_seconds.abs_diff(timestamp_seconds) < DUPLICATE_WINDOW_SECS)
        {
            if on_duplicate(existing) == DuplicateDecision::Decline {
                return Ok(CreateOutcome::DuplicateDeclined);
            }
        }

        let bookmark = Bookmark::at(timestamp_seconds, title, note);
        // Final position among records at or before the new timestamp; a
        // stable sort keeps earlier records first on ties.
        let index = list
            .iter()
            .filter(|b| b.timestamp_seconds <= timestamp_seconds)
            .count();
        list.push(bookmark.clone());
        list.sort_by_key(|b| b.timestamp_seconds);

        self.store
            .replace_for(video_id, list)
            .map_err(|e| EditorError::Storage(e.to_string()))?;

        info!("bookmarked video {} at {}s", video_id, timestamp_seconds);
        Ok(CreateOutcome::Created { bookmark, index })
    }

    fn delete(&self, video_id: &str, index: usize) -> Result<bool, EditorError> {
        let mut list = self
            .store
            .get_for(video_id)
            .map_err(|e| EditorError::Storage(e.to_string()))?;

        if index >= list.len() {
            return Ok(false);
        }

        list.remove(index);
        self.store
            .replace_for(video_id, list)
            .map_err(|e| EditorError::Storage(e.to_string()))?;

        info!("removed bookmark {} of video {}", index, video_id);
        Ok(true)
    }

    fn list(&self, video_id: &str) -> Result<Vec<Bookmark>, EditorError> {
        self.store
            .get_for(video_id)
            .map_err(|e| EditorError::Storage(e.to_string()))
    }
}
