//! Bookmark store: reads and rewrites the whole bookmark mapping.
//!
//! All bookmarks live under one key in the key-value layer, as a JSON object
//! keyed by video id. Every mutation is a read-modify-write of that single
//! value; two writers interleaving on it race, and the last write wins.

use std::sync::Arc;

use log::debug;

use crate::storage::kv::KeyValueStore;
use crate::types::bookmark::{Bookmark, BookmarkMap};
use crate::types::errors::StoreError;

/// Key under which the whole bookmark mapping is persisted.
pub const STORAGE_KEY: &str = "bookmarks";

/// Store for the bookmark mapping, layered over a [`KeyValueStore`].
pub struct BookmarkStore {
    kv: Arc<dyn KeyValueStore>,
}

impl BookmarkStore {
    /// Creates a store over the given key-value layer.
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self { kv }
    }

    /// Reads the whole mapping. An absent key is an empty mapping.
    ///
    /// # Errors
    /// [`StoreError::Unavailable`] when the layer cannot be read,
    /// [`StoreError::Malformed`] when the stored value is not bookmark JSON.
    pub fn get_all(&self) -> Result<BookmarkMap, StoreError> {
        match self.kv.get(STORAGE_KEY)? {
            Some(raw) => {
                serde_json::from_str(&raw).map_err(|e| StoreError::Malformed(e.to_string()))
            }
            None => Ok(BookmarkMap::new()),
        }
    }

    /// Reads the list for one video. Unknown ids yield an empty list.
    pub fn get_for(&self, video_id: &str) -> Result<Vec<Bookmark>, StoreError> {
        let mut all = self.get_all()?;
        Ok(all.remove(video_id).unwrap_or_default())
    }

    /// Replaces the list for one video and writes the whole mapping back.
    ///
    /// The video's key is kept even when `list` is empty. The read and the
    /// write are not guarded against concurrent writers.
    pub fn replace_for(&self, video_id: &str, list: Vec<Bookmark>) -> Result<(), StoreError> {
        let mut all = self.get_all()?;
        debug!("persisting {} bookmarks for video {}", list.len(), video_id);
        all.insert(video_id.to_string(), list);
        let raw =
            serde_json::to_string(&all).map_err(|e| StoreError::Unavailable(e.to_string()))?;
        self.kv.set(STORAGE_KEY, &raw)
    }
}
