//! Key-value storage primitive.
//!
//! Models the flat string-to-string storage area the host platform gives an
//! extension. The bookmark store sits on top of this seam; tests and the
//! demo binary substitute in-memory implementations.

use rusqlite::{params, OptionalExtension};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use log::debug;

use crate::storage::connection::Database;
use crate::types::errors::StoreError;

/// Flat string-keyed storage, get/set only.
///
/// A missing key is not an error; `get` yields `None`. Failures of the layer
/// itself surface as [`StoreError::Unavailable`].
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Key-value store backed by the `kv_store` table.
pub struct SqliteKeyValueStore {
    db: Arc<Database>,
}

impl SqliteKeyValueStore {
    /// Creates a store over the given database.
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Returns the current UNIX timestamp in seconds.
    fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }
}

impl KeyValueStore for SqliteKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let value: Option<String> = self
            .db
            .connection()
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        debug!("kv get {}: {} bytes", key, value.as_deref().map_or(0, |v| v.len()));
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.db
            .connection()
            .execute(
                "INSERT OR REPLACE INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)",
                params![key, value, Self::now()],
            )
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        debug!("kv set {}: {} bytes", key, value.len());
        Ok(())
    }
}
