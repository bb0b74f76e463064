//! Seekmark storage layer.
//!
//! SQLite connection management, schema migrations, the key-value primitive,
//! and the bookmark store layered on top of it.
//!
//! # Usage
//!
//! ```no_run
//! use seekmark::storage::{BookmarkStore, Database, SqliteKeyValueStore};
//! use std::sync::Arc;
//!
//! // Open a persistent database
//! let db = Arc::new(Database::open("seekmark.db").expect("failed to open database"));
//!
//! // Layer the bookmark store over it
//! let kv = Arc::new(SqliteKeyValueStore::new(db));
//! let store = BookmarkStore::new(kv);
//! let all = store.get_all().expect("failed to read bookmarks");
//! # let _ = all;
//! ```

pub mod bookmark_store;
pub mod connection;
pub mod kv;
pub mod migrations;

pub use bookmark_store::BookmarkStore;
pub use connection::Database;
pub use kv::{KeyValueStore, SqliteKeyValueStore};
