//! App Core for Seekmark.
//!
//! Central struct wiring the database, the key-value store, and the settings
//! engine. Used by the storage bridge and the demo binary; editors are cheap
//! handles created on demand.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::{info, warn};

use crate::managers::bookmark_editor::BookmarkEditor;
use crate::platform;
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::storage::bookmark_store::BookmarkStore;
use crate::storage::connection::Database;
use crate::storage::kv::SqliteKeyValueStore;
use crate::types::settings::AppSettings;

/// Central application struct holding storage and settings.
pub struct App {
    pub db: Arc<Database>,
    pub kv: Arc<SqliteKeyValueStore>,
    pub settings_engine: SettingsEngine,
}

impl App {
    /// Creates a new App, opening the database and loading settings.
    pub fn new<P: AsRef<Path>>(db_path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let db = Arc::new(Database::open(&db_path)?);
        let kv = Arc::new(SqliteKeyValueStore::new(db.clone()));

        let mut settings_engine = SettingsEngine::new(None);
        if let Err(e) = settings_engine.load() {
            warn!("using default settings: {}", e);
        }

        info!("opened bookmark database at {}", db_path.as_ref().display());
        Ok(Self {
            db,
            kv,
            settings_engine,
        })
    }

    /// Creates a bookmark editor over the shared store.
    pub fn editor(&self) -> BookmarkEditor {
        BookmarkEditor::new(BookmarkStore::new(self.kv.clone()))
    }

    /// Resolves the directory holding the bookmark database.
    ///
    /// Precedence: the `SEEKMARK_DATA_DIR` environment variable, then the
    /// `storage.data_dir` setting, then the platform data directory.
    pub fn resolve_data_dir(settings: &AppSettings) -> PathBuf {
        if let Ok(dir) = std::env::var("SEEKMARK_DATA_DIR") {
            return PathBuf::from(dir);
        }
        if let Some(dir) = &settings.storage.data_dir {
            return PathBuf::from(dir);
        }
        platform::get_data_dir()
    }
}
