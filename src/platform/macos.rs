// Seekmark platform paths for macOS
// Config: ~/Library/Application Support/Seekmark
// Data:   ~/Library/Application Support/Seekmark
// Cache:  ~/Library/Caches/Seekmark

use std::env;
use std::path::PathBuf;

/// Returns the home directory on macOS.
fn home_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
}

/// Returns the configuration directory for Seekmark on macOS.
/// `~/Library/Application Support/Seekmark`
pub fn get_config_dir() -> PathBuf {
    home_dir()
        .join("Library")
        .join("Application Support")
        .join("Seekmark")
}

/// Returns the data directory for Seekmark on macOS.
/// `~/Library/Application Support/Seekmark`
pub fn get_data_dir() -> PathBuf {
    home_dir()
        .join("Library")
        .join("Application Support")
        .join("Seekmark")
}

/// Returns the cache directory for Seekmark on macOS.
/// `~/Library/Caches/Seekmark`
pub fn get_cache_dir() -> PathBuf {
    home_dir().join("Library").join("Caches").join("Seekmark")
}
