// Seekmark platform paths for Windows
// Config: %APPDATA%/Seekmark
// Data:   %APPDATA%/Seekmark
// Cache:  %LOCALAPPDATA%/Seekmark/cache

use std::env;
use std::path::PathBuf;

/// Returns the configuration directory for Seekmark on Windows.
/// `%APPDATA%/Seekmark`
pub fn get_config_dir() -> PathBuf {
    let appdata =
        env::var("APPDATA").unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Roaming"));
    PathBuf::from(appdata).join("Seekmark")
}

/// Returns the data directory for Seekmark on Windows.
/// `%APPDATA%/Seekmark`
pub fn get_data_dir() -> PathBuf {
    let appdata =
        env::var("APPDATA").unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Roaming"));
    PathBuf::from(appdata).join("Seekmark")
}

/// Returns the cache directory for Seekmark on Windows.
/// `%LOCALAPPDATA%/Seekmark/cache`
pub fn get_cache_dir() -> PathBuf {
    let local_appdata = env::var("LOCALAPPDATA")
        .unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Local"));
    PathBuf::from(local_appdata)
        .join("Seekmark")
        .join("cache")
}
