// Seekmark platform paths for Linux
// Config: ~/.config/seekmark
// Data:   ~/.local/share/seekmark
// Cache:  ~/.cache/seekmark

use std::env;
use std::path::PathBuf;

/// Returns the configuration directory for Seekmark on Linux.
/// Uses `$XDG_CONFIG_HOME/seekmark` if set, otherwise `~/.config/seekmark`.
pub fn get_config_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        PathBuf::from(xdg).join("seekmark")
    } else {
        let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
        PathBuf::from(home).join(".config").join("seekmark")
    }
}

/// Returns the data directory for Seekmark on Linux.
/// Uses `$XDG_DATA_HOME/seekmark` if set, otherwise `~/.local/share/seekmark`.
pub fn get_data_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_DATA_HOME") {
        PathBuf::from(xdg).join("seekmark")
    } else {
        let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
        PathBuf::from(home)
            .join(".local")
            .join("share")
            .join("seekmark")
    }
}

/// Returns the cache directory for Seekmark on Linux.
/// Uses `$XDG_CACHE_HOME/seekmark` if set, otherwise `~/.cache/seekmark`.
pub fn get_cache_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CACHE_HOME") {
        PathBuf::from(xdg).join("seekmark")
    } else {
        let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
        PathBuf::from(home).join(".cache").join("seekmark")
    }
}
