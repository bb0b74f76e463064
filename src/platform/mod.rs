// Seekmark platform abstraction
// Provides platform-specific paths and utilities for Windows, macOS, and Linux.
//
// Uses `cfg(target_os)` for conditional compilation to select the correct
// platform-specific implementation at compile time.

use std::path::PathBuf;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "windows")]
mod windows;

/// Returns the platform-specific configuration directory for Seekmark.
///
/// - **Linux**: `~/.config/seekmark` (or `$XDG_CONFIG_HOME/seekmark`)
/// - **macOS**: `~/Library/Application Support/Seekmark`
/// - **Windows**: `%APPDATA%/Seekmark`
pub fn get_config_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_config_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_config_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_config_dir()
    }
}

/// Returns the platform-specific data directory for Seekmark.
///
/// - **Linux**: `~/.local/share/seekmark` (or `$XDG_DATA_HOME/seekmark`)
/// - **macOS**: `~/Library/Application Support/Seekmark`
/// - **Windows**: `%APPDATA%/Seekmark`
pub fn get_data_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_data_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_data_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_data_dir()
    }
}

/// Returns the platform-specific cache directory for Seekmark.
///
/// - **Linux**: `~/.cache/seekmark` (or `$XDG_CACHE_HOME/seekmark`)
/// - **macOS**: `~/Library/Caches/Seekmark`
/// - **Windows**: `%LOCALAPPDATA%/Seekmark/cache`
pub fn get_cache_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_cache_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_cache_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_cache_dir()
    }
}
