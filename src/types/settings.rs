use serde::{Deserialize, Serialize};

/// Top-level settings container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppSettings {
    pub storage: StorageSettings,
    pub panel: PanelSettings,
    pub control: ControlSettings,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            storage: StorageSettings::default(),
            panel: PanelSettings::default(),
            control: ControlSettings::default(),
        }
    }
}

/// Where bookmark data lives on disk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StorageSettings {
    /// Overrides the platform data directory for the bookmark database.
    pub data_dir: Option<String>,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self { data_dir: None }
    }
}

/// Management panel behavior.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PanelSettings {
    /// Close the panel after a successful jump to a timestamp.
    pub close_on_jump: bool,
}

impl Default for PanelSettings {
    fn default() -> Self {
        Self { close_on_jump: true }
    }
}

/// Knobs for host-side presence maintainers that keep the on-page bookmark
/// control alive across page rebuilds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ControlSettings {
    /// Injection attempts before giving up on a freshly loaded page.
    pub max_retries: u32,
    /// Delay between injection attempts, in milliseconds.
    pub retry_interval_ms: u64,
    /// Period of the re-injection watchdog, in milliseconds.
    pub watchdog_interval_ms: u64,
}

impl Default for ControlSettings {
    fn default() -> Self {
        Self {
            max_retries: 30,
            retry_interval_ms: 300,
            watchdog_interval_ms: 2000,
        }
    }
}
