//! Integration-level unit tests for the SettingsEngine public API.
//!
//! These tests exercise the SettingsEngine through its public trait interface,
//! validating default loading, value persistence across instances, and reset
//! behavior.

use seekmark::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use seekmark::types::settings::AppSettings;
use tempfile::TempDir;

/// Helper: create a SettingsEngine backed by a temp directory that lives for
/// the duration of the test (the caller holds the `TempDir` handle).
fn engine_in_temp(dir: &TempDir) -> SettingsEngine {
    let path = dir
        .path()
        .join("settings.json")
        .to_string_lossy()
        .to_string();
    SettingsEngine::new(Some(path))
}

/// When no config file exists on disk, `load()` must return the built-in
/// default `AppSettings` so the tool can start with sensible values.
#[test]
fn test_load_defaults_when_no_config_file_exists() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);

    let settings = engine.load().unwrap();

    assert_eq!(
        settings,
        AppSettings::default(),
        "Loading without a config file must return default settings"
    );
}

/// `set_value` persists immediately: a second engine reading the same file
/// must observe the change.
#[test]
fn test_set_value_persists_across_instances() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    engine.load().unwrap();

    engine
        .set_value("control.max_retries", serde_json::json!(10))
        .unwrap();
    engine
        .set_value("panel.close_on_jump", serde_json::json!(false))
        .unwrap();

    let mut second = engine_in_temp(&dir);
    let loaded = second.load().unwrap();
    assert_eq!(loaded.control.max_retries, 10);
    assert!(!loaded.panel.close_on_jump);
}

/// `save` followed by `load` round-trips the full settings struct.
#[test]
fn test_save_load_roundtrip_preserves_all_sections() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    engine.load().unwrap();
    engine
        .set_value(
            "storage.data_dir",
            serde_json::json!("/srv/seekmark-data"),
        )
        .unwrap();
    engine.save().unwrap();

    let mut second = engine_in_temp(&dir);
    let loaded = second.load().unwrap();
    assert_eq!(
        loaded.storage.data_dir.as_deref(),
        Some("/srv/seekmark-data")
    );
    // Untouched sections keep their defaults.
    assert_eq!(loaded.control, AppSettings::default().control);
}

/// `reset` restores defaults both in memory and on disk.
#[test]
fn test_reset_restores_defaults_on_disk() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    engine.load().unwrap();
    engine
        .set_value("control.watchdog_interval_ms", serde_json::json!(9999))
        .unwrap();

    engine.reset().unwrap();

    let mut second = engine_in_temp(&dir);
    let loaded = second.load().unwrap();
    assert_eq!(loaded, AppSettings::default());
}

/// A settings file that is valid JSON but the wrong shape is a load error,
/// not a silent fallback to defaults.
#[test]
fn test_load_wrong_shape_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{"panel": {"close_on_jump": "yes please"}}"#).unwrap();

    let mut engine = SettingsEngine::new(Some(path.to_string_lossy().to_string()));
    assert!(engine.load().is_err());
}

/// Unknown or structurally invalid keys are rejected without touching the
/// stored file.
#[test]
fn test_invalid_keys_leave_the_file_untouched() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    engine.load().unwrap();
    engine.save().unwrap();
    let before = std::fs::read_to_string(engine.get_config_path()).unwrap();

    assert!(engine.set_value("panel.unknown_knob", serde_json::json!(1)).is_err());
    assert!(engine.set_value("", serde_json::json!(1)).is_err());

    let after = std::fs::read_to_string(engine.get_config_path()).unwrap();
    assert_eq!(before, after);
}
