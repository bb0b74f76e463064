//! Seekmark storage bridge.
//!
//! A line-delimited JSON server over stdin/stdout. The panel process spawns
//! this binary and keeps the pipe open for the life of the session.
//!
//! Request:  {"id": 1, "kind": "bookmarks.list", "payload": {"videoId": "abc"}}
//! Response: {"id": 1, "result": {...}}  or  {"id": 1, "error": "..."}
//!
//! On startup the bridge emits a ready event before reading any input:
//! {"event": "ready", "version": "..."}

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Mutex;

use log::{debug, error, info, warn};
use serde_json::{json, Value};

use seekmark::app::App;
use seekmark::bridge_handler::handle_kind;
use seekmark::services::settings_engine::{SettingsEngine, SettingsEngineTrait};

fn main() {
    env_logger::init();

    // Resolve the data directory before constructing the app. App::new loads
    // settings again for its own engine; this throwaway load only feeds the
    // path decision.
    let settings = {
        let mut engine = SettingsEngine::new(None);
        if let Err(e) = engine.load() {
            warn!("using default settings: {}", e);
        }
        engine.get_settings().clone()
    };
    let mut data_dir = App::resolve_data_dir(&settings);
    if let Err(e) = fs::create_dir_all(&data_dir) {
        // Last resort: keep the database next to the binary.
        warn!(
            "cannot use data directory {:?} ({}), falling back to the executable's directory",
            data_dir, e
        );
        data_dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|p| p.to_path_buf()))
            .unwrap_or_else(|| PathBuf::from("."));
    }
    let db_path = data_dir.join("seekmark.db");

    info!("Starting Seekmark bridge with database at {:?}", db_path);
    let app = Mutex::new(App::new(&db_path).expect("Failed to initialize Seekmark"));

    let stdout = io::stdout();
    let ready = json!({
        "event": "ready",
        "version": env!("CARGO_PKG_VERSION"),
    });
    {
        let mut out = stdout.lock();
        let _ = writeln!(out, "{}", ready);
        let _ = out.flush();
    }

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                error!("stdin read error: {}", e);
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let request: Value = match serde_json::from_str(&line) {
            Ok(v) => v,
            Err(e) => {
                respond(&stdout, json!({"id": null, "error": format!("parse error: {}", e)}));
                continue;
            }
        };

        let id = request.get("id").cloned().unwrap_or(Value::Null);
        let kind = request
            .get("kind")
            .and_then(|v| v.as_str())
            .unwrap_or("")
            .to_string();
        let payload = request.get("payload").cloned().unwrap_or(Value::Null);

        debug!("Bridge request id={} kind={}", id, kind);

        match handle_kind(&app, &kind, &payload) {
            Ok(result) => respond(&stdout, json!({"id": id, "result": result})),
            Err(message) => respond(&stdout, json!({"id": id, "error": message})),
        }
    }

    info!("Bridge stdin closed, shutting down");
}

fn respond(stdout: &io::Stdout, value: Value) {
    let mut out = stdout.lock();
    if writeln!(out, "{}", value).is_err() {
        // Panel side hung up; nothing left to serve.
        std::process::exit(0);
    }
    let _ = out.flush();
}
