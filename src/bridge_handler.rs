//! Bridge kind dispatch for the Seekmark stdio protocol.
//!
//! Extracted from `bridge_server.rs` so it can be unit-tested independently.
//! `handle_kind` dispatches storage-bridge requests to the editor, the
//! store, and the settings engine via the `App` struct.

use std::sync::Mutex;

use serde_json::{json, Value};

use crate::app::App;
use crate::managers::bookmark_editor::{BookmarkEditorTrait, CreateOutcome, DuplicateDecision};
use crate::services::settings_engine::SettingsEngineTrait;
use crate::storage::bookmark_store::BookmarkStore;

/// Dispatch a bridge request to the appropriate handler.
///
/// Returns `Ok(Value)` on success or `Err(String)` with an error message.
/// The bridge answers every request, so an unrecognized kind is an error
/// here, unlike the page messenger which stays silent.
pub fn handle_kind(app: &Mutex<App>, kind: &str, payload: &Value) -> Result<Value, String> {
    match kind {
        // ─── Liveness ───
        "ping" => Ok(json!({"pong": true})),

        // ─── Bookmarks ───
        "bookmarks.all" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            let store = BookmarkStore::new(a.kv.clone());
            let all = store.get_all().map_err(|e| e.to_string())?;
            serde_json::to_value(&all).map_err(|e| e.to_string())
        }
        "bookmarks.list" => {
            let video_id = payload
                .get("videoId")
                .and_then(|v| v.as_str())
                .ok_or("missing videoId")?;
            let a = app.lock().map_err(|e| e.to_string())?;
            let editor = a.editor();
            let items = editor.list(video_id).map_err(|e| e.to_string())?;
            Ok(json!({"items": items}))
        }
        "bookmarks.create" => {
            let video_id = payload
                .get("videoId")
                .and_then(|v| v.as_str())
                .ok_or("missing videoId")?;
            let timestamp = payload
                .get("timestamp")
                .and_then(|v| v.as_u64())
                .ok_or("missing timestamp")?;
            let title = payload.get("title").and_then(|v| v.as_str()).unwrap_or("");
            let note = payload.get("note").and_then(|v| v.as_str()).unwrap_or("");
            let proceed = payload
                .get("proceedOnDuplicate")
                .and_then(|v| v.as_bool())
                .unwrap_or(false);

            let a = app.lock().map_err(|e| e.to_string())?;
            let editor = a.editor();

            // No caller can block mid-request, so the decision point is
            // rendered two-phase: report the duplicate, let the caller retry
            // with proceedOnDuplicate set.
            let decision = if proceed {
                DuplicateDecision::Proceed
            } else {
                DuplicateDecision::Decline
            };
            let mut duplicate = None;
            let outcome = editor
                .create(video_id, timestamp, title, note, |existing| {
                    duplicate = Some(existing.clone());
                    decision
                })
                .map_err(|e| e.to_string())?;

            match outcome {
                CreateOutcome::Created { bookmark, index } => Ok(json!({
                    "created": true,
                    "index": index,
                    "bookmark": bookmark,
                })),
                CreateOutcome::DuplicateDeclined => Ok(json!({
                    "created": false,
                    "duplicate": duplicate,
                })),
            }
        }
        "bookmarks.delete" => {
            let video_id = payload
                .get("videoId")
                .and_then(|v| v.as_str())
                .ok_or("missing videoId")?;
            let index = payload
                .get("index")
                .and_then(|v| v.as_i64())
                .ok_or("missing index")?;
            let a = app.lock().map_err(|e| e.to_string())?;
            let editor = a.editor();
            // A negative index is the same out-of-range no-op as an
            // overlarge one.
            let removed = if index < 0 {
                false
            } else {
                editor
                    .delete(video_id, index as usize)
                    .map_err(|e| e.to_string())?
            };
            Ok(json!({"removed": removed}))
        }

        // ─── Settings ───
        "settings.get" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            let settings = a.settings_engine.get_settings();
            serde_json::to_value(settings).map_err(|e| e.to_string())
        }
        "settings.set" => {
            let key = payload
                .get("key")
                .and_then(|v| v.as_str())
                .ok_or("missing key")?;
            let value = payload.get("value").cloned().ok_or("missing value")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.settings_engine
                .set_value(key, value)
                .map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }

        _ => Err(format!("unknown kind: {}", kind)),
    }
}
