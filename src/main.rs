//! Seekmark — timestamp bookmarks for streaming video.
//!
//! Entry point: an interactive console demo that exercises every component
//! against an in-memory database, standing in for the host platform the
//! library normally runs under.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::Arc;

use serde_json::{json, Value};

use seekmark::agent::Agent;
use seekmark::host::{ActiveTab, PageAccess, PanelNotifier, PresenceMaintainer};
use seekmark::managers::bookmark_editor::{
    BookmarkEditor, BookmarkEditorTrait, CreateOutcome, DuplicateDecision,
};
use seekmark::panel::Panel;
use seekmark::services::video_context;
use seekmark::storage::{BookmarkStore, Database, SqliteKeyValueStore};
use seekmark::types::bookmark::Bookmark;
use seekmark::types::errors::MessengerError;
use seekmark::types::message::{AgentNotice, Reply};
use seekmark::types::settings::{AppSettings, PanelSettings};
use seekmark::types::video::PlaybackState;

fn main() {
    env_logger::init();

    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║               Seekmark v{} — Demo Mode                    ║", env!("CARGO_PKG_VERSION"));
    println!("║       Timestamp bookmarks for streaming video              ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    demo_storage();
    demo_bookmark_store();
    demo_editor();
    demo_video_context();
    demo_messenger();
    demo_presence();
    demo_settings();

    println!();
    println!("═══════════════════════════════════════════════════════════════");
    println!("  ✅ All 7 components demonstrated successfully!");
    println!("  Seekmark is ready to sit under a host platform.");
    println!("═══════════════════════════════════════════════════════════════");
}

fn section(name: &str) {
    println!("───────────────────────────────────────────────────────────────");
    println!("  📦 {}", name);
    println!("───────────────────────────────────────────────────────────────");
}

fn demo_storage() {
    section("Storage Layer");

    let db = Database::open_in_memory().expect("Failed to open database");
    let tables: Vec<String> = {
        let conn = db.connection();
        let mut stmt = conn
            .prepare("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
            .unwrap();
        stmt.query_map([], |row| row.get(0))
            .unwrap()
            .filter_map(|r| r.ok())
            .collect()
    };
    println!("  Created {} tables: {}", tables.len(), tables.join(", "));
    println!("  ✓ Database + migrations OK");
    println!();
}

fn demo_bookmark_store() {
    use seekmark::storage::kv::KeyValueStore;
    section("Bookmark Store");

    let db = Arc::new(Database::open_in_memory().expect("Failed to open database"));
    let kv = Arc::new(SqliteKeyValueStore::new(db));
    let store = BookmarkStore::new(kv.clone());

    let all = store.get_all().unwrap();
    println!("  Fresh store holds {} video entries", all.len());

    store
        .replace_for(
            "dQw4w9WgXcQ",
            vec![Bookmark::at(212, "Never Gonna Give You Up", "the drop")],
        )
        .unwrap();
    let raw = kv.get("bookmarks").unwrap().unwrap();
    println!("  Persisted mapping under one key ({} bytes of JSON)", raw.len());
    println!("  ✓ Whole-mapping read/write OK");
    println!();
}

fn demo_editor() {
    section("Bookmark Editor");

    let editor = in_memory_editor();

    for ts in [700, 65, 3725] {
        let outcome = editor
            .create("talk42", ts, "Conference Talk", "", |_| DuplicateDecision::Proceed)
            .unwrap();
        if let CreateOutcome::Created { bookmark, index } = outcome {
            println!("  Saved {} at list position {}", bookmark.display_time, index);
        }
    }

    // One second away from an existing bookmark trips the duplicate check.
    let outcome = editor
        .create("talk42", 66, "Conference Talk", "", |existing| {
            println!(
                "  Duplicate prompt: a bookmark already sits at {}",
                existing.display_time
            );
            DuplicateDecision::Decline
        })
        .unwrap();
    println!("  Declined duplicate => {:?}", outcome);

    let list = editor.list("talk42").unwrap();
    let order: Vec<&str> = list.iter().map(|b| b.display_time.as_str()).collect();
    println!("  Playback order: {}", order.join(", "));

    let removed = editor.delete("talk42", 99).unwrap();
    println!("  Delete at out-of-range index removed anything: {}", removed);
    println!("  ✓ Create/list/delete with ordering OK");
    println!();
}

fn demo_video_context() {
    section("Video Context Reader");

    let url = "https://www.youtube.com/watch?v=jNQXAC9IVRw&t=5s";
    println!("  URL: {}", url);
    println!("  Watch page: {}", video_context::is_watch_page(url));
    println!("  Video id: {:?}", video_context::parse_video_id(url));
    println!("  floor_seconds(125.93) = {}", video_context::floor_seconds(125.93));
    println!("  ✓ Context derivation OK");
    println!();
}

/// In-process stand-in for a watch page with a playing video.
struct DemoPage {
    position: Cell<f64>,
}

impl PageAccess for DemoPage {
    fn page_url(&self) -> String {
        "https://www.youtube.com/watch?v=jNQXAC9IVRw".to_string()
    }

    fn video_title(&self) -> Option<String> {
        Some("Me at the zoo".to_string())
    }

    fn playback(&self) -> Option<PlaybackState> {
        Some(PlaybackState {
            position: self.position.get(),
            duration: 19.0,
        })
    }

    fn seek_and_play(&self, seconds: u64) -> bool {
        self.position.set(seconds as f64);
        true
    }
}

/// Delivers notices as their serialized wire form, into a queue the demo
/// drains toward the panel.
struct DemoNotifier {
    notices: Rc<RefCell<Vec<Value>>>,
}

impl PanelNotifier for DemoNotifier {
    fn bookmark_added(&self) -> Result<(), MessengerError> {
        self.notices.borrow_mut().push(json!(AgentNotice::BookmarkAdded));
        Ok(())
    }
}

/// Routes panel requests straight into an in-process agent, crossing the
/// result/error envelope both ways the way a real channel would.
struct DemoTab<'a> {
    agent: &'a Agent<DemoPage, DemoNotifier>,
}

impl ActiveTab for DemoTab<'_> {
    fn url(&self) -> Option<String> {
        Some("https://www.youtube.com/watch?v=jNQXAC9IVRw".to_string())
    }

    fn request_agent(&self, message: &Value) -> Result<Value, MessengerError> {
        let outcome = match self.agent.handle(message) {
            Some(outcome) => outcome,
            None => return Err(MessengerError::Unreachable("no handler".to_string())),
        };
        let wire = json!(Reply::from_outcome(outcome));
        let reply: Reply = serde_json::from_value(wire).expect("reply envelope decodes");
        reply.into_outcome().map_err(MessengerError::Failed)
    }

    fn direct_seek(&self, _seconds: u64) -> bool {
        false
    }
}

fn demo_messenger() {
    section("Panel / Agent Messenger");

    // Agent and panel editors share one store, as they do under a real host.
    let db = Arc::new(Database::open_in_memory().expect("Failed to open database"));
    let kv = Arc::new(SqliteKeyValueStore::new(db));
    let notices = Rc::new(RefCell::new(Vec::new()));

    let agent = Agent::new(
        DemoPage { position: Cell::new(7.4) },
        DemoNotifier { notices: notices.clone() },
        BookmarkEditor::new(BookmarkStore::new(kv.clone())),
    );

    let reply = agent.handle(&json!({"kind": "getVideoInfo"})).unwrap().unwrap();
    println!("  getVideoInfo => {}", reply);

    let panel = Panel::new(
        DemoTab { agent: &agent },
        BookmarkEditor::new(BookmarkStore::new(kv)),
        PanelSettings::default(),
    );
    let outcome = panel.jump(12).unwrap();
    println!("  jumpToTimestamp(12) took the {:?} path", outcome.path);

    let saved = agent.bookmark_current("great moment", |_| DuplicateDecision::Proceed);
    println!("  Page control click saved: {}", saved.is_ok());

    let notice = notices.borrow_mut().remove(0);
    println!("  Agent fired {}", notice);
    let refreshed = panel.handle_notice(&notice).unwrap().unwrap();
    println!("  Panel reloaded {} bookmark(s) from the store", refreshed.len());
    println!("  ✓ Request/response + notify OK");
    println!();
}

/// Stand-in for the host-side maintainer that keeps the page control alive.
struct DemoPresence {
    control_present: Cell<bool>,
    recreations: Cell<u32>,
}

impl PresenceMaintainer for DemoPresence {
    fn ensure_control(&self) {
        if !self.control_present.get() {
            self.control_present.set(true);
            self.recreations.set(self.recreations.get() + 1);
        }
    }
}

fn demo_presence() {
    section("Presence Maintainer");

    let presence = DemoPresence {
        control_present: Cell::new(false),
        recreations: Cell::new(0),
    };

    presence.ensure_control();
    presence.ensure_control();
    // The page rebuilds its chrome and drops the control; the next watchdog
    // tick puts it back.
    presence.control_present.set(false);
    presence.ensure_control();

    let control = AppSettings::default().control;
    println!("  Control recreated {} time(s)", presence.recreations.get());
    println!(
        "  Host cadence: up to {} attempts every {} ms, watchdog {} ms",
        control.max_retries, control.retry_interval_ms, control.watchdog_interval_ms
    );
    println!("  ✓ Presence contract OK");
    println!();
}

fn demo_settings() {
    section("Settings");

    let defaults = AppSettings::default();
    println!("  close_on_jump: {}", defaults.panel.close_on_jump);
    println!(
        "  control: {} retries every {} ms, watchdog {} ms",
        defaults.control.max_retries,
        defaults.control.retry_interval_ms,
        defaults.control.watchdog_interval_ms
    );
    println!(
        "  data dir resolves to {:?}",
        seekmark::app::App::resolve_data_dir(&defaults)
    );
    println!("  ✓ Settings defaults OK");
    println!();
}

fn in_memory_editor() -> BookmarkEditor {
    let db = Arc::new(Database::open_in_memory().expect("Failed to open database"));
    let kv = Arc::new(SqliteKeyValueStore::new(db));
    BookmarkEditor::new(BookmarkStore::new(kv))
}
