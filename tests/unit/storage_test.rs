//! Unit tests for the storage layer: the key-value primitive and the
//! bookmark store's whole-mapping read/write behavior.

use std::sync::Arc;

use seekmark::storage::bookmark_store::{BookmarkStore, STORAGE_KEY};
use seekmark::storage::kv::{KeyValueStore, SqliteKeyValueStore};
use seekmark::storage::{migrations, Database};
use seekmark::types::bookmark::Bookmark;
use seekmark::types::errors::StoreError;

fn setup() -> (Arc<SqliteKeyValueStore>, BookmarkStore) {
    let db = Arc::new(Database::open_in_memory().expect("Failed to open in-memory database"));
    let kv = Arc::new(SqliteKeyValueStore::new(db));
    let store = BookmarkStore::new(kv.clone());
    (kv, store)
}

/// A key-value layer whose backing storage can no longer be reached.
struct BrokenKv;

impl KeyValueStore for BrokenKv {
    fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Unavailable("backing storage gone".to_string()))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("backing storage gone".to_string()))
    }
}

// ─── Migrations ───

#[test]
fn migrations_create_kv_table_and_record_version() {
    let db = Database::open_in_memory().unwrap();
    assert_eq!(
        migrations::get_schema_version(db.connection()),
        migrations::CURRENT_SCHEMA_VERSION
    );

    // The kv table exists and is usable straight away.
    let count: i64 = db
        .connection()
        .query_row("SELECT COUNT(*) FROM kv_store", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 0);
}

#[test]
fn migrations_are_idempotent() {
    let db = Database::open_in_memory().unwrap();
    migrations::run_all(db.connection()).unwrap();
    migrations::run_all(db.connection()).unwrap();
    assert_eq!(
        migrations::get_schema_version(db.connection()),
        migrations::CURRENT_SCHEMA_VERSION
    );
}

// ─── Key-value primitive ───

#[test]
fn kv_get_missing_key_is_none() {
    let (kv, _) = setup();
    assert_eq!(kv.get("never-written").unwrap(), None);
}

#[test]
fn kv_set_then_get_roundtrips() {
    let (kv, _) = setup();
    kv.set("greeting", "hello").unwrap();
    assert_eq!(kv.get("greeting").unwrap().as_deref(), Some("hello"));
}

#[test]
fn kv_set_overwrites_existing_value() {
    let (kv, _) = setup();
    kv.set("k", "first").unwrap();
    kv.set("k", "second").unwrap();
    assert_eq!(kv.get("k").unwrap().as_deref(), Some("second"));
}

// ─── Bookmark store ───

#[test]
fn get_all_on_fresh_store_is_empty_mapping() {
    let (_, store) = setup();
    assert!(store.get_all().unwrap().is_empty());
}

#[test]
fn get_for_unknown_video_is_empty_list() {
    let (_, store) = setup();
    assert!(store.get_for("unseen").unwrap().is_empty());
}

#[test]
fn replace_for_persists_under_the_single_key() {
    let (kv, store) = setup();
    store
        .replace_for("abc", vec![Bookmark::at(125, "My Video", "")])
        .unwrap();

    let raw = kv.get(STORAGE_KEY).unwrap().expect("mapping was written");
    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(parsed["abc"][0]["timestampSeconds"], 125);
    assert_eq!(parsed["abc"][0]["displayTime"], "2:05");

    let list = store.get_for("abc").unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].title, "My Video");
}

#[test]
fn replace_for_leaves_other_videos_untouched() {
    let (_, store) = setup();
    store
        .replace_for("one", vec![Bookmark::at(10, "First", "")])
        .unwrap();
    store
        .replace_for("two", vec![Bookmark::at(20, "Second", "")])
        .unwrap();

    let all = store.get_all().unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all["one"][0].timestamp_seconds, 10);
    assert_eq!(all["two"][0].timestamp_seconds, 20);
}

#[test]
fn replacing_with_empty_list_retains_the_key() {
    let (_, store) = setup();
    store
        .replace_for("abc", vec![Bookmark::at(5, "Short", "")])
        .unwrap();
    store.replace_for("abc", vec![]).unwrap();

    let all = store.get_all().unwrap();
    assert!(all.contains_key("abc"));
    assert!(all["abc"].is_empty());
}

#[test]
fn malformed_stored_json_surfaces_as_malformed() {
    let (kv, store) = setup();
    kv.set(STORAGE_KEY, "{ not json").unwrap();
    match store.get_all() {
        Err(StoreError::Malformed(_)) => {}
        other => panic!("expected Malformed, got {:?}", other),
    }
}

#[test]
fn unreachable_layer_surfaces_as_unavailable() {
    let store = BookmarkStore::new(Arc::new(BrokenKv));
    match store.get_all() {
        Err(StoreError::Unavailable(_)) => {}
        other => panic!("expected Unavailable, got {:?}", other),
    }
    match store.replace_for("abc", vec![]) {
        Err(StoreError::Unavailable(_)) => {}
        other => panic!("expected Unavailable, got {:?}", other),
    }
}

// ─── Lost-update hazard (accepted behavior) ───

/// Two stores over the same layer interleaving read-modify-write: the later
/// write wins and the earlier mutation is silently discarded. This pins the
/// accepted last-write-wins behavior; it is not a bug to fix quietly.
#[test]
fn two_writers_last_write_wins() {
    let (kv, store_a) = setup();
    let store_b = BookmarkStore::new(kv.clone());

    store_a
        .replace_for("vid", vec![Bookmark::at(100, "Base", "")])
        .unwrap();

    // Both writers read the same state, then write in turn.
    let mut list_a = store_a.get_for("vid").unwrap();
    let mut list_b = store_b.get_for("vid").unwrap();

    list_a.push(Bookmark::at(200, "From A", ""));
    store_a.replace_for("vid", list_a).unwrap();

    list_b.retain(|b| b.timestamp_seconds != 100);
    store_b.replace_for("vid", list_b).unwrap();

    // B's delete won; A's insert is gone.
    let final_list = store_a.get_for("vid").unwrap();
    assert!(final_list.is_empty());
}
