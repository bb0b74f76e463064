//! Unit tests for the bookmark editor: create with near-duplicate
//! detection, ordering on insert, delete by position, and listing.

use std::cell::Cell;
use std::sync::Arc;

use seekmark::managers::bookmark_editor::{
    BookmarkEditor, BookmarkEditorTrait, CreateOutcome, DuplicateDecision, DUPLICATE_WINDOW_SECS,
};
use seekmark::storage::{BookmarkStore, Database, SqliteKeyValueStore};
use seekmark::types::bookmark::FALLBACK_TITLE;
use seekmark::types::errors::EditorError;

fn setup() -> (BookmarkEditor, BookmarkStore) {
    let db = Arc::new(Database::open_in_memory().expect("Failed to open in-memory database"));
    let kv: Arc<SqliteKeyValueStore> = Arc::new(SqliteKeyValueStore::new(db));
    let editor = BookmarkEditor::new(BookmarkStore::new(kv.clone()));
    let store = BookmarkStore::new(kv);
    (editor, store)
}

fn proceed(
    _b: &seekmark::types::bookmark::Bookmark,
) -> DuplicateDecision {
    DuplicateDecision::Proceed
}

// ─── Create ───

#[test]
fn create_on_empty_store_returns_record_with_display_time() {
    let (editor, _) = setup();

    let outcome = editor
        .create("abc", 125, "My Video", "", proceed)
        .unwrap();

    match outcome {
        CreateOutcome::Created { bookmark, index } => {
            assert_eq!(index, 0);
            assert_eq!(bookmark.timestamp_seconds, 125);
            assert_eq!(bookmark.display_time, "2:05");
            assert_eq!(bookmark.title, "My Video");
            assert!(bookmark.note.is_empty());
            assert!(!bookmark.created_at.is_empty());
        }
        other => panic!("expected Created, got {:?}", other),
    }

    let list = editor.list("abc").unwrap();
    assert_eq!(list.len(), 1);
}

#[test]
fn creates_out_of_order_come_back_in_playback_order() {
    let (editor, _) = setup();

    editor.create("abc", 700, "Talk", "", proceed).unwrap();
    editor.create("abc", 65, "Talk", "", proceed).unwrap();

    let list = editor.list("abc").unwrap();
    let times: Vec<u64> = list.iter().map(|b| b.timestamp_seconds).collect();
    assert_eq!(times, vec![65, 700]);
    assert_eq!(list[0].display_time, "1:05");
    assert_eq!(list[1].display_time, "11:40");
}

#[test]
fn create_reports_final_position_within_the_list() {
    let (editor, _) = setup();

    editor.create("abc", 100, "Talk", "", proceed).unwrap();
    editor.create("abc", 300, "Talk", "", proceed).unwrap();

    let outcome = editor.create("abc", 200, "Talk", "", proceed).unwrap();
    match outcome {
        CreateOutcome::Created { index, .. } => assert_eq!(index, 1),
        other => panic!("expected Created, got {:?}", other),
    }
}

#[test]
fn empty_title_falls_back_to_untitled() {
    let (editor, _) = setup();

    editor.create("abc", 10, "   ", "a note", proceed).unwrap();

    let list = editor.list("abc").unwrap();
    assert_eq!(list[0].title, FALLBACK_TITLE);
    assert_eq!(list[0].note, "a note");
}

#[test]
fn empty_video_id_is_rejected_before_any_write() {
    let (editor, store) = setup();

    let result = editor.create("", 10, "Title", "", proceed);
    assert!(matches!(result, Err(EditorError::EmptyVideoId)));
    assert!(store.get_all().unwrap().is_empty());
}

// ─── Duplicate decision point ───

#[test]
fn near_duplicate_consults_the_caller_before_writing() {
    let (editor, _) = setup();
    editor.create("abc", 100, "Talk", "", proceed).unwrap();

    let consulted = Cell::new(false);
    let outcome = editor
        .create("abc", 101, "Talk", "", |existing| {
            consulted.set(true);
            assert_eq!(existing.timestamp_seconds, 100);
            DuplicateDecision::Decline
        })
        .unwrap();

    assert!(consulted.get());
    assert_eq!(outcome, CreateOutcome::DuplicateDeclined);
    assert_eq!(editor.list("abc").unwrap().len(), 1);
}

#[test]
fn proceeding_past_the_duplicate_inserts_a_second_record() {
    let (editor, _) = setup();
    editor.create("abc", 100, "Talk", "", proceed).unwrap();

    let outcome = editor.create("abc", 101, "Talk", "", proceed).unwrap();
    assert!(matches!(outcome, CreateOutcome::Created { .. }));
    assert_eq!(editor.list("abc").unwrap().len(), 2);
}

#[test]
fn timestamps_exactly_at_the_window_edge_are_not_duplicates() {
    let (editor, _) = setup();
    editor.create("abc", 100, "Talk", "", proceed).unwrap();

    // abs(102 - 100) == 2 is outside the strict window.
    let outcome = editor
        .create("abc", 100 + DUPLICATE_WINDOW_SECS, "Talk", "", |_| {
            panic!("duplicate check should not fire")
        })
        .unwrap();
    assert!(matches!(outcome, CreateOutcome::Created { .. }));
}

// ─── Delete ───

#[test]
fn create_then_delete_at_returned_index_restores_prior_list() {
    let (editor, _) = setup();
    editor.create("abc", 50, "Talk", "", proceed).unwrap();
    editor.create("abc", 150, "Talk", "", proceed).unwrap();
    let before = editor.list("abc").unwrap();

    let outcome = editor.create("abc", 100, "Talk", "", proceed).unwrap();
    let index = match outcome {
        CreateOutcome::Created { index, .. } => index,
        other => panic!("expected Created, got {:?}", other),
    };

    assert!(editor.delete("abc", index).unwrap());
    assert_eq!(editor.list("abc").unwrap(), before);
}

#[test]
fn delete_last_bookmark_retains_the_video_key() {
    let (editor, store) = setup();
    editor.create("abc", 10, "Talk", "", proceed).unwrap();

    assert!(editor.delete("abc", 0).unwrap());

    assert!(editor.list("abc").unwrap().is_empty());
    let all = store.get_all().unwrap();
    assert!(all.contains_key("abc"));
    assert!(all["abc"].is_empty());
}

#[test]
fn delete_out_of_range_is_a_silent_no_op() {
    let (editor, _) = setup();
    editor.create("abc", 10, "Talk", "", proceed).unwrap();
    let before = editor.list("abc").unwrap();

    assert!(!editor.delete("abc", 1).unwrap());
    assert!(!editor.delete("abc", 99).unwrap());
    assert!(!editor.delete("unknown-video", 0).unwrap());

    assert_eq!(editor.list("abc").unwrap(), before);
}

// ─── List ───

#[test]
fn list_unknown_video_is_empty() {
    let (editor, _) = setup();
    assert!(editor.list("never-bookmarked").unwrap().is_empty());
}
