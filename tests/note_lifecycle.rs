//! Note lifecycle properties: id uniqueness, round-trips, timestamps,
//! and the silent no-op behavior on missing ids.

use std::collections::HashSet;

use tack::{AppState, Intent, NoteColor, NoteDraft, NoteId, Priority};

fn draft(title: &str) -> NoteDraft {
    NoteDraft::new(title, format!("{title} body"))
}

#[test]
fn ids_stay_unique_across_create_edit_delete_sequences() {
    let mut state = AppState::with_sample_data();

    // Interleave creates, edits, and deletes.
    let a = state.create_note(draft("a")).unwrap();
    let b = state.create_note(draft("b")).unwrap();
    state.edit_note(a, draft("a2")).unwrap();
    state.delete_note(b);
    let c = state.create_note(draft("c")).unwrap();
    state.delete_note(a);
    let d = state.create_note(draft("d")).unwrap();
    state.edit_note(c, draft("c2")).unwrap();
    let _ = d;

    let ids: Vec<u64> = state.store().notes().iter().map(|n| n.id.get()).collect();
    let unique: HashSet<u64> = ids.iter().copied().collect();
    assert_eq!(ids.len(), unique.len(), "duplicate note id found: {ids:?}");
}

#[test]
fn create_round_trips_every_draft_field() {
    let mut state = AppState::new();
    let mut d = draft("Weekly review");
    d.tags = vec!["planning".to_string(), "focus".to_string()];
    d.color = NoteColor::Blue;
    d.priority = Priority::High;

    let id = state.create_note(d.clone()).unwrap();
    let note = state.store().get(id).expect("created note must exist");

    assert_eq!(note.title, d.title);
    assert_eq!(note.content, d.content);
    assert_eq!(note.tags, d.tags);
    assert_eq!(note.color, d.color);
    assert_eq!(note.priority, d.priority);
    assert!(!note.is_pinned, "new notes start unpinned");
    assert_eq!(note.created_at, note.updated_at);
}

#[test]
fn edit_advances_updated_at_and_preserves_identity() {
    let mut state = AppState::new();
    let id = state.create_note(draft("original")).unwrap();
    let before = state.store().get(id).unwrap().clone();

    state.edit_note(id, draft("rewritten")).unwrap();
    let after = state.store().get(id).unwrap();

    assert_eq!(after.id, before.id);
    assert_eq!(after.created_at, before.created_at);
    assert!(
        after.updated_at > before.updated_at,
        "updated_at must strictly increase on edit"
    );
    assert_eq!(after.title, "rewritten");
}

#[test]
fn pin_toggle_does_not_count_as_an_edit() {
    let mut state = AppState::new();
    let id = state.create_note(draft("pinnable")).unwrap();
    let updated_before = state.store().get(id).unwrap().updated_at;

    state.toggle_pin(id);
    let note = state.store().get(id).unwrap();

    assert!(note.is_pinned);
    assert_eq!(
        note.updated_at, updated_before,
        "pinning is display state, not content"
    );
}

#[test]
fn operations_on_missing_ids_are_silent_no_ops() {
    let mut state = AppState::with_sample_data();
    let snapshot: Vec<_> = state.store().notes().to_vec();
    let ghost = NoteId::new(999);

    state.delete_note(ghost);
    state.toggle_pin(ghost);
    state.edit_note(ghost, draft("ghost")).unwrap();

    assert_eq!(state.store().notes(), snapshot.as_slice());
}

#[test]
fn validation_failures_leave_the_store_untouched() {
    let mut state = AppState::with_sample_data();
    let before = state.store().len();

    let blank_title = NoteDraft::new("   ", "content");
    assert!(state.apply(Intent::CreateNote(blank_title)).is_err());

    let blank_content = NoteDraft::new("title", "\n\t ");
    assert!(state.apply(Intent::CreateNote(blank_content)).is_err());

    assert_eq!(state.store().len(), before);
}

#[test]
fn saved_drafts_are_trimmed_and_deduplicated() {
    let mut state = AppState::new();
    let mut d = NoteDraft::new("  Padded title  ", "  padded content  ");
    d.tags = vec![
        " errands ".to_string(),
        "errands".to_string(),
        "  ".to_string(),
    ];

    let id = state.create_note(d).unwrap();
    let note = state.store().get(id).unwrap();

    assert_eq!(note.title, "Padded title");
    assert_eq!(note.content, "padded content");
    assert_eq!(note.tags, vec!["errands"]);
}
