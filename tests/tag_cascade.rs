//! Tag registry properties: idempotent adds, the deletion cascade, and
//! the registry-superset invariant.

use tack::{AppState, Intent, NoteDraft};

fn tagged(title: &str, tags: &[&str]) -> NoteDraft {
    let mut d = NoteDraft::new(title, format!("{title} body"));
    d.tags = tags.iter().map(|t| t.to_string()).collect();
    d
}

#[test]
fn add_tag_is_idempotent() {
    let mut state = AppState::new();

    assert!(state.add_tag("work"));
    assert!(!state.add_tag("work"));
    assert_eq!(state.tags().len(), 1);
}

#[test]
fn creating_notes_registers_unknown_tags() {
    let mut state = AppState::new();
    state.add_tag("known");

    state
        .create_note(tagged("note", &["known", "fresh"]))
        .unwrap();

    assert!(state.tags().contains("known"));
    assert!(state.tags().contains("fresh"));
    assert_eq!(state.tags().len(), 2);
}

#[test]
fn delete_tag_strips_it_from_every_note_that_had_it() {
    let mut state = AppState::new();
    let with_it = state.create_note(tagged("a", &["work", "keep"])).unwrap();
    let also_with_it = state.create_note(tagged("b", &["work"])).unwrap();
    let without_it = state.create_note(tagged("c", &["keep"])).unwrap();

    state.delete_tag("work");

    assert_eq!(state.store().get(with_it).unwrap().tags, vec!["keep"]);
    assert!(state.store().get(also_with_it).unwrap().tags.is_empty());
    assert_eq!(state.store().get(without_it).unwrap().tags, vec!["keep"]);
    assert!(!state.tags().contains("work"));
}

#[test]
fn delete_tag_clears_the_selected_filter_iff_it_matches() {
    let mut state = AppState::new();
    state.add_tag("work");
    state.add_tag("home");

    state.select_tag("work");
    state.delete_tag("home");
    assert_eq!(
        state.ui().selected_tag.as_deref(),
        Some("work"),
        "unrelated deletion must not clear the filter"
    );

    state.delete_tag("work");
    assert_eq!(state.ui().selected_tag, None);
}

#[test]
fn delete_tag_that_no_note_ever_carried_still_clears_the_registry() {
    let mut state = AppState::with_sample_data();
    state.add_tag("ephemeral");

    state.delete_tag("ephemeral");

    assert!(!state.tags().contains("ephemeral"));
    for note in state.store().notes() {
        assert!(!note.has_tag("ephemeral"));
    }
}

#[test]
fn delete_tag_reaches_the_open_editor_selection() {
    let mut state = AppState::new();
    let id = state.create_note(tagged("note", &["work", "keep"])).unwrap();
    state.open_note_editor(id);
    assert_eq!(state.ui().draft_tags, vec!["work", "keep"]);

    state.apply(Intent::DeleteTag("work".to_string())).unwrap();

    assert_eq!(state.ui().draft_tags, vec!["keep"]);
}

#[test]
fn registry_remains_a_superset_of_note_tags() {
    let mut state = AppState::with_sample_data();
    state.create_note(tagged("x", &["alpha"])).unwrap();
    let id = state.create_note(tagged("y", &["beta"])).unwrap();
    state.edit_note(id, tagged("y", &["gamma"])).unwrap();
    state.delete_tag("alpha");

    for note in state.store().notes() {
        for tag in &note.tags {
            assert!(
                state.tags().contains(tag),
                "note tag {tag} missing from registry"
            );
        }
    }
}

#[test]
fn editing_in_a_new_tag_registers_it() {
    let mut state = AppState::new();
    let id = state.create_note(tagged("note", &[])).unwrap();

    state
        .apply(Intent::EditNote {
            id,
            draft: tagged("note", &["added-later"]),
        })
        .unwrap();

    assert!(state.tags().contains("added-later"));
    assert_eq!(state.store().get(id).unwrap().tags, vec!["added-later"]);
}
