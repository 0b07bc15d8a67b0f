use super::*;

fn draft(title: &str) -> NoteDraft {
    NoteDraft::new(title, format!("{title} body"))
}

fn tagged_draft(title: &str, tags: &[&str]) -> NoteDraft {
    let mut d = draft(title);
    d.tags = tags.iter().map(|t| t.to_string()).collect();
    d
}

#[test]
fn create_note_registers_its_tags() {
    let mut state = AppState::new();
    state
        .create_note(tagged_draft("note", &["work", "urgent"]))
        .expect("draft is valid");

    assert!(state.tags().contains("work"));
    assert!(state.tags().contains("urgent"));
}

#[test]
fn create_note_validation_failure_changes_nothing() {
    let mut state = AppState::new();
    state.open_new_note_editor();

    let result = state.create_note(draft("   "));
    assert_eq!(result, Err(DraftError::EmptyTitle));
    assert!(state.store().is_empty());
    assert!(state.tags().is_empty());
    // Editor stays open so the user can fix the draft.
    assert!(state.ui().note_modal_open);
}

#[test]
fn saving_closes_the_editor_and_resets_its_fields() {
    let mut state = AppState::new();
    let id = state.create_note(draft("existing")).unwrap();

    state.open_note_editor(id);
    assert!(state.ui().note_modal_open);
    assert_eq!(state.ui().editing_note, Some(id));

    state
        .edit_note(id, tagged_draft("edited", &["late"]))
        .unwrap();

    assert!(!state.ui().note_modal_open);
    assert_eq!(state.ui().editing_note, None);
    assert!(state.ui().draft_tags.is_empty());
    assert_eq!(state.store().get(id).unwrap().title, "edited");
}

#[test]
fn edit_missing_id_still_registers_tags() {
    let mut state = AppState::new();
    state
        .edit_note(NoteId::new(404), tagged_draft("ghost", &["haunt"]))
        .expect("valid draft");

    assert!(state.store().is_empty());
    assert!(state.tags().contains("haunt"));
}

#[test]
fn open_editor_for_existing_note_seeds_draft_tags() {
    let mut state = AppState::new();
    let id = state
        .create_note(tagged_draft("note", &["work", "home"]))
        .unwrap();

    state.open_note_editor(id);

    assert_eq!(state.ui().editing_note, Some(id));
    assert_eq!(state.ui().draft_tags, vec!["work", "home"]);
    assert!(state.ui().note_modal_open);
}

#[test]
fn open_editor_for_missing_note_is_a_no_op() {
    let mut state = AppState::new();
    state.open_note_editor(NoteId::new(9));

    assert!(!state.ui().note_modal_open);
    assert_eq!(state.ui().editing_note, None);
}

#[test]
fn open_editor_for_new_note_clears_previous_editing_state() {
    let mut state = AppState::new();
    let id = state.create_note(tagged_draft("note", &["work"])).unwrap();
    state.open_note_editor(id);

    state.open_new_note_editor();

    assert_eq!(state.ui().editing_note, None);
    assert!(state.ui().draft_tags.is_empty());
    assert!(state.ui().note_modal_open);
}

#[test]
fn select_tag_forces_notes_section() {
    let mut state = AppState::new();
    state.set_section(Section::Archive);

    state.select_tag("work");

    assert_eq!(state.ui().section, Section::Notes);
    assert_eq!(state.ui().selected_tag.as_deref(), Some("work"));
}

#[test]
fn set_section_clears_selected_tag() {
    let mut state = AppState::new();
    state.select_tag("work");

    state.set_section(Section::Trash);

    assert_eq!(state.ui().section, Section::Trash);
    assert_eq!(state.ui().selected_tag, None);
}

#[test]
fn delete_tag_cascades_everywhere() {
    let mut state = AppState::new();
    let kept = state
        .create_note(tagged_draft("keep", &["keep", "work"]))
        .unwrap();
    let other = state.create_note(tagged_draft("other", &["work"])).unwrap();
    state.select_tag("work");
    state.open_note_editor(kept);

    state.delete_tag("work");

    assert!(!state.tags().contains("work"));
    assert_eq!(state.store().get(kept).unwrap().tags, vec!["keep"]);
    assert!(state.store().get(other).unwrap().tags.is_empty());
    assert_eq!(state.ui().selected_tag, None);
    assert_eq!(state.ui().draft_tags, vec!["keep"]);
}

#[test]
fn delete_tag_leaves_other_selected_filter_alone() {
    let mut state = AppState::new();
    state.add_tag("work");
    state.add_tag("home");
    state.select_tag("home");

    state.delete_tag("work");

    assert_eq!(state.ui().selected_tag.as_deref(), Some("home"));
}

#[test]
fn delete_tag_never_attached_to_a_note_still_clears_registry() {
    let mut state = AppState::new();
    state.add_tag("work");

    state.delete_tag("work");

    assert!(!state.tags().contains("work"));
    for note in state.store().notes() {
        assert!(!note.has_tag("work"));
    }
}

#[test]
fn draft_tag_selection_has_set_semantics() {
    let mut state = AppState::new();
    state.open_new_note_editor();

    state.add_draft_tag("work");
    state.add_draft_tag("work");
    state.add_draft_tag("home");
    assert_eq!(state.ui().draft_tags, vec!["work", "home"]);

    state.remove_draft_tag("work");
    assert_eq!(state.ui().draft_tags, vec!["home"]);
}

#[test]
fn lists_follow_search_tag_and_sort_inputs() {
    let mut state = AppState::new();
    state
        .create_note(tagged_draft("alpha", &["work"]))
        .unwrap();
    state.create_note(draft("beta")).unwrap();

    state.set_search_term("alpha");
    assert_eq!(state.lists().len(), 1);

    state.set_search_term("");
    state.select_tag("work");
    let lists = state.lists();
    assert_eq!(lists.len(), 1);
    assert_eq!(lists.unpinned[0].title, "alpha");
}

#[test]
fn apply_routes_intents_to_transitions() {
    let mut state = AppState::new();

    state
        .apply(Intent::CreateNote(tagged_draft("note", &["work"])))
        .unwrap();
    let id = state.store().notes()[0].id;

    state.apply(Intent::TogglePin(id)).unwrap();
    assert!(state.store().get(id).unwrap().is_pinned);

    state.apply(Intent::SelectTag("work".to_string())).unwrap();
    assert_eq!(state.ui().selected_tag.as_deref(), Some("work"));

    state
        .apply(Intent::SetSortMode(SortMode::PriorityLowHigh))
        .unwrap();
    assert_eq!(state.ui().sort_mode, SortMode::PriorityLowHigh);

    state.apply(Intent::DeleteTag("work".to_string())).unwrap();
    assert_eq!(state.ui().selected_tag, None);

    state.apply(Intent::DeleteNote(id)).unwrap();
    assert!(state.store().is_empty());
}

#[test]
fn apply_surfaces_validation_failures() {
    let mut state = AppState::new();
    let result = state.apply(Intent::CreateNote(NoteDraft::new("", "body")));
    assert_eq!(result, Err(DraftError::EmptyTitle));
}

#[test]
fn tag_modal_open_close() {
    let mut state = AppState::new();
    state.apply(Intent::OpenTagModal).unwrap();
    assert!(state.ui().tag_modal_open);
    state.apply(Intent::CloseTagModal).unwrap();
    assert!(!state.ui().tag_modal_open);
}

#[test]
fn ui_state_serialization_roundtrip() {
    let mut state = AppState::with_sample_data();
    state.select_tag("planning");
    state.set_search_term("review");

    let json = serde_json::to_string(state.ui()).unwrap();
    let back: UiState = serde_json::from_str(&json).unwrap();

    assert_eq!(&back, state.ui());
}

#[test]
fn sample_data_keeps_registry_a_superset_of_note_tags() {
    let state = AppState::with_sample_data();

    assert_eq!(state.store().len(), 3);
    for note in state.store().notes() {
        for tag in &note.tags {
            assert!(
                state.tags().contains(tag),
                "tag {tag} on a note but missing from the registry"
            );
        }
    }
    // One registered tag has no note referencing it yet.
    assert!(state.tags().contains("ideas"));
    assert!(
        state
            .store()
            .notes()
            .iter()
            .all(|note| !note.has_tag("ideas"))
    );
}

#[test]
fn sample_data_ids_are_unique_and_counter_resumes_above_them() {
    let mut state = AppState::with_sample_data();

    let mut ids: Vec<u64> = state.store().notes().iter().map(|n| n.id.get()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), state.store().len());

    let new_id = state.create_note(draft("fresh")).unwrap();
    assert!(new_id.get() > *ids.last().unwrap());
}
