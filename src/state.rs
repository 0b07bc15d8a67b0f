//! Application state container and transition rules.
//!
//! One [`AppState`] owns the note store, the tag registry, and the
//! transient UI state. All mutation is funneled through the named
//! transition methods (or the [`Intent`] sum type via [`AppState::apply`]);
//! the view layer only reads snapshots and dispatches intents. Every
//! transition is synchronous and atomic; there are no partial updates to
//! observe.

use serde::{Deserialize, Serialize};
use std::fmt;
use time::macros::datetime;

use crate::models::{DraftError, NoteBuilder, NoteColor, NoteDraft, NoteId, Priority, SortMode};
use crate::query::{self, NoteLists};
use crate::store::NoteStore;
use crate::tags::TagRegistry;

/// Navigation section shown in the sidebar.
///
/// Only `Notes` renders content in this version; the other sections are
/// placeholders that clear the tag filter and show an empty pane.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Notes,
    Edit,
    Archive,
    Trash,
}

impl Section {
    /// All sections in sidebar order.
    pub const ALL: [Section; 4] = [
        Section::Notes,
        Section::Edit,
        Section::Archive,
        Section::Trash,
    ];

    /// Sidebar label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Notes => "Notes",
            Self::Edit => "Edit Notes",
            Self::Archive => "Archive",
            Self::Trash => "Trash",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Transient interaction state. Not persisted anywhere.
///
/// `editing_note` and `draft_tags` only carry meaning while the note
/// editor is open; closing the editor resets them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiState {
    /// Active navigation section.
    pub section: Section,
    /// At most one selected tag filter.
    pub selected_tag: Option<String>,
    /// Free-text search term.
    pub search_term: String,
    /// Active sort mode.
    pub sort_mode: SortMode,
    /// Whether the note editor modal is open.
    pub note_modal_open: bool,
    /// Whether the tag modal is open.
    pub tag_modal_open: bool,
    /// The note being edited, if the editor was opened on an existing note.
    pub editing_note: Option<NoteId>,
    /// In-progress tag selection for the open note editor.
    pub draft_tags: Vec<String>,
}

/// The closed set of user intents.
///
/// One variant per operation; each carries exactly the fields its
/// handler needs, so invalid intents are unrepresentable.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    CreateNote(NoteDraft),
    EditNote { id: NoteId, draft: NoteDraft },
    DeleteNote(NoteId),
    TogglePin(NoteId),
    AddTag(String),
    DeleteTag(String),
    SetSearchTerm(String),
    SetSortMode(SortMode),
    SelectTag(String),
    SetSection(Section),
    OpenNewNoteEditor,
    OpenNoteEditor(NoteId),
    CloseNoteEditor,
    OpenTagModal,
    CloseTagModal,
    AddDraftTag(String),
    RemoveDraftTag(String),
}

/// Explicitly owned state container for the whole app.
///
/// # Examples
///
/// ```
/// use tack::{AppState, Intent, NoteDraft};
///
/// let mut state = AppState::new();
/// state.apply(Intent::CreateNote(NoteDraft::new("Groceries", "oat milk")))?;
///
/// let lists = state.lists();
/// assert_eq!(lists.unpinned.len(), 1);
/// assert!(lists.pinned.is_empty());
/// # Ok::<(), tack::DraftError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct AppState {
    store: NoteStore,
    tags: TagRegistry,
    ui: UiState,
}

impl AppState {
    /// Creates an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the state the app boots with: three notes and a registry
    /// holding one tag no note references yet.
    pub fn with_sample_data() -> Self {
        let seeded_at = datetime!(2025-03-01 09:30 UTC);
        let notes = vec![
            NoteBuilder::new()
                .id(NoteId::new(1))
                .title("Weekly review")
                .content("Plan the week, clear the inbox, pick three priorities.")
                .tags(["planning"])
                .color(NoteColor::Blue)
                .priority(Priority::High)
                .pinned(true)
                .created_at(seeded_at)
                .updated_at(seeded_at)
                .build(),
            NoteBuilder::new()
                .id(NoteId::new(2))
                .title("Reading list")
                .content("The Soul of a New Machine. Working in Public.")
                .tags(["reading"])
                .color(NoteColor::Pink)
                .priority(Priority::Medium)
                .pinned(true)
                .created_at(seeded_at)
                .updated_at(seeded_at)
                .build(),
            NoteBuilder::new()
                .id(NoteId::new(3))
                .title("Call the plumber")
                .content("Kitchen tap still drips. Ask about the radiator too.")
                .tags(["errands"])
                .color(NoteColor::White)
                .priority(Priority::Low)
                .created_at(seeded_at)
                .updated_at(seeded_at)
                .build(),
        ];

        Self {
            store: NoteStore::with_notes(notes),
            tags: TagRegistry::from_names(["planning", "reading", "errands", "ideas"]),
            ui: UiState::default(),
        }
    }

    /// Read-only view of the note store.
    pub fn store(&self) -> &NoteStore {
        &self.store
    }

    /// Read-only view of the tag registry.
    pub fn tags(&self) -> &TagRegistry {
        &self.tags
    }

    /// Read-only view of the UI state.
    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    /// Derives the pinned/unpinned display lists from the current state.
    pub fn lists(&self) -> NoteLists {
        query::build_lists(
            self.store.notes(),
            &self.ui.search_term,
            self.ui.selected_tag.as_deref(),
            self.ui.sort_mode,
        )
    }

    /// Applies one intent.
    ///
    /// # Errors
    ///
    /// Only the save intents (`CreateNote`, `EditNote`) can fail, with a
    /// [`DraftError`] when title or content are empty after trimming; the
    /// state is left unchanged in that case.
    pub fn apply(&mut self, intent: Intent) -> Result<(), DraftError> {
        match intent {
            Intent::CreateNote(draft) => {
                self.create_note(draft)?;
            }
            Intent::EditNote { id, draft } => self.edit_note(id, draft)?,
            Intent::DeleteNote(id) => self.delete_note(id),
            Intent::TogglePin(id) => self.toggle_pin(id),
            Intent::AddTag(name) => {
                self.add_tag(&name);
            }
            Intent::DeleteTag(name) => self.delete_tag(&name),
            Intent::SetSearchTerm(term) => self.set_search_term(term),
            Intent::SetSortMode(mode) => self.set_sort_mode(mode),
            Intent::SelectTag(name) => self.select_tag(name),
            Intent::SetSection(section) => self.set_section(section),
            Intent::OpenNewNoteEditor => self.open_new_note_editor(),
            Intent::OpenNoteEditor(id) => self.open_note_editor(id),
            Intent::CloseNoteEditor => self.close_note_editor(),
            Intent::OpenTagModal => self.open_tag_modal(),
            Intent::CloseTagModal => self.close_tag_modal(),
            Intent::AddDraftTag(name) => self.add_draft_tag(name),
            Intent::RemoveDraftTag(name) => self.remove_draft_tag(&name),
        }
        Ok(())
    }

    /// Creates a note from the draft and returns its id.
    ///
    /// Registers every tag the draft carries, then closes the note
    /// editor (saving implicitly closes it; a no-op when it was not
    /// open).
    ///
    /// # Errors
    ///
    /// Returns a [`DraftError`] when title or content are empty after
    /// trimming; nothing changes in that case.
    pub fn create_note(&mut self, draft: NoteDraft) -> Result<NoteId, DraftError> {
        draft.validate()?;
        let draft = draft.normalized();
        self.register_draft_tags(&draft);
        let id = self.store.add(draft);
        self.close_note_editor();
        Ok(id)
    }

    /// Replaces the mutable fields of an existing note.
    ///
    /// Same tag-registration cascade and implicit editor close as
    /// [`Self::create_note`]. Editing a missing id is a silent no-op
    /// (the registry cascade still runs, matching create).
    ///
    /// # Errors
    ///
    /// Returns a [`DraftError`] when title or content are empty after
    /// trimming; nothing changes in that case.
    pub fn edit_note(&mut self, id: NoteId, draft: NoteDraft) -> Result<(), DraftError> {
        draft.validate()?;
        let draft = draft.normalized();
        self.register_draft_tags(&draft);
        self.store.edit(id, draft);
        self.close_note_editor();
        Ok(())
    }

    /// Removes a note. No-op when the id is absent.
    pub fn delete_note(&mut self, id: NoteId) {
        self.store.remove(id);
    }

    /// Flips a note's pin flag. No-op when the id is absent.
    pub fn toggle_pin(&mut self, id: NoteId) {
        self.store.toggle_pin(id);
    }

    /// Adds a tag to the registry. Returns `true` when it was new.
    pub fn add_tag(&mut self, name: &str) -> bool {
        self.tags.add(name)
    }

    /// Deletes a tag and cascades.
    ///
    /// Removes the name from the registry, from every note's tag list,
    /// from the selected-tag filter when it matches, and from the
    /// in-progress editor tag selection. Runs even when the registry
    /// never held the name, so stale references cannot survive.
    pub fn delete_tag(&mut self, name: &str) {
        self.tags.remove(name);
        self.store.strip_tag(name);
        if self.ui.selected_tag.as_deref() == Some(name) {
            self.ui.selected_tag = None;
        }
        self.ui.draft_tags.retain(|t| t != name);
    }

    /// Sets the free-text search term.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.ui.search_term = term.into();
    }

    /// Sets the active sort mode.
    pub fn set_sort_mode(&mut self, mode: SortMode) {
        self.ui.sort_mode = mode;
    }

    /// Selects a tag filter; forces the notes section active.
    pub fn select_tag(&mut self, name: impl Into<String>) {
        self.ui.selected_tag = Some(name.into());
        self.ui.section = Section::Notes;
    }

    /// Activates a navigation section and clears the tag filter.
    pub fn set_section(&mut self, section: Section) {
        self.ui.section = section;
        self.ui.selected_tag = None;
    }

    /// Opens the note editor for a new note.
    pub fn open_new_note_editor(&mut self) {
        self.ui.editing_note = None;
        self.ui.draft_tags.clear();
        self.ui.note_modal_open = true;
    }

    /// Opens the note editor on an existing note, seeding the
    /// in-progress tag selection from the note's current tags. No-op
    /// when the id is absent.
    pub fn open_note_editor(&mut self, id: NoteId) {
        let Some(note) = self.store.get(id) else {
            return;
        };
        self.ui.draft_tags = note.tags.clone();
        self.ui.editing_note = Some(id);
        self.ui.note_modal_open = true;
    }

    /// Closes the note editor, resetting its transient fields.
    pub fn close_note_editor(&mut self) {
        self.ui.note_modal_open = false;
        self.ui.editing_note = None;
        self.ui.draft_tags.clear();
    }

    /// Opens the tag modal.
    pub fn open_tag_modal(&mut self) {
        self.ui.tag_modal_open = true;
    }

    /// Closes the tag modal.
    pub fn close_tag_modal(&mut self) {
        self.ui.tag_modal_open = false;
    }

    /// Adds a tag name to the in-progress editor selection (set
    /// semantics; a no-op when already selected).
    pub fn add_draft_tag(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !self.ui.draft_tags.contains(&name) {
            self.ui.draft_tags.push(name);
        }
    }

    /// Removes a tag name from the in-progress editor selection.
    pub fn remove_draft_tag(&mut self, name: &str) {
        self.ui.draft_tags.retain(|t| t != name);
    }

    fn register_draft_tags(&mut self, draft: &NoteDraft) {
        for tag in &draft.tags {
            self.tags.add(tag);
        }
    }
}

#[cfg(test)]
#[path = "state/tests.rs"]
mod tests;
