use crate::models::{Note, NoteColor, NoteDraft, NoteId, Priority};
use crate::query::NoteLists;
use crate::state::{AppState, Intent, Section};

/// View-local state for the TUI.
///
/// Owns the [`AppState`] plus everything that is purely presentational:
/// panel focus, list cursors, the editor input buffers, and the one-line
/// status message. Every user action that touches domain state goes
/// through [`AppState::apply`] as an [`Intent`]; this type never mutates
/// the store, registry, or UI state directly.
#[derive(Debug)]
pub struct App {
    state: AppState,
    focus: Focus,
    sidebar_index: usize,
    note_index: usize,
    editor: Option<EditorForm>,
    tag_input: String,
    status: Option<String>,
}

/// Panel focus state for keyboard navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Sidebar is focused (section/tag navigation).
    Sidebar,
    /// Search bar is focused (typing edits the search term).
    Search,
    /// Note list is focused (j/k navigation, note actions).
    Notes,
}

/// One selectable row in the sidebar: a navigation section or a tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SidebarRow {
    Section(Section),
    Tag(String),
}

/// Which editor field currently receives input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorField {
    Title,
    Content,
    Tags,
    Color,
    Priority,
}

impl EditorField {
    /// Next field in Tab order, wrapping around.
    pub fn next(self) -> Self {
        match self {
            Self::Title => Self::Content,
            Self::Content => Self::Tags,
            Self::Tags => Self::Color,
            Self::Color => Self::Priority,
            Self::Priority => Self::Title,
        }
    }

    /// Previous field in Tab order, wrapping around.
    pub fn prev(self) -> Self {
        match self {
            Self::Title => Self::Priority,
            Self::Content => Self::Title,
            Self::Tags => Self::Content,
            Self::Color => Self::Tags,
            Self::Priority => Self::Color,
        }
    }
}

/// Input buffers for the note editor modal.
///
/// Title/content/color/priority live here while the user types; the
/// in-progress tag selection lives in the core UI state so the
/// tag-deletion cascade reaches it.
#[derive(Debug, Clone)]
pub struct EditorForm {
    pub title: String,
    pub content: String,
    pub color: NoteColor,
    pub priority: Priority,
    pub field: EditorField,
    pub tag_cursor: usize,
}

impl EditorForm {
    fn blank() -> Self {
        Self {
            title: String::new(),
            content: String::new(),
            color: NoteColor::default(),
            priority: Priority::default(),
            field: EditorField::Title,
            tag_cursor: 0,
        }
    }

    fn for_note(note: &Note) -> Self {
        Self {
            title: note.title.clone(),
            content: note.content.clone(),
            color: note.color,
            priority: note.priority,
            field: EditorField::Title,
            tag_cursor: 0,
        }
    }
}

impl App {
    /// Creates the view state over the given app state.
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            focus: Focus::Notes,
            sidebar_index: 0,
            note_index: 0,
            editor: None,
            tag_input: String::new(),
            status: None,
        }
    }

    /// Read-only view of the application state.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Current panel focus.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Current status message, if any.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// The open editor form, if the note editor modal is showing.
    pub fn editor(&self) -> Option<&EditorForm> {
        self.editor.as_ref()
    }

    /// The tag modal input buffer.
    pub fn tag_input(&self) -> &str {
        &self.tag_input
    }

    /// Applies an intent, recording validation failures in the status
    /// line. Returns `true` on success.
    fn dispatch(&mut self, intent: Intent) -> bool {
        match self.state.apply(intent) {
            Ok(()) => {
                self.status = None;
                true
            }
            Err(e) => {
                self.status = Some(e.to_string());
                false
            }
        }
    }

    // --- derived lists ---

    /// The pinned/unpinned display lists for the current state.
    pub fn lists(&self) -> NoteLists {
        self.state.lists()
    }

    /// Display notes flattened, pinned first, matching the rendered
    /// order of the two lists.
    pub fn visible_notes(&self) -> Vec<Note> {
        let lists = self.lists();
        let mut notes = lists.pinned;
        notes.extend(lists.unpinned);
        notes
    }

    /// Index of the highlighted note within [`Self::visible_notes`],
    /// clamped to the current list length.
    pub fn note_index(&self) -> Option<usize> {
        let count = self.visible_notes().len();
        if count == 0 {
            None
        } else {
            Some(self.note_index.min(count - 1))
        }
    }

    /// Id of the highlighted note, if any.
    pub fn selected_note_id(&self) -> Option<NoteId> {
        self.note_index()
            .and_then(|i| self.visible_notes().get(i).map(|n| n.id))
    }

    // --- focus ---

    /// Cycles focus: Sidebar -> Search -> Notes -> Sidebar.
    pub fn next_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Sidebar => Focus::Search,
            Focus::Search => Focus::Notes,
            Focus::Notes => Focus::Sidebar,
        };
    }

    /// Cycles focus in the reverse direction.
    pub fn prev_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Sidebar => Focus::Notes,
            Focus::Search => Focus::Sidebar,
            Focus::Notes => Focus::Search,
        };
    }

    /// Moves focus straight to the search bar.
    pub fn focus_search(&mut self) {
        self.focus = Focus::Search;
    }

    /// Returns focus to the note list and clears the status line.
    pub fn reset_focus(&mut self) {
        self.focus = Focus::Notes;
        self.status = None;
    }

    // --- sidebar ---

    /// Sidebar rows: the four sections followed by the registered tags.
    pub fn sidebar_rows(&self) -> Vec<SidebarRow> {
        let mut rows: Vec<SidebarRow> = Section::ALL.into_iter().map(SidebarRow::Section).collect();
        rows.extend(
            self.state
                .tags()
                .names()
                .iter()
                .cloned()
                .map(SidebarRow::Tag),
        );
        rows
    }

    /// Index of the highlighted sidebar row, clamped.
    pub fn sidebar_index(&self) -> usize {
        self.sidebar_index.min(self.sidebar_rows().len() - 1)
    }

    /// Moves the sidebar cursor down, wrapping.
    pub fn sidebar_next(&mut self) {
        let count = self.sidebar_rows().len();
        self.sidebar_index = (self.sidebar_index() + 1) % count;
    }

    /// Moves the sidebar cursor up, wrapping.
    pub fn sidebar_prev(&mut self) {
        let count = self.sidebar_rows().len();
        self.sidebar_index = (self.sidebar_index() + count - 1) % count;
    }

    /// Activates the highlighted sidebar row: a section switches the
    /// active section (clearing the tag filter), a tag selects the tag
    /// filter (forcing the notes section).
    pub fn sidebar_activate(&mut self) {
        match self.sidebar_rows()[self.sidebar_index()].clone() {
            SidebarRow::Section(section) => {
                self.dispatch(Intent::SetSection(section));
            }
            SidebarRow::Tag(name) => {
                self.dispatch(Intent::SelectTag(name));
            }
        }
        self.note_index = 0;
    }

    /// Deletes the highlighted tag (no-op on section rows).
    pub fn sidebar_delete_tag(&mut self) {
        if let SidebarRow::Tag(name) = self.sidebar_rows()[self.sidebar_index()].clone() {
            self.dispatch(Intent::DeleteTag(name));
            self.sidebar_index = self.sidebar_index.min(self.sidebar_rows().len() - 1);
        }
    }

    // --- search ---

    /// Appends a character to the search term.
    pub fn push_search_char(&mut self, c: char) {
        let mut term = self.state.ui().search_term.clone();
        term.push(c);
        self.dispatch(Intent::SetSearchTerm(term));
        self.note_index = 0;
    }

    /// Removes the last character of the search term.
    pub fn pop_search_char(&mut self) {
        let mut term = self.state.ui().search_term.clone();
        term.pop();
        self.dispatch(Intent::SetSearchTerm(term));
        self.note_index = 0;
    }

    // --- note list ---

    /// Moves the note cursor down, wrapping.
    pub fn select_next_note(&mut self) {
        let count = self.visible_notes().len();
        if count > 0 {
            self.note_index = (self.note_index().unwrap_or(0) + 1) % count;
        }
    }

    /// Moves the note cursor up, wrapping.
    pub fn select_prev_note(&mut self) {
        let count = self.visible_notes().len();
        if count > 0 {
            self.note_index = (self.note_index().unwrap_or(0) + count - 1) % count;
        }
    }

    /// Toggles the pin flag of the highlighted note.
    pub fn toggle_pin_selected(&mut self) {
        if let Some(id) = self.selected_note_id() {
            self.dispatch(Intent::TogglePin(id));
        }
    }

    /// Deletes the highlighted note.
    pub fn delete_selected(&mut self) {
        if let Some(id) = self.selected_note_id() {
            self.dispatch(Intent::DeleteNote(id));
        }
    }

    /// Advances the sort mode to the next one in selector order.
    pub fn cycle_sort(&mut self) {
        let mode = self.state.ui().sort_mode.next();
        self.dispatch(Intent::SetSortMode(mode));
    }

    // --- note editor modal ---

    /// Opens the editor on a blank draft.
    pub fn open_editor_new(&mut self) {
        self.dispatch(Intent::OpenNewNoteEditor);
        self.editor = Some(EditorForm::blank());
    }

    /// Opens the editor on the highlighted note.
    pub fn open_editor_selected(&mut self) {
        let Some(id) = self.selected_note_id() else {
            return;
        };
        let Some(note) = self.state.store().get(id) else {
            return;
        };
        let form = EditorForm::for_note(note);
        self.dispatch(Intent::OpenNoteEditor(id));
        self.editor = Some(form);
    }

    /// Closes the editor without saving.
    pub fn close_editor(&mut self) {
        self.dispatch(Intent::CloseNoteEditor);
        self.editor = None;
    }

    /// Saves the editor draft as a create or an edit, depending on how
    /// the editor was opened. Validation failure keeps the editor open
    /// with the failure in the status line.
    pub fn save_editor(&mut self) {
        let Some(form) = self.editor.clone() else {
            return;
        };
        let draft = NoteDraft {
            title: form.title,
            content: form.content,
            tags: self.state.ui().draft_tags.clone(),
            color: form.color,
            priority: form.priority,
        };
        let intent = match self.state.ui().editing_note {
            Some(id) => Intent::EditNote { id, draft },
            None => Intent::CreateNote(draft),
        };
        if self.dispatch(intent) {
            self.editor = None;
        }
    }

    /// Moves editor focus to the next field.
    pub fn editor_next_field(&mut self) {
        if let Some(form) = self.editor.as_mut() {
            form.field = form.field.next();
        }
    }

    /// Moves editor focus to the previous field.
    pub fn editor_prev_field(&mut self) {
        if let Some(form) = self.editor.as_mut() {
            form.field = form.field.prev();
        }
    }

    /// Types a character into the focused editor field. On the picker
    /// fields a space toggles/cycles instead of inserting.
    pub fn editor_push_char(&mut self, c: char) {
        let Some(field) = self.editor.as_ref().map(|f| f.field) else {
            return;
        };
        if field == EditorField::Tags && c == ' ' {
            self.editor_toggle_tag();
            return;
        }
        let Some(form) = self.editor.as_mut() else {
            return;
        };
        match form.field {
            EditorField::Title => form.title.push(c),
            EditorField::Content => form.content.push(c),
            EditorField::Color if c == ' ' => form.color = form.color.next(),
            EditorField::Priority if c == ' ' => form.priority = form.priority.next(),
            _ => {}
        }
    }

    /// Backspace in the focused text field.
    pub fn editor_backspace(&mut self) {
        let Some(form) = self.editor.as_mut() else {
            return;
        };
        match form.field {
            EditorField::Title => {
                form.title.pop();
            }
            EditorField::Content => {
                form.content.pop();
            }
            _ => {}
        }
    }

    /// Inserts a line break into the content field.
    pub fn editor_newline(&mut self) {
        if let Some(form) = self.editor.as_mut()
            && form.field == EditorField::Content
        {
            form.content.push('\n');
        }
    }

    /// Moves the tag cursor left within the registry row.
    pub fn editor_tag_prev(&mut self) {
        if let Some(form) = self.editor.as_mut() {
            form.tag_cursor = form.tag_cursor.saturating_sub(1);
        }
    }

    /// Moves the tag cursor right within the registry row.
    pub fn editor_tag_next(&mut self) {
        let count = self.state.tags().len();
        if let Some(form) = self.editor.as_mut()
            && count > 0
        {
            form.tag_cursor = (form.tag_cursor + 1).min(count - 1);
        }
    }

    /// Toggles the tag under the cursor in or out of the in-progress
    /// selection.
    pub fn editor_toggle_tag(&mut self) {
        let Some(form) = self.editor.as_ref() else {
            return;
        };
        let Some(name) = self
            .state
            .tags()
            .names()
            .get(form.tag_cursor.min(self.state.tags().len().saturating_sub(1)))
            .cloned()
        else {
            return;
        };
        let intent = if self.state.ui().draft_tags.contains(&name) {
            Intent::RemoveDraftTag(name)
        } else {
            Intent::AddDraftTag(name)
        };
        self.dispatch(intent);
    }

    // --- tag modal ---

    /// Opens the tag modal with a fresh input buffer.
    pub fn open_tag_modal(&mut self) {
        self.dispatch(Intent::OpenTagModal);
        self.tag_input.clear();
    }

    /// Closes the tag modal.
    pub fn close_tag_modal(&mut self) {
        self.dispatch(Intent::CloseTagModal);
        self.tag_input.clear();
    }

    /// Types a character into the tag modal input.
    pub fn tag_input_push(&mut self, c: char) {
        self.tag_input.push(c);
    }

    /// Backspace in the tag modal input.
    pub fn tag_input_pop(&mut self) {
        self.tag_input.pop();
    }

    /// Submits the tag modal input to the registry and clears the
    /// buffer; the modal stays open so several tags can be added in a
    /// row.
    pub fn submit_tag(&mut self) {
        let name = self.tag_input.clone();
        self.dispatch(Intent::AddTag(name));
        self.tag_input.clear();
    }
}
