//! In-memory note collection.
//!
//! The store owns the ordered note list, the id counter, and the clock
//! used for timestamps. It is the only place notes are mutated; callers
//! reach it through the transition methods on [`crate::AppState`] or use
//! it directly in headless code and tests.

use time::{Duration, OffsetDateTime};

use crate::models::{Note, NoteDraft, NoteId};

/// Ordered collection of notes with id assignment and timestamping.
///
/// Ids come from a dedicated monotonic counter, never from the wall
/// clock, so two notes created in the same instant cannot collide. The
/// store also clamps its timestamps to be strictly increasing across
/// operations, keeping `updated_at` comparisons meaningful even when the
/// wall clock does not advance between two calls.
///
/// Missing-id operations (`edit`, `remove`, `toggle_pin`) are silent
/// no-ops returning `false`; in the single-user interaction model an id
/// cannot disappear between display and action, so the path is defensive
/// rather than load-bearing.
#[derive(Debug, Clone)]
pub struct NoteStore {
    notes: Vec<Note>,
    next_id: u64,
    last_stamp: OffsetDateTime,
}

impl NoteStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            notes: Vec::new(),
            next_id: 1,
            last_stamp: OffsetDateTime::UNIX_EPOCH,
        }
    }

    /// Creates a store seeded with existing notes.
    ///
    /// The id counter resumes above the highest seeded id and the clock
    /// resumes at the latest seeded timestamp.
    pub fn with_notes(notes: Vec<Note>) -> Self {
        let next_id = notes.iter().map(|n| n.id.get() + 1).max().unwrap_or(1);
        let last_stamp = notes
            .iter()
            .map(|n| n.created_at.max(n.updated_at))
            .max()
            .unwrap_or(OffsetDateTime::UNIX_EPOCH);
        Self {
            notes,
            next_id,
            last_stamp,
        }
    }

    /// All notes in insertion order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Looks up a note by id.
    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    /// Number of notes in the store.
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Returns true when the store holds no notes.
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Appends a new note built from the draft.
    ///
    /// Assigns a fresh id, sets `is_pinned` to false, and stamps
    /// `created_at == updated_at`. The draft is taken as-is; validation
    /// happens at the save boundary, not here.
    ///
    /// # Examples
    ///
    /// ```
    /// use tack::{NoteDraft, NoteStore};
    ///
    /// let mut store = NoteStore::new();
    /// let id = store.add(NoteDraft::new("Groceries", "oat milk, coffee"));
    ///
    /// let note = store.get(id).expect("note should exist");
    /// assert_eq!(note.title, "Groceries");
    /// assert!(!note.is_pinned);
    /// assert_eq!(note.created_at, note.updated_at);
    /// ```
    pub fn add(&mut self, draft: NoteDraft) -> NoteId {
        let id = NoteId::new(self.next_id);
        self.next_id += 1;
        let now = self.stamp();
        self.notes.push(Note {
            id,
            title: draft.title,
            content: draft.content,
            tags: draft.tags,
            color: draft.color,
            priority: draft.priority,
            is_pinned: false,
            created_at: now,
            updated_at: now,
        });
        id
    }

    /// Replaces the mutable fields of the note with the given id.
    ///
    /// `id`, `created_at`, and the pin flag are preserved; `updated_at`
    /// is refreshed. Returns `false` (and changes nothing) when no note
    /// has the id.
    pub fn edit(&mut self, id: NoteId, draft: NoteDraft) -> bool {
        let now = self.stamp();
        let Some(note) = self.notes.iter_mut().find(|n| n.id == id) else {
            return false;
        };
        note.title = draft.title;
        note.content = draft.content;
        note.tags = draft.tags;
        note.color = draft.color;
        note.priority = draft.priority;
        note.updated_at = now;
        true
    }

    /// Removes the note with the given id. Returns `false` when absent.
    pub fn remove(&mut self, id: NoteId) -> bool {
        let before = self.notes.len();
        self.notes.retain(|n| n.id != id);
        self.notes.len() != before
    }

    /// Flips the pin flag of the note with the given id.
    ///
    /// Pinning is display state, not content, so `updated_at` is left
    /// untouched and the note keeps its place under the update-time
    /// sort modes. Returns `false` when no note has the id.
    pub fn toggle_pin(&mut self, id: NoteId) -> bool {
        let Some(note) = self.notes.iter_mut().find(|n| n.id == id) else {
            return false;
        };
        note.is_pinned = !note.is_pinned;
        true
    }

    /// Strips a tag name from every note carrying it.
    ///
    /// Part of the tag-deletion cascade. Does not refresh `updated_at`;
    /// the note's own text did not change.
    pub fn strip_tag(&mut self, name: &str) {
        for note in &mut self.notes {
            note.tags.retain(|t| t != name);
        }
    }

    /// Current wall-clock time, clamped to be strictly later than any
    /// timestamp this store has handed out before.
    fn stamp(&mut self) -> OffsetDateTime {
        let mut now = OffsetDateTime::now_utc();
        if now <= self.last_stamp {
            now = self.last_stamp + Duration::nanoseconds(1);
        }
        self.last_stamp = now;
        now
    }
}

impl Default for NoteStore {
    fn default() -> Self {
        Self::new()
    }
}
