use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::OffsetDateTime;

use super::{NoteColor, NoteId, Priority};

/// A single note on the board.
///
/// Notes carry free-form title and content, a set of tag names, a card
/// color, a priority, and a pin flag. `created_at` is fixed at creation;
/// `updated_at` tracks content-affecting edits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Unique identifier assigned by the note store.
    pub id: NoteId,
    /// Short display title.
    pub title: String,
    /// Body text.
    pub content: String,
    /// Tag names attached to this note. Stored in attachment order but
    /// semantically a set; duplicates are not meaningful.
    pub tags: Vec<String>,
    /// Card color.
    pub color: NoteColor,
    /// Priority level.
    pub priority: Priority,
    /// Whether the note is pinned above the general list.
    pub is_pinned: bool,
    /// When this note was created. Never mutated.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// When this note last had a content-affecting edit.
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl Note {
    /// Returns true when the note carries the given tag (case-sensitive).
    pub fn has_tag(&self, name: &str) -> bool {
        self.tags.iter().any(|t| t == name)
    }
}

/// Builder for constructing `Note` instances with optional fields.
///
/// # Examples
///
/// ```
/// use tack::{NoteBuilder, NoteId};
///
/// let note = NoteBuilder::new()
///     .id(NoteId::new(1))
///     .title("Groceries")
///     .content("oat milk, coffee")
///     .build();
///
/// assert_eq!(note.id, NoteId::new(1));
/// assert!(!note.is_pinned);
/// assert!(note.tags.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct NoteBuilder {
    id: Option<NoteId>,
    title: Option<String>,
    content: Option<String>,
    tags: Vec<String>,
    color: NoteColor,
    priority: Priority,
    is_pinned: bool,
    created_at: Option<OffsetDateTime>,
    updated_at: Option<OffsetDateTime>,
}

impl NoteBuilder {
    /// Creates a new `NoteBuilder`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the note ID.
    pub fn id(mut self, id: NoteId) -> Self {
        self.id = Some(id);
        self
    }

    /// Sets the title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the body content.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Sets the tag names.
    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the card color.
    pub fn color(mut self, color: NoteColor) -> Self {
        self.color = color;
        self
    }

    /// Sets the priority.
    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the pin flag.
    pub fn pinned(mut self, pinned: bool) -> Self {
        self.is_pinned = pinned;
        self
    }

    /// Sets the created timestamp.
    pub fn created_at(mut self, created_at: OffsetDateTime) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Sets the updated timestamp.
    pub fn updated_at(mut self, updated_at: OffsetDateTime) -> Self {
        self.updated_at = Some(updated_at);
        self
    }

    /// Builds the `Note`. Timestamps left unset default to now, with
    /// `updated_at` falling back to `created_at` when only that was set.
    ///
    /// # Panics
    ///
    /// Panics if `id`, `title`, or `content` have not been set.
    pub fn build(self) -> Note {
        let now = OffsetDateTime::now_utc();
        Note {
            id: self.id.expect("id is required"),
            title: self.title.expect("title is required"),
            content: self.content.expect("content is required"),
            tags: self.tags,
            color: self.color,
            priority: self.priority,
            is_pinned: self.is_pinned,
            created_at: self.created_at.unwrap_or(now),
            updated_at: self.updated_at.unwrap_or(self.created_at.unwrap_or(now)),
        }
    }
}

/// Form payload for creating or editing a note.
///
/// Carries every mutable field of a note. The store assumes drafts were
/// validated and normalized at the save boundary; it does not re-check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub color: NoteColor,
    pub priority: Priority,
}

impl NoteDraft {
    /// Creates a draft with the given title and content and default
    /// color/priority and no tags.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            tags: Vec::new(),
            color: NoteColor::default(),
            priority: Priority::default(),
        }
    }

    /// Checks that title and content are non-empty after trimming.
    ///
    /// # Errors
    ///
    /// Returns the first failing field; title is checked before content.
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.title.trim().is_empty() {
            return Err(DraftError::EmptyTitle);
        }
        if self.content.trim().is_empty() {
            return Err(DraftError::EmptyContent);
        }
        Ok(())
    }

    /// Returns the draft with title/content trimmed and tag names
    /// trimmed, de-duplicated, and cleared of empty entries.
    pub fn normalized(self) -> Self {
        let mut tags: Vec<String> = Vec::with_capacity(self.tags.len());
        for tag in self.tags {
            let tag = tag.trim();
            if !tag.is_empty() && !tags.iter().any(|t| t == tag) {
                tags.push(tag.to_string());
            }
        }
        Self {
            title: self.title.trim().to_string(),
            content: self.content.trim().to_string(),
            tags,
            color: self.color,
            priority: self.priority,
        }
    }
}

/// Validation failure for a note draft.
///
/// Surfaced to the user at the save action; the store is left unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("note title cannot be empty")]
    EmptyTitle,
    #[error("note content cannot be empty")]
    EmptyContent,
}
