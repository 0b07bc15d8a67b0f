//! Pure query layer deriving the display lists.
//!
//! Stateless with respect to its inputs: the note collection, the search
//! term, the selected tag, and the sort mode. Lists are recomputed from
//! scratch on every state change; collections are small and incremental
//! maintenance would not pay for itself.

use std::cmp::Ordering;

use crate::models::{Note, SortMode};

/// The two ordered sequences ready for display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteLists {
    pub pinned: Vec<Note>,
    pub unpinned: Vec<Note>,
}

impl NoteLists {
    /// Total number of notes across both lists.
    pub fn len(&self) -> usize {
        self.pinned.len() + self.unpinned.len()
    }

    /// Returns true when neither list holds a note.
    pub fn is_empty(&self) -> bool {
        self.pinned.is_empty() && self.unpinned.is_empty()
    }
}

/// Filters notes by search term and selected tag, preserving order.
///
/// A note passes when its title or content contains the term as a
/// case-insensitive substring (the empty term matches everything), and,
/// if a tag filter is active, when its tag list includes that exact tag.
pub fn filter<'a>(notes: &'a [Note], term: &str, tag: Option<&str>) -> Vec<&'a Note> {
    let needle = term.to_lowercase();
    notes
        .iter()
        .filter(|note| {
            let matches_term = needle.is_empty()
                || note.title.to_lowercase().contains(&needle)
                || note.content.to_lowercase().contains(&needle);
            let matches_tag = tag.is_none_or(|t| note.has_tag(t));
            matches_term && matches_tag
        })
        .collect()
}

/// Sorts notes in place by the given mode.
///
/// `sort_by` is stable, so notes comparing equal keep their relative
/// input order; no further tiebreak is defined.
pub fn sort_notes(notes: &mut [Note], mode: SortMode) {
    notes.sort_by(|a, b| compare(a, b, mode));
}

/// Filters, partitions by pin state, and sorts each partition.
pub fn build_lists(notes: &[Note], term: &str, tag: Option<&str>, mode: SortMode) -> NoteLists {
    let (pinned, unpinned): (Vec<&Note>, Vec<&Note>) = filter(notes, term, tag)
        .into_iter()
        .partition(|note| note.is_pinned);

    let mut pinned: Vec<Note> = pinned.into_iter().cloned().collect();
    let mut unpinned: Vec<Note> = unpinned.into_iter().cloned().collect();
    sort_notes(&mut pinned, mode);
    sort_notes(&mut unpinned, mode);

    NoteLists { pinned, unpinned }
}

fn compare(a: &Note, b: &Note, mode: SortMode) -> Ordering {
    match mode {
        // Two names for the same order.
        SortMode::Latest | SortMode::Edited => b.updated_at.cmp(&a.updated_at),
        SortMode::Created => b.created_at.cmp(&a.created_at),
        SortMode::PriorityHighLow => b.priority.cmp(&a.priority),
        SortMode::PriorityLowHigh => a.priority.cmp(&b.priority),
    }
}
