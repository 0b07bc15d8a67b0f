use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a note.
///
/// Wraps the counter value handed out by the note store to provide type
/// safety and prevent accidental mixing with other integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(u64);

impl NoteId {
    /// Creates a new note ID.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the underlying ID value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn note_id_serializes_as_raw_integer() {
        let id = NoteId::new(42);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "42");

        let deserialized: NoteId = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, id);
    }

    #[test]
    fn note_id_displays_as_plain_number() {
        assert_eq!(NoteId::new(7).to_string(), "7");
    }
}
