use serde::{Deserialize, Serialize};
use std::fmt;

/// Card color of a note.
///
/// A fixed palette; notes default to white at creation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteColor {
    #[default]
    White,
    Pink,
    Blue,
    Red,
}

impl NoteColor {
    /// All colors in picker order.
    pub const ALL: [NoteColor; 4] = [
        NoteColor::White,
        NoteColor::Pink,
        NoteColor::Blue,
        NoteColor::Red,
    ];

    /// Returns the next color in picker order, wrapping around.
    pub fn next(self) -> Self {
        match self {
            Self::White => Self::Pink,
            Self::Pink => Self::Blue,
            Self::Blue => Self::Red,
            Self::Red => Self::White,
        }
    }
}

impl fmt::Display for NoteColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::White => write!(f, "white"),
            Self::Pink => write!(f, "pink"),
            Self::Blue => write!(f, "blue"),
            Self::Red => write!(f, "red"),
        }
    }
}
