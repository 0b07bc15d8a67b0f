mod color;
mod ids;
mod note;
mod priority;
mod sort;

pub use color::NoteColor;
pub use ids::NoteId;
pub use note::{DraftError, Note, NoteBuilder, NoteDraft};
pub use priority::Priority;
pub use sort::SortMode;
