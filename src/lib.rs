//! tack - a pin-board style note-taking core with a terminal UI.
//!
//! State is held entirely in memory for the lifetime of the process: an
//! explicitly owned [`AppState`] container (note store, tag registry,
//! transient UI state), a closed [`Intent`] set funnelling every
//! mutation through named transitions, and a pure query layer deriving
//! the pinned/unpinned display lists. The `tui` module renders the state
//! and dispatches intents; it never mutates state directly.

pub mod models;
pub mod query;
pub mod state;
pub mod store;
pub mod tags;
pub mod tui;

pub use models::{DraftError, Note, NoteBuilder, NoteColor, NoteDraft, NoteId, Priority, SortMode};
pub use query::NoteLists;
pub use state::{AppState, Intent, Section, UiState};
pub use store::NoteStore;
pub use tags::TagRegistry;
