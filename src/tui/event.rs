//! Keyboard event handling for the TUI.
//!
//! Maps crossterm keyboard events to view-state changes and intents.
//! Open modals capture all input; otherwise keys are interpreted by the
//! focused panel.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, EditorField, Focus};

/// Handles a keyboard event and updates the app accordingly.
///
/// Returns `true` if the application should quit, `false` otherwise.
///
/// # Event Handling
///
/// - Note editor / tag modal open: the modal receives every key
/// - `Tab` / `Shift+Tab`: cycle panel focus
/// - `Esc`: return focus to the note list
/// - `q`: quit (except while typing in the search bar)
/// - Search focus: characters edit the search term
/// - Sidebar focus: j/k navigation, Enter activates, `d` deletes a tag
/// - Notes focus: j/k navigation, Enter/`e` edits, `n` new note,
///   `p` pin, `d` delete, `s` sort, `t` tag modal, `/` search
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> bool {
    // Modals capture everything before panel dispatch.
    if app.state().ui().note_modal_open {
        handle_editor(app, key);
        return false;
    }
    if app.state().ui().tag_modal_open {
        handle_tag_modal(app, key);
        return false;
    }

    // Global focus keys.
    match key.code {
        KeyCode::Tab => {
            app.next_focus();
            return false;
        }
        KeyCode::BackTab => {
            app.prev_focus();
            return false;
        }
        KeyCode::Esc => {
            app.reset_focus();
            return false;
        }
        _ => {}
    }

    match app.focus() {
        Focus::Search => handle_search(app, key),
        Focus::Sidebar => handle_sidebar(app, key),
        Focus::Notes => handle_notes(app, key),
    }
}

/// Keys while the search bar is focused. Characters always insert, so
/// `q` is typeable; Enter returns to the note list.
fn handle_search(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char(c) if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT => {
            app.push_search_char(c);
        }
        KeyCode::Backspace => {
            app.pop_search_char();
        }
        KeyCode::Enter => {
            app.reset_focus();
        }
        _ => {}
    }
    false
}

/// Keys while the sidebar is focused.
fn handle_sidebar(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('j') | KeyCode::Down => app.sidebar_next(),
        KeyCode::Char('k') | KeyCode::Up => app.sidebar_prev(),
        KeyCode::Enter => app.sidebar_activate(),
        KeyCode::Char('d') => app.sidebar_delete_tag(),
        KeyCode::Char('t') => app.open_tag_modal(),
        KeyCode::Char('n') => app.open_editor_new(),
        KeyCode::Char('s') => app.cycle_sort(),
        KeyCode::Char('/') => app.focus_search(),
        _ => {}
    }
    false
}

/// Keys while the note list is focused.
fn handle_notes(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('j') | KeyCode::Down => app.select_next_note(),
        KeyCode::Char('k') | KeyCode::Up => app.select_prev_note(),
        KeyCode::Enter | KeyCode::Char('e') => app.open_editor_selected(),
        KeyCode::Char('n') => app.open_editor_new(),
        KeyCode::Char('p') => app.toggle_pin_selected(),
        KeyCode::Char('d') => app.delete_selected(),
        KeyCode::Char('s') => app.cycle_sort(),
        KeyCode::Char('t') => app.open_tag_modal(),
        KeyCode::Char('/') => app.focus_search(),
        _ => {}
    }
    false
}

/// Keys while the note editor modal is open.
///
/// Enter saves from every field except the content field, where it
/// inserts a line break; Ctrl+S saves from anywhere.
fn handle_editor(app: &mut App, key: KeyEvent) {
    if key.modifiers == KeyModifiers::CONTROL && key.code == KeyCode::Char('s') {
        app.save_editor();
        return;
    }
    match key.code {
        KeyCode::Esc => app.close_editor(),
        KeyCode::Tab => app.editor_next_field(),
        KeyCode::BackTab => app.editor_prev_field(),
        KeyCode::Enter => {
            if app.editor().map(|f| f.field) == Some(EditorField::Content) {
                app.editor_newline();
            } else {
                app.save_editor();
            }
        }
        KeyCode::Left => app.editor_tag_prev(),
        KeyCode::Right => app.editor_tag_next(),
        KeyCode::Backspace => app.editor_backspace(),
        KeyCode::Char(c) if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT => {
            app.editor_push_char(c);
        }
        _ => {}
    }
}

/// Keys while the tag modal is open.
fn handle_tag_modal(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.close_tag_modal(),
        KeyCode::Enter => app.submit_tag(),
        KeyCode::Backspace => app.tag_input_pop(),
        KeyCode::Char(c) if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT => {
            app.tag_input_push(c);
        }
        _ => {}
    }
}
