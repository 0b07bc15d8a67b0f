//! Terminal user interface for tack.
//!
//! Renders the sidebar, search bar, and pinned/unpinned note lists using
//! ratatui, with crossterm managing the terminal. The view layer reads
//! state snapshots and dispatches intents; it owns no domain state.

use std::io;
use std::panic;

use anyhow::{Context, Result};
use crossterm::{
    event::{self as crossterm_event, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::state::AppState;

mod app;
pub mod event;
mod ui;

pub use app::{App, EditorField, EditorForm, Focus, SidebarRow};

/// Initializes the terminal for TUI rendering.
///
/// Enables raw mode and enters the alternate screen.
///
/// # Errors
///
/// Returns an error if terminal initialization fails.
fn init_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("failed to create terminal")?;
    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This should always be called before exiting the TUI, even in error
/// cases, to prevent terminal corruption.
///
/// # Errors
///
/// Returns an error if terminal restoration fails.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("failed to leave alternate screen")?;
    terminal.show_cursor().context("failed to show cursor")?;
    Ok(())
}

/// Minimal terminal restoration for the panic handler.
///
/// Does not require a Terminal reference, making it safe to call from a
/// panic hook. Ignores errors since we're likely already in a bad state.
fn restore_terminal_panic() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}

/// Installs a panic hook that restores the terminal before panicking.
///
/// The original panic hook is preserved and called after restoration.
fn init_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        restore_terminal_panic();
        original_hook(panic_info);
    }));
}

/// Runs the main event loop over the given view state.
///
/// Polls for keyboard events, updates app state, and re-renders. Exits
/// when the user presses `q`.
///
/// # Errors
///
/// Returns an error if event polling, rendering, or terminal operations
/// fail. Terminal state is always restored, even on error.
pub fn run_event_loop(app: &mut App) -> Result<()> {
    let mut terminal = init_terminal()?;

    let result = run_event_loop_internal(app, &mut terminal);

    if let Err(e) = restore_terminal(&mut terminal) {
        eprintln!("Error restoring terminal: {e}");
    }

    result
}

/// Internal event loop implementation.
///
/// Separated from `run_event_loop` so terminal restoration happens in
/// the outer function.
fn run_event_loop_internal(
    app: &mut App,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        terminal.draw(|frame| {
            ui::draw(frame, app);
        })?;

        if crossterm_poll()?
            && let Event::Key(key) = crossterm_event::read()?
        {
            let should_quit = event::handle_key_event(app, key);
            if should_quit {
                break;
            }
        }
    }

    Ok(())
}

/// Polls for a pending terminal event with a short timeout.
fn crossterm_poll() -> Result<bool> {
    Ok(crossterm_event::poll(std::time::Duration::from_millis(
        100,
    ))?)
}

/// Entry point for the TUI application.
///
/// Wraps the given state in the view layer and drives the event loop
/// until quit.
///
/// # Errors
///
/// Returns an error if terminal initialization or the event loop fails.
pub fn run(state: AppState) -> Result<()> {
    init_panic_hook();

    let mut app = App::new(state);
    run_event_loop(&mut app).context("TUI event loop failed")?;

    Ok(())
}
