//! UI rendering functions for the TUI.
//!
//! Lays out the sidebar, the search bar, the pinned/unpinned note lists,
//! and the editor and tag popups using ratatui widgets. Rendering only
//! reads state; it never mutates it.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};
use time::format_description;

use crate::models::{Note, NoteColor, Priority};
use crate::state::Section;

use super::app::{App, EditorField, Focus, SidebarRow};

/// Main rendering function for the TUI.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(24), // Sidebar
            Constraint::Min(0),     // Main content
        ])
        .split(area);

    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search input
            Constraint::Length(1), // Sort / filter indicator
            Constraint::Min(0),    // Note lists
            Constraint::Length(1), // Status / shortcut bar
        ])
        .split(columns[1]);

    render_sidebar(frame, app, columns[0]);
    render_search(frame, app, main[0]);
    render_indicator(frame, app, main[1]);
    render_notes(frame, app, main[2]);
    render_status_bar(frame, app, main[3]);

    if app.state().ui().note_modal_open {
        render_editor(frame, app, area);
    }
    if app.state().ui().tag_modal_open {
        render_tag_modal(frame, app, area);
    }
}

/// Border style shared by the focusable panels.
fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    }
}

/// Renders the sidebar: navigation sections followed by the tag list.
fn render_sidebar(frame: &mut Frame, app: &App, area: Rect) {
    let is_focused = matches!(app.focus(), Focus::Sidebar);
    let ui = app.state().ui();

    let items: Vec<ListItem> = app
        .sidebar_rows()
        .iter()
        .map(|row| match row {
            SidebarRow::Section(section) => {
                let mut style = Style::default();
                if *section == ui.section && ui.selected_tag.is_none() {
                    style = style.add_modifier(Modifier::BOLD).fg(Color::Yellow);
                }
                ListItem::new(Line::from(Span::styled(section.label(), style)))
            }
            SidebarRow::Tag(name) => {
                let mut style = Style::default().fg(Color::Cyan);
                if ui.selected_tag.as_deref() == Some(name.as_str()) {
                    style = style.add_modifier(Modifier::BOLD).fg(Color::Yellow);
                }
                ListItem::new(Line::from(vec![
                    Span::raw("  #"),
                    Span::styled(name.clone(), style),
                ]))
            }
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("tack")
                .border_style(border_style(is_focused)),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = ListState::default();
    if is_focused {
        state.select(Some(app.sidebar_index()));
    }

    frame.render_stateful_widget(list, area, &mut state);
}

/// Renders the search input with a cursor indicator when focused.
fn render_search(frame: &mut Frame, app: &App, area: Rect) {
    let is_focused = matches!(app.focus(), Focus::Search);

    let mut content = app.state().ui().search_term.to_string();
    if is_focused {
        content.push('█');
    }

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Search")
            .border_style(border_style(is_focused)),
    );

    frame.render_widget(paragraph, area);
}

/// Renders the one-line sort mode / tag filter indicator.
fn render_indicator(frame: &mut Frame, app: &App, area: Rect) {
    let ui = app.state().ui();

    let mut spans = vec![
        Span::styled("Sort: ", Style::default().fg(Color::DarkGray)),
        Span::raw(ui.sort_mode.label()),
    ];
    if let Some(tag) = &ui.selected_tag {
        spans.push(Span::styled("  Tag: ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(format!("#{tag}"), Style::default().fg(Color::Cyan)));
    }
    if ui.section != Section::Notes {
        spans.push(Span::styled(
            format!("  [{}: nothing here yet]", ui.section.label()),
            Style::default().fg(Color::DarkGray),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Renders the pinned list above the unpinned list.
///
/// The highlight index is shared across both lists: positions below the
/// pinned count fall into the unpinned list.
fn render_notes(frame: &mut Frame, app: &App, area: Rect) {
    let is_focused = matches!(app.focus(), Focus::Notes);
    let lists = app.lists();
    let selected = if is_focused { app.note_index() } else { None };

    if lists.pinned.is_empty() {
        render_note_list(frame, "Notes", &lists.unpinned, selected, is_focused, area);
        return;
    }

    #[allow(clippy::cast_possible_truncation)]
    let pinned_height = (lists.pinned.len() as u16 + 2).min(area.height / 2);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(pinned_height), Constraint::Min(0)])
        .split(area);

    let (pinned_sel, unpinned_sel) = match selected {
        Some(i) if i < lists.pinned.len() => (Some(i), None),
        Some(i) => (None, Some(i - lists.pinned.len())),
        None => (None, None),
    };

    render_note_list(frame, "Pinned", &lists.pinned, pinned_sel, is_focused, rows[0]);
    render_note_list(frame, "Others", &lists.unpinned, unpinned_sel, is_focused, rows[1]);
}

/// Renders one note list panel.
fn render_note_list(
    frame: &mut Frame,
    title: &str,
    notes: &[Note],
    selected: Option<usize>,
    focused: bool,
    area: Rect,
) {
    let items: Vec<ListItem> = notes.iter().map(note_line).map(ListItem::new).collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(border_style(focused)),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = ListState::default();
    state.select(selected);

    frame.render_stateful_widget(list, area, &mut state);
}

/// One display line per note: title, priority marker, tags, update date.
fn note_line(note: &Note) -> Line<'_> {
    let date_format = format_description::parse("[year]-[month]-[day]").expect("valid date format");
    let date = note
        .updated_at
        .format(&date_format)
        .unwrap_or_else(|_| "????-??-??".to_string());

    let mut spans = vec![
        Span::styled(
            note.title.clone(),
            Style::default().fg(card_color(note.color)),
        ),
        Span::raw(" "),
        Span::styled(priority_marker(note.priority), Style::default().fg(Color::Yellow)),
    ];
    for tag in &note.tags {
        spans.push(Span::styled(
            format!(" #{tag}"),
            Style::default().fg(Color::Cyan),
        ));
    }
    spans.push(Span::styled(
        format!(" [{date}]"),
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    ));

    Line::from(spans)
}

/// Terminal color for a card color.
fn card_color(color: NoteColor) -> Color {
    match color {
        NoteColor::White => Color::White,
        NoteColor::Pink => Color::LightMagenta,
        NoteColor::Blue => Color::LightBlue,
        NoteColor::Red => Color::LightRed,
    }
}

/// Exclamation marks scaled to the priority rank.
fn priority_marker(priority: Priority) -> &'static str {
    match priority {
        Priority::Low => "!",
        Priority::Medium => "!!",
        Priority::High => "!!!",
    }
}

/// Renders the note editor popup.
fn render_editor(frame: &mut Frame, app: &App, area: Rect) {
    let Some(form) = app.editor() else {
        return;
    };

    let popup = centered_rect(70, 80, area);
    frame.render_widget(Clear, popup);

    let title = if app.state().ui().editing_note.is_some() {
        "Edit note"
    } else {
        "New note"
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(3),    // Content
            Constraint::Length(3), // Tags
            Constraint::Length(3), // Color
            Constraint::Length(3), // Priority
        ])
        .split(inner);

    render_text_field(
        frame,
        "Title",
        &form.title,
        form.field == EditorField::Title,
        rows[0],
    );
    render_text_field(
        frame,
        "Content",
        &form.content,
        form.field == EditorField::Content,
        rows[1],
    );
    render_tag_field(frame, app, rows[2]);
    render_picker_field(
        frame,
        "Color",
        &NoteColor::ALL.map(|c| c.to_string()),
        form.color as usize,
        form.field == EditorField::Color,
        rows[3],
    );
    render_picker_field(
        frame,
        "Priority",
        &Priority::ALL.map(|p| p.to_string()),
        form.priority as usize,
        form.field == EditorField::Priority,
        rows[4],
    );
}

/// Renders one bordered text input inside the editor.
fn render_text_field(frame: &mut Frame, title: &str, value: &str, focused: bool, area: Rect) {
    let mut content = value.to_string();
    if focused {
        content.push('█');
    }
    let paragraph = Paragraph::new(content)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(border_style(focused)),
        );
    frame.render_widget(paragraph, area);
}

/// Renders the registry-backed tag toggles inside the editor.
fn render_tag_field(frame: &mut Frame, app: &App, area: Rect) {
    let Some(form) = app.editor() else {
        return;
    };
    let focused = form.field == EditorField::Tags;
    let names = app.state().tags().names();
    let draft_tags = &app.state().ui().draft_tags;

    let mut spans = Vec::new();
    if names.is_empty() {
        spans.push(Span::styled(
            "no tags yet - press t in the main view",
            Style::default().fg(Color::DarkGray),
        ));
    }
    for (i, name) in names.iter().enumerate() {
        let mark = if draft_tags.contains(name) { "[x]" } else { "[ ]" };
        let mut style = Style::default();
        if focused && i == form.tag_cursor.min(names.len() - 1) {
            style = style.add_modifier(Modifier::REVERSED);
        }
        spans.push(Span::styled(format!("{mark} {name}"), style));
        spans.push(Span::raw("  "));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Tags (space toggles)")
            .border_style(border_style(focused)),
    );
    frame.render_widget(paragraph, area);
}

/// Renders a one-of-n picker row inside the editor.
fn render_picker_field(
    frame: &mut Frame,
    title: &str,
    options: &[String],
    current: usize,
    focused: bool,
    area: Rect,
) {
    let mut spans = Vec::new();
    for (i, option) in options.iter().enumerate() {
        let mut style = Style::default();
        if i == current {
            style = style.add_modifier(Modifier::REVERSED);
        }
        spans.push(Span::styled(option.clone(), style));
        spans.push(Span::raw("  "));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("{title} (space cycles)"))
            .border_style(border_style(focused)),
    );
    frame.render_widget(paragraph, area);
}

/// Renders the tag modal popup.
fn render_tag_modal(frame: &mut Frame, app: &App, area: Rect) {
    let popup = centered_rect(40, 15, area);
    frame.render_widget(Clear, popup);

    let mut content = app.tag_input().to_string();
    content.push('█');

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .title("New tag (Enter adds, Esc closes)")
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(paragraph, popup);
}

/// Renders the status line: a validation message when present,
/// context-aware shortcuts otherwise.
fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    if let Some(status) = app.status() {
        let line = Line::from(Span::styled(
            status.to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(Paragraph::new(line), area);
        return;
    }

    let key_style = Style::default().fg(Color::Cyan);
    let sep_style = Style::default().fg(Color::DarkGray);

    let shortcuts: &[(&str, &str)] = if app.state().ui().note_modal_open {
        &[
            ("Tab", "next field"),
            ("Enter/Ctrl+S", "save"),
            ("Esc", "cancel"),
        ]
    } else if app.state().ui().tag_modal_open {
        &[("Enter", "add"), ("Esc", "close")]
    } else {
        match app.focus() {
            Focus::Sidebar => &[
                ("j/k", "move"),
                ("Enter", "open"),
                ("d", "delete tag"),
                ("t", "new tag"),
                ("q", "quit"),
            ],
            Focus::Search => &[("type", "filter"), ("Enter", "back to notes")],
            Focus::Notes => &[
                ("j/k", "move"),
                ("Enter", "edit"),
                ("n", "new"),
                ("p", "pin"),
                ("d", "delete"),
                ("s", "sort"),
                ("/", "search"),
                ("q", "quit"),
            ],
        }
    };

    let mut spans = Vec::new();
    for (i, (keys, action)) in shortcuts.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", sep_style));
        }
        spans.push(Span::styled(*keys, key_style));
        spans.push(Span::raw(format!(": {action}")));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Centers a `percent_x` by `percent_y` rectangle inside `area`.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NoteBuilder;
    use crate::models::NoteId;

    #[test]
    fn centered_rect_stays_inside_the_area() {
        let area = Rect::new(0, 0, 100, 40);
        let popup = centered_rect(70, 80, area);

        assert!(popup.x >= area.x);
        assert!(popup.y >= area.y);
        assert!(popup.right() <= area.right());
        assert!(popup.bottom() <= area.bottom());
    }

    #[test]
    fn note_line_includes_tags_and_date() {
        let note = NoteBuilder::new()
            .id(NoteId::new(1))
            .title("Groceries")
            .content("milk")
            .tags(["errands"])
            .build();

        let line = note_line(&note);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.contains("Groceries"));
        assert!(text.contains("#errands"));
        assert!(text.contains('['));
    }

    #[test]
    fn priority_markers_scale_with_rank() {
        assert_eq!(priority_marker(Priority::Low), "!");
        assert_eq!(priority_marker(Priority::Medium), "!!");
        assert_eq!(priority_marker(Priority::High), "!!!");
    }

    #[test]
    fn card_colors_cover_the_palette() {
        for color in NoteColor::ALL {
            // Every palette entry maps to some terminal color without panicking.
            let _ = card_color(color);
        }
    }
}
