use crate::app::AppState;
use crate::domain::{date_label, due_status, DueStatus, Tab, UiMode};
use crate::ui::styles::Palette;
use chrono::{DateTime, Local};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Render the task list for the Tasks and Completed tabs, including the
/// search box and empty states
pub fn render_list_pane(
    f: &mut Frame,
    app: &AppState,
    palette: &Palette,
    area: Rect,
    now: DateTime<Local>,
) {
    let searching = app.ui_mode == UiMode::Searching;
    let show_search = searching || !app.search_text.is_empty();

    let (search_area, list_area) = if show_search {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(area);
        (Some(chunks[0]), chunks[1])
    } else {
        (None, area)
    };

    if let Some(search_area) = search_area {
        render_search_box(f, app, palette, search_area, searching);
    }

    let tasks = app.visible_tasks();

    if tasks.is_empty() {
        render_empty_state(f, app, palette, list_area);
        return;
    }

    let items: Vec<ListItem> = tasks
        .iter()
        .enumerate()
        .map(|(idx, task)| {
            let selected = idx == app.selected_index && app.ui_mode != UiMode::Searching;

            let title_style = if selected {
                palette.selected_style()
            } else if task.is_completed {
                palette.secondary_style().add_modifier(Modifier::CROSSED_OUT)
            } else {
                palette.default_style().add_modifier(Modifier::BOLD)
            };

            let date_style = match due_status(task, now) {
                DueStatus::Overdue => palette.overdue_style(),
                DueStatus::Upcoming => palette.upcoming_style(),
                DueStatus::Normal => palette.secondary_style(),
            };

            let marker = if selected { "› " } else { "  " };
            let title_line = Line::from(vec![
                Span::raw(marker),
                Span::styled(task.title.clone(), title_style),
            ]);

            let meta_line = Line::from(vec![
                Span::raw("    "),
                Span::styled(
                    format!("⚑ {}", task.priority.label()),
                    palette.priority_style(task.priority),
                ),
                Span::raw("  "),
                Span::styled(date_label(task, now), date_style),
            ]);

            ListItem::new(vec![title_line, meta_line])
        })
        .collect();

    let title = match app.tab {
        Tab::Completed => format!(" Completed ({}) ", tasks.len()),
        _ => format!(" Tasks ({}) · {} ", tasks.len(), app.sort_option.label()),
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(palette.border_style())
            .title(Span::styled(title, palette.title_style())),
    );

    f.render_widget(list, list_area);
}

fn render_search_box(
    f: &mut Frame,
    app: &AppState,
    palette: &Palette,
    area: Rect,
    searching: bool,
) {
    let cursor = if searching { "█" } else { "" };
    let mut lines = vec![Line::from(vec![
        Span::styled(" Search: ", palette.hint_style()),
        Span::styled(app.search_text.clone(), palette.default_style()),
        Span::styled(cursor, palette.default_style()),
    ])];

    // Title suggestions appear only while the box is empty
    let suggestions = app.suggestions();
    if searching && !suggestions.is_empty() {
        lines.push(Line::from(vec![
            Span::styled(" try: ", palette.hint_style()),
            Span::styled(suggestions.join("  ·  "), palette.secondary_style()),
        ]));
    }

    f.render_widget(Paragraph::new(lines), area);
}

fn render_empty_state(f: &mut Frame, app: &AppState, palette: &Palette, area: Rect) {
    let lines = if !app.search_text.is_empty() {
        vec![
            Line::raw(""),
            Line::styled(
                format!("No results for \"{}\"", app.search_text),
                palette.default_style(),
            ),
            Line::styled("Esc clears the search.", palette.hint_style()),
        ]
    } else if app.tab == Tab::Completed {
        vec![
            Line::raw(""),
            Line::styled("No Completed Tasks", palette.title_style()),
            Line::styled("No tasks have been completed yet.", palette.hint_style()),
        ]
    } else {
        vec![
            Line::raw(""),
            Line::styled("No Tasks", palette.title_style()),
            Line::styled(
                "Start by creating your first task — press n.",
                palette.hint_style(),
            ),
        ]
    };

    let paragraph = Paragraph::new(lines)
        .alignment(ratatui::layout::Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(palette.border_style()),
        );

    f.render_widget(paragraph, area);
}
