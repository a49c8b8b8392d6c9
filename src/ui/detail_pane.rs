use crate::app::AppState;
use crate::domain::UiMode;
use crate::editor::{EditorSession, FormField};
use crate::ui::{layout::create_detail_area, styles::Palette};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the task detail view: read-only in Viewing, a staging-buffer
/// form in Editing/Creating
pub fn render_detail_pane(f: &mut Frame, app: &AppState, palette: &Palette, area: Rect) {
    let Some(session) = &app.editor else {
        return;
    };

    let modal_area = create_detail_area(area);
    f.render_widget(Clear, modal_area);

    let lines = if session.is_editing() {
        form_lines(session, palette)
    } else {
        view_lines(app, session, palette)
    };

    let title = if session.is_new_task() {
        " New Task ".to_string()
    } else if session.buffer.title.is_empty() {
        " Task ".to_string()
    } else {
        format!(" {} ", session.buffer.title)
    };

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(title, palette.modal_title_style()))
                .style(palette.modal_bg_style()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}

/// Editable form over the staging buffer
fn form_lines<'a>(session: &'a EditorSession, palette: &Palette) -> Vec<Line<'a>> {
    let buffer = &session.buffer;
    let mut lines = Vec::new();

    let field_label = |field: FormField| {
        if buffer.field == field {
            format!("{}: (editing)", field.label())
        } else {
            format!("{}:", field.label())
        }
    };
    let cursor = |field: FormField| {
        if buffer.field == field {
            Span::styled("█", palette.modal_title_style())
        } else {
            Span::raw("")
        }
    };

    lines.push(Line::raw(""));
    lines.push(Line::raw(field_label(FormField::Title)));
    lines.push(Line::from(vec![
        Span::raw("> "),
        Span::styled(&buffer.title, palette.modal_title_style()),
        cursor(FormField::Title),
    ]));
    lines.push(Line::raw(""));

    lines.push(Line::raw(field_label(FormField::Content)));
    lines.push(Line::from(vec![
        Span::raw("> "),
        Span::styled(&buffer.content, palette.modal_title_style()),
        cursor(FormField::Content),
    ]));
    lines.push(Line::raw(""));

    lines.push(Line::raw(field_label(FormField::Priority)));
    lines.push(Line::from(vec![
        Span::raw("> "),
        Span::styled(
            buffer.priority.picker_label(),
            palette.priority_style(buffer.priority),
        ),
        if buffer.field == FormField::Priority {
            Span::styled("  ↑/↓ to change", palette.modal_title_style())
        } else {
            Span::raw("")
        },
    ]));
    lines.push(Line::raw(""));

    lines.push(Line::raw(field_label(FormField::DueDate)));
    lines.push(Line::from(vec![
        Span::raw("> "),
        Span::styled(
            buffer.due_date.format("%B %-d, %Y at %H:%M").to_string(),
            palette.modal_title_style(),
        ),
        if buffer.field == FormField::DueDate {
            Span::styled("  ↑/↓ days, +/- hours", palette.modal_title_style())
        } else {
            Span::raw("")
        },
    ]));
    lines.push(Line::raw(""));

    lines.push(Line::raw(
        "Tab to switch fields  ·  Enter to save  ·  Esc to cancel",
    ));

    lines
}

/// Read-only detail plus the comment thread
fn view_lines<'a>(app: &'a AppState, session: &'a EditorSession, palette: &Palette) -> Vec<Line<'a>> {
    let mut lines = Vec::new();

    let Some(task) = session.task_id.and_then(|id| app.task(id)) else {
        lines.push(Line::raw("Task no longer exists."));
        return lines;
    };

    lines.push(Line::raw(""));
    lines.push(Line::styled(&task.title, palette.modal_title_style()));
    if !task.content.is_empty() {
        lines.push(Line::styled(&task.content, palette.default_style()));
    }
    lines.push(Line::raw(""));

    lines.push(Line::from(vec![
        Span::raw("Priority:  "),
        Span::styled(task.priority.label(), palette.priority_style(task.priority)),
    ]));
    lines.push(Line::from(vec![
        Span::raw("Due Date:  "),
        Span::raw(task.due_date.format("%B %-d, %Y at %H:%M").to_string()),
    ]));
    lines.push(Line::raw(""));

    // Comments, newest first
    lines.push(Line::styled("Comments", palette.modal_title_style()));
    let comments = task.comments_newest_first();
    if comments.is_empty() {
        lines.push(Line::styled("  (none yet)", palette.hint_style()));
    }
    for comment in comments {
        lines.push(Line::from(vec![
            Span::raw("  • "),
            Span::raw(comment.text.clone()),
        ]));
        lines.push(Line::styled(
            format!("    {}", comment.date.format("%b %-d, %Y %H:%M")),
            palette.hint_style(),
        ));
    }
    lines.push(Line::raw(""));

    // Comment input box
    let typing = app.ui_mode == UiMode::CommentEntry;
    lines.push(Line::from(vec![
        Span::raw("Add comment: "),
        Span::styled(&session.comment_input, palette.default_style()),
        if typing {
            Span::styled("█", palette.modal_title_style())
        } else {
            Span::raw("")
        },
    ]));

    lines
}
