use crate::app::AppState;
use crate::domain::AppTheme;
use crate::ui::{layout::create_modal_area, styles::Palette};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the settings modal: theme and accent-color pickers
pub fn render_settings_pane(f: &mut Frame, app: &AppState, palette: &Palette, area: Rect) {
    let modal_area = create_modal_area(area);
    f.render_widget(Clear, modal_area);

    let mut lines = Vec::new();

    lines.push(Line::raw(""));
    lines.push(Line::styled("  Appearance", palette.modal_title_style()));
    lines.push(Line::raw(""));

    let row_marker = |row: usize| if app.settings_cursor == row { "› " } else { "  " };

    let theme_spans: Vec<Span> = AppTheme::all()
        .iter()
        .flat_map(|theme| {
            let style = if *theme == app.settings.app_theme {
                palette.modal_title_style()
            } else {
                palette.hint_style()
            };
            vec![Span::styled(theme.label(), style), Span::raw("  ")]
        })
        .collect();

    let mut theme_line = vec![Span::raw(row_marker(0)), Span::raw("Theme:         ")];
    theme_line.extend(theme_spans);
    lines.push(Line::from(theme_line));
    lines.push(Line::from(vec![
        Span::raw(row_marker(1)),
        Span::raw("Accent Color:  "),
        Span::styled("● ", palette.title_style()),
        Span::styled(
            app.settings.accent_color.label(),
            palette.modal_title_style(),
        ),
    ]));

    lines.push(Line::raw(""));
    lines.push(Line::raw("  ↑/↓ select row  ·  Enter change  ·  Esc close"));
    lines.push(Line::raw(""));
    lines.push(Line::styled("  todone", palette.modal_title_style()));
    lines.push(Line::styled("  Version 0.1.0", palette.hint_style()));

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(" Settings ", palette.modal_title_style()))
                .style(palette.modal_bg_style()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}
