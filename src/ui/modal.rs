use crate::app::AppState;
use crate::ui::{layout::create_modal_area, styles::Palette};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the validation alert modal
pub fn render_alert(f: &mut Frame, app: &AppState, palette: &Palette, area: Rect) {
    if let Some(alert) = &app.alert {
        let modal_area = create_modal_area(area);
        f.render_widget(Clear, modal_area);

        let lines = vec![
            Line::raw(""),
            Line::raw(format!("  {}", alert.message)),
            Line::raw(""),
            Line::from(vec![
                Span::styled("  [OK]", palette.modal_title_style()),
                Span::raw(" press any key"),
            ]),
        ];

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled(
                        format!(" {} ", alert.heading),
                        palette.error_style(),
                    ))
                    .style(palette.modal_bg_style()),
            )
            .wrap(Wrap { trim: false });

        f.render_widget(paragraph, modal_area);
    }
}
