use crate::app::AppState;
use crate::domain::UiMode;
use crate::ui::styles::Palette;
use ratatui::{layout::Rect, text::Line, widgets::Paragraph, Frame};

/// Render the bottom status bar: a save-failure notice when present,
/// otherwise keybinding hints for the current mode
pub fn render_status_bar(f: &mut Frame, app: &AppState, palette: &Palette, area: Rect) {
    if let Some(notice) = &app.notice {
        let paragraph = Paragraph::new(Line::raw(format!(" {}", notice))).style(palette.error_style());
        f.render_widget(paragraph, area);
        return;
    }

    let hints = match app.ui_mode {
        UiMode::Normal => {
            " ↑/↓ select   Tab switch view   Enter open   n new   d done   x delete   / search   s sort   g settings   q quit"
        }
        UiMode::Searching => " type to filter   Enter keep   Esc clear",
        UiMode::Detail => {
            " e edit   c comment   Tab field   ↑/↓ adjust   Enter save   Esc back"
        }
        UiMode::CommentEntry => " type comment   Enter add   Esc cancel",
        UiMode::Settings => " ↑/↓ row   Enter change   Esc close",
        UiMode::Alert => " any key to dismiss",
    };

    let paragraph = Paragraph::new(Line::raw(hints)).style(palette.hint_style());
    f.render_widget(paragraph, area);
}
