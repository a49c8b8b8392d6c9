pub mod analytics_pane;
pub mod detail_pane;
pub mod keybindings;
pub mod layout;
pub mod list_pane;
pub mod modal;
pub mod settings_pane;
pub mod styles;

use crate::app::AppState;
use crate::domain::{Tab, UiMode};
use analytics_pane::render_analytics_pane;
use chrono::Local;
use detail_pane::render_detail_pane;
use keybindings::render_status_bar;
use layout::create_layout;
use list_pane::render_list_pane;
use modal::render_alert;
use ratatui::{
    text::{Line, Span},
    widgets::Tabs,
    Frame,
};
use settings_pane::render_settings_pane;
use styles::Palette;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();
    let palette = Palette::new(&app.settings);
    let layout = create_layout(size);
    let now = Local::now();

    render_tabs(f, app, &palette, layout.tabs_area);

    match app.tab {
        Tab::Tasks | Tab::Completed => {
            render_list_pane(f, app, &palette, layout.content_area, now);
        }
        Tab::Analytics => {
            render_analytics_pane(f, app, &palette, layout.content_area, now.date_naive());
        }
    }

    render_status_bar(f, app, &palette, layout.status_area);

    // Detail view floats above the list while a session is open
    if app.editor.is_some() {
        render_detail_pane(f, app, &palette, size);
    }

    if app.ui_mode == UiMode::Settings {
        render_settings_pane(f, app, &palette, size);
    }

    // Validation alert takes precedence over everything
    if app.ui_mode == UiMode::Alert {
        render_alert(f, app, &palette, size);
    }
}

fn render_tabs(f: &mut Frame, app: &AppState, palette: &Palette, area: ratatui::layout::Rect) {
    let titles: Vec<Line> = Tab::all()
        .iter()
        .map(|tab| Line::from(Span::raw(format!(" {} ", tab.title()))))
        .collect();

    let selected = Tab::all().iter().position(|t| *t == app.tab).unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(palette.hint_style())
        .highlight_style(palette.title_style());

    f.render_widget(tabs, area);
}
