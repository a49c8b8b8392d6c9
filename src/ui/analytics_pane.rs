use crate::app::AppState;
use crate::report::{overview, weekly_completions};
use crate::ui::styles::Palette;
use chrono::NaiveDate;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{BarChart, Block, Borders, Paragraph},
    Frame,
};

/// Render the Analytics tab: overview counts and the 7-day completions
/// chart
pub fn render_analytics_pane(
    f: &mut Frame,
    app: &AppState,
    palette: &Palette,
    area: Rect,
    today: NaiveDate,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(0)])
        .split(area);

    render_overview(f, app, palette, chunks[0]);
    render_weekly_chart(f, app, palette, chunks[1], today);
}

fn render_overview(f: &mut Frame, app: &AppState, palette: &Palette, area: Rect) {
    let stats = overview(&app.tasks);

    let lines = vec![
        Line::raw(""),
        Line::styled(
            " Track your task progress and completion patterns over time.",
            palette.hint_style(),
        ),
        Line::raw(""),
        Line::from(vec![
            Span::raw("  Total: "),
            Span::styled(stats.total.to_string(), palette.title_style()),
            Span::raw("    Pending: "),
            Span::styled(stats.pending.to_string(), palette.upcoming_style()),
            Span::raw("    Completed: "),
            Span::styled(stats.completed.to_string(), palette.done_style()),
        ]),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(palette.border_style())
            .title(Span::styled(" Task Overview ", palette.title_style())),
    );

    f.render_widget(paragraph, area);
}

fn render_weekly_chart(
    f: &mut Frame,
    app: &AppState,
    palette: &Palette,
    area: Rect,
    today: NaiveDate,
) {
    let week = weekly_completions(&app.tasks, today);

    let labels: Vec<String> = week
        .iter()
        .map(|day| day.date.format("%a").to_string())
        .collect();
    let data: Vec<(&str, u64)> = labels
        .iter()
        .zip(week.iter())
        .map(|(label, day)| (label.as_str(), day.count as u64))
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(palette.border_style())
                .title(Span::styled(" Weekly Progress ", palette.title_style())),
        )
        .data(&data)
        .bar_width(5)
        .bar_gap(2)
        .bar_style(palette.chart_style())
        .value_style(palette.default_style());

    f.render_widget(chart, area);
}
