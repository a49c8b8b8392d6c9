use crate::domain::Task;
use crate::persistence::{ensure_data_dir, atomic_write, TaskStore};
use crate::report::stats::{overview, weekly_completions};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use std::path::PathBuf;

/// Format percentage with 1 decimal place
fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Generate a markdown statistics report for the given date (defaults to
/// today) and write it to `output_path` or `<data dir>/stats-YYYY-MM-DD.md`.
pub fn generate_report(date: Option<NaiveDate>, output_path: Option<PathBuf>) -> Result<PathBuf> {
    let report_date = date.unwrap_or_else(|| Local::now().date_naive());

    let store = TaskStore::open_default()?;
    let tasks = store.load()?;

    let report = render_report(&tasks, report_date);

    let path = match output_path {
        Some(path) => path,
        None => ensure_data_dir()?.join(format!("stats-{}.md", report_date)),
    };
    atomic_write(&path, &report)?;

    Ok(path)
}

/// Render the report body. Pure so it can be tested without a store.
pub fn render_report(tasks: &[Task], report_date: NaiveDate) -> String {
    let stats = overview(tasks);
    let week = weekly_completions(tasks, report_date);

    let mut report = String::new();
    report.push_str(&format!("# Task Report - {}\n\n", report_date));

    // Overview section
    report.push_str("## Overview\n\n");
    report.push_str(&format!("- **Total Tasks:** {}\n", stats.total));
    report.push_str(&format!("- **Completed:** {}\n", stats.completed));
    report.push_str(&format!("- **Pending:** {}\n", stats.pending));

    let completion_pct = if stats.total > 0 {
        (stats.completed as f64 / stats.total as f64) * 100.0
    } else {
        0.0
    };
    report.push_str(&format!(
        "- **Completion Rate:** {}\n\n",
        format_percent(completion_pct)
    ));

    // Weekly completions section
    report.push_str("## Completed in the Last 7 Days\n\n");
    for day in &week {
        let bar = "#".repeat(day.count.min(40));
        report.push_str(&format!(
            "- {} ({}): {} {}\n",
            day.date.format("%Y-%m-%d"),
            day.date.format("%a"),
            day.count,
            bar
        ));
    }
    report.push('\n');

    report
}
