use crate::domain::Task;
use chrono::{Duration, NaiveDate};
use std::collections::HashMap;

/// Headline counts for the analytics screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Overview {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
}

/// Completed-task count for one calendar day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCount {
    pub date: NaiveDate,
    pub count: usize,
}

/// Total/completed/pending counts over the full collection.
/// Recomputed on demand; no caching.
pub fn overview(all: &[Task]) -> Overview {
    let total = all.len();
    let completed = all.iter().filter(|t| t.is_completed).count();
    Overview {
        total,
        completed,
        pending: total - completed,
    }
}

/// Completed tasks per calendar day for the 7 days ending `today`,
/// oldest first, today inclusive. A task counts in the bucket of the
/// day it was completed; records persisted before the completion stamp
/// existed fall back to their creation day.
pub fn weekly_completions(all: &[Task], today: NaiveDate) -> Vec<DayCount> {
    let mut buckets: HashMap<NaiveDate, usize> = HashMap::new();
    for task in all.iter().filter(|t| t.is_completed) {
        let day = task
            .completed_at
            .map(|at| at.date_naive())
            .unwrap_or_else(|| task.created_at.date_naive());
        *buckets.entry(day).or_insert(0) += 1;
    }

    (0..7)
        .rev()
        .map(|back| {
            let date = today - Duration::days(back);
            DayCount {
                date,
                count: buckets.get(&date).copied().unwrap_or(0),
            }
        })
        .collect()
}
