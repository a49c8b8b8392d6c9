use super::enums::SortOption;
use super::task::Task;
use chrono::{DateTime, Duration, Local};
use std::collections::BTreeSet;

/// Where a task stands relative to its due date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueStatus {
    /// Due date is strictly in the past
    Overdue,
    /// Due within the next 24 hours
    Upcoming,
    Normal,
}

/// `due_date < now`
pub fn is_overdue(task: &Task, now: DateTime<Local>) -> bool {
    task.due_date < now
}

/// Due within 24 hours and not yet overdue. Mutually exclusive with
/// [`is_overdue`].
pub fn is_upcoming(task: &Task, now: DateTime<Local>) -> bool {
    !is_overdue(task, now) && task.due_date - now <= Duration::hours(24)
}

pub fn due_status(task: &Task, now: DateTime<Local>) -> DueStatus {
    if is_overdue(task, now) {
        DueStatus::Overdue
    } else if is_upcoming(task, now) {
        DueStatus::Upcoming
    } else {
        DueStatus::Normal
    }
}

/// Display label for a task's due date. Overdue tasks carry the whole-day
/// overdue count, pluralized.
pub fn date_label(task: &Task, now: DateTime<Local>) -> String {
    let formatted = task.due_date.format("%b %-d, %Y").to_string();
    if is_overdue(task, now) {
        let days = (now - task.due_date).num_days();
        let unit = if days == 1 { "day" } else { "days" };
        format!("{} ({} {} overdue)", formatted, days, unit)
    } else {
        formatted
    }
}

/// Active (not completed) tasks matching the search text, sorted.
/// Recomputed on every call; the result borrows from `all`.
pub fn active_tasks<'a>(all: &'a [Task], search: &str, sort: SortOption) -> Vec<&'a Task> {
    filtered_sorted(all, search, sort, false)
}

/// Completed tasks matching the search text, sorted.
pub fn completed_tasks<'a>(all: &'a [Task], search: &str, sort: SortOption) -> Vec<&'a Task> {
    filtered_sorted(all, search, sort, true)
}

fn filtered_sorted<'a>(
    all: &'a [Task],
    search: &str,
    sort: SortOption,
    completed: bool,
) -> Vec<&'a Task> {
    let mut tasks: Vec<&Task> = all
        .iter()
        .filter(|t| t.is_completed == completed)
        .filter(|t| search.is_empty() || matches_search(t, search))
        .collect();

    // sort_by is stable: equal keys keep collection order
    match sort {
        SortOption::Date => tasks.sort_by(|a, b| a.due_date.cmp(&b.due_date)),
        SortOption::Priority => tasks.sort_by(|a, b| b.priority.rank().cmp(&a.priority.rank())),
    }

    tasks
}

/// Case-insensitive substring match against title or content
fn matches_search(task: &Task, search: &str) -> bool {
    let needle = search.to_lowercase();
    task.title.to_lowercase().contains(&needle) || task.content.to_lowercase().contains(&needle)
}

/// Up to 3 distinct task titles, lexicographically sorted. Offered only
/// while the search box is empty; callers gate on that.
pub fn search_suggestions(all: &[Task]) -> Vec<String> {
    let titles: BTreeSet<&str> = all.iter().map(|t| t.title.as_str()).collect();
    titles.into_iter().take(3).map(String::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Priority;
    use pretty_assertions::assert_eq;

    fn task_due(title: &str, due_offset_hours: i64, now: DateTime<Local>) -> Task {
        let mut task = Task::new(title.to_string(), now);
        task.due_date = now + Duration::hours(due_offset_hours);
        task
    }

    #[test]
    fn test_overdue_and_upcoming_are_exclusive() {
        let now = Local::now();
        for offset in [-100, -24, -1, 0, 1, 12, 24, 25, 100] {
            let task = task_due("t", offset, now);
            assert_eq!(is_overdue(&task, now), task.due_date < now);
            if is_overdue(&task, now) {
                assert!(!is_upcoming(&task, now));
            }
        }
    }

    #[test]
    fn test_upcoming_window() {
        let now = Local::now();
        assert!(is_upcoming(&task_due("soon", 12, now), now));
        assert!(is_upcoming(&task_due("edge", 24, now), now));
        assert!(!is_upcoming(&task_due("later", 25, now), now));
        assert!(!is_upcoming(&task_due("past", -1, now), now));
    }

    #[test]
    fn test_date_label_pluralization() {
        let now = Local::now();

        let mut one_day = Task::new("t".to_string(), now);
        one_day.due_date = now - Duration::hours(25);
        assert!(date_label(&one_day, now).ends_with("(1 day overdue)"));

        let mut three_days = Task::new("t".to_string(), now);
        three_days.due_date = now - Duration::days(3) - Duration::hours(1);
        assert!(date_label(&three_days, now).ends_with("(3 days overdue)"));

        let future = task_due("t", 48, now);
        assert!(!date_label(&future, now).contains("overdue"));
    }

    #[test]
    fn test_active_completed_partition() {
        let now = Local::now();
        let mut all = vec![
            task_due("a", 1, now),
            task_due("b", 2, now),
            task_due("c", 3, now),
            task_due("d", 4, now),
            task_due("e", 5, now),
        ];
        all[1].complete(now);
        all[3].complete(now);

        let active = active_tasks(&all, "", SortOption::Date);
        let completed = completed_tasks(&all, "", SortOption::Date);

        assert_eq!(active.len() + completed.len(), all.len());
        for task in &active {
            assert!(!completed.iter().any(|t| t.id == task.id));
        }
    }

    #[test]
    fn test_search_is_case_insensitive_over_title_and_content() {
        let now = Local::now();
        let mut tasks = vec![task_due("Buy MILK", 1, now), task_due("Walk dog", 2, now)];
        tasks[1].content = "pick up Milk on the way".to_string();

        let hits = active_tasks(&tasks, "milk", SortOption::Date);
        assert_eq!(hits.len(), 2);

        let none = active_tasks(&tasks, "xyzzy", SortOption::Date);
        assert!(none.is_empty());
    }

    #[test]
    fn test_sort_by_date_ascending() {
        let now = Local::now();
        let tasks = vec![
            task_due("late", 72, now),
            task_due("early", 1, now),
            task_due("mid", 24, now),
        ];

        let sorted = active_tasks(&tasks, "", SortOption::Date);
        let titles: Vec<&str> = sorted.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["early", "mid", "late"]);
        for pair in sorted.windows(2) {
            assert!(pair[0].due_date <= pair[1].due_date);
        }
    }

    #[test]
    fn test_sort_by_priority_descending_and_stable() {
        let now = Local::now();
        let mut tasks = vec![
            task_due("low", 1, now),
            task_due("high", 2, now),
            task_due("med-1", 3, now),
            task_due("med-2", 4, now),
        ];
        tasks[0].priority = Priority::Low;
        tasks[1].priority = Priority::High;
        tasks[2].priority = Priority::Medium;
        tasks[3].priority = Priority::Medium;

        let sorted = active_tasks(&tasks, "", SortOption::Priority);
        let titles: Vec<&str> = sorted.iter().map(|t| t.title.as_str()).collect();
        // Equal-rank tasks keep their collection order
        assert_eq!(titles, vec!["high", "med-1", "med-2", "low"]);
    }

    #[test]
    fn test_search_suggestions_distinct_sorted_capped() {
        let now = Local::now();
        let tasks = vec![
            task_due("zebra", 1, now),
            task_due("apple", 2, now),
            task_due("apple", 3, now),
            task_due("mango", 4, now),
            task_due("banana", 5, now),
        ];

        let suggestions = search_suggestions(&tasks);
        assert_eq!(suggestions, vec!["apple", "banana", "mango"]);
    }

    #[test]
    fn test_search_suggestions_empty_collection() {
        assert!(search_suggestions(&[]).is_empty());
    }
}
