use super::enums::Priority;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A timestamped note attached to one task. Never edited or deleted
/// once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    /// Comment body, stored as typed
    pub text: String,
    /// When the comment was written
    pub date: DateTime<Local>,
}

impl Comment {
    pub fn new(text: String, date: DateTime<Local>) -> Self {
        Self { text, date }
    }
}

/// A to-do item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique ID for record identity (selection, deletion)
    pub id: Uuid,
    /// Task title
    pub title: String,
    /// Free-text notes
    pub content: String,
    /// Comments in insertion order; display re-sorts newest first
    #[serde(default)]
    pub comments: Vec<Comment>,
    /// Priority level
    pub priority: Priority,
    /// When the task is due
    pub due_date: DateTime<Local>,
    /// When the task was created; immutable after construction
    pub created_at: DateTime<Local>,
    /// Completion flag
    pub is_completed: bool,
    /// When the task was marked complete (if it is)
    #[serde(default)]
    pub completed_at: Option<DateTime<Local>>,
}

impl Task {
    /// Create a task. `now` becomes `created_at` and the default due date
    /// when the caller does not override it.
    pub fn new(title: String, now: DateTime<Local>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            content: String::new(),
            comments: Vec::new(),
            priority: Priority::default(),
            due_date: now,
            created_at: now,
            is_completed: false,
            completed_at: None,
        }
    }

    /// Mark complete, stamping the completion time
    pub fn complete(&mut self, now: DateTime<Local>) {
        if !self.is_completed {
            self.is_completed = true;
            self.completed_at = Some(now);
        }
    }

    /// Return a completed task to the active list
    pub fn uncomplete(&mut self) {
        self.is_completed = false;
        self.completed_at = None;
    }

    /// Toggle the completion flag
    pub fn toggle_completed(&mut self, now: DateTime<Local>) {
        if self.is_completed {
            self.uncomplete();
        } else {
            self.complete(now);
        }
    }

    /// Append a comment. Ordering on the record is insertion order;
    /// the detail view sorts for display.
    pub fn add_comment(&mut self, comment: Comment) {
        self.comments.push(comment);
    }

    /// Comments sorted newest first, for display
    pub fn comments_newest_first(&self) -> Vec<&Comment> {
        let mut sorted: Vec<&Comment> = self.comments.iter().collect();
        sorted.sort_by(|a, b| b.date.cmp(&a.date));
        sorted
    }
}
