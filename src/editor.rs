use crate::domain::{Comment, Priority, Task};
use chrono::{DateTime, Duration, Local};
use thiserror::Error;
use uuid::Uuid;

/// Validation failures raised at the edit-commit boundary. Handled
/// locally by the caller (alert modal); never propagated further.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a title for your task.")]
    MissingTitle,
    #[error("The due date must be today or in the future.")]
    PastDueDate,
}

impl ValidationError {
    /// Alert box title
    pub fn heading(&self) -> &'static str {
        match self {
            Self::MissingTitle => "Missing Title",
            Self::PastDueDate => "Invalid Date",
        }
    }
}

/// Editing-session state. Creating is editing with no backing record yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorState {
    Viewing,
    Editing,
    Creating,
}

/// Form field focus within the staging buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Content,
    Priority,
    DueDate,
}

impl FormField {
    pub fn next(&self) -> Self {
        match self {
            Self::Title => Self::Content,
            Self::Content => Self::Priority,
            Self::Priority => Self::DueDate,
            Self::DueDate => Self::Title,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Content => "Content",
            Self::Priority => "Priority",
            Self::DueDate => "Due Date",
        }
    }
}

/// Scratch copy of a task's editable fields. Edits land here and reach
/// the record only on commit; cancel discards the buffer.
#[derive(Debug, Clone)]
pub struct StagingBuffer {
    pub title: String,
    pub content: String,
    pub priority: Priority,
    pub due_date: DateTime<Local>,
    pub field: FormField,
}

impl StagingBuffer {
    fn empty(now: DateTime<Local>) -> Self {
        Self {
            title: String::new(),
            content: String::new(),
            priority: Priority::default(),
            due_date: now,
            field: FormField::Title,
        }
    }

    fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            content: task.content.clone(),
            priority: task.priority,
            due_date: task.due_date,
            field: FormField::Title,
        }
    }

    /// Type a character into the focused text field
    pub fn push_char(&mut self, c: char) {
        match self.field {
            FormField::Title => self.title.push(c),
            FormField::Content => self.content.push(c),
            FormField::Priority | FormField::DueDate => {}
        }
    }

    /// Delete the last character of the focused text field
    pub fn backspace(&mut self) {
        match self.field {
            FormField::Title => {
                self.title.pop();
            }
            FormField::Content => {
                self.content.pop();
            }
            FormField::Priority | FormField::DueDate => {}
        }
    }

    pub fn next_field(&mut self) {
        self.field = self.field.next();
    }

    /// Arrow keys on the non-text fields: cycle priority, step due date
    pub fn step_up(&mut self) {
        match self.field {
            FormField::Priority => self.priority = self.priority.next(),
            FormField::DueDate => self.due_date = self.due_date + Duration::days(1),
            _ => {}
        }
    }

    pub fn step_down(&mut self) {
        match self.field {
            FormField::Priority => self.priority = self.priority.prev(),
            FormField::DueDate => self.due_date = self.due_date - Duration::days(1),
            _ => {}
        }
    }

    /// Finer due-date step for +/-
    pub fn step_hours(&mut self, hours: i64) {
        if self.field == FormField::DueDate {
            self.due_date = self.due_date + Duration::hours(hours);
        }
    }
}

/// Per-task editing session: Creating when opened without a record,
/// Viewing otherwise, Editing after an explicit edit action.
#[derive(Debug, Clone)]
pub struct EditorSession {
    /// Backing record identity; None while creating
    pub task_id: Option<Uuid>,
    pub state: EditorState,
    pub buffer: StagingBuffer,
    /// Input buffer for the add-comment box
    pub comment_input: String,
}

impl EditorSession {
    /// Open a session for a new task
    pub fn create(now: DateTime<Local>) -> Self {
        Self {
            task_id: None,
            state: EditorState::Creating,
            buffer: StagingBuffer::empty(now),
            comment_input: String::new(),
        }
    }

    /// Open a session for an existing task
    pub fn view(task: &Task) -> Self {
        Self {
            task_id: Some(task.id),
            state: EditorState::Viewing,
            buffer: StagingBuffer::from_task(task),
            comment_input: String::new(),
        }
    }

    pub fn is_new_task(&self) -> bool {
        self.task_id.is_none()
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.state, EditorState::Editing | EditorState::Creating)
    }

    /// Viewing -> Editing, copying the record's current fields into the
    /// staging buffer so edits do not touch the record until commit.
    pub fn begin_edit(&mut self, task: &Task) {
        if self.state == EditorState::Viewing {
            self.buffer = StagingBuffer::from_task(task);
            self.state = EditorState::Editing;
        }
    }

    /// Editing -> Viewing without committing the buffer
    pub fn cancel_edit(&mut self, task: &Task) {
        if self.state == EditorState::Editing {
            self.buffer = StagingBuffer::from_task(task);
            self.state = EditorState::Viewing;
        }
    }

    /// Commit the Creating session: validate, then construct the new
    /// task from the buffer. The caller inserts and persists it.
    /// On error nothing changes and nothing is persisted.
    pub fn commit_create(&self, now: DateTime<Local>) -> Result<Task, ValidationError> {
        if self.buffer.title.trim().is_empty() {
            return Err(ValidationError::MissingTitle);
        }
        if self.buffer.due_date.date_naive() < now.date_naive() {
            return Err(ValidationError::PastDueDate);
        }

        let mut task = Task::new(self.buffer.title.clone(), now);
        task.content = self.buffer.content.clone();
        task.priority = self.buffer.priority;
        task.due_date = self.buffer.due_date;
        Ok(task)
    }

    /// Commit the Editing session ("Done"): write the buffer onto the
    /// record and return to Viewing. An empty title is rejected here
    /// too; the past-due rule is not applied, so an already-overdue
    /// task stays editable.
    pub fn commit_edit(&mut self, task: &mut Task) -> Result<(), ValidationError> {
        if self.buffer.title.trim().is_empty() {
            return Err(ValidationError::MissingTitle);
        }

        task.title = self.buffer.title.clone();
        task.content = self.buffer.content.clone();
        task.priority = self.buffer.priority;
        task.due_date = self.buffer.due_date;
        self.state = EditorState::Viewing;
        Ok(())
    }

    /// Append the comment input to the task. No-op while creating (no
    /// backing record) or when the trimmed input is empty. Returns
    /// whether a comment was added; the caller persists on true.
    pub fn add_comment(&mut self, task: &mut Task, now: DateTime<Local>) -> bool {
        if self.is_new_task() || self.comment_input.trim().is_empty() {
            return false;
        }

        task.add_comment(Comment::new(self.comment_input.clone(), now));
        self.comment_input.clear();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn session_with(title: &str, due_offset_days: i64, now: DateTime<Local>) -> EditorSession {
        let mut session = EditorSession::create(now);
        session.buffer.title = title.to_string();
        session.buffer.due_date = now + Duration::days(due_offset_days);
        session
    }

    #[test]
    fn test_create_starts_creating_with_defaults() {
        let now = Local::now();
        let session = EditorSession::create(now);

        assert_eq!(session.state, EditorState::Creating);
        assert!(session.is_new_task());
        assert_eq!(session.buffer.title, "");
        assert_eq!(session.buffer.priority, Priority::Medium);
        assert_eq!(session.buffer.due_date, now);
    }

    #[test]
    fn test_commit_create_empty_title_fails() {
        let now = Local::now();
        let session = session_with("", 1, now);
        assert_eq!(session.commit_create(now), Err(ValidationError::MissingTitle));
    }

    #[test]
    fn test_commit_create_whitespace_title_fails() {
        let now = Local::now();
        let session = session_with("   ", 1, now);
        assert_eq!(session.commit_create(now), Err(ValidationError::MissingTitle));
    }

    #[test]
    fn test_commit_create_yesterday_fails() {
        let now = Local::now();
        let session = session_with("Buy milk", -1, now);
        assert_eq!(session.commit_create(now), Err(ValidationError::PastDueDate));
    }

    #[test]
    fn test_commit_create_title_checked_before_date() {
        let now = Local::now();
        let session = session_with("", -1, now);
        assert_eq!(session.commit_create(now), Err(ValidationError::MissingTitle));
    }

    #[test]
    fn test_commit_create_earlier_today_is_valid() {
        // The rule is start-of-today, not now
        let now = Local::now();
        let mut session = session_with("Morning task", 0, now);
        session.buffer.due_date = now - Duration::minutes(5);
        if session.buffer.due_date.date_naive() == now.date_naive() {
            assert!(session.commit_create(now).is_ok());
        }
    }

    #[test]
    fn test_commit_create_valid_task() {
        let now = Local::now();
        let tomorrow = now + Duration::days(1);
        let mut session = session_with("Buy milk", 1, now);
        session.buffer.priority = Priority::High;

        let task = session.commit_create(now).unwrap();
        assert_eq!(task.title, "Buy milk");
        assert_eq!(task.priority, Priority::High);
        assert_eq!(task.due_date, tomorrow);
        assert_eq!(task.created_at, now);
        assert!(!task.is_completed);
        assert!(task.comments.is_empty());
    }

    #[test]
    fn test_begin_edit_copies_record_into_buffer() {
        let now = Local::now();
        let mut task = Task::new("Original".to_string(), now);
        task.content = "notes".to_string();
        task.priority = Priority::Low;

        let mut session = EditorSession::view(&task);
        assert_eq!(session.state, EditorState::Viewing);

        session.begin_edit(&task);
        assert_eq!(session.state, EditorState::Editing);
        assert_eq!(session.buffer.title, "Original");
        assert_eq!(session.buffer.content, "notes");
        assert_eq!(session.buffer.priority, Priority::Low);
    }

    #[test]
    fn test_commit_edit_writes_buffer_onto_record() {
        let now = Local::now();
        let mut task = Task::new("Before".to_string(), now);
        let created = task.created_at;

        let mut session = EditorSession::view(&task);
        session.begin_edit(&task);
        session.buffer.title = "After".to_string();
        session.buffer.priority = Priority::High;

        session.commit_edit(&mut task).unwrap();
        assert_eq!(task.title, "After");
        assert_eq!(task.priority, Priority::High);
        assert_eq!(task.created_at, created);
        assert_eq!(session.state, EditorState::Viewing);
    }

    #[test]
    fn test_commit_edit_rejects_empty_title() {
        let now = Local::now();
        let mut task = Task::new("Keep me".to_string(), now);

        let mut session = EditorSession::view(&task);
        session.begin_edit(&task);
        session.buffer.title = "  ".to_string();

        assert_eq!(session.commit_edit(&mut task), Err(ValidationError::MissingTitle));
        assert_eq!(task.title, "Keep me");
        assert_eq!(session.state, EditorState::Editing);
    }

    #[test]
    fn test_cancel_edit_discards_buffer() {
        let now = Local::now();
        let task = Task::new("Stable".to_string(), now);

        let mut session = EditorSession::view(&task);
        session.begin_edit(&task);
        session.buffer.title = "scratch".to_string();

        session.cancel_edit(&task);
        assert_eq!(session.state, EditorState::Viewing);
        assert_eq!(session.buffer.title, "Stable");
    }

    #[test]
    fn test_add_comment_whitespace_is_noop() {
        let now = Local::now();
        let mut task = Task::new("Task".to_string(), now);
        let mut session = EditorSession::view(&task);
        session.comment_input = "  ".to_string();

        assert!(!session.add_comment(&mut task, now));
        assert!(task.comments.is_empty());
    }

    #[test]
    fn test_add_comment_noop_while_creating() {
        let now = Local::now();
        let mut scratch = Task::new("unsaved".to_string(), now);
        let mut session = EditorSession::create(now);
        session.comment_input = "hello".to_string();

        assert!(!session.add_comment(&mut scratch, now));
        assert!(scratch.comments.is_empty());
    }

    #[test]
    fn test_add_comment_appends_and_clears_input() {
        let now = Local::now();
        let mut task = Task::new("Task".to_string(), now);
        let mut session = EditorSession::view(&task);
        session.comment_input = "Called vendor".to_string();

        assert!(session.add_comment(&mut task, now));
        assert_eq!(task.comments.len(), 1);
        assert_eq!(task.comments[0].text, "Called vendor");
        assert_eq!(task.comments[0].date, now);
        assert_eq!(session.comment_input, "");
    }

    #[test]
    fn test_form_field_cycle() {
        let mut field = FormField::Title;
        for _ in 0..4 {
            field = field.next();
        }
        assert_eq!(field, FormField::Title);
    }
}
