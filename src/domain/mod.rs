pub mod enums;
pub mod queries;
pub mod task;

pub use enums::{AccentColor, AppTheme, Priority, SortOption, Tab, UiMode};
pub use queries::{
    active_tasks, completed_tasks, date_label, due_status, is_overdue, is_upcoming,
    search_suggestions, DueStatus,
};
pub use task::{Comment, Task};
