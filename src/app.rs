use crate::domain::{
    active_tasks, completed_tasks, search_suggestions, SortOption, Tab, Task, UiMode,
};
use crate::editor::{EditorSession, EditorState, ValidationError};
use crate::persistence::{save_settings, settings_file, Settings, TaskStore};
use anyhow::Result;
use chrono::Local;
use uuid::Uuid;

/// Validation alert shown on top of the detail view
#[derive(Debug, Clone)]
pub struct AlertState {
    pub heading: &'static str,
    pub message: String,
}

impl From<ValidationError> for AlertState {
    fn from(err: ValidationError) -> Self {
        Self {
            heading: err.heading(),
            message: err.to_string(),
        }
    }
}

/// Main application state. Owns the task collection; every mutating
/// operation persists through the store and surfaces save failures as a
/// status-line notice.
pub struct AppState {
    pub tasks: Vec<Task>,
    pub store: TaskStore,
    pub settings: Settings,
    pub tab: Tab,
    pub ui_mode: UiMode,
    pub search_text: String,
    pub sort_option: SortOption,
    pub selected_index: usize,
    pub editor: Option<EditorSession>,
    pub alert: Option<AlertState>,
    /// Recoverable problem to show on the status line (e.g. a failed save)
    pub notice: Option<String>,
    /// Settings modal row focus: 0 = theme, 1 = accent color
    pub settings_cursor: usize,
}

impl AppState {
    pub fn new(tasks: Vec<Task>, store: TaskStore, settings: Settings) -> Self {
        Self {
            tasks,
            store,
            settings,
            tab: Tab::Tasks,
            ui_mode: UiMode::Normal,
            search_text: String::new(),
            sort_option: SortOption::default(),
            selected_index: 0,
            editor: None,
            alert: None,
            notice: None,
            settings_cursor: 0,
        }
    }

    /// The task list for the current tab, filtered and sorted
    pub fn visible_tasks(&self) -> Vec<&Task> {
        match self.tab {
            Tab::Completed => completed_tasks(&self.tasks, &self.search_text, self.sort_option),
            _ => active_tasks(&self.tasks, &self.search_text, self.sort_option),
        }
    }

    /// Title suggestions for the search box (only while it is empty)
    pub fn suggestions(&self) -> Vec<String> {
        if self.search_text.is_empty() {
            search_suggestions(&self.tasks)
        } else {
            Vec::new()
        }
    }

    pub fn selected_task_id(&self) -> Option<Uuid> {
        self.visible_tasks().get(self.selected_index).map(|t| t.id)
    }

    fn task_mut(&mut self, id: Uuid) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    pub fn task(&self, id: Uuid) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Keep the selection inside the visible list after mutations
    pub fn clamp_selection(&mut self) {
        let len = self.visible_tasks().len();
        if len == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= len {
            self.selected_index = len - 1;
        }
    }

    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn move_selection_down(&mut self) {
        if self.selected_index + 1 < self.visible_tasks().len() {
            self.selected_index += 1;
        }
    }

    pub fn switch_tab(&mut self, tab: Tab) {
        self.tab = tab;
        self.selected_index = 0;
    }

    pub fn next_tab(&mut self) {
        self.switch_tab(self.tab.next());
    }

    pub fn prev_tab(&mut self) {
        self.switch_tab(self.tab.prev());
    }

    pub fn toggle_sort(&mut self) {
        self.sort_option = self.sort_option.toggle();
    }

    // --- search -------------------------------------------------------

    pub fn start_search(&mut self) {
        self.ui_mode = UiMode::Searching;
    }

    pub fn search_push_char(&mut self, c: char) {
        self.search_text.push(c);
        self.clamp_selection();
    }

    pub fn search_backspace(&mut self) {
        self.search_text.pop();
        self.clamp_selection();
    }

    pub fn clear_search(&mut self) {
        self.search_text.clear();
        self.clamp_selection();
    }

    // --- editor sessions ----------------------------------------------

    /// Open the detail view for the selected task
    pub fn open_selected(&mut self) {
        let session = self
            .selected_task_id()
            .and_then(|id| self.task(id))
            .map(EditorSession::view);
        if let Some(session) = session {
            self.editor = Some(session);
            self.ui_mode = UiMode::Detail;
        }
    }

    /// Open the editor for a brand-new task
    pub fn open_new_task(&mut self) {
        self.editor = Some(EditorSession::create(Local::now()));
        self.ui_mode = UiMode::Detail;
    }

    pub fn close_editor(&mut self) {
        self.editor = None;
        self.ui_mode = UiMode::Normal;
        self.clamp_selection();
    }

    /// Viewing -> Editing for the open session
    pub fn begin_edit(&mut self) {
        if let Some(mut session) = self.editor.take() {
            if let Some(task) = session.task_id.and_then(|id| self.task(id)) {
                session.begin_edit(task);
            }
            self.editor = Some(session);
        }
    }

    /// Commit the open editor session. Creating inserts a new record;
    /// Editing writes the staging buffer back. Validation failures raise
    /// an alert and leave everything unchanged.
    pub fn commit_editor(&mut self) {
        let Some(mut session) = self.editor.take() else {
            return;
        };

        match session.state {
            EditorState::Creating => match session.commit_create(Local::now()) {
                Ok(task) => {
                    self.tasks.push(task);
                    self.persist();
                    self.ui_mode = UiMode::Normal;
                    self.clamp_selection();
                }
                Err(err) => {
                    self.alert = Some(err.into());
                    self.ui_mode = UiMode::Alert;
                    self.editor = Some(session);
                }
            },
            EditorState::Editing => {
                let Some(id) = session.task_id else {
                    self.editor = Some(session);
                    return;
                };
                let result = match self.task_mut(id) {
                    Some(task) => session.commit_edit(task),
                    None => Ok(()),
                };
                match result {
                    Ok(()) => {
                        self.persist();
                        self.editor = Some(session);
                        self.ui_mode = UiMode::Detail;
                    }
                    Err(err) => {
                        self.alert = Some(err.into());
                        self.ui_mode = UiMode::Alert;
                        self.editor = Some(session);
                    }
                }
            }
            EditorState::Viewing => {
                self.editor = Some(session);
            }
        }
    }

    /// Cancel the open session: Creating closes and discards, Editing
    /// falls back to Viewing.
    pub fn cancel_editor(&mut self) {
        let Some(mut session) = self.editor.take() else {
            return;
        };

        match session.state {
            EditorState::Creating => {
                self.ui_mode = UiMode::Normal;
            }
            EditorState::Editing => {
                if let Some(task) = session.task_id.and_then(|id| self.task(id)) {
                    session.cancel_edit(task);
                }
                self.editor = Some(session);
                self.ui_mode = UiMode::Detail;
            }
            EditorState::Viewing => {
                self.ui_mode = UiMode::Normal;
                self.clamp_selection();
            }
        }
    }

    /// Submit the comment input box of the open session
    pub fn submit_comment(&mut self) {
        let Some(mut session) = self.editor.take() else {
            return;
        };

        let added = match session.task_id {
            Some(id) => match self.tasks.iter_mut().find(|t| t.id == id) {
                Some(task) => session.add_comment(task, Local::now()),
                None => false,
            },
            None => false,
        };

        self.editor = Some(session);
        if added {
            self.persist();
        }
    }

    // --- list actions -------------------------------------------------

    /// Toggle completion for the selected task (complete on the Tasks
    /// tab, un-complete on the Completed tab)
    pub fn toggle_selected_completed(&mut self) {
        if let Some(id) = self.selected_task_id() {
            let now = Local::now();
            if let Some(task) = self.task_mut(id) {
                task.toggle_completed(now);
            }
            self.persist();
            self.clamp_selection();
        }
    }

    /// Delete the selected task; its comments go with it
    pub fn delete_selected(&mut self) {
        if let Some(id) = self.selected_task_id() {
            self.tasks.retain(|t| t.id != id);
            self.persist();
            self.clamp_selection();
        }
    }

    // --- persistence & settings ---------------------------------------

    /// Save the collection. A failure becomes a user-visible notice
    /// rather than being swallowed.
    pub fn persist(&mut self) {
        if let Err(err) = self.store.save(&self.tasks) {
            self.notice = Some(format!("Save failed: {}", err));
        } else {
            self.notice = None;
        }
    }

    pub fn open_settings(&mut self) {
        self.settings_cursor = 0;
        self.ui_mode = UiMode::Settings;
    }

    pub fn close_settings(&mut self) {
        self.ui_mode = UiMode::Normal;
    }

    /// Cycle the focused settings row and save
    pub fn cycle_setting(&mut self) {
        if self.settings_cursor == 0 {
            self.settings.app_theme = self.settings.app_theme.next();
        } else {
            let all = crate::domain::AccentColor::all();
            let idx = all
                .iter()
                .position(|c| *c == self.settings.accent_color)
                .unwrap_or(0);
            self.settings.accent_color = all[(idx + 1) % all.len()];
        }
        self.save_settings();
    }

    fn save_settings(&mut self) {
        let result = settings_file().and_then(|path| save_settings(path, &self.settings));
        if let Err(err) = result {
            self.notice = Some(format!("Settings save failed: {}", err));
        }
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
        self.ui_mode = UiMode::Detail;
    }
}
