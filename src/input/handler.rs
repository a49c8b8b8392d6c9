use crate::app::AppState;
use crate::domain::{Tab, UiMode};
use crate::editor::FormField;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::Searching => handle_search_mode(app, key),
        UiMode::Detail => handle_detail_mode(app, key),
        UiMode::CommentEntry => handle_comment_mode(app, key),
        UiMode::Settings => handle_settings_mode(app, key),
        UiMode::Alert => handle_alert_mode(app, key),
    }
}

/// Handle keys in normal (list browsing) mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Navigation
        KeyCode::Up => {
            app.move_selection_up();
            Ok(false)
        }
        KeyCode::Down => {
            app.move_selection_down();
            Ok(false)
        }

        // Tab switching
        KeyCode::Tab | KeyCode::Right => {
            app.next_tab();
            Ok(false)
        }
        KeyCode::BackTab | KeyCode::Left => {
            app.prev_tab();
            Ok(false)
        }
        KeyCode::Char('1') => {
            app.switch_tab(Tab::Tasks);
            Ok(false)
        }
        KeyCode::Char('2') => {
            app.switch_tab(Tab::Completed);
            Ok(false)
        }
        KeyCode::Char('3') => {
            app.switch_tab(Tab::Analytics);
            Ok(false)
        }

        // Open detail for the selected task
        KeyCode::Enter => {
            app.open_selected();
            Ok(false)
        }

        // New task
        KeyCode::Char('n') | KeyCode::Char('a') => {
            app.open_new_task();
            Ok(false)
        }

        // Toggle completion (complete / un-complete per tab)
        KeyCode::Char('d') | KeyCode::Char(' ') => {
            app.toggle_selected_completed();
            Ok(false)
        }

        // Delete task
        KeyCode::Char('x') | KeyCode::Delete => {
            app.delete_selected();
            Ok(false)
        }

        // Search
        KeyCode::Char('/') => {
            app.start_search();
            Ok(false)
        }

        // Toggle sort order
        KeyCode::Char('s') => {
            app.toggle_sort();
            Ok(false)
        }

        // Settings
        KeyCode::Char('g') => {
            app.open_settings();
            Ok(false)
        }

        // Clear an active search filter
        KeyCode::Esc => {
            app.clear_search();
            Ok(false)
        }

        // Quit
        KeyCode::Char('q') => Ok(true),

        _ => Ok(false),
    }
}

/// Handle keys while typing in the search box
fn handle_search_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Keep the filter and go back to the list
        KeyCode::Enter => {
            app.ui_mode = UiMode::Normal;
            Ok(false)
        }

        // Drop the filter
        KeyCode::Esc => {
            app.clear_search();
            app.ui_mode = UiMode::Normal;
            Ok(false)
        }

        KeyCode::Backspace => {
            app.search_backspace();
            Ok(false)
        }

        KeyCode::Char(c) => {
            app.search_push_char(c);
            Ok(false)
        }

        _ => Ok(false),
    }
}

/// Handle keys in the detail view; behavior depends on whether the
/// session is viewing or editing
fn handle_detail_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    let editing = app.editor.as_ref().map(|s| s.is_editing()).unwrap_or(false);

    if editing {
        match key.code {
            // Commit (Save for new tasks, Done for edits)
            KeyCode::Enter => {
                app.commit_editor();
                Ok(false)
            }

            // Cancel: discard the staging buffer
            KeyCode::Esc => {
                app.cancel_editor();
                Ok(false)
            }

            // Move between form fields
            KeyCode::Tab => {
                if let Some(session) = app.editor.as_mut() {
                    session.buffer.next_field();
                }
                Ok(false)
            }

            // Cycle priority / step due date on the non-text fields
            KeyCode::Up => {
                if let Some(session) = app.editor.as_mut() {
                    session.buffer.step_up();
                }
                Ok(false)
            }
            KeyCode::Down => {
                if let Some(session) = app.editor.as_mut() {
                    session.buffer.step_down();
                }
                Ok(false)
            }

            KeyCode::Backspace => {
                if let Some(session) = app.editor.as_mut() {
                    session.buffer.backspace();
                }
                Ok(false)
            }

            KeyCode::Char(c) => {
                if let Some(session) = app.editor.as_mut() {
                    // +/- adjust the due date by the hour when focused
                    if session.buffer.field == FormField::DueDate {
                        match c {
                            '+' | '=' => session.buffer.step_hours(1),
                            '-' | '_' => session.buffer.step_hours(-1),
                            _ => {}
                        }
                    } else {
                        session.buffer.push_char(c);
                    }
                }
                Ok(false)
            }

            _ => Ok(false),
        }
    } else {
        match key.code {
            // Start editing
            KeyCode::Char('e') => {
                app.begin_edit();
                Ok(false)
            }

            // Jump to the comment box
            KeyCode::Char('c') => {
                app.ui_mode = UiMode::CommentEntry;
                Ok(false)
            }

            // Close the detail view
            KeyCode::Esc | KeyCode::Char('q') => {
                app.close_editor();
                Ok(false)
            }

            _ => Ok(false),
        }
    }
}

/// Handle keys while typing a comment
fn handle_comment_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Enter => {
            app.submit_comment();
            app.ui_mode = UiMode::Detail;
            Ok(false)
        }

        KeyCode::Esc => {
            if let Some(session) = app.editor.as_mut() {
                session.comment_input.clear();
            }
            app.ui_mode = UiMode::Detail;
            Ok(false)
        }

        KeyCode::Backspace => {
            if let Some(session) = app.editor.as_mut() {
                session.comment_input.pop();
            }
            Ok(false)
        }

        KeyCode::Char(c) => {
            if let Some(session) = app.editor.as_mut() {
                session.comment_input.push(c);
            }
            Ok(false)
        }

        _ => Ok(false),
    }
}

/// Handle keys in the settings modal
fn handle_settings_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Up => {
            app.settings_cursor = app.settings_cursor.saturating_sub(1);
            Ok(false)
        }
        KeyCode::Down => {
            if app.settings_cursor < 1 {
                app.settings_cursor += 1;
            }
            Ok(false)
        }

        // Cycle the focused preference
        KeyCode::Enter | KeyCode::Right | KeyCode::Char(' ') => {
            app.cycle_setting();
            Ok(false)
        }

        KeyCode::Esc | KeyCode::Char('q') => {
            app.close_settings();
            Ok(false)
        }

        _ => Ok(false),
    }
}

/// Any dismissal key closes the validation alert
fn handle_alert_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char(_) => {
            app.dismiss_alert();
            Ok(false)
        }
        _ => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Task;
    use crate::persistence::{Settings, TaskStore};
    use chrono::Local;
    use crossterm::event::{KeyEvent, KeyModifiers};
    use tempfile::tempdir;

    fn create_test_app(dir: &std::path::Path, titles: &[&str]) -> AppState {
        let now = Local::now();
        let tasks = titles
            .iter()
            .map(|t| Task::new(t.to_string(), now))
            .collect();
        let store = TaskStore::new(dir.join("tasks.json"));
        AppState::new(tasks, store, Settings::default())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    #[test]
    fn test_handle_navigation() {
        let dir = tempdir().unwrap();
        let mut app = create_test_app(dir.path(), &["one", "two"]);

        assert_eq!(app.selected_index, 0);
        handle_key(&mut app, key(KeyCode::Down)).unwrap();
        assert_eq!(app.selected_index, 1);
        handle_key(&mut app, key(KeyCode::Up)).unwrap();
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_handle_quit() {
        let dir = tempdir().unwrap();
        let mut app = create_test_app(dir.path(), &[]);
        let should_quit = handle_key(&mut app, key(KeyCode::Char('q'))).unwrap();
        assert!(should_quit);
    }

    #[test]
    fn test_handle_tab_switching() {
        let dir = tempdir().unwrap();
        let mut app = create_test_app(dir.path(), &[]);

        handle_key(&mut app, key(KeyCode::Char('3'))).unwrap();
        assert_eq!(app.tab, Tab::Analytics);
        handle_key(&mut app, key(KeyCode::Tab)).unwrap();
        assert_eq!(app.tab, Tab::Tasks);
    }

    #[test]
    fn test_handle_new_task_flow() {
        let dir = tempdir().unwrap();
        let mut app = create_test_app(dir.path(), &[]);

        // Open the editor and type a title
        handle_key(&mut app, key(KeyCode::Char('n'))).unwrap();
        assert_eq!(app.ui_mode, UiMode::Detail);
        for c in "New".chars() {
            handle_key(&mut app, key(KeyCode::Char(c))).unwrap();
        }

        // Move to the due-date field and push it a day out
        for _ in 0..3 {
            handle_key(&mut app, key(KeyCode::Tab)).unwrap();
        }
        handle_key(&mut app, key(KeyCode::Up)).unwrap();

        // Save
        handle_key(&mut app, key(KeyCode::Enter)).unwrap();
        assert_eq!(app.tasks.len(), 1);
        assert_eq!(app.tasks[0].title, "New");
        assert_eq!(app.ui_mode, UiMode::Normal);
    }

    #[test]
    fn test_handle_empty_title_raises_alert() {
        let dir = tempdir().unwrap();
        let mut app = create_test_app(dir.path(), &[]);

        handle_key(&mut app, key(KeyCode::Char('n'))).unwrap();
        handle_key(&mut app, key(KeyCode::Enter)).unwrap();
        assert_eq!(app.ui_mode, UiMode::Alert);

        // Any key dismisses, returning to the form
        handle_key(&mut app, key(KeyCode::Enter)).unwrap();
        assert_eq!(app.ui_mode, UiMode::Detail);
        assert!(app.editor.is_some());
    }

    #[test]
    fn test_handle_search_typing() {
        let dir = tempdir().unwrap();
        let mut app = create_test_app(dir.path(), &["Buy milk", "Walk dog"]);

        handle_key(&mut app, key(KeyCode::Char('/'))).unwrap();
        assert_eq!(app.ui_mode, UiMode::Searching);
        for c in "dog".chars() {
            handle_key(&mut app, key(KeyCode::Char(c))).unwrap();
        }
        assert_eq!(app.visible_tasks().len(), 1);

        handle_key(&mut app, key(KeyCode::Esc)).unwrap();
        assert_eq!(app.search_text, "");
        assert_eq!(app.visible_tasks().len(), 2);
    }

    #[test]
    fn test_handle_comment_entry() {
        let dir = tempdir().unwrap();
        let mut app = create_test_app(dir.path(), &["task"]);

        handle_key(&mut app, key(KeyCode::Enter)).unwrap(); // open detail
        handle_key(&mut app, key(KeyCode::Char('c'))).unwrap();
        assert_eq!(app.ui_mode, UiMode::CommentEntry);

        for c in "done?".chars() {
            handle_key(&mut app, key(KeyCode::Char(c))).unwrap();
        }
        handle_key(&mut app, key(KeyCode::Enter)).unwrap();

        assert_eq!(app.tasks[0].comments.len(), 1);
        assert_eq!(app.tasks[0].comments[0].text, "done?");
        assert_eq!(app.ui_mode, UiMode::Detail);
    }

    #[test]
    fn test_handle_complete_and_delete() {
        let dir = tempdir().unwrap();
        let mut app = create_test_app(dir.path(), &["a", "b"]);

        handle_key(&mut app, key(KeyCode::Char('d'))).unwrap();
        assert_eq!(app.visible_tasks().len(), 1);

        handle_key(&mut app, key(KeyCode::Char('x'))).unwrap();
        assert!(app.visible_tasks().is_empty());
        assert_eq!(app.tasks.len(), 1); // the completed one remains
    }

    #[test]
    fn test_handle_settings_cycle() {
        let dir = tempdir().unwrap();
        let mut app = create_test_app(dir.path(), &[]);

        handle_key(&mut app, key(KeyCode::Char('g'))).unwrap();
        assert_eq!(app.ui_mode, UiMode::Settings);

        let before = app.settings.app_theme;
        handle_key(&mut app, key(KeyCode::Enter)).unwrap();
        assert_ne!(app.settings.app_theme, before);

        handle_key(&mut app, key(KeyCode::Esc)).unwrap();
        assert_eq!(app.ui_mode, UiMode::Normal);
    }
}
