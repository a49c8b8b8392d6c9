use crate::domain::Task;
use crate::persistence::files::{atomic_write, tasks_file};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// File-backed store for the task collection. The app owns the in-memory
/// Vec; `save` is the durability boundary after each mutating operation.
#[derive(Debug, Clone)]
pub struct TaskStore {
    path: PathBuf,
}

impl TaskStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Store bound to `tasks.json` in the data directory
    pub fn open_default() -> Result<Self> {
        Ok(Self::new(tasks_file()?))
    }

    /// Load the full task collection. A missing file is an empty
    /// collection, not an error.
    pub fn load(&self) -> Result<Vec<Task>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        let tasks: Vec<Task> = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", self.path.display()))?;
        Ok(tasks)
    }

    /// Persist the full task collection atomically
    pub fn save(&self, tasks: &[Task]) -> Result<()> {
        let json = serde_json::to_string_pretty(tasks).context("Failed to serialize tasks")?;
        atomic_write(&self.path, &json)?;
        Ok(())
    }
}
