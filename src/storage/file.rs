//! Reading and writing a todo.txt file.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::TodoError;
use crate::todo::TaskList;

/// A todo.txt file on disk.
#[derive(Debug, Clone)]
pub struct TodoFile {
    path: PathBuf,
}

impl TodoFile {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and decode the whole file.
    ///
    /// A file that does not exist yet is an empty list.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::Io` if the file exists but cannot be read, or
    /// `TodoError::InvalidPriority` if a line does not decode.
    pub fn load(&self) -> Result<TaskList, TodoError> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "todo file missing, starting empty");
            return Ok(TaskList::new());
        }

        let contents = std::fs::read_to_string(&self.path)?;
        let tasks = TaskList::decode(&contents)?;
        debug!(path = %self.path.display(), tasks = tasks.len(), "loaded todo file");
        Ok(tasks)
    }

    /// Encode and write the whole list, replacing the file.
    ///
    /// Encoding happens before the file is touched, so an invalid task
    /// leaves the existing file as it was.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::InvalidPriority` if a task cannot be encoded, or
    /// `TodoError::Io` if the write fails.
    pub fn save(&self, tasks: &TaskList) -> Result<(), TodoError> {
        let contents = tasks.encode()?;
        std::fs::write(&self.path, contents)?;
        info!(path = %self.path.display(), tasks = tasks.len(), "saved todo file");
        Ok(())
    }
}
