//! Path resolution for todotxt configuration and the todo file.
//!
//! Configuration lives in `~/.todotxt/`:
//! - `config.yaml` - Main configuration file
//!
//! The todo file itself lives in the todo directory (`TODO_DIR`, or the
//! current directory when unset).

use std::path::{Path, PathBuf};

use crate::error::TodoError;

/// Paths to todotxt configuration files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Config file: `~/.todotxt/config.yaml`
    pub config_file: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, TodoError> {
        let home = std::env::var("HOME")
            .map_err(|_| TodoError::Config("Could not determine home directory".to_string()))?;

        Ok(Self::with_root(&PathBuf::from(home).join(".todotxt")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: &Path) -> Self {
        Self {
            config_file: root.join("config.yaml"),
        }
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| {
            // Fallback to current directory if home cannot be determined
            Self::with_root(Path::new(".todotxt"))
        })
    }
}

/// Join the todo directory and file name.
///
/// With no directory the file name is used as given, relative to the
/// working directory.
#[must_use]
pub fn todo_file_path(dir: Option<&Path>, file: &str) -> PathBuf {
    dir.map_or_else(|| PathBuf::from(file), |dir| dir.join(file))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_with_root() {
        let paths = Paths::with_root(Path::new("/tmp/test-todotxt"));
        assert_eq!(
            paths.config_file,
            PathBuf::from("/tmp/test-todotxt/config.yaml")
        );
    }

    #[test]
    fn test_todo_file_path() {
        assert_eq!(todo_file_path(None, "todo.txt"), PathBuf::from("todo.txt"));
        assert_eq!(
            todo_file_path(Some(Path::new("/home/me/todo")), "work.txt"),
            PathBuf::from("/home/me/todo/work.txt")
        );
    }
}
