//! Error types for todotxt.

use thiserror::Error;

/// Errors produced by the todotxt library and CLI.
///
/// The task codec itself only ever raises [`TodoError::InvalidPriority`];
/// every other variant comes from the glue around it (files, config, CLI).
#[derive(Debug, Error)]
pub enum TodoError {
    /// A priority outside `A`..=`Z` was found while validating a task.
    #[error("invalid priority '{0}'")]
    InvalidPriority(char),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),

    /// A task number that is not a number, or is not on the list.
    #[error("invalid task number: {0}")]
    InvalidTaskNumber(String),

    #[error("missing {0}")]
    MissingArgument(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_priority_message() {
        let err = TodoError::InvalidPriority('1');
        assert_eq!(err.to_string(), "invalid priority '1'");
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: TodoError = io.into();
        assert!(matches!(err, TodoError::Io(_)));
    }
}
