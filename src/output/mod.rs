//! Output formatting for todotxt.
//!
//! Rendering sits on top of the codec: every formatter starts from a task's
//! encoded line and decorates it, never the other way round.

mod json;
mod pretty;
mod style;

use crate::cli::args::OutputFormat;
use crate::error::TodoError;
use crate::todo::Task;

pub use json::format_tasks_json;
pub use pretty::format_tasks_pretty;
pub use style::{PriorityStyles, Renderer};

/// Format numbered tasks based on output format
///
/// # Errors
///
/// Returns `TodoError::InvalidPriority` if a task cannot be encoded, or
/// `TodoError::Json` if JSON serialization fails.
pub fn format_tasks(
    tasks: &[(usize, &Task)],
    format: OutputFormat,
    renderer: &Renderer,
) -> Result<String, TodoError> {
    match format {
        OutputFormat::Pretty => format_tasks_pretty(tasks, renderer),
        OutputFormat::Json => format_tasks_json(tasks),
    }
}
