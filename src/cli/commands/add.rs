//! Add and append command implementations.
//!
//! These implement `todotxt add` and `todotxt append`, the two commands
//! that take free text from the command line.

use tracing::info;

use crate::error::TodoError;
use crate::todo::Task;

use super::{task_number, Context};

/// Execute the add command.
///
/// The joined words are decoded as a task line, dated today and appended
/// to the file. Shows the full list so the new task's number is visible.
///
/// # Errors
///
/// Returns an error if the file cannot be read or written, or if any task
/// on the list cannot be encoded.
pub fn add(ctx: &Context, text: &[String]) -> Result<String, TodoError> {
    let mut tasks = ctx.file.load()?;
    tasks.push(Task::new_today(&text.join(" ")));
    ctx.file.save(&tasks)?;
    info!(number = tasks.len(), "added task");
    ctx.show_all(&tasks)
}

/// Execute the append command.
///
/// # Errors
///
/// Returns `TodoError::InvalidTaskNumber` for a number not on the list, or
/// an error if the file cannot be read or written.
pub fn append(ctx: &Context, number: &str, text: &[String]) -> Result<String, TodoError> {
    let mut tasks = ctx.file.load()?;
    let n = task_number(number, tasks.len())?;
    let task = tasks
        .get_numbered_mut(n)
        .ok_or_else(|| TodoError::InvalidTaskNumber(number.to_string()))?;

    let description = format!("{} {}", task.description(), text.join(" "));
    task.set_description(&description);
    let output = ctx.show(&[(n, &*task)])?;

    ctx.file.save(&tasks)?;
    info!(number = n, "appended to task");
    Ok(output)
}
