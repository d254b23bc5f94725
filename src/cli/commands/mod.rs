//! Command implementations for todotxt.
//!
//! Every command loads the whole todo file, changes it in memory and, if
//! anything changed, writes the whole file back.

mod add;

pub use add::{add, append};

use clap::CommandFactory;
use clap_complete::Shell;
use tracing::info;

use crate::cli::args::{Cli, OutputFormat};
use crate::error::TodoError;
use crate::output::{format_tasks, Renderer};
use crate::storage::TodoFile;
use crate::todo::{Priority, Task, TaskList};

/// What every command needs: where the tasks live and how to show them.
#[derive(Debug, Clone)]
pub struct Context {
    pub file: TodoFile,
    pub format: OutputFormat,
    pub renderer: Renderer,
}

impl Context {
    #[must_use]
    pub const fn new(file: TodoFile, format: OutputFormat, renderer: Renderer) -> Self {
        Self {
            file,
            format,
            renderer,
        }
    }

    fn show(&self, tasks: &[(usize, &Task)]) -> Result<String, TodoError> {
        format_tasks(tasks, self.format, &self.renderer)
    }

    fn show_all(&self, tasks: &TaskList) -> Result<String, TodoError> {
        let numbered: Vec<_> = tasks.iter().enumerate().map(|(i, t)| (i + 1, t)).collect();
        self.show(&numbered)
    }
}

/// Parse a 1-based task number and check it is on a list of `len` tasks.
///
/// # Errors
///
/// Returns `TodoError::InvalidTaskNumber` if `number` is not a number or is
/// out of range.
pub fn task_number(number: &str, len: usize) -> Result<usize, TodoError> {
    let n: usize = number
        .trim()
        .parse()
        .map_err(|_| TodoError::InvalidTaskNumber(number.to_string()))?;
    if n == 0 || n > len {
        return Err(TodoError::InvalidTaskNumber(number.to_string()));
    }
    Ok(n)
}

/// Load the list, change one task, save, and show the changed task.
fn update_task<F>(ctx: &Context, number: &str, change: F) -> Result<String, TodoError>
where
    F: FnOnce(&mut Task),
{
    let mut tasks = ctx.file.load()?;
    let n = task_number(number, tasks.len())?;
    let task = tasks
        .get_numbered_mut(n)
        .ok_or_else(|| TodoError::InvalidTaskNumber(number.to_string()))?;
    change(task);

    ctx.file.save(&tasks)?;
    let task = tasks
        .get_numbered(n)
        .ok_or_else(|| TodoError::InvalidTaskNumber(number.to_string()))?;
    ctx.show(&[(n, task)])
}

/// Execute the do command
///
/// # Errors
///
/// Returns an error if the task number is invalid or the file cannot be
/// read or written.
pub fn do_task(ctx: &Context, number: &str) -> Result<String, TodoError> {
    info!(number, "marking task done");
    update_task(ctx, number, Task::mark_completed)
}

/// Execute the pri command
///
/// Only the first character of `priority` is used. A character outside
/// `A`..=`Z` is rejected when the file is saved, so the file is left as it
/// was.
///
/// # Errors
///
/// Returns `TodoError::MissingArgument` for an empty priority,
/// `TodoError::InvalidPriority` for a bad letter, or an error if the task
/// number is invalid or the file cannot be read or written.
pub fn pri(ctx: &Context, number: &str, priority: &str) -> Result<String, TodoError> {
    let letter = priority
        .chars()
        .next()
        .ok_or(TodoError::MissingArgument("priority"))?;
    info!(number, %letter, "setting priority");
    update_task(ctx, number, |task| task.set_priority(Priority::Level(letter)))
}

/// Execute the depri command
///
/// # Errors
///
/// Returns an error if the task number is invalid or the file cannot be
/// read or written.
pub fn depri(ctx: &Context, number: &str) -> Result<String, TodoError> {
    info!(number, "clearing priority");
    update_task(ctx, number, Task::clear_priority)
}

/// Execute the sort command
///
/// # Errors
///
/// Returns an error if a task cannot be encoded or the file cannot be read
/// or written.
pub fn sort(ctx: &Context) -> Result<String, TodoError> {
    let mut tasks = ctx.file.load()?;
    tasks.sort_by_canonical_form()?;
    ctx.file.save(&tasks)?;
    info!(tasks = tasks.len(), "sorted todo file");
    ctx.show_all(&tasks)
}

/// Execute the list command
///
/// Tasks whose line contains every term (ignoring case) are shown with
/// their position in the full list.
///
/// # Errors
///
/// Returns an error if the file cannot be read or a task cannot be encoded.
pub fn list(ctx: &Context, terms: &[String]) -> Result<String, TodoError> {
    let tasks = ctx.file.load()?;
    if terms.is_empty() {
        return ctx.show_all(&tasks);
    }

    let terms: Vec<String> = terms.iter().map(|t| t.to_lowercase()).collect();
    let mut matching = Vec::new();
    for (i, task) in tasks.iter().enumerate() {
        let line = task.encode()?.to_lowercase();
        if terms.iter().all(|term| line.contains(term.as_str())) {
            matching.push((i + 1, task));
        }
    }
    ctx.show(&matching)
}

/// Execute the completions command
#[must_use]
pub fn completions(shell: Shell) -> String {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, "todotxt", &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}
