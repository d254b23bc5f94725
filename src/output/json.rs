//! JSON output formatting for todotxt.
//!
//! This module provides functions for formatting tasks as JSON.

use serde_json::{json, Map, Value};

use crate::error::TodoError;
use crate::todo::Task;

/// Format numbered tasks as JSON
///
/// # Errors
///
/// Returns `TodoError::InvalidPriority` if a task cannot be encoded, or
/// `TodoError::Json` if serialization fails.
pub fn format_tasks_json(tasks: &[(usize, &Task)]) -> Result<String, TodoError> {
    let items = tasks
        .iter()
        .map(|(number, task)| task_to_json(*number, task))
        .collect::<Result<Vec<_>, _>>()?;
    let output = json!({
        "count": items.len(),
        "items": items
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

fn task_to_json(number: usize, task: &Task) -> Result<Value, TodoError> {
    let tags: Map<String, Value> = task
        .tags()
        .map(|(key, value)| (key.to_string(), Value::String(value.to_string())))
        .collect();

    Ok(json!({
        "number": number,
        "line": task.encode()?,
        "completed": task.completed,
        "priority": task.priority.letter().map(String::from),
        "creation_date": task.creation_date.map(|d| d.to_string()),
        "completion_date": task.completion_date.map(|d| d.to_string()),
        "description": task.description(),
        "projects": task.projects().collect::<Vec<_>>(),
        "contexts": task.contexts().collect::<Vec<_>>(),
        "tags": tags,
    }))
}
