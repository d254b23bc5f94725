use crate::error::TodoError;
use crate::todo::Task;

use super::style::Renderer;

/// Format numbered tasks one per line, as `"<n> <line>"`.
///
/// # Errors
///
/// Returns `TodoError::InvalidPriority` if a task cannot be encoded.
pub fn format_tasks_pretty(tasks: &[(usize, &Task)], renderer: &Renderer) -> Result<String, TodoError> {
    let lines = tasks
        .iter()
        .map(|(number, task)| Ok(format!("{number} {}", renderer.render(task)?)))
        .collect::<Result<Vec<_>, TodoError>>()?;
    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_numbered_lines() {
        let first = Task::decode("(A) call mom");
        let second = Task::decode("x done");
        let output = format_tasks_pretty(&[(1, &first), (3, &second)], &Renderer::plain()).unwrap();
        assert_eq!(output, "1 (A) call mom\n3 x done");
    }

    #[test]
    fn test_format_empty() {
        assert_eq!(format_tasks_pretty(&[], &Renderer::plain()).unwrap(), "");
    }
}
