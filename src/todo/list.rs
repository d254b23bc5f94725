//! An ordered list of tasks: a whole todo.txt file in memory.

use super::task::Task;
use crate::error::TodoError;

/// Tasks in file line order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    #[must_use]
    pub const fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Decode multi-line text, one task per line.
    ///
    /// `\n` and `\r\n` endings are both accepted; a trailing newline does
    /// not add an empty task.
    ///
    /// # Errors
    ///
    /// Returns the first `TodoError::InvalidPriority` met; no partial list
    /// is returned.
    pub fn decode(text: &str) -> Result<Self, TodoError> {
        let tasks = text
            .lines()
            .map(Task::decode_strict)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { tasks })
    }

    /// Encode every task, each followed by `\n`.
    ///
    /// # Errors
    ///
    /// Returns the first `TodoError::InvalidPriority` met; nothing is
    /// returned for the tasks before it either.
    pub fn encode(&self) -> Result<String, TodoError> {
        let mut text = String::new();
        for task in &self.tasks {
            text.push_str(&task.encode()?);
            text.push('\n');
        }
        Ok(text)
    }

    /// Add a task at the end of the list.
    pub fn push(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Reorder by canonical line, byte-wise. Equal lines keep their order.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::InvalidPriority` if any task cannot be encoded;
    /// the list is left untouched in that case.
    pub fn sort_by_canonical_form(&mut self) -> Result<(), TodoError> {
        let keys = self
            .tasks
            .iter()
            .map(Task::encode)
            .collect::<Result<Vec<_>, _>>()?;
        let mut keyed: Vec<(String, Task)> = keys.into_iter().zip(self.tasks.drain(..)).collect();
        keyed.sort_by(|a, b| a.0.as_bytes().cmp(b.0.as_bytes()));
        self.tasks = keyed.into_iter().map(|(_, task)| task).collect();
        Ok(())
    }

    /// Look up a task by its 1-based number, as shown to users.
    #[must_use]
    pub fn get_numbered(&self, number: usize) -> Option<&Task> {
        number.checked_sub(1).and_then(|i| self.tasks.get(i))
    }

    /// Mutable lookup by 1-based number.
    pub fn get_numbered_mut(&mut self, number: usize) -> Option<&mut Task> {
        number.checked_sub(1).and_then(|i| self.tasks.get_mut(i))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }
}

impl From<Vec<Task>> for TaskList {
    fn from(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::todo::Priority;

    #[test]
    fn test_decode_and_encode() {
        let text = "(A) call mom\nx 2024-01-02 done\n2024-03-01 write report +work\n";
        let list = TaskList::decode(text).unwrap();
        assert_eq!(list.len(), 3);
        assert_eq!(list.get_numbered(1).unwrap().priority, Priority::Level('A'));
        assert!(list.get_numbered(2).unwrap().completed);
        assert_eq!(list.encode().unwrap(), text);
    }

    #[test]
    fn test_decode_crlf_and_missing_final_newline() {
        let list = TaskList::decode("one\r\ntwo").unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.encode().unwrap(), "one\ntwo\n");
    }

    #[test]
    fn test_decode_empty_text() {
        let list = TaskList::decode("").unwrap();
        assert!(list.is_empty());
        assert_eq!(list.encode().unwrap(), "");
    }

    #[test]
    fn test_blank_line_is_kept() {
        let list = TaskList::decode("a\n\nb\n").unwrap();
        assert_eq!(list.len(), 3);
        assert_eq!(list.encode().unwrap(), "a\n\nb\n");
    }

    #[test]
    fn test_encode_stops_on_invalid_priority() {
        let mut list = TaskList::decode("good\nbad\n").unwrap();
        list.get_numbered_mut(2).unwrap().set_priority(Priority::Level('?'));
        assert!(matches!(
            list.encode(),
            Err(TodoError::InvalidPriority('?'))
        ));
    }

    #[test]
    fn test_push_appends() {
        let mut list = TaskList::new();
        list.push(Task::decode("first"));
        list.push(Task::decode("second"));
        assert_eq!(list.encode().unwrap(), "first\nsecond\n");
    }

    #[test]
    fn test_sort_by_canonical_form() {
        let mut list =
            TaskList::decode("x done\nplain\n(B) b task\n(A) a task\n2024-01-01 dated\n").unwrap();
        list.sort_by_canonical_form().unwrap();
        assert_eq!(
            list.encode().unwrap(),
            "(A) a task\n(B) b task\n2024-01-01 dated\nplain\nx done\n"
        );
    }

    #[test]
    fn test_sort_is_stable_for_equal_lines() {
        // Both collapse to the same canonical line but differ in tokens.
        let mut list = TaskList::from(vec![Task::decode("same  line"), Task::decode("same line")]);
        let before = list.clone();
        list.sort_by_canonical_form().unwrap();
        assert_eq!(list, before);
    }

    #[test]
    fn test_sort_fails_without_reordering() {
        let mut list = TaskList::decode("b\na\n").unwrap();
        list.get_numbered_mut(1).unwrap().set_priority(Priority::Level('1'));
        let before = list.clone();
        assert!(list.sort_by_canonical_form().is_err());
        assert_eq!(list, before);
    }

    #[test]
    fn test_numbered_lookup() {
        let list = TaskList::decode("one\ntwo\n").unwrap();
        assert_eq!(list.get_numbered(1).map(Task::description).as_deref(), Some("one"));
        assert_eq!(list.get_numbered(2).map(Task::description).as_deref(), Some("two"));
        assert!(list.get_numbered(0).is_none());
        assert!(list.get_numbered(3).is_none());
    }
}
