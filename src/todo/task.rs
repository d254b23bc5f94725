//! The task codec: one todo.txt line to a [`Task`] and back.
//!
//! A line is scanned left to right, each step consuming an anchored prefix
//! of what is left:
//!
//! ```text
//! ["x "] ["(" A-Z ") "] [DATE " "] [DATE " "] DESCRIPTION
//! ```
//!
//! On a completed task the first date is the completion date and the
//! second the creation date; on an open task the only date read is the
//! creation date.

use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use super::date::{self, Date};
use super::priority::Priority;
use super::token::{self, Token};
use crate::error::TodoError;

const COMPLETED_MARKER: &str = "x ";
const ARCHIVED_PRIORITY_KEY: &str = "pri";

static PRIORITY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\(([A-Z])\) ").unwrap_or_else(|e| panic!("Invalid priority regex: {e}"))
});

// Year width is 2 to 4 digits here; `Date::parse` then insists on 4, so a
// short-year date is consumed from the line but reads as no date.
static DATE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{2,4}-[0-9]{2}-[0-9]{2}) ")
        .unwrap_or_else(|e| panic!("Invalid date regex: {e}"))
});

/// A single task: one line of a todo.txt file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Task {
    pub completed: bool,
    pub priority: Priority,
    /// Only meaningful while `completed` is true.
    pub completion_date: Option<Date>,
    pub creation_date: Option<Date>,
    /// Description tokens in rendering order.
    pub description: Vec<Token>,
}

impl Task {
    /// Decode a line without validating it.
    ///
    /// Never fails: unreadable dates become `None` and anything that is
    /// not a recognised tag becomes a word.
    #[must_use]
    pub fn decode(line: &str) -> Self {
        let mut task = Self::default();
        let mut rest = line;

        if let Some(after) = rest.strip_prefix(COMPLETED_MARKER) {
            task.completed = true;
            rest = after;
        }

        if let Some(caps) = PRIORITY_PATTERN.captures(rest) {
            if let Some(letter) = caps.get(1).and_then(|m| m.as_str().chars().next()) {
                task.priority = Priority::Level(letter);
            }
            rest = &rest[caps[0].len()..];
        }

        let mut dates = [None, None];
        for slot in &mut dates {
            let Some(caps) = DATE_PATTERN.captures(rest) else {
                break;
            };
            *slot = caps.get(1).and_then(|m| Date::parse(m.as_str()));
            rest = &rest[caps[0].len()..];
        }

        if task.completed {
            task.completion_date = dates[0];
            task.creation_date = dates[1];
        } else {
            task.creation_date = dates[0];
        }

        task.description = token::tokenize(rest);
        task
    }

    /// Decode a line and validate the result.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::InvalidPriority` if the decoded priority is not
    /// a letter `A`..=`Z`.
    pub fn decode_strict(line: &str) -> Result<Self, TodoError> {
        let mut task = Self::decode(line);
        task.validate()?;
        Ok(task)
    }

    /// Decode `text` as a new task created today.
    ///
    /// Any creation date in `text` is replaced by today's date.
    #[must_use]
    pub fn new_today(text: &str) -> Self {
        let mut task = Self::decode(text);
        task.creation_date = Some(Date::today());
        task
    }

    /// Check the priority and normalise the dates.
    ///
    /// An open task loses any completion date.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::InvalidPriority` for a priority outside `A`..=`Z`.
    pub fn validate(&mut self) -> Result<(), TodoError> {
        self.priority.validate()?;
        if !self.completed {
            self.completion_date = None;
        }
        // No-op: both dates are already absent here.
        if self.completed && self.completion_date.is_none() && self.creation_date.is_none() {
            self.completion_date = None;
        }
        Ok(())
    }

    /// Encode the task as its canonical line (no trailing newline).
    ///
    /// Fields are always written in the same order: completion marker,
    /// priority, completion date, creation date, description.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::InvalidPriority` instead of writing a line that
    /// would not decode back to the same priority.
    pub fn encode(&self) -> Result<String, TodoError> {
        self.priority.validate()?;

        let mut line = String::new();
        if self.completed {
            line.push_str(COMPLETED_MARKER);
        }
        line.push_str(&self.priority.to_string());
        if self.completed {
            line.push_str(&date::format_segment(self.completion_date));
        }
        line.push_str(&date::format_segment(self.creation_date));
        line.push_str(&token::join(&self.description));
        Ok(line)
    }

    /// Mark the task as done.
    ///
    /// Stamps today's completion date when the task has a creation date,
    /// and archives a real priority into a trailing `pri:X` tag. Calling
    /// this on a task that is already done changes nothing.
    pub fn mark_completed(&mut self) {
        if self.completed {
            return;
        }
        self.completed = true;
        if self.creation_date.is_some() {
            self.completion_date = Some(Date::today());
        }
        if let Some(letter) = self.priority.letter() {
            self.description
                .push(Token::key_value(ARCHIVED_PRIORITY_KEY, letter));
            self.priority = Priority::None;
        }
    }

    pub fn set_priority(&mut self, priority: Priority) {
        self.priority = priority;
    }

    pub fn clear_priority(&mut self) {
        self.priority = Priority::None;
    }

    /// The description rendered as text.
    #[must_use]
    pub fn description(&self) -> String {
        token::join(&self.description)
    }

    /// Replace the description by tokenizing `text`.
    pub fn set_description(&mut self, text: &str) {
        self.description = token::tokenize(text);
    }

    /// Project tags, without the `+`.
    pub fn projects(&self) -> impl Iterator<Item = &str> {
        self.description.iter().filter_map(|t| match t {
            Token::Project(p) => Some(p.as_str()),
            _ => None,
        })
    }

    /// Context tags, without the `@`.
    pub fn contexts(&self) -> impl Iterator<Item = &str> {
        self.description.iter().filter_map(|t| match t {
            Token::Context(c) => Some(c.as_str()),
            _ => None,
        })
    }

    /// Key/value tags in description order.
    pub fn tags(&self) -> impl Iterator<Item = (&str, &str)> {
        self.description.iter().filter_map(|t| match t {
            Token::KeyValue { key, value } => Some((key.as_str(), value.as_str())),
            _ => None,
        })
    }
}

impl FromStr for Task {
    type Err = TodoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode_strict(s)
    }
}
