//! Task priorities.

use std::fmt;

use crate::error::TodoError;

/// A task priority: a letter `A`..=`Z`, or none at all.
///
/// Variant order gives the sort order: every letter sorts before
/// [`Priority::None`], and letters sort alphabetically.
///
/// `Level` is not validated on construction so that a bad value coming
/// from user input can be carried until [`Priority::validate`] rejects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Priority {
    Level(char),
    #[default]
    None,
}

impl Priority {
    /// Build a validated priority from a letter.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::InvalidPriority` if `letter` is not `A`..=`Z`.
    pub fn from_letter(letter: char) -> Result<Self, TodoError> {
        let priority = Self::Level(letter);
        priority.validate()?;
        Ok(priority)
    }

    /// Check that the priority is either none or an uppercase ASCII letter.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::InvalidPriority` for any other letter.
    pub fn validate(&self) -> Result<(), TodoError> {
        match *self {
            Self::Level(c) if !c.is_ascii_uppercase() => Err(TodoError::InvalidPriority(c)),
            _ => Ok(()),
        }
    }

    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    #[must_use]
    pub const fn letter(&self) -> Option<char> {
        match *self {
            Self::Level(c) => Some(c),
            Self::None => None,
        }
    }

    /// The bare letter, used when the priority is archived into a `pri:` tag.
    #[must_use]
    pub fn to_tag_value(&self) -> String {
        self.letter().map(String::from).unwrap_or_default()
    }
}

/// Renders the line prefix: `"(A) "`, or nothing for [`Priority::None`].
impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Level(c) => write!(f, "({c}) "),
            Self::None => Ok(()),
        }
    }
}
