//! Priority-to-color lookup and the line renderer.
//!
//! The table is built once (from defaults or configuration) and handed to
//! whatever renders task lines; nothing here is global.

use std::collections::BTreeMap;

use colored::{Color, Colorize};

use crate::config::StyleConfig;
use crate::error::TodoError;
use crate::todo::{Priority, Task};

const NO_COLOR_NAME: &str = "none";

/// Colors for task lines, keyed by priority.
#[derive(Debug, Clone, PartialEq)]
pub struct PriorityStyles {
    default: Option<Color>,
    completed: Option<Color>,
    letters: BTreeMap<char, Option<Color>>,
}

impl PriorityStyles {
    /// Build the table from configured color names.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::Config` for a color name `colored` does not know,
    /// or for a key that is not a priority letter.
    pub fn from_config(config: &StyleConfig) -> Result<Self, TodoError> {
        let mut letters = BTreeMap::new();
        for (&letter, name) in &config.priorities {
            Priority::from_letter(letter).map_err(|e| {
                TodoError::Config(format!("Invalid style key '{letter}': {e}"))
            })?;
            letters.insert(letter, parse_color(name)?);
        }

        Ok(Self {
            default: parse_color(&config.default)?,
            completed: parse_color(&config.completed)?,
            letters,
        })
    }

    /// Color for a priority; letters without an entry use the default.
    #[must_use]
    pub fn for_priority(&self, priority: Priority) -> Option<Color> {
        priority
            .letter()
            .and_then(|letter| self.letters.get(&letter).copied())
            .unwrap_or(self.default)
    }

    #[must_use]
    pub const fn for_completed(&self) -> Option<Color> {
        self.completed
    }
}

impl Default for PriorityStyles {
    fn default() -> Self {
        Self {
            default: None,
            completed: Some(Color::BrightBlack),
            letters: BTreeMap::from([
                ('A', Some(Color::Yellow)),
                ('B', Some(Color::Green)),
                ('C', Some(Color::BrightBlue)),
            ]),
        }
    }
}

fn parse_color(name: &str) -> Result<Option<Color>, TodoError> {
    let name = name.trim().to_lowercase();
    if name.is_empty() || name == NO_COLOR_NAME {
        return Ok(None);
    }
    name.parse::<Color>()
        .map(Some)
        .map_err(|()| TodoError::Config(format!("Unknown color '{name}'")))
}

/// Decorates encoded task lines with their priority color.
#[derive(Debug, Clone)]
pub struct Renderer {
    styles: PriorityStyles,
    colorize: bool,
}

impl Renderer {
    #[must_use]
    pub const fn new(styles: PriorityStyles, colorize: bool) -> Self {
        Self { styles, colorize }
    }

    /// A renderer that leaves lines untouched.
    #[must_use]
    pub fn plain() -> Self {
        Self::new(PriorityStyles::default(), false)
    }

    /// Encode `task` and color the result.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::InvalidPriority` if the task cannot be encoded.
    pub fn render(&self, task: &Task) -> Result<String, TodoError> {
        let line = task.encode()?;
        if !self.colorize {
            return Ok(line);
        }

        let color = if task.completed {
            self.styles.for_completed()
        } else {
            self.styles.for_priority(task.priority)
        };

        Ok(match color {
            Some(color) => line.color(color).to_string(),
            None => line,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_lookup() {
        let styles = PriorityStyles::default();
        assert_eq!(styles.for_priority(Priority::Level('A')), Some(Color::Yellow));
        assert_eq!(styles.for_priority(Priority::Level('B')), Some(Color::Green));
        assert_eq!(styles.for_priority(Priority::Level('C')), Some(Color::BrightBlue));
        assert_eq!(styles.for_priority(Priority::Level('D')), None);
        assert_eq!(styles.for_priority(Priority::None), None);
        assert_eq!(styles.for_completed(), Some(Color::BrightBlack));
    }

    #[test]
    fn test_default_config_matches_default_table() {
        let styles = PriorityStyles::from_config(&StyleConfig::default()).unwrap();
        assert_eq!(styles, PriorityStyles::default());
    }

    #[test]
    fn test_config_overrides() {
        let mut config = StyleConfig::default();
        config.default = "white".to_string();
        config.priorities.insert('Z', "red".to_string());

        let styles = PriorityStyles::from_config(&config).unwrap();
        assert_eq!(styles.for_priority(Priority::Level('Z')), Some(Color::Red));
        assert_eq!(styles.for_priority(Priority::Level('Q')), Some(Color::White));
        assert_eq!(styles.for_priority(Priority::None), Some(Color::White));
    }

    #[test]
    fn test_unknown_color_is_config_error() {
        let mut config = StyleConfig::default();
        config.completed = "ultraviolet".to_string();
        assert!(matches!(
            PriorityStyles::from_config(&config),
            Err(TodoError::Config(_))
        ));
    }

    #[test]
    fn test_bad_priority_key_is_config_error() {
        let mut config = StyleConfig::default();
        config.priorities.insert('7', "red".to_string());
        assert!(matches!(
            PriorityStyles::from_config(&config),
            Err(TodoError::Config(_))
        ));
    }

    #[test]
    fn test_plain_render_is_encoded_line() {
        let task = Task::decode("(A) 2024-03-01 Buy milk");
        let rendered = Renderer::plain().render(&task).unwrap();
        assert_eq!(rendered, "(A) 2024-03-01 Buy milk");
    }

    #[test]
    fn test_colored_render_keeps_text() {
        let task = Task::decode("x 2024-03-02 done");
        let rendered = Renderer::new(PriorityStyles::default(), true)
            .render(&task)
            .unwrap();
        assert!(rendered.contains("x 2024-03-02 done"));
    }

    #[test]
    fn test_render_invalid_priority() {
        let mut task = Task::decode("oops");
        task.set_priority(Priority::Level('!'));
        assert!(Renderer::plain().render(&task).is_err());
    }
}
