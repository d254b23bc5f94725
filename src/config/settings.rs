//! Configuration settings for todotxt.
//!
//! Settings are loaded from `~/.todotxt/config.yaml`.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::cli::args::OutputFormat;
use crate::error::TodoError;

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Colors used when listing tasks.
    pub styles: StyleConfig,
}

/// General application settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// File name of the task list inside the todo directory.
    #[serde(default = "default_todo_file")]
    pub todo_file: String,
    /// Default output format.
    #[serde(default = "default_output_format")]
    pub default_output: OutputFormat,
    /// Color output setting.
    #[serde(default = "default_color")]
    pub color: ColorSetting,
}

/// Color output setting.
#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorSetting {
    /// Auto-detect based on terminal.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

/// Color names for task lines.
///
/// Names are the ones `colored` understands (`yellow`, `bright blue`),
/// or `none` for the terminal's own color.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StyleConfig {
    /// Lines with no priority, and priorities without their own entry.
    #[serde(default = "default_style")]
    pub default: String,
    /// Completed tasks.
    #[serde(default = "default_completed_style")]
    pub completed: String,
    /// Per-letter colors.
    #[serde(default = "default_priority_styles")]
    pub priorities: BTreeMap<char, String>,
}

// Default value functions for serde
fn default_todo_file() -> String {
    "todo.txt".to_string()
}

const fn default_output_format() -> OutputFormat {
    OutputFormat::Pretty
}

const fn default_color() -> ColorSetting {
    ColorSetting::Auto
}

fn default_style() -> String {
    "none".to_string()
}

fn default_completed_style() -> String {
    "bright black".to_string()
}

fn default_priority_styles() -> BTreeMap<char, String> {
    BTreeMap::from([
        ('A', "yellow".to_string()),
        ('B', "green".to_string()),
        ('C', "bright blue".to_string()),
    ])
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            todo_file: default_todo_file(),
            default_output: default_output_format(),
            color: default_color(),
        }
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            default: default_style(),
            completed: default_completed_style(),
            priorities: default_priority_styles(),
        }
    }
}

impl Config {
    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, TodoError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            TodoError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        serde_yaml::from_str(&contents).map_err(|e| {
            TodoError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })
    }
}
