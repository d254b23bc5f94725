//! Configuration management for todotxt.
//!
//! This module handles loading configuration from `~/.todotxt/` and
//! locating the todo file.

mod paths;
mod settings;

pub use paths::{todo_file_path, Paths};
pub use settings::{ColorSetting, Config, GeneralConfig, StyleConfig};
