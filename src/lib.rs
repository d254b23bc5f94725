//! todotxt - a todo.txt task codec and CLI
//!
//! This crate reads and writes task lists in the todo.txt plain-text
//! format, and provides a small command-line interface on top.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod storage;
pub mod todo;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::TodoError;
pub use todo::{Date, Priority, Task, TaskList, Token};
