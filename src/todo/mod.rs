//! The todo.txt format: dates, priorities, description tokens, tasks and
//! task lists.
//!
//! Everything here is pure and in-memory; reading and writing files lives
//! in [`crate::storage`], colors in [`crate::output`].

pub mod date;
pub mod list;
pub mod priority;
pub mod task;
pub mod token;

pub use date::Date;
pub use list::TaskList;
pub use priority::Priority;
pub use task::Task;
pub use token::Token;
