//! Storage layer for todotxt.
//!
//! The task list is kept in a single plain-text file, one task per line.
//! It is always read and rewritten as a whole.

mod file;

pub use file::TodoFile;
