use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::Deserialize;

#[derive(Parser)]
#[command(name = "todotxt")]
#[command(about = "Manage a todo.txt task list from the command line")]
#[command(long_about = "todotxt - a todo.txt command-line tool

Keeps tasks in a plain-text todo.txt file, one task per line:

  x (A) 2024-03-02 2024-03-01 Buy milk +errands @store due:2024-03-05
  | |   |          |          `- description with +project, @context, key:value
  | |   |          `- creation date
  | |   `- completion date (completed tasks only)
  | `- priority
  `- completion marker

QUICK START:
  todotxt add \"(A) Buy milk +errands\"   Add a task
  todotxt list                          List tasks with their numbers
  todotxt do 1                          Mark task 1 as done
  todotxt pri 2 B                       Give task 2 priority B

The todo file is <TODO_DIR>/todo.txt unless --file says otherwise.")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for listings
    ///
    /// Use 'pretty' for numbered, colored lines (default),
    /// or 'json' for machine-readable output suitable for scripting.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Use this todo file instead of the default one
    #[arg(short, long, global = true)]
    pub file: Option<String>,

    /// Directory holding the todo file
    #[arg(short, long, env = "TODO_DIR", global = true)]
    pub dir: Option<PathBuf>,

    /// Plain mode turns off colors
    #[arg(short, long, global = true)]
    pub plain: bool,

    /// Log what is being done to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a task
    ///
    /// The text is read as a todo.txt line, so a leading "(A) " sets the
    /// priority. The creation date is always set to today.
    ///
    /// # Examples
    ///
    ///   todotxt add Buy milk +errands @store
    ///   todotxt add "(A) Call mom @phone"
    #[command(alias = "a")]
    Add {
        /// Task text
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// Append text to the end of a task's description
    ///
    /// # Examples
    ///
    ///   todotxt append 3 due:2024-06-01
    #[command(alias = "app")]
    Append {
        /// Task number, as shown by 'list'
        number: String,

        /// Text to append
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// Mark a task as done
    ///
    /// A task with a priority keeps it as a 'pri:X' tag.
    Do {
        /// Task number, as shown by 'list'
        number: String,
    },

    /// Set the priority of a task
    ///
    /// # Examples
    ///
    ///   todotxt pri 2 A
    #[command(alias = "p")]
    Pri {
        /// Task number, as shown by 'list'
        number: String,

        /// Priority letter A-Z
        priority: String,
    },

    /// Remove the priority from a task
    #[command(alias = "dp")]
    Depri {
        /// Task number, as shown by 'list'
        number: String,
    },

    /// Sort the todo file by task line
    Sort,

    /// List tasks (the default)
    ///
    /// With terms, only tasks containing every term are shown
    /// (case-insensitive). Task numbers stay the same as in the full list.
    ///
    /// # Examples
    ///
    ///   todotxt list
    ///   todotxt ls +errands @store
    #[command(alias = "ls")]
    List {
        /// Terms that must all appear in a task
        terms: Vec<String>,
    },

    /// Generate shell completions
    ///
    /// Example: todotxt completions bash > ~/.bash_completion.d/todotxt
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_parses() {
        let cli = Cli::try_parse_from(["todotxt"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.output.is_none());
    }

    #[test]
    fn test_add_collects_words() {
        let cli = Cli::try_parse_from(["todotxt", "add", "(A)", "Buy", "milk", "+errands"]).unwrap();
        match cli.command {
            Some(Commands::Add { text }) => assert_eq!(text.join(" "), "(A) Buy milk +errands"),
            _ => panic!("expected add"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["todotxt", "list", "-p", "-o", "json"]).unwrap();
        assert!(cli.plain);
        assert_eq!(cli.output, Some(OutputFormat::Json));
    }

    #[test]
    fn test_pri_arguments() {
        let cli = Cli::try_parse_from(["todotxt", "pri", "2", "B"]).unwrap();
        match cli.command {
            Some(Commands::Pri { number, priority }) => {
                assert_eq!(number, "2");
                assert_eq!(priority, "B");
            }
            _ => panic!("expected pri"),
        }
    }
}
