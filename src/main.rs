use std::io::IsTerminal;

use clap::Parser;
use colored::Colorize;

use todotxt::cli::args::{Cli, Commands};
use todotxt::cli::commands::{self, Context};
use todotxt::config::{todo_file_path, ColorSetting, Config, Paths};
use todotxt::error::TodoError;
use todotxt::logging::init_logging;
use todotxt::output::{PriorityStyles, Renderer};
use todotxt::storage::TodoFile;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), TodoError> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load_from_path(&Paths::default().config_file)?;

    let colorize = should_colorize(config.general.color, cli.plain);
    colored::control::set_override(colorize);
    let renderer = Renderer::new(PriorityStyles::from_config(&config.styles)?, colorize);

    let file_name = cli.file.as_deref().unwrap_or(&config.general.todo_file);
    let path = todo_file_path(cli.dir.as_deref(), file_name);
    tracing::debug!(path = %path.display(), "using todo file");

    let format = cli.output.unwrap_or(config.general.default_output);
    let ctx = Context::new(TodoFile::new(path), format, renderer);

    let output = match cli.command.unwrap_or(Commands::List { terms: Vec::new() }) {
        Commands::Add { text } => commands::add(&ctx, &text)?,
        Commands::Append { number, text } => commands::append(&ctx, &number, &text)?,
        Commands::Do { number } => commands::do_task(&ctx, &number)?,
        Commands::Pri { number, priority } => commands::pri(&ctx, &number, &priority)?,
        Commands::Depri { number } => commands::depri(&ctx, &number)?,
        Commands::Sort => commands::sort(&ctx)?,
        Commands::List { terms } => commands::list(&ctx, &terms)?,
        Commands::Completions { shell } => commands::completions(shell),
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

fn should_colorize(setting: ColorSetting, plain: bool) -> bool {
    if plain {
        return false;
    }
    match setting {
        ColorSetting::Always => true,
        ColorSetting::Never => false,
        ColorSetting::Auto => {
            std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
        }
    }
}
