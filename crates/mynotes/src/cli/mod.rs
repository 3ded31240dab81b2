//! # CLI Layer
//!
//! The CLI layer is the **only** place that:
//! - Knows about terminal I/O (stdout, stderr, stdin)
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Structure
//!
//! - `run()`: parse arguments, set up logging and config, dispatch
//! - `commands`: one handler per subcommand
//! - `shell`: the interactive, event-driven session
//! - `prompt`: terminal implementations of the library's collaborator traits
//! - `render` / `styles`: output formatting

mod commands;
mod prompt;
mod render;
mod setup;
mod shell;
mod styles;

use clap::Parser;
use mynotesapp::config::NotesConfig;
use mynotesapp::NotesApi;
use setup::{Cli, Commands};

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = NotesConfig::load(cli.config.as_deref())?;
    if let Some(dir) = &cli.data_dir {
        config.data_dir = Some(dir.clone());
    }
    if cli.yes {
        config.confirm_delete = false;
    }
    log::debug!("using config {:?}", config);

    let mut api = NotesApi::from_config(&config)?;
    commands::dispatch(&mut api, cli.command.unwrap_or(Commands::List))
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}
