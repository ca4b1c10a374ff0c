//! CLI argument parsing and command dispatch.

pub mod args;
pub mod commands;

use anyhow::Result;
use args::{Action, Cli};
use clap::{CommandFactory, Parser};
use nh_client::QRadarClient;

use crate::{config, logging};

/// Run the CLI application.
///
/// Only startup problems (logging, configuration, client construction) are
/// returned as errors; every action reports its own failures and returns
/// `Ok`.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose, cli.log_file.as_deref())?;

    if cli.no_color {
        colored::control::set_override(false);
    }

    let Some(action) = cli.action() else {
        Cli::command().print_help()?;
        return Ok(());
    };

    // Configuration is read once here and handed down
    let config = config::load(cli.config.as_deref())?;
    let client = QRadarClient::from_config(&config)?;

    let ctx = commands::Context { config, client };

    match action {
        Action::Export(path) => commands::export::execute(&ctx, &path).await,
        Action::Import(path) => commands::import::execute(&ctx, &path).await,
        Action::CheckDomain => commands::domain::execute(&ctx).await,
        Action::CheckVersion => commands::version::execute(&ctx).await,
    }

    Ok(())
}
