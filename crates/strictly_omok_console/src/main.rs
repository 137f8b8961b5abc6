//! Strictly Omok - console entry point.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use strictly_omok_console::logging::{self, BOOTSTRAP_LOG_FILTER};
use strictly_omok_console::{Cli, Command, GameSession, run_interactive, run_replay};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = logging::load_config(
        &cli.config,
        logging::env_filter(BOOTSTRAP_LOG_FILTER),
        std::io::stderr,
    )
    .with_context(|| format!("Failed to load {}", cli.config.display()))?;
    logging::init(&config);

    info!(config = %cli.config.display(), "Starting Strictly Omok");

    let mut session = GameSession::new(config);
    match cli.command.unwrap_or(Command::Play) {
        Command::Play => {
            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            run_interactive(&mut session, stdin.lock(), &mut stdout).context("Console I/O failed")?;
        }
        Command::Replay { moves, export } => {
            let mut stdout = std::io::stdout();
            run_replay(&mut session, &moves, export, &mut stdout)?;
        }
    }
    Ok(())
}
