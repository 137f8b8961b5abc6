//! Command-line interface for the omok console.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::DEFAULT_CONFIG_FILE;

/// Strictly Omok - two-player Gomoku on a 15x15 board
#[derive(Parser, Debug)]
#[command(name = "omok")]
#[command(about = "Play Omok (Gomoku) in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (optional; defaults apply if missing)
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Play an interactive game on stdin/stdout
    Play,

    /// Replay moves given as "row,col" (0-based) or notation like "H8"
    Replay {
        /// Moves in play order, Black first
        #[arg(required = true)]
        moves: Vec<String>,

        /// Write the resulting game to the export directory
        #[arg(long)]
        export: bool,
    },
}
