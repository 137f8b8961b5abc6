//! Strictly Omok console front-end.
//!
//! Wraps the [`strictly_omok`] engine in a line-oriented session with
//! configurable player names, a text board and JSON export.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod console;
pub mod export;
pub mod logging;
pub mod render;
pub mod session;

pub use cli::{Cli, Command};
pub use config::{ConfigError, DEFAULT_CONFIG_FILE, OmokConfig};
pub use console::{ReplayError, run_interactive, run_replay};
pub use export::{ExportError, GameExport, GameStats};
pub use session::{GameSession, ParseCommandError, Reply, SessionCommand, Tone};
