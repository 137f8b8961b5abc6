//! Game session: maps player commands to engine calls.
//!
//! The session owns one [`Game`] and turns every engine result into a
//! [`Reply`] for the console. It never touches the board except through
//! the engine's transitions.

use crate::config::OmokConfig;
use crate::export::{ExportError, GameExport};
use crate::render;
use chrono::{DateTime, Utc};
use derive_more::{Display, Error};
use std::path::PathBuf;
use std::str::FromStr;
use strictly_omok::{Game, PlaceOutcome};
use tracing::{debug, instrument, warn};

/// A command typed by a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand {
    /// Place the current player's stone (0-based engine coordinates).
    Place {
        /// Row.
        row: i32,
        /// Column.
        col: i32,
    },
    /// Take back the last move.
    Undo,
    /// Start a new game immediately.
    NewGame,
    /// Reset the game (the console asks for confirmation first).
    Reset,
    /// Show the board.
    Board,
    /// Show the move list.
    History,
    /// Show whose turn it is.
    Status,
    /// Write the game to a JSON file.
    Export,
    /// Show available commands.
    Help,
    /// Leave the console.
    Quit,
}

/// Input that is not a command or a coordinate.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unrecognized input {:?} (type 'help' for commands)", input)]
pub struct ParseCommandError {
    /// The rejected input.
    pub input: String,
}

impl FromStr for SessionCommand {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let command = match input.to_lowercase().as_str() {
            "undo" | "u" => Some(SessionCommand::Undo),
            "new" | "n" => Some(SessionCommand::NewGame),
            "reset" | "r" => Some(SessionCommand::Reset),
            "board" | "b" => Some(SessionCommand::Board),
            "history" | "h" => Some(SessionCommand::History),
            "status" | "s" => Some(SessionCommand::Status),
            "export" | "e" => Some(SessionCommand::Export),
            "help" | "?" => Some(SessionCommand::Help),
            "quit" | "q" | "exit" => Some(SessionCommand::Quit),
            _ => parse_coordinate(input).map(|(row, col)| SessionCommand::Place { row, col }),
        };
        command.ok_or_else(|| ParseCommandError {
            input: input.to_string(),
        })
    }
}

/// Parses `"row col"`, `"row,col"` (0-based) or board notation like `"H8"`.
///
/// Coordinates are not bounds-checked here; the engine does that.
pub fn parse_coordinate(input: &str) -> Option<(i32, i32)> {
    let input = input.trim();
    let numbers: Vec<&str> = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect();

    if let [row, col] = numbers.as_slice()
        && let (Ok(row), Ok(col)) = (row.parse::<i32>(), col.parse::<i32>())
    {
        return Some((row, col));
    }

    let mut chars = input.chars();
    let letter = chars.next()?.to_ascii_uppercase();
    if !letter.is_ascii_uppercase() {
        return None;
    }
    let row: i32 = chars.as_str().parse().ok()?;
    Some((row.checked_sub(1)?, letter as i32 - 'A' as i32))
}

/// How a reply should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    /// Neutral information.
    Info,
    /// An action went through.
    Success,
    /// An action was rejected.
    Error,
    /// The game just ended.
    GameOver,
}

/// Session response to a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// Presentation hint.
    pub tone: Tone,
    /// Text for the player.
    pub message: String,
    /// Whether the board changed and should be redrawn.
    pub board_changed: bool,
}

impl Reply {
    fn new(tone: Tone, message: impl Into<String>, board_changed: bool) -> Self {
        Self {
            tone,
            message: message.into(),
            board_changed,
        }
    }
}

impl std::fmt::Display for Reply {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.tone {
            Tone::Error => write!(f, "✗ {}", self.message),
            Tone::GameOver => write!(f, "★ {}", self.message),
            Tone::Success | Tone::Info => write!(f, "{}", self.message),
        }
    }
}

/// Help text listing every command.
pub const HELP: &str = "\
Commands:
  H8 | 7 7 | 7,7   place a stone (letter+row, or 0-based row and column)
  undo  (u)        take back the last move
  new   (n)        start a new game
  reset (r)        reset the game (asks first)
  board (b)        show the board
  history (h)      show the move list
  status (s)       show whose turn it is
  export (e)       write the game to a JSON file
  help  (?)        show this help
  quit  (q)        leave";

/// A console game session.
#[derive(Debug, Clone)]
pub struct GameSession {
    game: Game,
    config: OmokConfig,
}

impl GameSession {
    /// Creates a session with a fresh game.
    #[instrument(skip(config))]
    pub fn new(config: OmokConfig) -> Self {
        Self {
            game: Game::new(),
            config,
        }
    }

    /// Returns the game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Returns the configuration.
    pub fn config(&self) -> &OmokConfig {
        &self.config
    }

    /// Runs a command against the game.
    #[instrument(skip(self))]
    pub fn execute(&mut self, command: SessionCommand) -> Reply {
        match command {
            SessionCommand::Place { row, col } => self.place(row, col),
            SessionCommand::Undo => self.undo(),
            SessionCommand::NewGame | SessionCommand::Reset => self.new_game(),
            SessionCommand::Board => {
                Reply::new(Tone::Info, render::render_board(&self.game.snapshot()), false)
            }
            SessionCommand::History => self.history(),
            SessionCommand::Status => Reply::new(Tone::Info, self.status_line(), false),
            SessionCommand::Export => self.export_reply(Utc::now()),
            SessionCommand::Help => Reply::new(Tone::Info, HELP, false),
            SessionCommand::Quit => Reply::new(Tone::Info, "Goodbye!", false),
        }
    }

    /// Places a stone for the player to move.
    #[instrument(skip(self))]
    pub fn place(&mut self, row: i32, col: i32) -> Reply {
        match self.game.place_stone(row, col) {
            Ok(PlaceOutcome::Continue { next_player }) => {
                debug!(?next_player, "Move accepted");
                let message = format!("{} to move", self.config.player_name(next_player));
                Reply::new(Tone::Success, message, true)
            }
            Ok(PlaceOutcome::Win { winner }) => {
                let message = format!("{} wins!", self.config.player_name(winner));
                Reply::new(Tone::GameOver, message, true)
            }
            Ok(PlaceOutcome::Draw) => Reply::new(Tone::GameOver, "Draw!", true),
            Err(e) => {
                warn!(error = %e, "Move rejected");
                Reply::new(Tone::Error, e.to_string(), false)
            }
        }
    }

    /// Takes back the last move.
    #[instrument(skip(self))]
    pub fn undo(&mut self) -> Reply {
        match self.game.undo_move() {
            Ok(undo) => {
                let message = format!(
                    "Took back {} at {}. {} to move",
                    self.config.player_name(undo.undone.player()),
                    render::notation(undo.undone.row(), undo.undone.col()),
                    self.config.player_name(undo.current_player)
                );
                Reply::new(Tone::Info, message, true)
            }
            Err(e) => {
                warn!(error = %e, "Undo rejected");
                Reply::new(Tone::Error, e.to_string(), false)
            }
        }
    }

    /// Starts over with an empty board.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) -> Reply {
        self.game.reset_game();
        Reply::new(Tone::Success, "New game started!", true)
    }

    /// One-line status for the current game.
    pub fn status_line(&self) -> String {
        render::status_line(&self.game.snapshot(), &self.config)
    }

    fn history(&self) -> Reply {
        let lines = render::history_lines(self.game.history(), &self.config);
        if lines.is_empty() {
            Reply::new(Tone::Info, "No moves yet", false)
        } else {
            Reply::new(Tone::Info, lines.join("\n"), false)
        }
    }

    /// Exports the game into the configured directory.
    #[instrument(skip(self))]
    pub fn export(&self, timestamp: DateTime<Utc>) -> Result<PathBuf, ExportError> {
        GameExport::new(&self.game, &self.config, timestamp).write_to(self.config.export_dir())
    }

    fn export_reply(&self, timestamp: DateTime<Utc>) -> Reply {
        match self.export(timestamp) {
            Ok(path) => {
                let message = format!("Game exported to {}", path.display());
                Reply::new(Tone::Success, message, false)
            }
            Err(e) => {
                warn!(error = %e, "Export failed");
                Reply::new(Tone::Error, e.message, false)
            }
        }
    }
}
