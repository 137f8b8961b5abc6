//! One-shot JSON export of a game.
//!
//! The export is a verbatim copy of the engine snapshot plus a summary with
//! display names and a timestamp. Nothing reads it back.

use crate::config::OmokConfig;
use chrono::{DateTime, Utc};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use strictly_omok::{Game, GameSnapshot, Move};
use tracing::{info, instrument};

/// Summary of a game as shown to players.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStats {
    /// Number of stones placed.
    total_moves: usize,
    /// Display name of the player to move.
    current_player: String,
    /// Whether the game has ended.
    game_over: bool,
    /// Display name of the winner, if any.
    winner: Option<String>,
    /// Full engine snapshot.
    board_state: GameSnapshot,
}

impl GameStats {
    /// Builds stats from the game, naming players per `config`.
    #[instrument(skip_all)]
    pub fn from_game(game: &Game, config: &OmokConfig) -> Self {
        Self {
            total_moves: game.history().len(),
            current_player: config.player_name(game.current_player()).to_string(),
            game_over: game.is_game_over(),
            winner: game.winner().map(|p| config.player_name(p).to_string()),
            board_state: game.snapshot(),
        }
    }
}

/// Everything written to an export file.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameExport {
    /// When the export was taken.
    timestamp: DateTime<Utc>,
    /// Game summary.
    game_stats: GameStats,
    /// Moves in play order.
    move_history: Vec<Move>,
}

impl GameExport {
    /// Captures the game at `timestamp`.
    #[instrument(skip(game, config))]
    pub fn new(game: &Game, config: &OmokConfig, timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp,
            game_stats: GameStats::from_game(game, config),
            move_history: game.move_history(),
        }
    }

    /// File name for this export, e.g. `omok-game-2025-01-31T09-15-00.json`.
    pub fn file_name(&self) -> String {
        format!("omok-game-{}.json", self.timestamp.format("%Y-%m-%dT%H-%M-%S"))
    }

    /// Writes the export as pretty JSON into `dir`, creating it if needed.
    ///
    /// Returns the path of the written file.
    #[instrument(skip(self, dir), fields(dir = %dir.as_ref().display()))]
    pub fn write_to(&self, dir: impl AsRef<Path>) -> Result<PathBuf, ExportError> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir).map_err(|e| {
            ExportError::new(format!("Failed to create export directory {}: {}", dir.display(), e))
        })?;

        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ExportError::new(format!("Failed to serialize game: {}", e)))?;

        let path = dir.join(self.file_name());
        std::fs::write(&path, json)
            .map_err(|e| ExportError::new(format!("Failed to write {}: {}", path.display(), e)))?;

        info!(path = %path.display(), moves = self.move_history.len(), "Game exported");
        Ok(path)
    }
}

/// Export error.
#[derive(Debug, Clone, Display, Error)]
#[display("Export error: {} at {}:{}", message, file, line)]
pub struct ExportError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ExportError {
    /// Creates a new export error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
