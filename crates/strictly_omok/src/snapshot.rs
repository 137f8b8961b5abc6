//! Serializable view of a game for renderers and exporters.

use super::{Cell, Move, Player};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Point-in-time copy of everything a presentation layer needs.
///
/// This is the only channel through which state leaves the engine; it owns
/// its data, so holding one never borrows the [`Game`](crate::Game).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    /// Board rows, `board[row][col]`.
    board: Vec<Vec<Cell>>,
    /// Player to move (or who made the final move, once over).
    current_player: Player,
    /// Whether the game has been won or drawn.
    game_over: bool,
    /// Winner, if the game was won.
    winner: Option<Player>,
    /// Moves in play order.
    move_history: Vec<Move>,
}

impl GameSnapshot {
    /// Cell at `(row, col)`, or `None` if it is off the board.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.board.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Most recent move, for highlighting.
    pub fn last_move(&self) -> Option<&Move> {
        self.move_history.last()
    }

    /// True when the game ended without a winner.
    pub fn is_draw(&self) -> bool {
        self.game_over && self.winner.is_none()
    }

    /// Serializes the snapshot as pretty-printed JSON.
    #[instrument(skip(self), fields(moves = self.move_history.len()))]
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
