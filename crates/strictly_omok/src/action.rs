//! First-class action types for omok.
//!
//! A [`Placement`] is the caller's raw request; a [`Move`] is the record
//! the engine keeps once a placement has been accepted.

use super::{Player, Position};
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A request to place the current player's stone at `(row, col)`.
///
/// Coordinates are signed and unchecked; the engine validates them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, new)]
pub struct Placement {
    /// Requested row.
    pub row: i32,
    /// Requested column.
    pub col: i32,
}

/// A move that was played: a player's stone at a position.
///
/// Serialized as `{ "row", "col", "player" }`. Deserialization rejects
/// coordinates that fall off the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "MoveRecord", try_from = "MoveRecord")]
pub struct Move {
    position: Position,
    player: Player,
}

impl Move {
    /// Creates a new move.
    pub fn new(position: Position, player: Player) -> Self {
        Self { position, player }
    }

    /// Returns the player who made this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Row of the stone.
    pub fn row(&self) -> usize {
        self.position.row()
    }

    /// Column of the stone.
    pub fn col(&self) -> usize {
        self.position.col()
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position)
    }
}

/// Wire shape of a [`Move`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct MoveRecord {
    row: i32,
    col: i32,
    player: Player,
}

impl From<Move> for MoveRecord {
    fn from(mov: Move) -> Self {
        Self {
            row: mov.row() as i32,
            col: mov.col() as i32,
            player: mov.player,
        }
    }
}

impl TryFrom<MoveRecord> for Move {
    type Error = MoveError;

    fn try_from(record: MoveRecord) -> Result<Self, Self::Error> {
        let position = Position::new(record.row, record.col).ok_or(MoveError::OutOfBounds {
            row: record.row,
            col: record.col,
        })?;
        Ok(Move::new(position, record.player))
    }
}

/// Error that can occur when validating or applying an action.
///
/// Every variant except [`MoveError::InvariantViolation`] is an expected,
/// input-driven rejection. A rejected action leaves the game untouched.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The game has already been won or drawn.
    #[display("Game is already over")]
    GameOver,

    /// The coordinates fall outside the board.
    #[display("Position ({}, {}) is off the board", row, col)]
    OutOfBounds {
        /// Requested row.
        row: i32,
        /// Requested column.
        col: i32,
    },

    /// The cell already holds a stone.
    #[display("Cell ({}, {}) is already occupied", row, col)]
    Occupied {
        /// Requested row.
        row: i32,
        /// Requested column.
        col: i32,
    },

    /// Undo was requested with an empty history.
    #[display("No move to undo")]
    NoMoveToUndo,

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(#[error(not(source))] String),
}
