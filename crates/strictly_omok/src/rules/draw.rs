//! Draw detection for omok.

use crate::Board;
use tracing::instrument;

/// Checks if the board is full (no empty cell left).
///
/// Only meaningful after the win check: a full board whose last stone
/// completed five is a win, not a draw.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}
