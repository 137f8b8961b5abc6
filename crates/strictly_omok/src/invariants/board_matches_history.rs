//! Board/history agreement: replaying the history rebuilds the board.

use super::Invariant;
use crate::{Board, Cell, Game};

/// Invariant: the board is exactly what the move history produces.
///
/// Every move must land on a cell that was empty at that point, and the
/// replayed board must equal the current one.
pub struct BoardMatchesHistoryInvariant;

impl Invariant<Game> for BoardMatchesHistoryInvariant {
    fn holds(game: &Game) -> bool {
        let mut reconstructed = Board::new();

        for mov in game.history() {
            if !reconstructed.is_empty(mov.position()) {
                return false;
            }
            reconstructed.set(mov.position(), Cell::Occupied(mov.player()));
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Board matches the replayed move history"
    }
}
