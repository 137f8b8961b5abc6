//! History consistency invariant: history length matches occupied cells.

use super::Invariant;
use crate::Game;

/// Invariant: history length equals the number of occupied cells.
pub struct HistoryConsistentInvariant;

impl Invariant<Game> for HistoryConsistentInvariant {
    fn holds(game: &Game) -> bool {
        game.history().len() == game.board().occupied_count()
    }

    fn description() -> &'static str {
        "History length matches number of occupied cells"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Player, Position};

    #[test]
    fn test_new_game_holds() {
        assert!(HistoryConsistentInvariant::holds(&Game::new()));
    }

    #[test]
    fn test_moves_hold() {
        let game = Game::replay(&[(0, 0), (14, 14), (7, 7), (3, 11)]).expect("legal moves");
        assert!(HistoryConsistentInvariant::holds(&game));
        assert_eq!(game.history().len(), 4);
    }

    #[test]
    fn test_stone_without_history_violates() {
        let mut game = Game::replay(&[(7, 7)]).expect("legal move");
        game.board
            .set(Position::new(1, 1).expect("on board"), Cell::Occupied(Player::White));
        assert!(!HistoryConsistentInvariant::holds(&game));
    }
}
