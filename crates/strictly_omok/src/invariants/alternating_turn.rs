//! Alternating turn invariant: Black, White, Black, White, ...

use super::Invariant;
use crate::{Game, Player};

/// Invariant: players alternate turns, Black first.
///
/// While the game is running, the player to move is the one the parity of
/// the history calls for. Once it is over, the player to move is left on
/// whoever made the final move.
pub struct AlternatingTurnInvariant;

impl Invariant<Game> for AlternatingTurnInvariant {
    fn holds(game: &Game) -> bool {
        let history = game.history();

        let Some(first) = history.first() else {
            return game.current_player() == Player::Black && !game.is_game_over();
        };

        if first.player() != Player::Black {
            return false;
        }

        if history.windows(2).any(|w| w[0].player() == w[1].player()) {
            return false;
        }

        if game.is_game_over() {
            history.last().map(|m| m.player()) == Some(game.current_player())
        } else {
            let expected_next = if history.len() % 2 == 0 {
                Player::Black
            } else {
                Player::White
            };
            game.current_player() == expected_next
        }
    }

    fn description() -> &'static str {
        "Players alternate turns (Black, White, Black, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_holds() {
        assert!(AlternatingTurnInvariant::holds(&Game::new()));
    }

    #[test]
    fn test_sequence_holds() {
        let game = Game::replay(&[(7, 7), (7, 8), (8, 7), (8, 8), (9, 7)]).expect("legal moves");
        assert!(AlternatingTurnInvariant::holds(&game));
        assert_eq!(game.current_player(), Player::White);
    }

    #[test]
    fn test_holds_after_undo() {
        let mut game = Game::replay(&[(7, 7), (7, 8)]).expect("legal moves");
        game.undo_move().expect("history is not empty");
        assert!(AlternatingTurnInvariant::holds(&game));
        assert_eq!(game.current_player(), Player::White);
    }

    #[test]
    fn test_wrong_player_to_move_violates() {
        let mut game = Game::replay(&[(7, 7)]).expect("legal move");
        game.current_player = Player::Black;
        assert!(!AlternatingTurnInvariant::holds(&game));
    }
}
