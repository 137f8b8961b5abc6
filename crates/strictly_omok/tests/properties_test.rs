//! Property tests for engine invariants over arbitrary move sequences.

use proptest::prelude::*;
use strictly_omok::invariants::{InvariantSet, OmokInvariants};
use strictly_omok::{Cell, Game, MoveError, Player};

/// Coordinates that are mostly on the board, with some just off each edge.
fn coordinate() -> impl Strategy<Value = (i32, i32)> {
    (-2i32..17, -2i32..17)
}

/// Plays every coordinate, ignoring rejections, and returns the final game.
fn play_all(moves: &[(i32, i32)]) -> Game {
    let mut game = Game::new();
    for &(row, col) in moves {
        let _ = game.place_stone(row, col);
    }
    game
}

fn occupied_cells(game: &Game) -> usize {
    game.snapshot()
        .board()
        .iter()
        .flatten()
        .filter(|c| **c != Cell::Empty)
        .count()
}

proptest! {
    /// Non-empty cells always equal history length.
    #[test]
    fn prop_occupied_cells_match_history(moves in prop::collection::vec(coordinate(), 0..120)) {
        let game = play_all(&moves);
        prop_assert_eq!(occupied_cells(&game), game.history().len());
        prop_assert!(OmokInvariants::check_all(&game).is_ok());
    }

    /// Rejected placements never change any state.
    #[test]
    fn prop_rejections_are_no_ops(
        moves in prop::collection::vec(coordinate(), 0..80),
        probe in coordinate(),
    ) {
        let mut game = play_all(&moves);
        let before = game.clone();
        if game.place_stone(probe.0, probe.1).is_err() {
            prop_assert_eq!(game, before);
        }
    }

    /// Placing on an occupied cell is always rejected as occupied (while running).
    #[test]
    fn prop_occupied_cell_rejected(moves in prop::collection::vec(coordinate(), 1..80)) {
        let mut game = play_all(&moves);
        prop_assume!(!game.is_game_over());
        if let Some(last) = game.last_move() {
            let (row, col) = (last.row() as i32, last.col() as i32);
            let before = game.clone();
            prop_assert_eq!(game.place_stone(row, col), Err(MoveError::Occupied { row, col }));
            prop_assert_eq!(game, before);
        }
    }

    /// Without undo, consecutive moves always belong to different players.
    #[test]
    fn prop_players_alternate(moves in prop::collection::vec(coordinate(), 0..120)) {
        let game = play_all(&moves);
        let history = game.history();
        if let Some(first) = history.first() {
            prop_assert_eq!(first.player(), Player::Black);
        }
        for pair in history.windows(2) {
            prop_assert_ne!(pair[0].player(), pair[1].player());
        }
    }

    /// Undo exactly reverses the placement right before it.
    #[test]
    fn prop_undo_is_left_inverse(
        moves in prop::collection::vec(coordinate(), 0..80),
        probe in coordinate(),
    ) {
        let mut game = play_all(&moves);
        let before = game.clone();
        if game.place_stone(probe.0, probe.1).is_ok() {
            let undo = game.undo_move().expect("a move was just placed");
            prop_assert_eq!(undo.current_player, before.current_player());
            prop_assert_eq!(game, before);
        }
    }

    /// Reset from any reachable state yields the initial state.
    #[test]
    fn prop_reset_is_total(
        moves in prop::collection::vec(coordinate(), 0..120),
        undos in 0usize..5,
    ) {
        let mut game = play_all(&moves);
        for _ in 0..undos {
            let _ = game.undo_move();
        }
        game.reset_game();
        prop_assert_eq!(&game, &Game::new());
        game.reset_game();
        prop_assert_eq!(game, Game::new());
    }

    /// Undo always hands the turn back to the undone move's player.
    #[test]
    fn prop_undo_restores_mover(moves in prop::collection::vec(coordinate(), 1..120)) {
        let mut game = play_all(&moves);
        if let Some(last) = game.last_move() {
            let undo = game.undo_move().expect("history is not empty");
            prop_assert_eq!(undo.undone, last);
            prop_assert_eq!(game.current_player(), last.player());
            prop_assert!(!game.is_game_over());
            prop_assert!(OmokInvariants::check_all(&game).is_ok());
        }
    }
}
