//! Scenario tests for the omok engine.

use strictly_omok::{BOARD_SIZE, Cell, Game, GameStatus, MoveError, PlaceOutcome, Player, TOTAL_CELLS};

/// Plays `moves` in order, asserting each one is accepted.
fn play(game: &mut Game, moves: &[(i32, i32)]) -> Vec<PlaceOutcome> {
    moves
        .iter()
        .map(|&(row, col)| game.place_stone(row, col).expect("legal move"))
        .collect()
}

/// A full-board colouring with no five in a row: Black where `row + col / 2` is even.
fn draw_pattern() -> (Vec<(i32, i32)>, Vec<(i32, i32)>) {
    let mut black = Vec::new();
    let mut white = Vec::new();
    for row in 0..BOARD_SIZE as i32 {
        for col in 0..BOARD_SIZE as i32 {
            if (row + col / 2) % 2 == 0 {
                black.push((row, col));
            } else {
                white.push((row, col));
            }
        }
    }
    (black, white)
}

#[test]
fn test_horizontal_five_wins_on_fifth_stone() {
    let mut game = Game::new();
    let black = [(7, 3), (7, 4), (7, 5), (7, 6), (7, 7)];
    let white = [(0, 0), (0, 1), (0, 2), (0, 3)];

    for i in 0..4 {
        assert_eq!(
            game.place_stone(black[i].0, black[i].1),
            Ok(PlaceOutcome::Continue { next_player: Player::White })
        );
        assert_eq!(
            game.place_stone(white[i].0, white[i].1),
            Ok(PlaceOutcome::Continue { next_player: Player::Black })
        );
        assert!(!game.is_game_over());
    }

    assert_eq!(game.place_stone(7, 7), Ok(PlaceOutcome::Win { winner: Player::Black }));
    assert!(game.is_game_over());
    assert_eq!(game.winner(), Some(Player::Black));
    assert_eq!(game.status(), GameStatus::Won(Player::Black));
}

#[test]
fn test_white_can_win() {
    let mut game = Game::new();
    play(&mut game, &[(0, 0), (5, 5), (0, 2), (6, 6), (0, 4), (7, 7), (0, 6), (8, 8), (0, 8)]);
    assert_eq!(game.place_stone(9, 9), Ok(PlaceOutcome::Win { winner: Player::White }));
}

#[test]
fn test_win_on_each_axis() {
    let lines: [[(i32, i32); 5]; 4] = [
        [(3, 0), (3, 1), (3, 2), (3, 3), (3, 4)],
        [(2, 10), (3, 10), (4, 10), (5, 10), (6, 10)],
        [(8, 8), (9, 9), (10, 10), (11, 11), (12, 12)],
        [(14, 0), (13, 1), (12, 2), (11, 3), (10, 4)],
    ];
    let filler = [(0, 14), (1, 14), (2, 14), (4, 14)];

    for line in lines {
        let mut game = Game::new();
        for i in 0..4 {
            play(&mut game, &[line[i], filler[i]]);
        }
        assert_eq!(
            game.place_stone(line[4].0, line[4].1),
            Ok(PlaceOutcome::Win { winner: Player::Black }),
            "line {:?} should win",
            line
        );
    }
}

#[test]
fn test_four_in_a_row_does_not_win() {
    let mut game = Game::new();
    let outcomes = play(&mut game, &[(7, 3), (0, 0), (7, 4), (0, 1), (7, 5), (0, 2), (7, 6)]);
    assert!(outcomes.iter().all(|o| matches!(o, PlaceOutcome::Continue { .. })));
    assert!(!game.is_game_over());
}

#[test]
fn test_overline_wins() {
    let mut game = Game::new();
    // Black builds two pairs around a gap, then fills it for six.
    play(
        &mut game,
        &[(7, 1), (0, 0), (7, 2), (0, 1), (7, 3), (0, 2), (7, 5), (0, 4), (7, 6), (0, 6)],
    );
    assert!(!game.is_game_over());
    assert_eq!(game.place_stone(7, 4), Ok(PlaceOutcome::Win { winner: Player::Black }));
}

#[test]
fn test_gap_filler_completes_five() {
    let mut game = Game::new();
    play(&mut game, &[(4, 4), (0, 0), (5, 5), (0, 1), (7, 7), (0, 2), (8, 8), (0, 3)]);
    assert_eq!(game.place_stone(6, 6), Ok(PlaceOutcome::Win { winner: Player::Black }));
}

#[test]
fn test_placement_after_win_rejected() {
    let mut game = Game::replay(&[(7, 3), (0, 0), (7, 4), (0, 1), (7, 5), (0, 2), (7, 6), (0, 3), (7, 7)])
        .expect("legal moves");
    let before = game.clone();

    assert_eq!(game.place_stone(10, 10), Err(MoveError::GameOver));
    assert_eq!(game.place_stone(-1, 0), Err(MoveError::GameOver));
    assert_eq!(game, before);
}

#[test]
fn test_out_of_bounds_rejected_without_change() {
    let mut game = Game::replay(&[(7, 7)]).expect("legal move");
    let before = game.clone();

    assert_eq!(game.place_stone(-1, 0), Err(MoveError::OutOfBounds { row: -1, col: 0 }));
    assert_eq!(game.place_stone(15, 0), Err(MoveError::OutOfBounds { row: 15, col: 0 }));
    assert_eq!(game.place_stone(0, 15), Err(MoveError::OutOfBounds { row: 0, col: 15 }));
    assert_eq!(game, before);
}

#[test]
fn test_undo_on_fresh_engine_fails() {
    let mut game = Game::new();
    assert_eq!(game.undo_move(), Err(MoveError::NoMoveToUndo));

    play(&mut game, &[(3, 3)]);
    game.reset_game();
    assert_eq!(game.undo_move(), Err(MoveError::NoMoveToUndo));
    assert_eq!(game, Game::new());
}

#[test]
fn test_undo_is_left_inverse() {
    let mut game = Game::replay(&[(7, 7), (7, 8), (6, 6)]).expect("legal moves");
    let before = game.clone();

    play(&mut game, &[(5, 5)]);
    let undo = game.undo_move().expect("one move to undo");

    assert_eq!(undo.undone.player(), Player::White);
    assert_eq!(undo.current_player, Player::White);
    assert_eq!(game, before);
}

#[test]
fn test_full_board_is_draw() {
    let (black, white) = draw_pattern();
    assert_eq!(black.len(), white.len() + 1);

    let mut game = Game::new();
    for (i, &(row, col)) in black.iter().enumerate() {
        let outcome = game.place_stone(row, col).expect("legal black move");
        if let Some(&(w_row, w_col)) = white.get(i) {
            assert_eq!(outcome, PlaceOutcome::Continue { next_player: Player::White });
            let outcome = game.place_stone(w_row, w_col).expect("legal white move");
            assert_eq!(outcome, PlaceOutcome::Continue { next_player: Player::Black });
        } else {
            assert_eq!(outcome, PlaceOutcome::Draw);
        }
    }

    assert!(game.is_game_over());
    assert_eq!(game.winner(), None);
    assert_eq!(game.status(), GameStatus::Draw);
    assert_eq!(game.history().len(), TOTAL_CELLS);
    assert!(game.snapshot().is_draw());
    assert_eq!(game.place_stone(0, 0), Err(MoveError::GameOver));

    // Undo reopens the last cell for the same player.
    let undo = game.undo_move().expect("history is not empty");
    assert_eq!(undo.current_player, Player::Black);
    let (row, col) = (undo.undone.row() as i32, undo.undone.col() as i32);
    assert_eq!(game.cell(row, col), Some(Cell::Empty));
    assert_eq!(game.place_stone(row, col), Ok(PlaceOutcome::Draw));
}

#[test]
fn test_move_history_is_a_copy() {
    let mut game = Game::replay(&[(1, 2), (3, 4)]).expect("legal moves");
    let mut copy = game.move_history();
    copy.clear();

    assert_eq!(game.history().len(), 2);
    game.reset_game();
    assert!(game.history().is_empty());
}

#[test]
fn test_replay_stops_at_first_rejection() {
    assert_eq!(
        Game::replay(&[(7, 7), (7, 7)]),
        Err(MoveError::Occupied { row: 7, col: 7 })
    );
}
