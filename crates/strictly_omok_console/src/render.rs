//! Plain-text rendering of game snapshots.

use crate::config::OmokConfig;
use strictly_omok::{Cell, GameSnapshot, Move, Player};

const BLACK_STONE: char = '●';
const WHITE_STONE: char = '○';
const EMPTY_POINT: char = '·';

/// Board coordinate in display notation: column letter then 1-based row, e.g. `H8`.
pub fn notation(row: usize, col: usize) -> String {
    let letter = (b'A' + col as u8) as char;
    format!("{}{}", letter, row + 1)
}

fn stone(cell: Cell) -> char {
    match cell {
        Cell::Empty => EMPTY_POINT,
        Cell::Occupied(Player::Black) => BLACK_STONE,
        Cell::Occupied(Player::White) => WHITE_STONE,
    }
}

/// Character drawn before the point at `col` (or after the last point).
fn separator(last: Option<(usize, usize)>, row: usize, col: usize) -> char {
    match last {
        Some((r, c)) if r == row && c == col => '[',
        Some((r, c)) if r == row && c + 1 == col => ']',
        _ => ' ',
    }
}

/// Draws the board with column letters and row numbers.
///
/// The most recent stone is wrapped in brackets.
pub fn render_board(snapshot: &GameSnapshot) -> String {
    let last = snapshot.last_move().map(|m| (m.row(), m.col()));
    let size = snapshot.board().len();

    let mut out = String::from("    ");
    for col in 0..size {
        out.push((b'A' + col as u8) as char);
        out.push(' ');
    }
    out.push('\n');

    for (row, cells) in snapshot.board().iter().enumerate() {
        out.push_str(&format!("{:>2} ", row + 1));
        for (col, cell) in cells.iter().enumerate() {
            out.push(separator(last, row, col));
            out.push(stone(*cell));
        }
        out.push(separator(last, row, cells.len()));
        out.push('\n');
    }
    out
}

/// One-line status: whose turn it is, or how the game ended.
pub fn status_line(snapshot: &GameSnapshot, config: &OmokConfig) -> String {
    match (*snapshot.game_over(), *snapshot.winner()) {
        (true, Some(winner)) => format!("{} wins!", config.player_name(winner)),
        (true, None) => "Draw!".to_string(),
        (false, _) => format!(
            "{} to move ({} moves played)",
            config.player_name(*snapshot.current_player()),
            snapshot.move_history().len()
        ),
    }
}

/// Numbered move list, e.g. `1. Black - H8`.
pub fn history_lines(history: &[Move], config: &OmokConfig) -> Vec<String> {
    history
        .iter()
        .enumerate()
        .map(|(i, m)| {
            format!(
                "{}. {} - {}",
                i + 1,
                config.player_name(m.player()),
                notation(m.row(), m.col())
            )
        })
        .collect()
}
