//! Win detection for omok.
//!
//! A stone wins when it completes a run of at least [`WIN_LENGTH`] stones
//! of its colour along any of the four axes. Overlines count.

use crate::{Board, Cell, Position};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Number of stones in a row needed to win.
pub const WIN_LENGTH: usize = 5;

/// The four undirected axes a line can run along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum Direction {
    /// Left to right.
    Horizontal,
    /// Top to bottom.
    Vertical,
    /// Top-left to bottom-right (↘).
    Diagonal,
    /// Bottom-left to top-right (↗).
    AntiDiagonal,
}

impl Direction {
    /// Step `(d_row, d_col)` for walking forward along the axis.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::Diagonal => (1, 1),
            Direction::AntiDiagonal => (-1, 1),
        }
    }
}

/// Counts the contiguous run through `pos` along `direction`.
///
/// The stone at `pos` counts as one; the walk extends both ways until it
/// leaves the board or meets a cell that does not match. An empty `pos`
/// has length 0.
pub fn line_length(board: &Board, pos: Position, direction: Direction) -> usize {
    let cell = board.get(pos);
    if cell == Cell::Empty {
        return 0;
    }

    let (d_row, d_col) = direction.delta();
    let run = |d_row: i32, d_col: i32| {
        std::iter::successors(pos.offset(d_row, d_col), |p| p.offset(d_row, d_col))
            .take_while(|p| board.get(*p) == cell)
            .count()
    };

    1 + run(d_row, d_col) + run(-d_row, -d_col)
}

/// Checks whether the stone at `pos` is part of a winning line.
#[instrument(skip_all, fields(position = %pos))]
pub fn is_winning_move(board: &Board, pos: Position) -> bool {
    Direction::iter().any(|direction| line_length(board, pos, direction) >= WIN_LENGTH)
}
