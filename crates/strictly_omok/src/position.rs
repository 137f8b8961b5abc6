//! Bounds-checked board coordinates.

use super::types::BOARD_SIZE;

/// A position on the board, always inside `[0, BOARD_SIZE)` on both axes.
///
/// The only way to obtain a `Position` from caller input is [`Position::new`],
/// so every `Position` indexes the board safely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// Creates a position from signed coordinates, or `None` if off the board.
    pub fn new(row: i32, col: i32) -> Option<Self> {
        if Self::in_bounds(row, col) {
            Some(Self {
                row: row as usize,
                col: col as usize,
            })
        } else {
            None
        }
    }

    /// Returns true when `(row, col)` lies on the board.
    pub fn in_bounds(row: i32, col: i32) -> bool {
        let size = BOARD_SIZE as i32;
        (0..size).contains(&row) && (0..size).contains(&col)
    }

    /// Row index (0-based, top to bottom).
    pub fn row(self) -> usize {
        self.row
    }

    /// Column index (0-based, left to right).
    pub fn col(self) -> usize {
        self.col
    }

    /// Moves by `(d_row, d_col)`; `None` if the result leaves the board.
    pub fn offset(self, d_row: i32, d_col: i32) -> Option<Self> {
        Self::new(self.row as i32 + d_row, self.col as i32 + d_col)
    }

    /// Iterates over every position in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Position { row, col }))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
