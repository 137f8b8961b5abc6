//! Strictly Omok - pure five-in-a-row game logic
//!
//! A two-player game on a 15x15 board: players alternate placing stones and
//! the first to complete five or more in a row (horizontally, vertically, or
//! diagonally) wins. A full board with no winner is a draw.
//!
//! # Architecture
//!
//! - **Engine**: [`Game`] owns board, turn, result and history
//! - **Rules**: pure win/draw evaluation over a [`Board`]
//! - **Contracts**: ordered preconditions for every transition, plus
//!   invariant postconditions in debug builds
//! - **Snapshot**: [`GameSnapshot`], the serializable view handed to
//!   renderers and exporters
//!
//! # Example
//!
//! ```
//! use strictly_omok::{Game, MoveError, PlaceOutcome, Player};
//!
//! let mut game = Game::new();
//! assert_eq!(
//!     game.place_stone(7, 7),
//!     Ok(PlaceOutcome::Continue { next_player: Player::White })
//! );
//! assert_eq!(game.place_stone(7, 7), Err(MoveError::Occupied { row: 7, col: 7 }));
//!
//! let undo = game.undo_move().unwrap();
//! assert_eq!(undo.current_player, Player::Black);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
mod position;
mod snapshot;
mod types;

pub mod contracts;
pub mod invariants;
pub mod rules;

pub use action::{Move, MoveError, Placement};
pub use engine::{Game, PlaceOutcome, UndoOutcome};
pub use position::Position;
pub use snapshot::GameSnapshot;
pub use types::{BOARD_SIZE, Board, Cell, GameStatus, InvalidCellCode, Player, TOTAL_CELLS};
