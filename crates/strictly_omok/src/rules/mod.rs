//! Game rules for omok.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart
//! from the engine so contracts and tests can evaluate them directly.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{Direction, WIN_LENGTH, is_winning_move, line_length};
