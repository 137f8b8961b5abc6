//! Contract-based validation for omok.
//!
//! Contracts define correctness through preconditions and postconditions,
//! in the Hoare style `{P} action {Q}`. Preconditions always run and decide
//! whether an action is rejected. Postconditions re-check the invariants and
//! run in debug builds.

use super::action::{MoveError, Placement};
use super::invariants::{InvariantSet, OmokInvariants};
use super::{Game, Position};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// What a satisfied precondition hands to the transition.
    type Checked;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<Self::Checked, MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Placement Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the game must still be running.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects with [`MoveError::GameOver`] once a result is decided.
    #[instrument(skip(game))]
    pub fn check(game: &Game) -> Result<(), MoveError> {
        if game.is_game_over() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the coordinates must lie on the board.
pub struct InBounds;

impl InBounds {
    /// Converts the placement into a [`Position`] or rejects it.
    #[instrument]
    pub fn check(placement: &Placement) -> Result<Position, MoveError> {
        Position::new(placement.row, placement.col).ok_or(MoveError::OutOfBounds {
            row: placement.row,
            col: placement.col,
        })
    }
}

/// Precondition: the target cell must be empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects with [`MoveError::Occupied`] if a stone is already there.
    #[instrument(skip(game))]
    pub fn check(game: &Game, pos: Position) -> Result<(), MoveError> {
        if game.board().is_empty(pos) {
            Ok(())
        } else {
            Err(MoveError::Occupied {
                row: pos.row() as i32,
                col: pos.col() as i32,
            })
        }
    }
}

/// Composite precondition, checked in order: game running, on board, cell empty.
pub struct LegalPlacement;

impl LegalPlacement {
    /// Validates all preconditions for a placement.
    #[instrument(skip(game))]
    pub fn check(game: &Game, placement: &Placement) -> Result<Position, MoveError> {
        GameNotOver::check(game)?;
        let pos = InBounds::check(placement)?;
        CellIsEmpty::check(game, pos)?;
        Ok(pos)
    }
}

// ─────────────────────────────────────────────────────────────
//  Contracts (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for placing a stone.
///
/// Postconditions:
/// - History grew by exactly one move
/// - All omok invariants hold
pub struct PlaceContract;

impl Contract<Game, Placement> for PlaceContract {
    type Checked = Position;

    fn pre(game: &Game, placement: &Placement) -> Result<Position, MoveError> {
        LegalPlacement::check(game, placement)
    }

    fn post(before: &Game, after: &Game) -> Result<(), MoveError> {
        if after.history().len() != before.history().len() + 1 {
            return Err(violation("placement must add exactly one move"));
        }
        check_invariants(after)
    }
}

/// The undo action carries no data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Undo;

/// Contract for undoing the last move.
///
/// Postconditions:
/// - History shrank by exactly one move
/// - The game is running again
/// - All omok invariants hold
pub struct UndoContract;

impl Contract<Game, Undo> for UndoContract {
    type Checked = ();

    fn pre(game: &Game, _action: &Undo) -> Result<(), MoveError> {
        if game.history().is_empty() {
            Err(MoveError::NoMoveToUndo)
        } else {
            Ok(())
        }
    }

    fn post(before: &Game, after: &Game) -> Result<(), MoveError> {
        if after.history().len() + 1 != before.history().len() {
            return Err(violation("undo must remove exactly one move"));
        }
        if after.is_game_over() {
            return Err(violation("undo must reopen the game"));
        }
        check_invariants(after)
    }
}

fn check_invariants(game: &Game) -> Result<(), MoveError> {
    OmokInvariants::check_all(game).map_err(|violations| {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        violation(&descriptions)
    })
}

fn violation(description: &str) -> MoveError {
    warn!(description, "Postcondition failed");
    MoveError::InvariantViolation(format!("Postcondition failed: {}", description))
}
