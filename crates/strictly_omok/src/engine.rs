//! The omok game engine.
//!
//! [`Game`] is the single source of truth for one game: board, player to
//! move, result, and move history. Callers own it as a plain value and drive
//! it through three validated transitions ([`Game::place_stone`],
//! [`Game::undo_move`], [`Game::reset_game`]); everything else is a read.

use super::action::{Move, MoveError, Placement};
use super::contracts::{Contract, PlaceContract, Undo, UndoContract};
use super::rules;
use super::snapshot::GameSnapshot;
use super::{Board, Cell, GameStatus, Player, Position};
use tracing::{debug, info, instrument};

/// Result of an accepted placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaceOutcome {
    /// Game continues; `next_player` is to move.
    Continue {
        /// Player to move next.
        next_player: Player,
    },
    /// The placed stone completed five (or more) in a row.
    Win {
        /// Player who won.
        winner: Player,
    },
    /// The board filled up without a winner.
    Draw,
}

impl std::fmt::Display for PlaceOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlaceOutcome::Continue { next_player } => write!(f, "{} to move", next_player),
            PlaceOutcome::Win { winner } => write!(f, "{} wins!", winner),
            PlaceOutcome::Draw => write!(f, "Draw!"),
        }
    }
}

/// Result of an accepted undo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UndoOutcome {
    /// The move that was taken back.
    pub undone: Move,
    /// Player to move after the undo (the undone move's player).
    pub current_player: Player,
}

/// Omok game engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) current_player: Player,
    pub(crate) status: GameStatus,
    pub(crate) history: Vec<Move>,
}

impl Game {
    /// Creates a new game: empty board, Black to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::Black,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Rebuilds a game by placing stones at `moves` in order.
    ///
    /// # Errors
    ///
    /// Returns the first rejection, e.g. a move after the game was decided.
    #[instrument]
    pub fn replay(moves: &[(i32, i32)]) -> Result<Self, MoveError> {
        let mut game = Self::new();
        for &(row, col) in moves {
            game.place_stone(row, col)?;
        }
        Ok(game)
    }

    // ─────────────────────────────────────────────────────────────
    //  Transitions
    // ─────────────────────────────────────────────────────────────

    /// Places the current player's stone at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Checked in order, first failure wins, and the game is untouched:
    /// - [`MoveError::GameOver`] if the game is already decided
    /// - [`MoveError::OutOfBounds`] if `(row, col)` is off the board
    /// - [`MoveError::Occupied`] if the cell already holds a stone
    #[instrument(skip(self), fields(player = ?self.current_player))]
    pub fn place_stone(&mut self, row: i32, col: i32) -> Result<PlaceOutcome, MoveError> {
        let pos = PlaceContract::pre(self, &Placement::new(row, col))?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let player = self.current_player;
        self.board.set(pos, Cell::Occupied(player));
        self.history.push(Move::new(pos, player));
        debug!(%pos, ?player, move_number = self.history.len(), "Stone placed");

        let outcome = if rules::is_winning_move(&self.board, pos) {
            self.status = GameStatus::Won(player);
            info!(?player, "Five in a row");
            PlaceOutcome::Win { winner: player }
        } else if rules::is_full(&self.board) {
            self.status = GameStatus::Draw;
            info!("Board full, game drawn");
            PlaceOutcome::Draw
        } else {
            self.current_player = player.opponent();
            PlaceOutcome::Continue {
                next_player: self.current_player,
            }
        };

        #[cfg(debug_assertions)]
        if let Err(e) = PlaceContract::post(&before, self) {
            *self = before;
            return Err(e);
        }

        Ok(outcome)
    }

    /// Takes back the most recent move.
    ///
    /// Clears any result and hands the turn back to the player who made the
    /// undone move.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::NoMoveToUndo`] if no move has been played.
    #[instrument(skip(self), fields(moves = self.history.len()))]
    pub fn undo_move(&mut self) -> Result<UndoOutcome, MoveError> {
        UndoContract::pre(self, &Undo)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let undone = self.history.pop().ok_or(MoveError::NoMoveToUndo)?;
        self.board.set(undone.position(), Cell::Empty);
        self.status = GameStatus::InProgress;
        self.current_player = undone.player();
        debug!(%undone, "Move undone");

        #[cfg(debug_assertions)]
        if let Err(e) = UndoContract::post(&before, self) {
            *self = before;
            return Err(e);
        }

        Ok(UndoOutcome {
            undone,
            current_player: self.current_player,
        })
    }

    /// Returns the game to its initial state. Always succeeds.
    #[instrument(skip(self), fields(moves = self.history.len()))]
    pub fn reset_game(&mut self) {
        *self = Self::new();
        info!("Game reset");
    }

    // ─────────────────────────────────────────────────────────────
    //  Queries
    // ─────────────────────────────────────────────────────────────

    /// Returns the player to move.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Display name of the player to move.
    pub fn current_player_name(&self) -> &'static str {
        self.current_player.name()
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns true once the game has been won or drawn.
    pub fn is_game_over(&self) -> bool {
        self.status.is_over()
    }

    /// Returns the winner; `None` both while running and after a draw.
    pub fn winner(&self) -> Option<Player> {
        self.status.winner()
    }

    /// Returns true when moves have been played and the game is still running.
    pub fn has_progress(&self) -> bool {
        !self.history.is_empty() && !self.is_game_over()
    }

    /// Returns the cell at `(row, col)`, or `None` if it is off the board.
    pub fn cell(&self, row: i32, col: i32) -> Option<Cell> {
        Position::new(row, col).map(|pos| self.board.get(pos))
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the move history, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns an owned copy of the move history.
    pub fn move_history(&self) -> Vec<Move> {
        self.history.clone()
    }

    /// Returns the most recent move.
    pub fn last_move(&self) -> Option<Move> {
        self.history.last().copied()
    }

    /// Captures the full state for rendering or export.
    #[instrument(skip(self))]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::new(
            self.board.to_grid(),
            self.current_player,
            self.is_game_over(),
            self.winner(),
            self.history.clone(),
        )
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
