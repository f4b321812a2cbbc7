//! Whole-game state machine
//!
//! One explicit, caller-owned object holds the authoritative board, the side
//! to move and the terminal outcome — there is no ambient global state. The
//! search never touches this board: engines are handed `&Board` and work on
//! their own copies.
//!
//! Turn flow after every applied move: the turn goes to the opponent; if the
//! opponent is stuck but the mover can still play, the turn routes straight
//! back to the mover (a forced pass — no player-selectable pass action
//! exists); if neither side can move, the game is over and the outcome is
//! derived from the material score.

use tracing::info;

use crate::board::{Board, Disc, Pos};
use crate::error::MoveError;
use crate::rules::{apply_move, has_any_move, legal_moves, winner};

/// Final outcome of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Winner(Disc),
    Draw,
}

/// Whole-game state: authoritative board, side to move, terminal outcome.
pub struct Game {
    board: Board,
    to_move: Disc,
    outcome: Option<Outcome>,
    move_history: Vec<(Pos, Disc)>,
    last_move: Option<Pos>,
}

impl Game {
    /// Start a new game from the standard opening, Black to move.
    #[must_use]
    pub fn new() -> Self {
        Self::with_position(Board::standard(), Disc::Black)
    }

    /// Start from an arbitrary position.
    ///
    /// The first turn is resolved immediately, so a stuck side is rerouted
    /// (or the game closed) before any move is requested.
    #[must_use]
    pub fn with_position(board: Board, to_move: Disc) -> Self {
        let mut game = Self {
            board,
            to_move,
            outcome: None,
            move_history: Vec::new(),
            last_move: None,
        };
        game.resolve_turn();
        game
    }

    /// The authoritative board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side whose turn it is. Meaningless once the game is over.
    #[must_use]
    pub fn to_move(&self) -> Disc {
        self.to_move
    }

    /// Terminal outcome, `None` while the game is running.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    #[must_use]
    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    #[must_use]
    pub fn move_history(&self) -> &[(Pos, Disc)] {
        &self.move_history
    }

    /// Legal moves for the side to move. Empty iff the game is over.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Pos> {
        if self.is_over() {
            return Vec::new();
        }
        legal_moves(&self.board, self.to_move)
    }

    /// Material score of the current position (Black minus White).
    #[must_use]
    pub fn score(&self) -> i32 {
        self.board.score()
    }

    /// Apply a move for the side to move.
    ///
    /// The board is left untouched on error, so callers can re-prompt
    /// safely. On success the turn is resolved as described in the module
    /// docs.
    ///
    /// # Errors
    ///
    /// [`MoveError::GameOver`] once the game has ended, otherwise whatever
    /// [`apply_move`] rejects ([`MoveError::OutOfBounds`],
    /// [`MoveError::Illegal`]).
    pub fn try_move(&mut self, pos: Pos) -> Result<(), MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }

        let mover = self.to_move;
        apply_move(&mut self.board, pos, mover)?;

        self.move_history.push((pos, mover));
        self.last_move = Some(pos);
        self.to_move = mover.opponent();
        self.resolve_turn();
        Ok(())
    }

    /// Route the turn to a side that can actually move, or close the game.
    fn resolve_turn(&mut self) {
        if self.outcome.is_some() || has_any_move(&self.board, self.to_move) {
            return;
        }

        let opponent = self.to_move.opponent();
        if has_any_move(&self.board, opponent) {
            // Forced pass for the stuck side.
            self.to_move = opponent;
            return;
        }

        let outcome = match winner(&self.board) {
            Some(disc) => Outcome::Winner(disc),
            None => Outcome::Draw,
        };
        info!(score = self.board.score(), ?outcome, "game over");
        self.outcome = Some(outcome);
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
