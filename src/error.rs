//! Error types for the Reversi engine
//!
//! The taxonomy is small and purely precondition-based: callers are expected
//! to validate with [`crate::rules::is_legal_move`] before applying a move,
//! and every failure here is a local precondition violation surfaced loudly
//! instead of corrupting the board. Having no legal moves is not an error;
//! it is the normal terminal condition and is reported as an empty move list.

use crate::board::Pos;

/// Errors raised when a move request violates a precondition
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// Row or column outside [0,8), rejected before any cell access
    #[error("coordinate ({row}, {col}) is outside the board")]
    OutOfBounds { row: u8, col: u8 },

    /// Target cell occupied, no capture line, or no disc colour given
    #[error("illegal move at {pos}")]
    Illegal { pos: Pos },

    /// The game has already reached its terminal state
    #[error("the game is over")]
    GameOver,
}

/// Error parsing a cell coordinate from text notation
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid cell notation (expected column letter and row digit, e.g. `d3`)")]
pub struct ParseMoveError;
