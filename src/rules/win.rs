//! Terminal detection and winner derivation
//!
//! Reversi has no mid-game win: the outcome is read off the material score
//! once neither colour has a legal move left.

use crate::board::{Board, Disc};

use super::moves::has_any_move;

/// Check whether the game has ended: neither colour has a legal move.
#[must_use]
pub fn is_game_over(board: &Board) -> bool {
    !has_any_move(board, Disc::Black) && !has_any_move(board, Disc::White)
}

/// Winner by material score: positive is Black, negative is White, zero is
/// a draw (`None`). Callers decide when the board is terminal.
#[must_use]
pub fn winner(board: &Board) -> Option<Disc> {
    match board.score() {
        score if score > 0 => Some(Disc::Black),
        score if score < 0 => Some(Disc::White),
        _ => None,
    }
}
