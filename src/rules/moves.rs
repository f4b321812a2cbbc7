//! Move legality and application
//!
//! Legality is relative to a board and a colour: a coordinate alone is never
//! "legal". Enumeration is row-major (row 0..7, column 0..7 within each row)
//! and that order is load-bearing: the search breaks score ties by keeping
//! the first move it encounters.

use crate::board::{Board, Disc, Pos, BOARD_SIZE};
use crate::error::MoveError;

use super::capture::{captured_positions, has_capture};

/// Check whether `disc` may legally play at `pos`.
///
/// Legal iff the coordinate is on the board, the target cell is empty and at
/// least one direction forms a capture line. Out-of-range coordinates are
/// rejected here, before any cell access. `Disc::Empty` never has a move.
#[must_use]
pub fn is_legal_move(board: &Board, pos: Pos, disc: Disc) -> bool {
    if disc == Disc::Empty {
        return false;
    }
    if !Pos::is_valid(pos.row as i32, pos.col as i32) {
        return false;
    }
    if !board.is_empty(pos) {
        return false;
    }
    has_capture(board, pos, disc)
}

/// All legal moves for `disc`, in row-major order.
#[must_use]
pub fn legal_moves(board: &Board, disc: Disc) -> Vec<Pos> {
    let mut moves = Vec::new();

    for row in 0..BOARD_SIZE as u8 {
        for col in 0..BOARD_SIZE as u8 {
            let pos = Pos::new(row, col);
            if is_legal_move(board, pos, disc) {
                moves.push(pos);
            }
        }
    }

    moves
}

/// Check whether `disc` has at least one legal move (early exit).
#[must_use]
pub fn has_any_move(board: &Board, disc: Disc) -> bool {
    for row in 0..BOARD_SIZE as u8 {
        for col in 0..BOARD_SIZE as u8 {
            if is_legal_move(board, Pos::new(row, col), disc) {
                return true;
            }
        }
    }
    false
}

/// Apply a move for `disc` at `pos`, flipping along every capture line.
///
/// The move is validated first and the board is left untouched on error, so
/// an illegal request can never corrupt the position. Returns the flipped
/// positions on success.
///
/// # Errors
///
/// [`MoveError::OutOfBounds`] when the coordinate leaves the grid (checked
/// before any cell access), [`MoveError::Illegal`] when the cell is occupied
/// or no direction captures.
pub fn apply_move(board: &mut Board, pos: Pos, disc: Disc) -> Result<Vec<Pos>, MoveError> {
    if !Pos::is_valid(pos.row as i32, pos.col as i32) {
        return Err(MoveError::OutOfBounds {
            row: pos.row,
            col: pos.col,
        });
    }

    let captured = captured_positions(board, pos, disc);
    if disc == Disc::Empty || !board.is_empty(pos) || captured.is_empty() {
        return Err(MoveError::Illegal { pos });
    }

    board.place(pos, disc);
    for &cap_pos in &captured {
        board.place(cap_pos, disc);
    }
    Ok(captured)
}
