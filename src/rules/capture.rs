//! Capture-line scanning for Reversi
//!
//! A capture line is a straight run of opponent discs starting in the cell
//! adjacent to the placed disc and closed off by one of the mover's own
//! discs, with no gaps. A single move may capture along several directions
//! at once; flipping applies to every valid line.

use crate::board::{Board, Disc, Pos};

/// Direction vectors for line scanning (8 compass directions)
const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1), // NW
    (-1, 0),  // N
    (-1, 1),  // NE
    (0, -1),  // W
    (0, 1),   // E
    (1, -1),  // SW
    (1, 0),   // S
    (1, 1),   // SE
];

/// Check whether placing `disc` at `pos` captures along `(dr, dc)`.
///
/// The line is valid iff the immediately adjacent cell in the direction
/// holds an opponent disc and the run of opponent discs ends at one of the
/// mover's own discs. An empty cell or the board edge before that closing
/// disc invalidates the line.
pub fn would_flip_in_direction(board: &Board, pos: Pos, disc: Disc, dr: i32, dc: i32) -> bool {
    let opponent = disc.opponent();
    let mut r = pos.row as i32 + dr;
    let mut c = pos.col as i32 + dc;
    let mut found_opponent = false;

    while Pos::is_valid(r, c) {
        let cell = board.get(Pos::new(r as u8, c as u8));
        if cell == opponent {
            found_opponent = true;
            r += dr;
            c += dc;
        } else if cell == disc {
            return found_opponent;
        } else {
            // Empty cell breaks the line.
            return false;
        }
    }

    // Ran off the board without a closing disc.
    false
}

/// Check if a move would capture in any direction.
#[inline]
pub fn has_capture(board: &Board, pos: Pos, disc: Disc) -> bool {
    DIRECTIONS
        .iter()
        .any(|&(dr, dc)| would_flip_in_direction(board, pos, disc, dr, dc))
}

/// Find the positions captured if `disc` is placed at `pos`.
///
/// Scans all 8 directions and collects the full run of opponent discs along
/// every valid capture line. Empty when the move captures nothing (and is
/// therefore illegal).
pub fn captured_positions(board: &Board, pos: Pos, disc: Disc) -> Vec<Pos> {
    let mut captured = Vec::new();
    let opponent = disc.opponent();

    for &(dr, dc) in &DIRECTIONS {
        if !would_flip_in_direction(board, pos, disc, dr, dc) {
            continue;
        }

        let mut r = pos.row as i32 + dr;
        let mut c = pos.col as i32 + dc;
        while Pos::is_valid(r, c) {
            let p = Pos::new(r as u8, c as u8);
            if board.get(p) != opponent {
                break;
            }
            captured.push(p);
            r += dr;
            c += dc;
        }
    }

    captured
}

/// Flip every captured disc for a move already known to be legal and return
/// the flipped positions. Does not place the mover's own disc.
pub fn execute_captures(board: &mut Board, pos: Pos, disc: Disc) -> Vec<Pos> {
    let captured = captured_positions(board, pos, disc);

    for &cap_pos in &captured {
        board.place(cap_pos, disc);
    }

    captured
}
