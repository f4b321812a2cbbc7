//! Fixed-depth minimax with alpha-beta pruning
//!
//! Black plies maximize and White plies minimize the absolute material
//! score (Black minus White); the side to move alternates with each ply.
//! Children are visited in row-major order and only a strict improvement
//! replaces the current best, so ties keep the first move encountered and
//! the result is fully deterministic.
//!
//! Alpha-beta is a pure optimization here: every public entry point opens a
//! full window, under which the pruned search returns exactly the values of
//! the unpruned one (cross-checked by a test against a pruning-free
//! reference).

use crate::board::{Board, Disc, Pos};
use crate::rules::{execute_captures, legal_moves};

/// Result of a best-move search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Evaluation of the position after the best move
    pub score: i32,
    /// Search depth requested
    pub depth: u8,
    /// Total nodes visited
    pub nodes: u64,
}

/// Evaluate `board` to `depth` plies with `to_move` playing first.
///
/// At depth 0 this is the static material score — no quiescence extension.
/// A ply whose side to move has no legal move is treated as a leaf and
/// evaluated statically: the game has no pass move, so a stuck side ends
/// the game on the spot and the material score is the node's true value.
#[must_use]
pub fn evaluate(board: &Board, depth: u8, to_move: Disc) -> i32 {
    let mut nodes = 0u64;
    minimax(board, depth, to_move, i32::MIN, i32::MAX, &mut nodes)
}

/// Find the best move for `to_move`, or `None` when no legal move exists.
///
/// Each legal move is applied to a private copy of the board and scored
/// `depth - 1` plies deeper with the opponent to move; Black keeps the
/// strictly greatest score, White the strictly least.
#[must_use]
pub fn best_move(board: &Board, depth: u8, to_move: Disc) -> Option<Pos> {
    best_move_with_stats(board, depth, to_move).best_move
}

/// Like [`best_move`], with node statistics for diagnostics.
#[must_use]
pub fn best_move_with_stats(board: &Board, depth: u8, to_move: Disc) -> SearchResult {
    let mut nodes = 0u64;
    let mut best: Option<(Pos, i32)> = None;
    let opponent = to_move.opponent();
    let child_depth = depth.saturating_sub(1);

    for pos in legal_moves(board, to_move) {
        let child = play(board, pos, to_move);
        // Full window per child: tied children then compare on exact values,
        // which keeps the first-in-row-major-order tie-break intact.
        let value = minimax(&child, child_depth, opponent, i32::MIN, i32::MAX, &mut nodes);

        let improves = match best {
            None => true,
            Some((_, best_value)) => {
                if to_move == Disc::White {
                    value < best_value
                } else {
                    value > best_value
                }
            }
        };
        if improves {
            best = Some((pos, value));
        }
    }

    SearchResult {
        best_move: best.map(|(pos, _)| pos),
        score: best.map_or(0, |(_, value)| value),
        depth,
        nodes,
    }
}

/// Board after `disc` plays `pos`. The move must be legal.
fn play(board: &Board, pos: Pos, disc: Disc) -> Board {
    let mut child = *board;
    child.place(pos, disc);
    execute_captures(&mut child, pos, disc);
    child
}

fn minimax(
    board: &Board,
    depth: u8,
    to_move: Disc,
    mut alpha: i32,
    mut beta: i32,
    nodes: &mut u64,
) -> i32 {
    *nodes += 1;

    if depth == 0 {
        return board.score();
    }

    let moves = legal_moves(board, to_move);
    if moves.is_empty() {
        // Stuck side: terminal from this node's point of view.
        return board.score();
    }

    let opponent = to_move.opponent();
    let maximizing = to_move == Disc::Black;
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for pos in moves {
        let child = play(board, pos, to_move);
        let value = minimax(&child, depth - 1, opponent, alpha, beta, nodes);

        if maximizing {
            best = best.max(value);
            alpha = alpha.max(best);
        } else {
            best = best.min(value);
            beta = beta.min(best);
        }
        if beta <= alpha {
            break;
        }
    }

    best
}
