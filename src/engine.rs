//! Engine facade over the fixed-depth search
//!
//! Wraps the search behind the configuration surface the caller owns: a
//! search depth, fixed per game. The engine itself is stateless — every
//! request is answered from the board it is handed, and the boards it
//! explores are disposable copies, never the caller's authoritative state.

use std::time::Instant;

use tracing::debug;

use crate::board::{Board, Disc, Pos};
use crate::search::{best_move_with_stats, SearchResult};

/// Reference search depth in plies
pub const DEFAULT_DEPTH: u8 = 3;

/// Result of a move request with search statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Evaluation of the position after the best move
    pub score: i32,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

/// Automated opponent with a fixed search depth.
///
/// # Example
///
/// ```
/// use reversi::{Board, Disc, Engine};
///
/// let engine = Engine::new(3);
/// let board = Board::standard();
///
/// if let Some(pos) = engine.get_move(&board, Disc::Black) {
///     println!("Engine plays {pos}");
/// }
/// ```
pub struct Engine {
    /// Search depth in plies
    depth: u8,
}

impl Engine {
    /// Create an engine searching `depth` plies ahead.
    #[must_use]
    pub fn new(depth: u8) -> Self {
        Self { depth }
    }

    /// Get the configured search depth.
    #[must_use]
    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Change the search depth.
    pub fn set_depth(&mut self, depth: u8) {
        self.depth = depth;
    }

    /// Get the best move for `to_move`, or `None` when no legal move exists
    /// (the caller's cue that the side is stuck).
    #[must_use]
    pub fn get_move(&self, board: &Board, to_move: Disc) -> Option<Pos> {
        self.get_move_with_stats(board, to_move).best_move
    }

    /// Get the best move along with timing and node statistics.
    #[must_use]
    pub fn get_move_with_stats(&self, board: &Board, to_move: Disc) -> MoveResult {
        let start = Instant::now();

        let SearchResult {
            best_move,
            score,
            nodes,
            ..
        } = best_move_with_stats(board, self.depth, to_move);

        let time_ms = start.elapsed().as_millis() as u64;
        debug!(?best_move, score, nodes, time_ms, depth = self.depth, "search complete");

        MoveResult {
            best_move,
            score,
            time_ms,
            nodes,
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(DEFAULT_DEPTH)
    }
}
