//! Search module for the Reversi engine
//!
//! Fixed-depth adversarial search over disposable board copies with a pure
//! material evaluation at the leaves. There is deliberately no transposition
//! table, no move ordering beyond row-major enumeration and no time
//! management: depth is a fixed, caller-supplied parameter and the branching
//! factor on an 8x8 board keeps the cost bounded.

pub mod minimax;

pub use minimax::{best_move, best_move_with_stats, evaluate, SearchResult};
