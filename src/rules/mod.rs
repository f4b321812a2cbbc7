//! Game rules for Reversi
//!
//! This module implements the rule set for Reversi:
//! - Capture-line scanning in all 8 directions
//! - Move legality and move application with capture resolution
//! - Terminal detection and winner derivation

pub mod capture;
pub mod moves;
pub mod win;

// Re-exports for convenient access
pub use capture::{captured_positions, execute_captures, has_capture, would_flip_in_direction};
pub use moves::{apply_move, has_any_move, is_legal_move, legal_moves};
pub use win::{is_game_over, winner};
