//! Game rules shared by every board
//!
//! This module implements terminal detection:
//! - Line wins (`win_length` identical marks in any of the four directions)
//! - Draws (no empty cell left)

pub mod win;

// Re-exports for convenient access
pub use win::{evaluate, find_winner, Evaluation, DRAW_SCORE, WIN_SCORE};
