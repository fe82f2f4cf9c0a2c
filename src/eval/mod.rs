//! Evaluation module for non-terminal positions
//!
//! The search falls back on this heuristic when it reaches its depth limit
//! before the game is decided. It scores open windows (lines of
//! `win_length` cells that only one player has marks in).

pub mod heuristic;
pub mod patterns;

pub use heuristic::{estimate, net_advantage};
pub use patterns::WindowScore;
