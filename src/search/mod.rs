//! Search module for the connect-N AI
//!
//! Contains:
//! - Depth-limited minimax with alpha-beta pruning
//! - An unpruned reference search over the same tree
//! - Per-search pruning statistics

pub mod alphabeta;

pub use alphabeta::{PruneStats, SearchResult, Searcher};
