//! Connect-N AI Engine
//!
//! A deterministic game AI for gravity-based column-drop games:
//! - Configurable rows, columns and win length (connect four by default)
//! - Depth-limited minimax with alpha-beta pruning
//! - Window-counting heuristic at the depth limit
//! - Every move tied for the best score is reported, so callers choose
//!   their own tie-breaking policy
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Connect-N and tic-tac-toe boards behind the [`GameBoard`] trait
//! - [`rules`]: Terminal detection (line wins, draws)
//! - [`eval`]: Window heuristic for non-terminal positions
//! - [`search`]: Minimax with alpha-beta pruning
//! - [`engine`]: AI player that breaks ties at random
//! - [`session`]: Console game loop for a human against the engine
//!
//! # Quick Start
//!
//! ```
//! use connectn::{Board, BoardConfig, Cell, Searcher, WIN_SCORE};
//!
//! let mut board = Board::new(BoardConfig::new(6, 7, 4).unwrap());
//! for col in 0..3 {
//!     board.apply_move(col, Cell::X);
//! }
//!
//! let searcher = Searcher::new(3).unwrap();
//! let result = searcher.search(&mut board, Cell::X).unwrap();
//! assert!(result.best_moves.contains(&3));
//! assert_eq!(result.best_score, WIN_SCORE);
//! ```
//!
//! # Score Scale
//!
//! - Win / loss: `+1000` / `-1000`
//! - Draw: `0`
//! - Heuristic: small integers, strictly below 1000 in magnitude for every
//!   board `BoardConfig` accepts

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;
pub mod session;

// Re-export commonly used types for convenience
pub use board::{Board, BoardConfig, Cell, GameBoard, TicTacToe};
pub use engine::{AIEngine, MoveResult};
pub use error::{ConfigError, MoveError, SearchError, SessionError};
pub use rules::{Evaluation, DRAW_SCORE, WIN_SCORE};
pub use search::{PruneStats, SearchResult, Searcher};
