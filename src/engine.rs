//! AI player built on the minimax searcher
//!
//! The searcher is deterministic and reports every move tied for the best
//! score. This module is the caller-side policy on top of it: it picks one
//! of the tied moves uniformly at random so repeated games vary, and it
//! records timing alongside the pruning statistics.
//!
//! # Example
//!
//! ```
//! use connectn::{AIEngine, Board, BoardConfig, Cell, Searcher};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut engine = AIEngine::new(Searcher::new(4).unwrap(), StdRng::seed_from_u64(7));
//! let mut board = Board::new(BoardConfig::connect_four());
//!
//! let result = engine.choose_move(&mut board, Cell::X).unwrap();
//! assert!(result.tied_moves.contains(&result.best_move));
//! board.apply_move(result.best_move, Cell::X);
//! ```

use std::time::Instant;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::board::{Cell, GameBoard};
use crate::error::SearchError;
use crate::search::{PruneStats, SearchResult, Searcher};

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveResult {
    /// Move selected among the tied best moves
    pub best_move: usize,
    /// Minimax score of the selected move
    pub score: i32,
    /// Every move sharing the best score, in search order
    pub tied_moves: Vec<usize>,
    /// Pruning statistics of this search only
    pub stats: PruneStats,
    /// Time taken in milliseconds
    pub time_ms: u64,
}

/// AI player: a searcher plus the randomness used to break ties.
pub struct AIEngine<R> {
    searcher: Searcher,
    rng: R,
}

impl<R: Rng> AIEngine<R> {
    pub fn new(searcher: Searcher, rng: R) -> Self {
        Self { searcher, rng }
    }

    #[inline]
    pub fn searcher(&self) -> &Searcher {
        &self.searcher
    }

    /// Search the position for `player` and pick one of the best moves.
    ///
    /// The board is restored before returning; playing the move is up to
    /// the caller.
    pub fn choose_move<B: GameBoard>(
        &mut self,
        board: &mut B,
        player: Cell,
    ) -> Result<MoveResult, SearchError> {
        let start = Instant::now();
        let SearchResult {
            best_moves,
            best_score,
            stats,
        } = self.searcher.search(board, player)?;

        let best_move = *best_moves
            .choose(&mut self.rng)
            .ok_or(SearchError::NoMoves)?;
        let time_ms = start.elapsed().as_millis() as u64;

        debug!(
            best_move,
            ties = best_moves.len(),
            score = best_score,
            time_ms,
            "engine move chosen"
        );

        Ok(MoveResult {
            best_move,
            score: best_score,
            tied_moves: best_moves,
            stats,
            time_ms,
        })
    }
}
