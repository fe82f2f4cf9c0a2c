//! Minimax search with alpha-beta pruning
//!
//! This module implements the core search algorithm for the connect-N AI.
//! It explores the game tree depth-first on a single board that is mutated
//! in place: every frame applies its move, recurses, and undoes the move
//! before looking at the next sibling, including when it prunes.
//!
//! # Features
//!
//! - Explicit Max (agent to move) and Min (opponent to move) nodes
//! - Center-first move ordering inherited from `valid_moves`
//! - Every move tied for the best root score is returned
//! - Pruning diagnostics scoped to one search call
//!
//! # Example
//!
//! ```
//! use connectn::board::{Board, BoardConfig, Cell};
//! use connectn::search::Searcher;
//!
//! let searcher = Searcher::new(4).unwrap();
//! let mut board = Board::new(BoardConfig::connect_four());
//!
//! let result = searcher.search(&mut board, Cell::X).unwrap();
//! println!("Best moves: {:?} ({})", result.best_moves, result.best_score);
//! ```

use tracing::{debug, trace};

use crate::board::{Cell, GameBoard};
use crate::error::{ConfigError, SearchError};
use crate::eval::net_advantage;
use crate::rules::WIN_SCORE;

/// Infinity score for alpha-beta bounds
const INF: i32 = 9999;

const _: () = assert!(INF > WIN_SCORE);

/// Pruning diagnostics for one top-level search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PruneStats {
    /// Number of alpha-beta cutoffs
    pub prunes: u64,
    /// Sum of the depths at which cutoffs happened
    pub prune_depth_sum: u64,
    /// Nodes visited below the root, leaves included
    pub nodes: u64,
}

impl PruneStats {
    /// Mean cutoff depth (0.0 when nothing was pruned)
    pub fn average_depth(&self) -> f64 {
        if self.prunes == 0 {
            0.0
        } else {
            self.prune_depth_sum as f64 / self.prunes as f64
        }
    }

    #[inline]
    fn record_prune(&mut self, depth: u32) {
        self.prunes += 1;
        self.prune_depth_sum += u64::from(depth);
    }
}

/// Search result: every move tied for the best score, plus diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// All root moves achieving `best_score`, in move-ordering order. Never empty.
    pub best_moves: Vec<usize>,
    /// Minimax value of the best moves from the agent's point of view
    pub best_score: i32,
    pub stats: PruneStats,
}

/// Depth-limited minimax searcher.
///
/// Stateless between calls: two searches of the same position at the same
/// depth return identical results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Searcher {
    max_depth: u32,
}

impl Searcher {
    /// Create a searcher that looks `max_depth` plies ahead (at least 1).
    pub fn new(max_depth: u32) -> Result<Self, ConfigError> {
        if max_depth == 0 {
            return Err(ConfigError::ZeroDepth);
        }
        Ok(Self { max_depth })
    }

    #[inline]
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// Search for the best moves for `agent` with alpha-beta pruning.
    ///
    /// The board is mutated during the search and restored before returning.
    pub fn search<B: GameBoard>(
        &self,
        board: &mut B,
        agent: Cell,
    ) -> Result<SearchResult, SearchError> {
        self.search_root(board, agent, true)
    }

    /// Plain minimax over the same tree, without cutoffs.
    ///
    /// Returns the same `best_moves` and `best_score` as [`Searcher::search`]
    /// while visiting every node; `stats.prunes` is always zero.
    pub fn search_exhaustive<B: GameBoard>(
        &self,
        board: &mut B,
        agent: Cell,
    ) -> Result<SearchResult, SearchError> {
        self.search_root(board, agent, false)
    }

    /// Root-level search. Every root move gets the full (-INF, INF) window so
    /// its score is exact and ties are detected reliably.
    fn search_root<B: GameBoard>(
        &self,
        board: &mut B,
        agent: Cell,
        prune: bool,
    ) -> Result<SearchResult, SearchError> {
        assert!(agent.is_player(), "search for {:?}", agent);

        if board.evaluate(agent).is_terminal() {
            return Err(SearchError::NoMoves);
        }
        let moves = board.valid_moves();
        if moves.is_empty() {
            return Err(SearchError::NoMoves);
        }

        let mut node = Node {
            board,
            agent,
            opponent: agent.opponent(),
            max_depth: self.max_depth,
            stats: PruneStats::default(),
        };

        let mut best_moves = Vec::new();
        let mut best_score = -INF;

        for mv in moves {
            node.board.apply_move(mv, agent);
            let score = if prune {
                node.min_node(-INF, INF, 1)
            } else {
                node.minimax(false, 1)
            };
            node.board.undo_move(mv);

            trace!(mv, score, "root move scored");

            if score > best_score {
                best_score = score;
                best_moves.clear();
                best_moves.push(mv);
            } else if score == best_score {
                best_moves.push(mv);
            }
        }

        let stats = node.stats;
        debug!(
            ?best_moves,
            best_score,
            prunes = stats.prunes,
            avg_prune_depth = stats.average_depth(),
            nodes = stats.nodes,
            max_depth = self.max_depth,
            "search complete"
        );

        Ok(SearchResult {
            best_moves,
            best_score,
            stats,
        })
    }
}

/// Per-search state threaded through the recursion. The board is borrowed
/// exclusively for the whole search; the call stack is the undo log.
struct Node<'a, B> {
    board: &'a mut B,
    agent: Cell,
    opponent: Cell,
    max_depth: u32,
    stats: PruneStats,
}

impl<B: GameBoard> Node<'_, B> {
    /// Score for a position that ends the recursion: the raw terminal score
    /// if the game is over, otherwise the heuristic once the depth limit is
    /// reached.
    #[inline]
    fn leaf_score(&self, depth: u32) -> Option<i32> {
        if let Some(score) = self.board.evaluate(self.agent).score() {
            return Some(score);
        }
        if depth >= self.max_depth {
            return Some(net_advantage(&*self.board, self.agent, self.opponent));
        }
        None
    }

    /// Agent to move: raise alpha, cut off once alpha >= beta.
    fn max_node(&mut self, mut alpha: i32, beta: i32, depth: u32) -> i32 {
        self.stats.nodes += 1;
        if let Some(score) = self.leaf_score(depth) {
            return score;
        }

        for mv in self.board.valid_moves() {
            self.board.apply_move(mv, self.agent);
            let score = self.min_node(alpha, beta, depth + 1);
            self.board.undo_move(mv);

            alpha = alpha.max(score);
            if alpha >= beta {
                self.stats.record_prune(depth);
                break;
            }
        }
        alpha
    }

    /// Opponent to move: lower beta, cut off once alpha >= beta.
    fn min_node(&mut self, alpha: i32, mut beta: i32, depth: u32) -> i32 {
        self.stats.nodes += 1;
        if let Some(score) = self.leaf_score(depth) {
            return score;
        }

        for mv in self.board.valid_moves() {
            self.board.apply_move(mv, self.opponent);
            let score = self.max_node(alpha, beta, depth + 1);
            self.board.undo_move(mv);

            beta = beta.min(score);
            if alpha >= beta {
                self.stats.record_prune(depth);
                break;
            }
        }
        beta
    }

    /// Unpruned minimax used as the reference for `search_exhaustive`.
    fn minimax(&mut self, maximizing: bool, depth: u32) -> i32 {
        self.stats.nodes += 1;
        if let Some(score) = self.leaf_score(depth) {
            return score;
        }

        let (player, mut best) = if maximizing {
            (self.agent, -INF)
        } else {
            (self.opponent, INF)
        };
        for mv in self.board.valid_moves() {
            self.board.apply_move(mv, player);
            let score = self.minimax(!maximizing, depth + 1);
            self.board.undo_move(mv);

            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, BoardConfig, TicTacToe};
    use crate::rules::DRAW_SCORE;

    fn connect_four() -> Board {
        Board::new(BoardConfig::connect_four())
    }

    /// X has three along the bottom with column 3 open; O has no threat.
    fn x_to_win() -> Board {
        Board::from_rows(
            BoardConfig::connect_four(),
            &[
                ".......",
                ".......",
                ".......",
                ".......",
                "......O",
                "XXX..OO",
            ],
        )
    }

    #[test]
    fn test_zero_depth_rejected() {
        assert_eq!(Searcher::new(0), Err(ConfigError::ZeroDepth));
        assert_eq!(Searcher::new(3).unwrap().max_depth(), 3);
    }

    #[test]
    fn test_search_empty_board_prefers_center() {
        let searcher = Searcher::new(6).unwrap();
        let mut board = connect_four();

        let result = searcher.search(&mut board, Cell::X).unwrap();
        assert!(result.best_moves.contains(&3), "got {:?}", result.best_moves);
        assert!(result.stats.prunes > 0);
    }

    #[test]
    fn test_search_finds_winning_move() {
        for depth in 1..=4 {
            let searcher = Searcher::new(depth).unwrap();
            let mut board = x_to_win();

            let result = searcher.search(&mut board, Cell::X).unwrap();
            assert!(result.best_moves.contains(&3), "depth {}", depth);
            assert_eq!(result.best_score, WIN_SCORE, "depth {}", depth);
        }
    }

    #[test]
    fn test_search_blocks_opponent_win() {
        let searcher = Searcher::new(2).unwrap();
        let mut board = Board::from_rows(
            BoardConfig::connect_four(),
            &[
                ".......",
                ".......",
                ".......",
                ".......",
                "......X",
                "OOO..XX",
            ],
        );

        let result = searcher.search(&mut board, Cell::X).unwrap();
        assert_eq!(result.best_moves, vec![3]);
        assert!(result.best_score.abs() < WIN_SCORE);
    }

    #[test]
    fn test_search_restores_board() {
        let searcher = Searcher::new(5).unwrap();
        let mut board = x_to_win();
        board.apply_move(3, Cell::O);
        let before = board.clone();

        searcher.search(&mut board, Cell::X).unwrap();
        assert_eq!(board, before);
        searcher.search_exhaustive(&mut board, Cell::O).unwrap();
        assert_eq!(board, before);
    }

    #[test]
    fn test_pruning_matches_exhaustive_search() {
        let positions = [
            connect_four(),
            x_to_win(),
            Board::from_rows(
                BoardConfig::connect_four(),
                &[
                    ".......",
                    ".......",
                    "...X...",
                    "...O...",
                    "..XOO..",
                    ".XXOXO.",
                ],
            ),
        ];

        for depth in 1..=4 {
            let searcher = Searcher::new(depth).unwrap();
            for position in &positions {
                for agent in [Cell::X, Cell::O] {
                    let mut board = position.clone();
                    let pruned = searcher.search(&mut board, agent).unwrap();
                    let full = searcher.search_exhaustive(&mut board, agent).unwrap();

                    assert_eq!(pruned.best_moves, full.best_moves, "depth {}", depth);
                    assert_eq!(pruned.best_score, full.best_score, "depth {}", depth);
                    assert_eq!(full.stats.prunes, 0);
                    assert!(pruned.stats.nodes <= full.stats.nodes);
                }
            }
        }
    }

    #[test]
    fn test_search_is_deterministic() {
        let searcher = Searcher::new(4).unwrap();
        let mut board = connect_four();
        board.apply_move(3, Cell::X);

        let first = searcher.search(&mut board, Cell::O).unwrap();
        let second = searcher.search(&mut board, Cell::O).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_search_terminal_position_has_no_moves() {
        let searcher = Searcher::new(2).unwrap();
        let mut board = x_to_win();
        board.apply_move(3, Cell::X);

        assert_eq!(
            searcher.search(&mut board, Cell::O),
            Err(SearchError::NoMoves)
        );
    }

    #[test]
    fn test_heuristic_stays_below_win_score() {
        let searcher = Searcher::new(1).unwrap();
        let mut board = connect_four();

        let result = searcher.search(&mut board, Cell::X).unwrap();
        assert!(result.best_score.abs() < WIN_SCORE);
        assert_eq!(result.stats.prunes, 0);
        assert_eq!(result.stats.nodes, 7);
    }

    #[test]
    fn test_tictactoe_perfect_play_is_draw() {
        let searcher = Searcher::new(9).unwrap();
        let mut board = TicTacToe::new();

        let result = searcher.search(&mut board, Cell::X).unwrap();
        assert_eq!(result.best_score, DRAW_SCORE);
        assert_eq!(result.best_moves.len(), 9);
    }

    #[test]
    fn test_tictactoe_takes_win() {
        let searcher = Searcher::new(3).unwrap();
        let mut board = TicTacToe::new();
        // X on 1 and 5 (numpad), O on 2 and 3
        board.apply_move(0, Cell::X);
        board.apply_move(1, Cell::O);
        board.apply_move(4, Cell::X);
        board.apply_move(2, Cell::O);

        let result = searcher.search(&mut board, Cell::X).unwrap();
        assert_eq!(result.best_score, WIN_SCORE);
        assert!(result.best_moves.contains(&8));
    }

    #[test]
    fn test_average_depth() {
        let stats = PruneStats {
            prunes: 4,
            prune_depth_sum: 10,
            nodes: 100,
        };
        assert_eq!(stats.average_depth(), 2.5);
        assert_eq!(PruneStats::default().average_depth(), 0.0);
    }
}
