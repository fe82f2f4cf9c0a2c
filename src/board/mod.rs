//! Board representation for connect-N and tic-tac-toe

pub mod board;
pub mod grid;
pub mod tictactoe;


use std::fmt;

use crate::error::{ConfigError, MoveError};
use crate::rules::{Evaluation, WIN_SCORE};

// Re-exports
pub use board::Board;
pub use grid::{Grid, LineCounts};
pub use tictactoe::TicTacToe;

/// Contents of a single board cell. `X` and `O` double as the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    /// Get the opposing player
    #[inline]
    pub fn opponent(self) -> Cell {
        match self {
            Cell::X => Cell::O,
            Cell::O => Cell::X,
            Cell::Empty => Cell::Empty,
        }
    }

    #[inline]
    pub fn is_player(self) -> bool {
        self != Cell::Empty
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Cell::Empty => ".",
            Cell::X => "X",
            Cell::O => "O",
        })
    }
}

/// Dimensions and win length of a connect-N board.
///
/// Every field is validated on construction: the board must be non-empty,
/// a line of `win_length` must fit somewhere on it, and the heuristic
/// window score (at most 3 per window) must stay below [`WIN_SCORE`] so
/// a cut-off estimate can never pass for a decided game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardConfig {
    rows: usize,
    cols: usize,
    win_length: usize,
}

impl BoardConfig {
    pub fn new(rows: usize, cols: usize, win_length: usize) -> Result<Self, ConfigError> {
        if rows == 0 || cols == 0 {
            return Err(ConfigError::EmptyBoard { rows, cols });
        }
        let max = rows.max(cols);
        if win_length < 2 || win_length > max {
            return Err(ConfigError::WinLength { win_length, max });
        }
        let windows = Grid::window_count(rows, cols, win_length);
        if windows.saturating_mul(3) >= WIN_SCORE as usize {
            return Err(ConfigError::HeuristicOverflow {
                rows,
                cols,
                win_length,
                windows,
            });
        }
        Ok(Self {
            rows,
            cols,
            win_length,
        })
    }

    /// Standard 6 rows x 7 columns, four in a row.
    pub fn connect_four() -> Self {
        Self {
            rows: 6,
            cols: 7,
            win_length: 4,
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn win_length(&self) -> usize {
        self.win_length
    }
}

/// Capability set shared by every board the search engine can play on.
///
/// Implementations mutate in place. `undo_move` is only defined as the exact
/// inverse of the most recent `apply_move` of the same move, and both panic
/// when that contract is broken.
pub trait GameBoard {
    /// Clear every cell.
    fn reset(&mut self);

    /// Legal moves in the order the search should try them.
    fn valid_moves(&self) -> Vec<usize>;

    /// Non-panicking legality check for untrusted moves.
    fn check_move(&self, mv: usize) -> Result<(), MoveError>;

    fn apply_move(&mut self, mv: usize, player: Cell);

    /// Validated move for untrusted callers: the board is left untouched on error.
    fn try_move(&mut self, mv: usize, player: Cell) -> Result<(), MoveError> {
        if !player.is_player() {
            return Err(MoveError::NotAPlayer(player));
        }
        self.check_move(mv)?;
        self.apply_move(mv, player);
        Ok(())
    }

    fn undo_move(&mut self, mv: usize);

    /// Terminal status scored from `player`'s point of view.
    fn evaluate(&self, player: Cell) -> Evaluation;

    /// Window heuristic for `player`; only meaningful on non-terminal positions.
    fn estimate(&self, player: Cell, opponent: Cell) -> i32;
}
