//! Connect-N board with gravity placement

use std::fmt;

use super::grid::Grid;
use super::{BoardConfig, Cell, GameBoard};
use crate::error::MoveError;
use crate::eval;
use crate::rules::{self, Evaluation};

/// Gravity board: pieces drop to the lowest empty row of a column.
///
/// Within every column the occupied cells form a contiguous run starting at
/// row 0; `apply_move` and `undo_move` are the only mutators that touch a
/// single cell, so the invariant holds for the lifetime of the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: Grid,
    win_length: usize,
    /// Center-first column order used by `valid_moves`
    column_order: Vec<usize>,
}

impl Board {
    pub fn new(config: BoardConfig) -> Self {
        Self {
            grid: Grid::new(config.rows(), config.cols()),
            win_length: config.win_length(),
            column_order: center_first_order(config.cols()),
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    #[inline]
    pub fn win_length(&self) -> usize {
        self.win_length
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Get cell at (row, col); row 0 is the bottom
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.grid.get(row, col)
    }

    pub fn reset(&mut self) {
        self.grid.clear();
    }

    /// A column is playable while its top cell is empty
    #[inline]
    pub fn is_valid_move(&self, col: usize) -> bool {
        col < self.cols() && self.grid.get(self.rows() - 1, col) == Cell::Empty
    }

    /// Open columns, center first (e.g. 3, 2, 4, 1, 5, 0, 6 on 7 columns)
    pub fn valid_moves(&self) -> Vec<usize> {
        self.column_order
            .iter()
            .copied()
            .filter(|&col| self.is_valid_move(col))
            .collect()
    }

    pub fn check_move(&self, col: usize) -> Result<(), MoveError> {
        if col >= self.cols() {
            return Err(MoveError::OutOfRange {
                mv: col,
                limit: self.cols(),
            });
        }
        if !self.is_valid_move(col) {
            return Err(MoveError::ColumnFull(col));
        }
        Ok(())
    }

    /// Drop `player` into `col`.
    ///
    /// # Panics
    /// If `col` is not a valid move or `player` is `Cell::Empty`.
    pub fn apply_move(&mut self, col: usize, player: Cell) {
        assert!(player.is_player(), "apply_move with {:?}", player);
        assert!(self.is_valid_move(col), "apply_move on full or missing column {}", col);
        // Scan bottom-up for the first empty cell
        let row = (0..self.rows())
            .find(|&row| self.grid.get(row, col) == Cell::Empty)
            .unwrap_or_else(|| panic!("column {} has no empty cell", col));
        self.grid.set(row, col, player);
    }

    /// Remove the topmost piece of `col`.
    ///
    /// # Panics
    /// If `col` is out of range or empty.
    pub fn undo_move(&mut self, col: usize) {
        assert!(col < self.cols(), "undo_move on missing column {}", col);
        // Scan top-down for the first occupied cell
        let row = (0..self.rows())
            .rev()
            .find(|&row| self.grid.get(row, col) != Cell::Empty)
            .unwrap_or_else(|| panic!("undo_move on empty column {}", col));
        self.grid.set(row, col, Cell::Empty);
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.grid.is_full()
    }

    pub fn evaluate(&self, player: Cell) -> Evaluation {
        rules::evaluate(&self.grid, self.win_length, player)
    }

    pub fn estimate(&self, player: Cell, opponent: Cell) -> i32 {
        eval::estimate(&self.grid, self.win_length, player, opponent)
    }

    /// Build a board from text rows listed top row first ('X', 'O', '.').
    #[cfg(test)]
    pub(crate) fn from_rows(config: BoardConfig, rows: &[&str]) -> Self {
        let mut board = Self::new(config);
        assert_eq!(rows.len(), board.rows());
        for (i, line) in rows.iter().enumerate() {
            let row = board.rows() - 1 - i;
            for (col, ch) in line.chars().enumerate() {
                let cell = match ch {
                    'X' => Cell::X,
                    'O' => Cell::O,
                    _ => Cell::Empty,
                };
                board.grid.set(row, col, cell);
            }
        }
        board
    }
}

impl GameBoard for Board {
    fn reset(&mut self) {
        Board::reset(self)
    }

    fn valid_moves(&self) -> Vec<usize> {
        Board::valid_moves(self)
    }

    fn check_move(&self, mv: usize) -> Result<(), MoveError> {
        Board::check_move(self, mv)
    }

    fn apply_move(&mut self, mv: usize, player: Cell) {
        Board::apply_move(self, mv, player)
    }

    fn undo_move(&mut self, mv: usize) {
        Board::undo_move(self, mv)
    }

    fn evaluate(&self, player: Cell) -> Evaluation {
        Board::evaluate(self, player)
    }

    fn estimate(&self, player: Cell, opponent: Cell) -> i32 {
        Board::estimate(self, player, opponent)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " ")?;
        for col in 0..self.cols() {
            write!(f, "{:>3}", col + 1)?;
        }
        writeln!(f)?;
        for row in (0..self.rows()).rev() {
            write!(f, "|")?;
            for col in 0..self.cols() {
                write!(f, "{:>3}", self.get(row, col))?;
            }
            writeln!(f, "  |")?;
        }
        Ok(())
    }
}

/// Column indices ordered center first, alternating left then right.
fn center_first_order(cols: usize) -> Vec<usize> {
    let center = (cols / 2) as isize;
    let mut order = Vec::with_capacity(cols);
    order.push(center as usize);
    for dist in 1..=cols as isize {
        for col in [center - dist, center + dist] {
            if col >= 0 && (col as usize) < cols {
                order.push(col as usize);
            }
        }
    }
    order
}
