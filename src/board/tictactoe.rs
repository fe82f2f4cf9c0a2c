//! 3x3 tic-tac-toe board sharing the connect-N scoring rules

use std::fmt;

use super::grid::Grid;
use super::{Cell, GameBoard};
use crate::error::MoveError;
use crate::eval;
use crate::rules::{self, Evaluation};

const SIZE: usize = 3;
const CELLS: usize = SIZE * SIZE;

/// Tic-tac-toe without gravity. Moves are cell indices 0..9 in numpad
/// layout: index 0 is bottom-left, index 8 is top-right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicTacToe {
    grid: Grid,
}

impl TicTacToe {
    pub fn new() -> Self {
        Self {
            grid: Grid::new(SIZE, SIZE),
        }
    }

    #[inline]
    fn coords(mv: usize) -> (usize, usize) {
        (mv / SIZE, mv % SIZE)
    }

    #[inline]
    pub fn get(&self, mv: usize) -> Cell {
        let (row, col) = Self::coords(mv);
        self.grid.get(row, col)
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self::new()
    }
}

impl GameBoard for TicTacToe {
    fn reset(&mut self) {
        self.grid.clear();
    }

    fn valid_moves(&self) -> Vec<usize> {
        (0..CELLS).filter(|&mv| self.get(mv) == Cell::Empty).collect()
    }

    fn check_move(&self, mv: usize) -> Result<(), MoveError> {
        if mv >= CELLS {
            return Err(MoveError::OutOfRange { mv, limit: CELLS });
        }
        if self.get(mv) != Cell::Empty {
            return Err(MoveError::CellOccupied(mv));
        }
        Ok(())
    }

    fn apply_move(&mut self, mv: usize, player: Cell) {
        assert!(player.is_player(), "apply_move with {:?}", player);
        assert!(
            mv < CELLS && self.get(mv) == Cell::Empty,
            "apply_move on occupied or missing cell {}",
            mv
        );
        let (row, col) = Self::coords(mv);
        self.grid.set(row, col, player);
    }

    fn undo_move(&mut self, mv: usize) {
        assert!(
            mv < CELLS && self.get(mv) != Cell::Empty,
            "undo_move on empty or missing cell {}",
            mv
        );
        let (row, col) = Self::coords(mv);
        self.grid.set(row, col, Cell::Empty);
    }

    fn evaluate(&self, player: Cell) -> Evaluation {
        rules::evaluate(&self.grid, SIZE, player)
    }

    fn estimate(&self, player: Cell, opponent: Cell) -> i32 {
        eval::estimate(&self.grid, SIZE, player, opponent)
    }
}

impl fmt::Display for TicTacToe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..SIZE).rev() {
            write!(f, "|")?;
            for col in 0..SIZE {
                write!(f, " {}", self.grid.get(row, col))?;
            }
            writeln!(f, " |")?;
        }
        writeln!(f, "---------")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::WIN_SCORE;

    #[test]
    fn test_valid_moves_ascending_empty_cells() {
        let mut board = TicTacToe::new();
        assert_eq!(board.valid_moves(), (0..9).collect::<Vec<_>>());
        board.apply_move(4, Cell::X);
        board.apply_move(0, Cell::O);
        assert_eq!(board.valid_moves(), vec![1, 2, 3, 5, 6, 7, 8]);
    }

    #[test]
    fn test_check_move() {
        let mut board = TicTacToe::new();
        board.apply_move(4, Cell::X);
        assert_eq!(board.check_move(4), Err(MoveError::CellOccupied(4)));
        assert_eq!(
            board.check_move(9),
            Err(MoveError::OutOfRange { mv: 9, limit: 9 })
        );
        assert!(board.check_move(8).is_ok());

        assert_eq!(board.try_move(4, Cell::O), Err(MoveError::CellOccupied(4)));
        assert_eq!(board.try_move(8, Cell::O), Ok(()));
        assert_eq!(board.get(8), Cell::O);
    }

    #[test]
    fn test_diagonal_win() {
        let mut board = TicTacToe::new();
        for mv in [0, 4, 8] {
            board.apply_move(mv, Cell::O);
        }
        assert_eq!(board.evaluate(Cell::O), Evaluation::Terminal(WIN_SCORE));
        assert_eq!(board.evaluate(Cell::X), Evaluation::Terminal(-WIN_SCORE));
    }

    #[test]
    fn test_apply_undo_round_trip() {
        let mut board = TicTacToe::new();
        board.apply_move(2, Cell::X);
        let before = board.clone();
        board.apply_move(6, Cell::O);
        board.undo_move(6);
        assert_eq!(board, before);
    }

    #[test]
    #[should_panic(expected = "occupied")]
    fn test_apply_on_occupied_cell_panics() {
        let mut board = TicTacToe::new();
        board.apply_move(3, Cell::X);
        board.apply_move(3, Cell::O);
    }

    #[test]
    fn test_display_numpad_layout() {
        let mut board = TicTacToe::new();
        board.apply_move(6, Cell::X); // numpad 7, top-left
        board.apply_move(2, Cell::O); // numpad 3, bottom-right
        let text = board.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "| X . . |");
        assert_eq!(lines[2], "| . . O |");
    }
}
