//! Win and draw detection
//!
//! Terminal scores are coarse: a decided game is worth exactly
//! `WIN_SCORE` to the winner and `-WIN_SCORE` to the loser, a draw is
//! `DRAW_SCORE`. A winning line is always reported as a win, even when the
//! move that completed it also filled the board.

use crate::board::{Cell, Grid};

/// Score of a won position for the winner
pub const WIN_SCORE: i32 = 1000;

/// Score of a drawn position
pub const DRAW_SCORE: i32 = 0;

/// Terminal status of a position from one player's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evaluation {
    /// Game continues
    Ongoing,
    /// Game is over with the given score
    Terminal(i32),
}

impl Evaluation {
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, Evaluation::Terminal(_))
    }

    /// Terminal score, or None while the game is ongoing
    #[inline]
    pub fn score(self) -> Option<i32> {
        match self {
            Evaluation::Terminal(score) => Some(score),
            Evaluation::Ongoing => None,
        }
    }
}

/// Owner of the first complete line of `win_length` found, if any
pub fn find_winner(grid: &Grid, win_length: usize) -> Option<Cell> {
    grid.windows(win_length).find_map(|w| w.owner(win_length))
}

/// Evaluate terminal status for `player`.
///
/// Wins are checked before the draw, so a board-filling winning move
/// scores as a win.
pub fn evaluate(grid: &Grid, win_length: usize, player: Cell) -> Evaluation {
    if let Some(winner) = find_winner(grid, win_length) {
        return if winner == player {
            Evaluation::Terminal(WIN_SCORE)
        } else {
            Evaluation::Terminal(-WIN_SCORE)
        };
    }
    if grid.is_full() {
        return Evaluation::Terminal(DRAW_SCORE);
    }
    Evaluation::Ongoing
}
