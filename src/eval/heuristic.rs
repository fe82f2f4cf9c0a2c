//! Heuristic evaluation for depth-limited search
//!
//! Every length-`win_length` window in the four line directions is scored
//! for the player on its own:
//! - `win_length - 2` of the player's marks, rest empty: +2
//! - `win_length - 1` of the player's marks, one empty: +3
//!
//! Windows containing any opposing mark are dead and score nothing.

use crate::board::{Cell, GameBoard, Grid};

use super::patterns::WindowScore;

/// Sum of open-window scores for `player`.
///
/// `opponent` is implied by the window counts (any cell that is neither
/// empty nor `player` disqualifies the window); it is taken so callers
/// spell out whose view they are scoring.
#[must_use]
pub fn estimate(grid: &Grid, win_length: usize, player: Cell, opponent: Cell) -> i32 {
    debug_assert_eq!(player.opponent(), opponent);

    grid.windows(win_length)
        .map(|w| {
            let mine = w.count(player);
            if mine + 2 == win_length && w.empty == 2 {
                WindowScore::TWO
            } else if mine + 1 == win_length && w.empty == 1 {
                WindowScore::THREE
            } else {
                0
            }
        })
        .sum()
}

/// Signed positional advantage of `agent` over `opponent`. This is the
/// score search assigns to a position at its depth limit.
///
/// Symmetric: `net_advantage(b, a, o) == -net_advantage(b, o, a)`.
#[must_use]
pub fn net_advantage<B: GameBoard>(board: &B, agent: Cell, opponent: Cell) -> i32 {
    board.estimate(agent, opponent) - board.estimate(opponent, agent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, BoardConfig, TicTacToe};
    use crate::rules::WIN_SCORE;

    fn connect_four() -> Board {
        Board::new(BoardConfig::connect_four())
    }

    #[test]
    fn test_estimate_empty_board() {
        let board = connect_four();
        assert_eq!(board.estimate(Cell::X, Cell::O), 0);
        assert_eq!(net_advantage(&board, Cell::X, Cell::O), 0);
    }

    #[test]
    fn test_estimate_two_in_a_row() {
        let mut board = connect_four();
        board.apply_move(0, Cell::X);
        board.apply_move(1, Cell::X);
        // Only the bottom-row window starting at column 0 holds both
        assert_eq!(board.estimate(Cell::X, Cell::O), WindowScore::TWO);
    }

    #[test]
    fn test_estimate_open_three() {
        let mut board = connect_four();
        for col in 0..3 {
            board.apply_move(col, Cell::X);
        }
        // cols 0-3: three + empty (3); cols 1-4: two + two empty (2)
        assert_eq!(board.estimate(Cell::X, Cell::O), 5);
    }

    #[test]
    fn test_blocked_window_scores_nothing() {
        let mut board = connect_four();
        board.apply_move(0, Cell::X);
        board.apply_move(1, Cell::X);
        board.apply_move(2, Cell::O);
        assert_eq!(board.estimate(Cell::X, Cell::O), 0);
    }

    #[test]
    fn test_net_advantage_is_antisymmetric() {
        let board = Board::from_rows(
            BoardConfig::connect_four(),
            &[
                ".......",
                ".......",
                ".......",
                "...O...",
                "..XO...",
                ".XXOO..",
            ],
        );
        let a = net_advantage(&board, Cell::X, Cell::O);
        let b = net_advantage(&board, Cell::O, Cell::X);
        assert_eq!(a, -b);
        assert!(a.abs() < WIN_SCORE);
    }

    #[test]
    fn test_net_advantage_on_tictactoe() {
        let mut board = TicTacToe::new();
        board.apply_move(4, Cell::X);
        // Centre X: four open lines holding one mark each
        assert_eq!(net_advantage(&board, Cell::X, Cell::O), 4 * WindowScore::TWO);
        assert_eq!(net_advantage(&board, Cell::O, Cell::X), -4 * WindowScore::TWO);
    }
}
