//! Console game loop: human against the engine
//!
//! The session owns the single board for the whole game. Rendering and
//! input parsing live here; the engine only ever sees the board.

use std::fmt;
use std::io::{BufRead, Write};

use rand::Rng;
use tracing::{debug, info};

use crate::board::{Board, Cell, GameBoard, TicTacToe};
use crate::engine::{AIEngine, MoveResult};
use crate::error::SessionError;
use crate::rules::{DRAW_SCORE, WIN_SCORE};

/// How a human enters moves on a board, shown before the first move.
pub trait Controls {
    const CONTROLS: &'static str;
}

impl Controls for Board {
    const CONTROLS: &'static str =
        "CONTROLS:\nEnter the number of the desired column to drop your piece.\n";
}

impl Controls for TicTacToe {
    const CONTROLS: &'static str = "CONTROLS:\n\
        The game uses the Numpad layout shown below to enter moves\n\
        | 7 8 9 |\n\
        | 4 5 6 |\n\
        | 1 2 3 |\n\
        ---------\n";
}

/// Who controls a side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Human,
    Engine,
}

impl Side {
    #[inline]
    pub fn other(self) -> Side {
        match self {
            Side::Human => Side::Engine,
            Side::Engine => Side::Human,
        }
    }
}

/// Fair coin flip for the first move
pub fn coin_flip<R: Rng>(rng: &mut R) -> Side {
    if rng.gen_bool(0.5) {
        Side::Engine
    } else {
        Side::Human
    }
}

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Cell),
    Draw,
}

/// Parse a 1-based move label typed by a human
fn parse_move(line: &str) -> Option<usize> {
    line.trim().parse::<usize>().ok()?.checked_sub(1)
}

/// One interactive game on `board`, reading moves from `input` and
/// writing the transcript to `output`.
pub struct GameSession<B, R, I, W> {
    board: B,
    engine: AIEngine<R>,
    input: I,
    output: W,
}

impl<B, R, I, W> GameSession<B, R, I, W>
where
    B: GameBoard + Controls + fmt::Display,
    R: Rng,
    I: BufRead,
    W: Write,
{
    pub fn new(board: B, engine: AIEngine<R>, input: I, output: W) -> Self {
        Self {
            board,
            engine,
            input,
            output,
        }
    }

    #[inline]
    pub fn board(&self) -> &B {
        &self.board
    }

    /// Play one game to completion. The side moving first plays `X`.
    pub fn play(&mut self, first: Side) -> Result<GameOutcome, SessionError> {
        self.board.reset();
        writeln!(self.output, "Starting Game!\n")?;
        writeln!(self.output, "{}", B::CONTROLS)?;

        let (engine_mark, human_mark) = match first {
            Side::Engine => {
                writeln!(self.output, "Computer goes first!")?;
                (Cell::X, Cell::O)
            }
            Side::Human => {
                writeln!(self.output, "Human goes first!")?;
                (Cell::O, Cell::X)
            }
        };
        info!(?first, engine = %engine_mark, human = %human_mark, "game started");
        write!(self.output, "{}", self.board)?;

        let mut turn = first;
        loop {
            let player = match turn {
                Side::Engine => {
                    writeln!(self.output, "Thinking...")?;
                    let result = self.engine.choose_move(&mut self.board, engine_mark)?;
                    writeln!(self.output, "Computer's Move")?;
                    self.board.apply_move(result.best_move, engine_mark);
                    write!(self.output, "\n{}", self.board)?;
                    self.report_stats(&result)?;
                    engine_mark
                }
                Side::Human => {
                    self.play_human_move(human_mark)?;
                    write!(self.output, "\n{}", self.board)?;
                    human_mark
                }
            };

            if let Some(score) = self.board.evaluate(player).score() {
                let outcome = match score {
                    WIN_SCORE => GameOutcome::Winner(player),
                    DRAW_SCORE => GameOutcome::Draw,
                    _ => GameOutcome::Winner(player.opponent()),
                };
                match outcome {
                    GameOutcome::Winner(winner) => {
                        writeln!(self.output, "Player {} wins!", winner)?
                    }
                    GameOutcome::Draw => writeln!(self.output, "It's a draw!")?,
                }
                info!(?outcome, "game over");
                return Ok(outcome);
            }

            turn = turn.other();
        }
    }

    /// Prompt until the human enters a legal move, then play it.
    fn play_human_move(&mut self, player: Cell) -> Result<(), SessionError> {
        loop {
            writeln!(self.output, "You are playing the {}'s", player)?;
            write!(self.output, "Input Move: ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(SessionError::InputClosed);
            }

            match parse_move(&line) {
                Some(mv) => match self.board.try_move(mv, player) {
                    Ok(()) => return Ok(()),
                    Err(err) => debug!(%err, "rejected human move"),
                },
                None => debug!(input = line.trim(), "unparsable human move"),
            }
            writeln!(self.output, "Invalid Move, Try Again!")?;
        }
    }

    fn report_stats(&mut self, result: &MoveResult) -> Result<(), SessionError> {
        writeln!(self.output, "Alpha/Beta Pruning Statistics:")?;
        if result.stats.prunes > 0 {
            writeln!(
                self.output,
                "{} prunes with an average depth of {:.2}",
                result.stats.prunes,
                result.stats.average_depth()
            )?;
        } else {
            writeln!(self.output, "No prunes")?;
        }
        writeln!(self.output)?;
        Ok(())
    }
}
