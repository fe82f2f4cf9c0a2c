//! Command-line configuration for the console game

use clap::{Parser, ValueEnum};

use crate::board::BoardConfig;
use crate::error::ConfigError;
use crate::search::Searcher;

/// Which board to play on
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GameKind {
    /// Gravity connect-N on a configurable board
    Connect,
    /// Fixed 3x3 tic-tac-toe (board options are ignored)
    Tictactoe,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "connectn")]
#[command(about = "Play connect-N against a minimax engine with alpha-beta pruning")]
pub struct Config {
    /// Game to play
    #[arg(long, value_enum, default_value_t = GameKind::Connect)]
    pub game: GameKind,

    /// Number of board rows
    #[arg(long, default_value_t = 6)]
    pub rows: usize,

    /// Number of board columns
    #[arg(long, default_value_t = 7)]
    pub cols: usize,

    /// Marks in a row needed to win
    #[arg(long, default_value_t = 4)]
    pub win_length: usize,

    /// Search depth limit in plies
    #[arg(long, default_value_t = 6)]
    pub depth: u32,

    /// Seed for the coin flip and tie-breaking (random if omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Config {
    pub fn board_config(&self) -> Result<BoardConfig, ConfigError> {
        BoardConfig::new(self.rows, self.cols, self.win_length)
    }

    pub fn searcher(&self) -> Result<Searcher, ConfigError> {
        Searcher::new(self.depth)
    }

    /// Check every option before the game starts
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.game == GameKind::Connect {
            self.board_config()?;
        }
        self.searcher()?;
        Ok(())
    }
}
