//! Connect-N console game
//!
//! Human against the minimax engine on stdin/stdout. Logs go to stderr.

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use connectn::config::{Config, GameKind};
use connectn::session::{coin_flip, GameSession};
use connectn::{AIEngine, Board, TicTacToe};

fn init_tracing(level: &str) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let config = Config::parse();
    config.validate().context("invalid configuration")?;
    init_tracing(&config.log_level);

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let first = coin_flip(&mut rng);
    let engine = AIEngine::new(config.searcher()?, rng);
    info!(game = ?config.game, depth = config.depth, "configuration loaded");

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    let outcome = match config.game {
        GameKind::Connect => {
            let board = Board::new(config.board_config()?);
            GameSession::new(board, engine, stdin, stdout).play(first)?
        }
        GameKind::Tictactoe => {
            GameSession::new(TicTacToe::new(), engine, stdin, stdout).play(first)?
        }
    };
    info!(?outcome, "session finished");
    Ok(())
}
