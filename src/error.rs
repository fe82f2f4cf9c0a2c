//! Error types shared across the crate

/// A move that cannot be played on the current board.
///
/// This is the non-fatal path used by callers validating untrusted input.
/// Engine-internal code never produces it; it only plays moves taken from
/// `valid_moves()`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("move {mv} is outside the board (0..{limit})")]
    OutOfRange { mv: usize, limit: usize },

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("cell {0} is already occupied")]
    CellOccupied(usize),

    #[error("{0:?} cannot be placed as a player mark")]
    NotAPlayer(crate::board::Cell),
}

/// Errors raised while validating board or search configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("board must have at least one row and one column (got {rows}x{cols})")]
    EmptyBoard { rows: usize, cols: usize },

    #[error("win length {win_length} must be between 2 and {max}")]
    WinLength { win_length: usize, max: usize },

    #[error(
        "board {rows}x{cols} with win length {win_length} has {windows} windows; \
         heuristic scores could reach the terminal score"
    )]
    HeuristicOverflow {
        rows: usize,
        cols: usize,
        win_length: usize,
        windows: usize,
    },

    #[error("search depth must be at least 1")]
    ZeroDepth,
}

/// Errors returned by a top-level search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("position is already decided; there is no move to search")]
    NoMoves,
}

/// Errors that end an interactive game session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("input closed before the game finished")]
    InputClosed,

    #[error("search failed: {0}")]
    Search(#[from] SearchError),
}
