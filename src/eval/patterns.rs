//! Window pattern scores

/// Score contributed by one window of `win_length` cells.
///
/// Values are kept tiny next to `WIN_SCORE`: a board with `n` windows can
/// never estimate above `n * THREE`.
pub struct WindowScore;

impl WindowScore {
    /// `win_length - 2` own marks, the rest empty
    pub const TWO: i32 = 2;
    /// `win_length - 1` own marks and one empty cell
    pub const THREE: i32 = 3;
}
