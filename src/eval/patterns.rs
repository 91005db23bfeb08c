//! Pattern scores for positional evaluation.
//!
//! Weights are tunable constants, not structure: the evaluator only
//! relies on the strict ordering FIVE > OPEN_FOUR > FOUR > OPEN_THREE
//! > THREE > OPEN_TWO > TWO. The table never varies with difficulty.

/// Scoring weights for length-5 window pattern classes.
pub struct PatternScore;

impl PatternScore {
    /// Five in a row inside the window.
    pub const FIVE: i32 = 100_000;
    /// Four stones with both window-adjacent outside cells empty.
    pub const OPEN_FOUR: i32 = 10_000;
    /// Four stones with at most one open side.
    pub const FOUR: i32 = 1_000;
    /// Three stones, both outside cells empty.
    pub const OPEN_THREE: i32 = 500;
    /// Three stones, at most one open side.
    pub const THREE: i32 = 100;
    /// Two stones, both outside cells empty.
    pub const OPEN_TWO: i32 = 50;
    /// Two stones, at most one open side.
    pub const TWO: i32 = 10;
}

/// Dominating score for a decided game inside the search.
///
/// Strictly larger than any pattern sum a live board can reach, so
/// forced wins always outrank heuristic-only lines.
pub const WIN_SCORE: i32 = 10_000_000;
