//! Positional evaluation: pattern weights and the window-scan
//! heuristic.

pub mod heuristic;
pub mod patterns;

pub use heuristic::{evaluate, net_score};
pub use patterns::{PatternScore, WIN_SCORE};
