//! # gomoku-engine
//!
//! A two-player Gomoku (five-in-a-row) engine with a built-in
//! computer opponent.
//!
//! ## Design Principles
//!
//! 1. **Engine as a library**: No I/O or transport layer. Hosts embed
//!    the crate and talk to it through sessions and snapshots.
//!
//! 2. **Deterministic by seed**: All randomness flows through a seeded
//!    RNG; the same seed and the same human moves replay the same game.
//!
//! 3. **Search on clones**: Move selection never mutates the live
//!    board. Hypothetical positions are cheap clones.
//!
//! ## Modules
//!
//! - `board`: Grid state, players, coordinates, move application
//! - `rules`: Win and draw detection
//! - `eval`: Pattern-based positional heuristic
//! - `search`: Candidate generation, minimax, and the difficulty agent
//! - `session`: Human-vs-engine games and the session store
//! - `error`: The crate-wide error type

pub mod board;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;
pub mod session;

// Re-export commonly used types
pub use crate::board::{Board, Player, Pos, DEFAULT_BOARD_SIZE};

pub use crate::error::GameError;

pub use crate::eval::{evaluate, net_score, PatternScore, WIN_SCORE};

pub use crate::rules::{find_winning_line, is_draw};

pub use crate::search::{
    candidate_moves, find_critical_move, find_winning_move, search_best_move, Agent, AgentConfig,
    Difficulty,
};

pub use crate::session::{
    GameSession, GameSnapshot, GameStatus, MoveReport, SessionConfig, SessionId, SessionStore,
};
