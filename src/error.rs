//! Error taxonomy.
//!
//! Every failure the engine can report is an expected, recoverable
//! condition: malformed input is rejected with a typed error, never a
//! panic. Hosts map `SessionNotFound` to a not-found response and
//! everything else to a client-input-style response.

use thiserror::Error;

use crate::session::SessionId;

/// Typed failure result for all engine operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// Coordinates outside `[0, size)`.
    #[error("position ({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds { row: usize, col: usize, size: usize },

    /// Placement on a non-empty cell.
    #[error("cell ({row}, {col}) is already occupied")]
    CellOccupied { row: usize, col: usize },

    /// Any mutating call after the winner is set or the board is full.
    #[error("the game is already over")]
    GameAlreadyOver,

    /// A move was attempted out of turn.
    #[error("it is not your turn")]
    NotYourTurn,

    /// Unrecognized difficulty level.
    #[error("unrecognized difficulty level: {0:?}")]
    InvalidDifficulty(String),

    /// Host-side session lookup failure.
    #[error("no session with id {0}")]
    SessionNotFound(SessionId),
}
