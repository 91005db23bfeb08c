//! Game sessions: one human-vs-engine game per session, plus a
//! host-side store addressing sessions by id.

pub mod game;
pub mod snapshot;
pub mod store;

pub use game::{GameSession, SessionConfig};
pub use snapshot::{GameSnapshot, GameStatus, MoveReport};
pub use store::{SessionId, SessionStore};
