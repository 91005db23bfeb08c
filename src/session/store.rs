//! In-memory session registry.
//!
//! Hosts embedding the engine keep one [`SessionStore`] and address
//! games by [`SessionId`]. Ids are handed out from a monotonic
//! counter, so lower ids are always older; `retain_latest` uses that
//! to evict stale games.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::GameError;

use super::game::{GameSession, SessionConfig};

/// Opaque handle to a stored session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(u32);

impl SessionId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Registry of live sessions keyed by id.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: FxHashMap<SessionId, GameSession>,
    next_id: u32,
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new session and return its id.
    pub fn create(&mut self, config: SessionConfig) -> SessionId {
        let id = SessionId(self.next_id);
        self.next_id += 1;
        self.sessions.insert(id, GameSession::new(config));
        log::info!("session {id} created");
        id
    }

    /// Look up a session.
    pub fn get(&self, id: SessionId) -> Result<&GameSession, GameError> {
        self.sessions.get(&id).ok_or(GameError::SessionNotFound(id))
    }

    /// Look up a session for mutation.
    pub fn get_mut(&mut self, id: SessionId) -> Result<&mut GameSession, GameError> {
        self.sessions
            .get_mut(&id)
            .ok_or(GameError::SessionNotFound(id))
    }

    /// Remove a session, returning it.
    pub fn remove(&mut self, id: SessionId) -> Result<GameSession, GameError> {
        self.sessions
            .remove(&id)
            .ok_or(GameError::SessionNotFound(id))
    }

    /// Evict the oldest sessions until at most `max` remain.
    pub fn retain_latest(&mut self, max: usize) {
        if self.sessions.len() <= max {
            return;
        }

        let mut ids: Vec<SessionId> = self.sessions.keys().copied().collect();
        ids.sort_unstable();

        let excess = ids.len() - max;
        for id in ids.into_iter().take(excess) {
            self.sessions.remove(&id);
            log::info!("session {id} evicted");
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
