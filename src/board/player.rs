//! Player marks.
//!
//! A cell on the board is `Option<Player>`: `None` is empty, otherwise
//! it holds one of the two marks. Black always moves first in a fresh
//! game.

use serde::{Deserialize, Serialize};

/// One of the two sides of a game.
///
/// Black conventionally plays first. Display matches the wire
/// convention external layers depend on: `X` for Black, `O` for White.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    Black,
    White,
}

impl Player {
    /// Get the opposing player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// Single-character board representation (`X` / `O`).
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Player::Black => 'X',
            Player::White => 'O',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_flips() {
        assert_eq!(Player::Black.opponent(), Player::White);
        assert_eq!(Player::White.opponent(), Player::Black);
        assert_eq!(Player::Black.opponent().opponent(), Player::Black);
    }

    #[test]
    fn test_display() {
        assert_eq!(Player::Black.to_string(), "X");
        assert_eq!(Player::White.to_string(), "O");
    }

    #[test]
    fn test_serialization() {
        assert_eq!(serde_json::to_string(&Player::Black).unwrap(), "\"black\"");
        assert_eq!(serde_json::to_string(&Player::White).unwrap(), "\"white\"");

        let back: Player = serde_json::from_str("\"white\"").unwrap();
        assert_eq!(back, Player::White);
    }
}
