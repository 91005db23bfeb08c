//! A single human-vs-engine game.
//!
//! The session owns one [`Board`] and one [`Agent`] and enforces the
//! turn protocol: the human plays, and if the game is still open the
//! engine replies within the same call. Every mutation returns a
//! [`MoveReport`] or snapshot so callers never reach into the board
//! directly.

use serde::{Deserialize, Serialize};

use crate::board::{Board, Player, Pos, DEFAULT_BOARD_SIZE};
use crate::error::GameError;
use crate::search::{Agent, AgentConfig, Difficulty};

use super::snapshot::{GameSnapshot, GameStatus, MoveReport};

/// Session configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Board side length.
    pub board_size: usize,

    /// Engine difficulty.
    pub difficulty: Difficulty,

    /// Whether the human plays Black and moves first.
    pub human_first: bool,

    /// Seed for the engine's RNG.
    pub seed: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            difficulty: Difficulty::Medium,
            human_first: true,
            seed: 42,
        }
    }
}

impl SessionConfig {
    /// Create a config with a custom board size.
    pub fn with_board_size(mut self, board_size: usize) -> Self {
        self.board_size = board_size;
        self
    }

    /// Create a config with a custom difficulty.
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Create a config where the engine opens the game.
    pub fn with_engine_first(mut self) -> Self {
        self.human_first = false;
        self
    }

    /// Create a config with a custom engine seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// One human-vs-engine game: a board, an engine agent, and the side
/// assignment.
#[derive(Clone, Debug)]
pub struct GameSession {
    board: Board,
    agent: Agent,
    human: Player,
}

impl GameSession {
    /// Start a new game. When the engine moves first it plays its
    /// opening move before this returns.
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        let mut session = Self {
            board: Board::new(config.board_size),
            agent: Agent::new(
                AgentConfig::default()
                    .with_difficulty(config.difficulty)
                    .with_seed(config.seed),
            ),
            human: if config.human_first {
                Player::Black
            } else {
                Player::White
            },
        };

        if !config.human_first {
            // An opening move on an empty board cannot fail.
            let _ = session.play_engine_move();
        }

        session
    }

    /// The side the human plays.
    #[must_use]
    pub fn human_player(&self) -> Player {
        self.human
    }

    /// The side the engine plays.
    #[must_use]
    pub fn engine_player(&self) -> Player {
        self.human.opponent()
    }

    /// Current engine difficulty.
    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.agent.difficulty()
    }

    /// Whether the game is open and it is the human's turn.
    #[must_use]
    pub fn is_human_turn(&self) -> bool {
        !self.board.is_terminal() && self.board.current_player() == self.human
    }

    /// Read-only view of the underlying board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Session outcome from the human's perspective.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.snapshot().status
    }

    /// Apply a human move, then let the engine reply if the game is
    /// still open.
    ///
    /// Rejects the move without touching the board when the game is
    /// over, the cell is out of bounds or occupied, or it is the
    /// engine's turn.
    pub fn apply_human_move(&mut self, row: usize, col: usize) -> Result<MoveReport, GameError> {
        if !self.board.is_terminal() && self.board.current_player() != self.human {
            return Err(GameError::NotYourTurn);
        }

        self.board.place(row, col)?;
        log::debug!("human played ({row}, {col})");

        let message = if self.board.is_terminal() {
            match self.status() {
                GameStatus::HumanWin => "You win!".to_string(),
                GameStatus::Draw => "The board is full: draw.".to_string(),
                // Unreachable right after a legal human move.
                GameStatus::EngineWin | GameStatus::InProgress => "Game over.".to_string(),
            }
        } else {
            let reply = self.play_engine_move()?;
            match (self.status(), reply) {
                (GameStatus::EngineWin, Some(pos)) => {
                    format!("The engine wins with {pos}.")
                }
                (GameStatus::Draw, _) => "The board is full: draw.".to_string(),
                (_, Some(pos)) => format!("The engine replied at {pos}."),
                (_, None) => "Move accepted.".to_string(),
            }
        };

        Ok(MoveReport {
            message,
            state: self.snapshot(),
        })
    }

    /// Restart the game on a cleared board, reassigning sides. When
    /// the engine moves first it opens immediately.
    pub fn reset(&mut self, human_first: bool) -> GameSnapshot {
        self.board.reset();
        self.human = if human_first {
            Player::Black
        } else {
            Player::White
        };
        log::info!("session reset, human plays {}", self.human);

        if !human_first {
            let _ = self.play_engine_move();
        }

        self.snapshot()
    }

    /// Switch the engine to a new difficulty mid-game. The board is
    /// untouched; the agent is rebuilt so the new depth applies from
    /// the next engine move.
    pub fn change_difficulty(&mut self, difficulty: Difficulty) -> GameSnapshot {
        let config = (*self.agent.config()).with_difficulty(difficulty);
        self.agent = Agent::new(config);
        log::info!("difficulty changed to {difficulty}");

        self.snapshot()
    }

    /// Suggest a move for the human at the session's current
    /// difficulty. `None` when the game is over or it is not the
    /// human's turn.
    #[must_use]
    pub fn hint(&self) -> Option<Pos> {
        if !self.is_human_turn() {
            return None;
        }

        // A scratch copy so the hint does not advance the engine's RNG.
        let mut scout = self.agent.clone();
        scout.select_move(&self.board)
    }

    /// Capture the current state.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::capture(&self.board, self.human)
    }

    /// Let the agent pick and play a move for the side to move.
    fn play_engine_move(&mut self) -> Result<Option<Pos>, GameError> {
        let Some(pos) = self.agent.select_move(&self.board) else {
            return Ok(None);
        };
        self.board.place(pos.row, pos.col)?;
        log::debug!("engine played {pos}");
        Ok(Some(pos))
    }
}
