//! The mutable game board.
//!
//! ## Board
//!
//! Tracks cell occupancy, move history, the side to move, and the
//! terminal outcome (winner plus winning line). Placements are
//! validated and then checked for a win around the placed stone.
//!
//! ## Cloning
//!
//! `Board` derives `Clone` as an independent deep copy. The search
//! clones the board at every node; a caller's live board is never
//! observed mutated mid-search.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::Player;
use super::pos::Pos;
use crate::error::GameError;
use crate::rules::find_winning_line;

/// Default board edge length.
pub const DEFAULT_BOARD_SIZE: usize = 15;

/// A size×size Gomoku board.
///
/// Cells are stored row-major; `None` is an empty cell. The invariant
/// `move_history.len() == number of occupied cells` holds at all
/// times, and a cell transitions from empty to occupied exactly once
/// (only `reset` clears cells, and it clears everything).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<Option<Player>>,
    move_history: Vec<Pos>,
    current_player: Player,
    winner: Option<Player>,
    winning_line: SmallVec<[Pos; 8]>,
}

impl Board {
    /// Create an empty board. Black moves first.
    ///
    /// Panics if `size < 5`: no five-in-a-row fits on a smaller grid.
    #[must_use]
    pub fn new(size: usize) -> Self {
        assert!(size >= 5, "Board size must be at least 5");

        Self {
            size,
            cells: vec![None; size * size],
            move_history: Vec::new(),
            current_player: Player::Black,
            winner: None,
            winning_line: SmallVec::new(),
        }
    }

    /// Board edge length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Check whether a coordinate lies on the board.
    #[must_use]
    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    /// Get a cell's contents. Out-of-bounds coordinates read as empty.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<Player> {
        if self.in_bounds(row, col) {
            self.cells[row * self.size + col]
        } else {
            None
        }
    }

    /// The side to move.
    #[must_use]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Force the side to move.
    ///
    /// Only meaningful on clones used for hypothetical-move analysis
    /// (e.g. "would the opponent win by playing here?"). During normal
    /// play the side to move alternates via `place`.
    pub fn set_current_player(&mut self, player: Player) {
        self.current_player = player;
    }

    /// The winner, if a winning line has been completed.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Coordinates of the winning run (empty unless `winner` is set).
    #[must_use]
    pub fn winning_line(&self) -> &[Pos] {
        &self.winning_line
    }

    /// All moves played so far, in turn order.
    #[must_use]
    pub fn move_history(&self) -> &[Pos] {
        &self.move_history
    }

    /// The most recent move, if any.
    #[must_use]
    pub fn last_move(&self) -> Option<Pos> {
        self.move_history.last().copied()
    }

    /// True iff the coordinate is in bounds and the cell is empty.
    #[must_use]
    pub fn is_legal(&self, row: usize, col: usize) -> bool {
        self.in_bounds(row, col) && self.cells[row * self.size + col].is_none()
    }

    /// True iff no empty cell remains.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.move_history.len() == self.size * self.size
    }

    /// True iff a winner has been recorded or the board is full.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.winner.is_some() || self.is_full()
    }

    /// Place a stone for the side to move.
    ///
    /// Rejects the move without mutation if the game is already over,
    /// the coordinate is out of bounds, or the cell is occupied. On
    /// success the stone is recorded, the win detector runs around it,
    /// and the side to move flips (even on the terminal move - no
    /// further placement is ever accepted afterwards).
    pub fn place(&mut self, row: usize, col: usize) -> Result<(), GameError> {
        if self.is_terminal() {
            return Err(GameError::GameAlreadyOver);
        }
        if !self.in_bounds(row, col) {
            return Err(GameError::OutOfBounds {
                row,
                col,
                size: self.size,
            });
        }
        if self.cells[row * self.size + col].is_some() {
            return Err(GameError::CellOccupied { row, col });
        }

        let player = self.current_player;
        self.cells[row * self.size + col] = Some(player);
        self.move_history.push(Pos::new(row, col));

        if let Some(line) = find_winning_line(self, Pos::new(row, col)) {
            self.winner = Some(player);
            self.winning_line = line;
        }

        self.current_player = player.opponent();
        Ok(())
    }

    /// All empty cells, in row-major order.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Pos> {
        let mut moves = Vec::with_capacity(self.size * self.size - self.move_history.len());
        for row in 0..self.size {
            for col in 0..self.size {
                if self.cells[row * self.size + col].is_none() {
                    moves.push(Pos::new(row, col));
                }
            }
        }
        moves
    }

    /// Iterate over occupied cells as `(Pos, Player)`, row-major.
    pub fn occupied(&self) -> impl Iterator<Item = (Pos, Player)> + '_ {
        self.cells.iter().enumerate().filter_map(move |(i, cell)| {
            cell.map(|p| (Pos::new(i / self.size, i % self.size), p))
        })
    }

    /// Clear the board back to its initial state.
    ///
    /// Empties every cell, clears the history and the recorded
    /// outcome, and hands the move back to Black.
    pub fn reset(&mut self) {
        self.cells.fill(None);
        self.move_history.clear();
        self.current_player = Player::Black;
        self.winner = None;
        self.winning_line.clear();
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_SIZE)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                let c = self.cell(row, col).map_or('.', Player::as_char);
                write!(f, "{c} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
