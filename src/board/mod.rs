//! Board representation: players, coordinates, and the mutable grid.

pub mod grid;
pub mod player;
pub mod pos;

pub use grid::{Board, DEFAULT_BOARD_SIZE};
pub use player::Player;
pub use pos::Pos;
