//! Game rules: win and draw detection.

pub mod win;

pub use win::{find_winning_line, is_draw, AXES};
