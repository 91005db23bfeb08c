//! Win and draw detection.
//!
//! A win is checked around the just-placed stone only: for each of the
//! four axes (horizontal, vertical, diagonal, anti-diagonal) the run of
//! same-colored stones through the placement is counted by walking
//! outward in both signed directions. The first axis reaching five or
//! more wins; runs on different axes are never merged.

use smallvec::SmallVec;

use crate::board::{Board, Player, Pos};

/// The four scan axes as (row, col) unit steps.
pub const AXES: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Find the winning run through `pos`, if the stone there completes one.
///
/// Returns the full contiguous coordinate set of the first winning
/// axis, ordered along the axis. Returns `None` when `pos` is empty or
/// no axis reaches five.
#[must_use]
pub fn find_winning_line(board: &Board, pos: Pos) -> Option<SmallVec<[Pos; 8]>> {
    let player = board.cell(pos.row, pos.col)?;

    for (dr, dc) in AXES {
        let line = run_through(board, pos, player, dr, dc);
        if line.len() >= 5 {
            return Some(line);
        }
    }

    None
}

/// True iff the board is completely occupied with no recorded winner.
#[must_use]
pub fn is_draw(board: &Board) -> bool {
    board.winner().is_none() && board.is_full()
}

/// Collect the contiguous run of `player` stones through `pos` along
/// one axis, ordered from the negative end to the positive end.
fn run_through(
    board: &Board,
    pos: Pos,
    player: Player,
    dr: isize,
    dc: isize,
) -> SmallVec<[Pos; 8]> {
    let size = board.size();
    let mut line: SmallVec<[Pos; 8]> = SmallVec::new();

    // Walk to the negative end of the run first.
    let mut start = pos;
    while let Some(prev) = start.offset(-dr, -dc, size) {
        if board.cell(prev.row, prev.col) != Some(player) {
            break;
        }
        start = prev;
    }

    // Then collect forward while the stones match.
    let mut cursor = Some(start);
    while let Some(p) = cursor {
        if board.cell(p.row, p.col) != Some(player) {
            break;
        }
        line.push(p);
        cursor = p.offset(dr, dc, size);
    }

    line
}
