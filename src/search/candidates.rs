//! Candidate move generation.
//!
//! Exhaustive search over every empty cell of a 15x15 board is
//! infeasible at depth >= 2, so the search branches only over empty
//! cells within Chebyshev distance 2 of an existing stone. The
//! resulting order is deterministic: occupied cells are visited
//! row-major and each fresh empty neighbor is appended in neighborhood
//! scan order, which keeps the search's first-seen tie-break stable.

use rustc_hash::FxHashSet;

use crate::board::{Board, Pos};

/// Neighborhood radius around occupied cells (Chebyshev distance).
const CANDIDATE_RADIUS: isize = 2;

/// Empty cells near existing stones, deduplicated, in a stable order.
///
/// Falls back to the full legal-move list when no neighbor exists
/// (empty board or pathological state), so a non-terminal board always
/// yields at least one candidate.
#[must_use]
pub fn candidate_moves(board: &Board) -> Vec<Pos> {
    let size = board.size();
    let mut seen: FxHashSet<Pos> = FxHashSet::default();
    let mut candidates = Vec::new();

    for (pos, _) in board.occupied() {
        for dr in -CANDIDATE_RADIUS..=CANDIDATE_RADIUS {
            for dc in -CANDIDATE_RADIUS..=CANDIDATE_RADIUS {
                let Some(neighbor) = pos.offset(dr, dc, size) else {
                    continue;
                };
                if board.cell(neighbor.row, neighbor.col).is_none() && seen.insert(neighbor) {
                    candidates.push(neighbor);
                }
            }
        }
    }

    if candidates.is_empty() {
        return board.legal_moves();
    }

    candidates
}
