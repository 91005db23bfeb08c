//! Depth-bounded minimax with alpha-beta pruning.
//!
//! The search clones the board at every node, applies a candidate
//! move, and recurses; the caller's live board is never mutated.
//! Decided positions short-circuit to +/-`WIN_SCORE`, which dominates
//! every heuristic value, so a forced win is always preferred over a
//! heuristic-only line. Ties are broken by candidate encounter order
//! (first seen wins); `candidate_moves` keeps that order stable.

use crate::board::{Board, Player, Pos};
use crate::eval::{net_score, WIN_SCORE};

use super::candidates::candidate_moves;

/// Find an immediately decisive move for the side to move.
///
/// A move that wins on the spot is taken; otherwise a move the
/// opponent would win with next turn is blocked. Runs before any
/// heuristic search and overrides its result.
#[must_use]
pub fn find_critical_move(board: &Board) -> Option<Pos> {
    let player = board.current_player();

    find_winning_move(board, player).or_else(|| find_winning_move(board, player.opponent()))
}

/// Find a move that would immediately win for `player`, scanning every
/// legal cell under a hypothetical turn swap.
#[must_use]
pub fn find_winning_move(board: &Board, player: Player) -> Option<Pos> {
    for pos in board.legal_moves() {
        let mut probe = board.clone();
        probe.set_current_player(player);
        if probe.place(pos.row, pos.col).is_ok() && probe.winner() == Some(player) {
            return Some(pos);
        }
    }
    None
}

/// Search the candidate moves to `depth` plies and return the best
/// move with its score, maximizing for the side to move.
///
/// Returns `None` only when `candidates` is empty.
#[must_use]
pub fn search_best_move(board: &Board, depth: u32, candidates: &[Pos]) -> Option<(Pos, i32)> {
    let player = board.current_player();
    let mut best: Option<(Pos, i32)> = None;
    let mut alpha = i32::MIN;
    let beta = i32::MAX;

    for &pos in candidates {
        let mut child = board.clone();
        if child.place(pos.row, pos.col).is_err() {
            continue;
        }

        let score = minimax(&child, depth.saturating_sub(1), alpha, beta, false, player);

        // Strict improvement only: first-seen wins ties.
        if best.map_or(true, |(_, s)| score > s) {
            best = Some((pos, score));
        }
        alpha = alpha.max(score);
    }

    best
}

/// Minimax recursion with alpha-beta pruning, scored for `agent`.
fn minimax(
    board: &Board,
    depth: u32,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    agent: Player,
) -> i32 {
    if let Some(winner) = board.winner() {
        return if winner == agent { WIN_SCORE } else { -WIN_SCORE };
    }
    if depth == 0 || board.is_terminal() {
        return net_score(board, agent);
    }

    let candidates = candidate_moves(board);

    if maximizing {
        let mut best = i32::MIN;
        for pos in candidates {
            let mut child = board.clone();
            if child.place(pos.row, pos.col).is_err() {
                continue;
            }
            let score = minimax(&child, depth - 1, alpha, beta, false, agent);
            best = best.max(score);
            alpha = alpha.max(score);
            if beta <= alpha {
                break;
            }
        }
        best
    } else {
        let mut best = i32::MAX;
        for pos in candidates {
            let mut child = board.clone();
            if child.place(pos.row, pos.col).is_err() {
                continue;
            }
            let score = minimax(&child, depth - 1, alpha, beta, true, agent);
            best = best.min(score);
            beta = beta.min(score);
            if beta <= alpha {
                break;
            }
        }
        best
    }
}
