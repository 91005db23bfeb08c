//! Positional evaluation by length-5 window scanning.
//!
//! Every contiguous five-cell window on every row, column, diagonal,
//! and anti-diagonal is classified by how many of the target player's
//! stones and empty cells it contains. A window holding any opponent
//! stone cannot score for the target (the opponent's own prospects are
//! counted in a separate pass for the opponent).
//!
//! "Open" means the cells immediately before and after the window are
//! both in-bounds and empty. The board edge counts as closed for every
//! pattern class.

use crate::board::{Board, Player, Pos};
use crate::rules::AXES;

use super::patterns::PatternScore;

/// Sum of pattern scores over all windows for `player`.
#[must_use]
pub fn evaluate(board: &Board, player: Player) -> i32 {
    let size = board.size();
    let mut score = 0;

    for (dr, dc) in AXES {
        for row in 0..size {
            for col in 0..size {
                let start = Pos::new(row, col);
                // The window must fit on the board.
                if start.offset(4 * dr, 4 * dc, size).is_none() {
                    continue;
                }
                score += score_window(board, start, dr, dc, player);
            }
        }
    }

    score
}

/// Board-level score for the search: own prospects minus the
/// opponent's.
#[must_use]
pub fn net_score(board: &Board, player: Player) -> i32 {
    evaluate(board, player) - evaluate(board, player.opponent())
}

/// Classify and score one five-cell window starting at `start`.
fn score_window(board: &Board, start: Pos, dr: isize, dc: isize, player: Player) -> i32 {
    let size = board.size();
    let mut own = 0;
    let mut empty = 0;

    for k in 0..5 {
        // Window fit was checked by the caller.
        let Some(p) = start.offset(k * dr, k * dc, size) else {
            return 0;
        };
        match board.cell(p.row, p.col) {
            Some(c) if c == player => own += 1,
            Some(_) => return 0, // opponent stone voids the window
            None => empty += 1,
        }
    }

    match (own, empty) {
        (5, _) => PatternScore::FIVE,
        (4, 1) => {
            if is_open(board, start, dr, dc) {
                PatternScore::OPEN_FOUR
            } else {
                PatternScore::FOUR
            }
        }
        (3, 2) => {
            if is_open(board, start, dr, dc) {
                PatternScore::OPEN_THREE
            } else {
                PatternScore::THREE
            }
        }
        (2, 3) => {
            if is_open(board, start, dr, dc) {
                PatternScore::OPEN_TWO
            } else {
                PatternScore::TWO
            }
        }
        _ => 0,
    }
}

/// True iff both cells immediately outside the window are in-bounds
/// and empty. Out-of-bounds is closed.
fn is_open(board: &Board, start: Pos, dr: isize, dc: isize) -> bool {
    let size = board.size();

    let before_open = start
        .offset(-dr, -dc, size)
        .is_some_and(|p| board.cell(p.row, p.col).is_none());
    let after_open = start
        .offset(5 * dr, 5 * dc, size)
        .is_some_and(|p| board.cell(p.row, p.col).is_none());

    before_open && after_open
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place_all(board: &mut Board, player: Player, stones: &[(usize, usize)]) {
        for &(row, col) in stones {
            board.set_current_player(player);
            board.place(row, col).unwrap();
        }
    }

    #[test]
    fn test_empty_board_scores_zero() {
        let board = Board::new(15);
        assert_eq!(evaluate(&board, Player::Black), 0);
        assert_eq!(net_score(&board, Player::Black), 0);
    }

    #[test]
    fn test_single_stone_scores_zero() {
        // One stone never fills two cells of any window.
        let mut board = Board::new(15);
        place_all(&mut board, Player::Black, &[(7, 7)]);
        assert_eq!(evaluate(&board, Player::Black), 0);
    }

    #[test]
    fn test_open_three_beats_closed_three() {
        let mut open = Board::new(15);
        place_all(&mut open, Player::Black, &[(7, 5), (7, 6), (7, 7)]);

        let mut closed = Board::new(15);
        place_all(&mut closed, Player::Black, &[(7, 5), (7, 6), (7, 7)]);
        place_all(&mut closed, Player::White, &[(7, 4), (7, 8)]);

        assert!(evaluate(&open, Player::Black) > evaluate(&closed, Player::Black));
    }

    #[test]
    fn test_edge_three_is_closed() {
        // A three flush against the left edge: the window starting at
        // column 0 has no in-bounds predecessor, so it is closed.
        let mut edge = Board::new(15);
        place_all(&mut edge, Player::Black, &[(7, 0), (7, 1), (7, 2)]);

        let mut center = Board::new(15);
        place_all(&mut center, Player::Black, &[(7, 5), (7, 6), (7, 7)]);

        assert!(evaluate(&center, Player::Black) > evaluate(&edge, Player::Black));
    }

    #[test]
    fn test_opponent_stone_voids_window() {
        let mut board = Board::new(15);
        place_all(&mut board, Player::Black, &[(7, 5), (7, 6), (7, 7), (7, 8)]);
        let before = evaluate(&board, Player::Black);

        // Block one end: every window spanning the blocker is voided.
        place_all(&mut board, Player::White, &[(7, 9)]);
        let after = evaluate(&board, Player::Black);

        assert!(after < before);
        assert!(after > 0, "the four still scores through open windows");
    }

    #[test]
    fn test_net_score_is_antisymmetric() {
        let mut board = Board::new(15);
        place_all(&mut board, Player::Black, &[(7, 5), (7, 6), (7, 7)]);
        place_all(&mut board, Player::White, &[(9, 9), (9, 10)]);

        assert_eq!(
            net_score(&board, Player::Black),
            -net_score(&board, Player::White)
        );
        assert!(net_score(&board, Player::Black) > 0);
    }

    #[test]
    fn test_diagonal_windows_score() {
        let mut board = Board::new(15);
        place_all(&mut board, Player::Black, &[(5, 5), (6, 6), (7, 7)]);
        assert!(evaluate(&board, Player::Black) > 0);

        let mut anti = Board::new(15);
        place_all(&mut anti, Player::Black, &[(7, 5), (6, 6), (5, 7)]);
        assert!(evaluate(&anti, Player::Black) > 0);
    }

    #[test]
    fn test_rotation_symmetry_with_swapped_players() {
        // Evaluating a board for Black equals evaluating its
        // 180-degree rotation with colors swapped for White.
        let size = 15;
        let black = [(7usize, 5usize), (7, 6), (7, 7), (3, 3)];
        let white = [(9usize, 9usize), (9, 10), (0, 0)];

        let mut board = Board::new(size);
        place_all(&mut board, Player::Black, &black);
        place_all(&mut board, Player::White, &white);

        let mut rotated = Board::new(size);
        let rot = |(r, c): (usize, usize)| (size - 1 - r, size - 1 - c);
        place_all(
            &mut rotated,
            Player::White,
            &black.map(rot),
        );
        place_all(
            &mut rotated,
            Player::Black,
            &white.map(rot),
        );

        assert_eq!(
            evaluate(&board, Player::Black),
            evaluate(&rotated, Player::White)
        );
        assert_eq!(
            net_score(&board, Player::Black),
            net_score(&rotated, Player::White)
        );
    }

    #[test]
    fn test_five_dominates_everything_else() {
        let mut five = Board::new(15);
        place_all(
            &mut five,
            Player::Black,
            &[(7, 3), (7, 4), (7, 5), (7, 6), (7, 7)],
        );

        let mut four = Board::new(15);
        place_all(&mut four, Player::Black, &[(7, 3), (7, 4), (7, 5), (7, 6)]);

        assert!(evaluate(&five, Player::Black) > evaluate(&four, Player::Black));
    }
}
