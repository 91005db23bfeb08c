//! Serializable game state snapshot.
//!
//! External layers (UIs, APIs) consume this shape verbatim, so its
//! field names and value encodings are a stable contract: the board is
//! size×size single characters ('.' empty, 'X' Black, 'O' White),
//! players serialize as lowercase names, coordinates as
//! `{row, col}` objects.

use serde::{Deserialize, Serialize};

use crate::board::{Board, Player, Pos};

/// Session outcome summary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    InProgress,
    HumanWin,
    EngineWin,
    Draw,
}

/// Point-in-time view of a session, safe to hand to external callers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// size×size grid of '.', 'X', 'O'.
    pub board: Vec<Vec<char>>,

    /// The side to move.
    pub current_player: Player,

    /// True iff a winner is set or the board is full.
    pub game_over: bool,

    /// Winner, if a five has been completed.
    pub winner: Option<Player>,

    /// The most recent move, if any.
    pub last_move: Option<Pos>,

    /// Coordinates of the winning run (empty without a winner).
    pub winning_line: Vec<Pos>,

    /// Number of stones placed so far.
    pub move_count: usize,

    /// Session outcome from the human's perspective.
    pub status: GameStatus,
}

impl GameSnapshot {
    /// Capture the current state of a board, classifying the outcome
    /// relative to `human`.
    #[must_use]
    pub fn capture(board: &Board, human: Player) -> Self {
        let size = board.size();
        let cells = (0..size)
            .map(|row| {
                (0..size)
                    .map(|col| board.cell(row, col).map_or('.', Player::as_char))
                    .collect()
            })
            .collect();

        let status = match board.winner() {
            Some(winner) if winner == human => GameStatus::HumanWin,
            Some(_) => GameStatus::EngineWin,
            None if board.is_full() => GameStatus::Draw,
            None => GameStatus::InProgress,
        };

        Self {
            board: cells,
            current_player: board.current_player(),
            game_over: board.is_terminal(),
            winner: board.winner(),
            last_move: board.last_move(),
            winning_line: board.winning_line().to_vec(),
            move_count: board.move_history().len(),
            status,
        }
    }
}

/// Result of a session mutation: a human-readable message plus the
/// state after the operation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveReport {
    pub message: String,
    pub state: GameSnapshot,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_fresh_board() {
        let board = Board::new(15);
        let snapshot = GameSnapshot::capture(&board, Player::Black);

        assert_eq!(snapshot.board.len(), 15);
        assert!(snapshot.board.iter().all(|row| row.len() == 15));
        assert!(snapshot
            .board
            .iter()
            .all(|row| row.iter().all(|&c| c == '.')));
        assert_eq!(snapshot.current_player, Player::Black);
        assert!(!snapshot.game_over);
        assert_eq!(snapshot.status, GameStatus::InProgress);
        assert_eq!(snapshot.move_count, 0);
        assert_eq!(snapshot.last_move, None);
    }

    #[test]
    fn test_capture_reflects_moves() {
        let mut board = Board::new(15);
        board.place(7, 7).unwrap();
        board.place(8, 8).unwrap();

        let snapshot = GameSnapshot::capture(&board, Player::Black);
        assert_eq!(snapshot.board[7][7], 'X');
        assert_eq!(snapshot.board[8][8], 'O');
        assert_eq!(snapshot.move_count, 2);
        assert_eq!(snapshot.last_move, Some(Pos::new(8, 8)));
    }

    #[test]
    fn test_capture_win_status_sides() {
        let mut board = Board::new(15);
        for col in 0..4 {
            board.place(0, col).unwrap(); // Black
            board.place(10, col).unwrap(); // White
        }
        board.place(0, 4).unwrap(); // Black wins

        let as_human_black = GameSnapshot::capture(&board, Player::Black);
        assert_eq!(as_human_black.status, GameStatus::HumanWin);
        assert_eq!(as_human_black.winner, Some(Player::Black));
        assert_eq!(as_human_black.winning_line.len(), 5);

        let as_human_white = GameSnapshot::capture(&board, Player::White);
        assert_eq!(as_human_white.status, GameStatus::EngineWin);
    }

    #[test]
    fn test_snapshot_json_shape() {
        let mut board = Board::new(5);
        board.place(2, 2).unwrap();

        let snapshot = GameSnapshot::capture(&board, Player::Black);
        let json = serde_json::to_value(&snapshot).unwrap();

        assert_eq!(json["board"][2][2], "X");
        assert_eq!(json["current_player"], "white");
        assert_eq!(json["game_over"], false);
        assert_eq!(json["winner"], serde_json::Value::Null);
        assert_eq!(json["last_move"]["row"], 2);
        assert_eq!(json["last_move"]["col"], 2);
        assert_eq!(json["move_count"], 1);
        assert_eq!(json["status"], "in_progress");
    }

    #[test]
    fn test_snapshot_round_trip() {
        let mut board = Board::new(15);
        board.place(7, 7).unwrap();

        let snapshot = GameSnapshot::capture(&board, Player::Black);
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameSnapshot = serde_json::from_str(&json).unwrap();

        assert_eq!(snapshot, back);
    }
}
