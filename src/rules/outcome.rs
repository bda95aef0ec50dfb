//! Scoring, turn order and game results.

use serde::{Deserialize, Serialize};

use super::moves::has_moves;
use crate::core::{Board, Color};

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    Winner(Color),
    Draw,
}

impl GameResult {
    /// Check if a color won.
    #[must_use]
    pub fn is_winner(&self, color: Color) -> bool {
        matches!(self, GameResult::Winner(c) if *c == color)
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Winner(color) => write!(f, "{color} wins"),
            GameResult::Draw => f.write_str("draw"),
        }
    }
}

/// Disc counts as `(dark, light)`.
#[must_use]
pub fn score(board: &Board) -> (u32, u32) {
    (board.count(Color::Dark), board.count(Color::Light))
}

/// The game is over when neither side can place a disc.
#[must_use]
pub fn is_game_over(board: &Board) -> bool {
    !has_moves(board, Color::Dark) && !has_moves(board, Color::Light)
}

/// Returns `Some(result)` once the game has ended, `None` while it continues.
#[must_use]
pub fn result(board: &Board) -> Option<GameResult> {
    if !is_game_over(board) {
        return None;
    }
    let (dark, light) = score(board);
    Some(match dark.cmp(&light) {
        std::cmp::Ordering::Greater => GameResult::Winner(Color::Dark),
        std::cmp::Ordering::Less => GameResult::Winner(Color::Light),
        std::cmp::Ordering::Equal => GameResult::Draw,
    })
}

/// Side to move after `just_moved` has played or passed.
///
/// The opponent moves if it can; otherwise the same side moves again; if
/// neither can move the game is over and `None` is returned.
#[must_use]
pub fn next_to_move(board: &Board, just_moved: Color) -> Option<Color> {
    let opponent = just_moved.opponent();
    if has_moves(board, opponent) {
        Some(opponent)
    } else if has_moves(board, just_moved) {
        Some(just_moved)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult::Winner(Color::Light);
        assert!(!result.is_winner(Color::Dark));
        assert!(result.is_winner(Color::Light));
        assert!(!GameResult::Draw.is_winner(Color::Dark));
        assert_eq!(result.to_string(), "light wins");
    }

    #[test]
    fn test_opening_not_over() {
        let board = Board::new(8).unwrap();
        assert_eq!(score(&board), (2, 2));
        assert!(!is_game_over(&board));
        assert_eq!(result(&board), None);
        assert_eq!(next_to_move(&board, Color::Dark), Some(Color::Light));
    }

    #[test]
    fn test_full_board_results() {
        let dark_wins = Board::from_rows(&[vec![1, 1], vec![1, 2]]).unwrap();
        assert_eq!(result(&dark_wins), Some(GameResult::Winner(Color::Dark)));
        assert_eq!(next_to_move(&dark_wins, Color::Light), None);

        let draw = Board::from_rows(&[vec![1, 2], vec![2, 1]]).unwrap();
        assert_eq!(result(&draw), Some(GameResult::Draw));
    }

    #[test]
    fn test_pass_keeps_turn() {
        // Light has no disc to close a line with; dark can still move.
        let board = Board::from_rows(&[
            vec![1, 2, 0],
            vec![0, 0, 0],
            vec![0, 0, 0],
        ])
        .unwrap();
        assert!(!has_moves(&board, Color::Light));
        assert_eq!(next_to_move(&board, Color::Dark), Some(Color::Dark));
    }
}
