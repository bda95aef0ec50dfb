//! Rules integration tests: move generation, flipping and game end.

use rust_othello::core::{Board, Cell, Color, Move};
use rust_othello::rules::{self, count_flips, has_moves, is_legal, legal_moves, play_move, GameResult};
use rust_othello::OthelloError;

// =============================================================================
// Opening Tests
// =============================================================================

#[test]
fn test_first_move_and_reply() {
    let board = Board::new(8).unwrap();
    let board = play_move(&board, Color::Dark, Move::new(2, 3)).unwrap();

    assert_eq!(board.get(3, 3), Cell::Disc(Color::Dark));
    assert_eq!(rules::score(&board), (4, 1));

    let replies: Vec<Move> = legal_moves(&board, Color::Light).into_iter().collect();
    assert_eq!(replies, vec![Move::new(2, 2), Move::new(2, 4), Move::new(4, 2)]);
}

#[test]
fn test_opening_on_every_even_size() {
    for size in [4, 6, 8, 10, 12, 14, 16] {
        let board = Board::new(size).unwrap();
        assert_eq!(rules::score(&board), (2, 2));
        assert_eq!(legal_moves(&board, Color::Dark).len(), 4, "size {size}");
        assert_eq!(legal_moves(&board, Color::Light).len(), 4, "size {size}");
    }
    assert!(Board::new(5).is_err());
    assert!(Board::new(2).is_err());
    assert!(Board::new(18).is_err());
}

// =============================================================================
// Flipping Tests
// =============================================================================

fn star() -> Board {
    Board::from_rows(&[
        vec![1, 0, 1, 0, 1],
        vec![0, 2, 2, 2, 0],
        vec![1, 2, 0, 2, 1],
        vec![0, 2, 2, 2, 0],
        vec![1, 0, 1, 0, 1],
    ])
    .unwrap()
}

#[test]
fn test_flips_in_all_eight_directions() {
    let board = star();
    let center = Move::new(2, 2);
    assert_eq!(count_flips(&board, Color::Dark, center), 8);

    let after = play_move(&board, Color::Dark, center).unwrap();
    assert_eq!(rules::score(&after), (17, 0));
    assert!(rules::is_game_over(&after));
    assert_eq!(rules::result(&after), Some(GameResult::Winner(Color::Dark)));
}

#[test]
fn test_light_cannot_use_center() {
    let board = star();
    assert!(!is_legal(&board, Color::Light, Move::new(2, 2)));
    assert!(!has_moves(&board, Color::Light));
    assert_eq!(rules::next_to_move(&board, Color::Dark), Some(Color::Dark));
}

#[test]
fn test_illegal_moves_rejected() {
    let board = Board::new(8).unwrap();
    for mv in [Move::new(0, 0), Move::new(3, 3), Move::new(20, 1)] {
        match play_move(&board, Color::Dark, mv) {
            Err(OthelloError::IllegalMove { color, mv: rejected }) => {
                assert_eq!(color, Color::Dark);
                assert_eq!(rejected, mv);
            }
            other => panic!("expected IllegalMove for {mv}, got {other:?}"),
        }
    }
}

#[test]
fn test_play_move_leaves_input_untouched() {
    let board = Board::new(8).unwrap();
    let copy = board.clone();
    let _ = play_move(&board, Color::Dark, Move::new(3, 2)).unwrap();
    assert_eq!(board, copy);
}

// =============================================================================
// Literal Tests
// =============================================================================

#[test]
fn test_board_literal_orientation() {
    let board = Board::from_literal("[[0, 1], [2, 0]]").unwrap();
    assert_eq!(board.get(1, 0), Cell::Disc(Color::Dark));
    assert_eq!(board.get(0, 1), Cell::Disc(Color::Light));
    assert_eq!(board.to_literal(), "[[0, 1], [2, 0]]");

    let tuples = Board::from_literal("((0, 1), (2, 0))").unwrap();
    assert_eq!(tuples, board);
}

#[test]
fn test_board_literal_errors() {
    assert!(Board::from_literal("[[0, 1], [2]]").is_err());
    assert!(Board::from_literal("[[0, 3], [2, 0]]").is_err());
    assert!(Board::from_literal("not a board").is_err());
    assert!(Board::from_literal("[]").is_err());
}

// =============================================================================
// Game End Tests
// =============================================================================

#[test]
fn test_draw_on_full_board() {
    let board = Board::from_rows(&[vec![1, 2], vec![2, 1]]).unwrap();
    assert!(rules::is_game_over(&board));
    assert_eq!(rules::result(&board), Some(GameResult::Draw));
    assert_eq!(rules::next_to_move(&board, Color::Dark), None);
}

#[test]
fn test_game_not_over_while_one_side_can_move() {
    let board = Board::from_rows(&[
        vec![2, 1, 0, 0],
        vec![0, 0, 0, 0],
        vec![0, 0, 0, 0],
        vec![0, 0, 0, 0],
    ])
    .unwrap();
    assert!(!has_moves(&board, Color::Dark));
    assert!(has_moves(&board, Color::Light));
    assert!(!rules::is_game_over(&board));
    assert_eq!(rules::result(&board), None);
    assert_eq!(rules::next_to_move(&board, Color::Light), Some(Color::Light));
}
