//! Protocol integration tests driving a `Session` with in-memory buffers.

use rust_othello::core::{Board, Color, GameRng, Move};
use rust_othello::game::random_opening;
use rust_othello::protocol::{Session, SessionSummary};
use rust_othello::rules::{is_legal, legal_moves};
use rust_othello::search::SearchConfig;
use rust_othello::{EvaluatorKind, OthelloError};

fn run_session(input: &str, config: SearchConfig) -> (SessionSummary, Vec<String>) {
    let mut output = Vec::new();
    let summary = Session::new(input.as_bytes(), &mut output)
        .with_config(config)
        .run()
        .unwrap();
    let lines = String::from_utf8(output).unwrap().lines().map(str::to_string).collect();
    (summary, lines)
}

fn parse_move(line: &str) -> Move {
    let mut parts = line.split_whitespace().map(|p| p.parse::<u8>().unwrap());
    Move::new(parts.next().unwrap(), parts.next().unwrap())
}

// =============================================================================
// Session Tests
// =============================================================================

#[test]
fn test_answers_are_legal_for_every_board() {
    let mut rng = GameRng::new(31);
    let mut boards = Vec::new();
    while boards.len() < 5 {
        let (board, _) = random_opening(8, boards.len() * 4 + 1, &mut rng).unwrap();
        if !legal_moves(&board, Color::Light).is_empty() {
            boards.push(board);
        }
    }

    let mut input = String::from("2,3,0,1,1\n");
    for board in &boards {
        let (dark, light) = (board.count(Color::Dark), board.count(Color::Light));
        input.push_str(&format!("SCORE {dark} {light}\n{}\n", board.to_literal()));
    }
    input.push_str("FINAL 40 24\n");

    let (summary, lines) = run_session(&input, SearchConfig::default());
    assert_eq!(lines[0], "Othello AI");
    assert_eq!(lines.len(), boards.len() + 1);
    assert_eq!(summary.moves, boards.len());
    assert_eq!(summary.color, Color::Light);
    assert_eq!(summary.final_score, Some((40, 24)));

    for (board, line) in boards.iter().zip(&lines[1..]) {
        assert!(is_legal(board, Color::Light, parse_move(line)), "{line} on {}", board.to_literal());
    }
}

#[test]
fn test_handshake_overrides_config() {
    // The file asks for alpha-beta at depth 8; the manager asks for minimax at 1.
    let config = SearchConfig::default()
        .with_depth_limit(Some(8))
        .with_evaluator(EvaluatorKind::Heuristic);
    let board = Board::new(8).unwrap();
    let input = format!("1,1,1,0,0\nSCORE 2 2\n{}\n", board.to_literal());

    let (summary, lines) = run_session(&input, config);
    assert_eq!(summary.moves, 1);
    assert!(is_legal(&board, Color::Dark, parse_move(&lines[1])));
}

#[test]
fn test_blank_lines_ignored() {
    let board = Board::new(4).unwrap();
    let input = format!("\n1,2,0,0,0\n\nSCORE 2 2\n\n{}\n\nFINAL 3 1\n", board.to_literal());
    let (summary, lines) = run_session(&input, SearchConfig::default());
    assert_eq!(lines, vec!["Othello AI", "0 1"]);
    assert_eq!(summary.final_score, Some((3, 1)));
}

#[test]
fn test_protocol_error_reports_line() {
    let mut output = Vec::new();
    let err = Session::new("1,2,0,0,0\nSCORE 2 2\n[[9, 9], [9, 9]]\n".as_bytes(), &mut output)
        .run()
        .unwrap_err();

    match err {
        OthelloError::Protocol { line, .. } => assert_eq!(line, "[[9, 9], [9, 9]]"),
        other => panic!("expected protocol error, got {other}"),
    }
}
