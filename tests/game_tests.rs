//! Match integration tests.

use rust_othello::core::{Board, Color, GameRng};
use rust_othello::game::{GameRecord, Match};
use rust_othello::players::{GreedyPlayer, RandomPlayer, SearchPlayer};
use rust_othello::rules::{self, GameResult};
use rust_othello::search::{Algorithm, SearchConfig};

fn search_player(depth: u32) -> Box<SearchPlayer> {
    Box::new(
        SearchPlayer::new(
            SearchConfig::default()
                .with_algorithm(Algorithm::AlphaBeta)
                .with_depth_limit(Some(depth))
                .with_caching(true)
                .with_ordering(true),
        )
        .unwrap(),
    )
}

fn check_record(record: &GameRecord) {
    let board = Board::from_rows(&record.final_board).unwrap();
    assert!(rules::is_game_over(&board));
    assert_eq!(record.final_score, rules::score(&board));
    assert_eq!(record.replay(&Board::new(record.size).unwrap()).unwrap(), board);

    // Passes only happen when the side had nothing to play.
    let placements = record.moves().count() as u32;
    assert_eq!(placements + 4, record.final_score.0 + record.final_score.1);
}

// =============================================================================
// Full Game Tests
// =============================================================================

#[test]
fn test_search_vs_random() {
    let record = Match::new(search_player(2), Box::new(RandomPlayer::new(GameRng::new(9))))
        .with_size(6)
        .play()
        .unwrap();

    check_record(&record);
    assert_eq!(record.dark, "alphabeta(depth=2)");
    assert_eq!(record.light, "random");
}

#[test]
fn test_greedy_mirror_is_deterministic() {
    let a = Match::new(Box::new(GreedyPlayer), Box::new(GreedyPlayer))
        .with_size(8)
        .play()
        .unwrap();
    let b = Match::new(Box::new(GreedyPlayer), Box::new(GreedyPlayer))
        .with_size(8)
        .play()
        .unwrap();

    check_record(&a);
    assert_eq!(a, b);
}

#[test]
fn test_random_players_replay_from_seed() {
    let play = |seed| {
        let mut rng = GameRng::new(seed);
        Match::new(
            Box::new(RandomPlayer::new(rng.fork())),
            Box::new(RandomPlayer::new(rng.fork())),
        )
        .with_size(6)
        .play()
        .unwrap()
    };

    let first = play(77);
    check_record(&first);
    assert_eq!(first, play(77));
}

#[test]
fn test_record_json_roundtrip() {
    let record = Match::new(Box::new(GreedyPlayer), search_player(1))
        .with_size(4)
        .play()
        .unwrap();

    let json = serde_json::to_string(&record).unwrap();
    let parsed: GameRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, record);

    match parsed.result {
        GameResult::Winner(Color::Dark) => assert!(parsed.final_score.0 > parsed.final_score.1),
        GameResult::Winner(Color::Light) => assert!(parsed.final_score.1 > parsed.final_score.0),
        GameResult::Draw => assert_eq!(parsed.final_score.0, parsed.final_score.1),
    }
}

#[test]
fn test_invalid_size_rejected() {
    assert!(Match::new(Box::new(GreedyPlayer), Box::new(GreedyPlayer))
        .with_size(7)
        .play()
        .is_err());
}
