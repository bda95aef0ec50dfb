//! In-process matches between two players.
//!
//! A match drives the rules directly:
//! - Dark moves first on the standard opening (or a supplied position)
//! - A side is only asked for a move when it has one, otherwise it passes
//! - The game ends when neither side can move
//!
//! Every ply is recorded so a finished match can be replayed or written out
//! as JSON.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::core::{Board, Color, ColorMap, GameRng, Move, DEFAULT_SIZE};
use crate::error::{OthelloError, Result};
use crate::players::Player;
use crate::rules::{self, has_moves, is_legal, legal_moves, play_move, GameResult};

/// One half-move: a placement or a pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ply {
    pub color: Color,
    /// `None` for a pass.
    pub mv: Option<Move>,
}

/// Full record of a finished match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub size: usize,
    pub dark: String,
    pub light: String,
    pub plies: Vec<Ply>,
    /// `(dark, light)` disc counts.
    pub final_score: (u32, u32),
    pub result: GameResult,
    pub final_board: Vec<Vec<u8>>,
}

impl GameRecord {
    #[must_use]
    pub fn winner(&self) -> Option<Color> {
        match self.result {
            GameResult::Winner(color) => Some(color),
            GameResult::Draw => None,
        }
    }

    /// Placements only, passes skipped.
    pub fn moves(&self) -> impl Iterator<Item = (Color, Move)> + '_ {
        self.plies.iter().filter_map(|ply| ply.mv.map(|mv| (ply.color, mv)))
    }

    /// Rebuild the final board by replaying every placement from `start`.
    pub fn replay(&self, start: &Board) -> Result<Board> {
        self.moves()
            .try_fold(start.clone(), |board, (color, mv)| play_move(&board, color, mv))
    }
}

/// A match between two players.
pub struct Match {
    players: ColorMap<Box<dyn Player>>,
    size: usize,
    start: Option<Board>,
}

impl Match {
    pub fn new(dark: Box<dyn Player>, light: Box<dyn Player>) -> Self {
        Self {
            players: ColorMap::from_pair(dark, light),
            size: DEFAULT_SIZE,
            start: None,
        }
    }

    /// Board side for the standard opening.
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Start from a given position instead of the standard opening.
    pub fn with_start(mut self, board: Board) -> Self {
        self.size = board.size();
        self.start = Some(board);
        self
    }

    /// Play the match to the end, dark first.
    pub fn play(mut self) -> Result<GameRecord> {
        let mut board = match self.start.take() {
            Some(board) => board,
            None => Board::new(self.size)?,
        };
        let names = ColorMap::new(|color| self.players[color].name().to_string());
        info!(
            "match {} (dark) vs {} (light) on {}x{}",
            names[Color::Dark],
            names[Color::Light],
            board.size(),
            board.size()
        );

        let mut plies = Vec::new();
        let mut to_move = Color::Dark;
        while !rules::is_game_over(&board) {
            if !has_moves(&board, to_move) {
                debug!("{to_move} passes");
                plies.push(Ply { color: to_move, mv: None });
                to_move = to_move.opponent();
                continue;
            }

            let player = &mut self.players[to_move];
            let mv = player.choose_move(&board, to_move).ok_or_else(|| OthelloError::IllegalPass {
                player: player.name().to_string(),
                color: to_move,
            })?;
            if !is_legal(&board, to_move, mv) {
                debug!("{} offered {mv}, legal: {:?}", player.name(), legal_moves(&board, to_move));
                return Err(OthelloError::IllegalMove { color: to_move, mv });
            }

            board = play_move(&board, to_move, mv)?;
            plies.push(Ply { color: to_move, mv: Some(mv) });
            to_move = to_move.opponent();
        }

        let final_score = rules::score(&board);
        let result = rules::result(&board).unwrap_or(GameResult::Draw);
        info!(
            "match over: {result} ({}-{}) after {} plies",
            final_score.0,
            final_score.1,
            plies.len()
        );

        Ok(GameRecord {
            size: board.size(),
            dark: names[Color::Dark].clone(),
            light: names[Color::Light].clone(),
            plies,
            final_score,
            result,
            final_board: board.to_rows(),
        })
    }
}

/// Play `plies` random placements from the standard opening.
///
/// Stops early if the game ends. Used to spread test and benchmark positions
/// over the middle game.
pub fn random_opening(size: usize, plies: usize, rng: &mut GameRng) -> Result<(Board, Color)> {
    let mut board = Board::new(size)?;
    let mut to_move = Color::Dark;
    for _ in 0..plies {
        let moves = legal_moves(&board, to_move);
        let Some(&mv) = rng.choose(&moves) else {
            if !has_moves(&board, to_move.opponent()) {
                break;
            }
            to_move = to_move.opponent();
            continue;
        };
        board = play_move(&board, to_move, mv)?;
        to_move = to_move.opponent();
    }
    Ok((board, to_move))
}
