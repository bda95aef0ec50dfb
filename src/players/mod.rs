//! Move-choosing agents.
//!
//! Players are trait-based so a match can pit any two against each other:
//! - `SearchPlayer`: Minimax or alpha-beta search
//! - `RandomPlayer`: Uniformly random legal move from a seeded `GameRng`
//! - `GreedyPlayer`: The move that flips the most discs

use log::info;

use crate::core::{Board, Color, GameRng, Move};
use crate::error::Result;
use crate::rules::{count_flips, legal_moves};
use crate::search::{SearchConfig, Searcher};

/// An agent that picks a move for a color.
pub trait Player: Send {
    /// Display name used in logs and errors.
    fn name(&self) -> &str;

    /// Choose a move, or `None` to pass.
    ///
    /// A player must return a legal move whenever one exists.
    fn choose_move(&mut self, board: &Board, color: Color) -> Option<Move>;
}

// =============================================================================
// Search
// =============================================================================

/// Player backed by a [`Searcher`].
pub struct SearchPlayer {
    name: String,
    searcher: Searcher,
}

impl SearchPlayer {
    pub fn new(config: SearchConfig) -> Result<Self> {
        let name = format!(
            "{}(depth={})",
            config.algorithm,
            config.depth_limit.map_or_else(|| "inf".to_string(), |d| d.to_string())
        );
        Ok(Self {
            name,
            searcher: Searcher::new(config)?,
        })
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn searcher(&self) -> &Searcher {
        &self.searcher
    }
}

impl Player for SearchPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&mut self, board: &Board, color: Color) -> Option<Move> {
        let result = self.searcher.search(board, color);
        if let Some(mv) = result.best_move {
            info!("{} ({color}) plays {mv} value={}", self.name, result.value);
        }
        result.best_move
    }
}

// =============================================================================
// Random
// =============================================================================

/// Plays a uniformly random legal move.
pub struct RandomPlayer {
    rng: GameRng,
}

impl RandomPlayer {
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl Player for RandomPlayer {
    fn name(&self) -> &str {
        "random"
    }

    fn choose_move(&mut self, board: &Board, color: Color) -> Option<Move> {
        let moves = legal_moves(board, color);
        self.rng.choose(&moves).copied()
    }
}

// =============================================================================
// Greedy
// =============================================================================

/// Plays the move that flips the most discs, the earliest one on ties.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyPlayer;

impl Player for GreedyPlayer {
    fn name(&self) -> &str {
        "greedy"
    }

    fn choose_move(&mut self, board: &Board, color: Color) -> Option<Move> {
        let mut best: Option<(Move, usize)> = None;
        for mv in legal_moves(board, color) {
            let flips = count_flips(board, color, mv);
            if best.map_or(true, |(_, most)| flips > most) {
                best = Some((mv, flips));
            }
        }
        best.map(|(mv, _)| mv)
    }
}
