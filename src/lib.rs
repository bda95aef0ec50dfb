//! # rust-othello
//!
//! An Othello (Reversi) engine built around classic game tree search.
//!
//! ## Design Principles
//!
//! 1. **Immutable Boards**: Playing a move returns a new `Board`; search
//!    never undoes moves.
//!
//! 2. **Any Square Board**: Rules work on every side from 1 to 16. The
//!    standard opening needs an even side of at least 4.
//!
//! 3. **Configuration Over Convention**: Algorithm, depth, caching, ordering
//!    and evaluator are all chosen through `SearchConfig`.
//!
//! ## Architecture
//!
//! - **Minimax / Alpha-Beta**: Fail-soft alpha-beta returns the same root
//!   value as plain minimax while visiting fewer nodes.
//!
//! - **Transposition Table**: Values cached per board and node kind, reused
//!   only at the same remaining depth.
//!
//! - **Passes Are Plies**: A side without a move passes; the game ends when
//!   neither side can move.
//!
//! ## Modules
//!
//! - `core`: Colors, board, moves, RNG
//! - `rules`: Move generation, flipping, scoring, game end
//! - `eval`: Utility and heuristic evaluators
//! - `search`: Minimax, alpha-beta, transposition table, ordering
//! - `players`: Search, random and greedy agents
//! - `game`: In-process matches and game records
//! - `protocol`: Line protocol for an external game manager
//! - `config`: TOML agent configuration

pub mod config;
pub mod core;
pub mod error;
pub mod eval;
pub mod game;
pub mod players;
pub mod protocol;
pub mod rules;
pub mod search;

// Re-export commonly used types
pub use crate::core::{Board, Cell, Color, ColorMap, GameRng, Move};

pub use crate::error::{OthelloError, Result};

pub use crate::rules::{legal_moves, play_move, GameResult};

pub use crate::eval::{Evaluator, EvaluatorKind};

pub use crate::search::{Algorithm, SearchConfig, SearchResult, SearchStats, Searcher};

pub use crate::players::{GreedyPlayer, Player, RandomPlayer, SearchPlayer};

pub use crate::game::{GameRecord, Match, Ply};

pub use crate::protocol::{Session, SessionSummary};

pub use crate::config::AgentConfig;
