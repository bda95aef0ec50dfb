//! Game tree search for rust-othello.
//!
//! ## Overview
//!
//! The searcher picks a move for one color by searching the game tree below
//! the current board:
//!
//! - **Minimax**: Visits every successor down to the depth limit
//! - **Alpha-Beta**: Same root value, skipping subtrees that cannot matter
//! - **Caching**: Transposition table keyed on board and node kind
//! - **Ordering**: Alpha-beta tries the most promising successors first
//! - **Serializable**: Config, results and statistics can be saved/loaded
//!
//! Passes are real plies: a side without a legal move hands the turn over,
//! and the game ends only when neither side can move.
//!
//! ## Usage
//!
//! ```rust
//! use rust_othello::core::{Board, Color};
//! use rust_othello::search::{Algorithm, SearchConfig, Searcher};
//!
//! let config = SearchConfig::default()
//!     .with_algorithm(Algorithm::AlphaBeta)
//!     .with_depth_limit(Some(3))
//!     .with_caching(true)
//!     .with_ordering(true);
//! let mut searcher = Searcher::new(config).unwrap();
//!
//! let board = Board::new(8).unwrap();
//! let result = searcher.search(&board, Color::Dark);
//! assert!(result.best_move.is_some());
//! println!("value {} after {} nodes", result.value, result.stats.nodes);
//! ```

pub mod config;
pub mod ordering;
pub mod search;
pub mod stats;
pub mod tt;

// Re-export main types
pub use config::{depth_limit_from_wire, depth_limit_to_wire, Algorithm, SearchConfig};
pub use ordering::order_successors;
pub use search::{SearchResult, Searcher};
pub use stats::SearchStats;
pub use tt::{Bound, Entry, NodeKind, TableStats, TranspositionTable, UNLIMITED_DEPTH};
