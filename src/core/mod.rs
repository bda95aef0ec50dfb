//! Core types: colors, cells, moves, the board and the RNG.
//!
//! Nothing here knows the rules of the game; `rules` builds on these.

pub mod board;
pub mod color;
pub mod rng;

pub use board::{Board, Cell, Move, DEFAULT_SIZE, MAX_SIZE, MIN_SIZE};
pub use color::{Color, ColorMap};
pub use rng::GameRng;
