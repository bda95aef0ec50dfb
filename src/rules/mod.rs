//! Othello rules.
//!
//! - `moves`: flip lines, legal move generation and move application
//! - `outcome`: score, turn order with passes, game results
//!
//! Boards are never mutated in place by the rules; playing a move returns
//! a new board.

pub mod moves;
pub mod outcome;

pub use moves::{count_flips, find_lines, has_moves, is_legal, legal_moves, play_move, Line, MoveList, DIRECTIONS};
pub use outcome::{is_game_over, next_to_move, result, score, GameResult};
