//! Positional heuristic.
//!
//! Three features are compared between the two sides. Each contributes
//! `100 * (mine - theirs) / (mine + theirs)`, or nothing when both are zero:
//!
//! 1. Mobility: legal moves available now.
//! 2. Potential mobility: discs touching at least one empty square. These
//!    are the frontier discs an opponent may later be able to flip against.
//! 3. Corners: corners owned. A corner disc can never be flipped.

use crate::core::{Board, Cell, Color};
use crate::rules::legal_moves;

const FEATURE_WEIGHT: f64 = 100.0;

/// Sum of the mobility, potential mobility and corner terms for `color`.
#[must_use]
pub fn heuristic(board: &Board, color: Color) -> f64 {
    let opponent = color.opponent();

    let mobility = ratio(
        legal_moves(board, color).len() as u32,
        legal_moves(board, opponent).len() as u32,
    );
    let potential = ratio(potential_mobility(board, color), potential_mobility(board, opponent));

    let (mut mine, mut theirs) = (0, 0);
    for corner in board.corners() {
        match board.get(corner.column, corner.row) {
            Cell::Disc(c) if c == color => mine += 1,
            Cell::Disc(_) => theirs += 1,
            Cell::Empty => {}
        }
    }
    let corners = ratio(mine, theirs);

    mobility + potential + corners
}

/// Number of `color` discs with at least one empty neighbour.
#[must_use]
pub fn potential_mobility(board: &Board, color: Color) -> u32 {
    let size = board.size() as u8;
    let mut total = 0;
    for row in 0..size {
        for column in 0..size {
            if board.get(column, row) == Cell::Disc(color) && touches_empty(board, column, row) {
                total += 1;
            }
        }
    }
    total
}

fn touches_empty(board: &Board, column: u8, row: u8) -> bool {
    for dr in -1..=1 {
        for dc in -1..=1 {
            if dc == 0 && dr == 0 {
                continue;
            }
            let (c, r) = (column as i32 + dc, row as i32 + dr);
            if board.contains(c, r) && board.get(c as u8, r as u8).is_empty() {
                return true;
            }
        }
    }
    false
}

fn ratio(mine: u32, theirs: u32) -> f64 {
    if mine + theirs == 0 {
        return 0.0;
    }
    FEATURE_WEIGHT * (mine as f64 - theirs as f64) / (mine as f64 + theirs as f64)
}
