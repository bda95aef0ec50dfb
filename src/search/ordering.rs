//! Successor ordering for alpha-beta.
//!
//! Successors are ranked by the disc difference they leave for the searching
//! color: best-first at maximizing nodes, worst-first at minimizing nodes.
//! The sort is stable, so equally ranked moves keep generation order.

use std::cmp::Ordering;

use super::tt::NodeKind;
use crate::core::{Board, Color, Move};
use crate::eval::utility;

/// Reorder `(move, resulting board)` pairs in place.
pub fn order_successors(successors: &mut [(Move, Board)], color: Color, kind: NodeKind) {
    successors.sort_by(|(_, a), (_, b)| {
        let (a, b) = (utility(a, color), utility(b, color));
        let ascending = a.partial_cmp(&b).unwrap_or(Ordering::Equal);
        match kind {
            NodeKind::Max => ascending.reverse(),
            NodeKind::Min => ascending,
        }
    });
}
