//! Board evaluation.
//!
//! Values are always from the perspective of the searching color: larger is
//! better for that side.
//!
//! - [`utility`]: disc difference, the exact score of a finished game
//! - [`heuristic`]: mobility, potential mobility and corner ownership
//!
//! Search calls an [`Evaluator`] at depth-limited leaves and at finished
//! games. [`EvaluatorKind`] selects one from configuration.

pub mod heuristic;

use serde::{Deserialize, Serialize};

use crate::core::{Board, Color};
use crate::error::OthelloError;

pub use heuristic::{heuristic, potential_mobility};

/// Terminal values under the heuristic evaluator are scaled by this factor so
/// that any decided game outranks any positional score.
pub const WIN_SCALE: f64 = 1000.0;

/// Disc difference from `color`'s point of view.
///
/// ```
/// use rust_othello::core::{Board, Color};
/// use rust_othello::eval::utility;
///
/// let board = Board::from_rows(&[vec![1, 1], vec![1, 2]]).unwrap();
/// assert_eq!(utility(&board, Color::Dark), 2.0);
/// assert_eq!(utility(&board, Color::Light), -2.0);
/// ```
#[must_use]
pub fn utility(board: &Board, color: Color) -> f64 {
    board.count(color) as f64 - board.count(color.opponent()) as f64
}

/// Static evaluation used by search.
pub trait Evaluator: Send + Sync {
    /// Value of a depth-limited leaf.
    fn evaluate(&self, board: &Board, color: Color) -> f64;

    /// Value of a finished game.
    fn terminal(&self, board: &Board, color: Color) -> f64 {
        utility(board, color)
    }
}

/// Disc difference at every leaf.
#[derive(Clone, Copy, Debug, Default)]
pub struct Utility;

impl Evaluator for Utility {
    fn evaluate(&self, board: &Board, color: Color) -> f64 {
        utility(board, color)
    }
}

/// Positional heuristic at depth-limited leaves.
#[derive(Clone, Copy, Debug, Default)]
pub struct Heuristic;

impl Evaluator for Heuristic {
    fn evaluate(&self, board: &Board, color: Color) -> f64 {
        heuristic(board, color)
    }

    fn terminal(&self, board: &Board, color: Color) -> f64 {
        WIN_SCALE * utility(board, color)
    }
}

/// Configurable choice of evaluator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvaluatorKind {
    #[default]
    Utility,
    Heuristic,
}

impl EvaluatorKind {
    #[must_use]
    pub fn build(self) -> Box<dyn Evaluator> {
        match self {
            EvaluatorKind::Utility => Box::new(Utility),
            EvaluatorKind::Heuristic => Box::new(Heuristic),
        }
    }
}

impl std::str::FromStr for EvaluatorKind {
    type Err = OthelloError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "utility" | "u" => Ok(EvaluatorKind::Utility),
            "heuristic" | "h" => Ok(EvaluatorKind::Heuristic),
            other => Err(OthelloError::Config(format!("unknown evaluator {other:?}"))),
        }
    }
}

impl std::fmt::Display for EvaluatorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EvaluatorKind::Utility => f.write_str("utility"),
            EvaluatorKind::Heuristic => f.write_str("heuristic"),
        }
    }
}
