//! Search configuration parameters.

use serde::{Deserialize, Serialize};

use crate::error::{OthelloError, Result};
use crate::eval::EvaluatorKind;

/// Which tree search to run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Minimax,
    #[default]
    AlphaBeta,
}

impl std::str::FromStr for Algorithm {
    type Err = OthelloError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "minimax" | "mm" => Ok(Algorithm::Minimax),
            "alphabeta" | "alpha-beta" | "ab" => Ok(Algorithm::AlphaBeta),
            other => Err(OthelloError::Config(format!("unknown algorithm {other:?}"))),
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Algorithm::Minimax => f.write_str("minimax"),
            Algorithm::AlphaBeta => f.write_str("alphabeta"),
        }
    }
}

/// Search configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Minimax or alpha-beta.
    pub algorithm: Algorithm,

    /// Plies searched below the root (`None` = until the game ends).
    /// Serialized as `-1` when unlimited.
    #[serde(with = "depth_limit_serde")]
    pub depth_limit: Option<u32>,

    /// Cache node values in the transposition table.
    pub caching: bool,

    /// Search more promising successors first. Alpha-beta only; minimax
    /// visits every successor regardless of order.
    pub ordering: bool,

    /// Evaluator applied at depth-limited leaves.
    pub evaluator: EvaluatorKind,

    /// Number of transposition table slots.
    pub tt_capacity: usize,

    /// Keep cached values between moves instead of starting each move with
    /// an empty table.
    pub persist_cache: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::AlphaBeta,
            depth_limit: Some(4),
            caching: false,
            ordering: false,
            evaluator: EvaluatorKind::Utility,
            tt_capacity: 1 << 16,
            persist_cache: false,
        }
    }
}

impl SearchConfig {
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_depth_limit(mut self, depth_limit: Option<u32>) -> Self {
        self.depth_limit = depth_limit;
        self
    }

    pub fn with_caching(mut self, caching: bool) -> Self {
        self.caching = caching;
        self
    }

    pub fn with_ordering(mut self, ordering: bool) -> Self {
        self.ordering = ordering;
        self
    }

    pub fn with_evaluator(mut self, evaluator: EvaluatorKind) -> Self {
        self.evaluator = evaluator;
        self
    }

    pub fn with_tt_capacity(mut self, capacity: usize) -> Self {
        self.tt_capacity = capacity;
        self
    }

    pub fn with_persist_cache(mut self, persist: bool) -> Self {
        self.persist_cache = persist;
        self
    }

    /// Reject settings the searcher cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.depth_limit == Some(0) {
            return Err(OthelloError::Config(
                "depth limit must be positive (or unlimited)".to_string(),
            ));
        }
        if self.caching && self.tt_capacity == 0 {
            return Err(OthelloError::Config(
                "caching needs a transposition table with at least one slot".to_string(),
            ));
        }
        Ok(())
    }
}

/// Convert the manager's depth value: `-1` means unlimited.
///
/// ```
/// use rust_othello::search::config::depth_limit_from_wire;
///
/// assert_eq!(depth_limit_from_wire(-1).unwrap(), None);
/// assert_eq!(depth_limit_from_wire(5).unwrap(), Some(5));
/// assert!(depth_limit_from_wire(0).is_err());
/// ```
pub fn depth_limit_from_wire(limit: i64) -> Result<Option<u32>> {
    match limit {
        -1 => Ok(None),
        1.. => u32::try_from(limit)
            .map(Some)
            .map_err(|_| OthelloError::Config(format!("depth limit {limit} is too large"))),
        _ => Err(OthelloError::Config(format!(
            "depth limit must be positive or -1, got {limit}"
        ))),
    }
}

/// Inverse of [`depth_limit_from_wire`].
#[must_use]
pub fn depth_limit_to_wire(limit: Option<u32>) -> i64 {
    limit.map_or(-1, i64::from)
}

mod depth_limit_serde {
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(limit: &Option<u32>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(super::depth_limit_to_wire(*limit))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u32>, D::Error> {
        let raw = i64::deserialize(deserializer)?;
        super::depth_limit_from_wire(raw).map_err(D::Error::custom)
    }
}
