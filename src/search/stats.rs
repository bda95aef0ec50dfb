//! Search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during one search.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Nodes entered, including the root and cache hits.
    pub nodes: u64,

    /// Static evaluations performed (depth-limited leaves and finished games).
    pub leaf_evaluations: u64,

    /// Nodes answered from the transposition table.
    pub cache_hits: u64,

    /// Alpha-beta cutoffs.
    pub cutoffs: u64,

    /// Nodes where the side to move had to pass.
    pub passes: u64,

    /// Deepest ply reached below the root.
    pub max_ply: u32,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }

    /// Fraction of nodes answered from the cache.
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        if self.nodes == 0 {
            0.0
        } else {
            self.cache_hits as f64 / self.nodes as f64
        }
    }
}

impl std::fmt::Display for SearchStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "nodes={} leaves={} hits={} cutoffs={} passes={} max_ply={} time_us={}",
            self.nodes,
            self.leaf_evaluations,
            self.cache_hits,
            self.cutoffs,
            self.passes,
            self.max_ply,
            self.time_us
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_default() {
        let stats = SearchStats::new();
        assert_eq!(stats.nodes, 0);
        assert_eq!(stats.hit_rate(), 0.0);
        assert_eq!(stats.nodes_per_second(), 0.0);
    }

    #[test]
    fn test_nodes_per_second() {
        let mut stats = SearchStats::new();
        stats.nodes = 1000;
        stats.time_us = 500_000;

        assert_eq!(stats.nodes_per_second(), 2000.0);
    }

    #[test]
    fn test_stats_reset() {
        let mut stats = SearchStats::new();
        stats.nodes = 100;
        stats.cache_hits = 25;
        assert_eq!(stats.hit_rate(), 0.25);

        stats.reset();

        assert_eq!(stats, SearchStats::default());
    }

    #[test]
    fn test_stats_serialization() {
        let mut stats = SearchStats::new();
        stats.cutoffs = 42;

        let json = serde_json::to_string(&stats).unwrap();
        let deserialized: SearchStats = serde_json::from_str(&json).unwrap();

        assert_eq!(stats, deserialized);
    }
}
