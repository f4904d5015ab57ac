//! Counters collected while a search runs.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Every position the search entered, leaves included.
    pub nodes_visited: u64,

    /// Positions scored with the static evaluation.
    pub leaves_evaluated: u64,

    /// Times the remaining siblings were skipped because `beta <= alpha`.
    pub cutoffs: u64,

    /// Wall time of the last root search (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes_visited as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}

impl fmt::Display for SearchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} nodes, {} leaves, {} cutoffs in {}us",
            self.nodes_visited, self.leaves_evaluated, self.cutoffs, self.time_us
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_default() {
        let stats = SearchStats::new();
        assert_eq!(stats.nodes_visited, 0);
        assert_eq!(stats.cutoffs, 0);
        assert_eq!(stats.nodes_per_second(), 0.0);
    }

    #[test]
    fn test_stats_nodes_per_second() {
        let mut stats = SearchStats::new();
        stats.nodes_visited = 500;
        stats.time_us = 250_000;

        assert_eq!(stats.nodes_per_second(), 2000.0);
    }

    #[test]
    fn test_stats_reset() {
        let mut stats = SearchStats::new();
        stats.nodes_visited = 10;
        stats.leaves_evaluated = 7;
        stats.cutoffs = 2;

        stats.reset();

        assert_eq!(stats, SearchStats::default());
    }

    #[test]
    fn test_stats_serialization() {
        let mut stats = SearchStats::new();
        stats.cutoffs = 42;

        let yaml = serde_yaml_ng::to_string(&stats).unwrap();
        let deserialized: SearchStats = serde_yaml_ng::from_str(&yaml).unwrap();

        assert_eq!(stats, deserialized);
    }
}
