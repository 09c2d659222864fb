//! Search statistics.

use std::time::Duration;

/// Counters collected during one branch-and-bound run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BnbStats {
    /// Search nodes entered, leaves included.
    pub nodes_explored: u64,
    /// Branches skipped because their bound did not beat the incumbent.
    pub prunings_bound: u64,
    /// Include branches skipped because the item did not fit.
    pub prunings_infeasible: u64,
    /// Times a strictly better incumbent was installed.
    pub incumbent_updates: u64,
    /// Deepest item position reached.
    pub max_depth: u64,
    /// Fractional bound of the root node.
    pub root_bound: u64,
    /// Wall-clock time of the run.
    pub elapsed: Duration,
}

impl BnbStats {
    #[inline]
    pub fn on_node_explored(&mut self) {
        self.nodes_explored = self.nodes_explored.saturating_add(1);
    }

    #[inline]
    pub fn on_pruning_bound(&mut self) {
        self.prunings_bound = self.prunings_bound.saturating_add(1);
    }

    #[inline]
    pub fn on_pruning_infeasible(&mut self) {
        self.prunings_infeasible = self.prunings_infeasible.saturating_add(1);
    }

    #[inline]
    pub fn on_incumbent_update(&mut self) {
        self.incumbent_updates = self.incumbent_updates.saturating_add(1);
    }

    #[inline]
    pub fn on_depth(&mut self, depth: u64) {
        self.max_depth = self.max_depth.max(depth);
    }
}

impl std::fmt::Display for BnbStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Branch-and-bound statistics:")?;
        writeln!(f, "  nodes explored:      {}", self.nodes_explored)?;
        writeln!(f, "  prunings (bound):    {}", self.prunings_bound)?;
        writeln!(f, "  prunings (weight):   {}", self.prunings_infeasible)?;
        writeln!(f, "  incumbent updates:   {}", self.incumbent_updates)?;
        writeln!(f, "  max depth:           {}", self.max_depth)?;
        writeln!(f, "  root bound:          {}", self.root_bound)?;
        write!(f, "  elapsed:             {:.3?}", self.elapsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters() {
        let mut stats = BnbStats::default();
        stats.on_node_explored();
        stats.on_node_explored();
        stats.on_pruning_bound();
        stats.on_pruning_infeasible();
        stats.on_incumbent_update();
        stats.on_depth(3);
        stats.on_depth(1);
        assert_eq!(stats.nodes_explored, 2);
        assert_eq!(stats.prunings_bound, 1);
        assert_eq!(stats.prunings_infeasible, 1);
        assert_eq!(stats.incumbent_updates, 1);
        assert_eq!(stats.max_depth, 3);
    }

    #[test]
    fn test_saturating() {
        let mut stats = BnbStats {
            nodes_explored: u64::MAX,
            ..BnbStats::default()
        };
        stats.on_node_explored();
        assert_eq!(stats.nodes_explored, u64::MAX);
    }

    #[test]
    fn test_display_mentions_counters() {
        let stats = BnbStats {
            nodes_explored: 17,
            ..BnbStats::default()
        };
        let text = stats.to_string();
        assert!(text.contains("nodes explored:      17"));
    }
}
