//! Search and tree statistics for progress reporting.

use serde::{Deserialize, Serialize};

use super::node::Node;

/// Statistics collected across `BruteSearch::run` calls.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SearchStats {
    /// Completed select/rollout/update cycles.
    pub iterations: u64,

    /// Environment steps executed over all rollouts.
    pub timesteps: u64,

    /// Nodes added to the tree (the root is not counted).
    pub nodes_created: u64,

    /// Rollouts that ended before their plan ran out.
    pub early_stops: u64,

    /// Total time spent in `run` (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Calculate iterations per second.
    #[must_use]
    pub fn iterations_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.iterations as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }

    /// Calculate environment steps per second.
    #[must_use]
    pub fn timesteps_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.timesteps as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }

    /// Average nodes created per iteration.
    #[must_use]
    pub fn avg_nodes_per_iteration(&self) -> f64 {
        if self.iterations == 0 {
            0.0
        } else {
            self.nodes_created as f64 / self.iterations as f64
        }
    }
}

/// Shape of the search tree.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TreeStats {
    /// Total number of nodes, root included.
    pub node_count: usize,

    /// Deepest recorded prefix length.
    pub max_depth: usize,

    /// Nodes without children.
    pub leaf_count: usize,
}

impl TreeStats {
    /// Walk the tree under `root`.
    #[must_use]
    pub fn collect(root: &Node) -> Self {
        let mut stats = Self::default();
        root.for_each(|node, depth| {
            stats.node_count += 1;
            stats.max_depth = stats.max_depth.max(depth);
            if node.is_leaf() {
                stats.leaf_count += 1;
            }
        });
        stats
    }

    /// Average children per interior node.
    #[must_use]
    pub fn branching_factor(&self) -> f64 {
        let interior = self.node_count - self.leaf_count;
        if interior == 0 {
            0.0
        } else {
            (self.node_count - 1) as f64 / interior as f64
        }
    }
}
