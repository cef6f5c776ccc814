//! A* result type.

use crate::graph::NodeIndex;

/// Result of A* pathfinding.
#[derive(Debug, Clone, PartialEq)]
pub struct AstarResult {
    /// Path from start to goal, both inclusive (empty if no path found).
    pub path: Vec<NodeIndex>,

    /// `g` of the goal when reached, `+inf` otherwise.
    pub total_cost: f64,

    /// Number of nodes taken off the queue and expanded.
    pub nodes_expanded: usize,

    /// Whether the goal was reached.
    pub path_found: bool,
}

impl AstarResult {
    /// Create empty result for no path found.
    #[must_use]
    pub fn no_path(nodes_expanded: usize) -> Self {
        Self {
            path: Vec::new(),
            total_cost: f64::INFINITY,
            nodes_expanded,
            path_found: false,
        }
    }

    /// Create result with found path.
    #[must_use]
    pub fn found(path: Vec<NodeIndex>, total_cost: f64, nodes_expanded: usize) -> Self {
        Self {
            path,
            total_cost,
            nodes_expanded,
            path_found: true,
        }
    }

    /// Number of arcs on the path.
    #[must_use]
    pub fn arc_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}
