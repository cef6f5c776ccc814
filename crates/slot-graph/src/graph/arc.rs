//! Directed, weighted arc.

use super::NodeIndex;

/// Directed edge to another node in the same graph.
///
/// The target is a slot index, not an owning reference; the graph keeps
/// every arc pointing at an occupied slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    target: NodeIndex,
    weight: f64,
}

impl Arc {
    pub(crate) fn new(target: NodeIndex, weight: f64) -> Self {
        Self { target, weight }
    }

    /// Slot index of the destination node.
    #[inline]
    pub fn target(&self) -> NodeIndex {
        self.target
    }

    /// Cost of traversing this arc.
    #[inline]
    pub fn weight(&self) -> f64 {
        self.weight
    }
}

/// Check a weight before it becomes part of the graph.
#[inline]
pub(crate) fn is_valid_weight(weight: f64) -> bool {
    weight.is_finite() && weight >= 0.0
}
