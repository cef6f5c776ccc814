//! A* priority queue entry.
//!
//! Implements ordering for BinaryHeap min-heap behavior.

use std::cmp::Ordering;

use crate::graph::NodeIndex;

/// Entry in the A* open queue.
///
/// The priority is `g + h` captured when the node is pushed. It is not
/// refreshed if the node's `g` later improves.
#[derive(Debug, Clone, Copy)]
pub(crate) struct QueueEntry {
    pub index: NodeIndex,
    pub f_score: f64,
    /// Push order; equal priorities pop first-in first-out.
    pub sequence: u64,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed on both keys so the max-heap pops the smallest f first,
        // then the earliest push. total_cmp puts an infinite f at the bottom.
        other
            .f_score
            .total_cmp(&self.f_score)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}
