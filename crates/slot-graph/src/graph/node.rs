//! Graph node and its per-search scratch state.

use super::arc::Arc;
use super::NodeIndex;

/// Mutable bookkeeping written by traversals and searches.
///
/// Kept apart from the payload so the payload stays domain data only and
/// the search state can be reset without touching it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchState {
    /// Best known cost from the search start. `+inf` until reached.
    pub g: f64,
    /// Caller-supplied estimate of the remaining cost to the goal.
    pub h: f64,
    /// Set once the node has been discovered (enqueued or expanded).
    pub visited: bool,
    /// Predecessor on the best known path.
    pub previous: Option<NodeIndex>,
}

impl SearchState {
    /// Total estimated cost through this node.
    #[inline]
    pub fn f(&self) -> f64 {
        self.g + self.h
    }
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            g: f64::INFINITY,
            h: 0.0,
            visited: false,
            previous: None,
        }
    }
}

/// A vertex: caller payload, outgoing arcs in insertion order, and search state.
#[derive(Debug, Clone)]
pub struct Node<T> {
    payload: T,
    arcs: Vec<Arc>,
    pub(crate) state: SearchState,
}

impl<T> Node<T> {
    pub(crate) fn new(payload: T) -> Self {
        Self {
            payload,
            arcs: Vec::new(),
            state: SearchState::default(),
        }
    }

    /// Caller data stored in this node.
    #[inline]
    pub fn payload(&self) -> &T {
        &self.payload
    }

    pub(crate) fn payload_mut(&mut self) -> &mut T {
        &mut self.payload
    }

    pub(crate) fn into_payload(self) -> T {
        self.payload
    }

    /// Outgoing arcs, in the order they were added.
    #[inline]
    pub fn arcs(&self) -> &[Arc] {
        &self.arcs
    }

    /// Search bookkeeping for this node.
    #[inline]
    pub fn state(&self) -> &SearchState {
        &self.state
    }

    #[inline]
    pub(crate) fn state_mut(&mut self) -> &mut SearchState {
        &mut self.state
    }

    #[inline]
    pub fn g(&self) -> f64 {
        self.state.g
    }

    #[inline]
    pub fn h(&self) -> f64 {
        self.state.h
    }

    #[inline]
    pub fn visited(&self) -> bool {
        self.state.visited
    }

    #[inline]
    pub fn previous(&self) -> Option<NodeIndex> {
        self.state.previous
    }

    /// Arc from this node to `target`, if any.
    pub fn arc_to(&self, target: NodeIndex) -> Option<&Arc> {
        self.arcs.iter().find(|arc| arc.target() == target)
    }

    pub(crate) fn push_arc(&mut self, target: NodeIndex, weight: f64) {
        self.arcs.push(Arc::new(target, weight));
    }

    /// Remove the arc to `target`, keeping the order of the rest.
    pub(crate) fn remove_arc_to(&mut self, target: NodeIndex) -> bool {
        match self.arcs.iter().position(|arc| arc.target() == target) {
            Some(pos) => {
                self.arcs.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Target of the arc at `position` in the arc list.
    #[inline]
    pub(crate) fn arc_target(&self, position: usize) -> Option<NodeIndex> {
        self.arcs.get(position).map(Arc::target)
    }
}
