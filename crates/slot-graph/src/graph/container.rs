//! Fixed-capacity slot arena holding the graph's nodes.

use crate::error::{GraphError, GraphResult};

use super::arc::{is_valid_weight, Arc};
use super::node::{Node, SearchState};
use super::NodeIndex;

/// Directed graph over a fixed number of node slots.
///
/// Nodes live in slots addressed by index. Arcs and back-references are
/// slot indices, so the graph is the only owner of every node. Mutations
/// are all-or-nothing: a rejected call leaves the graph unchanged.
#[derive(Debug, Clone)]
pub struct Graph<T> {
    slots: Vec<Option<Node<T>>>,
    count: usize,
}

impl<T> Graph<T> {
    /// Create an empty graph with `capacity` slots.
    pub fn new(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Self { slots, count: 0 }
    }

    /// Number of slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Insert a node holding `payload` at slot `index`.
    ///
    /// # Errors
    /// * `SlotOutOfRange` - `index >= capacity`
    /// * `SlotOccupied` - slot already holds a node
    pub fn add_node(&mut self, payload: T, index: NodeIndex) -> GraphResult<()> {
        self.check_range(index)?;
        let slot = &mut self.slots[index];
        if slot.is_some() {
            log::debug!("add_node rejected: slot {} occupied", index);
            return Err(GraphError::SlotOccupied(index));
        }
        *slot = Some(Node::new(payload));
        self.count += 1;
        Ok(())
    }

    /// Remove the node at `index` together with every arc pointing at it.
    ///
    /// Returns the removed payload, or `None` if the slot was already empty.
    pub fn remove_node(&mut self, index: NodeIndex) -> GraphResult<Option<T>> {
        self.check_range(index)?;
        if self.slots[index].is_none() {
            return Ok(None);
        }

        let mut removed_arcs = 0usize;
        for node in self.slots.iter_mut().flatten() {
            if node.remove_arc_to(index) {
                removed_arcs += 1;
            }
            // Back-references into the freed slot would dangle once it is reused.
            if node.state.previous == Some(index) {
                node.state.previous = None;
            }
        }

        let node = self.slots[index].take();
        self.count -= 1;
        log::trace!(
            "removed node {} and {} incoming arcs",
            index,
            removed_arcs
        );
        Ok(node.map(Node::into_payload))
    }

    /// Add a directed arc `from -> to` with `weight`.
    ///
    /// # Errors
    /// * `SlotOutOfRange` - either index is out of range
    /// * `MissingEndpoint` - either slot is empty
    /// * `DuplicateArc` - the arc already exists
    /// * `InvalidWeight` - weight is negative or not finite
    pub fn add_arc(&mut self, from: NodeIndex, to: NodeIndex, weight: f64) -> GraphResult<()> {
        self.check_range(from)?;
        self.check_range(to)?;
        if self.slots[from].is_none() || self.slots[to].is_none() {
            return Err(GraphError::MissingEndpoint { from, to });
        }
        if !is_valid_weight(weight) {
            return Err(GraphError::InvalidWeight { weight });
        }
        let source = self.node_at_mut(from)?;
        if source.arc_to(to).is_some() {
            log::debug!("add_arc rejected: {} -> {} already exists", from, to);
            return Err(GraphError::DuplicateArc { from, to });
        }
        source.push_arc(to, weight);
        Ok(())
    }

    /// Remove the arc `from -> to`.
    ///
    /// No-op if either endpoint is empty or the arc does not exist, so
    /// calling it twice is safe.
    pub fn remove_arc(&mut self, from: NodeIndex, to: NodeIndex) -> GraphResult<()> {
        self.check_range(from)?;
        self.check_range(to)?;
        if self.slots[to].is_none() {
            return Ok(());
        }
        if let Some(source) = self.slots[from].as_mut() {
            source.remove_arc_to(to);
        }
        Ok(())
    }

    /// Arc `from -> to`, if both endpoints exist and the arc does.
    pub fn get_arc(&self, from: NodeIndex, to: NodeIndex) -> Option<&Arc> {
        self.node(to)?;
        self.node(from)?.arc_to(to)
    }

    /// Reset the visited flag on every node.
    pub fn clear_marks(&mut self) {
        for node in self.slots.iter_mut().flatten() {
            node.state.visited = false;
        }
    }

    /// Restore every node's search state to its initial value.
    ///
    /// Clears `g`, `h`, back-references and visited flags. Use before a
    /// fresh search with new heuristics.
    pub fn reset_search_state(&mut self) {
        for node in self.slots.iter_mut().flatten() {
            node.state = SearchState::default();
        }
    }

    /// Forget costs and back-references from earlier searches.
    ///
    /// Keeps `h` and the visited flags.
    pub(crate) fn clear_costs(&mut self) {
        for node in self.slots.iter_mut().flatten() {
            node.state.g = f64::INFINITY;
            node.state.previous = None;
        }
    }

    /// Node at `index`, failing fast on an out-of-range or empty slot.
    pub fn node_at(&self, index: NodeIndex) -> GraphResult<&Node<T>> {
        self.check_range(index)?;
        self.slots[index]
            .as_ref()
            .ok_or(GraphError::EmptySlot(index))
    }

    /// Node at `index`, or `None` if out of range or empty.
    #[inline]
    pub fn node(&self, index: NodeIndex) -> Option<&Node<T>> {
        self.slots.get(index)?.as_ref()
    }

    /// Mutable access to a node's payload.
    pub fn payload_mut(&mut self, index: NodeIndex) -> GraphResult<&mut T> {
        Ok(self.node_at_mut(index)?.payload_mut())
    }

    /// Set the heuristic estimate `h` of one node.
    ///
    /// # Errors
    /// * `InvalidHeuristic` - value is negative or not finite
    pub fn set_heuristic(&mut self, index: NodeIndex, h: f64) -> GraphResult<()> {
        if !(h.is_finite() && h >= 0.0) {
            return Err(GraphError::InvalidHeuristic { index, value: h });
        }
        self.node_at_mut(index)?.state.h = h;
        Ok(())
    }

    /// Occupied slots in index order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeIndex, &Node<T>)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|node| (index, node)))
    }

    /// First occupied slot whose payload matches `predicate`.
    pub fn find<P>(&self, mut predicate: P) -> Option<NodeIndex>
    where
        P: FnMut(&T) -> bool,
    {
        self.nodes()
            .find(|(_, node)| predicate(node.payload()))
            .map(|(index, _)| index)
    }

    #[inline]
    pub(crate) fn check_range(&self, index: NodeIndex) -> GraphResult<()> {
        if index < self.slots.len() {
            Ok(())
        } else {
            Err(GraphError::SlotOutOfRange {
                index,
                capacity: self.slots.len(),
            })
        }
    }

    pub(crate) fn node_at_mut(&mut self, index: NodeIndex) -> GraphResult<&mut Node<T>> {
        self.check_range(index)?;
        self.slots[index]
            .as_mut()
            .ok_or(GraphError::EmptySlot(index))
    }

    /// Search state of an occupied slot. Callers hold an index that was
    /// validated on entry to the traversal.
    #[inline]
    pub(crate) fn state_mut(&mut self, index: NodeIndex) -> Option<&mut SearchState> {
        self.slots.get_mut(index)?.as_mut().map(|node| &mut node.state)
    }
}
