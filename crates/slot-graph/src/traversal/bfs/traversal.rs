//! Core BFS implementations.

use std::collections::VecDeque;

use crate::error::GraphResult;
use crate::graph::{Graph, Node, NodeIndex};

impl<T> Graph<T> {
    /// Breadth-first traversal from `start`, calling `visit` on dequeue.
    ///
    /// Neighbours are discovered in arc-list order. Already-marked nodes are
    /// skipped; call [`clear_marks`](Graph::clear_marks) between runs.
    ///
    /// # Errors
    /// * `SlotOutOfRange` / `EmptySlot` - `start` does not name a node
    pub fn breadth_first<F>(&mut self, start: NodeIndex, mut visit: F) -> GraphResult<()>
    where
        F: FnMut(NodeIndex, &Node<T>),
    {
        self.node_at(start)?;

        let mut queue: VecDeque<NodeIndex> = VecDeque::with_capacity(self.count());
        self.mark(start);
        queue.push_back(start);
        let mut visited_count = 0usize;

        while let Some(current) = queue.pop_front() {
            let Some(node) = self.node(current) else {
                continue;
            };
            visit(current, node);
            visited_count += 1;

            let mut position = 0;
            while let Some(target) = self.node(current).and_then(|n| n.arc_target(position)) {
                position += 1;
                if self.mark(target) {
                    queue.push_back(target);
                }
            }
        }

        log::debug!("BFS complete: {} nodes from {}", visited_count, start);
        Ok(())
    }

    /// Breadth-first search from `start` that stops once `goal` is seen.
    ///
    /// Every newly discovered node gets its `previous` set to the node being
    /// expanded. The search ends the moment `goal` appears among the arcs of
    /// the node being expanded, so later arcs of that node are not examined.
    /// No visitor is called; use [`path_to`](Graph::path_to) afterwards.
    ///
    /// Returns `true` if the goal was reached.
    ///
    /// # Errors
    /// * `SlotOutOfRange` / `EmptySlot` - `start` or `goal` does not name a node
    pub fn adapted_breadth_first(&mut self, start: NodeIndex, goal: NodeIndex) -> GraphResult<bool> {
        self.node_at(start)?;
        self.node_at(goal)?;
        if let Some(state) = self.state_mut(start) {
            state.previous = None;
        }

        if start == goal {
            return Ok(true);
        }

        let mut queue: VecDeque<NodeIndex> = VecDeque::with_capacity(self.count());
        self.mark(start);
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            let mut position = 0;
            while let Some(target) = self.node(current).and_then(|n| n.arc_target(position)) {
                position += 1;

                if target == goal {
                    if let Some(state) = self.state_mut(goal) {
                        state.previous = Some(current);
                        state.visited = true;
                    }
                    log::debug!("BFS reached goal {} from {}", goal, current);
                    return Ok(true);
                }

                if self.mark(target) {
                    if let Some(state) = self.state_mut(target) {
                        state.previous = Some(current);
                    }
                    queue.push_back(target);
                }
            }
        }

        log::debug!("BFS exhausted without reaching goal {}", goal);
        Ok(false)
    }
}

/// Collect the BFS visiting order from `start`, clearing marks first.
pub fn bfs_order<T>(graph: &mut Graph<T>, start: NodeIndex) -> GraphResult<Vec<NodeIndex>> {
    graph.clear_marks();
    let mut order = Vec::with_capacity(graph.count());
    graph.breadth_first(start, |index, _| order.push(index))?;
    Ok(order)
}

/// Fewest-hops path from `start` to `goal`.
///
/// Resets search state, runs [`Graph::adapted_breadth_first`] and
/// reconstructs the path from the back-references.
///
/// # Returns
/// * `Ok(Some(path))` - path from start to goal (inclusive)
/// * `Ok(None)` - goal not reachable
pub fn bfs_hop_path<T>(
    graph: &mut Graph<T>,
    start: NodeIndex,
    goal: NodeIndex,
) -> GraphResult<Option<Vec<NodeIndex>>> {
    graph.reset_search_state();
    if !graph.adapted_breadth_first(start, goal)? {
        return Ok(None);
    }
    graph.path_to(start, goal).map(Some)
}
