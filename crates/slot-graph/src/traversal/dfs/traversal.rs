//! Core DFS implementation.

use crate::error::GraphResult;
use crate::graph::{Graph, Node, NodeIndex};

impl<T> Graph<T> {
    /// Depth-first traversal from `start`, calling `visit` once per node.
    ///
    /// Nodes already marked visited are skipped, so call
    /// [`clear_marks`](Graph::clear_marks) before repeating a traversal.
    /// `visit` receives a shared borrow of the node and cannot modify the
    /// graph while the walk is in progress.
    ///
    /// # Errors
    /// * `SlotOutOfRange` / `EmptySlot` - `start` does not name a node
    pub fn depth_first<F>(&mut self, start: NodeIndex, mut visit: F) -> GraphResult<()>
    where
        F: FnMut(NodeIndex, &Node<T>),
    {
        self.node_at(start)?;

        let mut visited_count = 0usize;
        self.mark_and_visit(start, &mut visit);
        visited_count += 1;

        // Each frame is (node, position of the next arc to follow).
        let mut stack: Vec<(NodeIndex, usize)> = vec![(start, 0)];

        while let Some((current, cursor)) = stack.pop() {
            let Some(target) = self.node(current).and_then(|node| node.arc_target(cursor)) else {
                continue;
            };
            stack.push((current, cursor + 1));

            let unvisited = self.node(target).is_some_and(|node| !node.visited());
            if unvisited {
                self.mark_and_visit(target, &mut visit);
                visited_count += 1;
                stack.push((target, 0));
            }
        }

        log::debug!("DFS complete: {} nodes from {}", visited_count, start);
        Ok(())
    }
}

/// Collect the DFS visiting order from `start`.
///
/// Convenience wrapper around [`Graph::depth_first`]; marks are cleared
/// first so the result does not depend on earlier traversals.
pub fn dfs_order<T>(graph: &mut Graph<T>, start: NodeIndex) -> GraphResult<Vec<NodeIndex>> {
    graph.clear_marks();
    let mut order = Vec::with_capacity(graph.count());
    graph.depth_first(start, |index, _| order.push(index))?;
    Ok(order)
}
