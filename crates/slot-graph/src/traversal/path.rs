//! Path reconstruction from back-references.

use crate::error::{GraphError, GraphResult};
use crate::graph::{Graph, NodeIndex};

impl<T> Graph<T> {
    /// Rebuild the path ending at `goal` from the `previous` links.
    ///
    /// Walks back from `goal` while a node has a predecessor, checks that
    /// the walk ended on `start` and reverses, giving start-to-goal order.
    /// Only meaningful after a search from `start` that reached `goal`.
    ///
    /// # Errors
    /// * `SlotOutOfRange` / `EmptySlot` - `start` or `goal` does not name a node
    /// * `BrokenPath` - the links form a cycle or end somewhere other than `start`
    pub fn path_to(&self, start: NodeIndex, goal: NodeIndex) -> GraphResult<Vec<NodeIndex>> {
        self.node_at(start)?;

        let mut path = Vec::new();
        let mut current = goal;
        while let Some(previous) = self.node_at(current)?.previous() {
            // A simple path never has more links than there are nodes.
            if path.len() >= self.count() {
                log::warn!("back-references from {} loop after {} steps", goal, path.len());
                return Err(GraphError::BrokenPath {
                    goal,
                    steps: path.len(),
                });
            }
            path.push(current);
            current = previous;
        }
        if current != start {
            log::warn!("back-references from {} end at {}, not {}", goal, current, start);
            return Err(GraphError::BrokenPath {
                goal,
                steps: path.len(),
            });
        }
        path.push(start);
        path.reverse();
        Ok(path)
    }
}
