//! Graph traversal algorithms.
//!
//! All traversals run synchronously on `&mut Graph`: they write the
//! per-node search state (visited flag, `g`, back-references) and report
//! nodes through a caller-supplied visitor or an explicit path.
//!
//! # Algorithms
//!
//! - **DFS**: pre-order depth-first walk (iterative)
//! - **BFS**: level-order walk, plus an early-exit variant that records
//!   back-references towards a goal
//! - **A***: best-first search ordered by `g + h`
//!
//! # Examples
//!
//! ## Traversal with a visitor
//!
//! ```
//! use slot_graph::Graph;
//!
//! let mut graph = Graph::new(3);
//! graph.add_node("A", 0).unwrap();
//! graph.add_node("B", 1).unwrap();
//! graph.add_node("C", 2).unwrap();
//! graph.add_arc(0, 1, 1.0).unwrap();
//! graph.add_arc(1, 2, 1.0).unwrap();
//!
//! let mut names = Vec::new();
//! graph.depth_first(0, |_, node| names.push(*node.payload())).unwrap();
//! assert_eq!(names, vec!["A", "B", "C"]);
//! ```
//!
//! ## A* search
//!
//! ```
//! use slot_graph::traversal::astar_search;
//! use slot_graph::Graph;
//!
//! let mut graph = Graph::new(3);
//! for (index, name) in ["A", "B", "C"].into_iter().enumerate() {
//!     graph.add_node(name, index).unwrap();
//! }
//! graph.add_arc(0, 1, 1.0).unwrap();
//! graph.add_arc(1, 2, 1.0).unwrap();
//! graph.add_arc(0, 2, 5.0).unwrap();
//!
//! let result = astar_search(&mut graph, 0, 2, |_, _| {}).unwrap();
//! assert!(result.path_found);
//! assert_eq!(result.path, vec![0, 1, 2]);
//! assert_eq!(result.total_cost, 2.0);
//! ```

pub mod astar;
pub mod bfs;
pub mod dfs;
mod path;

pub use astar::{astar_search, AstarResult};
pub use bfs::{bfs_hop_path, bfs_order};
pub use dfs::dfs_order;

use crate::graph::{Graph, Node, NodeIndex};

impl<T> Graph<T> {
    /// Mark a node visited. Returns `true` if it was not marked before.
    pub(crate) fn mark(&mut self, index: NodeIndex) -> bool {
        match self.state_mut(index) {
            Some(state) if !state.visited => {
                state.visited = true;
                true
            }
            _ => false,
        }
    }

    pub(crate) fn mark_and_visit<F>(&mut self, index: NodeIndex, visit: &mut F)
    where
        F: FnMut(NodeIndex, &Node<T>),
    {
        self.mark(index);
        if let Some(node) = self.node(index) {
            visit(index, node);
        }
    }
}
