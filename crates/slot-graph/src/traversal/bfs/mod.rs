//! BFS (Breadth-First Search) traversal.
//!
//! Nodes are marked when they are enqueued, not when they are visited, so a
//! node reachable from several parents enters the queue only once.
//!
//! - `breadth_first`: level-order walk calling a visitor on dequeue
//! - `adapted_breadth_first`: stops as soon as the goal shows up as a
//!   neighbour and leaves back-references for path reconstruction. This is
//!   a fewest-hops search; arc weights are ignored.

mod traversal;

#[cfg(test)]
mod tests;

pub use self::traversal::{bfs_hop_path, bfs_order};
