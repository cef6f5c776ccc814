//! A* best-path search.
//!
//! A* combines uniform-cost search with a heuristic:
//! - f(n) = g(n) + h(n)
//! - g(n) = cost so far from the start to n
//! - h(n) = caller-supplied estimate from n to the goal
//!
//! If every h(n) is 0 the search behaves like Dijkstra's algorithm. The
//! heuristic is read from each node's search state; nothing here computes
//! it. See [`crate::heuristic`] for the straight-line estimate.
//!
//! Uses BinaryHeap for O(log n) priority queue operations. Each node is
//! queued at most once, so the queue never holds more than the node count.

mod algorithm;
mod node;
mod types;


pub use algorithm::astar_search;
pub use types::AstarResult;
