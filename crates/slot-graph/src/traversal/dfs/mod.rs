//! DFS (Depth-First Search) traversal.
//!
//! Pre-order: a node is marked and visited before any of its successors,
//! and successors are explored in arc-list order. The walk uses an explicit
//! stack of (node, arc cursor) frames, which yields exactly the order of
//! the recursive formulation without growing the call stack.

mod traversal;


pub use self::traversal::dfs_order;
