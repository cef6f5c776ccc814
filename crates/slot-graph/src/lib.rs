//! Fixed-capacity directed graph with traversal and A* search.
//!
//! Nodes live in numbered slots of a graph created with a fixed capacity.
//! Arcs are directed and weighted. Each node carries a caller payload plus
//! scratch state written by the algorithms: the cost so far `g`, the
//! heuristic `h`, a visited mark and a back-reference to its predecessor.
//!
//! # Architecture
//!
//! - **graph**: slot arena, nodes, arcs and their mutation
//! - **traversal**: DFS, BFS, fewest-hops BFS and A*
//! - **heuristic**: straight-line `h` for payloads with a position
//! - **loader**: build a graph from the `name x y` / `from to weight` text files
//! - **config**: serde-backed search and loader settings
//! - **error**: `GraphError` and `GraphResult`
//!
//! Everything is synchronous and single-threaded. Algorithms take
//! `&mut Graph`, so a visitor callback cannot mutate the graph it is
//! walking.
//!
//! # Example
//!
//! ```
//! use slot_graph::error::GraphResult;
//! use slot_graph::Graph;
//!
//! fn example() -> GraphResult<()> {
//!     let mut graph = Graph::new(3);
//!     graph.add_node("A", 0)?;
//!     graph.add_node("B", 1)?;
//!     graph.add_node("C", 2)?;
//!     graph.add_arc(0, 1, 1.0)?;
//!     graph.add_arc(1, 2, 1.0)?;
//!     graph.add_arc(0, 2, 5.0)?;
//!
//!     let mut path = Vec::new();
//!     graph.a_star(0, 2, |_, node| println!("Visiting: {}", node.payload()), &mut path)?;
//!     assert_eq!(path, vec![0, 1, 2]);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

pub mod config;
pub mod error;
pub mod graph;
pub mod heuristic;
pub mod loader;
pub mod traversal;

// Re-exports for convenience
pub use config::{HeuristicKind, LoaderConfig, SearchConfig};
pub use error::{GraphError, GraphResult};
pub use graph::{Arc, Graph, Node, NodeIndex, SearchState};
pub use heuristic::{apply_heuristic, euclidean, Position};
pub use loader::{load_graph, Waypoint};
pub use traversal::{astar_search, bfs_hop_path, bfs_order, dfs_order, AstarResult};
