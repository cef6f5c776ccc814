//! Graph container: fixed-capacity node slots, weighted directed arcs.
//!
//! # Components
//!
//! - **Graph**: slot arena owning every node; node/arc mutation and queries
//! - **Node**: caller payload, ordered arc list, per-search scratch state
//! - **Arc**: directed edge holding a target slot index and a weight
//!
//! Arcs and back-references are slot indices rather than references, so a
//! graph with cycles has a single owner and no lifetime puzzles.

mod arc;
mod container;
mod node;


/// Slot index of a node inside its graph.
pub type NodeIndex = usize;

pub use self::arc::Arc;
pub use self::container::Graph;
pub use self::node::{Node, SearchState};
