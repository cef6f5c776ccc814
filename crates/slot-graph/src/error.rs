//! Error types for graph operations.
//!
//! Every failure the graph can report is recoverable: a rejected mutation
//! leaves the graph exactly as it was, and the caller decides what to do.
//! Nothing in this crate panics on bad input.

use thiserror::Error;

use crate::graph::NodeIndex;

/// Result type alias for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;

/// Error type for all graph operations.
#[derive(Error, Debug)]
pub enum GraphError {
    // ========== Slot Errors ==========
    /// Slot index is outside `[0, capacity)`.
    #[error("Slot {index} out of range (capacity {capacity})")]
    SlotOutOfRange { index: NodeIndex, capacity: usize },

    /// `add_node` on a slot that already holds a node.
    #[error("Slot {0} is already occupied")]
    SlotOccupied(NodeIndex),

    /// Operation referenced a slot that holds no node.
    #[error("Slot {0} is empty")]
    EmptySlot(NodeIndex),

    // ========== Arc Errors ==========
    /// Arc endpoint does not exist.
    #[error("Missing arc endpoint: from={from}, to={to}")]
    MissingEndpoint { from: NodeIndex, to: NodeIndex },

    /// An arc between the two nodes already exists.
    #[error("Arc already exists: from={from}, to={to}")]
    DuplicateArc { from: NodeIndex, to: NodeIndex },

    /// Weight is negative, NaN or infinite.
    #[error("Invalid arc weight {weight}: must be finite and non-negative")]
    InvalidWeight { weight: f64 },

    // ========== Search Errors ==========
    /// Heuristic value is negative, NaN or infinite.
    #[error("Invalid heuristic {value} for node {index}: must be finite and non-negative")]
    InvalidHeuristic { index: NodeIndex, value: f64 },

    /// Back-references from the goal loop or do not lead back to the start.
    #[error("Broken back-references from node {goal} after {steps} steps")]
    BrokenPath { goal: NodeIndex, steps: usize },

    // ========== Loader Errors ==========
    /// Malformed line in a node or arc file.
    #[error("Parse error in {source_name} line {line}: {details}")]
    Parse {
        source_name: String,
        line: usize,
        details: String,
    },

    /// Node with the given name does not exist.
    #[error("Node not found: {0}")]
    NodeNotFound(String),

    /// More nodes than the configured capacity.
    #[error("Capacity exceeded: {count} nodes do not fit in {capacity} slots")]
    CapacityExceeded { count: usize, capacity: usize },

    // ========== Configuration Errors ==========
    /// Invalid configuration parameter.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    // ========== I/O Errors ==========
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for GraphError {
    fn from(err: serde_json::Error) -> Self {
        GraphError::Serialization(err.to_string())
    }
}

static_assertions::assert_impl_all!(GraphError: Send, Sync, std::error::Error);
