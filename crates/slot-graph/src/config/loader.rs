//! Text loader configuration.

use serde::{Deserialize, Serialize};

use crate::error::GraphError;

/// Configuration for loading a graph from node and arc files.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoaderConfig {
    /// Number of graph slots. `None` sizes the graph to the node file.
    /// Must be at least the number of nodes when set.
    pub capacity: Option<usize>,

    /// Added to every x coordinate read from the node file.
    pub x_offset: f64,

    /// Added to every y coordinate read from the node file.
    pub y_offset: f64,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            capacity: None,
            x_offset: 0.0,
            y_offset: 0.0,
        }
    }
}

impl LoaderConfig {
    /// Builder: fix the graph capacity.
    #[must_use]
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Builder: shift every loaded position by `(x, y)`.
    #[must_use]
    pub fn offset(mut self, x: f64, y: f64) -> Self {
        self.x_offset = x;
        self.y_offset = y;
        self
    }

    /// Validate configuration.
    ///
    /// # Errors
    /// Returns `GraphError::InvalidConfig` for a zero capacity or a
    /// non-finite offset.
    pub fn validate(&self) -> Result<(), GraphError> {
        if self.capacity == Some(0) {
            return Err(GraphError::InvalidConfig(
                "capacity must be positive (got 0)".to_string(),
            ));
        }
        if !self.x_offset.is_finite() || !self.y_offset.is_finite() {
            return Err(GraphError::InvalidConfig(format!(
                "offsets must be finite (got {}, {})",
                self.x_offset, self.y_offset
            )));
        }
        Ok(())
    }
}
