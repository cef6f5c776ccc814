//! A* heuristic configuration.

use serde::{Deserialize, Serialize};

use crate::error::GraphError;

/// How the per-node heuristic `h` is computed before an A* search.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum HeuristicKind {
    /// `h = 0` everywhere; A* degenerates to uniform-cost search.
    Zero,
    /// Straight-line distance to the goal.
    #[default]
    Euclidean,
}

/// Search configuration.
///
/// # Example
/// ```
/// use slot_graph::config::{HeuristicKind, SearchConfig};
///
/// let config = SearchConfig::default();
/// assert_eq!(config.heuristic, HeuristicKind::Euclidean);
/// assert_eq!(config.heuristic_scale, 1.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SearchConfig {
    /// Heuristic applied to every node before the search.
    pub heuristic: HeuristicKind,

    /// Multiplier on the heuristic value.
    /// Values below 1.0 make a distance heuristic more conservative.
    /// Must be finite and non-negative. Default: 1.0
    pub heuristic_scale: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            heuristic: HeuristicKind::Euclidean,
            heuristic_scale: 1.0,
        }
    }
}

impl SearchConfig {
    /// Builder: set heuristic kind.
    #[must_use]
    pub fn heuristic(mut self, kind: HeuristicKind) -> Self {
        self.heuristic = kind;
        self
    }

    /// Builder: set heuristic scale factor.
    #[must_use]
    pub fn heuristic_scale(mut self, scale: f64) -> Self {
        self.heuristic_scale = scale;
        self
    }

    /// Validate configuration.
    ///
    /// # Errors
    /// Returns `GraphError::InvalidConfig` if `heuristic_scale` is negative,
    /// NaN or infinite.
    pub fn validate(&self) -> Result<(), GraphError> {
        if !self.heuristic_scale.is_finite() || self.heuristic_scale < 0.0 {
            return Err(GraphError::InvalidConfig(format!(
                "heuristic_scale must be finite and non-negative (got {})",
                self.heuristic_scale
            )));
        }
        Ok(())
    }
}
