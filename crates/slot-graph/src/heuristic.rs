//! Heuristic estimates for A*.
//!
//! The search reads `h` from each node; this module fills it in. The
//! straight-line distance never exceeds the true cost when arc weights are
//! at least the distance between their endpoints, which keeps it admissible.

use crate::config::{HeuristicKind, SearchConfig};
use crate::error::{GraphError, GraphResult};
use crate::graph::{Graph, NodeIndex};

/// Payloads with a planar position.
pub trait Position {
    /// `(x, y)` coordinates.
    fn position(&self) -> (f64, f64);
}

/// Straight-line distance between two points.
#[inline]
pub fn euclidean(a: (f64, f64), b: (f64, f64)) -> f64 {
    (a.0 - b.0).hypot(a.1 - b.1)
}

/// Set every node's `h` for a search toward `goal`.
///
/// # Errors
/// * `InvalidConfig` - the config fails validation
/// * `SlotOutOfRange` / `EmptySlot` - `goal` does not name a node
/// * `InvalidHeuristic` - a payload position is not finite
pub fn apply_heuristic<T: Position>(
    graph: &mut Graph<T>,
    goal: NodeIndex,
    config: &SearchConfig,
) -> GraphResult<()> {
    config.validate()?;
    let target = graph.node_at(goal)?.payload().position();

    // Every estimate is checked before any is written.
    let estimates = graph
        .nodes()
        .map(|(index, node)| {
            let h = match config.heuristic {
                HeuristicKind::Zero => 0.0,
                HeuristicKind::Euclidean => {
                    config.heuristic_scale * euclidean(node.payload().position(), target)
                }
            };
            if h.is_finite() && h >= 0.0 {
                Ok((index, h))
            } else {
                Err(GraphError::InvalidHeuristic { index, value: h })
            }
        })
        .collect::<GraphResult<Vec<(NodeIndex, f64)>>>()?;

    for (index, h) in estimates {
        graph.set_heuristic(index, h)?;
    }
    log::debug!("applied {:?} heuristic toward node {}", config.heuristic, goal);
    Ok(())
}
