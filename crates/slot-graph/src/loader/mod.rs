//! Loading graphs from the plain-text node and arc format.
//!
//! Node file, one node per line, slot index = line order:
//!
//! ```text
//! name x y
//! ```
//!
//! Arc file, one directed arc per line, endpoints are slot indices:
//!
//! ```text
//! from to weight
//! ```
//!
//! Blank lines and lines starting with `#` are ignored in both files.

mod parse;

#[cfg(test)]
mod tests;

pub use self::parse::{parse_arcs, parse_nodes, ArcRecord};

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::LoaderConfig;
use crate::error::{GraphError, GraphResult};
use crate::graph::Graph;
use crate::heuristic::Position;

/// Named point: the payload of a loaded graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub name: String,
    pub x: f64,
    pub y: f64,
}

impl Waypoint {
    pub fn new(name: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            name: name.into(),
            x,
            y,
        }
    }
}

impl Position for Waypoint {
    fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}

/// Build a graph from parsed nodes and arcs.
///
/// Node `i` goes into slot `i`. Positions are shifted by the configured
/// offsets.
///
/// # Errors
/// * `InvalidConfig` - the config fails validation
/// * `CapacityExceeded` - more nodes than the configured capacity
/// * `Parse` - an arc the graph rejects (missing endpoint, duplicate,
///   bad weight), reported with its source line
pub fn build_graph(
    nodes: Vec<Waypoint>,
    arcs: &[ArcRecord],
    arcs_source: &str,
    config: &LoaderConfig,
) -> GraphResult<Graph<Waypoint>> {
    config.validate()?;
    let capacity = config.capacity.unwrap_or(nodes.len());
    if nodes.len() > capacity {
        return Err(GraphError::CapacityExceeded {
            count: nodes.len(),
            capacity,
        });
    }

    let mut graph = Graph::new(capacity);
    for (index, mut node) in nodes.into_iter().enumerate() {
        node.x += config.x_offset;
        node.y += config.y_offset;
        graph.add_node(node, index)?;
    }

    for arc in arcs {
        graph
            .add_arc(arc.from, arc.to, arc.weight)
            .map_err(|err| GraphError::Parse {
                source_name: arcs_source.to_string(),
                line: arc.line,
                details: err.to_string(),
            })?;
    }

    log::debug!(
        "built graph: {} nodes, {} arcs, capacity {}",
        graph.count(),
        arcs.len(),
        graph.capacity()
    );
    Ok(graph)
}

/// Read and build a graph from a node file and an arc file.
pub fn load_graph(
    nodes_path: impl AsRef<Path>,
    arcs_path: impl AsRef<Path>,
    config: &LoaderConfig,
) -> GraphResult<Graph<Waypoint>> {
    let nodes_path = nodes_path.as_ref();
    let arcs_path = arcs_path.as_ref();
    let nodes_source = nodes_path.display().to_string();
    let arcs_source = arcs_path.display().to_string();

    let nodes = parse_nodes(&std::fs::read_to_string(nodes_path)?, &nodes_source)?;
    let arcs = parse_arcs(&std::fs::read_to_string(arcs_path)?, &arcs_source)?;
    log::info!(
        "loaded {} nodes from {} and {} arcs from {}",
        nodes.len(),
        nodes_source,
        arcs.len(),
        arcs_source
    );
    build_graph(nodes, &arcs, &arcs_source, config)
}

impl Graph<Waypoint> {
    /// Slot of the node with the given name.
    ///
    /// # Errors
    /// * `NodeNotFound` - no node carries that name
    pub fn index_of(&self, name: &str) -> GraphResult<usize> {
        self.find(|waypoint| waypoint.name == name)
            .ok_or_else(|| GraphError::NodeNotFound(name.to_string()))
    }
}
