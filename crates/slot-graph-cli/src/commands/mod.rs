//! CLI command handlers
//!
//! # Modules
//!
//! - `search`: A* best path
//! - `traverse`: DFS, BFS and fewest-hops path
//!
//! Handlers return a process exit code. The `run_*` functions behind them
//! return a serializable report so they can be tested without stdout.

pub mod search;
pub mod traverse;

use std::path::PathBuf;

use clap::Args;
use serde::{Deserialize, Serialize};
use slot_graph::config::load_json;
use slot_graph::{Graph, GraphResult, LoaderConfig, Node, NodeIndex, SearchConfig, Waypoint};

/// Input files and configuration shared by every command.
#[derive(Args, Debug, Clone)]
pub struct GraphArgs {
    /// Node file: one `name x y` per line
    #[arg(long)]
    pub nodes: PathBuf,

    /// Arc file: one `from to weight` per line
    #[arg(long)]
    pub arcs: PathBuf,

    /// JSON config file with optional `search` and `loader` sections
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print a JSON report instead of `Visiting:` lines
    #[arg(long)]
    pub json: bool,
}

/// Contents of the `--config` file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CliConfig {
    pub search: SearchConfig,
    pub loader: LoaderConfig,
}

impl GraphArgs {
    /// Read the config file, if any, and load the graph.
    pub fn load(&self) -> GraphResult<(Graph<Waypoint>, CliConfig)> {
        let config: CliConfig = match &self.config {
            Some(path) => load_json(path)?,
            None => CliConfig::default(),
        };
        config.search.validate()?;
        let graph = slot_graph::load_graph(&self.nodes, &self.arcs, &config.loader)?;
        tracing::info!(
            "graph ready: {} nodes in {} slots",
            graph.count(),
            graph.capacity()
        );
        Ok((graph, config))
    }
}

/// One visited node as reported to the user.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct VisitRecord {
    pub index: NodeIndex,
    pub name: String,
    /// `None` while the node has no known cost.
    pub cost: Option<f64>,
    pub heuristic: f64,
}

impl VisitRecord {
    pub fn from_node(index: NodeIndex, node: &Node<Waypoint>) -> Self {
        Self {
            index,
            name: node.payload().name.clone(),
            cost: node.g().is_finite().then_some(node.g()),
            heuristic: node.h(),
        }
    }

    /// `Visiting: <name> <cost> <heuristic>`
    pub fn line(&self) -> String {
        match self.cost {
            Some(cost) => format!("Visiting: {} {} {}", self.name, cost, self.heuristic),
            None => format!("Visiting: {} - {}", self.name, self.heuristic),
        }
    }
}

/// Print `report` as pretty JSON, or one `Visiting:` line per record.
pub(crate) fn print_report<R: Serialize>(
    report: &R,
    visits: &[VisitRecord],
    json: bool,
) -> GraphResult<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        for visit in visits {
            println!("{}", visit.line());
        }
    }
    Ok(())
}
