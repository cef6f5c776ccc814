//! `dfs`, `bfs` and `hops` commands.

use clap::Args;
use serde::Serialize;
use slot_graph::{bfs_hop_path, GraphResult, Node, NodeIndex, Waypoint};
use tracing::{info, warn};

use super::{print_report, GraphArgs, VisitRecord};
use crate::error::{exit_code_for_error, CliExitCode};

/// Arguments for the dfs and bfs commands.
#[derive(Args, Debug)]
pub struct TraverseArgs {
    #[command(flatten)]
    pub graph: GraphArgs,

    /// Name of the node to start from
    #[arg(long)]
    pub start: String,
}

/// Arguments for the hops command.
#[derive(Args, Debug)]
pub struct HopsArgs {
    #[command(flatten)]
    pub graph: GraphArgs,

    /// Name of the start node
    #[arg(long)]
    pub start: String,

    /// Name of the goal node
    #[arg(long)]
    pub goal: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Order {
    DepthFirst,
    BreadthFirst,
}

/// Nodes in the order a traversal visited them.
#[derive(Debug, Serialize)]
pub struct TraversalReport {
    pub order: Order,
    pub start: String,
    pub visited: Vec<VisitRecord>,
}

/// Fewest-hops path, empty when the goal is unreachable.
#[derive(Debug, Serialize)]
pub struct HopsReport {
    pub start: String,
    pub goal: String,
    pub path_found: bool,
    pub hops: Option<usize>,
    pub path: Vec<VisitRecord>,
}

/// Load the graph and record a full traversal from the start node.
pub fn run_traversal(args: &TraverseArgs, order: Order) -> GraphResult<TraversalReport> {
    let (mut graph, _) = args.graph.load()?;
    let start = graph.index_of(&args.start)?;

    let mut visited = Vec::new();
    let record = |index: NodeIndex, node: &Node<Waypoint>| {
        visited.push(VisitRecord::from_node(index, node))
    };
    match order {
        Order::DepthFirst => graph.depth_first(start, record)?,
        Order::BreadthFirst => graph.breadth_first(start, record)?,
    }

    Ok(TraversalReport {
        order,
        start: args.start.clone(),
        visited,
    })
}

/// Load the graph and find the path with the fewest arcs.
pub fn run_hops(args: &HopsArgs) -> GraphResult<HopsReport> {
    let (mut graph, _) = args.graph.load()?;
    let start = graph.index_of(&args.start)?;
    let goal = graph.index_of(&args.goal)?;

    let path = bfs_hop_path(&mut graph, start, goal)?.unwrap_or_default();
    let records = path
        .iter()
        .map(|&index| graph.node_at(index).map(|node| VisitRecord::from_node(index, node)))
        .collect::<GraphResult<Vec<_>>>()?;

    Ok(HopsReport {
        start: args.start.clone(),
        goal: args.goal.clone(),
        path_found: !records.is_empty(),
        hops: (!records.is_empty()).then(|| records.len() - 1),
        path: records,
    })
}

fn handle_traversal(args: TraverseArgs, order: Order) -> i32 {
    let report = match run_traversal(&args, order) {
        Ok(report) => report,
        Err(e) => return exit_code_for_error(&e),
    };
    if let Err(e) = print_report(&report, &report.visited, args.graph.json) {
        return exit_code_for_error(&e);
    }
    info!("{:?} from {}: {} nodes", order, report.start, report.visited.len());
    CliExitCode::Success.into()
}

/// Execute the dfs command. Exit code 0 on success, 1 on error.
pub fn handle_dfs(args: TraverseArgs) -> i32 {
    handle_traversal(args, Order::DepthFirst)
}

/// Execute the bfs command. Exit code 0 on success, 1 on error.
pub fn handle_bfs(args: TraverseArgs) -> i32 {
    handle_traversal(args, Order::BreadthFirst)
}

/// Execute the hops command.
///
/// # Returns
///
/// Exit code:
/// - 0: path found and printed
/// - 1: load or search failed
/// - 2: goal unreachable
pub fn handle_hops(args: HopsArgs) -> i32 {
    let report = match run_hops(&args) {
        Ok(report) => report,
        Err(e) => return exit_code_for_error(&e),
    };
    if let Err(e) = print_report(&report, &report.path, args.graph.json) {
        return exit_code_for_error(&e);
    }
    match report.hops {
        Some(hops) => {
            info!("{} -> {}: {} hops", report.start, report.goal, hops);
            CliExitCode::Success.into()
        }
        None => {
            warn!("no path from {} to {}", report.start, report.goal);
            CliExitCode::NoPath.into()
        }
    }
}
