//! `astar` command.

use clap::Args;
use serde::Serialize;
use slot_graph::{apply_heuristic, astar_search, GraphResult, HeuristicKind};
use tracing::{info, warn};

use super::{print_report, GraphArgs, VisitRecord};
use crate::error::{exit_code_for_error, CliExitCode};

/// Arguments for the astar command.
#[derive(Args, Debug)]
pub struct AstarArgs {
    #[command(flatten)]
    pub graph: GraphArgs,

    /// Name of the start node
    #[arg(long)]
    pub start: String,

    /// Name of the goal node
    #[arg(long)]
    pub goal: String,

    /// Heuristic override: `zero` or `euclidean`
    #[arg(long, value_parser = parse_heuristic)]
    pub heuristic: Option<HeuristicKind>,
}

fn parse_heuristic(value: &str) -> Result<HeuristicKind, String> {
    match value {
        "zero" => Ok(HeuristicKind::Zero),
        "euclidean" => Ok(HeuristicKind::Euclidean),
        other => Err(format!("unknown heuristic '{}' (expected zero or euclidean)", other)),
    }
}

/// Outcome of an A* run.
#[derive(Debug, Serialize)]
pub struct SearchReport {
    pub start: String,
    pub goal: String,
    pub path_found: bool,
    pub total_cost: Option<f64>,
    pub nodes_expanded: usize,
    pub path: Vec<VisitRecord>,
}

/// Load the graph, set heuristics toward the goal and run A*.
pub fn run_astar(args: &AstarArgs) -> GraphResult<SearchReport> {
    let (mut graph, config) = args.graph.load()?;
    let mut search = config.search;
    if let Some(kind) = args.heuristic {
        search = search.heuristic(kind);
    }

    let start = graph.index_of(&args.start)?;
    let goal = graph.index_of(&args.goal)?;
    apply_heuristic(&mut graph, goal, &search)?;

    let mut path = Vec::new();
    let result = astar_search(&mut graph, start, goal, |index, node| {
        path.push(VisitRecord::from_node(index, node))
    })?;

    Ok(SearchReport {
        start: args.start.clone(),
        goal: args.goal.clone(),
        path_found: result.path_found,
        total_cost: result.path_found.then_some(result.total_cost),
        nodes_expanded: result.nodes_expanded,
        path,
    })
}

/// Execute the astar command.
///
/// # Returns
///
/// Exit code:
/// - 0: path found and printed
/// - 1: load or search failed
/// - 2: goal unreachable
pub fn handle_astar(args: AstarArgs) -> i32 {
    let report = match run_astar(&args) {
        Ok(report) => report,
        Err(e) => return exit_code_for_error(&e),
    };

    if let Err(e) = print_report(&report, &report.path, args.graph.json) {
        return exit_code_for_error(&e);
    }

    if report.path_found {
        info!(
            "path {} -> {}: {} nodes, cost {:?}",
            report.start,
            report.goal,
            report.path.len(),
            report.total_cost
        );
        CliExitCode::Success.into()
    } else {
        warn!("no path from {} to {}", report.start, report.goal);
        CliExitCode::NoPath.into()
    }
}
