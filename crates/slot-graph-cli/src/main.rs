//! slot-graph CLI
//!
//! Loads a graph from a node file (`name x y`) and an arc file
//! (`from to weight`) and runs a traversal or search over it.
//!
//! # Commands
//!
//! - `astar`: A* best path between two named nodes
//! - `dfs`: depth-first visiting order from a node
//! - `bfs`: breadth-first visiting order from a node
//! - `hops`: fewest-arcs path between two named nodes
//!
//! Exit code 0 on success, 1 on error, 2 when no path exists.

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod error;

/// slot-graph CLI - traversals and A* search over text-defined graphs
#[derive(Parser)]
#[command(name = "slot-graph-cli")]
#[command(version)]
#[command(about = "Traversals and A* search over graphs loaded from text files")]
#[command(propagate_version = true)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// A* best path from `--start` to `--goal`
    ///
    /// Every node's heuristic is set toward the goal before the search
    /// (straight-line distance by default).
    Astar(commands::search::AstarArgs),
    /// Depth-first visiting order from `--start`
    Dfs(commands::traverse::TraverseArgs),
    /// Breadth-first visiting order from `--start`
    Bfs(commands::traverse::TraverseArgs),
    /// Fewest-arcs path from `--start` to `--goal`
    Hops(commands::traverse::HopsArgs),
}

fn main() {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    let exit_code = match cli.command {
        Commands::Astar(args) => commands::search::handle_astar(args),
        Commands::Dfs(args) => commands::traverse::handle_dfs(args),
        Commands::Bfs(args) => commands::traverse::handle_bfs(args),
        Commands::Hops(args) => commands::traverse::handle_hops(args),
    };

    std::process::exit(exit_code);
}
