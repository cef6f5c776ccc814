//! Core A* search algorithm implementation.
//!
//! Contains `astar_search` and the `Graph` entry points built on it.

use std::collections::BinaryHeap;

use crate::error::GraphResult;
use crate::graph::{Graph, Node, NodeIndex};

use super::node::QueueEntry;
use super::types::AstarResult;

/// Perform A* pathfinding from `start` to `goal`.
///
/// Every node's `h` must be set by the caller beforehand (see
/// [`crate::heuristic`]); with all `h = 0` this is uniform-cost search.
/// Costs and predecessors left by an earlier search are cleared on entry;
/// visited flags are not, so call [`Graph::clear_marks`] between runs.
///
/// On success `visit` is called for each node of the path in start-to-goal
/// order.
///
/// # Behaviour worth knowing
///
/// * The relaxation test is `current.g + weight + current.h < neighbour.g +
///   neighbour.h`: the expanding node's heuristic stands in for the
///   neighbour's. With non-uniform heuristics this can keep a costlier
///   route.
/// * A node is queued once, when first discovered. If its `g` improves
///   later its queue priority stays what it was at push time, so the search
///   can settle on a suboptimal path.
/// * The arc back to the node's own predecessor is never relaxed, and the
///   start node is never given a predecessor.
///
/// # Returns
/// * `Ok(AstarResult)` - `path_found == false` with an empty path when the
///   goal is unreachable
/// * `Err(GraphError::*)` - `start` or `goal` does not name a node, or the
///   back-references are corrupt
///
/// # Example
///
/// ```
/// use slot_graph::traversal::astar_search;
/// use slot_graph::Graph;
///
/// let mut graph = Graph::new(2);
/// graph.add_node("A", 0).unwrap();
/// graph.add_node("B", 1).unwrap();
/// graph.add_arc(0, 1, 4.0).unwrap();
///
/// let mut visited = Vec::new();
/// let result = astar_search(&mut graph, 0, 1, |i, _| visited.push(i)).unwrap();
/// assert_eq!(result.total_cost, 4.0);
/// assert_eq!(visited, vec![0, 1]);
/// ```
pub fn astar_search<T, F>(
    graph: &mut Graph<T>,
    start: NodeIndex,
    goal: NodeIndex,
    mut visit: F,
) -> GraphResult<AstarResult>
where
    F: FnMut(NodeIndex, &Node<T>),
{
    graph.node_at(goal)?;
    graph.node_at(start)?;
    graph.clear_costs();
    let start_state = graph.node_at_mut(start)?.state_mut();
    start_state.g = 0.0;
    start_state.previous = None;
    start_state.visited = true;
    let start_f = start_state.f();

    let mut sequence = 0u64;
    let mut open_set: BinaryHeap<QueueEntry> = BinaryHeap::new();
    open_set.push(QueueEntry {
        index: start,
        f_score: start_f,
        sequence,
    });

    let mut nodes_expanded = 0usize;

    while let Some(top) = open_set.peek() {
        if top.index == goal {
            break;
        }
        let Some(QueueEntry { index: current, .. }) = open_set.pop() else {
            break;
        };
        nodes_expanded += 1;

        let Some(current_node) = graph.node(current) else {
            continue;
        };
        let current_state = *current_node.state();

        let mut position = 0;
        while let Some(arc) = graph
            .node(current)
            .and_then(|node| node.arcs().get(position).copied())
        {
            position += 1;
            let target = arc.target();
            if Some(target) == current_state.previous || target == start {
                continue;
            }
            let Some(neighbour) = graph.state_mut(target) else {
                continue;
            };

            let g_candidate = current_state.g + arc.weight();
            let total_candidate = g_candidate + current_state.h;
            if total_candidate < neighbour.f() {
                neighbour.g = g_candidate;
                neighbour.previous = Some(current);
                log::trace!("A* relaxed {} -> {}: g={}", current, target, g_candidate);
            }

            if !neighbour.visited {
                neighbour.visited = true;
                sequence += 1;
                open_set.push(QueueEntry {
                    index: target,
                    f_score: neighbour.f(),
                    sequence,
                });
            }
        }
    }

    let reached = open_set.peek().is_some_and(|top| top.index == goal);
    if !reached {
        log::debug!(
            "A* found no path from {} to {} ({} nodes expanded)",
            start,
            goal,
            nodes_expanded
        );
        return Ok(AstarResult::no_path(nodes_expanded));
    }

    let path = graph.path_to(start, goal)?;
    for &index in &path {
        if let Some(node) = graph.node(index) {
            visit(index, node);
        }
    }
    let total_cost = graph.node_at(goal)?.g();

    log::debug!(
        "A* path {} -> {}: {} nodes, cost {} ({} nodes expanded)",
        start,
        goal,
        path.len(),
        total_cost,
        nodes_expanded
    );
    Ok(AstarResult::found(path, total_cost, nodes_expanded))
}

impl<T> Graph<T> {
    /// A* search writing the start-to-goal path into `path`.
    ///
    /// `path` is cleared first and left empty when the goal is unreachable.
    /// See [`astar_search`] for the search itself.
    pub fn a_star<F>(
        &mut self,
        start: NodeIndex,
        goal: NodeIndex,
        visit: F,
        path: &mut Vec<NodeIndex>,
    ) -> GraphResult<()>
    where
        F: FnMut(NodeIndex, &Node<T>),
    {
        path.clear();
        let result = astar_search(self, start, goal, visit)?;
        path.extend(result.path);
        Ok(())
    }

    /// Convenience: A* path with no visitor.
    ///
    /// Returns `None` when the goal is unreachable.
    pub fn a_star_path(
        &mut self,
        start: NodeIndex,
        goal: NodeIndex,
    ) -> GraphResult<Option<Vec<NodeIndex>>> {
        let result = astar_search(self, start, goal, |_, _| {})?;
        if result.path_found {
            Ok(Some(result.path))
        } else {
            Ok(None)
        }
    }
}
