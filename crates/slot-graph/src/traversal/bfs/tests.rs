//! Tests for BFS traversal.

use crate::error::GraphError;
use crate::graph::Graph;
use crate::traversal::bfs::{bfs_hop_path, bfs_order};

/// Tree:
///     0
///    / \
///   1   2
///  /|   |\
/// 3 4   5 6
fn tree_graph() -> Graph<u32> {
    let mut graph = Graph::new(7);
    for i in 0..7 {
        graph.add_node(i as u32, i).expect("add_node failed");
    }
    for (from, to) in [(0, 1), (0, 2), (1, 3), (1, 4), (2, 5), (2, 6)] {
        graph.add_arc(from, to, 1.0).expect("add_arc failed");
    }
    graph
}

#[test]
fn test_bfs_level_order() {
    let mut graph = tree_graph();
    let mut order = Vec::new();

    graph
        .breadth_first(0, |index, _| order.push(index))
        .expect("BFS failed");

    assert_eq!(order, vec![0, 1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_bfs_abc_order() {
    let mut graph = Graph::new(3);
    graph.add_node("A", 0).expect("add");
    graph.add_node("B", 1).expect("add");
    graph.add_node("C", 2).expect("add");
    graph.add_arc(0, 1, 1.0).expect("A->B");
    graph.add_arc(1, 2, 1.0).expect("B->C");
    graph.add_arc(0, 2, 5.0).expect("A->C");

    let mut names = Vec::new();
    graph
        .breadth_first(0, |_, node| names.push(*node.payload()))
        .expect("BFS failed");

    assert_eq!(names, vec!["A", "B", "C"]);
}

#[test]
fn test_bfs_diamond_enqueues_once() {
    // 0 -> 1, 0 -> 2, 1 -> 3, 2 -> 3
    let mut graph = Graph::new(4);
    for i in 0..4 {
        graph.add_node(i, i).expect("add");
    }
    for (from, to) in [(0, 1), (0, 2), (1, 3), (2, 3)] {
        graph.add_arc(from, to, 1.0).expect("arc");
    }

    let order = bfs_order(&mut graph, 0).expect("BFS failed");
    assert_eq!(order, vec![0, 1, 2, 3]);
}

#[test]
fn test_bfs_marks_on_enqueue() {
    let mut graph = tree_graph();
    let mut marked_before_visit = false;

    // Node 1 was marked when node 0 enqueued it.
    graph
        .breadth_first(0, |index, node| {
            if index == 1 {
                marked_before_visit = node.visited();
            }
        })
        .expect("BFS failed");

    assert!(marked_before_visit);
    assert!(graph.nodes().all(|(_, node)| node.visited()));
}

#[test]
fn test_bfs_revisits_after_clear_marks() {
    let mut graph = tree_graph();
    let first = bfs_order(&mut graph, 0).expect("first BFS");
    let second = bfs_order(&mut graph, 0).expect("second BFS");
    assert_eq!(first, second);
    assert_eq!(first.len(), 7);
}

#[test]
fn test_bfs_empty_start_fails_fast() {
    let mut graph: Graph<u32> = Graph::new(2);
    let err = graph.breadth_first(0, |_, _| {}).unwrap_err();
    assert!(matches!(err, GraphError::EmptySlot(0)));
}

#[test]
fn test_adapted_bfs_records_back_references() {
    let mut graph = tree_graph();

    let reached = graph.adapted_breadth_first(0, 6).expect("BFS failed");

    assert!(reached);
    assert_eq!(graph.node_at(6).expect("node").previous(), Some(2));
    assert_eq!(graph.node_at(2).expect("node").previous(), Some(0));
    assert_eq!(graph.path_to(0, 6).expect("path"), vec![0, 2, 6]);
}

#[test]
fn test_adapted_bfs_stops_at_goal_discovery() {
    // 0 -> 1, 0 -> 2; goal 1 is the first arc of 0, so 2 is never seen.
    let mut graph = tree_graph();

    assert!(graph.adapted_breadth_first(0, 1).expect("BFS failed"));

    assert!(!graph.node_at(2).expect("node").visited());
    assert_eq!(graph.node_at(2).expect("node").previous(), None);
}

#[test]
fn test_adapted_bfs_goal_never_points_to_itself() {
    let mut graph = tree_graph();
    graph.adapted_breadth_first(0, 4).expect("BFS failed");
    assert_eq!(graph.node_at(4).expect("node").previous(), Some(1));
}

#[test]
fn test_adapted_bfs_counts_hops_not_weight() {
    // 0 -10-> 2 is one hop; 0 -1-> 1 -1-> 2 is two hops but cheaper.
    let mut graph = Graph::new(3);
    for i in 0..3 {
        graph.add_node(i, i).expect("add");
    }
    graph.add_arc(0, 1, 1.0).expect("arc");
    graph.add_arc(1, 2, 1.0).expect("arc");
    graph.add_arc(0, 2, 10.0).expect("arc");

    let path = bfs_hop_path(&mut graph, 0, 2).expect("BFS failed");
    assert_eq!(path, Some(vec![0, 2]));
}

#[test]
fn test_adapted_bfs_unreachable() {
    let mut graph = tree_graph();
    assert!(!graph.adapted_breadth_first(5, 0).expect("BFS failed"));
    assert_eq!(bfs_hop_path(&mut graph, 5, 0).expect("BFS failed"), None);
}

#[test]
fn test_adapted_bfs_clears_start_back_reference() {
    let mut graph = tree_graph();
    assert!(graph.adapted_breadth_first(0, 6).expect("BFS failed"));
    assert_eq!(graph.node_at(2).expect("node").previous(), Some(0));

    graph.clear_marks();
    assert!(graph.adapted_breadth_first(2, 6).expect("BFS failed"));

    assert_eq!(graph.node_at(2).expect("node").previous(), None);
    assert_eq!(graph.path_to(2, 6).expect("path"), vec![2, 6]);
}

#[test]
fn test_adapted_bfs_start_is_goal() {
    let mut graph = tree_graph();
    assert!(graph.adapted_breadth_first(3, 3).expect("BFS failed"));
    assert_eq!(bfs_hop_path(&mut graph, 3, 3).expect("BFS failed"), Some(vec![3]));
}
