//! Tests for the text loader.

use std::fs;

use tempfile::tempdir;

use crate::config::LoaderConfig;
use crate::error::GraphError;

use super::{build_graph, load_graph, parse_arcs, parse_nodes, Waypoint};

const NODES: &str = "\
# name x y
A 0 0
B 10 0

C 20 0
";

const ARCS: &str = "\
0 1 10
1 2 10
0 2 25
";

#[test]
fn test_parse_nodes() {
    let nodes = parse_nodes(NODES, "nodes.txt").expect("parse");
    assert_eq!(
        nodes,
        vec![
            Waypoint::new("A", 0.0, 0.0),
            Waypoint::new("B", 10.0, 0.0),
            Waypoint::new("C", 20.0, 0.0),
        ]
    );
}

#[test]
fn test_parse_arcs_keeps_line_numbers() {
    let arcs = parse_arcs("\n0 1 2.5\n\n1 0 3\n", "arcs.txt").expect("parse");
    assert_eq!(arcs.len(), 2);
    assert_eq!((arcs[0].from, arcs[0].to, arcs[0].weight, arcs[0].line), (0, 1, 2.5, 2));
    assert_eq!(arcs[1].line, 4);
}

#[test]
fn test_parse_nodes_wrong_field_count() {
    let err = parse_nodes("A 1 2\nB 3\n", "nodes.txt").unwrap_err();
    match err {
        GraphError::Parse {
            source_name,
            line,
            details,
        } => {
            assert_eq!(source_name, "nodes.txt");
            assert_eq!(line, 2);
            assert!(details.contains("found 2"));
        }
        e => panic!("Expected Parse, got {:?}", e),
    }
}

#[test]
fn test_parse_nodes_rejects_non_finite_coordinates() {
    for text in ["A 0 0\nB NaN 0\n", "A 0 0\nB 1 inf\n"] {
        let err = parse_nodes(text, "nodes.txt").unwrap_err();
        assert!(matches!(err, GraphError::Parse { line: 2, .. }), "{:?}", err);
        assert!(err.to_string().contains("must be finite"));
    }
}

#[test]
fn test_parse_arcs_bad_number() {
    let err = parse_arcs("0 x 1\n", "arcs.txt").unwrap_err();
    assert!(matches!(err, GraphError::Parse { line: 1, .. }));
    assert!(err.to_string().contains("invalid to 'x'"));
}

#[test]
fn test_build_graph_applies_offset() {
    let nodes = parse_nodes(NODES, "nodes.txt").expect("parse");
    let arcs = parse_arcs(ARCS, "arcs.txt").expect("parse");
    let config = LoaderConfig::default().offset(50.0, 100.0);

    let graph = build_graph(nodes, &arcs, "arcs.txt", &config).expect("build");

    assert_eq!(graph.capacity(), 3);
    assert_eq!(graph.count(), 3);
    let b = graph.node_at(1).expect("B").payload();
    assert_eq!((b.x, b.y), (60.0, 100.0));
    assert_eq!(graph.get_arc(0, 2).expect("arc").weight(), 25.0);
}

#[test]
fn test_build_graph_capacity() {
    let nodes = parse_nodes(NODES, "nodes.txt").expect("parse");

    let graph = build_graph(nodes.clone(), &[], "arcs.txt", &LoaderConfig::default().capacity(30))
        .expect("build");
    assert_eq!(graph.capacity(), 30);

    let err = build_graph(nodes, &[], "arcs.txt", &LoaderConfig::default().capacity(2)).unwrap_err();
    assert!(matches!(
        err,
        GraphError::CapacityExceeded {
            count: 3,
            capacity: 2
        }
    ));
}

#[test]
fn test_build_graph_rejected_arc_reports_line() {
    let nodes = parse_nodes(NODES, "nodes.txt").expect("parse");
    let arcs = parse_arcs("0 1 1\n0 1 2\n", "arcs.txt").expect("parse");

    let err = build_graph(nodes, &arcs, "arcs.txt", &LoaderConfig::default()).unwrap_err();
    match err {
        GraphError::Parse { line, details, .. } => {
            assert_eq!(line, 2);
            assert!(details.contains("already exists"));
        }
        e => panic!("Expected Parse, got {:?}", e),
    }
}

#[test]
fn test_load_graph_from_files() {
    let dir = tempdir().expect("Failed to create temp dir");
    let nodes_path = dir.path().join("nodes.txt");
    let arcs_path = dir.path().join("arcs.txt");
    fs::write(&nodes_path, NODES).expect("write nodes");
    fs::write(&arcs_path, ARCS).expect("write arcs");

    let graph = load_graph(&nodes_path, &arcs_path, &LoaderConfig::default()).expect("load");

    assert_eq!(graph.count(), 3);
    assert_eq!(graph.index_of("C").expect("C"), 2);
    assert!(matches!(graph.index_of("Z"), Err(GraphError::NodeNotFound(_))));
}

#[test]
fn test_load_graph_missing_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let err = load_graph(
        dir.path().join("nodes.txt"),
        dir.path().join("arcs.txt"),
        &LoaderConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(err, GraphError::Io(_)));
}
