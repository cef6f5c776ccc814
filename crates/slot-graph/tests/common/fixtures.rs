//! Deterministic graph fixtures.

use slot_graph::{Graph, NodeIndex, Waypoint};

/// Small road map, arc weights at least the straight-line distance.
///
/// ```text
///        B(3,4)
///       /      \
/// A(0,0) --7-- C(6,0) --6-- G(12,0)
///       \      /
///        D(3,-4)
/// ```
pub const MAP_NODES: &str = "\
A 0 0
B 3 4
C 6 0
D 3 -4
G 12 0
";

/// Arcs in the order the loader adds them.
pub const MAP_ARCS: &str = "\
0 1 5
0 3 5
0 2 7
1 2 5
3 2 5
2 4 6
";

/// Slot of the node at grid cell `(row, col)`.
pub fn cell(cols: usize, row: usize, col: usize) -> NodeIndex {
    row * cols + col
}

/// `rows x cols` grid with unit arcs between 4-neighbours in both directions.
pub fn grid(rows: usize, cols: usize) -> Graph<Waypoint> {
    let mut graph = Graph::new(rows * cols);
    for row in 0..rows {
        for col in 0..cols {
            let name = format!("r{}c{}", row, col);
            graph
                .add_node(Waypoint::new(name, col as f64, row as f64), cell(cols, row, col))
                .expect("add_node failed");
        }
    }
    for row in 0..rows {
        for col in 0..cols {
            let here = cell(cols, row, col);
            if col + 1 < cols {
                let right = cell(cols, row, col + 1);
                graph.add_arc(here, right, 1.0).expect("add_arc failed");
                graph.add_arc(right, here, 1.0).expect("add_arc failed");
            }
            if row + 1 < rows {
                let down = cell(cols, row + 1, col);
                graph.add_arc(here, down, 1.0).expect("add_arc failed");
                graph.add_arc(down, here, 1.0).expect("add_arc failed");
            }
        }
    }
    graph
}

/// Check that every consecutive pair of `path` is joined by an arc and
/// return the summed weight.
pub fn path_weight<T>(graph: &Graph<T>, path: &[NodeIndex]) -> f64 {
    path.windows(2)
        .map(|pair| {
            graph
                .get_arc(pair[0], pair[1])
                .unwrap_or_else(|| panic!("no arc {} -> {} on path", pair[0], pair[1]))
                .weight()
        })
        .sum()
}
