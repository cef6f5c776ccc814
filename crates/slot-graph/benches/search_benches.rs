//! Search and traversal benchmarks on generated grid graphs.
//!
//! ```bash
//! cargo bench --package slot-graph
//! cargo bench --package slot-graph -- astar
//! ```

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use slot_graph::{apply_heuristic, astar_search, bfs_order, dfs_order, Graph, SearchConfig, Waypoint};

/// Grid side lengths.
const GRID_SIDES: &[usize] = &[10, 30, 60];

/// Deterministic extra cost in `[0, 1)` for the arc `from -> to`.
fn jitter(from: usize, to: usize) -> f64 {
    let mut hasher = DefaultHasher::new();
    (from, to).hash(&mut hasher);
    (hasher.finish() % 1000) as f64 / 1000.0
}

/// `side x side` grid, 4-neighbour arcs in both directions, weights in
/// `[1, 2)` so the straight-line heuristic stays admissible.
fn generate_grid(side: usize) -> Graph<Waypoint> {
    let mut graph = Graph::new(side * side);
    for row in 0..side {
        for col in 0..side {
            let name = format!("r{}c{}", row, col);
            graph
                .add_node(Waypoint::new(name, col as f64, row as f64), row * side + col)
                .expect("add_node failed");
        }
    }
    for row in 0..side {
        for col in 0..side {
            let here = row * side + col;
            let mut neighbours = Vec::with_capacity(2);
            if col + 1 < side {
                neighbours.push(here + 1);
            }
            if row + 1 < side {
                neighbours.push(here + side);
            }
            for there in neighbours {
                graph.add_arc(here, there, 1.0 + jitter(here, there)).expect("add_arc failed");
                graph.add_arc(there, here, 1.0 + jitter(there, here)).expect("add_arc failed");
            }
        }
    }
    graph
}

fn bench_astar(c: &mut Criterion) {
    let mut group = c.benchmark_group("astar");
    group.measurement_time(Duration::from_secs(5));

    for &side in GRID_SIDES {
        let goal = side * side - 1;
        let mut template = generate_grid(side);
        apply_heuristic(&mut template, goal, &SearchConfig::default()).expect("heuristic failed");

        group.bench_with_input(BenchmarkId::new("grid_corner_to_corner", side), &side, |b, _| {
            b.iter_batched(
                || template.clone(),
                |mut graph| astar_search(&mut graph, black_box(0), black_box(goal), |_, _| {}),
                criterion::BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

fn bench_traversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("traversal");
    group.measurement_time(Duration::from_secs(5));

    for &side in GRID_SIDES {
        let mut graph = generate_grid(side);

        group.bench_with_input(BenchmarkId::new("bfs", side), &side, |b, _| {
            b.iter(|| bfs_order(&mut graph, black_box(0)))
        });
        group.bench_with_input(BenchmarkId::new("dfs", side), &side, |b, _| {
            b.iter(|| dfs_order(&mut graph, black_box(0)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_astar, bench_traversal);
criterion_main!(benches);
