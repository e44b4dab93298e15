//! Benchmarks for state-graph construction and shortest-path search.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench solver
//! ```

use std::hint;

use criterion::{Criterion, criterion_group, criterion_main};
use guarini_core::Board;
use guarini_solver::{StateGraph, shortest_path};

fn bench_explore(c: &mut Criterion) {
    c.bench_function("explore_initial", |b| {
        b.iter(|| StateGraph::explore(hint::black_box(Board::INITIAL)).unwrap());
    });
}

fn bench_shortest_path(c: &mut Criterion) {
    let graph = StateGraph::explore(Board::INITIAL).unwrap();
    c.bench_function("shortest_path_initial_goal", |b| {
        b.iter(|| {
            shortest_path(
                &graph,
                hint::black_box(Board::INITIAL),
                hint::black_box(Board::GOAL),
            )
            .unwrap()
        });
    });
}

criterion_group!(benches, bench_explore, bench_shortest_path);
criterion_main!(benches);
