use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use graph_rs::{
    Graph,
    algorithms::{BreadthFirstSearch, DepthFirstSearch},
    builder,
};
use travbench::bench::default_targets;

const SAMPLE: &str = include_str!("../resources/sample.txt");

pub fn traversal_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("traversal");

    let graph = builder::from_str(26, SAMPLE).unwrap();

    for target in default_targets(graph.node_count()).step_by(6) {
        group.bench_with_input(BenchmarkId::new("dfs", target), &target, |b, t| {
            b.iter(|| graph.dfs(0, *t))
        });
        group.bench_with_input(BenchmarkId::new("bfs", target), &target, |b, t| {
            b.iter(|| graph.bfs(0, *t))
        });
    }

    group.finish();
}

criterion_group!(traversal, traversal_bench);
criterion_main!(traversal);
