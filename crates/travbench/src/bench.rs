use std::{
    fmt::Display,
    ops::Range,
    time::{Duration, Instant},
};

use graph_rs::{
    Graph, GraphError,
    algorithms::{BreadthFirstSearch, DepthFirstSearch, Distance, Traversal},
};
use clap::ValueEnum;
use log::{debug, trace};
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Dfs,
    Bfs,
}

impl Algorithm {
    pub fn run<G: Graph>(
        &self,
        graph: &G,
        start: usize,
        target: usize,
    ) -> Result<Traversal, GraphError> {
        match self {
            Self::Dfs => graph.dfs(start, target),
            Self::Bfs => graph.bfs(start, target),
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dfs => write!(f, "DFS"),
            Self::Bfs => write!(f, "BFS"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraversalResult {
    distance: Distance,
    elapsed: Duration,
}

impl TraversalResult {
    pub fn new(distance: Distance, elapsed: Duration) -> Self {
        Self { distance, elapsed }
    }

    pub fn distance(&self) -> Distance {
        self.distance
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

/// Run one traversal from `start` to `target` and time it.
///
/// Both nodes are validated before the clock starts; the graph is only read.
pub fn measure<G: Graph>(
    algorithm: Algorithm,
    start: usize,
    target: usize,
    graph: &G,
) -> Result<TraversalResult, GraphError> {
    graph.check_node(start)?;
    graph.check_node(target)?;

    let start_time = Instant::now();
    let traversal = algorithm.run(graph, start, target)?;
    let elapsed = start_time.elapsed();

    trace!(
        "{algorithm} {start} -> {target}: visited {:?} in {:?}",
        traversal.order, elapsed
    );

    Ok(TraversalResult::new(traversal.distance, elapsed))
}

/// BFS and DFS results for one `(start, target)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comparison {
    pub start: usize,
    pub target: usize,
    pub bfs: TraversalResult,
    pub dfs: TraversalResult,
}

pub fn compare<G: Graph>(
    start: usize,
    target: usize,
    graph: &G,
) -> Result<Comparison, GraphError> {
    let bfs = measure(Algorithm::Bfs, start, target, graph)?;
    let dfs = measure(Algorithm::Dfs, start, target, graph)?;

    debug!(
        "{start} -> {target}: bfs {:?} ({:?}), dfs {:?} ({:?})",
        bfs.distance, bfs.elapsed, dfs.distance, dfs.elapsed
    );

    Ok(Comparison {
        start,
        target,
        bfs,
        dfs,
    })
}

/// Compare BFS and DFS from `start` to every node in `targets`.
///
/// With `parallel` the pairs are spread over the rayon thread pool. The
/// result keeps the order of `targets` either way.
pub fn compare_all<G: Graph + Sync>(
    start: usize,
    targets: &[usize],
    graph: &G,
    parallel: bool,
) -> Result<Vec<Comparison>, GraphError> {
    if parallel {
        targets
            .par_iter()
            .map(|target| compare(start, *target, graph))
            .collect()
    } else {
        targets
            .iter()
            .map(|target| compare(start, *target, graph))
            .collect()
    }
}

/// Targets `1..=node_count - 2`, one table row each.
pub fn default_targets(node_count: usize) -> Range<usize> {
    1..node_count.saturating_sub(1).max(1)
}
