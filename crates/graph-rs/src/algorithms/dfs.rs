use std::ops::ControlFlow;

use log::{debug, trace};

use crate::{
    Graph, GraphError,
    algorithms::{Distance, Traversal},
    graph::VisitedSet,
};

struct DfsData {
    target: usize,
    visited: VisitedSet,
    order: Vec<usize>,
    expanded: usize,
}

impl DfsData {
    fn new(node_count: usize, target: usize) -> Self {
        DfsData {
            target,
            visited: VisitedSet::new(node_count),
            order: Vec::new(),
            expanded: 0,
        }
    }

    fn run<G: Graph>(mut self, g: &G, start: usize) -> Result<Traversal, GraphError> {
        let flow = self.search(g, start)?;

        let distance = match flow {
            ControlFlow::Break(()) => Distance::Found(self.expanded),
            ControlFlow::Continue(()) => {
                debug!("dfs: node {} not reachable from {}", self.target, start);
                Distance::Unreachable {
                    explored: self.visited.len(),
                }
            }
        };

        Ok(Traversal {
            distance,
            order: self.order,
        })
    }

    /// Mark `v` visited. Returns `Break` if `v` is the target, otherwise
    /// counts `v` as expanded.
    fn visit(&mut self, v: usize) -> ControlFlow<()> {
        self.visited.insert(v);
        self.order.push(v);
        trace!("dfs: visit {v}");

        if v == self.target {
            return ControlFlow::Break(());
        }
        self.expanded += 1;

        ControlFlow::Continue(())
    }

    /// Depth-first walk with an explicit stack of `(node, next neighbor
    /// index)` frames, so deep graphs do not grow the call stack. Visit order
    /// matches the recursive formulation.
    fn search<G: Graph>(&mut self, g: &G, start: usize) -> Result<ControlFlow<()>, GraphError> {
        if self.visit(start).is_break() {
            return Ok(ControlFlow::Break(()));
        }

        let mut stack = vec![(start, 0)];
        while let Some(frame) = stack.last_mut() {
            let (v, next) = *frame;
            let Some(&w) = g.out_neighbors(v)?.get(next) else {
                stack.pop();
                continue;
            };
            frame.1 += 1;

            g.check_node(w)?;
            if self.visited.contains(w) {
                continue;
            }
            if self.visit(w).is_break() {
                return Ok(ControlFlow::Break(()));
            }
            stack.push((w, 0));
        }

        Ok(ControlFlow::Continue(()))
    }
}

pub trait DepthFirstSearch {
    /// Depth-first search from `start` until `target` is marked.
    ///
    /// The distance counts every node expanded before the target, so it
    /// depends on neighbor order and is the first-found branch, not the
    /// shortest one. `start == target` yields `Found(0)`.
    fn dfs(&self, start: usize, target: usize) -> Result<Traversal, GraphError>;
}

impl<G> DepthFirstSearch for G
where
    G: Graph,
{
    fn dfs(&self, start: usize, target: usize) -> Result<Traversal, GraphError> {
        self.check_node(start)?;
        self.check_node(target)?;

        DfsData::new(self.node_count(), target).run(self, start)
    }
}
