use std::collections::VecDeque;

use log::{debug, trace};

use crate::{
    Graph, GraphError,
    algorithms::{Distance, Traversal},
    graph::VisitedSet,
};

pub trait BreadthFirstSearch {
    /// Queue based breadth-first search from `start` until `target` is
    /// discovered.
    ///
    /// The distance is the number of nodes discovered strictly before the
    /// target, the start node included. The target is recognised when it is
    /// discovered, not when it is dequeued, so `start == target` is the only
    /// case checked up front and yields `Found(0)`.
    fn bfs(&self, start: usize, target: usize) -> Result<Traversal, GraphError>;
}

impl<G> BreadthFirstSearch for G
where
    G: Graph,
{
    fn bfs(&self, start: usize, target: usize) -> Result<Traversal, GraphError> {
        self.check_node(start)?;
        self.check_node(target)?;

        let mut visited = VisitedSet::new(self.node_count());
        let mut order = vec![start];
        visited.insert(start);

        if start == target {
            return Ok(Traversal {
                distance: Distance::Found(0),
                order,
            });
        }

        let mut frontier = VecDeque::from([start]);
        let mut discovered = 1;

        while let Some(node) = frontier.pop_front() {
            trace!("bfs: expand {node}");

            for &neighbor in self.out_neighbors(node)? {
                self.check_node(neighbor)?;
                if !visited.insert(neighbor) {
                    continue;
                }
                order.push(neighbor);

                if neighbor == target {
                    return Ok(Traversal {
                        distance: Distance::Found(discovered),
                        order,
                    });
                }

                discovered += 1;
                frontier.push_back(neighbor);
            }
        }

        debug!("bfs: node {} not reachable from {}", target, start);

        Ok(Traversal {
            distance: Distance::Unreachable {
                explored: visited.len(),
            },
            order,
        })
    }
}
