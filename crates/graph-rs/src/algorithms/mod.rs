use serde::{Deserialize, Serialize};

pub mod bfs;
pub mod dfs;

pub use bfs::BreadthFirstSearch;
pub use dfs::DepthFirstSearch;

/// Visitation count reported by a traversal.
///
/// This is a measure of work done, not a shortest-path length: it counts the
/// nodes a traversal handled before the target was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Distance {
    Found(usize),
    /// The target is not reachable from the start node. `explored` is the
    /// number of nodes that were reachable.
    Unreachable { explored: usize },
}

impl Distance {
    pub fn found(&self) -> Option<usize> {
        match self {
            Self::Found(distance) => Some(*distance),
            Self::Unreachable { .. } => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Traversal {
    pub distance: Distance,
    /// Nodes in the order they were marked visited.
    pub order: Vec<usize>,
}
