use std::{error::Error, fmt::Display};

pub mod algorithms;
pub mod builder;
pub mod graph;
pub mod input;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    InvalidNode { node: usize, node_count: usize },
    EmptyGraph,
}

impl Error for GraphError {}

impl Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidNode { node, node_count } => write!(
                f,
                "node_id: {} is out of range for a graph with {} nodes",
                node, node_count
            ),
            Self::EmptyGraph => write!(f, "graph must contain at least one node"),
        }
    }
}

pub trait Graph {
    fn node_count(&self) -> usize;

    fn edge_count(&self) -> usize;

    /// Returns the out-neighbors of `node` in edge insertion order.
    fn out_neighbors(&self, node: usize) -> Result<&[usize], GraphError>;

    fn check_node(&self, node: usize) -> Result<(), GraphError> {
        if node < self.node_count() {
            Ok(())
        } else {
            Err(GraphError::InvalidNode {
                node,
                node_count: self.node_count(),
            })
        }
    }
}
