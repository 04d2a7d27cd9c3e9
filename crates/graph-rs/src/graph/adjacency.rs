use std::fmt::Display;

use log::{info, trace};
use serde::{Deserialize, Serialize};

use crate::{Graph, GraphError, input::edgelist::EdgeList};

/// Directed graph over the nodes `0..node_count`, stored as one neighbor
/// list per node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AdjacencyListData")]
pub struct AdjacencyList {
    targets: Vec<Vec<usize>>,
    edge_count: usize,
}

/// Serialized form of [`AdjacencyList`]. `edge_count` is recomputed.
#[derive(Deserialize)]
struct AdjacencyListData {
    targets: Vec<Vec<usize>>,
}

impl TryFrom<AdjacencyListData> for AdjacencyList {
    type Error = GraphError;

    fn try_from(value: AdjacencyListData) -> Result<Self, Self::Error> {
        let mut graph = Self::new(value.targets.len())?;
        for (source, targets) in value.targets.into_iter().enumerate() {
            for target in targets {
                graph.add_edge(source, target)?;
            }
        }

        Ok(graph)
    }
}

impl AdjacencyList {
    /// Create a graph with `node_count` nodes and no edges.
    pub fn new(node_count: usize) -> Result<AdjacencyList, GraphError> {
        if node_count == 0 {
            return Err(GraphError::EmptyGraph);
        }

        Ok(Self {
            targets: vec![Vec::new(); node_count],
            edge_count: 0,
        })
    }

    /// Create a graph with `node_count` nodes holding every edge of
    /// `edge_list` in list order.
    pub fn from_edge_list(
        node_count: usize,
        edge_list: &EdgeList,
    ) -> Result<AdjacencyList, GraphError> {
        let mut graph = Self::new(node_count)?;
        for (source, target) in edge_list.edges() {
            graph.add_edge(source, target)?;
        }

        info!(
            "Created adjacency list (node_count: {:?}, edge_count = {:?})",
            graph.node_count(),
            graph.edge_count()
        );

        Ok(graph)
    }

    /// Append `b` to the neighbors of `a`.
    ///
    /// Parallel edges and self-loops are kept as given. Fails without
    /// touching the graph if either endpoint is out of range.
    pub fn add_edge(&mut self, a: usize, b: usize) -> Result<(), GraphError> {
        self.check_node(a)?;
        self.check_node(b)?;

        trace!("add edge {a} -> {b}");
        self.targets[a].push(b);
        self.edge_count += 1;

        Ok(())
    }

    pub fn nodes_iter(&self) -> impl Iterator<Item = (usize, &[usize])> {
        self.targets
            .iter()
            .enumerate()
            .map(|(node, targets)| (node, targets.as_slice()))
    }
}

impl Graph for AdjacencyList {
    fn node_count(&self) -> usize {
        self.targets.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn out_neighbors(&self, node: usize) -> Result<&[usize], GraphError> {
        self.targets
            .get(node)
            .map(Vec::as_slice)
            .ok_or(GraphError::InvalidNode {
                node,
                node_count: self.node_count(),
            })
    }
}

/// One line per node: `<node>: <neighbor> <neighbor> ...`.
impl Display for AdjacencyList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (node, targets) in self.nodes_iter() {
            write!(f, "{node}:")?;
            for target in targets {
                write!(f, " {target}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> AdjacencyList {
        let edges = EdgeList::new(vec![
            (0, 3),
            (0, 5),
            (1, 0),
            (1, 5),
            (2, 4),
            (3, 0),
            (3, 2),
            (4, 1),
        ]);

        AdjacencyList::from_edge_list(6, &edges).unwrap()
    }

    #[test]
    fn empty_graph_is_rejected() {
        assert_eq!(AdjacencyList::new(0), Err(GraphError::EmptyGraph));
    }

    #[test]
    fn neighbors_keep_insertion_order() {
        let mut graph = AdjacencyList::new(4).unwrap();
        graph.add_edge(0, 3).unwrap();
        graph.add_edge(0, 1).unwrap();
        graph.add_edge(0, 2).unwrap();
        graph.add_edge(0, 1).unwrap();

        assert_eq!(graph.out_neighbors(0).unwrap(), &[3, 1, 2, 1]);
        assert_eq!(graph.edge_count(), 4, "Parallel edges are not merged.");
    }

    #[test]
    fn self_loops_are_kept() {
        let mut graph = AdjacencyList::new(2).unwrap();
        graph.add_edge(1, 1).unwrap();

        assert_eq!(graph.out_neighbors(1).unwrap(), &[1]);
    }

    #[test]
    fn degrees() {
        let graph = setup();

        assert_eq!(graph.node_count(), 6);
        assert_eq!(graph.edge_count(), 8);
        assert_eq!(graph.out_neighbors(0).unwrap().len(), 2, "Out degree of node 0.");
        assert_eq!(graph.out_neighbors(5).unwrap().len(), 0, "Out degree of node 5.");
        assert_eq!(graph.out_neighbors(3).unwrap(), &[0, 2]);
    }

    #[test]
    fn add_edge_out_of_range() {
        let mut graph = AdjacencyList::new(3).unwrap();

        assert_eq!(
            graph.add_edge(0, 3),
            Err(GraphError::InvalidNode {
                node: 3,
                node_count: 3
            })
        );
        assert_eq!(
            graph.add_edge(7, 0),
            Err(GraphError::InvalidNode {
                node: 7,
                node_count: 3
            })
        );
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.out_neighbors(0).unwrap().is_empty());
    }

    #[test]
    fn neighbors_out_of_range() {
        let graph = setup();

        assert_eq!(
            graph.out_neighbors(6),
            Err(GraphError::InvalidNode {
                node: 6,
                node_count: 6
            })
        );
    }

    #[test]
    fn from_edge_list_out_of_range() {
        let edges = EdgeList::new(vec![(0, 1), (30, 20)]);

        assert_eq!(
            AdjacencyList::from_edge_list(26, &edges),
            Err(GraphError::InvalidNode {
                node: 30,
                node_count: 26
            })
        );
    }

    #[test]
    fn display() {
        let mut graph = AdjacencyList::new(3).unwrap();
        graph.add_edge(0, 1).unwrap();
        graph.add_edge(0, 2).unwrap();
        graph.add_edge(2, 0).unwrap();

        assert_eq!(graph.to_string(), "0: 1 2\n1:\n2: 0\n");
    }

    #[test]
    fn deserialize_rejects_out_of_range_neighbor() {
        let result = serde_json::from_str::<AdjacencyList>(r#"{"targets":[[5],[]],"edge_count":1}"#);

        let err = result.unwrap_err();
        assert!(
            err.to_string()
                .contains("node_id: 5 is out of range for a graph with 2 nodes"),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn deserialize_rejects_empty_graph() {
        assert!(serde_json::from_str::<AdjacencyList>(r#"{"targets":[],"edge_count":0}"#).is_err());
    }

    #[test]
    fn deserialize_recomputes_edge_count() {
        let graph: AdjacencyList =
            serde_json::from_str(r#"{"targets":[[1,1],[0],[]],"edge_count":42}"#).unwrap();

        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.out_neighbors(0).unwrap(), &[1, 1]);
    }

    #[test]
    fn serde_roundtrip() {
        let graph = setup();

        let json = serde_json::to_string(&graph).unwrap();
        let deserialized: AdjacencyList = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized, graph);
    }
}
