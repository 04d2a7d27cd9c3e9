use std::error::Error;

use crate::{graph::AdjacencyList, input::edgelist::EdgeList};

pub struct Uninitialized {}

pub struct FromEdgeList {
    edges: EdgeList,
}

#[derive(Debug)]
pub struct GraphBuilder<State> {
    node_count: usize,
    state: State,
}

impl GraphBuilder<Uninitialized> {
    pub fn new(node_count: usize) -> Self {
        Self {
            node_count,
            state: Uninitialized {},
        }
    }

    pub fn edge_list(self, edges: EdgeList) -> GraphBuilder<FromEdgeList> {
        GraphBuilder {
            node_count: self.node_count,
            state: FromEdgeList { edges },
        }
    }

    /// Parse `s` as `N_<source>,N_<target>` lines.
    pub fn string(
        self,
        s: &str,
    ) -> Result<GraphBuilder<FromEdgeList>, crate::input::edgelist::ParseError> {
        Ok(self.edge_list(EdgeList::try_from(s)?))
    }
}

impl GraphBuilder<FromEdgeList> {
    pub fn build(self) -> Result<AdjacencyList, crate::GraphError> {
        AdjacencyList::from_edge_list(self.node_count, &self.state.edges)
    }
}

/// Parse and build in one step, boxing whichever error occurs.
pub fn from_str(node_count: usize, s: &str) -> Result<AdjacencyList, Box<dyn Error>> {
    Ok(GraphBuilder::new(node_count).string(s)?.build()?)
}

#[cfg(test)]
mod tests {
    use super::GraphBuilder;
    use crate::{Graph, GraphError};

    #[test]
    fn build_from_string() {
        let graph = GraphBuilder::new(26)
            .string("N_0,N_5\nN_0,N_1\nN_5,N_25\n")
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(graph.node_count(), 26);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.out_neighbors(0).unwrap(), &[5, 1]);
        assert_eq!(graph.out_neighbors(5).unwrap(), &[25]);
    }

    #[test]
    fn build_out_of_range() {
        let err = GraphBuilder::new(26)
            .string("N_0,N_26")
            .unwrap()
            .build()
            .unwrap_err();

        assert_eq!(
            err,
            GraphError::InvalidNode {
                node: 26,
                node_count: 26
            }
        );
    }

    #[test]
    fn from_str_boxes_parse_errors() {
        let err = super::from_str(26, "N_0;N_1").unwrap_err();

        assert_eq!(err.to_string(), "line 1: no ',' delimiter found");
    }
}
