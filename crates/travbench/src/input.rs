use std::{fs, io, path::Path};

use graph_rs::{Graph, builder::GraphBuilder, graph::AdjacencyList};
use log::info;

use crate::error::Error;

/// Default edge list read when no input file is given.
pub const DEFAULT_INPUT: &str = "Test_Case_Assignment2.txt";

/// Default node capacity of the graph.
pub const DEFAULT_NODE_COUNT: usize = 26;

/// Read an `N_<source>,N_<target>` edge list from `path` into a graph with
/// `node_count` nodes.
pub fn load_graph(path: &Path, node_count: usize) -> Result<AdjacencyList, Error> {
    info!("Build graph from {:?}", path);

    let content = fs::read_to_string(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => Error::FileNotFound(path.to_path_buf()),
        _ => Error::Io(err),
    })?;

    let graph = GraphBuilder::new(node_count).string(&content)?.build()?;
    info!(
        "Loaded graph: {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    Ok(graph)
}
