use std::path::PathBuf;

use graph_rs::graph::AdjacencyList;
use travbench::input::{self, DEFAULT_NODE_COUNT};

pub fn resource(name: &str) -> PathBuf {
    [env!("CARGO_MANIFEST_DIR"), "resources", name].iter().collect()
}

/// 26 node sample graph. Nodes 1..=24 are reachable from node 0, node 25
/// only has an edge back to 0.
pub fn setup() -> AdjacencyList {
    input::load_graph(&resource("sample.txt"), DEFAULT_NODE_COUNT).unwrap()
}
