pub mod adjacency;
pub mod visited;

pub use adjacency::AdjacencyList;
pub use visited::VisitedSet;
