//! One module per subcommand.

pub mod route;
pub mod show;

use arcway_core::{AdjacencyListGraph, EdgeListGraph, Graph, HashGraph, MatrixGraph};
use clap::ValueEnum;

/// Storage strategy selection. Every strategy behaves identically; the
/// flag exists to exercise interchangeability (and for perf comparison).
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Storage {
    /// Flat edge vector; O(E) lookup.
    EdgeList,
    /// Ordered adjacency maps; the default.
    AdjList,
    /// Dense matrix; O(1) lookup, O(V²) space.
    Matrix,
    /// Hashed adjacency maps.
    Hash,
}

impl Storage {
    /// Construct an empty graph with this strategy.
    pub fn new_graph(self) -> Box<dyn Graph> {
        match self {
            Self::EdgeList => Box::new(EdgeListGraph::new()),
            Self::AdjList => Box::new(AdjacencyListGraph::new()),
            Self::Matrix => Box::new(MatrixGraph::new()),
            Self::Hash => Box::new(HashGraph::new()),
        }
    }
}
