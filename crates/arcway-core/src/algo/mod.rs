//! Algorithms over the graph contract.
//!
//! Everything here consumes a read-only `&G where G: Graph` and allocates
//! its own private working state per call, so running algorithms from
//! several threads over one immutable graph needs no synchronization.

pub mod dijkstra;

pub use dijkstra::{ShortestPaths, shortest_paths};
