//! arcway-core: mutable directed weighted graphs with interchangeable
//! storage, plus single-source shortest paths.
//!
//! # Overview
//!
//! The [`Graph`] trait is the single contract: four storage strategies
//! ([`EdgeListGraph`], [`AdjacencyListGraph`], [`MatrixGraph`],
//! [`HashGraph`]) satisfy it with identical observable behavior, so the
//! storage choice is purely a performance/space decision. The
//! [`shortest_paths`] engine is written against the trait alone and works
//! with any of them.
//!
//! # Example
//!
//! ```rust
//! use arcway_core::{AdjacencyListGraph, NO_EDGE, shortest_paths};
//! use arcway_core::text::parse::populate;
//!
//! let mut g = AdjacencyListGraph::new();
//! populate(&mut g, "A-B(1), B-C(2), D:")?;
//!
//! let sp = shortest_paths(&g, "A")?;
//! assert_eq!(sp.distance("C"), Some(3));
//! assert_eq!(sp.path_to("C").unwrap(), ["A", "B", "C"]);
//! assert_eq!(sp.distance("D"), Some(NO_EDGE));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Conventions
//!
//! - **Errors**: `Result<T, GraphError>` via `thiserror`; harmless
//!   redundancy is a silent no-op, errors guard invariants.
//! - **Logging**: `tracing` macros; the library never installs a
//!   subscriber.
//! - **Determinism**: `vertices()` and `successors()` are sorted, and the
//!   engine breaks priority ties by label, so output is reproducible
//!   across storage strategies and runs.

pub mod algo;
pub mod error;
pub mod graph;
pub mod text;

pub use algo::{ShortestPaths, shortest_paths};
pub use error::{GraphError, Result};
pub use graph::adjacency_list::AdjacencyListGraph;
pub use graph::adjacency_matrix::MatrixGraph;
pub use graph::edge_list::EdgeListGraph;
pub use graph::hashed::HashGraph;
pub use graph::{Edge, Graph, NO_EDGE};
