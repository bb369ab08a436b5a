//! The graph contract and its storage strategies.
//!
//! # Overview
//!
//! A graph here is a mutable, directed, edge-weighted graph over string
//! vertex labels: at most one edge per ordered pair, integer weights ≥ 0,
//! no payload on vertices beyond their label. The [`Graph`] trait is the
//! single contract every storage strategy satisfies; algorithms are written
//! against the trait and never against a concrete representation.
//!
//! # Storage strategies
//!
//! | Strategy                                      | Lookup    | Space  |
//! |-----------------------------------------------|-----------|--------|
//! | [`EdgeListGraph`](edge_list::EdgeListGraph)   | O(E)      | O(V+E) |
//! | [`AdjacencyListGraph`](adjacency_list::AdjacencyListGraph) | O(log V) | O(V+E) |
//! | [`MatrixGraph`](adjacency_matrix::MatrixGraph) | O(1)     | O(V²)  |
//! | [`HashGraph`](hashed::HashGraph)              | O(1) avg  | O(V+E) |
//!
//! The choice is purely a performance/space decision: every strategy
//! produces identical observable results for every contract operation,
//! including identical [`Display`](std::fmt::Display) serialization and
//! identical shortest-path output.
//!
//! # Invariants
//!
//! - Every edge's endpoints are present vertices.
//! - Edge weights are non-negative; a negative weight is rejected before
//!   any mutation, so an invalid `add_edge` inserts neither endpoint.
//! - Removing a vertex cascades over every incident edge, incoming and
//!   outgoing.
//! - `vertices()` and `successors()` are sorted ascending by label, so
//!   output is deterministic across strategies.

#![allow(clippy::must_use_candidate, clippy::module_name_repetitions)]

use std::cmp::Ordering;
use std::fmt;

use crate::error::Result;

pub mod adjacency_list;
pub mod adjacency_matrix;
pub mod edge_list;
pub mod hashed;

/// Sentinel weight meaning "no edge / unreachable".
///
/// Reserved for read paths designed to tolerate absence — distance maps
/// use it for unreachable vertices, and [`MatrixGraph`](adjacency_matrix::MatrixGraph)
/// uses it internally for empty cells. [`Graph::weight`] never returns it;
/// a missing edge is an error there.
pub const NO_EDGE: i64 = -1;

// ---------------------------------------------------------------------------
// Edge
// ---------------------------------------------------------------------------

/// A directed weighted edge between two vertex labels.
///
/// Orders by source label, then destination label (the canonical
/// serialization order), with the weight as a last tiebreaker so
/// ordering stays consistent with equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge {
    /// Source vertex label.
    pub from: String,
    /// Destination vertex label.
    pub to: String,
    /// Non-negative weight.
    pub weight: i64,
}

impl Edge {
    /// Build an edge without validating the weight; validation belongs to
    /// [`Graph::add_edge`].
    pub fn new(from: impl Into<String>, to: impl Into<String>, weight: i64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }
}

impl PartialOrd for Edge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Edge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.from
            .cmp(&other.from)
            .then_with(|| self.to.cmp(&other.to))
            .then_with(|| self.weight.cmp(&other.weight))
    }
}

impl fmt::Display for Edge {
    /// Renders as `from-to(weight)`, the canonical text form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}({})", self.from, self.to, self.weight)
    }
}

// ---------------------------------------------------------------------------
// Graph contract
// ---------------------------------------------------------------------------

/// The mutable directed weighted graph contract.
///
/// All storage strategies behave identically through this trait; see the
/// module docs for the invariants. Harmless redundancy is a silent no-op
/// (`add_vertex` on a present vertex, `remove_vertex` on an absent one);
/// errors are reserved for operations that would otherwise corrupt an
/// invariant.
pub trait Graph {
    /// Insert a vertex with no edges. No-op if already present.
    fn add_vertex(&mut self, v: &str);

    /// Remove a vertex and every edge incident to it. No-op if absent.
    fn remove_vertex(&mut self, v: &str);

    /// Insert a directed edge `from → to` with the given weight,
    /// inserting missing endpoint vertices first.
    ///
    /// # Errors
    ///
    /// - [`GraphError::InvalidEdge`](crate::GraphError::InvalidEdge) if
    ///   `weight < 0`. Rejection happens before any mutation: missing
    ///   endpoints are not inserted either.
    /// - [`GraphError::DuplicateEdge`](crate::GraphError::DuplicateEdge)
    ///   if the ordered pair already has an edge.
    fn add_edge(&mut self, from: &str, to: &str, weight: i64) -> Result<()>;

    /// Remove the edge `from → to`, leaving both vertices intact.
    ///
    /// # Errors
    ///
    /// [`GraphError::EdgeNotFound`](crate::GraphError::EdgeNotFound) if no
    /// such edge exists.
    fn remove_edge(&mut self, from: &str, to: &str) -> Result<()>;

    /// `true` if the vertex is present. Never fails.
    fn contains_vertex(&self, v: &str) -> bool;

    /// `true` if the edge `from → to` is present. Never fails.
    fn contains_edge(&self, from: &str, to: &str) -> bool;

    /// The weight of the edge `from → to`.
    ///
    /// # Errors
    ///
    /// [`GraphError::EdgeNotFound`](crate::GraphError::EdgeNotFound) if no
    /// such edge exists. Callers that must tolerate absence should test
    /// with [`Graph::contains_edge`] or use [`NO_EDGE`]-based read paths.
    fn weight(&self, from: &str, to: &str) -> Result<i64>;

    /// All vertex labels, sorted ascending.
    fn vertices(&self) -> Vec<String>;

    /// All labels `w` such that the edge `v → w` exists, sorted ascending.
    /// Empty for an unknown vertex.
    fn successors(&self, v: &str) -> Vec<String>;
}

#[cfg(test)]
mod tests {
    use super::Edge;

    #[test]
    fn edge_orders_by_source_then_destination() {
        let mut edges = vec![
            Edge::new("B", "A", 1),
            Edge::new("A", "C", 2),
            Edge::new("A", "B", 3),
        ];
        edges.sort();
        let rendered: Vec<String> = edges.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, ["A-B(3)", "A-C(2)", "B-A(1)"]);
    }
}
