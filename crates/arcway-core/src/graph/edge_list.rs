//! Edge-list storage: a flat vector of edges plus a vertex set.
//!
//! # Design
//!
//! - **Insertion**: O(1) amortized push (after the O(E) duplicate scan
//!   the contract requires).
//! - **Lookup**: O(E) linear scan — the trade-off this strategy makes.
//! - **Vertex removal**: one `retain` pass over the edge vector.
//!
//! The vertex set is kept separately so isolated vertices (no incident
//! edges) survive without placeholder edges.

#![allow(clippy::must_use_candidate, clippy::module_name_repetitions)]

use std::collections::BTreeSet;
use std::fmt;

use crate::error::{GraphError, Result};
use crate::graph::{Edge, Graph};
use crate::text::render;

/// Edge-list graph backed by `Vec<Edge>`.
#[derive(Debug, Clone, Default)]
pub struct EdgeListGraph {
    edges: Vec<Edge>,
    vertices: BTreeSet<String>,
}

impl EdgeListGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    fn find(&self, from: &str, to: &str) -> Option<usize> {
        self.edges
            .iter()
            .position(|e| e.from == from && e.to == to)
    }
}

impl Graph for EdgeListGraph {
    fn add_vertex(&mut self, v: &str) {
        self.vertices.insert(v.to_string());
    }

    fn remove_vertex(&mut self, v: &str) {
        if !self.vertices.remove(v) {
            return;
        }
        self.edges.retain(|e| e.from != v && e.to != v);
    }

    fn add_edge(&mut self, from: &str, to: &str, weight: i64) -> Result<()> {
        if weight < 0 {
            return Err(GraphError::InvalidEdge {
                from: from.to_string(),
                to: to.to_string(),
                weight,
            });
        }
        if self.find(from, to).is_some() {
            return Err(GraphError::DuplicateEdge {
                from: from.to_string(),
                to: to.to_string(),
            });
        }
        self.add_vertex(from);
        self.add_vertex(to);
        self.edges.push(Edge::new(from, to, weight));
        Ok(())
    }

    fn remove_edge(&mut self, from: &str, to: &str) -> Result<()> {
        match self.find(from, to) {
            Some(i) => {
                self.edges.remove(i);
                Ok(())
            }
            None => Err(GraphError::EdgeNotFound {
                from: from.to_string(),
                to: to.to_string(),
            }),
        }
    }

    fn contains_vertex(&self, v: &str) -> bool {
        self.vertices.contains(v)
    }

    fn contains_edge(&self, from: &str, to: &str) -> bool {
        self.find(from, to).is_some()
    }

    fn weight(&self, from: &str, to: &str) -> Result<i64> {
        self.find(from, to)
            .map(|i| self.edges[i].weight)
            .ok_or_else(|| GraphError::EdgeNotFound {
                from: from.to_string(),
                to: to.to_string(),
            })
    }

    fn vertices(&self) -> Vec<String> {
        self.vertices.iter().cloned().collect()
    }

    fn successors(&self, v: &str) -> Vec<String> {
        let mut out: Vec<String> = self
            .edges
            .iter()
            .filter(|e| e.from == v)
            .map(|e| e.to.clone())
            .collect();
        out.sort();
        out
    }
}

impl fmt::Display for EdgeListGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render::canonical(self))
    }
}
