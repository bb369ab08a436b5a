//! Adjacency-list storage: ordered map of vertex → ordered map of
//! successor → weight.
//!
//! # Design
//!
//! - **Lookup**: O(log V) per edge query via two `BTreeMap` descents.
//! - **Neighbor iteration**: O(degree), already in label order — the
//!   canonical serialization order falls out of the representation.
//! - **Vertex removal**: O(V log V) worst case, scanning every inner map
//!   for incoming edges.
//!
//! This is the default strategy: predictable ordering with no sort on
//! read, and no quadratic space.

#![allow(clippy::must_use_candidate, clippy::module_name_repetitions)]

use std::collections::BTreeMap;
use std::fmt;

use crate::error::{GraphError, Result};
use crate::graph::Graph;
use crate::text::render;

/// Adjacency-list graph backed by nested `BTreeMap`s.
///
/// The outer map's key set is the vertex set; an isolated vertex is a key
/// with an empty inner map.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyListGraph {
    succ: BTreeMap<String, BTreeMap<String, i64>>,
}

impl AdjacencyListGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Graph for AdjacencyListGraph {
    fn add_vertex(&mut self, v: &str) {
        self.succ.entry(v.to_string()).or_default();
    }

    fn remove_vertex(&mut self, v: &str) {
        if self.succ.remove(v).is_none() {
            return;
        }
        // Cascade: drop incoming edges from every other vertex.
        for targets in self.succ.values_mut() {
            targets.remove(v);
        }
    }

    fn add_edge(&mut self, from: &str, to: &str, weight: i64) -> Result<()> {
        if weight < 0 {
            return Err(GraphError::InvalidEdge {
                from: from.to_string(),
                to: to.to_string(),
                weight,
            });
        }
        if self.contains_edge(from, to) {
            return Err(GraphError::DuplicateEdge {
                from: from.to_string(),
                to: to.to_string(),
            });
        }
        self.add_vertex(from);
        self.add_vertex(to);
        if let Some(targets) = self.succ.get_mut(from) {
            targets.insert(to.to_string(), weight);
        }
        Ok(())
    }

    fn remove_edge(&mut self, from: &str, to: &str) -> Result<()> {
        let removed = self
            .succ
            .get_mut(from)
            .and_then(|targets| targets.remove(to));
        if removed.is_none() {
            return Err(GraphError::EdgeNotFound {
                from: from.to_string(),
                to: to.to_string(),
            });
        }
        Ok(())
    }

    fn contains_vertex(&self, v: &str) -> bool {
        self.succ.contains_key(v)
    }

    fn contains_edge(&self, from: &str, to: &str) -> bool {
        self.succ
            .get(from)
            .is_some_and(|targets| targets.contains_key(to))
    }

    fn weight(&self, from: &str, to: &str) -> Result<i64> {
        self.succ
            .get(from)
            .and_then(|targets| targets.get(to))
            .copied()
            .ok_or_else(|| GraphError::EdgeNotFound {
                from: from.to_string(),
                to: to.to_string(),
            })
    }

    fn vertices(&self) -> Vec<String> {
        self.succ.keys().cloned().collect()
    }

    fn successors(&self, v: &str) -> Vec<String> {
        self.succ
            .get(v)
            .map(|targets| targets.keys().cloned().collect())
            .unwrap_or_default()
    }
}

impl fmt::Display for AdjacencyListGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render::canonical(self))
    }
}
