//! Hashed-adjacency storage: hash map of vertex → hash map of
//! successor → weight.
//!
//! # Design
//!
//! - **Lookup**: O(1) average via two hash probes.
//! - **Neighbor iteration**: O(degree), unordered internally; sorted on
//!   read so observable output matches every other strategy.
//! - **Vertex removal**: O(V) scan over the outer map for incoming edges.
//!
//! Same shape as [`AdjacencyListGraph`](crate::graph::adjacency_list::AdjacencyListGraph)
//! with hashing constant factors instead of ordered-map guarantees.

#![allow(clippy::must_use_candidate, clippy::module_name_repetitions)]

use std::collections::HashMap;
use std::fmt;

use crate::error::{GraphError, Result};
use crate::graph::Graph;
use crate::text::render;

/// Hashed-adjacency graph backed by nested `HashMap`s.
#[derive(Debug, Clone, Default)]
pub struct HashGraph {
    succ: HashMap<String, HashMap<String, i64>>,
}

impl HashGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Graph for HashGraph {
    fn add_vertex(&mut self, v: &str) {
        self.succ.entry(v.to_string()).or_default();
    }

    fn remove_vertex(&mut self, v: &str) {
        if self.succ.remove(v).is_none() {
            return;
        }
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
        let mut out: Vec<String> = self.succ.keys().cloned().collect();
        out.sort();
        out
    }

    fn successors(&self, v: &str) -> Vec<String> {
        let mut out: Vec<String> = self
            .succ
            .get(v)
            .map(|targets| targets.keys().cloned().collect())
            .unwrap_or_default();
        out.sort();
        out
    }
}

impl fmt::Display for HashGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render::canonical(self))
    }
}

#[cfg(test)]
mod tests {
    use super::HashGraph;
    use crate::graph::Graph;

    #[test]
    fn reads_are_sorted_despite_hash_order() {
        let mut g = HashGraph::new();
        for v in ["J", "C", "A", "F", "B"] {
            g.add_vertex(v);
        }
        assert_eq!(g.vertices(), ["A", "B", "C", "F", "J"]);
        g.add_edge("A", "J", 1).unwrap();
        g.add_edge("A", "B", 1).unwrap();
        g.add_edge("A", "F", 1).unwrap();
        assert_eq!(g.successors("A"), ["B", "F", "J"]);
    }

    #[test]
    fn add_vertex_twice_is_a_no_op() {
        let mut g = HashGraph::new();
        g.add_edge("A", "B", 7).unwrap();
        g.add_vertex("A");
        assert_eq!(g.weight("A", "B").unwrap(), 7);
        assert_eq!(g.vertices(), ["A", "B"]);
    }
}
