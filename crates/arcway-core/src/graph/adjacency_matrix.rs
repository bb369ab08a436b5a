//! Dense adjacency-matrix storage: label→index map plus a V×V weight
//! matrix with [`NO_EDGE`] holes.
//!
//! # Design
//!
//! - **Lookup**: O(1) once both labels resolve to indices.
//! - **Space**: O(V²) — the trade-off this strategy makes.
//! - **Vertex insertion**: grows the matrix by one row and one column.
//! - **Vertex removal**: removes the row and column and reindexes the
//!   remaining labels; O(V²).
//!
//! Cells hold real weights (≥ 0) or [`NO_EDGE`]; the sentinel never
//! collides with a weight because weights are validated non-negative on
//! the way in.

#![allow(clippy::must_use_candidate, clippy::module_name_repetitions)]

use std::collections::HashMap;
use std::fmt;

use crate::error::{GraphError, Result};
use crate::graph::{Graph, NO_EDGE};
use crate::text::render;

/// Adjacency-matrix graph.
///
/// Row index = source, column index = destination. `labels[i]` is the
/// label for index `i`; `index` is the reverse mapping.
#[derive(Debug, Clone, Default)]
pub struct MatrixGraph {
    index: HashMap<String, usize>,
    labels: Vec<String>,
    matrix: Vec<Vec<i64>>,
}

impl MatrixGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    fn cell(&self, from: &str, to: &str) -> Option<i64> {
        let row = *self.index.get(from)?;
        let col = *self.index.get(to)?;
        Some(self.matrix[row][col])
    }
}

impl Graph for MatrixGraph {
    fn add_vertex(&mut self, v: &str) {
        if self.index.contains_key(v) {
            return;
        }
        let i = self.labels.len();
        self.labels.push(v.to_string());
        self.index.insert(v.to_string(), i);
        for row in &mut self.matrix {
            row.push(NO_EDGE);
        }
        self.matrix.push(vec![NO_EDGE; i + 1]);
    }

    fn remove_vertex(&mut self, v: &str) {
        let Some(i) = self.index.remove(v) else {
            return;
        };
        self.labels.remove(i);
        self.matrix.remove(i);
        for row in &mut self.matrix {
            row.remove(i);
        }
        // Indices past the removed slot all shifted down by one.
        for (pos, label) in self.labels.iter().enumerate() {
            self.index.insert(label.clone(), pos);
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
        let row = self.index[from];
        let col = self.index[to];
        self.matrix[row][col] = weight;
        Ok(())
    }

    fn remove_edge(&mut self, from: &str, to: &str) -> Result<()> {
        if !self.contains_edge(from, to) {
            return Err(GraphError::EdgeNotFound {
                from: from.to_string(),
                to: to.to_string(),
            });
        }
        let row = self.index[from];
        let col = self.index[to];
        self.matrix[row][col] = NO_EDGE;
        Ok(())
    }

    fn contains_vertex(&self, v: &str) -> bool {
        self.index.contains_key(v)
    }

    fn contains_edge(&self, from: &str, to: &str) -> bool {
        self.cell(from, to).is_some_and(|w| w != NO_EDGE)
    }

    fn weight(&self, from: &str, to: &str) -> Result<i64> {
        match self.cell(from, to) {
            Some(w) if w != NO_EDGE => Ok(w),
            _ => Err(GraphError::EdgeNotFound {
                from: from.to_string(),
                to: to.to_string(),
            }),
        }
    }

    fn vertices(&self) -> Vec<String> {
        let mut out = self.labels.clone();
        out.sort();
        out
    }

    fn successors(&self, v: &str) -> Vec<String> {
        let Some(&row) = self.index.get(v) else {
            return Vec::new();
        };
        let mut out: Vec<String> = self.matrix[row]
            .iter()
            .enumerate()
            .filter(|&(_, &w)| w != NO_EDGE)
            .map(|(col, _)| self.labels[col].clone())
            .collect();
        out.sort();
        out
    }
}

impl fmt::Display for MatrixGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render::canonical(self))
    }
}

#[cfg(test)]
mod tests {
    use super::MatrixGraph;
    use crate::graph::Graph;

    #[test]
    fn zero_weight_edge_is_distinct_from_no_edge() {
        let mut g = MatrixGraph::new();
        g.add_edge("A", "B", 0).unwrap();
        assert!(g.contains_edge("A", "B"));
        assert_eq!(g.weight("A", "B").unwrap(), 0);
        assert!(!g.contains_edge("B", "A"));
    }

    #[test]
    fn matrix_shrinks_and_reindexes_on_vertex_removal() {
        let mut g = MatrixGraph::new();
        g.add_edge("A", "B", 1).unwrap();
        g.add_edge("B", "C", 2).unwrap();
        g.add_edge("C", "A", 3).unwrap();
        g.remove_vertex("B");
        assert_eq!(g.vertices(), ["A", "C"]);
        assert!(g.contains_edge("C", "A"));
        assert!(!g.contains_edge("A", "B"));
        assert!(!g.contains_edge("B", "C"));
        // Reuse after removal must not resurrect old cells.
        g.add_vertex("B");
        assert!(!g.contains_edge("A", "B"));
        assert!(!g.contains_edge("B", "C"));
    }

    #[test]
    fn self_loops_are_legal() {
        let mut g = MatrixGraph::new();
        g.add_edge("A", "A", 4).unwrap();
        assert!(g.contains_edge("A", "A"));
        assert_eq!(g.successors("A"), ["A"]);
    }
}
