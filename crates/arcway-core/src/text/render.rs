//! Canonical string rendering for any graph.

use std::fmt::Write;

use crate::graph::Graph;

/// Render a graph in its canonical text form.
///
/// Vertices appear sorted ascending. A vertex with no outgoing edges
/// renders as `"<label>:"`; each outgoing edge renders as
/// `"<label>-<dest>(<weight>)"` with edges sorted by destination. Entries
/// are joined by `", "`. An empty graph renders as the empty string.
#[must_use]
pub fn canonical<G: Graph + ?Sized>(graph: &G) -> String {
    let mut out = String::new();
    for v in graph.vertices() {
        let succ = graph.successors(&v);
        if succ.is_empty() {
            push_entry(&mut out, &format!("{v}:"));
        } else {
            for w in succ {
                // A listed successor always has a weight; the contract
                // guarantees it.
                let weight = graph.weight(&v, &w).unwrap_or(crate::graph::NO_EDGE);
                let mut entry = String::new();
                let _ = write!(entry, "{v}-{w}({weight})");
                push_entry(&mut out, &entry);
            }
        }
    }
    out
}

fn push_entry(out: &mut String, entry: &str) {
    if !out.is_empty() {
        out.push_str(", ");
    }
    out.push_str(entry);
}
