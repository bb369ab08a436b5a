//! Single-source shortest paths (Dijkstra) over the graph contract.
//!
//! # Algorithm
//!
//! Each vertex moves through three states, monotonically:
//!
//! 1. **Unvisited** — never reached; tentative distance is the internal
//!    infinity sentinel.
//! 2. **Frontier** — reached at least once and sitting in the priority
//!    structure; its tentative distance may still improve.
//! 3. **Settled** — extracted with the smallest tentative distance; with
//!    non-negative weights that distance is final and the vertex is never
//!    relaxed again.
//!
//! The priority structure is a min-heap of `(distance, label)` entries.
//! When a frontier vertex's tentative distance improves, the improved
//! entry is pushed alongside the old one; stale entries are recognized on
//! pop by comparing against the current distance map and skipped. This is
//! the logical remove-and-reinsert requeue, and the `(distance, label)`
//! key breaks ties by label ascending so extraction order — and therefore
//! predecessor choice among equal-length paths — is deterministic.
//!
//! Termination is guaranteed: states only move forward, and each
//! extraction either settles a vertex or discards a stale entry, of which
//! there are finitely many (one per improvement, at most E).
//!
//! # Output
//!
//! [`ShortestPaths`] carries a distance and a predecessor for **every**
//! vertex of the graph, reachable or not, so callers never need a
//! presence check. Unreachable vertices report the public [`NO_EDGE`]
//! sentinel and no predecessor; the internal infinity sentinel never
//! escapes this module.

#![allow(clippy::must_use_candidate, clippy::module_name_repetitions)]

use std::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap, HashMap};

use tracing::debug;

use crate::error::{GraphError, Result};
use crate::graph::{Graph, NO_EDGE};

/// Internal "not yet reached" distance, strictly greater than any real
/// path length. Converted to [`NO_EDGE`] before results are returned.
const INFINITY: i64 = i64::MAX;

/// Per-vertex bookkeeping state. Transitions are monotone:
/// unvisited → frontier → settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VertexState {
    Unvisited,
    Frontier,
    Settled,
}

// ---------------------------------------------------------------------------
// Result type
// ---------------------------------------------------------------------------

/// Shortest-path distances and predecessor links from one source vertex.
///
/// Both maps cover every vertex that was in the graph at computation
/// time. Distances are exact path lengths, or [`NO_EDGE`] for vertices
/// the source cannot reach. Predecessors record the vertex immediately
/// before each vertex on a shortest path, `None` for the source itself
/// and for unreachable vertices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPaths {
    source: String,
    distance: BTreeMap<String, i64>,
    predecessor: BTreeMap<String, Option<String>>,
}

impl ShortestPaths {
    /// The source vertex this computation started from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The distance to `v`: a path length, [`NO_EDGE`] if unreachable,
    /// or `None` if `v` was not a vertex of the graph.
    pub fn distance(&self, v: &str) -> Option<i64> {
        self.distance.get(v).copied()
    }

    /// The predecessor of `v` on a shortest path, if `v` is reachable
    /// and not the source.
    pub fn predecessor(&self, v: &str) -> Option<&str> {
        self.predecessor.get(v).and_then(|p| p.as_deref())
    }

    /// `true` if a finite-length path from the source to `v` exists.
    pub fn is_reachable(&self, v: &str) -> bool {
        self.distance(v).is_some_and(|d| d != NO_EDGE)
    }

    /// The full distance map, keyed by vertex label.
    pub const fn distances(&self) -> &BTreeMap<String, i64> {
        &self.distance
    }

    /// The full predecessor map, keyed by vertex label.
    pub const fn predecessors(&self) -> &BTreeMap<String, Option<String>> {
        &self.predecessor
    }

    /// Reconstruct the shortest path from the source to `target`, in
    /// source→target order.
    ///
    /// Walks predecessor links backwards from `target`, then reverses.
    /// Returns `None` — never a partial walk — when `target` is
    /// unreachable or was not a vertex of the graph. For the source
    /// itself the path is the single-element `[source]`.
    pub fn path_to(&self, target: &str) -> Option<Vec<String>> {
        if !self.is_reachable(target) {
            return None;
        }
        let mut path = vec![target.to_string()];
        let mut current = target;
        while let Some(prev) = self.predecessor(current) {
            path.push(prev.to_string());
            current = prev;
        }
        path.reverse();
        Some(path)
    }
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// Private per-call working state. Built fresh for every computation and
/// dropped with it; nothing is shared across calls.
struct Engine<'g, G: Graph + ?Sized> {
    graph: &'g G,
    distance: HashMap<String, i64>,
    previous: HashMap<String, Option<String>>,
    state: HashMap<String, VertexState>,
    frontier: BinaryHeap<Reverse<(i64, String)>>,
}

impl<'g, G: Graph + ?Sized> Engine<'g, G> {
    fn new(graph: &'g G) -> Self {
        let labels = graph.vertices();
        let mut distance = HashMap::with_capacity(labels.len());
        let mut previous = HashMap::with_capacity(labels.len());
        let mut state = HashMap::with_capacity(labels.len());
        for v in labels {
            distance.insert(v.clone(), INFINITY);
            previous.insert(v.clone(), None);
            state.insert(v, VertexState::Unvisited);
        }
        Self {
            graph,
            distance,
            previous,
            state,
            frontier: BinaryHeap::new(),
        }
    }

    fn run(&mut self, source: &str) {
        self.distance.insert(source.to_string(), 0);
        self.state.insert(source.to_string(), VertexState::Frontier);
        self.frontier.push(Reverse((0, source.to_string())));
        let mut settled = 0_usize;

        while let Some(Reverse((dist, u))) = self.frontier.pop() {
            if self.distance.get(&u).copied() != Some(dist) {
                // Stale entry: this vertex was requeued with a smaller
                // distance after this entry was pushed.
                continue;
            }
            for v in self.graph.successors(&u) {
                self.relax(&u, dist, &v);
            }
            self.state.insert(u, VertexState::Settled);
            settled += 1;
        }

        debug!(settled, total = self.distance.len(), "dijkstra finished");
    }

    /// Try to improve `v`'s tentative distance through `u`.
    fn relax(&mut self, u: &str, dist_u: i64, v: &str) {
        let Ok(weight) = self.graph.weight(u, v) else {
            return;
        };
        let candidate = dist_u.saturating_add(weight);
        let current = self.distance.get(v).copied().unwrap_or(INFINITY);
        if candidate >= current {
            return;
        }
        self.distance.insert(v.to_string(), candidate);
        self.previous.insert(v.to_string(), Some(u.to_string()));
        match self.state.get(v).copied().unwrap_or(VertexState::Unvisited) {
            VertexState::Unvisited => {
                self.state.insert(v.to_string(), VertexState::Frontier);
                self.frontier.push(Reverse((candidate, v.to_string())));
            }
            VertexState::Frontier => {
                // Requeue with the improved key; the superseded entry is
                // skipped as stale when popped.
                self.frontier.push(Reverse((candidate, v.to_string())));
            }
            // Settled distances are final under non-negative weights;
            // `candidate < current` cannot fire for them.
            VertexState::Settled => {}
        }
    }
}

/// Compute single-source shortest paths from `source`.
///
/// The graph is only read; all working state is private to this call.
/// The resulting maps cover every vertex, with [`NO_EDGE`] / no
/// predecessor for vertices the source cannot reach.
///
/// # Errors
///
/// [`GraphError::VertexNotFound`] if `source` is not a vertex of the
/// graph. No other error is possible for a well-formed graph.
pub fn shortest_paths<G: Graph + ?Sized>(graph: &G, source: &str) -> Result<ShortestPaths> {
    if !graph.contains_vertex(source) {
        return Err(GraphError::VertexNotFound(source.to_string()));
    }

    let mut engine = Engine::new(graph);
    engine.run(source);

    let mut distance = BTreeMap::new();
    let mut predecessor = BTreeMap::new();
    for v in graph.vertices() {
        let d = engine.distance.get(&v).copied().unwrap_or(INFINITY);
        distance.insert(v.clone(), if d == INFINITY { NO_EDGE } else { d });
        let p = engine.previous.get(&v).cloned().unwrap_or(None);
        predecessor.insert(v, p);
    }

    Ok(ShortestPaths {
        source: source.to_string(),
        distance,
        predecessor,
    })
}
