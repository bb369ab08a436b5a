//! Canonical text format: rendering, parsing, and file import.
//!
//! # Grammar
//!
//! A graph is a sequence of entries separated by commas (newlines also
//! separate entries in files):
//!
//! ```text
//! A-B(2), A-C(5), D:
//! ```
//!
//! - `from-to(weight)` — a directed weighted edge.
//! - `label:` — an isolated vertex (no outgoing edges).
//! - `from-to` (bare, no weight) — a shortest-path question; legal only
//!   as the final entry of an imported file, never in a graph string.
//!
//! Rendering is canonical: vertices sorted ascending, each vertex's edges
//! sorted by destination, entries joined by `", "`. Every storage
//! strategy's `Display` delegates to [`render::canonical`], so a graph's
//! serialization never depends on its representation.
//!
//! Parsing feeds the graph exclusively through the ordinary mutating
//! operations, so the contract's validation (negative weights, duplicate
//! edges) applies to imported data exactly as it does to programmatic
//! mutation.

#![allow(clippy::module_name_repetitions)]

pub mod import;
pub mod parse;
pub mod render;

use crate::error::GraphError;

/// Errors from parsing or importing graph text.
#[derive(Debug, thiserror::Error)]
pub enum TextError {
    /// Reading the input file failed.
    #[error("failed to read graph file: {0}")]
    Io(#[from] std::io::Error),

    /// A token did not match the grammar.
    #[error("bad token {token:?}: {reason}")]
    BadToken {
        /// The offending token, as written in the input.
        token: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The parsed data violated a graph invariant.
    #[error(transparent)]
    Graph(#[from] GraphError),
}
