//! Error types for graph mutation and queries.
//!
//! Every error here is synchronous, local, and recoverable by the caller —
//! none is fatal to the process. Redundant-but-harmless operations
//! (re-adding a vertex, removing an absent vertex) are silent no-ops and
//! never reach this module; errors are reserved for operations whose
//! precondition violation would corrupt a graph invariant.

#![allow(clippy::module_name_repetitions)]

/// Errors raised by the graph contract and the shortest-path engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// An edge with a negative weight was rejected.
    ///
    /// Rejection is atomic: neither endpoint vertex nor the edge itself
    /// is inserted, even when the endpoints were previously unknown.
    #[error("invalid edge {from}-{to}: negative weight {weight}")]
    InvalidEdge {
        /// Source vertex label.
        from: String,
        /// Destination vertex label.
        to: String,
        /// The offending weight.
        weight: i64,
    },

    /// An edge between this ordered pair already exists.
    ///
    /// Adding the same ordered pair twice is an error, not an overwrite.
    #[error("duplicate edge {from}-{to}")]
    DuplicateEdge {
        /// Source vertex label.
        from: String,
        /// Destination vertex label.
        to: String,
    },

    /// No edge exists between this ordered pair.
    ///
    /// Raised by `remove_edge` and `weight`; existence queries
    /// (`contains_edge`) never raise it.
    #[error("no edge {from}-{to}")]
    EdgeNotFound {
        /// Source vertex label.
        from: String,
        /// Destination vertex label.
        to: String,
    },

    /// A vertex label was not found in the graph.
    ///
    /// Raised by the shortest-path engine when the source is absent.
    #[error("vertex not found: {0}")]
    VertexNotFound(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GraphError>;
