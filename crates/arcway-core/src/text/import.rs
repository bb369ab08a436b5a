//! File importer for the graph text grammar.
//!
//! Graph files use the same grammar as graph strings (see the
//! [module docs](crate::text)), with one addition: the final entry may be
//! a bare `from-to` pair. That pair is not an edge — it is a
//! shortest-path question attached to the file ("what is the shortest
//! route from `from` to `to`?"), and the importer hands it back to the
//! caller instead of touching the graph with it.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::graph::Graph;
use crate::text::parse::{self, Entry};
use crate::text::TextError;

/// A shortest-path question read from the tail of a graph file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathQuery {
    /// Source vertex label.
    pub from: String,
    /// Target vertex label.
    pub to: String,
}

/// Import a graph file, populating `graph` through the ordinary mutating
/// operations.
///
/// Returns the trailing [`PathQuery`] if the file ends with a bare
/// `from-to` entry, `None` otherwise.
///
/// # Errors
///
/// - [`TextError::Io`] if the file cannot be read.
/// - [`TextError::BadToken`] for grammar violations, including a bare
///   pair anywhere but the final entry.
/// - [`TextError::Graph`] when an entry violates a graph invariant.
pub fn import_path<G: Graph + ?Sized>(
    path: &Path,
    graph: &mut G,
) -> Result<Option<PathQuery>, TextError> {
    let text = fs::read_to_string(path)?;
    let entries = parse::parse_entries(&text)?;
    let last = entries.len().saturating_sub(1);

    let mut query = None;
    for (i, entry) in entries.iter().enumerate() {
        if let Entry::Pair { from, to } = entry {
            if i != last {
                return Err(TextError::BadToken {
                    token: format!("{from}-{to}"),
                    reason: "weightless pair is only legal as the final entry".to_string(),
                });
            }
            query = Some(PathQuery {
                from: from.clone(),
                to: to.clone(),
            });
            break;
        }
        parse::apply(graph, entry)?;
    }

    debug!(
        path = %path.display(),
        entries = entries.len(),
        has_query = query.is_some(),
        "graph file imported"
    );
    Ok(query)
}
