//! Tokenizer for the graph text grammar, plus [`populate`].

use crate::error::Result as GraphResult;
use crate::graph::{Edge, Graph};
use crate::text::TextError;

/// One parsed entry of the grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// `label:` — a vertex with no outgoing edges.
    Isolated(String),
    /// `from-to(weight)` — a directed weighted edge.
    Edge(Edge),
    /// `from-to` — a bare pair with no weight. Not an edge: files use it
    /// as a trailing shortest-path question.
    Pair {
        /// Source vertex label.
        from: String,
        /// Destination vertex label.
        to: String,
    },
}

/// Characters that cannot appear in a vertex label (they are grammar
/// punctuation).
const RESERVED: [char; 5] = ['-', '(', ')', ':', ','];

/// Parse graph text into entries.
///
/// Entries are separated by commas or newlines; surrounding whitespace
/// and empty entries (trailing commas, blank lines) are tolerated.
///
/// # Errors
///
/// [`TextError::BadToken`] for any token that does not match the grammar:
/// an empty or punctuation-bearing label, a missing destination, or an
/// unparsable weight.
pub fn parse_entries(text: &str) -> Result<Vec<Entry>, TextError> {
    let mut entries = Vec::new();
    for raw in text.split([',', '\n']) {
        let token = raw.trim();
        if token.is_empty() {
            continue;
        }
        entries.push(parse_token(token)?);
    }
    Ok(entries)
}

fn parse_token(token: &str) -> Result<Entry, TextError> {
    if let Some(label) = token.strip_suffix(':') {
        let label = label.trim_end();
        check_label(token, label)?;
        return Ok(Entry::Isolated(label.to_string()));
    }

    let Some((from, rest)) = token.split_once('-') else {
        return Err(bad(token, "expected `from-to(weight)` or `label:`"));
    };
    let from = from.trim();
    check_label(token, from)?;

    if let Some(open) = rest.find('(') {
        let Some(inner) = rest[open..].strip_prefix('(').and_then(|s| s.strip_suffix(')')) else {
            return Err(bad(token, "unterminated weight parenthesis"));
        };
        let to = rest[..open].trim();
        check_label(token, to)?;
        let weight: i64 = inner
            .trim()
            .parse()
            .map_err(|_| bad(token, "weight is not an integer"))?;
        return Ok(Entry::Edge(Edge::new(from, to, weight)));
    }

    let to = rest.trim();
    check_label(token, to)?;
    Ok(Entry::Pair {
        from: from.to_string(),
        to: to.to_string(),
    })
}

fn check_label(token: &str, label: &str) -> Result<(), TextError> {
    if label.is_empty() {
        return Err(bad(token, "empty vertex label"));
    }
    if label.contains(RESERVED) || label.contains(char::is_whitespace) {
        return Err(bad(token, "vertex label contains reserved characters"));
    }
    Ok(())
}

fn bad(token: &str, reason: &str) -> TextError {
    TextError::BadToken {
        token: token.to_string(),
        reason: reason.to_string(),
    }
}

/// Parse graph text and apply it to a graph through the ordinary
/// mutating operations.
///
/// No bulk-load path exists: an edge entry is exactly one
/// [`Graph::add_edge`] call, so negative weights and duplicate edges are
/// rejected here with the same errors as programmatic mutation.
///
/// # Errors
///
/// - [`TextError::BadToken`] for grammar violations, including a bare
///   `from-to` pair (legal only as a file's trailing path question).
/// - [`TextError::Graph`] when an entry violates a graph invariant; the
///   graph keeps every entry applied before the failing one.
pub fn populate<G: Graph + ?Sized>(graph: &mut G, text: &str) -> Result<(), TextError> {
    for entry in parse_entries(text)? {
        if let Entry::Pair { from, to } = &entry {
            return Err(bad(&format!("{from}-{to}"), "edge is missing its weight"));
        }
        apply(graph, &entry)?;
    }
    Ok(())
}

/// Apply a single entry to a graph. [`Pair`](Entry::Pair) entries carry
/// no graph data and are skipped; callers decide whether they are legal.
pub(crate) fn apply<G: Graph + ?Sized>(graph: &mut G, entry: &Entry) -> GraphResult<()> {
    match entry {
        Entry::Isolated(v) => {
            graph.add_vertex(v);
            Ok(())
        }
        Entry::Edge(e) => graph.add_edge(&e.from, &e.to, e.weight),
        Entry::Pair { .. } => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::{Entry, parse_entries, populate};
    use crate::graph::adjacency_list::AdjacencyListGraph;
    use crate::graph::{Edge, Graph};
    use crate::text::TextError;

    #[test]
    fn parses_edges_isolated_vertices_and_pairs() {
        let entries = parse_entries("A-B(2), F:, C-D").unwrap();
        assert_eq!(
            entries,
            [
                Entry::Edge(Edge::new("A", "B", 2)),
                Entry::Isolated("F".to_string()),
                Entry::Pair {
                    from: "C".to_string(),
                    to: "D".to_string(),
                },
            ]
        );
    }

    #[test]
    fn tolerates_trailing_commas_and_newlines() {
        let entries = parse_entries("A-B(2),\n  C: ,\n\n").unwrap();
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn rejects_malformed_tokens() {
        for bad in ["A", "-B(2)", "A-(2)", "A-B(2", "A-B(x)", ":", "A B-C(1)"] {
            let err = parse_entries(bad).unwrap_err();
            assert!(matches!(err, TextError::BadToken { .. }), "token: {bad}");
        }
    }

    #[test]
    fn populate_round_trips_the_canonical_form() {
        let text = "A-C(2), A-D(1), B-G(3), F:, J:";
        let mut g = AdjacencyListGraph::new();
        populate(&mut g, text).unwrap();
        assert_eq!(g.to_string(), text);
    }

    #[test]
    fn populate_rejects_bare_pairs() {
        let mut g = AdjacencyListGraph::new();
        let err = populate(&mut g, "A-B(2), C-D").unwrap_err();
        assert!(matches!(err, TextError::BadToken { .. }));
    }

    #[test]
    fn populate_applies_graph_validation() {
        let mut g = AdjacencyListGraph::new();
        let err = populate(&mut g, "A-B(2), A-B(3)").unwrap_err();
        assert!(matches!(err, TextError::Graph(_)));
        // The first entry stuck; the duplicate did not overwrite it.
        assert_eq!(g.weight("A", "B").unwrap(), 2);

        let mut g = AdjacencyListGraph::new();
        let err = populate(&mut g, "X-Y(-3)").unwrap_err();
        assert!(matches!(err, TextError::Graph(_)));
        assert!(!g.contains_vertex("X"));
        assert!(!g.contains_vertex("Y"));
    }
}
