//! Behavioral contract suite, run against every storage strategy.
//!
//! Every test here loops over all four strategies through `Box<dyn Graph>`:
//! the contract demands identical observable behavior, so a strategy that
//! diverges on any operation fails the same assertion the others pass.

use arcway_core::text::parse::populate;
use arcway_core::{
    AdjacencyListGraph, EdgeListGraph, Graph, GraphError, HashGraph, MatrixGraph, NO_EDGE,
    shortest_paths,
};

/// The worked example graph: two connected components (everything
/// reachable from A, plus I feeding into it) and an isolated J.
const EXAMPLE: &str = "A-C(2), A-D(1), \
                       B-G(3), \
                       C-H(2), \
                       D-B(3), D-C(5), D-E(3), \
                       E-C(1), E-G(3), E-H(7), \
                       F:, \
                       G-B(2), G-F(1), \
                       H-F(4), H-G(2), \
                       I-H(10), \
                       J:";

/// Same edges in scrambled order; canonical rendering must not care.
const EXAMPLE_SCRAMBLED: &str = "D-C(5), D-E(3), D-B(3), \
                                 E-G(3), E-C(1), E-H(7), \
                                 I-H(10), \
                                 J:,\
                                 G-B(2), G-F(1), \
                                 F:, \
                                 H-G(2), H-F(4), \
                                 A-C(2), A-D(1), \
                                 B-G(3), \
                                 C-H(2) ";

fn strategies() -> Vec<(&'static str, Box<dyn Graph>)> {
    vec![
        ("edge-list", Box::new(EdgeListGraph::new())),
        ("adj-list", Box::new(AdjacencyListGraph::new())),
        ("matrix", Box::new(MatrixGraph::new())),
        ("hash", Box::new(HashGraph::new())),
    ]
}

fn canonical(g: &dyn Graph) -> String {
    arcway_core::text::render::canonical(g)
}

// ---------------------------------------------------------------------------
// Mutation contract
// ---------------------------------------------------------------------------

#[test]
fn atomic_rejection_of_negative_weights() {
    for (name, mut g) in strategies() {
        let err = g.add_edge("A", "B", -1).unwrap_err();
        assert!(
            matches!(err, GraphError::InvalidEdge { weight: -1, .. }),
            "{name}"
        );
        assert!(!g.contains_vertex("A"), "{name}: A leaked in");
        assert!(!g.contains_vertex("B"), "{name}: B leaked in");
        assert_eq!(canonical(g.as_ref()), "", "{name}");
    }
}

#[test]
fn cascade_delete_removes_every_incident_edge() {
    for (name, mut g) in strategies() {
        populate(g.as_mut(), EXAMPLE).unwrap();
        g.remove_vertex("H");
        for (from, to) in [("C", "H"), ("E", "H"), ("I", "H"), ("H", "F"), ("H", "G")] {
            assert!(!g.contains_edge(from, to), "{name}: {from}-{to} survived");
        }
        assert!(!g.contains_vertex("H"), "{name}");
        // Untouched vertices and edges stay.
        assert!(g.contains_edge("A", "C"), "{name}");
        assert!(g.contains_vertex("I"), "{name}");
    }
}

#[test]
fn idempotent_no_ops_leave_serialization_unchanged() {
    for (name, mut g) in strategies() {
        populate(g.as_mut(), EXAMPLE).unwrap();
        let before = canonical(g.as_ref());

        g.add_vertex("A");
        assert_eq!(canonical(g.as_ref()), before, "{name}: add_vertex");

        g.remove_vertex("X");
        assert_eq!(canonical(g.as_ref()), before, "{name}: remove_vertex");

        let err = g.remove_edge("X", "Y").unwrap_err();
        assert!(matches!(err, GraphError::EdgeNotFound { .. }), "{name}");
        assert_eq!(canonical(g.as_ref()), before, "{name}: remove_edge");
    }
}

#[test]
fn duplicate_and_invalid_edges_are_rejected_after_population() {
    for (name, mut g) in strategies() {
        populate(g.as_mut(), EXAMPLE).unwrap();

        let err = g.add_edge("G", "B", 1).unwrap_err();
        assert!(matches!(err, GraphError::DuplicateEdge { .. }), "{name}");
        assert_eq!(g.weight("G", "B").unwrap(), 2, "{name}: overwritten");

        let err = g.add_edge("A", "B", -1).unwrap_err();
        assert!(matches!(err, GraphError::InvalidEdge { .. }), "{name}");
    }
}

#[test]
fn queries_are_case_sensitive_and_directed() {
    for (name, mut g) in strategies() {
        populate(g.as_mut(), EXAMPLE).unwrap();
        assert!(g.contains_vertex("C"), "{name}");
        assert!(!g.contains_vertex("c"), "{name}");
        assert!(g.contains_edge("C", "H"), "{name}");
        assert!(!g.contains_edge("H", "C"), "{name}");
        assert_eq!(g.weight("E", "H").unwrap(), 7, "{name}");
        assert_eq!(g.successors("D"), ["B", "C", "E"], "{name}");
    }
}

#[test]
fn emptied_graph_reports_no_vertices() {
    for (name, mut g) in strategies() {
        populate(g.as_mut(), EXAMPLE).unwrap();
        for v in g.vertices() {
            g.remove_vertex(&v);
        }
        assert!(g.vertices().is_empty(), "{name}");
        assert_eq!(canonical(g.as_ref()), "", "{name}");
    }
}

// ---------------------------------------------------------------------------
// Cross-strategy determinism
// ---------------------------------------------------------------------------

#[test]
fn every_strategy_serializes_identically() {
    for (name, mut g) in strategies() {
        populate(g.as_mut(), EXAMPLE_SCRAMBLED).unwrap();
        assert_eq!(canonical(g.as_ref()), EXAMPLE, "{name}");
    }
}

#[test]
fn every_strategy_routes_identically() {
    let mut results = Vec::new();
    for (name, mut g) in strategies() {
        populate(g.as_mut(), EXAMPLE_SCRAMBLED).unwrap();
        let sp = shortest_paths(g.as_ref(), "A").unwrap();
        results.push((name, sp));
    }
    let (_, first) = &results[0];
    for (name, sp) in &results[1..] {
        assert_eq!(sp, first, "{name} diverged");
    }
}

// ---------------------------------------------------------------------------
// Shortest paths on the worked example
// ---------------------------------------------------------------------------

#[test]
fn example_distances_from_a() {
    for (name, mut g) in strategies() {
        populate(g.as_mut(), EXAMPLE).unwrap();
        let sp = shortest_paths(g.as_ref(), "A").unwrap();

        let expected = [
            ("A", 0),
            ("B", 4),
            ("C", 2),
            ("D", 1),
            ("E", 4),
            ("F", 7),
            ("G", 6),
            ("H", 4),
            ("I", NO_EDGE),
            ("J", NO_EDGE),
        ];
        for (v, d) in expected {
            assert_eq!(sp.distance(v), Some(d), "{name}: distance({v})");
        }

        // H's shortest route is A → C → H (2 + 2).
        assert_eq!(sp.predecessor("H"), Some("C"), "{name}");
        assert_eq!(sp.path_to("H").unwrap(), ["A", "C", "H"], "{name}");

        // Nothing leads into I's side of the graph, and J is isolated.
        assert_eq!(sp.predecessor("I"), None, "{name}");
        assert_eq!(sp.path_to("I"), None, "{name}");
        assert_eq!(sp.path_to("J"), None, "{name}");
    }
}

#[test]
fn path_weights_resum_to_the_reported_distance() {
    for (name, mut g) in strategies() {
        populate(g.as_mut(), EXAMPLE).unwrap();
        let sp = shortest_paths(g.as_ref(), "A").unwrap();
        for v in g.vertices() {
            let Some(path) = sp.path_to(&v) else {
                assert_eq!(sp.distance(&v), Some(NO_EDGE), "{name}: {v}");
                continue;
            };
            let mut total = 0;
            for hop in path.windows(2) {
                total += g.weight(&hop[0], &hop[1]).unwrap();
            }
            assert_eq!(sp.distance(&v), Some(total), "{name}: {v}");
        }
    }
}

#[test]
fn routing_from_an_interior_vertex() {
    for (name, mut g) in strategies() {
        populate(g.as_mut(), EXAMPLE).unwrap();
        let sp = shortest_paths(g.as_ref(), "I").unwrap();
        // I reaches H directly, then the rest through it.
        assert_eq!(sp.distance("I"), Some(0), "{name}");
        assert_eq!(sp.distance("H"), Some(10), "{name}");
        assert_eq!(sp.distance("G"), Some(12), "{name}");
        assert_eq!(sp.distance("F"), Some(13), "{name}");
        assert_eq!(sp.distance("B"), Some(14), "{name}");
        // Edges point away from A, so A is unreachable from I.
        assert_eq!(sp.distance("A"), Some(NO_EDGE), "{name}");
    }
}

#[test]
fn unreachable_pair_with_no_edges() {
    for (name, mut g) in strategies() {
        g.add_vertex("X");
        g.add_vertex("Y");
        let sp = shortest_paths(g.as_ref(), "X").unwrap();
        assert_eq!(sp.distance("X"), Some(0), "{name}");
        assert_eq!(sp.distance("Y"), Some(NO_EDGE), "{name}");
        assert_eq!(sp.predecessor("Y"), None, "{name}");
    }
}
