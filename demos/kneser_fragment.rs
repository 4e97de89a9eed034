//! A fragment of the Kneser graph K(5,2) with string vertices.
//!
//! Vertices are 2-element subsets of {1..5} written as strings; two subsets
//! are adjacent when they are disjoint.

use ungraph::UnGraph;

fn main() {
    println!("Kneser Fragment Example");
    println!("=======================");

    let mut g: UnGraph<String> = UnGraph::new();
    for v in ["12", "34", "35", "45"] {
        g.add_vertex(v.to_owned());
    }
    assert!(g.contains_vertex("12"));
    assert!(!g.contains_vertex("15"));
    assert!(!g.contains_edge("12", "45"));

    for (u, v) in [("12", "45"), ("12", "34"), ("12", "35")] {
        g.add_edge(u.to_owned(), v.to_owned());
    }
    assert!(g.contains_edge("45", "12"));
    assert!(!g.contains_edge("34", "35"));

    // Edges to unseen subsets create them.
    for (u, v) in [("34", "15"), ("15", "23"), ("45", "23")] {
        g.add_edge(u.to_owned(), v.to_owned());
    }
    assert!(g.contains_vertex("15"));
    assert!(g.contains_vertex("23"));
    assert!(g.contains_edge("15", "34"));
    assert!(!g.contains_edge("98", "99"));

    let mut edges: Vec<_> = g.edges().into_iter().collect();
    edges.sort();
    println!("{} vertices, {} edges:", g.vertex_count(), g.edge_count());
    for (u, v) in &edges {
        println!("  {{{u}}} -- {{{v}}}");
    }

    println!("distance(12, 23) = {:?}", g.distance("12", "23"));
    assert_eq!(g.distance("12", "23"), Some(2));

    println!("\nAll Kneser checks passed.");
}
