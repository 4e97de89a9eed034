//! Complete and complete bipartite graphs obtained by edge and vertex removal.

use ungraph::UnGraph;

fn complete(n: i32) -> UnGraph<i32> {
    let mut g = UnGraph::new();
    for i in 0..n {
        for j in 0..n {
            if i != j {
                g.add_edge(i, j);
            }
        }
    }
    g
}

fn report(name: &str, g: &UnGraph<i32>) {
    println!(
        "{name:>6}: {} vertices, {} edges, max degree {}",
        g.vertex_count(),
        g.edge_count(),
        g.max_degree()
    );
}

fn main() {
    println!("Complete Graphs Example");
    println!("=======================");

    let mut g = complete(5);
    report("K5", &g);
    assert_eq!(g.edge_count(), 5 * 4 / 2);
    assert_eq!(g.max_degree(), 4);

    // Removing every same-parity edge leaves K3,2.
    for i in 0..4 {
        for j in i + 1..5 {
            if i % 2 == j % 2 {
                g.remove_edge(&i, &j);
            }
        }
    }
    report("K3,2", &g);
    assert_eq!(g.edge_count(), 3 * 2);
    assert_eq!(g.max_degree(), 3);

    g.remove_vertex(&4);
    report("K2,2", &g);
    assert_eq!(g.vertex_count(), 4);
    assert_eq!(g.edge_count(), 4);
    assert_eq!(g.max_degree(), 2);

    g = complete(100);
    report("K100", &g);

    for i in (0..100).step_by(2) {
        g.remove_vertex(&i);
    }
    report("K50", &g);
    assert_eq!(g.edge_count(), 50 * 49 / 2);
    assert_eq!(g.max_degree(), 49);

    g.clear();
    g.add_edge(-1, -5);
    report("K2", &g);
    assert_eq!(g.vertex_count(), 2);
    assert_eq!(g.edge_count(), 1);
    assert_eq!(g.max_degree(), 1);

    println!("\nAll complete-graph checks passed.");
}
