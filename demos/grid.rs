//! 4x3 grid: degree statistics, breadth-first order and distances.

use ungraph::UnGraph;

fn main() {
    println!("Grid Graph Example");
    println!("==================");

    // Vertex (x, y) is labelled 10 * x + y.
    let mut g = UnGraph::new();
    for x in 1..=4 {
        for y in 1..=3 {
            if x <= 3 {
                g.add_edge(10 * x + y, 10 * (x + 1) + y); // horizontal
            }
            if y <= 2 {
                g.add_edge(10 * x + y, 10 * x + y + 1); // vertical
            }
        }
    }

    println!("Statistics:");
    println!("  vertices:   {}", g.vertex_count());
    println!("  edges:      {}", g.edge_count());
    println!("  max degree: {}", g.max_degree());
    println!("  degree(11): {}  (corner)", g.degree(&11));
    println!("  degree(12): {}  (border)", g.degree(&12));
    println!("  degree(22): {}  (interior)", g.degree(&22));

    assert_eq!(g.vertex_count(), 12);
    assert_eq!(g.edge_count(), 17);
    assert_eq!(g.max_degree(), 4);
    assert_eq!(g.degree(&11), 2);
    assert_eq!(g.degree(&12), 3);
    assert_eq!(g.degree(&22), 4);

    let order = g.bfs(&11);
    println!("\nbfs from 11: {order:?}");
    assert_eq!(order.len(), 12);
    assert_eq!(order.first(), Some(&11));
    assert_eq!(order.last(), Some(&43));

    let short = g.bfs_with_limit(&43, 3);
    println!("bfs from 43 (limit 3): {short:?}");
    assert_eq!(short.len(), 3);

    println!("\nlevels from 11:");
    for (depth, level) in g.bfs_levels(&11).iter().enumerate() {
        println!("  {depth}: {level:?}");
    }

    println!("\ndistance(11, 32) = {:?}", g.distance(&11, &32));
    assert_eq!(g.distance(&11, &32), Some(3));

    g.add_edge(998, 999);
    println!("distance(999, 11) = {:?}  (separate component)", g.distance(&999, &11));
    assert_eq!(g.distance(&999, &11), None);

    g.add_edge(998, 11);
    println!("distance(999, 11) = {:?}  (after bridging)", g.distance(&999, &11));
    assert_eq!(g.distance(&999, &11), Some(2));

    println!("\nAll grid checks passed.");
}
