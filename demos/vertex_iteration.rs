//! Iterating a graph's vertices without materializing a set.

use std::collections::HashSet;

use ungraph::UnGraph;

fn main() {
    println!("Vertex Iteration Example");
    println!("========================");

    let mut g = UnGraph::new();
    for x in 1..=4 {
        for y in 1..=3 {
            if x <= 3 {
                g.add_edge(10 * x + y, 10 * (x + 1) + y);
            }
            if y <= 2 {
                g.add_edge(10 * x + y, 10 * x + y + 1);
            }
        }
    }

    let owned = g.vertices();

    let mut looped = HashSet::new();
    for v in &g {
        looped.insert(*v);
    }
    assert_eq!(owned, looped);

    let collected: HashSet<i32> = g.iter().copied().collect();
    assert_eq!(owned, collected);

    let mut sorted: Vec<i32> = g.iter().copied().collect();
    sorted.sort_unstable();
    println!("vertices: {sorted:?}");

    for v in &sorted {
        let mut nbrs: Vec<i32> = g.neighbors(v).iter().copied().collect();
        nbrs.sort_unstable();
        println!("  N({v}) = {nbrs:?}");
    }

    println!("\nIteration agrees with vertices().");
}
