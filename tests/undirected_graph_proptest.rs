use std::collections::{BTreeMap, BTreeSet, HashSet};

use petgraph::algo::dijkstra;
use petgraph::graphmap::UnGraphMap;
use proptest::prelude::*;
use ungraph::UnGraph;

#[derive(Debug, Clone)]
enum Operation {
    AddVertex(u8),
    AddEdge(u8, u8),
    RemoveEdge(u8, u8),
    RemoveVertex(u8),
    Clear,
}

/// Vertex labels are drawn from a small range so that operations collide often.
fn vertex() -> impl Strategy<Value = u8> {
    0u8..24
}

fn operation() -> impl Strategy<Value = Operation> {
    prop_oneof![
        3 => vertex().prop_map(Operation::AddVertex),
        8 => (vertex(), vertex()).prop_map(|(u, v)| Operation::AddEdge(u, v)),
        3 => (vertex(), vertex()).prop_map(|(u, v)| Operation::RemoveEdge(u, v)),
        2 => vertex().prop_map(Operation::RemoveVertex),
        1 => Just(Operation::Clear),
    ]
}

/// Reference model: an ordered adjacency map with the obvious semantics.
#[derive(Default)]
struct Model {
    adjacency: BTreeMap<u8, BTreeSet<u8>>,
}

impl Model {
    fn apply(&mut self, op: &Operation) {
        match *op {
            Operation::AddVertex(v) => {
                self.adjacency.entry(v).or_default();
            }
            Operation::AddEdge(u, v) if u != v => {
                self.adjacency.entry(u).or_default().insert(v);
                self.adjacency.entry(v).or_default().insert(u);
            }
            Operation::AddEdge(..) => {}
            Operation::RemoveEdge(u, v) => {
                if u != v {
                    if let Some(n) = self.adjacency.get_mut(&u) {
                        n.remove(&v);
                    }
                    if let Some(n) = self.adjacency.get_mut(&v) {
                        n.remove(&u);
                    }
                }
            }
            Operation::RemoveVertex(v) => {
                if let Some(nbrs) = self.adjacency.remove(&v) {
                    for w in nbrs {
                        if let Some(n) = self.adjacency.get_mut(&w) {
                            n.remove(&v);
                        }
                    }
                }
            }
            Operation::Clear => self.adjacency.clear(),
        }
    }
}

fn apply(graph: &mut UnGraph<u8>, op: &Operation) {
    match *op {
        Operation::AddVertex(v) => {
            graph.add_vertex(v);
        }
        Operation::AddEdge(u, v) => {
            graph.add_edge(u, v);
        }
        Operation::RemoveEdge(u, v) => {
            graph.remove_edge(&u, &v);
        }
        Operation::RemoveVertex(v) => {
            graph.remove_vertex(&v);
        }
        Operation::Clear => graph.clear(),
    }
}

fn to_petgraph(graph: &UnGraph<u8>) -> UnGraphMap<u8, ()> {
    let mut reference = UnGraphMap::new();
    for &v in graph {
        reference.add_node(v);
    }
    for (u, v) in graph.edges() {
        reference.add_edge(u, v, ());
    }
    reference
}

proptest! {
    #[test]
    fn test_graph_matches_model(ops in proptest::collection::vec(operation(), 1..200)) {
        let mut graph = UnGraph::new();
        let mut model = Model::default();

        for op in &ops {
            let vertices_before = graph.vertex_count();
            apply(&mut graph, op);
            model.apply(op);
            graph.assert_invariants();

            if let Operation::RemoveVertex(v) = *op {
                prop_assert!(!graph.contains_vertex(&v));
                prop_assert!(graph.iter().all(|w| !graph.contains_edge(w, &v)));
                prop_assert!(vertices_before - graph.vertex_count() <= 1);
            }
        }

        prop_assert_eq!(graph.vertex_count(), model.adjacency.len());
        let model_degree_sum: usize = model.adjacency.values().map(BTreeSet::len).sum();
        prop_assert_eq!(graph.edge_count() * 2, model_degree_sum);
        prop_assert_eq!(graph.degree_sum(), model_degree_sum);

        for (v, nbrs) in &model.adjacency {
            prop_assert!(graph.contains_vertex(v));
            prop_assert_eq!(graph.degree(v), nbrs.len());
            let expected: HashSet<u8> = nbrs.iter().copied().collect();
            prop_assert_eq!(graph.neighbor_set(v), expected);
        }

        for u in 0u8..24 {
            prop_assert!(!graph.contains_edge(&u, &u));
            for v in 0u8..24 {
                prop_assert_eq!(graph.contains_edge(&u, &v), graph.contains_edge(&v, &u));
            }
        }

        let iterated: HashSet<u8> = graph.iter().copied().collect();
        prop_assert_eq!(iterated, graph.vertices());
    }

    #[test]
    fn test_traversals_match_petgraph(
        edges in proptest::collection::vec((vertex(), vertex()), 0..60),
        isolated in proptest::collection::vec(vertex(), 0..4),
    ) {
        let mut graph: UnGraph<u8> = edges.into_iter().collect();
        for v in isolated {
            graph.add_vertex(v);
        }
        let reference = to_petgraph(&graph);
        prop_assert_eq!(graph.edge_count(), reference.edge_count());

        for &start in &graph {
            let lengths = dijkstra(&reference, start, None, |_| 1usize);

            let order = graph.bfs(&start);
            prop_assert_eq!(order.first(), Some(&start));
            prop_assert_eq!(order.len(), lengths.len());
            let reached: HashSet<u8> = order.iter().copied().collect();
            prop_assert_eq!(reached.len(), order.len());
            prop_assert!(order.windows(2).all(|w| lengths[&w[0]] <= lengths[&w[1]]));

            let limited = graph.bfs_with_limit(&start, 3);
            prop_assert_eq!(limited.len(), order.len().min(3));

            for &target in &graph {
                let expected = lengths.get(&target).copied();
                prop_assert_eq!(graph.distance(&start, &target), expected);
                prop_assert_eq!(graph.distance(&target, &start), expected);
            }
        }
    }
}
