//! Rayon-backed degree statistics (feature `parallel`).
//!
//! These compute the same values as their sequential counterparts. They only
//! read the adjacency map, so `&self` is enough and no locking is involved.

use core::hash::{BuildHasher, Hash};

use rayon::prelude::*;

use super::UnGraph;

impl<V, S> UnGraph<V, S>
where
    V: Eq + Hash + Sync,
    S: BuildHasher + Sync,
{
    /// Parallel [`UnGraph::degree_sum`].
    pub fn par_degree_sum(&self) -> usize {
        self.adjacency.par_iter().map(|(_, nbrs)| nbrs.len()).sum()
    }

    /// Parallel [`UnGraph::edge_count`].
    pub fn par_edge_count(&self) -> usize {
        self.par_degree_sum() / 2
    }

    /// Parallel [`UnGraph::max_degree`].
    pub fn par_max_degree(&self) -> usize {
        self.adjacency
            .par_iter()
            .map(|(_, nbrs)| nbrs.len())
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parallel_statistics_match_sequential() {
        let mut graph = UnGraph::new();
        for i in 0..200u32 {
            graph.add_edge(i, (i * 7 + 3) % 200);
            graph.add_edge(i, i / 2);
        }

        assert_eq!(graph.par_degree_sum(), graph.degree_sum());
        assert_eq!(graph.par_edge_count(), graph.edge_count());
        assert_eq!(graph.par_max_degree(), graph.max_degree());
    }

    #[test]
    fn parallel_statistics_on_empty_graph() {
        let graph: UnGraph<u32> = UnGraph::new();
        assert_eq!(graph.par_edge_count(), 0);
        assert_eq!(graph.par_max_degree(), 0);
    }
}
