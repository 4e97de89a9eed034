//! Edge extraction.
//!
//! Each undirected edge lives in the adjacency map twice. Extraction keeps
//! exactly one orientation per edge, chosen by a total order on `V`: the
//! natural `Ord` for [`UnGraph::edges`], or a caller-supplied comparator for
//! vertex types that have none.

use core::cmp::Ordering;
use core::hash::{BuildHasher, Hash};
use std::collections::HashSet;

use super::UnGraph;

impl<V, S> UnGraph<V, S>
where
    V: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    /// All edges as canonical pairs `(a, b)` with `a < b`.
    ///
    /// Each edge appears exactly once regardless of the order its endpoints
    /// were passed to [`UnGraph::add_edge`].
    pub fn edges(&self) -> HashSet<(V, V), S>
    where
        V: Ord,
    {
        self.edges_by(V::cmp)
    }

    /// All edges as pairs `(a, b)` with `compare(a, b) == Ordering::Less`.
    ///
    /// `compare` must be a total order consistent with `Eq`: distinct vertices
    /// never compare `Equal`. An edge whose endpoints compare `Equal` is not
    /// reported.
    pub fn edges_by<F>(&self, mut compare: F) -> HashSet<(V, V), S>
    where
        F: FnMut(&V, &V) -> Ordering,
    {
        let mut out =
            HashSet::with_capacity_and_hasher(self.edge_count(), self.adjacency.hasher().clone());
        for (u, nbrs) in &self.adjacency {
            for v in nbrs {
                if compare(u, v) == Ordering::Less {
                    out.insert((u.clone(), v.clone()));
                }
            }
        }
        out
    }
}
