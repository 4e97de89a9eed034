//! A dynamic, hash-keyed undirected graph.
//!
//! Vertices are arbitrary caller-supplied values (`V: Eq + Hash + Clone`); the
//! graph stores them in a single adjacency map `V -> {neighbors}`. Every edge
//! `{u, v}` is recorded twice, once under each endpoint, which is what makes
//! membership and degree queries O(1) and lets `edge_count` rely on the
//! handshaking lemma.
//!
//! Invariants maintained by every public operation:
//! - symmetry: `v ∈ N(u)` iff `u ∈ N(v)`
//! - no self-loops: `v ∉ N(v)`
//! - closure: every neighbor is itself a vertex of the graph
//! - no parallel edges (neighbor sets are sets)
//!
//! Debug builds re-check the local part of these after each mutation.

use core::borrow::Borrow;
use core::fmt;
use core::hash::{BuildHasher, Hash};
use std::collections::hash_map::{Entry, RandomState};
use std::collections::{HashMap, HashSet};

use crate::trace::{debug_event, trace_event};

mod edges;
mod invariants;
mod iter;
#[cfg(feature = "parallel")]
mod parallel;
mod traversal;

pub use iter::{NeighborIter, Neighbors, Vertices};
pub use traversal::Bfs;

use invariants::invariant_assert;

/// An undirected simple graph over hashable vertex values.
///
/// `S` is the hash builder used for the adjacency map, for every neighbor set
/// and for the sets returned by bulk queries. Plug in a custom
/// [`BuildHasher`] to control hashing of custom vertex types.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `add_vertex` | \(O(1)\) amortized | No effect if already present |
/// | `add_edge` | \(O(1)\) amortized | Creates missing endpoints |
/// | `remove_edge` | \(O(1)\) amortized | |
/// | `remove_vertex` | \(O(\deg v)\) | Cascades to incident edges |
/// | `contains_vertex` / `contains_edge` / `degree` | \(O(1)\) amortized | |
/// | `vertex_count` | \(O(1)\) | |
/// | `edge_count` / `max_degree` | \(O(n)\) | Handshaking lemma |
/// | `edges` | \(O(n + m)\) | One canonical pair per edge |
/// | `bfs` / `distance` | \(O(n + m)\) | `distance` stops at the target's level |
pub struct UnGraph<V, S = RandomState> {
    adjacency: HashMap<V, HashSet<V, S>, S>,
}

impl<V> UnGraph<V, RandomState> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::with_hasher(RandomState::new())
    }

    /// Creates an empty graph with room for `vertices` vertices.
    pub fn with_capacity(vertices: usize) -> Self {
        Self::with_capacity_and_hasher(vertices, RandomState::new())
    }
}

impl<V, S> UnGraph<V, S> {
    /// Creates an empty graph that hashes vertices with `hasher`.
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            adjacency: HashMap::with_hasher(hasher),
        }
    }

    /// Creates an empty graph with room for `vertices` vertices, hashing with `hasher`.
    pub fn with_capacity_and_hasher(vertices: usize, hasher: S) -> Self {
        Self {
            adjacency: HashMap::with_capacity_and_hasher(vertices, hasher),
        }
    }

    /// Returns the graph's hash builder.
    pub fn hasher(&self) -> &S {
        self.adjacency.hasher()
    }

    /// Number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns `true` if the graph has no vertices (and therefore no edges).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Number of edges.
    ///
    /// Every edge is stored under both endpoints, so this is half the degree sum.
    pub fn edge_count(&self) -> usize {
        let sum = self.degree_sum();
        invariant_assert(sum % 2 == 0, "degree sum must be even");
        sum / 2
    }

    /// Sum of all vertex degrees.
    pub fn degree_sum(&self) -> usize {
        self.adjacency.values().map(HashSet::len).sum()
    }

    /// Largest degree of any vertex, or 0 for the empty graph.
    pub fn max_degree(&self) -> usize {
        self.adjacency.values().map(HashSet::len).max().unwrap_or(0)
    }

    /// Smallest degree of any vertex, or 0 for the empty graph.
    pub fn min_degree(&self) -> usize {
        self.adjacency.values().map(HashSet::len).min().unwrap_or(0)
    }

    /// Iterates over all vertices in unspecified order.
    ///
    /// The iterator borrows the graph, so it cannot outlive a mutation.
    /// Call `iter` again (or clone the iterator) to restart.
    pub fn iter(&self) -> Vertices<'_, V, S> {
        Vertices::new(self.adjacency.keys())
    }

    /// Removes every vertex and edge.
    pub fn clear(&mut self) {
        debug_event!(vertices = self.adjacency.len(), "clearing graph");
        self.adjacency.clear();
    }
}

impl<V, S> UnGraph<V, S>
where
    V: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    /// An empty set sharing the graph's hash builder.
    #[inline]
    fn empty_set(&self) -> HashSet<V, S> {
        HashSet::with_hasher(self.adjacency.hasher().clone())
    }

    /// The neighbor set stored under `vertex`, creating the vertex if needed.
    #[inline]
    fn slot(&mut self, vertex: V) -> &mut HashSet<V, S> {
        let empty = self.empty_set();
        self.adjacency.entry(vertex).or_insert(empty)
    }

    /// The stored copy of `vertex`, if present.
    #[inline]
    pub(crate) fn key<Q>(&self, vertex: &Q) -> Option<&V>
    where
        V: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.adjacency.get_key_value(vertex).map(|(key, _)| key)
    }

    /// Neighbors of a stored vertex; empty if the vertex is unknown.
    #[inline]
    pub(crate) fn adjacent(&self, vertex: &V) -> impl Iterator<Item = &V> {
        self.adjacency.get(vertex).into_iter().flatten()
    }

    /// Adds `vertex` if it is not already present.
    ///
    /// Returns `true` if the vertex was inserted.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        let empty = self.empty_set();
        match self.adjacency.entry(vertex) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(empty);
                trace_event!(vertices = self.adjacency.len(), "added vertex");
                true
            }
        }
    }

    /// Adds the undirected edge `{u, v}`, creating missing endpoints.
    ///
    /// Self-loops (`u == v`) are ignored and add no vertex. Adding an existing
    /// edge has no effect. Returns `true` if the edge was new.
    pub fn add_edge(&mut self, u: V, v: V) -> bool {
        if u == v {
            return false;
        }
        let inserted = self.slot(u.clone()).insert(v.clone());
        let mirrored = self.slot(v).insert(u);
        invariant_assert(inserted == mirrored, "edge insertion must be mirrored");
        if inserted {
            trace_event!(vertices = self.adjacency.len(), "added edge");
        }
        inserted
    }

    /// Removes the edge `{u, v}` if present.
    ///
    /// Self-loops, absent endpoints and absent edges are no-ops. Returns `true`
    /// if an edge was removed.
    pub fn remove_edge<Q>(&mut self, u: &Q, v: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        if u == v {
            return false;
        }
        let removed = self.adjacency.get_mut(u).is_some_and(|nbrs| nbrs.remove(v));
        let mirrored = self.adjacency.get_mut(v).is_some_and(|nbrs| nbrs.remove(u));
        invariant_assert(removed == mirrored, "edge removal must be mirrored");
        if removed {
            trace_event!("removed edge");
        }
        removed
    }

    /// Removes `vertex` together with every edge incident to it.
    ///
    /// Costs \(O(\deg v)\). Returns `true` if the vertex was present.
    pub fn remove_vertex<Q>(&mut self, vertex: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let Some(neighbors) = self.adjacency.remove(vertex) else {
            return false;
        };
        for neighbor in &neighbors {
            let unlinked = self
                .adjacency
                .get_mut::<V>(neighbor)
                .is_some_and(|nbrs| nbrs.remove(vertex));
            invariant_assert(unlinked, "neighbor must link back to removed vertex");
        }
        debug_event!(
            degree = neighbors.len(),
            vertices = self.adjacency.len(),
            "removed vertex and incident edges"
        );
        true
    }

    /// Returns `true` if `vertex` is in the graph.
    #[inline]
    pub fn contains_vertex<Q>(&self, vertex: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.adjacency.contains_key(vertex)
    }

    /// Returns `true` if the edge `{u, v}` is in the graph.
    ///
    /// Always `false` for `u == v`.
    #[inline]
    pub fn contains_edge<Q>(&self, u: &Q, v: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        u != v && self.adjacency.get(u).is_some_and(|nbrs| nbrs.contains(v))
    }

    /// Number of neighbors of `vertex`, or 0 if it is absent.
    #[inline]
    pub fn degree<Q>(&self, vertex: &Q) -> usize
    where
        V: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.adjacency.get(vertex).map_or(0, HashSet::len)
    }

    /// All vertices, as an owned set.
    pub fn vertices(&self) -> HashSet<V, S> {
        let mut out =
            HashSet::with_capacity_and_hasher(self.adjacency.len(), self.adjacency.hasher().clone());
        out.extend(self.adjacency.keys().cloned());
        out
    }

    /// A borrowed, read-only view of the neighbors of `vertex`.
    ///
    /// The view is empty if `vertex` is absent. It borrows the graph, so any
    /// mutation ends its lifetime; use [`UnGraph::neighbor_set`] for a copy.
    #[inline]
    pub fn neighbors<Q>(&self, vertex: &Q) -> Neighbors<'_, V, S>
    where
        V: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        Neighbors::new(self.adjacency.get(vertex))
    }

    /// The neighbors of `vertex`, as an owned set (empty if absent).
    pub fn neighbor_set<Q>(&self, vertex: &Q) -> HashSet<V, S>
    where
        V: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.adjacency
            .get(vertex)
            .cloned()
            .unwrap_or_else(|| self.empty_set())
    }

    /// The closed neighborhood `N(v) ∪ {v}`, or an empty set if `vertex` is absent.
    pub fn closed_neighbors<Q>(&self, vertex: &Q) -> HashSet<V, S>
    where
        V: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        match self.adjacency.get_key_value(vertex) {
            Some((key, nbrs)) => {
                let mut out = nbrs.clone();
                out.insert(key.clone());
                out
            }
            None => self.empty_set(),
        }
    }

    /// Releases spare capacity in the adjacency map and every neighbor set.
    pub fn shrink_to_fit(&mut self) {
        self.adjacency.shrink_to_fit();
        for nbrs in self.adjacency.values_mut() {
            nbrs.shrink_to_fit();
        }
    }
}

impl<V, S: Default> Default for UnGraph<V, S> {
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<V: Clone, S: Clone> Clone for UnGraph<V, S> {
    fn clone(&self) -> Self {
        Self {
            adjacency: self.adjacency.clone(),
        }
    }
}

impl<V: fmt::Debug, S> fmt::Debug for UnGraph<V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.adjacency.iter()).finish()
    }
}

impl<V, S> PartialEq for UnGraph<V, S>
where
    V: Eq + Hash,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        self.adjacency == other.adjacency
    }
}

impl<V, S> Eq for UnGraph<V, S>
where
    V: Eq + Hash,
    S: BuildHasher,
{
}

impl<V, S> Extend<(V, V)> for UnGraph<V, S>
where
    V: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    fn extend<I: IntoIterator<Item = (V, V)>>(&mut self, edges: I) {
        for (u, v) in edges {
            self.add_edge(u, v);
        }
    }
}

impl<V, S> FromIterator<(V, V)> for UnGraph<V, S>
where
    V: Eq + Hash + Clone,
    S: BuildHasher + Clone + Default,
{
    fn from_iter<I: IntoIterator<Item = (V, V)>>(edges: I) -> Self {
        let mut graph = Self::with_hasher(S::default());
        graph.extend(edges);
        graph
    }
}

impl<V, const N: usize> From<[(V, V); N]> for UnGraph<V, RandomState>
where
    V: Eq + Hash + Clone,
{
    fn from(edges: [(V, V); N]) -> Self {
        edges.into_iter().collect()
    }
}

impl<'a, V, S> IntoIterator for &'a UnGraph<V, S> {
    type Item = &'a V;
    type IntoIter = Vertices<'a, V, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
