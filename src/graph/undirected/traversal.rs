//! Breadth-first traversal and shortest-path distance.

use core::borrow::Borrow;
use core::hash::{BuildHasher, Hash};
use std::collections::{HashSet, VecDeque};

use crate::graph::access::visited::VisitedSet;
use crate::trace::trace_event;

use super::UnGraph;

/// An iterator for Breadth-First Search (BFS).
///
/// Yields borrowed vertices in level order: all vertices at depth `d` come
/// before any vertex at depth `d + 1`. Order within a level follows the
/// neighbor sets' iteration order and is unspecified. Vertices are marked
/// visited when enqueued, so each is yielded at most once.
pub struct Bfs<'a, V, S> {
    graph: &'a UnGraph<V, S>,
    visited: VisitedSet<'a, V, S>,
    queue: VecDeque<&'a V>,
}

impl<'a, V, S> Bfs<'a, V, S>
where
    V: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    fn new(graph: &'a UnGraph<V, S>, start: Option<&'a V>) -> Self {
        let mut visited = VisitedSet::with_hasher(graph.hasher().clone());
        let mut queue = VecDeque::new();

        if let Some(start) = start {
            visited.try_visit(start);
            queue.push_back(start);
        }

        Self {
            graph,
            visited,
            queue,
        }
    }

    /// Returns `true` if `vertex` has already been yielded or is queued.
    pub fn is_discovered<Q>(&self, vertex: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.graph
            .key(vertex)
            .is_some_and(|key| self.visited.is_visited(key))
    }

    /// Number of vertices yielded or queued so far.
    pub fn discovered_count(&self) -> usize {
        self.visited.len()
    }
}

impl<'a, V, S> Iterator for Bfs<'a, V, S>
where
    V: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.queue.pop_front()?;

        for v in self.graph.adjacent(u) {
            if self.visited.try_visit(v) {
                self.queue.push_back(v);
            }
        }

        Some(u)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let undiscovered = self.graph.vertex_count() - self.visited.len();
        (self.queue.len(), Some(self.queue.len() + undiscovered))
    }
}

impl<V, S> UnGraph<V, S>
where
    V: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    /// Lazily traverses the graph breadth-first from `start`.
    ///
    /// The iterator is empty if `start` is absent; otherwise `start` comes first.
    pub fn bfs_iter<Q>(&self, start: &Q) -> Bfs<'_, V, S>
    where
        V: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        Bfs::new(self, self.key(start))
    }

    /// Every vertex reachable from `start`, in breadth-first order.
    ///
    /// Empty if `start` is absent. See [`Bfs`] for the ordering guarantee.
    pub fn bfs<Q>(&self, start: &Q) -> Vec<V>
    where
        V: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let order: Vec<V> = self.bfs_iter(start).cloned().collect();
        trace_event!(visited = order.len(), "bfs finished");
        order
    }

    /// Like [`UnGraph::bfs`], but stops once `limit` vertices were visited.
    ///
    /// A `limit` of 0 means no limit.
    pub fn bfs_with_limit<Q>(&self, start: &Q, limit: usize) -> Vec<V>
    where
        V: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        if limit == 0 {
            return self.bfs(start);
        }
        let mut order = Vec::with_capacity(limit.min(self.vertex_count()));
        order.extend(self.bfs_iter(start).take(limit).cloned());
        trace_event!(visited = order.len(), limit, "bounded bfs finished");
        order
    }

    /// The breadth-first traversal from `start`, grouped by depth.
    ///
    /// `levels[d]` holds the vertices at distance exactly `d`; `levels[0]` is
    /// `[start]`. Empty if `start` is absent.
    pub fn bfs_levels<Q>(&self, start: &Q) -> Vec<Vec<V>>
    where
        V: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let Some(start) = self.key(start) else {
            return Vec::new();
        };

        let mut visited = VisitedSet::with_hasher(self.hasher().clone());
        visited.try_visit(start);

        let mut levels = Vec::new();
        let mut frontier = vec![start];
        while !frontier.is_empty() {
            let mut next = Vec::new();
            for &u in &frontier {
                for v in self.adjacent(u) {
                    if visited.try_visit(v) {
                        next.push(v);
                    }
                }
            }
            levels.push(frontier.into_iter().cloned().collect());
            frontier = next;
        }
        levels
    }

    /// Length of a shortest path between `u` and `v`.
    ///
    /// Returns `None` if either vertex is absent or `v` is unreachable from
    /// `u`, and `Some(0)` when `u == v`. The search expands one full level at a
    /// time and returns as soon as `v` shows up among a level's neighbors.
    pub fn distance<Q>(&self, u: &Q, v: &Q) -> Option<usize>
    where
        V: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let source = self.key(u)?;
        let target = self.key(v)?;
        if source == target {
            return Some(0);
        }

        let mut visited = VisitedSet::with_hasher(self.hasher().clone());
        visited.try_visit(source);

        let mut frontier = vec![source];
        let mut depth = 0usize;
        while !frontier.is_empty() {
            depth += 1;
            let mut next = Vec::new();
            for current in frontier {
                for neighbor in self.adjacent(current) {
                    if neighbor == target {
                        trace_event!(depth, explored = visited.len(), "distance found");
                        return Some(depth);
                    }
                    if visited.try_visit(neighbor) {
                        next.push(neighbor);
                    }
                }
            }
            frontier = next;
        }

        trace_event!(explored = visited.len(), "distance target unreachable");
        None
    }

    /// Returns `true` if a path connects `u` and `v`.
    pub fn is_connected_to<Q>(&self, u: &Q, v: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.distance(u, v).is_some()
    }

    /// All vertices in the connected component of `vertex` (empty if absent).
    pub fn connected_component<Q>(&self, vertex: &Q) -> HashSet<V, S>
    where
        V: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let mut out = HashSet::with_hasher(self.hasher().clone());
        out.extend(self.bfs_iter(vertex).cloned());
        out
    }
}
