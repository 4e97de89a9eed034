//! Borrowed iteration over `UnGraph` vertices and neighborhoods.

use core::borrow::Borrow;
use core::fmt;
use core::hash::{BuildHasher, Hash};
use core::iter::FusedIterator;
use std::collections::{hash_map, hash_set, HashSet};

/// Iterator over the vertices of an [`UnGraph`](super::UnGraph).
///
/// Produced by [`UnGraph::iter`](super::UnGraph::iter). Yields every vertex
/// exactly once, in unspecified order.
pub struct Vertices<'a, V, S> {
    keys: hash_map::Keys<'a, V, HashSet<V, S>>,
}

impl<'a, V, S> Vertices<'a, V, S> {
    #[inline]
    pub(super) fn new(keys: hash_map::Keys<'a, V, HashSet<V, S>>) -> Self {
        Self { keys }
    }
}

impl<V, S> Clone for Vertices<'_, V, S> {
    fn clone(&self) -> Self {
        Self {
            keys: self.keys.clone(),
        }
    }
}

impl<'a, V, S> Iterator for Vertices<'a, V, S> {
    type Item = &'a V;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.keys.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}

impl<V, S> ExactSizeIterator for Vertices<'_, V, S> {}

impl<V, S> FusedIterator for Vertices<'_, V, S> {}

/// A read-only view of one vertex's neighbor set.
///
/// Produced by [`UnGraph::neighbors`](super::UnGraph::neighbors). The view
/// of an absent vertex is empty.
pub struct Neighbors<'a, V, S> {
    set: Option<&'a HashSet<V, S>>,
}

impl<'a, V, S> Neighbors<'a, V, S> {
    #[inline]
    pub(super) fn new(set: Option<&'a HashSet<V, S>>) -> Self {
        Self { set }
    }

    /// Number of neighbors.
    #[inline]
    pub fn len(&self) -> usize {
        self.set.map_or(0, HashSet::len)
    }

    /// Returns `true` if the vertex has no neighbors or is absent.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over the neighbors in unspecified order.
    #[inline]
    pub fn iter(&self) -> NeighborIter<'a, V> {
        NeighborIter {
            inner: self.set.map(HashSet::iter),
        }
    }

    /// The underlying neighbor set, or `None` for an absent vertex.
    #[inline]
    pub fn as_set(&self) -> Option<&'a HashSet<V, S>> {
        self.set
    }
}

impl<V, S> Neighbors<'_, V, S>
where
    V: Eq + Hash,
    S: BuildHasher,
{
    /// Returns `true` if `vertex` is among the neighbors.
    #[inline]
    pub fn contains<Q>(&self, vertex: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.set.is_some_and(|set| set.contains(vertex))
    }
}

impl<V, S> Clone for Neighbors<'_, V, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V, S> Copy for Neighbors<'_, V, S> {}

impl<V: fmt::Debug, S> fmt::Debug for Neighbors<'_, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Compares the view against an owned set, ignoring order.
impl<V, S> PartialEq<HashSet<V, S>> for Neighbors<'_, V, S>
where
    V: Eq + Hash,
    S: BuildHasher,
{
    fn eq(&self, other: &HashSet<V, S>) -> bool {
        self.len() == other.len() && self.iter().all(|v| other.contains(v))
    }
}

impl<'a, V, S> IntoIterator for Neighbors<'a, V, S> {
    type Item = &'a V;
    type IntoIter = NeighborIter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, V, S> IntoIterator for &Neighbors<'a, V, S> {
    type Item = &'a V;
    type IntoIter = NeighborIter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a [`Neighbors`] view.
pub struct NeighborIter<'a, V> {
    inner: Option<hash_set::Iter<'a, V>>,
}

impl<V> Clone for NeighborIter<'_, V> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, V> Iterator for NeighborIter<'a, V> {
    type Item = &'a V;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.as_mut()?.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.as_ref().map_or((0, Some(0)), Iterator::size_hint)
    }
}

impl<V> ExactSizeIterator for NeighborIter<'_, V> {}

impl<V> FusedIterator for NeighborIter<'_, V> {}
