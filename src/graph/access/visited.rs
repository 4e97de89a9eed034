//! Visited sets for hashed-vertex traversals.
//!
//! Traversals over `UnGraph` borrow vertices straight out of the adjacency
//! store, so the visited set holds `&V` rather than clones. It reuses the
//! graph's own `BuildHasher`, which keeps custom hashers consistent between
//! the store and every scratch structure built on top of it.

use core::hash::{BuildHasher, Hash};
use std::collections::HashSet;

/// A set of vertices already reached by a traversal.
pub(crate) struct VisitedSet<'a, V, S> {
    seen: HashSet<&'a V, S>,
}

impl<'a, V, S> VisitedSet<'a, V, S>
where
    V: Eq + Hash,
    S: BuildHasher,
{
    #[inline]
    pub(crate) fn with_hasher(hasher: S) -> Self {
        Self {
            seen: HashSet::with_hasher(hasher),
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.seen.len()
    }

    /// Returns `true` iff `vertex` had not been visited and marks it visited.
    #[inline(always)]
    pub(crate) fn try_visit(&mut self, vertex: &'a V) -> bool {
        self.seen.insert(vertex)
    }

    #[inline(always)]
    pub(crate) fn is_visited(&self, vertex: &V) -> bool {
        self.seen.contains(vertex)
    }
}
