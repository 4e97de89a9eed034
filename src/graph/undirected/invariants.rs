//! Structural invariants of `UnGraph`.
//!
//! Mutations check their local effect through [`invariant_assert`], which
//! compiles away in release builds. [`UnGraph::assert_invariants`] performs
//! the full \(O(n + m)\) sweep and is what the test suites call after every
//! step.

use core::hash::{BuildHasher, Hash};

use super::UnGraph;

/// Debug-asserts a structural invariant with a message.
#[inline(always)]
pub(crate) fn invariant_assert(condition: bool, message: &str) {
    debug_assert!(condition, "graph invariant violated: {}", message);
}

impl<V, S> UnGraph<V, S>
where
    V: Eq + Hash,
    S: BuildHasher,
{
    /// Checks symmetry, absence of self-loops and closure over the whole graph.
    ///
    /// # Panics
    /// Panics on the first violated invariant. A correct graph never panics
    /// here; this exists for test suites.
    #[doc(hidden)]
    pub fn assert_invariants(&self) {
        let mut degree_sum = 0usize;
        for (vertex, nbrs) in &self.adjacency {
            assert!(
                !nbrs.contains(vertex),
                "graph invariant violated: self-loop stored in adjacency"
            );
            for neighbor in nbrs {
                let back = self.adjacency.get(neighbor);
                assert!(
                    back.is_some(),
                    "graph invariant violated: neighbor missing from vertex set"
                );
                assert!(
                    back.is_some_and(|set| set.contains(vertex)),
                    "graph invariant violated: asymmetric edge"
                );
            }
            degree_sum += nbrs.len();
        }
        assert!(
            degree_sum % 2 == 0,
            "graph invariant violated: odd degree sum {degree_sum}"
        );
    }
}
