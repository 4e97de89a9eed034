//! # `ungraph` - Generic Undirected Graphs
//!
//! An in-memory undirected graph container parameterized over its vertex
//! type. Any `Eq + Hash + Clone` value can be a vertex: integers, strings, or
//! custom keys hashed through a caller-chosen [`BuildHasher`](core::hash::BuildHasher).
//!
//! ## Model
//!
//! The graph is a single adjacency map from each vertex to the set of its
//! neighbors. It is *simple*: no self-loops, no parallel edges, no weights,
//! no direction. Isolated vertices are allowed.
//!
//! ### Invariants
//!
//! After every public operation:
//! - **Symmetry**: `v` is a neighbor of `u` iff `u` is a neighbor of `v`.
//! - **No self-loops**: a vertex is never its own neighbor; `add_edge(v, v)`
//!   is silently ignored.
//! - **Existence**: a vertex is in the graph iff it is a key of the map.
//! - **Handshaking**: `edge_count() * 2` equals the sum of all degrees.
//!
//! ### Totality
//!
//! No operation fails. Queries about absent vertices answer empty, zero or
//! `false`; removing something absent is a no-op; `distance` models
//! "unreachable" as `None`.
//!
//! ### Borrowed views
//!
//! [`UnGraph::neighbors`] and [`UnGraph::iter`] borrow the graph instead of
//! copying. The borrow checker guarantees no view survives a mutation.
//! Owned alternatives are [`UnGraph::neighbor_set`] and [`UnGraph::vertices`].
//!
//! ## Features
//!
//! - `parallel`: rayon-backed degree statistics (`par_edge_count`, ...)
//! - `tracing`: emits `trace`/`debug` events under the `ungraph` target
//!
//! ## Example
//!
//! ```rust
//! use ungraph::UnGraph;
//!
//! // 4x3 grid, vertex (x, y) labelled 10 * x + y.
//! let mut g = UnGraph::new();
//! for x in 1..=4 {
//!     for y in 1..=3 {
//!         if x <= 3 {
//!             g.add_edge(10 * x + y, 10 * (x + 1) + y);
//!         }
//!         if y <= 2 {
//!             g.add_edge(10 * x + y, 10 * x + y + 1);
//!         }
//!     }
//! }
//!
//! assert_eq!(g.vertex_count(), 12);
//! assert_eq!(g.edge_count(), 17);
//! assert_eq!(g.max_degree(), 4);
//! assert_eq!(g.distance(&11, &32), Some(3));
//! assert_eq!(g.bfs(&11).last(), Some(&43));
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

mod trace;

pub mod graph;

pub use graph::{Bfs, NeighborIter, Neighbors, UnGraph, Vertices};
