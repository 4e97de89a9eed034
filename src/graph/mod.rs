//! Graph containers and traversals.
//!
//! - `undirected`: a hash-keyed simple undirected graph over arbitrary vertex values
//! - `access`: internal scratch structures shared by traversals

pub mod undirected;
pub(crate) mod access;

pub use undirected::{Bfs, NeighborIter, Neighbors, UnGraph, Vertices};
