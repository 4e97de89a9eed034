//! Internal graph accessors and low-level building blocks.
//!
//! This module is intentionally `pub(crate)` so traversals can share scratch
//! structures (visited sets) without exposing them as part of the public API
//! surface.

pub(crate) mod visited;
