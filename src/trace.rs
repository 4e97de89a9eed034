//! Feature-gated event macros.
//!
//! With the `tracing` feature enabled these forward to `tracing::trace!` and
//! `tracing::debug!`; without it they expand to nothing, so release builds of
//! the plain crate carry no logging code at all.
//!
//! Events only ever carry sizes and counts. Vertex values are never logged,
//! which keeps `V: Debug` out of every bound.

#[cfg(feature = "tracing")]
macro_rules! trace_event {
    ($($arg:tt)*) => {
        ::tracing::trace!(target: "ungraph", $($arg)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_event {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! debug_event {
    ($($arg:tt)*) => {
        ::tracing::debug!(target: "ungraph", $($arg)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! debug_event {
    ($($arg:tt)*) => {};
}

pub(crate) use debug_event;
pub(crate) use trace_event;
