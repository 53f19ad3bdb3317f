//! Event sources shipped with `evdispatch`.
//!
//! Implementations of [`EventSource`](crate::source::EventSource) that do not need a
//! native library. Platform bindings implement the same trait in their own crates.
//!
//! - [`VirtualSource`]: scripted events for tests, demos and replay.
//! - [`EventQueue`](crate::EventQueue) is also a source; it lives in [`crate::queue`].

pub mod virtual_source;

pub use virtual_source::VirtualSource;
