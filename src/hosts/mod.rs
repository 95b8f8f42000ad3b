//! Host input backends.
//!
//! Implementations of [`HostInput`](crate::local::HostInput) for the local
//! keyboard/mouse source. The real OS sampling belongs to the host
//! application (it owns the window and the event loop); this module ships
//! the backends that make sense without one.

pub mod scripted;

pub use scripted::ScriptedHost;
