//! Gyrohelm — single-source input manager for Rust.
//!
//! Reads operator intent from exactly one of two interchangeable sources — a
//! hardware device streaming orientation telemetry over a serial line, or the
//! local keyboard/mouse — and republishes it as normalized, consumer-agnostic
//! events: a fire pulse, a look point, and a vertical rotation delta.
//!
//! The mode is chosen once, at initialization: if the configured serial port
//! exists it is opened and telemetry drives the session; otherwise the
//! session falls back to local input for its whole lifetime. Polling is
//! cooperative and single-threaded — the embedding scheduler calls
//! [`InputSession::tick`] and owns the cadence.

pub mod config;
pub mod error;
pub mod event;
pub mod eventbus;
pub mod hosts;
pub mod local;
pub mod logger;
pub mod ports;
pub mod session;
pub mod source;
pub mod telemetry;

pub use config::*;
pub use error::*;
pub use event::*;
pub use eventbus::*;
pub use local::*;
pub use logger::*;
pub use session::*;
pub use source::*;
pub use telemetry::*;
