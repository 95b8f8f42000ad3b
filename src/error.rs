//! Error types.
//!
//! The taxonomy is deliberately small:
//! - A configured port that is absent at startup is **not** an error; the
//!   session falls back to local input and logs once.
//! - A malformed telemetry frame is **not** an error; the tick simply produces
//!   no event.
//! - Everything in this enum is a hard fault: enumeration failed, the port
//!   refused to open, the link died mid-session, or the config file is bad.
//!   These propagate to the caller instead of being swallowed, since a silent
//!   failure here would hide a real hardware disconnect.

use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    /// Listing the available serial ports failed.
    #[error("failed to enumerate serial ports: {0}")]
    PortEnumeration(#[from] serialport::Error),

    /// The configured port was present but could not be opened.
    #[error("failed to open serial port {port}: {source}")]
    PortOpen {
        port: String,
        source: serialport::Error,
    },

    /// A read on an open connection failed with something other than a
    /// timeout. Timeouts are an idle tick, not an error.
    #[error("serial read failed: {0}")]
    SerialRead(#[from] io::Error),

    /// The config file could not be read.
    #[error("failed to read config file {path}: {source}")]
    ConfigRead { path: String, source: io::Error },

    /// The config file is not valid TOML for [`InputConfig`](crate::InputConfig).
    #[error("invalid config file {path}: {source}")]
    ConfigParse {
        path: String,
        source: toml::de::Error,
    },
}
