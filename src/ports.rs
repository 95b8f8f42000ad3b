//! Serial port discovery and connection.
//!
//! Enumeration happens exactly once, at session initialization; the presence
//! decision is never revisited. A port that disappears mid-session is
//! detected only by the read failing, not by re-enumeration.

use crate::error::InputError;
use serialport::SerialPort;
use std::time::Duration;

/// Fixed read timeout on the telemetry connection. Bounds how long a single
/// tick can stall on the serial line.
pub const READ_TIMEOUT: Duration = Duration::from_millis(2000);

/// Lists the names of the serial ports currently visible to the OS.
pub fn available_port_names() -> Result<Vec<String>, InputError> {
    let ports = serialport::available_ports()?;
    Ok(ports.into_iter().map(|info| info.port_name).collect())
}

/// Whether `target` appears in `available`. Exact, case-sensitive match.
pub fn port_present(target: &str, available: &[String]) -> bool {
    available.iter().any(|name| name == target)
}

/// Opens `name` at `baud_rate` with the fixed [`READ_TIMEOUT`].
pub fn open_port(name: &str, baud_rate: u32) -> Result<Box<dyn SerialPort>, InputError> {
    serialport::new(name, baud_rate)
        .timeout(READ_TIMEOUT)
        .open()
        .map_err(|source| InputError::PortOpen {
            port: name.to_string(),
            source,
        })
}
