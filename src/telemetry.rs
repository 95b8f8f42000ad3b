//! Serial telemetry decoder.
//!
//! The hardware streams one ASCII frame per line: fields separated by `;`,
//! at least five of them, with the signed gyroscope reading at field index 4.
//! Anything else on the line is ignored.
//!
//! Per tick the source reads one line (bounded by the port's read timeout)
//! and runs it through a small pipeline:
//!
//! 1. empty / whitespace-only line → idle tick, no event
//! 2. fewer than 5 fields, or a non-numeric gyro field → malformed frame,
//!    no event
//! 3. normalize: `raw / 32768` (signed 16-bit fixed-point fraction)
//! 4. dead-zone: magnitudes below 0.025 are forced to exactly zero — this
//!    happens **before** scaling
//! 5. emit `VerticalRotationDeltaChanged(-delta * vertical_angle_factor)`
//!
//! Every valid frame emits an event, including zeroed ones. A read timeout is
//! an idle tick; any other read error is a dead link and propagates.

use crate::error::InputError;
use crate::event::InputEvent;
use crate::source::InputSource;
use log::debug;
use std::io::{BufRead, BufReader, ErrorKind, Read};

const NORMALIZER_FACTOR: f32 = 1.0 / 32768.0;
const DEAD_ZONE_TOLERANCE: f32 = 0.025;
const FIELD_SEPARATOR: char = ';';
const GYRO_FIELD_INDEX: usize = 4;
const MIN_FIELDS: usize = GYRO_FIELD_INDEX + 1;

/// Telemetry-backed input source. Exclusively owns the open connection for
/// the lifetime of the session.
pub struct TelemetrySource {
    conn: BufReader<Box<dyn Read + Send>>,
    vertical_angle_factor: f32,
}

impl TelemetrySource {
    /// Wraps an open connection. `conn` is usually a freshly opened serial
    /// port ([`open_port`](crate::ports::open_port)); anything readable works,
    /// which is also how the decoder is tested.
    pub fn new(conn: Box<dyn Read + Send>, vertical_angle_factor: f32) -> Self {
        Self {
            conn: BufReader::new(conn),
            vertical_angle_factor,
        }
    }

    /// Reads one line. `None` on timeout or EOF (idle tick); hard errors
    /// propagate.
    fn read_frame(&mut self) -> Result<Option<String>, InputError> {
        let mut line = String::new();
        match self.conn.read_line(&mut line) {
            Ok(0) => Ok(None),
            Ok(_) => Ok(Some(line)),
            Err(e) if e.kind() == ErrorKind::TimedOut => Ok(None),
            Err(e) => Err(InputError::SerialRead(e)),
        }
    }
}

/// Extracts the raw gyroscope reading from one frame line.
///
/// Returns `None` for malformed frames. The gyro reading lives at a fixed
/// field index, so the length guard here is what keeps a short frame from
/// becoming an out-of-bounds fault.
fn parse_gyro_field(line: &str) -> Option<i32> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    if fields.len() < MIN_FIELDS {
        return None;
    }
    // trim() also strips the \r left over from CRLF line endings
    fields[GYRO_FIELD_INDEX].trim().parse().ok()
}

/// `[-32768, 32767]` → `[-1.0, ~1.0)`.
#[inline]
fn normalize(raw: i32) -> f32 {
    raw as f32 * NORMALIZER_FACTOR
}

/// Forces readings inside the tolerance band to exactly zero. The bound is
/// strict: a magnitude of exactly 0.025 passes through.
#[inline]
fn dead_zone(delta: f32) -> f32 {
    if delta.abs() < DEAD_ZONE_TOLERANCE {
        0.0
    } else {
        delta
    }
}

impl InputSource for TelemetrySource {
    fn poll(&mut self) -> Result<Vec<InputEvent>, InputError> {
        let line = match self.read_frame()? {
            Some(line) => line,
            None => return Ok(Vec::new()),
        };
        if line.trim().is_empty() {
            return Ok(Vec::new());
        }

        let raw = match parse_gyro_field(&line) {
            Some(raw) => raw,
            None => return Ok(Vec::new()),
        };

        let delta = dead_zone(normalize(raw));
        debug!("frame: raw={} delta={}", raw, delta);

        Ok(vec![InputEvent::VerticalRotationDeltaChanged(
            -delta * self.vertical_angle_factor,
        )])
    }

    fn name(&self) -> &str {
        "telemetry"
    }
}
