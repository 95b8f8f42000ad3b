//! Events and value conventions.
//!
//! Gyrohelm republishes operator intent as a small set of consumer-agnostic
//! events ([`InputEvent`]). Whichever source is active (serial telemetry or
//! local keyboard/mouse) emits the same event type, so consumers never care
//! where the input came from.
//!
//! ## Value conventions
//! - **Look point:** raw pointer position in host coordinates (pixels,
//!   typically). No filtering or normalization is applied; units are whatever
//!   the host reports.
//! - **Vertical rotation delta:** degrees per tick, already dead-zone filtered
//!   and scaled by the configured vertical angle factor. Sign is flipped from
//!   the raw gyroscope reading so a positive delta rotates the same way for
//!   every consumer.
//! - **Fire:** a payload-free pulse emitted once per discrete trigger, never
//!   once per tick while a key is held.

/// A 2D pointer position in host coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LookPoint {
    pub x: f32,
    pub y: f32,
}

impl LookPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A single published input change.
///
/// The three variants are the three event channels of the dispatcher; a
/// source emits at most one event per channel per tick.
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    /// The fire trigger was pressed this tick (edge, not level).
    FireTriggered,

    /// The look point moved (or was re-sampled) this tick.
    LookPointChanged(LookPoint),

    /// A new vertical rotation delta, in degrees.
    ///
    /// Already normalized, dead-zone filtered, and scaled; consumers can apply
    /// it directly.
    VerticalRotationDeltaChanged(f32),
}
