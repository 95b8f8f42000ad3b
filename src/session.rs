//! Mode selection and the per-run input session.
//!
//! Initialization enumerates the serial ports exactly once and makes a
//! single, session-lifetime decision: configured port present → telemetry,
//! absent → local keyboard/mouse. There is no runtime re-selection; a port
//! that appears or vanishes later changes nothing about the mode.
//!
//! After that the embedding scheduler calls [`InputSession::tick`] at
//! whatever cadence it likes; each tick polls the active source once and
//! fans the resulting events out to the listeners. Listeners are expected to
//! be registered before the first tick.

use crate::config::InputConfig;
use crate::error::InputError;
use crate::eventbus::{EventFilter, InputEventBus, InputListener};
use crate::local::{HostInput, LocalSource};
use crate::ports;
use crate::source::InputSource;
use crate::telemetry::TelemetrySource;
use log::error;

/// Which source a session ended up bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Telemetry,
    Local,
}

/// The session's one-shot mode decision, as a pure function of the port list.
pub fn resolve_mode(port_name: &str, available: &[String]) -> SourceKind {
    if ports::port_present(port_name, available) {
        SourceKind::Telemetry
    } else {
        SourceKind::Local
    }
}

/// The source a session bound at initialization.
pub enum ActiveSource {
    Telemetry(TelemetrySource),
    Local(LocalSource),
}

impl InputSource for ActiveSource {
    fn poll(&mut self) -> Result<Vec<crate::event::InputEvent>, InputError> {
        match self {
            ActiveSource::Telemetry(source) => source.poll(),
            ActiveSource::Local(source) => source.poll(),
        }
    }

    fn name(&self) -> &str {
        match self {
            ActiveSource::Telemetry(source) => source.name(),
            ActiveSource::Local(source) => source.name(),
        }
    }
}

/// One run's input state: the bound source plus the event bus.
pub struct InputSession {
    source: ActiveSource,
    bus: InputEventBus,
}

impl InputSession {
    /// Enumerates ports, decides the mode, and binds the source.
    ///
    /// `host` is the local keyboard/mouse sampler; it is only consulted when
    /// the session falls back to local input. An open failure on a port that
    /// passed the presence check is fatal to the session and propagates.
    pub fn initialize(
        config: &InputConfig,
        host: Box<dyn HostInput>,
    ) -> Result<Self, InputError> {
        let available = ports::available_port_names()?;

        let source = match resolve_mode(&config.port_name, &available) {
            SourceKind::Telemetry => {
                let port = ports::open_port(&config.port_name, config.baud_rate)?;
                ActiveSource::Telemetry(TelemetrySource::new(
                    Box::new(port),
                    config.vertical_angle_factor,
                ))
            }
            SourceKind::Local => {
                error!(
                    "no port with name {} was found; falling back to keyboard/mouse",
                    config.port_name
                );
                ActiveSource::Local(LocalSource::new(host, config.fire_key.clone()))
            }
        };

        Ok(Self::with_source(source))
    }

    /// Builds a session around an already-constructed source, skipping port
    /// discovery. Useful for embedders that manage the connection themselves,
    /// and for tests.
    pub fn with_source(source: ActiveSource) -> Self {
        Self {
            source,
            bus: InputEventBus::new(),
        }
    }

    /// Registers a listener; see [`InputEventBus::add_listener`].
    pub fn add_listener(
        &mut self,
        listener: impl InputListener + 'static,
        filter: EventFilter,
    ) -> u64 {
        self.bus.add_listener(listener, filter)
    }

    pub fn source_kind(&self) -> SourceKind {
        match self.source {
            ActiveSource::Telemetry(_) => SourceKind::Telemetry,
            ActiveSource::Local(_) => SourceKind::Local,
        }
    }

    /// Polls the active source once and publishes whatever it produced.
    ///
    /// May block up to the serial read timeout when telemetry is active.
    pub fn tick(&mut self) -> Result<(), InputError> {
        let events = self.source.poll()?;
        self.bus.emit_all(&events);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::InputEvent;
    use crate::hosts::ScriptedHost;
    use std::io::Cursor;
    use std::sync::{Arc, Mutex};

    struct Recorder(Arc<Mutex<Vec<InputEvent>>>);

    impl InputListener for Recorder {
        fn on_input(&mut self, event: &InputEvent) {
            self.0.lock().unwrap().push(event.clone());
        }
    }

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn missing_port_selects_local_mode() {
        assert_eq!(resolve_mode("COM4", &names(&["COM3"])), SourceKind::Local);
    }

    #[test]
    fn present_port_selects_telemetry_mode() {
        assert_eq!(
            resolve_mode("COM4", &names(&["COM3", "COM4"])),
            SourceKind::Telemetry
        );
    }

    #[test]
    fn no_ports_at_all_selects_local_mode() {
        assert_eq!(resolve_mode("COM4", &[]), SourceKind::Local);
    }

    #[test]
    fn telemetry_session_publishes_rotation_deltas() {
        let conn = Cursor::new(b"0;0;0;0;16384\nbad frame\n0;0;0;0;0\n".to_vec());
        let mut session = InputSession::with_source(ActiveSource::Telemetry(
            TelemetrySource::new(Box::new(conn), 45.0),
        ));
        assert_eq!(session.source_kind(), SourceKind::Telemetry);

        let seen = Arc::new(Mutex::new(Vec::new()));
        session.add_listener(Recorder(seen.clone()), EventFilter::RotationOnly);

        for _ in 0..4 {
            session.tick().unwrap();
        }

        // the malformed frame tick publishes nothing
        assert_eq!(
            *seen.lock().unwrap(),
            [
                InputEvent::VerticalRotationDeltaChanged(-22.5),
                InputEvent::VerticalRotationDeltaChanged(0.0),
            ]
        );
    }

    #[test]
    fn local_session_publishes_look_and_fire() {
        let host = ScriptedHost::new();
        let handle = host.clone();
        let mut session = InputSession::with_source(ActiveSource::Local(LocalSource::new(
            Box::new(host),
            "Space",
        )));
        assert_eq!(session.source_kind(), SourceKind::Local);

        let seen = Arc::new(Mutex::new(Vec::new()));
        session.add_listener(Recorder(seen.clone()), EventFilter::All);

        handle.move_pointer(3.0, 4.0);
        handle.press_key("Space");
        session.tick().unwrap();
        session.tick().unwrap();

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 3); // two look points, one fire
        assert_eq!(
            seen.iter()
                .filter(|e| matches!(e, InputEvent::FireTriggered))
                .count(),
            1
        );
    }
}
