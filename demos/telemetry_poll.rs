use gyrohelm::hosts::ScriptedHost;
use gyrohelm::{
    EventFilter, EventLogger, InputConfig, InputError, InputEvent, InputListener, InputSession,
    SourceKind,
};

struct DeltaPrinter;

impl InputListener for DeltaPrinter {
    fn on_input(&mut self, event: &InputEvent) {
        if let InputEvent::VerticalRotationDeltaChanged(degrees) = event {
            println!("vertical rotation delta: {degrees:+.3} deg");
        }
    }
}

fn main() -> Result<(), InputError> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => InputConfig::from_file(path)?,
        None => InputConfig::default(),
    };

    let mut session = InputSession::initialize(&config, Box::new(ScriptedHost::new()))?;
    if session.source_kind() != SourceKind::Telemetry {
        eprintln!(
            "{} not found; running on the keyboard/mouse fallback instead",
            config.port_name
        );
    }

    session.add_listener(DeltaPrinter, EventFilter::RotationOnly);
    session.add_listener(EventLogger::new(), EventFilter::All);

    // The serial read bounds each tick at the port's read timeout, so this
    // loop is effectively paced by the hardware.
    loop {
        session.tick()?;
    }
}
