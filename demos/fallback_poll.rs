use gyrohelm::hosts::ScriptedHost;
use gyrohelm::{EventFilter, InputConfig, InputError, InputEvent, InputListener, InputSession};
use std::time::Duration;

struct Printer;

impl InputListener for Printer {
    fn on_input(&mut self, event: &InputEvent) {
        println!("{event:?}");
    }
}

fn main() -> Result<(), InputError> {
    env_logger::init();

    // A port name nothing will ever match, so the session falls back to the
    // scripted keyboard/mouse host.
    let config = InputConfig {
        port_name: "PORT_THAT_DOES_NOT_EXIST".to_string(),
        ..Default::default()
    };

    let host = ScriptedHost::new();
    let handle = host.clone();

    let mut session = InputSession::initialize(&config, Box::new(host))?;
    println!("active source: {:?}", session.source_kind());
    session.add_listener(Printer, EventFilter::All);

    for i in 0..30 {
        handle.move_pointer(i as f32 * 8.0, 240.0);
        if i % 10 == 3 {
            handle.press_key(&config.fire_key);
        } else {
            handle.release_key(&config.fire_key);
        }

        session.tick()?;

        // Keep CPU usage sane in the demo
        std::thread::sleep(Duration::from_millis(5));
    }

    Ok(())
}
