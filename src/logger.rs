use crate::event::InputEvent;
use crate::eventbus::InputListener;
use log::info;

/// A simple listener that logs every event it receives.
pub struct EventLogger;

impl EventLogger {
    pub fn new() -> Self {
        EventLogger
    }
}

impl Default for EventLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl InputListener for EventLogger {
    fn on_input(&mut self, event: &InputEvent) {
        info!("[input] {:?}", event);
    }
}
