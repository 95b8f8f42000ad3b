//! Local keyboard/mouse source.
//!
//! The fallback when the telemetry hardware is absent. Raw passthrough: no
//! filtering, no normalization. The actual OS sampling lives behind
//! [`HostInput`] so the engine/windowing layer that owns the pointer and
//! keyboard state stays outside this crate; see [`hosts`](crate::hosts) for
//! a ready-made scripted implementation.

use crate::error::InputError;
use crate::event::{InputEvent, LookPoint};
use crate::source::InputSource;

/// The seam to whatever owns the real pointer and keyboard.
///
/// Key identifiers are plain strings (e.g. `"Space"`, `"MouseLeft"`); the
/// host decides what they mean. Implementations report *level* state — edge
/// detection is [`LocalSource`]'s job.
pub trait HostInput: Send {
    /// Current pointer position, in whatever units the host uses.
    fn pointer_position(&mut self) -> LookPoint;

    /// Whether `key` is currently held down.
    fn key_down(&mut self, key: &str) -> bool;
}

/// Keyboard/mouse-backed input source.
pub struct LocalSource {
    host: Box<dyn HostInput>,
    fire_key: String,
    fire_was_down: bool,
}

impl LocalSource {
    pub fn new(host: Box<dyn HostInput>, fire_key: impl Into<String>) -> Self {
        Self {
            host,
            fire_key: fire_key.into(),
            fire_was_down: false,
        }
    }
}

impl InputSource for LocalSource {
    /// Every tick publishes the sampled look point; fire is emitted only on
    /// the released→pressed edge, never while held.
    fn poll(&mut self) -> Result<Vec<InputEvent>, InputError> {
        let mut events = vec![InputEvent::LookPointChanged(self.host.pointer_position())];

        let down = self.host.key_down(&self.fire_key);
        if down && !self.fire_was_down {
            events.push(InputEvent::FireTriggered);
        }
        self.fire_was_down = down;

        Ok(events)
    }

    fn name(&self) -> &str {
        "keyboard-mouse"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hosts::ScriptedHost;

    fn fires(events: &[InputEvent]) -> usize {
        events
            .iter()
            .filter(|e| matches!(e, InputEvent::FireTriggered))
            .count()
    }

    #[test]
    fn look_point_is_published_every_tick() {
        let host = ScriptedHost::new();
        let handle = host.clone();
        let mut src = LocalSource::new(Box::new(host), "Space");

        handle.move_pointer(10.0, 20.0);
        let events = src.poll().unwrap();
        assert_eq!(
            events[0],
            InputEvent::LookPointChanged(LookPoint::new(10.0, 20.0))
        );

        handle.move_pointer(11.0, 20.0);
        let events = src.poll().unwrap();
        assert_eq!(
            events[0],
            InputEvent::LookPointChanged(LookPoint::new(11.0, 20.0))
        );
    }

    #[test]
    fn fire_triggers_once_per_key_down_transition() {
        let host = ScriptedHost::new();
        let handle = host.clone();
        let mut src = LocalSource::new(Box::new(host), "Space");

        assert_eq!(fires(&src.poll().unwrap()), 0);

        handle.press_key("Space");
        assert_eq!(fires(&src.poll().unwrap()), 1);
        // still held: no re-trigger
        assert_eq!(fires(&src.poll().unwrap()), 0);
        assert_eq!(fires(&src.poll().unwrap()), 0);

        handle.release_key("Space");
        assert_eq!(fires(&src.poll().unwrap()), 0);

        handle.press_key("Space");
        assert_eq!(fires(&src.poll().unwrap()), 1);
    }

    #[test]
    fn only_the_configured_key_fires() {
        let host = ScriptedHost::new();
        let handle = host.clone();
        let mut src = LocalSource::new(Box::new(host), "Space");

        handle.press_key("Enter");
        assert_eq!(fires(&src.poll().unwrap()), 0);
    }
}
