use crate::event::LookPoint;
use crate::local::HostInput;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct HostState {
    pointer: LookPoint,
    keys_down: HashSet<String>,
}

/// A driveable [`HostInput`] for demos and tests.
///
/// Cloning yields a handle to the same state, so one clone can be handed to
/// the session while another steers it between ticks.
#[derive(Clone, Default)]
pub struct ScriptedHost {
    state: Arc<Mutex<HostState>>,
}

impl ScriptedHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the scripted pointer.
    pub fn move_pointer(&self, x: f32, y: f32) {
        self.lock().pointer = LookPoint::new(x, y);
    }

    /// Holds `key` down until released.
    pub fn press_key(&self, key: &str) {
        self.lock().keys_down.insert(key.to_string());
    }

    pub fn release_key(&self, key: &str) {
        self.lock().keys_down.remove(key);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HostState> {
        // a poisoned lock still holds usable host state
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl HostInput for ScriptedHost {
    fn pointer_position(&mut self) -> LookPoint {
        self.lock().pointer
    }

    fn key_down(&mut self, key: &str) -> bool {
        self.lock().keys_down.contains(key)
    }
}
