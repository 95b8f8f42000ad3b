use crate::event::InputEvent;
use std::collections::BTreeMap;

/// Trait for reacting to published input events.
pub trait InputListener: Send {
    fn on_input(&mut self, event: &InputEvent);
}

/// Determines which event channel a listener subscribes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventFilter {
    All,
    FireOnly,
    LookPointOnly,
    RotationOnly,
    Custom(fn(&InputEvent) -> bool), // Optional
}

/// Metadata-wrapped listener with filter and control flag.
struct ListenerEntry {
    listener: Box<dyn InputListener>,
    enabled: bool,
    filter: EventFilter,
}

/// The dispatcher between the active source and its consumers.
///
/// Three logical channels (fire, look point, rotation delta) selected per
/// listener via [`EventFilter`]. Emitting with zero listeners is a no-op.
/// Listeners are stored in registration order and each one observes every
/// matching publish in publish order; everything runs on the caller's thread,
/// so no locking is involved.
pub struct InputEventBus {
    next_id: u64,
    listeners: BTreeMap<u64, ListenerEntry>,
}

impl InputEventBus {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            listeners: BTreeMap::new(),
        }
    }

    /// Registers a listener on the channel selected by `filter`.
    pub fn add_listener(
        &mut self,
        listener: impl InputListener + 'static,
        filter: EventFilter,
    ) -> u64 {
        let id = self.next_id;
        self.listeners.insert(
            id,
            ListenerEntry {
                listener: Box::new(listener),
                enabled: true,
                filter,
            },
        );
        self.next_id += 1;
        id
    }

    /// Enables a previously registered listener.
    pub fn enable(&mut self, id: u64) {
        if let Some(entry) = self.listeners.get_mut(&id) {
            entry.enabled = true;
        }
    }

    /// Disables (mutes) a listener without removing it.
    pub fn disable(&mut self, id: u64) {
        if let Some(entry) = self.listeners.get_mut(&id) {
            entry.enabled = false;
        }
    }

    /// Unregisters a listener entirely.
    pub fn remove_listener(&mut self, id: u64) {
        self.listeners.remove(&id);
    }

    /// Emits one event to all active and matching listeners.
    fn emit(&mut self, event: &InputEvent) {
        for entry in self.listeners.values_mut() {
            if !entry.enabled {
                continue;
            }

            let passes_filter = match entry.filter {
                EventFilter::All => true,
                EventFilter::FireOnly => matches!(event, InputEvent::FireTriggered),
                EventFilter::LookPointOnly => {
                    matches!(event, InputEvent::LookPointChanged { .. })
                }
                EventFilter::RotationOnly => {
                    matches!(event, InputEvent::VerticalRotationDeltaChanged { .. })
                }
                EventFilter::Custom(f) => f(event),
            };

            if passes_filter {
                entry.listener.on_input(event);
            }
        }
    }

    /// Emits a batch of events to matching listeners.
    pub fn emit_all(&mut self, events: &[InputEvent]) {
        for event in events {
            self.emit(event);
        }
    }
}

impl Default for InputEventBus {
    fn default() -> Self {
        Self::new()
    }
}
