/// Discrete input edges the engine understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A key was pressed. `key_code` uses browser keyCode values (see [`super::keys`]).
    KeyDown { key_code: u32 },
    /// A key was released.
    KeyUp { key_code: u32 },
}

/// A queue of input events.
/// The host pushes events as they arrive; the runner hands them to one frame and clears.
#[derive(Debug, Default)]
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    /// Push a new input event.
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drop all pending events, keeping the allocation.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Pending events in arrival order, without consuming them.
    pub fn as_slice(&self) -> &[InputEvent] {
        &self.events
    }

    /// Whether a key-down edge for `key_code` is pending.
    pub fn pressed(&self, key_code: u32) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e, InputEvent::KeyDown { key_code: k } if *k == key_code))
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}
