use std::collections::HashMap;

use crate::controller::{ControlContext, Controller};
use crate::core::body::{Direction, KinematicBody};
use crate::input::keys;
use crate::input::queue::InputEvent;

/// Keyboard controller: each bound key-down sets its intent, key-up clears it.
#[derive(Debug, Clone)]
pub struct PlayerController {
    bindings: HashMap<u32, Direction>,
}

impl PlayerController {
    /// Arrow keys and WASD.
    pub fn new() -> Self {
        Self::unbound()
            .with_binding(keys::ARROW_LEFT, Direction::Left)
            .with_binding(keys::A, Direction::Left)
            .with_binding(keys::ARROW_RIGHT, Direction::Right)
            .with_binding(keys::D, Direction::Right)
            .with_binding(keys::ARROW_UP, Direction::Up)
            .with_binding(keys::W, Direction::Up)
            .with_binding(keys::ARROW_DOWN, Direction::Down)
            .with_binding(keys::S, Direction::Down)
    }

    /// A controller with no key bindings.
    pub fn unbound() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Bind `key_code` to `direction`, replacing any previous binding for that key.
    pub fn with_binding(mut self, key_code: u32, direction: Direction) -> Self {
        self.bindings.insert(key_code, direction);
        self
    }

    pub fn binding(&self, key_code: u32) -> Option<Direction> {
        self.bindings.get(&key_code).copied()
    }
}

impl Default for PlayerController {
    fn default() -> Self {
        Self::new()
    }
}

impl Controller for PlayerController {
    fn apply(&mut self, body: &mut KinematicBody, ctx: &ControlContext<'_>) {
        for event in ctx.events {
            let (key_code, pressed) = match *event {
                InputEvent::KeyDown { key_code } => (key_code, true),
                InputEvent::KeyUp { key_code } => (key_code, false),
            };
            if let Some(direction) = self.binding(key_code) {
                body.intents.set(direction, pressed);
            }
        }
    }
}
