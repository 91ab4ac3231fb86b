// controller/mod.rs
//
// Controllers write a body's intents before it updates. The world owns the
// controllers; entities refer to theirs by `ControllerId`.

pub mod player;
pub mod wander;

pub use player::PlayerController;
pub use wander::WanderController;

use crate::core::body::KinematicBody;
use crate::input::queue::InputEvent;

/// Read-only inputs available to a controller for one tick.
#[derive(Debug, Clone, Copy)]
pub struct ControlContext<'a> {
    /// Input edges for this tick, in arrival order.
    pub events: &'a [InputEvent],
    pub arena_width: f32,
    pub arena_height: f32,
}

/// Something that decides where a body wants to go.
pub trait Controller {
    /// Update `body.intents` (and optionally `body.speed`) for the coming tick.
    fn apply(&mut self, body: &mut KinematicBody, ctx: &ControlContext<'_>);
}
