use glam::Vec2;

use crate::api::types::{Color, ControllerId, EntityId};
use crate::core::body::KinematicBody;
use crate::core::geometry::{Aabb, Collider};
use crate::error::ArenaError;

/// A moving actor: a kinematic body plus the bits the world and renderer need.
#[derive(Debug, Clone)]
pub struct Entity {
    /// Unique identifier.
    pub id: EntityId,
    /// String tag for finding entities by name.
    pub tag: String,
    /// Fill color for the render snapshot.
    pub color: Color,
    pub body: KinematicBody,
    /// Controller writing this body's intents, if any. Passive bodies have none.
    pub controller: Option<ControllerId>,
}

impl Entity {
    /// Create an entity centered at `pos` with the given full `size`.
    pub fn new(id: EntityId, pos: Vec2, size: Vec2, speed: f32) -> Result<Self, ArenaError> {
        Ok(Self {
            id,
            tag: String::new(),
            color: Color::default(),
            body: KinematicBody::new(pos, size, speed)?,
            controller: None,
        })
    }

    // -- Builder pattern --

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_controller(mut self, controller: ControllerId) -> Self {
        self.controller = Some(controller);
        self
    }

    pub fn pos(&self) -> Vec2 {
        self.body.position()
    }
}

impl Collider for Entity {
    fn aabb(&self) -> Aabb {
        *self.body.aabb()
    }
}
