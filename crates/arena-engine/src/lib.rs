pub mod api;
pub mod components;
pub mod controller;
pub mod core;
pub mod error;
pub mod input;
pub mod renderer;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::config::{ArenaConfig, PhysicsConfig, WanderConfig};
pub use api::game::Game;
pub use api::types::{Color, ControllerId, EntityId};
pub use components::entity::Entity;
pub use components::tile::Tile;
pub use controller::{ControlContext, Controller, PlayerController, WanderController};
pub use crate::core::body::{Direction, Intents, KinematicBody};
pub use crate::core::collision::CollisionResolver;
pub use crate::core::geometry::{apply_deadzone, clamp_magnitude, collect_boxes, Aabb, Collider, Edge};
pub use crate::core::time::FixedTimestep;
pub use crate::core::world::World;
pub use error::ArenaError;
pub use input::keys;
pub use input::queue::{InputEvent, InputQueue};
pub use renderer::instance::{RenderBuffer, RenderInstance};
pub use systems::render::build_render_buffer;
