use crate::api::config::ArenaConfig;
use crate::core::world::World;
use crate::error::ArenaError;
use crate::input::queue::InputQueue;

/// The contract every arena game fulfills.
pub trait Game {
    /// Return arena configuration. Called once before init.
    fn config(&self) -> ArenaConfig {
        ArenaConfig::default()
    }

    /// Register controllers, spawn bodies and tiles.
    fn init(&mut self, world: &mut World) -> Result<(), ArenaError>;

    /// Called once per tick before the world steps. Handle game-level input here
    /// (e.g. a reset key); body intents are written by controllers, not here.
    fn update(&mut self, _world: &mut World, _input: &InputQueue) {}
}
