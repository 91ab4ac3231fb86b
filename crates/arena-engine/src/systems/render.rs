use crate::core::geometry::Collider;
use crate::core::world::World;
use crate::renderer::instance::{RenderBuffer, RenderInstance};

/// Build the render buffer from the world's current state.
/// Draw order: tiles, then enemies, then players. Reads positions and boxes only.
pub fn build_render_buffer(world: &World, buffer: &mut RenderBuffer) {
    buffer.clear();

    for tile in world.tiles() {
        buffer.push(RenderInstance::from_box(tile.bounds(), tile.color));
    }
    for entity in world.enemies().iter().chain(world.players()) {
        buffer.push(RenderInstance::from_box(&entity.aabb(), entity.color));
    }
}
