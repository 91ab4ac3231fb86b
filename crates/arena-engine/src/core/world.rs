use crate::api::config::ArenaConfig;
use crate::api::types::{ControllerId, EntityId};
use crate::components::entity::Entity;
use crate::components::tile::Tile;
use crate::controller::{ControlContext, Controller};
use crate::core::geometry::{collect_boxes, Aabb};
use crate::error::ArenaError;
use crate::input::queue::InputEvent;

/// Owns every body, tile and controller in an arena and steps them one tick at a time.
///
/// Players collide with enemies, then tiles. Enemies collide with tiles only.
/// Bodies update strictly one after another in insertion order.
pub struct World {
    config: ArenaConfig,
    players: Vec<Entity>,
    enemies: Vec<Entity>,
    tiles: Vec<Tile>,
    controllers: Vec<Box<dyn Controller>>,
    next_id: u32,
    tick: u64,
}

impl World {
    pub fn new(config: ArenaConfig) -> Result<Self, ArenaError> {
        config.validate()?;
        Ok(Self {
            config,
            players: Vec::new(),
            enemies: Vec::new(),
            tiles: Vec::new(),
            controllers: Vec::new(),
            next_id: 1,
            tick: 0,
        })
    }

    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    /// Generate the next unique entity ID.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Register a controller. Entities refer to it by the returned id.
    pub fn add_controller(&mut self, controller: Box<dyn Controller>) -> ControllerId {
        let id = ControllerId(self.controllers.len() as u32);
        self.controllers.push(controller);
        id
    }

    pub fn spawn_player(&mut self, entity: Entity) -> Result<EntityId, ArenaError> {
        self.check_controller(&entity)?;
        log::info!("spawned player {:?} at {:?}", entity.id, entity.pos());
        let id = entity.id;
        self.players.push(entity);
        Ok(id)
    }

    pub fn spawn_enemy(&mut self, entity: Entity) -> Result<EntityId, ArenaError> {
        self.check_controller(&entity)?;
        log::info!("spawned enemy {:?} at {:?}", entity.id, entity.pos());
        let id = entity.id;
        self.enemies.push(entity);
        Ok(id)
    }

    pub fn add_tile(&mut self, tile: Tile) {
        self.tiles.push(tile);
    }

    pub fn players(&self) -> &[Entity] {
        &self.players
    }

    pub fn enemies(&self) -> &[Entity] {
        &self.enemies
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.players
            .iter()
            .chain(self.enemies.iter())
            .find(|e| e.id == id)
    }

    /// Number of ticks stepped since creation.
    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    /// Advance every body by one tick.
    pub fn step(&mut self, events: &[InputEvent]) {
        let ctx = ControlContext {
            events,
            arena_width: self.config.arena_width,
            arena_height: self.config.arena_height,
        };
        let tile_boxes = collect_boxes(&self.tiles);
        let enemy_boxes = collect_boxes(&self.enemies);

        drive(
            &mut self.players,
            &mut self.controllers,
            &ctx,
            &self.config,
            &[enemy_boxes.as_slice(), tile_boxes.as_slice()],
        );
        drive(
            &mut self.enemies,
            &mut self.controllers,
            &ctx,
            &self.config,
            &[tile_boxes.as_slice()],
        );

        self.tick += 1;
        log::trace!("tick {} complete", self.tick);
    }

    /// Return every player and enemy to its spawn state.
    pub fn reset(&mut self) {
        for entity in self.players.iter_mut().chain(self.enemies.iter_mut()) {
            entity.body.reset();
        }
        log::debug!("world reset at tick {}", self.tick);
    }

    fn check_controller(&self, entity: &Entity) -> Result<(), ArenaError> {
        match entity.controller {
            Some(id) if id.0 as usize >= self.controllers.len() => {
                Err(ArenaError::UnknownController(id))
            }
            _ => Ok(()),
        }
    }
}

fn drive(
    entities: &mut [Entity],
    controllers: &mut [Box<dyn Controller>],
    ctx: &ControlContext<'_>,
    config: &ArenaConfig,
    collections: &[&[Aabb]],
) {
    for entity in entities {
        if let Some(controller) = entity
            .controller
            .and_then(|id| controllers.get_mut(id.0 as usize))
        {
            controller.apply(&mut entity.body, ctx);
        }
        entity.body.update(&config.physics, collections);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::PlayerController;
    use crate::input::keys;
    use glam::Vec2;

    fn world() -> World {
        World::new(ArenaConfig::default()).unwrap()
    }

    fn actor(world: &mut World, pos: Vec2) -> Entity {
        let id = world.next_id();
        Entity::new(id, pos, Vec2::new(50.0, 50.0), 5.0).unwrap()
    }

    #[test]
    fn rejects_invalid_config() {
        let config = ArenaConfig {
            arena_width: -1.0,
            ..ArenaConfig::default()
        };
        assert!(matches!(World::new(config), Err(ArenaError::InvalidConfig(_))));
    }

    #[test]
    fn rejects_unregistered_controller() {
        let mut w = world();
        let e = actor(&mut w, Vec2::ZERO).with_controller(ControllerId(3));
        assert!(matches!(
            w.spawn_player(e),
            Err(ArenaError::UnknownController(ControllerId(3)))
        ));
    }

    #[test]
    fn player_lands_on_tile() {
        let mut w = world();
        w.add_tile(Tile::new(Vec2::new(450.0, 450.0), Vec2::new(900.0, 100.0)).unwrap());
        let p = actor(&mut w, Vec2::new(100.0, 100.0));
        let id = w.spawn_player(p).unwrap();

        // Falls 1 unit per airborne tick; 375 units to the floor top at 400.
        let mut landed = false;
        for _ in 0..1000 {
            w.step(&[]);
            if w.entity(id).unwrap().body.grounded {
                landed = true;
                break;
            }
        }
        assert!(landed);
        assert_eq!(w.entity(id).unwrap().body.aabb().bottom(), 400.0);
    }

    #[test]
    fn keyboard_input_moves_player() {
        let mut w = world();
        let controller = w.add_controller(Box::new(PlayerController::new()));
        let p = actor(&mut w, Vec2::new(100.0, 100.0)).with_controller(controller);
        let id = w.spawn_player(p).unwrap();

        w.step(&[InputEvent::KeyDown { key_code: keys::ARROW_RIGHT }]);
        let x_after_press = w.entity(id).unwrap().pos().x;
        assert!(x_after_press > 100.0);

        w.step(&[InputEvent::KeyUp { key_code: keys::ARROW_RIGHT }]);
        assert_eq!(w.entity(id).unwrap().pos().x, x_after_press);
    }

    #[test]
    fn players_collide_with_enemies_but_enemies_ignore_players() {
        let mut w = world();
        let controller = w.add_controller(Box::new(PlayerController::new()));
        let p = actor(&mut w, Vec2::new(100.0, 100.0)).with_controller(controller);
        let player = w.spawn_player(p).unwrap();
        let e = actor(&mut w, Vec2::new(153.0, 100.0));
        let enemy = w.spawn_enemy(e).unwrap();

        w.step(&[InputEvent::KeyDown { key_code: keys::D }]);

        let p = w.entity(player).unwrap();
        let e = w.entity(enemy).unwrap();
        assert_eq!(p.body.velocity.x, 0.0);
        assert_eq!(p.body.aabb().right(), 128.0);
        // Both fell one unit: the enemy by gravity, the player after snapping.
        assert_eq!(e.pos(), Vec2::new(153.0, 101.0));
    }

    #[test]
    fn reset_restores_spawn_positions() {
        let mut w = world();
        let p = actor(&mut w, Vec2::new(100.0, 100.0));
        let id = w.spawn_player(p).unwrap();
        for _ in 0..20 {
            w.step(&[]);
        }
        assert_ne!(w.entity(id).unwrap().pos(), Vec2::new(100.0, 100.0));

        w.reset();
        w.reset();
        let body = &w.entity(id).unwrap().body;
        assert_eq!(body.position(), Vec2::new(100.0, 100.0));
        assert_eq!(body.velocity, Vec2::ZERO);
        assert!(!body.grounded);
        assert_eq!(w.tick_count(), 20);
    }
}
