use arena_engine::*;
use glam::Vec2;

const BODY_SIZE: Vec2 = Vec2::new(50.0, 75.0);
const PLATFORM_SIZE: Vec2 = Vec2::new(200.0, 50.0);
const GROUND_HEIGHT: f32 = 100.0;

/// One keyboard player, two wanderers, a wide ground and two floating platforms.
/// `R` puts every body back where it started.
pub struct ArenaDemo {
    config: ArenaConfig,
}

impl ArenaDemo {
    pub fn new() -> Self {
        Self {
            config: ArenaConfig::default(),
        }
    }

    fn spawn_tiles(world: &mut World) -> Result<(), ArenaError> {
        let w = world.config().arena_width;
        let h = world.config().arena_height;
        // Ground extends well past both sides of the arena.
        world.add_tile(Tile::new(
            Vec2::new(w / 2.0, h - GROUND_HEIGHT / 2.0),
            Vec2::new(w * 4.0, GROUND_HEIGHT),
        )?);
        world.add_tile(Tile::new(Vec2::new(200.0, 300.0), PLATFORM_SIZE)?);
        world.add_tile(Tile::new(Vec2::new(700.0, 375.0), PLATFORM_SIZE)?);
        Ok(())
    }

    fn spawn_wanderer(world: &mut World, pos: Vec2, color: Color, stream: u64) -> Result<EntityId, ArenaError> {
        let wander = world.config().wander;
        let controller = world.add_controller(Box::new(WanderController::new(
            &wander,
            wander.seed.wrapping_add(stream),
        )));
        let id = world.next_id();
        let enemy = Entity::new(id, pos, BODY_SIZE, wander.speed)?
            .with_tag("enemy")
            .with_color(color)
            .with_controller(controller);
        world.spawn_enemy(enemy)
    }
}

impl Default for ArenaDemo {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for ArenaDemo {
    fn config(&self) -> ArenaConfig {
        self.config.clone()
    }

    fn init(&mut self, world: &mut World) -> Result<(), ArenaError> {
        Self::spawn_tiles(world)?;

        let controller = world.add_controller(Box::new(PlayerController::new()));
        let id = world.next_id();
        let player = Entity::new(id, Vec2::new(300.0, 200.0), BODY_SIZE, world.config().player_speed)?
            .with_tag("player")
            .with_color(Color::GREEN)
            .with_controller(controller);
        world.spawn_player(player)?;

        Self::spawn_wanderer(world, Vec2::new(500.0, 200.0), Color::PURPLE, 0)?;
        Self::spawn_wanderer(world, Vec2::new(100.0, 200.0), Color::RED, 1)?;

        log::info!(
            "ArenaDemo: {} player(s), {} enemies, {} tiles",
            world.players().len(),
            world.enemies().len(),
            world.tiles().len()
        );
        Ok(())
    }

    fn update(&mut self, world: &mut World, input: &InputQueue) {
        if input.pressed(keys::R) {
            world.reset();
        }
    }
}
