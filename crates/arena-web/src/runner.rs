use arena_engine::{
    build_render_buffer, ArenaConfig, ArenaError, FixedTimestep, Game, InputEvent, InputQueue,
    RenderBuffer, World,
};

/// Generic game runner that wires up the engine loop.
///
/// Each concrete game creates a `thread_local!` GameRunner and exports free
/// functions via `#[wasm_bindgen]`, because wasm-bindgen cannot export
/// generic structs directly. See [`crate::export_game`].
pub struct GameRunner<G: Game> {
    game: G,
    world: World,
    input: InputQueue,
    render_buffer: RenderBuffer,
    timestep: FixedTimestep,
    initialized: bool,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Result<Self, ArenaError> {
        let config = game.config();
        let timestep = FixedTimestep::from_tick_rate(config.tick_rate, config.max_steps_per_frame);
        let world = World::new(config)?;

        Ok(Self {
            game,
            world,
            input: InputQueue::new(),
            render_buffer: RenderBuffer::new(),
            timestep,
            initialized: false,
        })
    }

    /// Initialize the game. Call once after construction.
    pub fn init(&mut self) -> Result<(), ArenaError> {
        self.game.init(&mut self.world)?;
        build_render_buffer(&self.world, &mut self.render_buffer);
        self.initialized = true;
        Ok(())
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame: zero or more fixed ticks, then rebuild the render buffer.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            log::warn!("tick called before init; ignoring");
            return;
        }

        let steps = self.timestep.accumulate(dt);
        if steps == 0 {
            // Keep pending edges for the next frame that actually ticks.
            return;
        }
        for _ in 0..steps {
            self.game.update(&mut self.world, &self.input);
            self.world.step(self.input.as_slice());
        }
        self.input.clear();

        build_render_buffer(&self.world, &mut self.render_buffer);
    }

    /// Return every body to its spawn state.
    pub fn reset(&mut self) {
        self.world.reset();
        build_render_buffer(&self.world, &mut self.render_buffer);
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn config(&self) -> &ArenaConfig {
        self.world.config()
    }

    // ---- Pointer accessors for shared-memory reads ----

    pub fn instances_ptr(&self) -> *const f32 {
        self.render_buffer.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.render_buffer.instance_count()
    }

    pub fn world_width(&self) -> f32 {
        self.config().arena_width
    }

    pub fn world_height(&self) -> f32 {
        self.config().arena_height
    }

    pub fn tick_rate(&self) -> u32 {
        self.config().tick_rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_engine::{keys, Entity, PlayerController, Tile};
    use glam::Vec2;

    struct TestGame {
        resets: u32,
    }

    impl Game for TestGame {
        fn init(&mut self, world: &mut World) -> Result<(), ArenaError> {
            world.add_tile(Tile::new(Vec2::new(450.0, 450.0), Vec2::new(900.0, 100.0))?);
            let controller = world.add_controller(Box::new(PlayerController::new()));
            let id = world.next_id();
            let player = Entity::new(id, Vec2::new(100.0, 100.0), Vec2::new(50.0, 50.0), 5.0)?
                .with_controller(controller);
            world.spawn_player(player)?;
            Ok(())
        }

        fn update(&mut self, world: &mut World, input: &InputQueue) {
            if input.pressed(keys::R) {
                self.resets += 1;
                world.reset();
            }
        }
    }

    fn runner() -> GameRunner<TestGame> {
        let mut runner = GameRunner::new(TestGame { resets: 0 }).unwrap();
        runner.init().unwrap();
        runner
    }

    const FRAME: f32 = 1.0 / 60.0;

    #[test]
    fn rejects_invalid_config() {
        struct Broken;
        impl Game for Broken {
            fn config(&self) -> ArenaConfig {
                ArenaConfig { tick_rate: 0, ..ArenaConfig::default() }
            }
            fn init(&mut self, _world: &mut World) -> Result<(), ArenaError> {
                Ok(())
            }
        }
        assert!(GameRunner::new(Broken).is_err());
    }

    #[test]
    fn tick_before_init_does_nothing() {
        let mut runner = GameRunner::new(TestGame { resets: 0 }).unwrap();
        runner.tick(FRAME);
        assert_eq!(runner.world().tick_count(), 0);
        assert_eq!(runner.instance_count(), 0);
    }

    #[test]
    fn one_frame_one_tick() {
        let mut runner = runner();
        assert_eq!(runner.instance_count(), 2);
        runner.tick(FRAME);
        assert_eq!(runner.world().tick_count(), 1);
        assert_eq!(runner.world().players()[0].pos(), Vec2::new(100.0, 101.0));
    }

    #[test]
    fn input_survives_frames_without_ticks() {
        let mut runner = runner();
        runner.push_input(InputEvent::KeyDown { key_code: keys::ARROW_RIGHT });
        runner.tick(0.001);
        assert_eq!(runner.world().tick_count(), 0);

        runner.tick(FRAME);
        assert!(runner.world().tick_count() >= 1);
        assert!(runner.world().players()[0].body.intents.right);
        assert!(runner.input.is_empty());
    }

    #[test]
    fn game_update_sees_input_before_step() {
        let mut runner = runner();
        for _ in 0..10 {
            runner.tick(FRAME);
        }
        runner.push_input(InputEvent::KeyDown { key_code: keys::R });
        runner.tick(FRAME);
        assert_eq!(runner.game.resets, 1);
        // Reset ran, then one step fell one unit from spawn.
        assert_eq!(runner.world().players()[0].pos(), Vec2::new(100.0, 101.0));
    }

    #[test]
    fn reset_is_idempotent_through_runner() {
        let mut runner = runner();
        for _ in 0..5 {
            runner.tick(FRAME);
        }
        runner.reset();
        runner.reset();
        assert_eq!(runner.world().players()[0].pos(), Vec2::new(100.0, 100.0));
    }
}
