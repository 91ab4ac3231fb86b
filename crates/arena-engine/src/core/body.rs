use glam::Vec2;

use crate::api::config::PhysicsConfig;
use crate::core::collision::CollisionResolver;
use crate::core::geometry::{apply_deadzone, clamp_magnitude, Aabb, Collider};
use crate::error::ArenaError;

/// One of the four cardinal movement directions (Y-down: `Up` is -Y).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Which directions a body wants to move in this tick.
/// Written by a controller, read once per update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Intents {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl Intents {
    pub const NONE: Intents = Intents {
        up: false,
        down: false,
        left: false,
        right: false,
    };

    pub fn set(&mut self, direction: Direction, active: bool) {
        match direction {
            Direction::Up => self.up = active,
            Direction::Down => self.down = active,
            Direction::Left => self.left = active,
            Direction::Right => self.right = active,
        }
    }

    pub fn with(mut self, direction: Direction) -> Self {
        self.set(direction, true);
        self
    }
}

/// A rectangle moved each tick by intents, gravity and collision.
#[derive(Debug, Clone)]
pub struct KinematicBody {
    pub(crate) position: Vec2,
    pub(crate) aabb: Aabb,
    original_position: Vec2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
    pub intents: Intents,
    /// Set only when this tick's downward sweep hit something.
    pub grounded: bool,
    /// Force added to acceleration per active intent.
    pub speed: f32,
}

impl KinematicBody {
    /// Create a body centered at `position` with the given full `size`.
    pub fn new(position: Vec2, size: Vec2, speed: f32) -> Result<Self, ArenaError> {
        let aabb = Aabb::from_size(position, size)?;
        Ok(Self {
            position,
            aabb,
            original_position: position,
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            intents: Intents::NONE,
            grounded: false,
            speed,
        })
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn aabb(&self) -> &Aabb {
        &self.aabb
    }

    pub fn original_position(&self) -> Vec2 {
        self.original_position
    }

    /// Teleport the body. The reset position is not affected.
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
        self.aabb.set_center(position);
    }

    /// Advance one tick against the given obstacle collections, in order.
    pub fn update(&mut self, physics: &PhysicsConfig, collections: &[&[Aabb]]) {
        let was_grounded = self.grounded;

        self.move_from_intents();
        self.integrate_forces(physics);
        CollisionResolver::resolve_all(self, collections);

        self.position += self.velocity;
        self.aabb.set_center(self.position);

        if self.grounded && !was_grounded {
            log::trace!("body landed at {:?}", self.position);
        }
    }

    /// Restore the spawn state. Calling it repeatedly has no further effect.
    pub fn reset(&mut self) {
        self.velocity = Vec2::ZERO;
        self.acceleration = Vec2::ZERO;
        self.intents = Intents::NONE;
        self.grounded = false;
        self.set_position(self.original_position);
    }

    // Conflicting or absent input on an axis stops motion on it outright.
    fn move_from_intents(&mut self) {
        match (self.intents.left, self.intents.right) {
            (true, false) => self.acceleration.x -= self.speed,
            (false, true) => self.acceleration.x += self.speed,
            _ => {
                self.acceleration.x = 0.0;
                self.velocity.x = 0.0;
            }
        }
        match (self.intents.up, self.intents.down) {
            (true, false) => self.acceleration.y -= self.speed,
            (false, true) => self.acceleration.y += self.speed,
            _ => {
                self.acceleration.y = 0.0;
                self.velocity.y = 0.0;
            }
        }
    }

    fn integrate_forces(&mut self, physics: &PhysicsConfig) {
        if !self.grounded {
            self.velocity.y += physics.gravity;
        }
        self.velocity += self.acceleration;

        self.acceleration = clamp_magnitude(self.acceleration, physics.max_acceleration);
        self.velocity = clamp_magnitude(self.velocity, physics.max_velocity);
        self.velocity = apply_deadzone(self.velocity, physics.velocity_deadzone);
    }
}

impl Collider for KinematicBody {
    fn aabb(&self) -> Aabb {
        self.aabb
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NO_OBSTACLES: &[&[Aabb]] = &[];

    fn body(speed: f32) -> KinematicBody {
        KinematicBody::new(Vec2::new(300.0, 200.0), Vec2::new(50.0, 75.0), speed).unwrap()
    }

    #[test]
    fn rejects_invalid_size() {
        let err = KinematicBody::new(Vec2::ZERO, Vec2::new(0.0, 10.0), 5.0);
        assert!(matches!(err, Err(ArenaError::InvalidGeometry { .. })));
    }

    #[test]
    fn conflicting_intents_cancel_axis() {
        let mut b = body(5.0);
        b.velocity = Vec2::new(4.0, 0.0);
        b.acceleration = Vec2::new(1.0, 0.0);
        b.intents = Intents::NONE.with(Direction::Left).with(Direction::Right);

        b.update(&PhysicsConfig::default(), NO_OBSTACLES);

        assert_eq!(b.velocity.x, 0.0);
        assert_eq!(b.acceleration.x, 0.0);
    }

    #[test]
    fn absent_intents_stop_horizontal_motion_instantly() {
        let mut b = body(5.0);
        b.velocity = Vec2::new(-7.0, 0.0);
        b.grounded = true;

        b.update(&PhysicsConfig::default(), NO_OBSTACLES);

        assert_eq!(b.velocity, Vec2::ZERO);
        assert_eq!(b.position(), Vec2::new(300.0, 200.0));
    }

    #[test]
    fn single_intent_accelerates_then_clamps() {
        let mut b = body(5.0);
        b.grounded = true;
        b.intents = Intents::NONE.with(Direction::Right);

        b.update(&PhysicsConfig::default(), NO_OBSTACLES);

        // Unclamped acceleration (5) fed velocity before the clamp ran.
        assert_eq!(b.velocity.x, 5.0);
        assert!(b.acceleration.length() <= 1.0 + 1e-6);
        assert!((b.acceleration.x - 1.0).abs() < 1e-6);
        assert_eq!(b.position().x, 305.0);
    }

    #[test]
    fn gravity_applies_only_when_airborne() {
        let physics = PhysicsConfig::default();

        let mut airborne = body(5.0);
        airborne.update(&physics, NO_OBSTACLES);
        assert!(airborne.velocity.y > 0.0);

        let mut grounded = body(5.0);
        grounded.grounded = true;
        grounded.update(&physics, NO_OBSTACLES);
        assert_eq!(grounded.velocity.y, 0.0);
    }

    #[test]
    fn small_velocities_snap_to_zero() {
        let physics = PhysicsConfig {
            gravity: 0.05,
            ..PhysicsConfig::default()
        };
        let mut b = body(5.0);
        b.update(&physics, NO_OBSTACLES);
        assert_eq!(b.velocity.y, 0.0);
        assert_eq!(b.position(), Vec2::new(300.0, 200.0));
    }

    #[test]
    fn velocity_is_clamped_with_direction_preserved() {
        let mut b = body(20.0);
        b.intents = Intents::NONE.with(Direction::Right).with(Direction::Down);

        b.update(&PhysicsConfig::default(), NO_OBSTACLES);

        assert!((b.velocity.length() - 10.0).abs() < 1e-4);
        assert!((b.acceleration.length() - 1.0).abs() < 1e-5);
        // Raw velocity was (20, 21).
        let expected = Vec2::new(20.0, 21.0).normalize() * 10.0;
        assert!((b.velocity - expected).length() < 1e-4);
    }

    #[test]
    fn box_tracks_position_after_update() {
        let mut b = body(5.0);
        b.intents = Intents::NONE.with(Direction::Left);
        for _ in 0..5 {
            b.update(&PhysicsConfig::default(), NO_OBSTACLES);
            assert_eq!(b.aabb().center(), b.position());
        }
    }

    #[test]
    fn reset_is_idempotent() {
        let mut b = body(5.0);
        b.intents = Intents::NONE.with(Direction::Right).with(Direction::Up);
        for _ in 0..10 {
            b.update(&PhysicsConfig::default(), NO_OBSTACLES);
        }
        assert_ne!(b.position(), b.original_position());

        b.reset();
        let once = b.clone();
        b.reset();

        assert_eq!(b.position(), b.original_position());
        assert_eq!(b.position(), once.position());
        assert_eq!(b.aabb().center(), b.original_position());
        assert_eq!(b.velocity, Vec2::ZERO);
        assert_eq!(b.acceleration, Vec2::ZERO);
        assert_eq!(b.intents, Intents::NONE);
        assert!(!b.grounded);
        assert_eq!(once.velocity, b.velocity);
    }

    #[test]
    fn set_position_keeps_reset_target() {
        let mut b = body(5.0);
        b.set_position(Vec2::new(10.0, 10.0));
        assert_eq!(b.aabb().center(), Vec2::new(10.0, 10.0));
        b.reset();
        assert_eq!(b.position(), Vec2::new(300.0, 200.0));
    }
}
