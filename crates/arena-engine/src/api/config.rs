use serde::{Deserialize, Serialize};

use crate::error::ArenaError;

/// Tunables for the per-tick kinematic pipeline.
/// Units are world units per tick; there is no dt scaling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Downward velocity added each tick while a body is not grounded (Y-down).
    pub gravity: f32,
    /// Acceleration magnitude cap.
    pub max_acceleration: f32,
    /// Velocity magnitude cap.
    pub max_velocity: f32,
    /// Velocity components at or below this magnitude snap to zero.
    pub velocity_deadzone: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: 1.0,
            max_acceleration: 1.0,
            max_velocity: 10.0,
            velocity_deadzone: 0.1,
        }
    }
}

/// Parameters for autonomous wandering bodies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WanderConfig {
    /// Force applied per active intent.
    pub speed: f32,
    /// Shortest time (in ticks) a rolled direction is held.
    pub min_ticks: u32,
    /// Longest time (in ticks) a rolled direction is held.
    pub max_ticks: u32,
    /// Base seed; each wanderer derives its own stream from it.
    pub seed: u64,
}

impl Default for WanderConfig {
    fn default() -> Self {
        Self {
            speed: 3.0,
            min_ticks: 30,
            max_ticks: 120,
            seed: 42,
        }
    }
}

/// Configuration for an arena, provided by the game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    /// Arena width in world units.
    pub arena_width: f32,
    /// Arena height in world units.
    pub arena_height: f32,
    /// Fixed simulation rate in ticks per second.
    pub tick_rate: u32,
    /// Maximum fixed steps run for one rendered frame.
    pub max_steps_per_frame: u32,
    /// Force applied per active intent for keyboard-driven bodies.
    pub player_speed: f32,
    pub physics: PhysicsConfig,
    pub wander: WanderConfig,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            arena_width: 900.0,
            arena_height: 500.0,
            tick_rate: 60,
            max_steps_per_frame: 10,
            player_speed: 5.0,
            physics: PhysicsConfig::default(),
            wander: WanderConfig::default(),
        }
    }
}

impl ArenaConfig {
    /// Parse a config from a JSON string. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ArenaError> {
        let config: ArenaConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Seconds per fixed tick.
    pub fn fixed_dt(&self) -> f32 {
        1.0 / self.tick_rate as f32
    }

    /// Check every value is in range.
    pub fn validate(&self) -> Result<(), ArenaError> {
        if !(self.arena_width > 0.0 && self.arena_width.is_finite())
            || !(self.arena_height > 0.0 && self.arena_height.is_finite())
        {
            return Err(ArenaError::InvalidConfig(format!(
                "arena must have positive finite size, got {} x {}",
                self.arena_width, self.arena_height
            )));
        }
        if self.tick_rate == 0 {
            return Err(ArenaError::InvalidConfig("tick_rate must be non-zero".into()));
        }
        if self.max_steps_per_frame == 0 {
            return Err(ArenaError::InvalidConfig(
                "max_steps_per_frame must be non-zero".into(),
            ));
        }
        let p = &self.physics;
        let non_negative = [
            ("player_speed", self.player_speed),
            ("wander.speed", self.wander.speed),
            ("physics.gravity", p.gravity),
            ("physics.max_acceleration", p.max_acceleration),
            ("physics.max_velocity", p.max_velocity),
            ("physics.velocity_deadzone", p.velocity_deadzone),
        ];
        for (name, value) in non_negative {
            if !(value >= 0.0 && value.is_finite()) {
                return Err(ArenaError::InvalidConfig(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }
        if self.wander.min_ticks == 0 || self.wander.min_ticks > self.wander.max_ticks {
            return Err(ArenaError::InvalidConfig(format!(
                "wander ticks must satisfy 0 < min <= max, got {}..={}",
                self.wander.min_ticks, self.wander.max_ticks
            )));
        }
        Ok(())
    }
}
