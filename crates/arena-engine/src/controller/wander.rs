use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::api::config::WanderConfig;
use crate::controller::{ControlContext, Controller};
use crate::core::body::{Intents, KinematicBody};

/// Horizontal choice held by a wanderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    Left,
    Right,
    Idle,
}

/// Autonomous controller: picks a random horizontal heading, holds it for a
/// random number of ticks, and turns around at the arena's side walls.
#[derive(Debug, Clone)]
pub struct WanderController {
    rng: ChaCha8Rng,
    speed: f32,
    min_ticks: u32,
    max_ticks: u32,
    heading: Heading,
    remaining: u32,
}

impl WanderController {
    /// `seed` selects the random stream; equal seeds give equal behavior.
    pub fn new(config: &WanderConfig, seed: u64) -> Self {
        let min_ticks = config.min_ticks.max(1);
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            speed: config.speed,
            min_ticks,
            max_ticks: config.max_ticks.max(min_ticks),
            heading: Heading::Idle,
            remaining: 0,
        }
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    /// Ticks left before the next re-roll.
    pub fn remaining_ticks(&self) -> u32 {
        self.remaining
    }

    fn roll_duration(&mut self) -> u32 {
        self.rng.gen_range(self.min_ticks..=self.max_ticks)
    }

    fn roll_heading(&mut self) -> Heading {
        match self.rng.gen_range(0..3) {
            0 => Heading::Left,
            1 => Heading::Right,
            _ => Heading::Idle,
        }
    }

    fn force(&mut self, heading: Heading) {
        if self.heading != heading {
            log::trace!("wanderer reversing to {:?}", heading);
            self.heading = heading;
            self.remaining = self.roll_duration();
        }
    }
}

impl Controller for WanderController {
    fn apply(&mut self, body: &mut KinematicBody, ctx: &ControlContext<'_>) {
        body.speed = self.speed;

        if self.remaining == 0 {
            self.heading = self.roll_heading();
            self.remaining = self.roll_duration();
        }

        let aabb = *body.aabb();
        if aabb.left() <= 0.0 {
            self.force(Heading::Right);
        } else if aabb.right() >= ctx.arena_width {
            self.force(Heading::Left);
        }
        self.remaining -= 1;

        body.intents = Intents {
            left: self.heading == Heading::Left,
            right: self.heading == Heading::Right,
            ..Intents::NONE
        };
    }
}
