/// Fixed timestep accumulator.
/// Turns variable frame times into a whole number of simulation ticks.
#[derive(Debug, Clone)]
pub struct FixedTimestep {
    /// Seconds per tick.
    dt: f32,
    /// Frame time not yet consumed by a tick.
    accumulator: f32,
    /// Upper bound on ticks per frame.
    max_steps: u32,
}

impl FixedTimestep {
    pub fn new(dt: f32, max_steps: u32) -> Self {
        Self {
            dt,
            accumulator: 0.0,
            max_steps: max_steps.max(1),
        }
    }

    /// Build a timestep running `tick_rate` ticks per second.
    pub fn from_tick_rate(tick_rate: u32, max_steps: u32) -> Self {
        Self::new(1.0 / tick_rate.max(1) as f32, max_steps)
    }

    /// Add frame time to the accumulator. Returns the number of ticks to run.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt.max(0.0);
        // Cap so a long stall cannot trigger a spiral of death.
        if self.accumulator >= self.dt * self.max_steps as f32 {
            self.accumulator = 0.0;
            return self.max_steps;
        }
        let steps = ((self.accumulator / self.dt) as u32).min(self.max_steps);
        self.accumulator -= steps as f32 * self.dt;
        steps
    }

    /// Interpolation alpha for rendering between ticks (0.0 to 1.0).
    pub fn alpha(&self) -> f32 {
        self.accumulator / self.dt
    }

    pub fn dt(&self) -> f32 {
        self.dt
    }

    pub fn tick_rate(&self) -> f32 {
        1.0 / self.dt
    }
}
