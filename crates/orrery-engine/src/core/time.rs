/// Simulated time for orbital motion plus an always-running animation timeline.
///
/// `elapsed` advances by `tick_ms` per tick only while not paused and never
/// decreases. `animation_ms` advances every tick; camera tweens run on it so
/// they keep moving while the orbits are frozen.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationClock {
    elapsed: f64,
    paused: bool,
    tick_ms: f64,
    animation_ms: f64,
}

impl SimulationClock {
    pub fn new(tick_ms: f64) -> Self {
        Self {
            elapsed: 0.0,
            paused: false,
            tick_ms,
            animation_ms: 0.0,
        }
    }

    /// Start the simulated clock at a given elapsed value (clamped to >= 0).
    pub fn with_elapsed(mut self, elapsed: f64) -> Self {
        self.elapsed = elapsed.max(0.0);
        self
    }

    /// Simulated milliseconds driving orbital angles.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Fixed increment per tick in milliseconds.
    pub fn tick_ms(&self) -> f64 {
        self.tick_ms
    }

    /// Animation timeline in milliseconds (unaffected by pause).
    pub fn animation_ms(&self) -> f64 {
        self.animation_ms
    }

    /// Advance one tick.
    pub fn tick(&mut self) {
        self.animation_ms += self.tick_ms;
        if !self.paused {
            self.elapsed += self.tick_ms;
        }
    }
}

/// Fixed timestep accumulator.
/// Converts variable host frame times into a whole number of fixed ticks.
pub struct FixedTimestep {
    /// Tick length in milliseconds.
    tick_ms: f64,
    /// Accumulated time from variable frame deltas.
    accumulator: f64,
}

impl FixedTimestep {
    /// Most ticks run for a single frame; a long stall is dropped, not replayed.
    pub const MAX_STEPS: u32 = 10;

    pub fn new(tick_ms: f64) -> Self {
        Self {
            tick_ms,
            accumulator: 0.0,
        }
    }

    /// Add frame time (ms). Returns the number of fixed ticks to run.
    pub fn accumulate(&mut self, frame_ms: f64) -> u32 {
        if !(frame_ms.is_finite() && frame_ms > 0.0) {
            return 0;
        }
        self.accumulator += frame_ms;
        self.accumulator = self.accumulator.min(self.tick_ms * Self::MAX_STEPS as f64);
        let steps = (self.accumulator / self.tick_ms) as u32;
        self.accumulator -= steps as f64 * self.tick_ms;
        steps
    }

    pub fn tick_ms(&self) -> f64 {
        self.tick_ms
    }
}
