use crate::core::time::SimulationClock;

/// Two-state gate over the simulation clock. Holds no presentation state;
/// the host reads `is_paused` (or the emitted event) to update its UI.
pub struct PauseController<'a> {
    clock: &'a mut SimulationClock,
}

impl<'a> PauseController<'a> {
    pub fn new(clock: &'a mut SimulationClock) -> Self {
        Self { clock }
    }

    /// Flip the pause flag. Returns the new value.
    pub fn toggle(&mut self) -> bool {
        let paused = !self.clock.is_paused();
        self.clock.set_paused(paused);
        paused
    }

    /// Pause unconditionally. Idempotent.
    pub fn force_pause(&mut self) {
        self.clock.set_paused(true);
    }

    pub fn is_paused(&self) -> bool {
        self.clock.is_paused()
    }
}
