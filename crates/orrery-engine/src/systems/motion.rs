//! Orbital motion: places each body on its tilted circle from simulated time
//! and adds a fixed per-tick self-rotation.
//!
//! Call once per unpaused tick. Pause is the caller's job; nothing here reads
//! the pause flag.

use std::f64::consts::TAU;

use glam::Vec3;

use crate::api::types::Transform;
use crate::assets::catalog::CelestialBodyConfig;
use crate::assets::registry::CelestialBodyState;
use crate::core::time::SimulationClock;
use crate::error::TickError;
use crate::orbit::geometry::{flat_orbit_point, inclination_rotation};

/// Self-rotation added per tick, radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spin {
    pub x: f32,
    pub y: f32,
}

impl Spin {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Rotate `transform` by one tick, wrapping each angle into `[0, 2π)`.
    pub fn apply(self, transform: &mut Transform) {
        let tau = TAU as f32;
        transform.rotation.x = (transform.rotation.x + self.x).rem_euclid(tau);
        transform.rotation.y = (transform.rotation.y + self.y).rem_euclid(tau);
    }
}

/// Orbital angle in `[0, 2π)` after `elapsed` simulated ms at `speed` rad/ms.
pub fn orbital_angle(elapsed: f64, speed: f64) -> f64 {
    let angle = (elapsed * speed).rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative products.
    if angle >= TAU {
        0.0
    } else {
        angle
    }
}

/// World position of a body at `elapsed`.
pub fn orbit_position(config: &CelestialBodyConfig, elapsed: f64) -> Vec3 {
    let angle = orbital_angle(elapsed, config.speed);
    inclination_rotation(config.inclination) * flat_orbit_point(config.distance, angle)
}

/// Move every body to its position at `clock.elapsed()` and spin it.
///
/// All positions are computed first; if any is non-finite nothing is written.
pub fn advance(bodies: &mut [CelestialBodyState], clock: &SimulationClock, spin: Spin) -> Result<(), TickError> {
    let elapsed = clock.elapsed();
    let positions = bodies
        .iter()
        .map(|body| {
            let position = orbit_position(&body.config, elapsed);
            if position.is_finite() {
                Ok(position)
            } else {
                Err(TickError::NonFinitePosition { name: body.config.name.clone() })
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    for (body, position) in bodies.iter_mut().zip(positions) {
        body.transform.position = position;
        spin.apply(&mut body.transform);
    }
    Ok(())
}
