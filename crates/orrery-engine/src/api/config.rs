use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::extensions::easing::Easing;

/// Central sphere settings. The sun spins but is never pickable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SunConfig {
    pub radius: f32,
    pub texture: String,
}

impl Default for SunConfig {
    fn default() -> Self {
        Self {
            radius: 1.0,
            texture: "./assets/sun.jpg".to_string(),
        }
    }
}

/// Orrery configuration. Loaded from the optional `"settings"` object of the
/// body catalog; every field falls back to its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrreryConfig {
    /// Simulated milliseconds added to the clock per tick (default: 1000/60).
    pub tick_ms: f64,
    /// Points per orbit guide loop (default: 100).
    pub orbit_samples: usize,
    /// Self-rotation about X per tick, radians (default: 0.001).
    pub spin_x: f32,
    /// Self-rotation about Y per tick, radians (default: 0.003).
    pub spin_y: f32,
    /// Camera tween duration in animation milliseconds (default: 1000).
    pub focus_duration_ms: f64,
    /// Delay between arriving at a body and showing its info (default: 500).
    pub info_delay_ms: f64,
    /// Viewing distance from a focused body, in multiples of its radius.
    pub focus_distance_factor: f32,
    /// Lower bound for the viewing distance.
    pub focus_min_distance: f32,
    /// Easing used by focus and return tweens (default: QuadInOut).
    pub focus_easing: Easing,
    /// Initial camera position.
    pub camera_position: [f32; 3],
    /// Vertical field of view in degrees (default: 45).
    pub camera_fov_deg: f32,
    pub camera_near: f32,
    pub camera_far: f32,
    /// Free camera control zoom limits.
    pub controls_min_distance: f32,
    pub controls_max_distance: f32,
    /// Pick on pointer hover as well as on click.
    pub pick_on_hover: bool,
    pub sun: SunConfig,
}

impl Default for OrreryConfig {
    fn default() -> Self {
        Self {
            tick_ms: 1000.0 / 60.0,
            orbit_samples: 100,
            spin_x: 0.001,
            spin_y: 0.003,
            focus_duration_ms: 1000.0,
            info_delay_ms: 500.0,
            focus_distance_factor: 8.0,
            focus_min_distance: 0.5,
            focus_easing: Easing::QuadInOut,
            camera_position: [0.0, 20.0, 55.0],
            camera_fov_deg: 45.0,
            camera_near: 0.1,
            camera_far: 1000.0,
            controls_min_distance: 1.0,
            controls_max_distance: 100.0,
            pick_on_hover: false,
            sun: SunConfig::default(),
        }
    }
}

impl OrreryConfig {
    /// Reject settings that would stall the clock or break geometry.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.orbit_samples < 3 {
            return Err(ConfigError::SampleCount(self.orbit_samples));
        }
        if !(self.tick_ms.is_finite() && self.tick_ms > 0.0) {
            return Err(invalid("tick_ms", format!("must be positive, got {}", self.tick_ms)));
        }
        if !(self.focus_duration_ms.is_finite() && self.focus_duration_ms >= 0.0) {
            return Err(invalid("focus_duration_ms", format!("must be >= 0, got {}", self.focus_duration_ms)));
        }
        if !(self.info_delay_ms.is_finite() && self.info_delay_ms >= 0.0) {
            return Err(invalid("info_delay_ms", format!("must be >= 0, got {}", self.info_delay_ms)));
        }
        if !(self.camera_fov_deg > 0.0 && self.camera_fov_deg < 180.0) {
            return Err(invalid("camera_fov_deg", format!("must be in (0, 180), got {}", self.camera_fov_deg)));
        }
        if !(self.camera_near > 0.0 && self.camera_far > self.camera_near) {
            return Err(invalid("camera_far", "must exceed a positive camera_near".to_string()));
        }
        if self.controls_min_distance > self.controls_max_distance {
            return Err(invalid("controls_min_distance", "exceeds controls_max_distance".to_string()));
        }
        if !(self.sun.radius > 0.0) {
            return Err(invalid("sun.radius", format!("must be positive, got {}", self.sun.radius)));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: String) -> ConfigError {
    ConfigError::InvalidSetting { field, reason }
}
