//! Free camera control: orbit the look target by dragging, zoom with the wheel.

use std::f32::consts::PI;

use glam::{Vec2, Vec3};

use super::camera::PerspectiveCamera;

/// Orbit-style camera controls around `camera.target`.
#[derive(Debug, Clone)]
pub struct OrbitControls {
    /// Disabled while a focus session owns the camera.
    pub enabled: bool,
    pub min_distance: f32,
    pub max_distance: f32,
    /// Radians per dragged pixel.
    pub rotate_speed: f32,
    /// Multiplicative zoom per wheel notch.
    pub zoom_step: f32,
}

impl OrbitControls {
    /// Keeps the polar angle away from the poles.
    const POLE_EPSILON: f32 = 1e-3;
    /// Wheel delta units per notch (browser pixel mode).
    const WHEEL_NOTCH: f32 = 100.0;

    pub fn new(min_distance: f32, max_distance: f32) -> Self {
        Self {
            enabled: true,
            min_distance,
            max_distance,
            rotate_speed: 0.005,
            zoom_step: 1.1,
        }
    }

    /// Orbit the camera by a pointer drag delta (pixels). Returns whether the camera moved.
    pub fn rotate(&self, camera: &mut PerspectiveCamera, delta: Vec2) -> bool {
        if !self.enabled {
            return false;
        }
        let offset = camera.position - camera.target;
        let radius = offset.length();
        if radius <= f32::EPSILON {
            return false;
        }
        let theta = offset.x.atan2(offset.z) - delta.x * self.rotate_speed;
        let phi = ((offset.y / radius).clamp(-1.0, 1.0).acos() - delta.y * self.rotate_speed)
            .clamp(Self::POLE_EPSILON, PI - Self::POLE_EPSILON);
        camera.position = camera.target + spherical_to_offset(radius, theta, phi);
        true
    }

    /// Zoom by a wheel delta. Positive delta zooms out. Returns whether the camera moved.
    pub fn zoom(&self, camera: &mut PerspectiveCamera, wheel_delta: f32) -> bool {
        if !self.enabled || wheel_delta == 0.0 || !wheel_delta.is_finite() {
            return false;
        }
        let scale = self.zoom_step.powf(wheel_delta / Self::WHEEL_NOTCH);
        self.set_distance(camera, camera.distance_to_target() * scale)
    }

    /// Pull the camera back inside the distance limits.
    pub fn clamp(&self, camera: &mut PerspectiveCamera) -> bool {
        self.set_distance(camera, camera.distance_to_target())
    }

    fn set_distance(&self, camera: &mut PerspectiveCamera, distance: f32) -> bool {
        let Some(dir) = (camera.position - camera.target).try_normalize() else {
            return false;
        };
        let distance = distance.clamp(self.min_distance, self.max_distance);
        let new_pos = camera.target + dir * distance;
        let moved = new_pos != camera.position;
        camera.position = new_pos;
        moved
    }
}

fn spherical_to_offset(radius: f32, theta: f32, phi: f32) -> Vec3 {
    Vec3::new(
        radius * phi.sin() * theta.sin(),
        radius * phi.cos(),
        radius * phi.sin() * theta.cos(),
    )
}
