//! Orbit guide geometry: sampled circle in the XZ plane, tilted by inclination.
//!
//! The same rotation is used by the motion simulator, so a body always sits on
//! its drawn guide.

use std::f64::consts::TAU;

use glam::{Mat3, Vec3};

/// Rotation applied for an orbit inclination: `inclination` radians about +X.
#[inline]
pub fn inclination_rotation(inclination: f32) -> Mat3 {
    Mat3::from_rotation_x(inclination)
}

/// Point on an untilted orbit of radius `semi_axis` at `angle` radians.
#[inline]
pub fn flat_orbit_point(semi_axis: f32, angle: f64) -> Vec3 {
    let r = semi_axis as f64;
    Vec3::new((r * angle.cos()) as f32, 0.0, (r * angle.sin()) as f32)
}

/// Sample `sample_count` points evenly over `[0, 2π)` and tilt them.
///
/// Closed loop without a duplicate endpoint; deterministic for identical inputs.
pub fn generate_orbit_points(semi_axis: f32, sample_count: usize, inclination: f32) -> Vec<Vec3> {
    let tilt = inclination_rotation(inclination);
    (0..sample_count)
        .map(|i| {
            let angle = i as f64 / sample_count as f64 * TAU;
            tilt * flat_orbit_point(semi_axis, angle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_8;

    #[test]
    fn flat_orbit_lies_on_circle() {
        let points = generate_orbit_points(10.0, 100, 0.0);
        assert_eq!(points.len(), 100);
        for p in &points {
            assert!((p.x * p.x + p.z * p.z - 100.0).abs() < 1e-3, "off circle: {p}");
            assert_eq!(p.y, 0.0);
        }
    }

    #[test]
    fn no_duplicate_endpoint() {
        let points = generate_orbit_points(4.0, 8, 0.0);
        assert!((points[0] - Vec3::new(4.0, 0.0, 0.0)).length() < 1e-6);
        assert!((points[7] - points[0]).length() > 1.0);
    }

    #[test]
    fn deterministic() {
        let a = generate_orbit_points(6.0, 101, FRAC_PI_8);
        let b = generate_orbit_points(6.0, 101, FRAC_PI_8);
        assert_eq!(a, b);
    }

    #[test]
    fn inclination_tilts_about_x() {
        let points = generate_orbit_points(4.0, 4, FRAC_PI_8);
        // θ = 0 lies on the rotation axis and stays put.
        assert!((points[0] - Vec3::new(4.0, 0.0, 0.0)).length() < 1e-5);
        // θ = π/2 is (0, 0, 4) before the tilt.
        let expected = Vec3::new(0.0, -4.0 * FRAC_PI_8.sin(), 4.0 * FRAC_PI_8.cos());
        assert!((points[1] - expected).length() < 1e-5, "got {}", points[1]);
        for p in &points {
            assert!((p.length() - 4.0).abs() < 1e-4);
        }
    }

    #[test]
    fn zero_radius_collapses_to_origin() {
        let points = generate_orbit_points(0.0, 5, 0.3);
        assert!(points.iter().all(|p| p.length() == 0.0));
    }
}
