// extensions/tween.rs
//
// Point tween polled against an animation timeline.
// No callbacks: the owner asks for the value at a given time and checks completion.
//
// Usage:
//   let tween = Tween::new(from, to, now, 1000.0, Easing::QuadInOut);
//   camera.position = tween.value_at(now + 250.0);
//   if tween.is_complete_at(now + 1000.0) { ... }

use glam::Vec3;

use super::easing::{ease_vec3, Easing};

/// An eased interpolation between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub from: Vec3,
    pub to: Vec3,
    /// Timeline value (ms) at which the tween started.
    pub started_at: f64,
    /// Duration in ms. Zero completes immediately.
    pub duration: f64,
    pub easing: Easing,
}

impl Tween {
    pub fn new(from: Vec3, to: Vec3, started_at: f64, duration: f64, easing: Easing) -> Self {
        Self {
            from,
            to,
            started_at,
            duration: duration.max(0.0),
            easing,
        }
    }

    /// Normalized progress [0, 1] at timeline value `now`.
    pub fn progress_at(&self, now: f64) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            ((now - self.started_at) / self.duration).clamp(0.0, 1.0) as f32
        }
    }

    /// Whether the tween has reached its end at `now`.
    pub fn is_complete_at(&self, now: f64) -> bool {
        self.progress_at(now) >= 1.0
    }

    /// Interpolated point at `now`. Returns `to` bit-for-bit once complete.
    pub fn value_at(&self, now: f64) -> Vec3 {
        let t = self.progress_at(now);
        if t >= 1.0 {
            self.to
        } else {
            ease_vec3(self.from, self.to, t, self.easing)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tween_position() {
        let tween = Tween::new(Vec3::ZERO, Vec3::new(100.0, 0.0, 0.0), 0.0, 1000.0, Easing::Linear);

        let p = tween.value_at(500.0);
        assert!((p.x - 50.0).abs() < 0.01);
        assert!(!tween.is_complete_at(500.0));

        let p = tween.value_at(1000.0);
        assert_eq!(p, Vec3::new(100.0, 0.0, 0.0));
        assert!(tween.is_complete_at(1000.0));
    }

    #[test]
    fn before_start_holds_origin() {
        let tween = Tween::new(Vec3::ONE, Vec3::ZERO, 200.0, 100.0, Easing::QuadInOut);
        assert_eq!(tween.value_at(0.0), Vec3::ONE);
        assert_eq!(tween.progress_at(150.0), 0.0);
    }

    #[test]
    fn end_value_is_exact() {
        // 0.1 + (0.7 - 0.1) * 1.0 is not 0.7 in floating point; completion must not drift.
        let to = Vec3::new(0.7, 13.3, -2.9);
        let tween = Tween::new(Vec3::new(0.1, 0.2, 0.3), to, 0.0, 1000.0, Easing::QuadInOut);
        assert_eq!(tween.value_at(1000.0), to);
        assert_eq!(tween.value_at(5000.0), to);
    }

    #[test]
    fn zero_duration_completes_immediately() {
        let tween = Tween::new(Vec3::ZERO, Vec3::X, 10.0, 0.0, Easing::Linear);
        assert!(tween.is_complete_at(10.0));
        assert_eq!(tween.value_at(10.0), Vec3::X);
    }
}
