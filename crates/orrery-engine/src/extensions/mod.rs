// extensions/mod.rs
//
// Interpolation building blocks used by the camera focus controller.
// Decoupled from the registry and the scene.

pub mod easing;
pub mod tween;

pub use easing::{Easing, lerp_vec3, ease_vec3};
pub use tween::Tween;
