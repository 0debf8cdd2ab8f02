//! Collaborator traits for the 3D scene backend and the info panel.
//!
//! The orrery never rasterizes anything itself. A backend (the browser bridge,
//! or the in-process `HeadlessScene`) owns meshes and lines and answers ray
//! queries; the orrery only drives transforms, visibility and the camera.

use glam::Vec3;

use super::camera::PerspectiveCamera;
use super::ray::Ray;
use crate::api::types::{ObjectHandle, Transform};
use crate::error::AssetLoadError;

/// One object hit by a picking ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub handle: ObjectHandle,
    /// Distance along the ray.
    pub distance: f32,
}

/// Scene backend contract.
///
/// # Example Implementation
///
/// ```ignore
/// struct ThreeScene { /* JS bindings */ }
///
/// impl SceneRenderer for ThreeScene {
///     fn backend(&self) -> &'static str { "three" }
///     fn create_sphere(&mut self, radius: f32, texture: &str) -> Result<ObjectHandle, AssetLoadError> {
///         // new THREE.Mesh(new SphereGeometry(radius), material with texture)
///     }
///     // ...
/// }
/// ```
pub trait SceneRenderer {
    /// Backend identifier (e.g., "headless", "webgl").
    fn backend(&self) -> &'static str;

    /// Create a textured sphere. Fails when the texture cannot be loaded.
    fn create_sphere(&mut self, radius: f32, texture: &str) -> Result<ObjectHandle, AssetLoadError>;

    /// Create an untextured sphere used when the texture is unavailable.
    fn create_fallback_sphere(&mut self, radius: f32) -> ObjectHandle;

    /// Create a closed polyline through `points`.
    fn create_line_loop(&mut self, points: &[Vec3]) -> ObjectHandle;

    /// Make a created object part of the rendered scene.
    fn add_to_scene(&mut self, handle: ObjectHandle);

    fn set_visible(&mut self, handle: ObjectHandle, visible: bool);

    fn set_transform(&mut self, handle: ObjectHandle, transform: &Transform);

    /// Visible objects intersected by `ray`, nearest first.
    fn intersect_ray(&self, ray: &Ray) -> Vec<RayHit>;

    /// Draw the scene from `camera`.
    fn render(&mut self, camera: &PerspectiveCamera);

    /// Handle viewport resize.
    fn resize(&mut self, width: u32, height: u32);
}

/// Info panel contract: shows a body's name and description.
pub trait InfoPanel {
    fn show(&mut self, name: &str, info: &str);
    fn hide(&mut self);
}
