//! In-process scene backend: keeps objects in memory and answers ray queries
//! analytically. Used for native runs and as the test double.

use std::collections::HashSet;

use glam::Vec3;

use super::camera::PerspectiveCamera;
use super::ray::Ray;
use super::traits::{InfoPanel, RayHit, SceneRenderer};
use crate::api::types::{ObjectHandle, Transform};
use crate::error::AssetLoadError;

/// Geometry of a headless object.
#[derive(Debug, Clone, PartialEq)]
pub enum ObjectKind {
    Sphere { radius: f32, texture: Option<String> },
    LineLoop { points: Vec<Vec3> },
}

#[derive(Debug, Clone)]
pub struct SceneObject {
    pub kind: ObjectKind,
    pub transform: Transform,
    pub visible: bool,
    pub in_scene: bool,
}

/// Flat in-memory scene. Handles are indices into `objects`.
#[derive(Debug, Default)]
pub struct HeadlessScene {
    objects: Vec<SceneObject>,
    /// Texture paths that fail to load.
    missing_textures: HashSet<String>,
    frames_rendered: u64,
    last_eye: Option<Vec3>,
    viewport: (u32, u32),
}

impl HeadlessScene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `create_sphere` fail for this texture path.
    pub fn with_missing_texture(mut self, path: impl Into<String>) -> Self {
        self.missing_textures.insert(path.into());
        self
    }

    pub fn object(&self, handle: ObjectHandle) -> Option<&SceneObject> {
        self.objects.get(handle.0 as usize)
    }

    /// Number of objects added to the scene.
    pub fn scene_len(&self) -> usize {
        self.objects.iter().filter(|o| o.in_scene).count()
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    /// Camera position used by the most recent render.
    pub fn last_eye(&self) -> Option<Vec3> {
        self.last_eye
    }

    pub fn viewport(&self) -> (u32, u32) {
        self.viewport
    }

    fn push(&mut self, kind: ObjectKind) -> ObjectHandle {
        let handle = ObjectHandle(self.objects.len() as u32);
        self.objects.push(SceneObject {
            kind,
            transform: Transform::default(),
            visible: true,
            in_scene: false,
        });
        handle
    }
}

impl SceneRenderer for HeadlessScene {
    fn backend(&self) -> &'static str {
        "headless"
    }

    fn create_sphere(&mut self, radius: f32, texture: &str) -> Result<ObjectHandle, AssetLoadError> {
        if self.missing_textures.contains(texture) {
            return Err(AssetLoadError::Texture {
                path: texture.to_string(),
                reason: "not found".to_string(),
            });
        }
        Ok(self.push(ObjectKind::Sphere { radius, texture: Some(texture.to_string()) }))
    }

    fn create_fallback_sphere(&mut self, radius: f32) -> ObjectHandle {
        self.push(ObjectKind::Sphere { radius, texture: None })
    }

    fn create_line_loop(&mut self, points: &[Vec3]) -> ObjectHandle {
        self.push(ObjectKind::LineLoop { points: points.to_vec() })
    }

    fn add_to_scene(&mut self, handle: ObjectHandle) {
        if let Some(obj) = self.objects.get_mut(handle.0 as usize) {
            obj.in_scene = true;
        }
    }

    fn set_visible(&mut self, handle: ObjectHandle, visible: bool) {
        if let Some(obj) = self.objects.get_mut(handle.0 as usize) {
            obj.visible = visible;
        }
    }

    fn set_transform(&mut self, handle: ObjectHandle, transform: &Transform) {
        if let Some(obj) = self.objects.get_mut(handle.0 as usize) {
            obj.transform = *transform;
        }
    }

    fn intersect_ray(&self, ray: &Ray) -> Vec<RayHit> {
        let mut hits: Vec<RayHit> = self
            .objects
            .iter()
            .enumerate()
            .filter(|(_, o)| o.in_scene && o.visible)
            .filter_map(|(i, o)| match o.kind {
                ObjectKind::Sphere { radius, .. } => ray
                    .intersect_sphere(o.transform.position, radius)
                    .map(|distance| RayHit { handle: ObjectHandle(i as u32), distance }),
                ObjectKind::LineLoop { .. } => None,
            })
            .collect();
        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        hits
    }

    fn render(&mut self, camera: &PerspectiveCamera) {
        self.frames_rendered += 1;
        self.last_eye = Some(camera.position);
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.viewport = (width, height);
    }
}

/// Info panel that records what it was asked to display.
#[derive(Debug, Default)]
pub struct RecordingPanel {
    pub current: Option<(String, String)>,
    pub shown: Vec<String>,
    pub hide_calls: usize,
}

impl InfoPanel for RecordingPanel {
    fn show(&mut self, name: &str, info: &str) {
        self.current = Some((name.to_string(), info.to_string()));
        self.shown.push(name.to_string());
    }

    fn hide(&mut self) {
        self.current = None;
        self.hide_calls += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intersections_sorted_nearest_first() {
        let mut scene = HeadlessScene::new();
        let far = scene.create_fallback_sphere(1.0);
        let near = scene.create_fallback_sphere(1.0);
        scene.add_to_scene(far);
        scene.add_to_scene(near);
        scene.set_transform(far, &Transform::at(Vec3::new(0.0, 0.0, -20.0)));
        scene.set_transform(near, &Transform::at(Vec3::new(0.0, 0.0, -5.0)));

        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z).unwrap();
        let hits = scene.intersect_ray(&ray);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].handle, near);
        assert_eq!(hits[1].handle, far);
    }

    #[test]
    fn hidden_and_unadded_objects_are_not_hit() {
        let mut scene = HeadlessScene::new();
        let hidden = scene.create_fallback_sphere(1.0);
        let _never_added = scene.create_fallback_sphere(1.0);
        scene.add_to_scene(hidden);
        scene.set_visible(hidden, false);

        let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::NEG_Z).unwrap();
        assert!(scene.intersect_ray(&ray).is_empty());
    }

    #[test]
    fn missing_texture_fails() {
        let mut scene = HeadlessScene::new().with_missing_texture("mars.jpg");
        assert!(scene.create_sphere(1.0, "mars.jpg").is_err());
        assert!(scene.create_sphere(1.0, "earth.jpg").is_ok());
    }
}
