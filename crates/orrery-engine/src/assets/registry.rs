use std::collections::HashMap;

use glam::Vec3;

use crate::api::config::{OrreryConfig, SunConfig};
use crate::api::types::{BodyId, ObjectHandle, Transform};
use crate::assets::catalog::CelestialBodyConfig;
use crate::error::ConfigError;
use crate::orbit::geometry::{flat_orbit_point, generate_orbit_points, inclination_rotation};
use crate::orbit::path::OrbitPath;
use crate::renderer::traits::SceneRenderer;

/// Live state of one orbiting body.
#[derive(Debug, Clone, PartialEq)]
pub struct CelestialBodyState {
    pub id: BodyId,
    pub config: CelestialBodyConfig,
    /// Written every unpaused tick by the motion simulator.
    pub transform: Transform,
    handle: ObjectHandle,
    /// False when the texture failed and a fallback sphere stands in.
    pub textured: bool,
}

impl CelestialBodyState {
    /// Scene object for this body. Set once at load.
    pub fn handle(&self) -> ObjectHandle {
        self.handle
    }

    pub fn position(&self) -> Vec3 {
        self.transform.position
    }
}

/// The central sphere. Spins, never orbits, never picked.
#[derive(Debug, Clone, PartialEq)]
pub struct SunState {
    pub transform: Transform,
    pub radius: f32,
    handle: ObjectHandle,
}

impl SunState {
    /// Create the sun sphere at the origin and add it to the scene.
    pub fn create<R: SceneRenderer + ?Sized>(config: &SunConfig, scene: &mut R) -> Self {
        let handle = sphere_or_fallback(scene, "sun", config.radius, &config.texture).0;
        scene.add_to_scene(handle);
        Self {
            transform: Transform::default(),
            radius: config.radius,
            handle,
        }
    }

    pub fn handle(&self) -> ObjectHandle {
        self.handle
    }
}

/// Owns every body state and its orbit guide.
/// Bodies keep catalog order; `BodyId` is the index.
#[derive(Debug, Default)]
pub struct BodyRegistry {
    bodies: Vec<CelestialBodyState>,
    by_handle: HashMap<ObjectHandle, BodyId>,
    orbits: Vec<OrbitPath>,
}

impl BodyRegistry {
    /// Registry with no bodies. Ticks run against it until the catalog arrives.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Validate `configs`, then create one sphere and one orbit guide per body.
    ///
    /// Every entry is checked before the first scene call, so a bad entry
    /// leaves the scene untouched. A texture that fails to load is replaced by
    /// a fallback sphere.
    pub fn load<R: SceneRenderer + ?Sized>(
        configs: &[CelestialBodyConfig],
        settings: &OrreryConfig,
        orbits_visible: bool,
        scene: &mut R,
    ) -> Result<Self, ConfigError> {
        if settings.orbit_samples < 3 {
            return Err(ConfigError::SampleCount(settings.orbit_samples));
        }
        for (index, config) in configs.iter().enumerate() {
            config.validate(index)?;
        }

        let mut registry = Self {
            bodies: Vec::with_capacity(configs.len()),
            by_handle: HashMap::with_capacity(configs.len()),
            orbits: Vec::with_capacity(configs.len()),
        };

        for (index, config) in configs.iter().enumerate() {
            let id = BodyId(index as u32);
            let (handle, textured) = sphere_or_fallback(scene, &config.name, config.radius, &config.texture);
            let position = inclination_rotation(config.inclination) * flat_orbit_point(config.distance, 0.0);
            let transform = Transform::at(position);
            scene.set_transform(handle, &transform);
            scene.add_to_scene(handle);

            let points = generate_orbit_points(config.distance, settings.orbit_samples, config.inclination);
            let line = scene.create_line_loop(&points);
            scene.set_visible(line, orbits_visible);
            scene.add_to_scene(line);

            registry.by_handle.insert(handle, id);
            registry.orbits.push(OrbitPath::new(id, points, line, orbits_visible));
            registry.bodies.push(CelestialBodyState {
                id,
                config: config.clone(),
                transform,
                handle,
                textured,
            });
        }

        log::info!("Loaded {} bodies", registry.bodies.len());
        Ok(registry)
    }

    pub fn get(&self, id: BodyId) -> Option<&CelestialBodyState> {
        self.bodies.get(id.0 as usize)
    }

    /// Resolve a picked scene object to its body. Orbit lines and the sun
    /// resolve to nothing.
    pub fn find_by_visual_handle(&self, handle: ObjectHandle) -> Option<&CelestialBodyState> {
        self.by_handle.get(&handle).and_then(|id| self.get(*id))
    }

    /// Look up a body by display name.
    pub fn find_by_name(&self, name: &str) -> Option<&CelestialBodyState> {
        self.bodies.iter().find(|b| b.config.name == name)
    }

    pub fn bodies(&self) -> &[CelestialBodyState] {
        &self.bodies
    }

    pub fn bodies_mut(&mut self) -> &mut [CelestialBodyState] {
        &mut self.bodies
    }

    pub fn orbits(&self) -> &[OrbitPath] {
        &self.orbits
    }

    pub fn orbits_mut(&mut self) -> &mut [OrbitPath] {
        &mut self.orbits
    }

    /// Push every body transform to the scene backend.
    pub fn sync_transforms<R: SceneRenderer + ?Sized>(&self, scene: &mut R) {
        for body in &self.bodies {
            scene.set_transform(body.handle, &body.transform);
        }
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}

fn sphere_or_fallback<R: SceneRenderer + ?Sized>(
    scene: &mut R,
    name: &str,
    radius: f32,
    texture: &str,
) -> (ObjectHandle, bool) {
    match scene.create_sphere(radius, texture) {
        Ok(handle) => (handle, true),
        Err(e) => {
            log::warn!("{name}: {e}; using fallback sphere");
            (scene.create_fallback_sphere(radius), false)
        }
    }
}
