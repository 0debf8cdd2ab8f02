use glam::Vec3;

use crate::api::config::OrreryConfig;
use crate::api::types::OrreryEvent;
use crate::assets::registry::{BodyRegistry, SunState};
use crate::core::time::SimulationClock;
use crate::renderer::camera::PerspectiveCamera;
use crate::renderer::controls::OrbitControls;

/// Everything the loop mutates, in one place.
/// Systems borrow the parts they need; nothing lives in globals.
pub struct SceneState {
    pub clock: SimulationClock,
    pub camera: PerspectiveCamera,
    pub controls: OrbitControls,
    pub registry: BodyRegistry,
    pub sun: Option<SunState>,
    /// Shared orbit guide visibility, also applied to guides loaded later.
    pub orbits_visible: bool,
    events: Vec<OrreryEvent>,
}

impl SceneState {
    /// Default viewport until the host reports its size.
    const INITIAL_VIEWPORT: (f32, f32) = (1280.0, 720.0);

    pub fn new(config: &OrreryConfig) -> Self {
        let (w, h) = Self::INITIAL_VIEWPORT;
        let mut camera = PerspectiveCamera::new(config.camera_fov_deg, w, h, config.camera_near, config.camera_far)
            .with_position(Vec3::from_array(config.camera_position));
        camera.look_at(Vec3::ZERO);

        Self {
            clock: SimulationClock::new(config.tick_ms),
            camera,
            controls: OrbitControls::new(config.controls_min_distance, config.controls_max_distance),
            registry: BodyRegistry::empty(),
            sun: None,
            orbits_visible: true,
            events: Vec::with_capacity(8),
        }
    }

    /// Queue a presentation event for the host.
    pub fn emit(&mut self, event: OrreryEvent) {
        log::debug!("event: {event:?}");
        self.events.push(event);
    }

    pub fn events(&self) -> &[OrreryEvent] {
        &self.events
    }

    /// Take all queued events.
    pub fn drain_events(&mut self) -> Vec<OrreryEvent> {
        std::mem::take(&mut self.events)
    }
}
