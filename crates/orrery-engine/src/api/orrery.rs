use glam::{Vec2, Vec3};

use crate::api::config::OrreryConfig;
use crate::api::types::OrreryEvent;
use crate::assets::catalog::{BodyCatalog, CelestialBodyConfig};
use crate::assets::registry::{BodyRegistry, SunState};
use crate::core::scene::SceneState;
use crate::core::time::SimulationClock;
use crate::error::ConfigError;
use crate::input::queue::InputEvent;
use crate::orbit::path::{apply_visibility, toggle_visibility};
use crate::renderer::camera::PerspectiveCamera;
use crate::renderer::traits::{InfoPanel, SceneRenderer};
use crate::systems::focus::{FocusController, FocusSettings};
use crate::systems::motion::{advance, Spin};
use crate::systems::pause::PauseController;
use crate::systems::picking::pick;

/// Screen-pixel movement before a press becomes a camera drag instead of a pick.
const DRAG_THRESHOLD: f32 = 5.0;

#[derive(Debug, Default, Clone, Copy)]
struct PointerState {
    down_at: Option<Vec2>,
    last: Vec2,
    dragged: bool,
}

/// The orrery: owns the scene state, the focus controller and both
/// collaborators, and runs one loop tick per `frame`.
pub struct Orrery<R: SceneRenderer, P: InfoPanel> {
    config: OrreryConfig,
    state: SceneState,
    focus: FocusController,
    spin: Spin,
    scene: R,
    panel: P,
    catalog_loaded: bool,
    pointer: PointerState,
}

impl<R: SceneRenderer, P: InfoPanel> Orrery<R, P> {
    /// Build the scene with the sun and no bodies. Bodies arrive later through
    /// `load_catalog` or `load_bodies`; ticks before that are fine.
    pub fn new(config: OrreryConfig, mut scene: R, panel: P) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut state = SceneState::new(&config);
        state.sun = Some(SunState::create(&config.sun, &mut scene));
        state.controls.clamp(&mut state.camera);
        log::info!("Orrery started on {} backend", scene.backend());

        Ok(Self {
            focus: FocusController::new(FocusSettings::from_config(&config)),
            spin: Spin::new(config.spin_x, config.spin_y),
            config,
            state,
            scene,
            panel,
            catalog_loaded: false,
            pointer: PointerState::default(),
        })
    }

    /// Apply a parsed catalog: its settings (if any), then its bodies. The
    /// whole catalog is validated first; on error the configuration is unchanged.
    pub fn load_catalog(&mut self, catalog: BodyCatalog) -> Result<usize, ConfigError> {
        if self.catalog_loaded {
            return Err(ConfigError::AlreadyLoaded);
        }
        catalog.validate()?;
        if let Some(settings) = catalog.settings {
            self.apply_settings(settings)?;
        }
        self.load_bodies(&catalog.bodies)
    }

    /// Parse a JSON catalog and load it.
    pub fn load_catalog_json(&mut self, json: &str) -> Result<usize, ConfigError> {
        let catalog = BodyCatalog::from_json(json)?;
        self.load_catalog(catalog)
    }

    /// Register `configs` with the scene. Consumed once: a second call fails
    /// with `AlreadyLoaded`. On error nothing is added to the scene.
    pub fn load_bodies(&mut self, configs: &[CelestialBodyConfig]) -> Result<usize, ConfigError> {
        if self.catalog_loaded {
            return Err(ConfigError::AlreadyLoaded);
        }
        let registry = BodyRegistry::load(configs, &self.config, self.state.orbits_visible, &mut self.scene)?;
        let count = registry.len();
        self.state.registry = registry;
        self.catalog_loaded = true;
        Ok(count)
    }

    /// Catalog settings replace the running configuration. The sun and the
    /// current camera pose stay as they are.
    fn apply_settings(&mut self, settings: OrreryConfig) -> Result<(), ConfigError> {
        settings.validate()?;
        let clock = &self.state.clock;
        let mut new_clock = SimulationClock::new(settings.tick_ms).with_elapsed(clock.elapsed());
        new_clock.set_paused(clock.is_paused());
        self.state.clock = new_clock;

        let camera = &mut self.state.camera;
        camera.fov_y = settings.camera_fov_deg.to_radians();
        camera.near = settings.camera_near;
        camera.far = settings.camera_far;
        self.state.controls.min_distance = settings.controls_min_distance;
        self.state.controls.max_distance = settings.controls_max_distance;
        self.state.controls.clamp(&mut self.state.camera);

        self.focus = FocusController::new(FocusSettings::from_config(&settings));
        self.spin = Spin::new(settings.spin_x, settings.spin_y);
        self.config = settings;
        log::debug!("Catalog settings applied");
        Ok(())
    }

    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerDown { x, y } => {
                let pos = Vec2::new(x, y);
                self.pointer = PointerState { down_at: Some(pos), last: pos, dragged: false };
            }
            InputEvent::PointerMove { x, y } => {
                let pos = Vec2::new(x, y);
                if let Some(start) = self.pointer.down_at {
                    if pos.distance(start) > DRAG_THRESHOLD {
                        self.pointer.dragged = true;
                    }
                    if self.pointer.dragged {
                        let delta = pos - self.pointer.last;
                        self.state.controls.rotate(&mut self.state.camera, delta);
                    }
                } else if self.config.pick_on_hover {
                    self.try_focus(x, y);
                }
                self.pointer.last = pos;
            }
            InputEvent::PointerUp { x, y } => {
                if self.pointer.down_at.is_some() && !self.pointer.dragged {
                    self.try_focus(x, y);
                }
                self.pointer = PointerState { last: Vec2::new(x, y), ..PointerState::default() };
            }
            InputEvent::Wheel { delta } => {
                self.state.controls.zoom(&mut self.state.camera, delta);
            }
            InputEvent::Resize { width, height } => self.resize(width, height),
            InputEvent::TogglePause => {
                self.toggle_pause();
            }
            InputEvent::ToggleOrbits => {
                self.toggle_orbits();
            }
            InputEvent::Dismiss => {
                self.dismiss();
            }
        }
    }

    /// Pick at a screen point and start focusing the hit body.
    /// Returns whether a session started.
    pub fn try_focus(&mut self, screen_x: f32, screen_y: f32) -> bool {
        if self.focus.is_active() {
            return false;
        }
        let viewport = self.state.camera.viewport;
        let hit = pick(
            screen_x,
            screen_y,
            viewport.x,
            viewport.y,
            &self.state.camera,
            &self.state.registry,
            &self.scene,
        )
        .map(|body| body.id);

        let Some(body) = hit else {
            return false;
        };
        match self.focus.begin(body, &mut self.state) {
            Ok(started) => started,
            Err(e) => {
                log::error!("focus failed: {e}");
                false
            }
        }
    }

    /// Pause button. During a focus session the clock stays paused and the
    /// toggle decides what happens when the session ends.
    pub fn toggle_pause(&mut self) -> bool {
        let paused = match self.focus.toggle_resume_paused() {
            Some(resume_paused) => resume_paused,
            None => PauseController::new(&mut self.state.clock).toggle(),
        };
        log::info!("Animation {}", if paused { "paused" } else { "resumed" });
        self.state.emit(OrreryEvent::PauseChanged { paused });
        paused
    }

    /// Orbit guides button. Returns the new shared visibility.
    pub fn toggle_orbits(&mut self) -> bool {
        let visible = toggle_visibility(self.state.registry.orbits_mut()).unwrap_or(!self.state.orbits_visible);
        self.state.orbits_visible = visible;
        apply_visibility(self.state.registry.orbits(), &mut self.scene);
        self.state.emit(OrreryEvent::OrbitsVisibilityChanged { visible });
        visible
    }

    /// Info panel close button. Returns whether the camera started back.
    pub fn dismiss(&mut self) -> bool {
        self.focus.dismiss(&mut self.state, &mut self.panel)
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        if !(width > 0.0 && height > 0.0) {
            return;
        }
        self.state.camera.resize(width, height);
        self.scene.resize(width as u32, height as u32);
    }

    /// Advance one tick: focus update, then motion if not paused.
    /// Failures are logged and leave that part of the state as it was.
    pub fn step(&mut self) {
        self.state.clock.tick();

        if let Err(e) = self.focus.update(&mut self.state, &mut self.panel) {
            log::error!("focus update failed: {e}");
        }

        if !self.state.clock.is_paused() {
            if let Err(e) = advance(self.state.registry.bodies_mut(), &self.state.clock, self.spin) {
                log::error!("motion update failed: {e}");
            }
            if let Some(sun) = self.state.sun.as_mut() {
                self.spin.apply(&mut sun.transform);
            }
        }
    }

    /// Push transforms to the backend and draw.
    pub fn render(&mut self) {
        self.state.registry.sync_transforms(&mut self.scene);
        if let Some(sun) = &self.state.sun {
            self.scene.set_transform(sun.handle(), &sun.transform);
        }
        self.scene.render(&self.state.camera);
    }

    /// One full loop tick.
    ///
    /// Events accumulate until `drain_events` is called; hosts driving this
    /// directly must drain once per frame.
    pub fn frame(&mut self) {
        self.step();
        self.render();
    }

    pub fn config(&self) -> &OrreryConfig {
        &self.config
    }

    pub fn state(&self) -> &SceneState {
        &self.state
    }

    pub fn registry(&self) -> &BodyRegistry {
        &self.state.registry
    }

    pub fn camera(&self) -> &PerspectiveCamera {
        &self.state.camera
    }

    pub fn camera_position(&self) -> Vec3 {
        self.state.camera.position
    }

    pub fn focus(&self) -> &FocusController {
        &self.focus
    }

    pub fn is_paused(&self) -> bool {
        self.state.clock.is_paused()
    }

    pub fn orbits_visible(&self) -> bool {
        self.state.orbits_visible
    }

    pub fn is_loaded(&self) -> bool {
        self.catalog_loaded
    }

    pub fn scene(&self) -> &R {
        &self.scene
    }

    pub fn panel(&self) -> &P {
        &self.panel
    }

    pub fn drain_events(&mut self) -> Vec<OrreryEvent> {
        self.state.drain_events()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::BodyId;
    use crate::renderer::headless::{HeadlessScene, RecordingPanel};
    use crate::systems::focus::FocusPhase;

    type TestOrrery = Orrery<HeadlessScene, RecordingPanel>;

    fn body(name: &str, distance: f32, speed: f64) -> CelestialBodyConfig {
        CelestialBodyConfig {
            name: name.to_string(),
            radius: 0.5,
            distance,
            speed,
            inclination: 0.0,
            info: format!("About {name}"),
            texture: format!("{name}.jpg"),
        }
    }

    fn orrery() -> TestOrrery {
        let mut orrery = Orrery::new(OrreryConfig::default(), HeadlessScene::new(), RecordingPanel::default()).unwrap();
        orrery.resize(800.0, 600.0);
        orrery
    }

    fn screen_of(orrery: &TestOrrery, world: Vec3) -> (f32, f32) {
        let cam = orrery.camera();
        let ndc = cam.view_projection().project_point3(world);
        ((ndc.x + 1.0) * 0.5 * cam.viewport.x, (1.0 - ndc.y) * 0.5 * cam.viewport.y)
    }

    fn click(orrery: &mut TestOrrery, x: f32, y: f32) {
        orrery.handle_input(InputEvent::PointerDown { x, y });
        orrery.handle_input(InputEvent::PointerUp { x, y });
    }

    fn frames(orrery: &mut TestOrrery, n: usize) {
        for _ in 0..n {
            orrery.frame();
        }
    }

    #[test]
    fn ticks_without_bodies() {
        let mut o = orrery();
        frames(&mut o, 10);
        assert!(o.registry().is_empty());
        assert_eq!(o.scene().frames_rendered(), 10);
    }

    #[test]
    fn earth_reaches_expected_position() {
        let config = OrreryConfig { tick_ms: 100.0, ..OrreryConfig::default() };
        let mut o = Orrery::new(config, HeadlessScene::new(), RecordingPanel::default()).unwrap();
        o.load_bodies(&[body("Earth", 8.0, 0.0006)]).unwrap();
        frames(&mut o, 10);

        assert!((o.state().clock.elapsed() - 1000.0).abs() < 1e-9);
        let pos = o.registry().bodies()[0].position();
        assert!((pos - Vec3::new(6.603, 0.0, 4.517)).length() < 1e-2, "{pos}");
        let handle = o.registry().bodies()[0].handle();
        assert_eq!(o.scene().object(handle).unwrap().transform.position, pos);
    }

    #[test]
    fn pause_freezes_motion() {
        let mut o = orrery();
        o.load_bodies(&[body("Earth", 8.0, 0.0006)]).unwrap();
        frames(&mut o, 5);

        assert!(o.toggle_pause());
        let before = o.registry().bodies()[0].position();
        frames(&mut o, 1);
        assert_eq!(o.registry().bodies()[0].position(), before);

        assert!(!o.toggle_pause());
        frames(&mut o, 1);
        assert_ne!(o.registry().bodies()[0].position(), before);
        assert_eq!(
            o.drain_events(),
            vec![OrreryEvent::PauseChanged { paused: true }, OrreryEvent::PauseChanged { paused: false }]
        );
    }

    #[test]
    fn orbit_toggle_reaches_backend() {
        let mut o = orrery();
        o.load_bodies(&[body("A", 4.0, 0.001), body("B", 6.0, 0.001), body("C", 8.0, 0.001)])
            .unwrap();
        assert!(!o.toggle_orbits());
        for path in o.registry().orbits() {
            assert!(!path.visible);
            assert!(!o.scene().object(path.handle()).unwrap().visible);
        }
        assert!(o.toggle_orbits());
        assert!(o.registry().orbits().iter().all(|p| p.visible));
    }

    #[test]
    fn orbit_toggle_before_load_applies_to_loaded_guides() {
        let mut o = orrery();
        assert!(!o.toggle_orbits());
        o.load_bodies(&[body("A", 4.0, 0.001)]).unwrap();
        assert!(!o.registry().orbits()[0].visible);
    }

    #[test]
    fn click_focuses_and_dismiss_restores_camera() {
        let mut o = orrery();
        o.load_bodies(&[body("Earth", 8.0, 0.0)]).unwrap();
        let home = o.camera_position();
        let (x, y) = screen_of(&o, o.registry().bodies()[0].position());

        click(&mut o, x, y);
        assert_eq!(o.focus().phase(), FocusPhase::FocusingIn);
        assert!(o.is_paused());

        frames(&mut o, 100);
        assert_eq!(o.focus().phase(), FocusPhase::Focused);
        assert_eq!(o.panel().shown, vec!["Earth".to_string()]);

        o.handle_input(InputEvent::Dismiss);
        frames(&mut o, 100);
        assert_eq!(o.focus().phase(), FocusPhase::Idle);
        assert!((o.camera_position() - home).length() < 1e-5);
        assert!(!o.is_paused());
        assert!(o.state().controls.enabled);

        let events = o.drain_events();
        assert_eq!(events.first(), Some(&OrreryEvent::FocusStarted { body: BodyId(0) }));
        assert_eq!(events.last(), Some(&OrreryEvent::FocusEnded));
    }

    #[test]
    fn drag_is_not_a_pick() {
        let mut o = orrery();
        o.load_bodies(&[body("Earth", 8.0, 0.0)]).unwrap();
        let home = o.camera_position();
        let (x, y) = screen_of(&o, o.registry().bodies()[0].position());

        o.handle_input(InputEvent::PointerDown { x: x - 40.0, y });
        o.handle_input(InputEvent::PointerMove { x: x - 20.0, y });
        o.handle_input(InputEvent::PointerMove { x, y });
        o.handle_input(InputEvent::PointerUp { x, y });

        assert_eq!(o.focus().phase(), FocusPhase::Idle);
        assert_ne!(o.camera_position(), home);
    }

    #[test]
    fn hover_picks_only_when_enabled() {
        let mut o = orrery();
        o.load_bodies(&[body("Earth", 8.0, 0.0)]).unwrap();
        let (x, y) = screen_of(&o, o.registry().bodies()[0].position());
        o.handle_input(InputEvent::PointerMove { x, y });
        assert_eq!(o.focus().phase(), FocusPhase::Idle);

        let config = OrreryConfig { pick_on_hover: true, ..OrreryConfig::default() };
        let mut o = Orrery::new(config, HeadlessScene::new(), RecordingPanel::default()).unwrap();
        o.resize(800.0, 600.0);
        o.load_bodies(&[body("Earth", 8.0, 0.0)]).unwrap();
        o.handle_input(InputEvent::PointerMove { x, y });
        assert_eq!(o.focus().phase(), FocusPhase::FocusingIn);
    }

    #[test]
    fn second_click_during_session_is_ignored() {
        let mut o = orrery();
        o.load_bodies(&[body("Earth", 8.0, 0.0), body("Mars", 12.0, 0.0)]).unwrap();
        let (ex, ey) = screen_of(&o, o.registry().bodies()[0].position());
        let (mx, my) = screen_of(&o, o.registry().bodies()[1].position());

        click(&mut o, ex, ey);
        frames(&mut o, 3);
        click(&mut o, mx, my);
        assert_eq!(o.focus().focused_body(), Some(BodyId(0)));
    }

    #[test]
    fn wheel_zoom_is_clamped() {
        let mut o = orrery();
        for _ in 0..200 {
            o.handle_input(InputEvent::Wheel { delta: 100.0 });
        }
        assert!(o.camera().distance_to_target() <= 100.0 + 1e-3);
    }

    #[test]
    fn catalog_is_consumed_once() {
        let mut o = orrery();
        assert_eq!(o.load_catalog(BodyCatalog::builtin().unwrap()).unwrap(), 9);
        assert!(matches!(
            o.load_catalog(BodyCatalog::builtin().unwrap()),
            Err(ConfigError::AlreadyLoaded)
        ));
        assert_eq!(o.registry().len(), 9);
    }

    #[test]
    fn bad_catalog_leaves_scene_untouched() {
        let mut o = orrery();
        let before = o.scene().scene_len();
        let json = r#"[{ "name": "Bad", "radius": -1, "distance": 3, "speed": 0.1, "info": "", "texture": "" }]"#;
        assert!(o.load_catalog_json(json).is_err());
        assert_eq!(o.scene().scene_len(), before);
        assert!(!o.is_loaded());
    }

    #[test]
    fn invalid_catalog_keeps_running_settings() {
        let mut o = orrery();
        let catalog = BodyCatalog {
            bodies: vec![CelestialBodyConfig { radius: -1.0, ..body("Bad", 3.0, 0.1) }],
            settings: Some(OrreryConfig { orbit_samples: 7, tick_ms: 5.0, ..OrreryConfig::default() }),
        };
        assert!(o.load_catalog(catalog).is_err());
        assert_eq!(o.config().orbit_samples, 100);
        assert_eq!(o.config().tick_ms, 1000.0 / 60.0);
        assert_eq!(o.state().clock.tick_ms(), 1000.0 / 60.0);
        assert!(!o.is_loaded());
    }

    #[test]
    fn focusing_keeps_body_in_view() {
        let mut o = orrery();
        o.load_bodies(&[body("Earth", 8.0, 0.0)]).unwrap();
        let earth = o.registry().bodies()[0].position();
        let (x, y) = screen_of(&o, earth);

        click(&mut o, x, y);
        frames(&mut o, 1);
        assert_eq!(o.focus().phase(), FocusPhase::FocusingIn);
        assert_eq!(o.camera().target, earth);
    }

    #[test]
    fn catalog_settings_apply() {
        let mut o = orrery();
        let json = r#"{ "bodies": [], "settings": { "orbit_samples": 12, "pick_on_hover": true } }"#;
        o.load_catalog_json(json).unwrap();
        assert_eq!(o.config().orbit_samples, 12);
        assert!(o.config().pick_on_hover);
    }

    #[test]
    fn sun_spins_while_running() {
        let mut o = orrery();
        frames(&mut o, 3);
        let sun = o.state().sun.as_ref().unwrap();
        assert!(sun.transform.rotation.y > 0.0);
        assert_eq!(sun.transform.position, Vec3::ZERO);
    }
}
