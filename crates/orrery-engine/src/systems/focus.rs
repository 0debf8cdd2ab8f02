//! Camera focus state machine.
//!
//! ```text
//! Idle --begin--> FocusingIn --tween done--> Focused --dismiss--> ReturningOut --tween done--> Idle
//! ```
//!
//! Tweens are polled against `SimulationClock::animation_ms`, which keeps
//! running while the orbits are paused. At most one session exists; `begin`
//! is refused while any phase other than `Idle` is active.

use glam::Vec3;

use crate::api::config::OrreryConfig;
use crate::api::types::{BodyId, OrreryEvent};
use crate::core::scene::SceneState;
use crate::error::TickError;
use crate::extensions::easing::Easing;
use crate::extensions::tween::Tween;
use crate::renderer::traits::InfoPanel;
use crate::systems::pause::PauseController;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusDirection {
    Focusing,
    Returning,
}

/// One camera move, toward a body or back home.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraFocusSession {
    pub target: Option<BodyId>,
    pub direction: FocusDirection,
    position: Tween,
    /// Look-target tween for the return trip. Focusing in always looks at the body.
    look: Option<Tween>,
}

impl CameraFocusSession {
    pub fn start_position(&self) -> Vec3 {
        self.position.from
    }

    pub fn end_position(&self) -> Vec3 {
        self.position.to
    }

    /// Animation timeline value (ms) at which the move started.
    pub fn started_at(&self) -> f64 {
        self.position.started_at
    }

    pub fn duration(&self) -> f64 {
        self.position.duration
    }

    /// Eased-progress input in `[0, 1]`.
    pub fn progress_at(&self, now: f64) -> f32 {
        self.position.progress_at(now)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusPhase {
    Idle,
    FocusingIn,
    Focused,
    ReturningOut,
}

/// Camera state captured when a session starts.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Anchor {
    body: BodyId,
    home_position: Vec3,
    home_target: Vec3,
    /// Pause state to restore when the session ends.
    resume_paused: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FocusSettings {
    pub duration_ms: f64,
    pub info_delay_ms: f64,
    pub distance_factor: f32,
    pub min_distance: f32,
    pub easing: Easing,
}

impl FocusSettings {
    pub fn from_config(config: &OrreryConfig) -> Self {
        Self {
            duration_ms: config.focus_duration_ms,
            info_delay_ms: config.info_delay_ms,
            distance_factor: config.focus_distance_factor,
            min_distance: config.focus_min_distance,
            easing: config.focus_easing,
        }
    }
}

impl Default for FocusSettings {
    fn default() -> Self {
        Self::from_config(&OrreryConfig::default())
    }
}

pub struct FocusController {
    settings: FocusSettings,
    phase: FocusPhase,
    anchor: Option<Anchor>,
    session: Option<CameraFocusSession>,
    /// Set on arrival; cleared once the panel is shown or dismissed.
    info_due_at: Option<f64>,
}

impl FocusController {
    pub fn new(settings: FocusSettings) -> Self {
        Self {
            settings,
            phase: FocusPhase::Idle,
            anchor: None,
            session: None,
            info_due_at: None,
        }
    }

    pub fn phase(&self) -> FocusPhase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.phase != FocusPhase::Idle
    }

    /// Camera move in flight, if any.
    pub fn session(&self) -> Option<&CameraFocusSession> {
        self.session.as_ref()
    }

    /// Body the current session is about.
    pub fn focused_body(&self) -> Option<BodyId> {
        self.anchor.map(|a| a.body)
    }

    /// Pause state that will be restored when the session ends.
    pub fn resume_paused(&self) -> Option<bool> {
        self.anchor.map(|a| a.resume_paused)
    }

    /// Flip the pause state to restore after the session. Returns the new
    /// value, or `None` when no session is active.
    pub fn toggle_resume_paused(&mut self) -> Option<bool> {
        let anchor = self.anchor.as_mut()?;
        anchor.resume_paused = !anchor.resume_paused;
        Some(anchor.resume_paused)
    }

    /// Viewing position for a body: out from the origin through the body,
    /// `radius × factor` away (at least `min_distance`).
    pub fn focus_position(&self, body_position: Vec3, body_radius: f32, camera_position: Vec3) -> Vec3 {
        let dir = body_position
            .try_normalize()
            .or_else(|| (camera_position - body_position).try_normalize())
            .unwrap_or(Vec3::Z);
        let distance = (body_radius * self.settings.distance_factor).max(self.settings.min_distance);
        body_position + dir * distance
    }

    /// Start focusing on `body`. Returns `Ok(false)` if a session is already
    /// running; the running tween is left alone.
    pub fn begin(&mut self, body: BodyId, state: &mut SceneState) -> Result<bool, TickError> {
        if self.is_active() {
            log::debug!("focus on {body:?} ignored: session active");
            return Ok(false);
        }
        let target = state.registry.get(body).ok_or(TickError::UnknownBody(body))?;
        let body_position = target.position();
        let end = self.focus_position(body_position, target.config.radius, state.camera.position);
        log::info!("Focusing {}", target.config.name);

        let now = state.clock.animation_ms();
        let home_position = state.camera.position;
        let home_target = state.camera.target;
        self.anchor = Some(Anchor {
            body,
            home_position,
            home_target,
            resume_paused: state.clock.is_paused(),
        });
        self.session = Some(CameraFocusSession {
            target: Some(body),
            direction: FocusDirection::Focusing,
            position: Tween::new(home_position, end, now, self.settings.duration_ms, self.settings.easing),
            look: None,
        });
        self.phase = FocusPhase::FocusingIn;

        state.controls.enabled = false;
        PauseController::new(&mut state.clock).force_pause();
        state.emit(OrreryEvent::FocusStarted { body });
        Ok(true)
    }

    /// Start the return trip. Only valid while `Focused`.
    pub fn dismiss(&mut self, state: &mut SceneState, panel: &mut dyn InfoPanel) -> bool {
        let Some(anchor) = self.anchor else {
            return false;
        };
        if self.phase != FocusPhase::Focused {
            return false;
        }
        panel.hide();
        self.info_due_at = None;

        let now = state.clock.animation_ms();
        self.session = Some(CameraFocusSession {
            target: Some(anchor.body),
            direction: FocusDirection::Returning,
            position: Tween::new(
                state.camera.position,
                anchor.home_position,
                now,
                self.settings.duration_ms,
                self.settings.easing,
            ),
            look: Some(Tween::new(
                state.camera.target,
                anchor.home_target,
                now,
                self.settings.duration_ms,
                self.settings.easing,
            )),
        });
        self.phase = FocusPhase::ReturningOut;
        log::debug!("Returning camera");
        true
    }

    /// Step the session against the animation timeline.
    ///
    /// Everything is computed before the camera is touched; on error the
    /// camera and phase are unchanged.
    pub fn update(&mut self, state: &mut SceneState, panel: &mut dyn InfoPanel) -> Result<(), TickError> {
        let Some(anchor) = self.anchor else {
            return Ok(());
        };
        let now = state.clock.animation_ms();

        match self.phase {
            FocusPhase::Idle => Ok(()),
            FocusPhase::FocusingIn => {
                let Some(session) = self.session else {
                    return Ok(());
                };
                let body_position = state
                    .registry
                    .get(anchor.body)
                    .ok_or(TickError::UnknownBody(anchor.body))?
                    .position();
                let position = session.position.value_at(now);
                if !position.is_finite() {
                    return Err(TickError::NonFiniteCamera);
                }
                state.camera.position = position;
                state.camera.look_at(body_position);

                if session.position.is_complete_at(now) {
                    self.session = None;
                    self.phase = FocusPhase::Focused;
                    self.info_due_at = Some(now + self.settings.info_delay_ms);
                }
                Ok(())
            }
            FocusPhase::Focused => {
                let body = state
                    .registry
                    .get(anchor.body)
                    .ok_or(TickError::UnknownBody(anchor.body))?;
                state.camera.look_at(body.position());
                if self.info_due_at.is_some_and(|due| now >= due) {
                    panel.show(&body.config.name, &body.config.info);
                    self.info_due_at = None;
                    state.emit(OrreryEvent::InfoShown { body: anchor.body });
                }
                Ok(())
            }
            FocusPhase::ReturningOut => {
                let Some(session) = self.session else {
                    return Ok(());
                };
                let position = session.position.value_at(now);
                let target = session.look.map_or(anchor.home_target, |look| look.value_at(now));
                if !position.is_finite() || !target.is_finite() {
                    return Err(TickError::NonFiniteCamera);
                }
                state.camera.position = position;
                state.camera.look_at(target);

                if session.position.is_complete_at(now) {
                    state.camera.position = anchor.home_position;
                    state.camera.look_at(anchor.home_target);
                    state.controls.enabled = true;
                    state.clock.set_paused(anchor.resume_paused);
                    self.session = None;
                    self.anchor = None;
                    self.phase = FocusPhase::Idle;
                    state.emit(OrreryEvent::FocusEnded);
                    log::debug!("Focus session ended");
                }
                Ok(())
            }
        }
    }
}

impl Default for FocusController {
    fn default() -> Self {
        Self::new(FocusSettings::default())
    }
}
