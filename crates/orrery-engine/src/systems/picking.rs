//! Screen-space picking: pixel → NDC → camera ray → nearest body.

use glam::Vec2;

use crate::assets::registry::{BodyRegistry, CelestialBodyState};
use crate::renderer::camera::PerspectiveCamera;
use crate::renderer::traits::SceneRenderer;

/// Nearest body under the screen point, or `None` on a miss.
///
/// Hits that do not resolve to a body (sun, orbit guides) are skipped, so a
/// planet behind the sun can still be picked.
pub fn pick<'r, R: SceneRenderer + ?Sized>(
    screen_x: f32,
    screen_y: f32,
    viewport_width: f32,
    viewport_height: f32,
    camera: &PerspectiveCamera,
    registry: &'r BodyRegistry,
    scene: &R,
) -> Option<&'r CelestialBodyState> {
    let ndc = PerspectiveCamera::screen_to_ndc(
        Vec2::new(screen_x, screen_y),
        Vec2::new(viewport_width, viewport_height),
    )?;
    let ray = camera.ray_through_ndc(ndc)?;
    scene
        .intersect_ray(&ray)
        .into_iter()
        .find_map(|hit| registry.find_by_visual_handle(hit.handle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::config::{OrreryConfig, SunConfig};
    use crate::api::types::BodyId;
    use crate::assets::catalog::CelestialBodyConfig;
    use crate::assets::registry::SunState;
    use crate::renderer::headless::HeadlessScene;
    use glam::Vec3;

    fn body(name: &str, radius: f32, distance: f32) -> CelestialBodyConfig {
        CelestialBodyConfig {
            name: name.to_string(),
            radius,
            distance,
            speed: 0.0,
            inclination: 0.0,
            info: String::new(),
            texture: format!("{name}.jpg"),
        }
    }

    fn camera_looking_down_x() -> PerspectiveCamera {
        let mut cam = PerspectiveCamera::new(45.0, 800.0, 600.0, 0.1, 1000.0).with_position(Vec3::new(40.0, 0.0, 0.0));
        cam.look_at(Vec3::ZERO);
        cam
    }

    fn project(cam: &PerspectiveCamera, world: Vec3) -> (f32, f32) {
        let ndc = cam.view_projection().project_point3(world);
        ((ndc.x + 1.0) * 0.5 * 800.0, (1.0 - ndc.y) * 0.5 * 600.0)
    }

    #[test]
    fn picks_body_under_cursor() {
        let mut scene = HeadlessScene::new();
        let registry = BodyRegistry::load(&[body("Earth", 0.5, 8.0)], &OrreryConfig::default(), true, &mut scene).unwrap();
        let mut cam = PerspectiveCamera::new(45.0, 800.0, 600.0, 0.1, 1000.0).with_position(Vec3::new(0.0, 20.0, 55.0));
        cam.look_at(Vec3::ZERO);

        let (sx, sy) = project(&cam, registry.bodies()[0].position());
        let hit = pick(sx, sy, 800.0, 600.0, &cam, &registry, &scene);
        assert_eq!(hit.map(|b| b.id), Some(BodyId(0)));
    }

    #[test]
    fn empty_space_misses() {
        let mut scene = HeadlessScene::new();
        let registry = BodyRegistry::load(&[body("Earth", 0.5, 8.0)], &OrreryConfig::default(), true, &mut scene).unwrap();
        let cam = camera_looking_down_x();
        assert!(pick(5.0, 5.0, 800.0, 600.0, &cam, &registry, &scene).is_none());
    }

    #[test]
    fn nearest_of_two_aligned_bodies_wins() {
        let mut scene = HeadlessScene::new();
        let configs = [body("Far", 0.5, 10.0), body("Near", 0.5, 20.0)];
        let registry = BodyRegistry::load(&configs, &OrreryConfig::default(), true, &mut scene).unwrap();
        let cam = camera_looking_down_x();
        // Both sit on +X at angle 0; the camera on +X sees the outer one first.
        let hit = pick(400.0, 300.0, 800.0, 600.0, &cam, &registry, &scene);
        assert_eq!(hit.map(|b| b.config.name.as_str()), Some("Near"));
    }

    #[test]
    fn sun_does_not_block_picks() {
        let mut scene = HeadlessScene::new();
        let _sun = SunState::create(&SunConfig { radius: 2.0, ..SunConfig::default() }, &mut scene);
        let registry = BodyRegistry::load(&[body("Hidden", 0.5, 10.0)], &OrreryConfig::default(), true, &mut scene).unwrap();
        // Camera on -X: the sun is between the eye and the body.
        let mut cam = PerspectiveCamera::new(45.0, 800.0, 600.0, 0.1, 1000.0).with_position(Vec3::new(-40.0, 0.0, 0.0));
        cam.look_at(Vec3::ZERO);
        let hit = pick(400.0, 300.0, 800.0, 600.0, &cam, &registry, &scene);
        assert_eq!(hit.map(|b| b.id), Some(BodyId(0)));
    }

    #[test]
    fn zero_viewport_misses() {
        let mut scene = HeadlessScene::new();
        let registry = BodyRegistry::load(&[body("Earth", 0.5, 8.0)], &OrreryConfig::default(), true, &mut scene).unwrap();
        let cam = camera_looking_down_x();
        assert!(pick(0.0, 0.0, 0.0, 0.0, &cam, &registry, &scene).is_none());
    }
}
