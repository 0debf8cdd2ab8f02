use glam::Vec3;

use crate::api::types::{BodyId, ObjectHandle};
use crate::renderer::traits::SceneRenderer;

/// Static orbit guide for one body. Geometry is fixed at creation; only
/// `visible` changes.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitPath {
    /// Body this guide belongs to.
    pub body: BodyId,
    points: Vec<Vec3>,
    handle: ObjectHandle,
    pub visible: bool,
}

impl OrbitPath {
    pub fn new(body: BodyId, points: Vec<Vec3>, handle: ObjectHandle, visible: bool) -> Self {
        Self { body, points, handle, visible }
    }

    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// Line loop created for this guide.
    pub fn handle(&self) -> ObjectHandle {
        self.handle
    }
}

/// Flip every path to the opposite of the first path's visibility.
///
/// Returns the new shared value, or `None` for an empty set. Paths that
/// disagreed before the call all agree afterwards.
pub fn toggle_visibility(paths: &mut [OrbitPath]) -> Option<bool> {
    let visible = !paths.first()?.visible;
    for path in paths.iter_mut() {
        path.visible = visible;
    }
    Some(visible)
}

/// Push each path's visibility to the scene backend.
pub fn apply_visibility<R: SceneRenderer + ?Sized>(paths: &[OrbitPath], scene: &mut R) {
    for path in paths {
        scene.set_visible(path.handle, path.visible);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::headless::HeadlessScene;

    fn paths(flags: &[bool]) -> Vec<OrbitPath> {
        flags
            .iter()
            .enumerate()
            .map(|(i, &v)| OrbitPath::new(BodyId(i as u32), vec![Vec3::X], ObjectHandle(i as u32), v))
            .collect()
    }

    #[test]
    fn toggle_twice_restores() {
        let mut set = paths(&[true, true, true]);
        assert_eq!(toggle_visibility(&mut set), Some(false));
        assert!(set.iter().all(|p| !p.visible));
        assert_eq!(toggle_visibility(&mut set), Some(true));
        assert!(set.iter().all(|p| p.visible));
    }

    #[test]
    fn mixed_visibility_is_normalized() {
        let mut set = paths(&[false, true, true]);
        assert_eq!(toggle_visibility(&mut set), Some(true));
        assert!(set.iter().all(|p| p.visible));
    }

    #[test]
    fn empty_set_is_noop() {
        let mut set: Vec<OrbitPath> = Vec::new();
        assert_eq!(toggle_visibility(&mut set), None);
    }

    #[test]
    fn apply_hides_line_loops() {
        let mut scene = HeadlessScene::new();
        let handle = scene.create_line_loop(&[Vec3::X, Vec3::Z, Vec3::NEG_X]);
        let mut set = vec![OrbitPath::new(BodyId(0), vec![Vec3::X], handle, true)];
        toggle_visibility(&mut set);
        apply_visibility(&set, &mut scene);
        assert!(!scene.object(handle).unwrap().visible);
    }
}
