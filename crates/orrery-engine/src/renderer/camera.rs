use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec2, Vec3};

use super::ray::Ray;

/// Perspective camera looking at a target point.
/// Clip-space conventions follow WebGL (z in [-1, 1]).
#[derive(Debug, Clone, PartialEq)]
pub struct PerspectiveCamera {
    /// Eye position in world space.
    pub position: Vec3,
    /// Point the camera looks at.
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    /// Viewport width / height.
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    /// Viewport size in pixels.
    pub viewport: Vec2,
}

/// GPU-side uniform data for the camera.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_projection: [[f32; 4]; 4],
    pub position: [f32; 4],
}

impl PerspectiveCamera {
    pub fn new(fov_deg: f32, viewport_width: f32, viewport_height: f32, near: f32, far: f32) -> Self {
        let mut camera = Self {
            position: Vec3::new(0.0, 0.0, 1.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov_y: fov_deg.to_radians(),
            aspect: 1.0,
            near,
            far,
            viewport: Vec2::ONE,
        };
        camera.resize(viewport_width, viewport_height);
        camera
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Point the camera at `target`.
    pub fn look_at(&mut self, target: Vec3) {
        self.target = target;
    }

    /// Update viewport and aspect. Degenerate sizes are ignored.
    pub fn resize(&mut self, viewport_width: f32, viewport_height: f32) {
        if viewport_width > 0.0 && viewport_height > 0.0 {
            self.viewport = Vec2::new(viewport_width, viewport_height);
            self.aspect = viewport_width / viewport_height;
        }
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov_y, self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn uniform(&self) -> CameraUniform {
        CameraUniform {
            view_projection: self.view_projection().to_cols_array_2d(),
            position: self.position.extend(1.0).to_array(),
        }
    }

    /// Orthonormal (right, up, forward) basis. Falls back to world axes when
    /// the view direction is degenerate or parallel to `up`.
    pub fn basis(&self) -> (Vec3, Vec3, Vec3) {
        let forward = (self.target - self.position)
            .try_normalize()
            .unwrap_or(Vec3::NEG_Z);
        let right = forward.cross(self.up).try_normalize().unwrap_or(Vec3::X);
        let up = right.cross(forward);
        (right, up, forward)
    }

    /// Convert a screen pixel (origin top-left, y down) to normalized device
    /// coordinates in [-1, 1], y up.
    pub fn screen_to_ndc(screen: Vec2, viewport: Vec2) -> Option<Vec2> {
        if !(viewport.x > 0.0 && viewport.y > 0.0) {
            return None;
        }
        Some(Vec2::new(
            screen.x / viewport.x * 2.0 - 1.0,
            -(screen.y / viewport.y) * 2.0 + 1.0,
        ))
    }

    /// Ray from the eye through a point in normalized device coordinates.
    pub fn ray_through_ndc(&self, ndc: Vec2) -> Option<Ray> {
        let (right, up, forward) = self.basis();
        let half_h = (self.fov_y * 0.5).tan();
        let half_w = half_h * self.aspect;
        let direction = forward + right * (ndc.x * half_w) + up * (ndc.y * half_h);
        Ray::new(self.position, direction)
    }

    /// Distance from the eye to the look target.
    pub fn distance_to_target(&self) -> f32 {
        self.position.distance(self.target)
    }
}
