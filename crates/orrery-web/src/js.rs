//! Scene and info panel backed by host JavaScript.
//!
//! The host page defines two global objects before calling `orrery_init`:
//!
//! ```js
//! globalThis.orreryScene = {
//!   createSphere(radius, texture) { /* returns handle, throws if the texture fails */ },
//!   createFallbackSphere(radius) { /* returns handle */ },
//!   createLineLoop(points) { /* Float32Array xyz triples, returns handle */ },
//!   addToScene(handle) {},
//!   setVisible(handle, visible) {},
//!   setTransform(handle, px, py, pz, rx, ry, rz) {},
//!   intersectRay(ox, oy, oz, dx, dy, dz) { /* Float32Array of (handle, distance) pairs, nearest first */ },
//!   render(camera) { /* Float32Array: view-projection (16) + eye (4) */ },
//!   resize(width, height) {},
//! };
//! globalThis.orreryPanel = { show(name, info) {}, hide() {} };
//! ```

use glam::Vec3;
use orrery_engine::{AssetLoadError, InfoPanel, ObjectHandle, PerspectiveCamera, Ray, RayHit, SceneRenderer, Transform};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = orreryScene, js_name = createSphere, catch)]
    fn scene_create_sphere(radius: f32, texture: &str) -> Result<u32, JsValue>;

    #[wasm_bindgen(js_namespace = orreryScene, js_name = createFallbackSphere)]
    fn scene_create_fallback_sphere(radius: f32) -> u32;

    #[wasm_bindgen(js_namespace = orreryScene, js_name = createLineLoop)]
    fn scene_create_line_loop(points: &[f32]) -> u32;

    #[wasm_bindgen(js_namespace = orreryScene, js_name = addToScene)]
    fn scene_add(handle: u32);

    #[wasm_bindgen(js_namespace = orreryScene, js_name = setVisible)]
    fn scene_set_visible(handle: u32, visible: bool);

    #[wasm_bindgen(js_namespace = orreryScene, js_name = setTransform)]
    fn scene_set_transform(handle: u32, px: f32, py: f32, pz: f32, rx: f32, ry: f32, rz: f32);

    #[wasm_bindgen(js_namespace = orreryScene, js_name = intersectRay)]
    fn scene_intersect_ray(ox: f32, oy: f32, oz: f32, dx: f32, dy: f32, dz: f32) -> js_sys::Float32Array;

    #[wasm_bindgen(js_namespace = orreryScene, js_name = render)]
    fn scene_render(camera: &[f32]);

    #[wasm_bindgen(js_namespace = orreryScene, js_name = resize)]
    fn scene_resize(width: u32, height: u32);

    #[wasm_bindgen(js_namespace = orreryPanel, js_name = show)]
    fn panel_show(name: &str, info: &str);

    #[wasm_bindgen(js_namespace = orreryPanel, js_name = hide)]
    fn panel_hide();
}

/// `SceneRenderer` forwarding to `globalThis.orreryScene`.
#[derive(Debug, Default)]
pub struct JsScene;

impl SceneRenderer for JsScene {
    fn backend(&self) -> &'static str {
        "js"
    }

    fn create_sphere(&mut self, radius: f32, texture: &str) -> Result<ObjectHandle, AssetLoadError> {
        scene_create_sphere(radius, texture)
            .map(ObjectHandle)
            .map_err(|e| AssetLoadError::Texture {
                path: texture.to_string(),
                reason: e.as_string().unwrap_or_else(|| format!("{e:?}")),
            })
    }

    fn create_fallback_sphere(&mut self, radius: f32) -> ObjectHandle {
        ObjectHandle(scene_create_fallback_sphere(radius))
    }

    fn create_line_loop(&mut self, points: &[Vec3]) -> ObjectHandle {
        let flat: Vec<f32> = points.iter().flat_map(|p| p.to_array()).collect();
        ObjectHandle(scene_create_line_loop(&flat))
    }

    fn add_to_scene(&mut self, handle: ObjectHandle) {
        scene_add(handle.0);
    }

    fn set_visible(&mut self, handle: ObjectHandle, visible: bool) {
        scene_set_visible(handle.0, visible);
    }

    fn set_transform(&mut self, handle: ObjectHandle, transform: &Transform) {
        let p = transform.position;
        let r = transform.rotation;
        scene_set_transform(handle.0, p.x, p.y, p.z, r.x, r.y, r.z);
    }

    fn intersect_ray(&self, ray: &Ray) -> Vec<RayHit> {
        let (o, d) = (ray.origin, ray.direction);
        let pairs = scene_intersect_ray(o.x, o.y, o.z, d.x, d.y, d.z).to_vec();
        pairs
            .chunks_exact(2)
            .map(|pair| RayHit {
                handle: ObjectHandle(pair[0] as u32),
                distance: pair[1],
            })
            .collect()
    }

    fn render(&mut self, camera: &PerspectiveCamera) {
        let uniform = camera.uniform();
        scene_render(bytemuck::cast_slice(&[uniform]));
    }

    fn resize(&mut self, width: u32, height: u32) {
        scene_resize(width, height);
    }
}

/// `InfoPanel` forwarding to `globalThis.orreryPanel`.
#[derive(Debug, Default)]
pub struct JsInfoPanel;

impl InfoPanel for JsInfoPanel {
    fn show(&mut self, name: &str, info: &str) {
        panel_show(name, info);
    }

    fn hide(&mut self) {
        panel_hide();
    }
}
