pub mod camera;
pub mod controls;
pub mod headless;
pub mod ray;
pub mod traits;

// Re-export key types for convenient access
pub use camera::{CameraUniform, PerspectiveCamera};
pub use controls::OrbitControls;
pub use headless::{HeadlessScene, ObjectKind, RecordingPanel, SceneObject};
pub use ray::Ray;
pub use traits::{InfoPanel, RayHit, SceneRenderer};
