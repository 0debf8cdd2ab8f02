pub mod api;
pub mod assets;
pub mod core;
pub mod error;
pub mod extensions;
pub mod input;
pub mod orbit;
pub mod renderer;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::config::{OrreryConfig, SunConfig};
pub use api::orrery::Orrery;
pub use api::types::{BodyId, EventRecord, ObjectHandle, OrreryEvent, Transform};
pub use assets::catalog::{BodyCatalog, CelestialBodyConfig};
pub use assets::registry::{BodyRegistry, CelestialBodyState, SunState};
pub use crate::core::scene::SceneState;
pub use crate::core::time::{FixedTimestep, SimulationClock};
pub use error::{AssetLoadError, ConfigError, OrreryError, TickError};
pub use input::queue::{InputEvent, InputQueue};
pub use orbit::geometry::generate_orbit_points;
pub use orbit::path::{toggle_visibility, OrbitPath};
pub use renderer::camera::{CameraUniform, PerspectiveCamera};
pub use renderer::controls::OrbitControls;
pub use renderer::headless::{HeadlessScene, RecordingPanel};
pub use renderer::ray::Ray;
pub use renderer::traits::{InfoPanel, RayHit, SceneRenderer};
pub use systems::focus::{CameraFocusSession, FocusController, FocusDirection, FocusPhase};
pub use systems::motion::{advance, Spin};
pub use systems::pause::PauseController;
pub use systems::picking::pick;

// Extensions: interpolation helpers
pub use extensions::{ease_vec3, lerp_vec3, Easing, Tween};
