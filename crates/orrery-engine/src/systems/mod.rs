pub mod focus;
pub mod motion;
pub mod pause;
pub mod picking;

pub use focus::{CameraFocusSession, FocusController, FocusDirection, FocusPhase, FocusSettings};
pub use motion::{advance, orbit_position, orbital_angle, Spin};
pub use pause::PauseController;
pub use picking::pick;
