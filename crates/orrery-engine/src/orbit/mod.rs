pub mod geometry;
pub mod path;

pub use geometry::{flat_orbit_point, generate_orbit_points, inclination_rotation};
pub use path::{apply_visibility, toggle_visibility, OrbitPath};
