pub mod catalog;
pub mod registry;

pub use catalog::{BodyCatalog, CelestialBodyConfig};
pub use registry::{BodyRegistry, CelestialBodyState, SunState};
