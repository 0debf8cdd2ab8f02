pub mod config;
pub mod orrery;
pub mod types;

pub use config::{OrreryConfig, SunConfig};
pub use orrery::Orrery;
pub use types::{BodyId, EventRecord, ObjectHandle, OrreryEvent, Transform};
