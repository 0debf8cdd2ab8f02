pub mod scene;
pub mod time;

pub use scene::SceneState;
pub use time::{FixedTimestep, SimulationClock};
