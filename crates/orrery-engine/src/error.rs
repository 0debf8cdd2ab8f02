//! Error types for catalog loading, asset fallback and per-tick failures.

use crate::api::types::BodyId;

/// Invalid or missing body parameters. Fatal at load: nothing is added to the scene.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The catalog JSON could not be parsed or is missing required fields.
    #[error("failed to parse body catalog: {0}")]
    Parse(#[from] serde_json::Error),

    /// A body has an empty name.
    #[error("body at index {index} has an empty name")]
    EmptyName { index: usize },

    /// Zero or negative radius would produce a degenerate sphere.
    #[error("body `{name}` has non-positive radius {radius}")]
    NonPositiveRadius { name: String, radius: f32 },

    /// Negative orbital distance.
    #[error("body `{name}` has negative distance {distance}")]
    NegativeDistance { name: String, distance: f32 },

    /// NaN or infinite numeric field.
    #[error("body `{name}` has a non-finite {field}")]
    NonFinite { name: String, field: &'static str },

    /// An orbit loop needs at least three points.
    #[error("orbit sample count must be at least 3, got {0}")]
    SampleCount(usize),

    /// The body catalog is consumed once at startup.
    #[error("body catalog already loaded")]
    AlreadyLoaded,

    /// A settings value outside its valid range.
    #[error("invalid setting `{field}`: {reason}")]
    InvalidSetting { field: &'static str, reason: String },
}

/// Texture or catalog fetch failure. Recoverable: the caller degrades instead of aborting.
#[derive(Debug, thiserror::Error)]
pub enum AssetLoadError {
    #[error("texture `{path}` could not be loaded: {reason}")]
    Texture { path: String, reason: String },

    #[error("body catalog fetch failed: {0}")]
    Fetch(String),
}

/// Failure inside a single loop tick. The loop logs it and keeps the previous state.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum TickError {
    /// A focus session refers to a body that is not in the registry.
    #[error("body {0:?} is not registered")]
    UnknownBody(BodyId),

    /// Motion produced a NaN or infinite position.
    #[error("body `{name}` produced a non-finite position")]
    NonFinitePosition { name: String },

    /// Camera interpolation produced a NaN or infinite position.
    #[error("camera interpolation produced a non-finite position")]
    NonFiniteCamera,
}

/// Umbrella error for the public loading API.
#[derive(Debug, thiserror::Error)]
pub enum OrreryError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    AssetLoad(#[from] AssetLoadError),
}
