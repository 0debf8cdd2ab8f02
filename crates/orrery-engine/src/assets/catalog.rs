use serde::{Deserialize, Serialize};

use crate::api::config::OrreryConfig;
use crate::error::ConfigError;

/// Static description of one orbiting body. Immutable after load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CelestialBodyConfig {
    /// Display name (e.g., "Earth").
    pub name: String,
    /// Sphere radius in scene units. Must be > 0.
    pub radius: f32,
    /// Orbital semi-axis in scene units. Must be >= 0.
    pub distance: f32,
    /// Angular rate in radians per simulated millisecond.
    pub speed: f64,
    /// Orbit tilt about +X in radians (default: 0).
    #[serde(default)]
    pub inclination: f32,
    /// Text shown in the info panel.
    pub info: String,
    /// Texture reference handed to the scene backend as-is.
    pub texture: String,
}

impl CelestialBodyConfig {
    /// Check geometry parameters. `index` is only used in error messages.
    pub fn validate(&self, index: usize) -> Result<(), ConfigError> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::EmptyName { index });
        }
        let non_finite = |field| ConfigError::NonFinite { name: self.name.clone(), field };
        if !self.radius.is_finite() {
            return Err(non_finite("radius"));
        }
        if !self.distance.is_finite() {
            return Err(non_finite("distance"));
        }
        if !self.speed.is_finite() {
            return Err(non_finite("speed"));
        }
        if !self.inclination.is_finite() {
            return Err(non_finite("inclination"));
        }
        if self.radius <= 0.0 {
            return Err(ConfigError::NonPositiveRadius { name: self.name.clone(), radius: self.radius });
        }
        if self.distance < 0.0 {
            return Err(ConfigError::NegativeDistance {
                name: self.name.clone(),
                distance: self.distance,
            });
        }
        Ok(())
    }
}

/// Body catalog: the list of bodies plus optional settings overrides.
/// Loaded from a JSON document at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyCatalog {
    pub bodies: Vec<CelestialBodyConfig>,
    #[serde(default)]
    pub settings: Option<OrreryConfig>,
}

const BUILTIN_CATALOG: &str = include_str!("../../data/solar_system.json");

impl BodyCatalog {
    /// Parse and validate a catalog. Accepts either `{ "bodies": [...] }` or
    /// a bare array of bodies.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let catalog = if value.is_array() {
            BodyCatalog {
                bodies: serde_json::from_value(value)?,
                settings: None,
            }
        } else {
            serde_json::from_value(value)?
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// The nine-body default solar system.
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Validate every body and the settings, stopping at the first error.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (index, body) in self.bodies.iter().enumerate() {
            body.validate(index)?;
        }
        if let Some(settings) = &self.settings {
            settings.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_loads() {
        let catalog = BodyCatalog::builtin().unwrap();
        assert_eq!(catalog.bodies.len(), 9);
        assert_eq!(catalog.bodies[2].name, "Earth");
        assert_eq!(catalog.bodies[2].inclination, 0.0);
        assert!((catalog.bodies[0].inclination - std::f32::consts::FRAC_PI_8).abs() < 1e-6);
        assert!(catalog.settings.is_none());
    }

    #[test]
    fn parse_bare_array() {
        let json = r#"[
            { "name": "Earth", "radius": 0.1, "distance": 8, "speed": 0.0006,
              "info": "Home", "texture": "earth.jpg" }
        ]"#;
        let catalog = BodyCatalog::from_json(json).unwrap();
        assert_eq!(catalog.bodies.len(), 1);
        assert_eq!(catalog.bodies[0].speed, 0.0006);
    }

    #[test]
    fn parse_settings_override() {
        let json = r#"{
            "bodies": [],
            "settings": { "orbit_samples": 32 }
        }"#;
        let catalog = BodyCatalog::from_json(json).unwrap();
        assert_eq!(catalog.settings.unwrap().orbit_samples, 32);
    }

    #[test]
    fn missing_field_is_config_error() {
        let json = r#"[{ "name": "Earth", "radius": 0.1, "speed": 0.0006, "info": "", "texture": "" }]"#;
        assert!(matches!(BodyCatalog::from_json(json), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn malformed_json_is_config_error() {
        assert!(matches!(BodyCatalog::from_json("{ bodies: "), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn zero_radius_rejected() {
        let json = r#"[{ "name": "Dust", "radius": 0, "distance": 3, "speed": 0.1, "info": "", "texture": "" }]"#;
        assert!(matches!(
            BodyCatalog::from_json(json),
            Err(ConfigError::NonPositiveRadius { .. })
        ));
    }

    #[test]
    fn negative_distance_rejected() {
        let json = r#"[{ "name": "Odd", "radius": 1, "distance": -3, "speed": 0.1, "info": "", "texture": "" }]"#;
        assert!(matches!(
            BodyCatalog::from_json(json),
            Err(ConfigError::NegativeDistance { .. })
        ));
    }

    #[test]
    fn zero_distance_allowed() {
        let json = r#"[{ "name": "Core", "radius": 1, "distance": 0, "speed": 0.1, "info": "", "texture": "" }]"#;
        assert!(BodyCatalog::from_json(json).is_ok());
    }
}
