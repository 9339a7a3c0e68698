//! Configuration for the built-in GIS backend.

use serde::{Deserialize, Serialize};

/// Radius of the spherical earth used by model output grids (meters).
pub const DEFAULT_EARTH_RADIUS_M: f64 = 6371220.0;

/// Configuration for the built-in GIS backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GisConfig {
    /// Sphere radius used when resolving projection definitions.
    pub earth_radius_m: f64,
}

impl Default for GisConfig {
    fn default() -> Self {
        Self {
            earth_radius_m: DEFAULT_EARTH_RADIUS_M,
        }
    }
}

impl GisConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("GIS_EARTH_RADIUS_M") {
            if let Ok(radius) = val.parse() {
                config.earth_radius_m = radius;
            }
        }

        config
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !self.earth_radius_m.is_finite() || self.earth_radius_m <= 0.0 {
            return Err("earth_radius_m must be a positive number".to_string());
        }

        Ok(())
    }
}
