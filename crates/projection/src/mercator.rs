//! Spherical Mercator projection.

use std::f64::consts::PI;

use crate::definition::normalize_lon;

/// Latitude limit of the square Web Mercator world.
pub const MAX_LATITUDE: f64 = 85.051_128_779_806_59;

/// Spherical Mercator projection.
#[derive(Debug, Clone, PartialEq)]
pub struct Mercator {
    /// Central meridian in radians
    pub lon0: f64,
    /// Earth radius (meters)
    pub earth_radius: f64,
}

impl Mercator {
    pub fn from_degrees(lon0_deg: f64, earth_radius: f64) -> Self {
        Self {
            lon0: lon0_deg.to_radians(),
            earth_radius,
        }
    }

    /// Convert geographic coordinates (degrees) to projected meters.
    ///
    /// Latitudes are clamped to ±MAX_LATITUDE.
    pub fn forward(&self, lon_deg: f64, lat_deg: f64) -> (f64, f64) {
        let lat = lat_deg.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
        let dlon = normalize_lon(lon_deg.to_radians() - self.lon0);

        let x = self.earth_radius * dlon;
        let y = self.earth_radius * (PI / 4.0 + lat / 2.0).tan().ln();
        (x, y)
    }

    /// Convert projected meters to geographic coordinates (lon, lat) in degrees.
    pub fn inverse(&self, x: f64, y: f64) -> (f64, f64) {
        let lon = normalize_lon(self.lon0 + x / self.earth_radius);
        let lat = 2.0 * (y / self.earth_radius).exp().atan() - PI / 2.0;
        (lon.to_degrees(), lat.to_degrees())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_web_mercator_extent() {
        let proj = Mercator::from_degrees(0.0, 6378137.0);
        let (x, y) = proj.forward(180.0, MAX_LATITUDE);
        assert!((x - 20037508.342789244).abs() < 1e-3);
        assert!((y - 20037508.342789244).abs() < 1e-3);
    }

    #[test]
    fn test_roundtrip() {
        let proj = Mercator::from_degrees(0.0, 6378137.0);
        let (x, y) = proj.forward(24.94, 60.17);
        let (lon, lat) = proj.inverse(x, y);
        assert!((lon - 24.94).abs() < 1e-9);
        assert!((lat - 60.17).abs() < 1e-9);
    }
}
