//! Polar Stereographic projection.
//!
//! Only the polar aspects are supported: the projection is centered on the
//! north or the south pole, with a latitude of true scale (lat_ts) and a
//! central meridian (lon0) pointing "down" the map.

use std::f64::consts::PI;

use crate::definition::normalize_lon;

/// Polar Stereographic projection on a sphere.
#[derive(Debug, Clone, PartialEq)]
pub struct PolarStereographic {
    /// Central meridian in radians
    pub lon0: f64,
    /// Latitude of true scale in radians
    pub lat_ts: f64,
    /// True for the north polar aspect
    pub north: bool,
    /// Earth radius (meters)
    pub earth_radius: f64,
    /// Scale constant R * (1 + sin|lat_ts|)
    k: f64,
}

impl PolarStereographic {
    /// Create a projection from parameters in degrees.
    ///
    /// `lat0_deg` must be +90 or -90. Returns None for oblique aspects or a
    /// latitude of true scale outside [-90, 90].
    pub fn from_degrees(
        lon0_deg: f64,
        lat0_deg: f64,
        lat_ts_deg: f64,
        earth_radius: f64,
    ) -> Option<Self> {
        let north = if (lat0_deg - 90.0).abs() < 1e-9 {
            true
        } else if (lat0_deg + 90.0).abs() < 1e-9 {
            false
        } else {
            return None;
        };

        if !lat_ts_deg.is_finite() || lat_ts_deg.abs() > 90.0 {
            return None;
        }

        let lat_ts = lat_ts_deg.to_radians();
        let k = earth_radius * (1.0 + lat_ts.abs().sin());

        Some(Self {
            lon0: lon0_deg.to_radians(),
            lat_ts,
            north,
            earth_radius,
            k,
        })
    }

    /// Convert geographic coordinates (degrees) to projected meters.
    pub fn forward(&self, lon_deg: f64, lat_deg: f64) -> (f64, f64) {
        let lat = lat_deg.to_radians();
        let dlon = normalize_lon(lon_deg.to_radians() - self.lon0);

        if self.north {
            let rho = self.k * (PI / 4.0 - lat / 2.0).tan();
            (rho * dlon.sin(), -rho * dlon.cos())
        } else {
            let rho = self.k * (PI / 4.0 + lat / 2.0).tan();
            (rho * dlon.sin(), rho * dlon.cos())
        }
    }

    /// Convert projected meters to geographic coordinates (lon, lat) in degrees.
    pub fn inverse(&self, x: f64, y: f64) -> (f64, f64) {
        let rho = x.hypot(y);

        let (lat, dlon) = if self.north {
            (PI / 2.0 - 2.0 * (rho / self.k).atan(), x.atan2(-y))
        } else {
            (2.0 * (rho / self.k).atan() - PI / 2.0, x.atan2(y))
        };
        let lon = normalize_lon(self.lon0 + dlon);

        (lon.to_degrees(), lat.to_degrees())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const R: f64 = 6371220.0;

    #[test]
    fn test_pole_maps_to_origin() {
        let proj = PolarStereographic::from_degrees(10.0, 90.0, 60.0, R).unwrap();
        let (x, y) = proj.forward(123.0, 90.0);
        assert!(x.abs() < 1e-6 && y.abs() < 1e-6);
    }

    #[test]
    fn test_central_meridian_points_down() {
        let proj = PolarStereographic::from_degrees(10.0, 90.0, 60.0, R).unwrap();
        let (x, y) = proj.forward(10.0, 60.0);
        assert!(x.abs() < 1e-6);
        assert!(y < 0.0);
    }

    #[test]
    fn test_north_roundtrip() {
        let proj = PolarStereographic::from_degrees(10.0, 90.0, 60.0, R).unwrap();
        let (x, y) = proj.forward(49.0, 70.2);
        let (lon, lat) = proj.inverse(x, y);
        assert!((lon - 49.0).abs() < 1e-9, "lon roundtrip failed: {}", lon);
        assert!((lat - 70.2).abs() < 1e-9, "lat roundtrip failed: {}", lat);
    }

    #[test]
    fn test_south_roundtrip() {
        let proj = PolarStereographic::from_degrees(0.0, -90.0, -71.0, R).unwrap();
        let (x, y) = proj.forward(-60.0, -75.0);
        let (lon, lat) = proj.inverse(x, y);
        assert!((lon - (-60.0)).abs() < 1e-9);
        assert!((lat - (-75.0)).abs() < 1e-9);
    }

    #[test]
    fn test_oblique_aspect_rejected() {
        assert!(PolarStereographic::from_degrees(10.0, 60.0, 60.0, R).is_none());
        assert!(PolarStereographic::from_degrees(10.0, 90.0, 95.0, R).is_none());
    }
}
