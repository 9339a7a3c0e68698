//! Lambert Conformal Conic projection.
//!
//! Used by regional model domains in the mid-latitudes.
//! It maps a cone tangent or secant to the Earth's surface onto a flat plane.
//!
//! The projection parameters are:
//! - Central meridian (lon0)
//! - Latitude of origin (lat0)
//! - Standard parallel(s): latin1 and latin2 (equal for a tangent cone)

use std::f64::consts::PI;

use crate::definition::normalize_lon;

/// Lambert Conformal Conic projection on a sphere.
///
/// Projected coordinates are meters from the origin (lon0, lat0).
#[derive(Debug, Clone, PartialEq)]
pub struct LambertConformal {
    /// Central meridian in radians
    pub lon0: f64,
    /// Latitude of origin in radians
    pub lat0: f64,
    /// First standard parallel in radians
    pub latin1: f64,
    /// Second standard parallel in radians
    pub latin2: f64,
    /// Earth radius (meters)
    pub earth_radius: f64,
    /// Cone constant (n)
    n: f64,
    /// F constant
    f: f64,
    /// Rho at the latitude of origin
    rho0: f64,
}

impl LambertConformal {
    /// Create a projection from parameters in degrees.
    ///
    /// Returns None when the parameters do not define a cone (e.g. a
    /// standard parallel on the equator, or parallels mirrored across it).
    pub fn from_degrees(
        lon0_deg: f64,
        lat0_deg: f64,
        latin1_deg: f64,
        latin2_deg: f64,
        earth_radius: f64,
    ) -> Option<Self> {
        let to_rad = PI / 180.0;

        let lon0 = lon0_deg * to_rad;
        let lat0 = lat0_deg * to_rad;
        let latin1 = latin1_deg * to_rad;
        let latin2 = latin2_deg * to_rad;

        if [lat0, latin1, latin2].iter().any(|lat| lat.abs() >= PI / 2.0) {
            return None;
        }

        let n = if (latin1 - latin2).abs() < 1e-10 {
            // Tangent cone (single standard parallel)
            latin1.sin()
        } else {
            // Secant cone (two standard parallels)
            let ln_ratio = (latin1.cos() / latin2.cos()).ln();
            let tan_ratio =
                ((PI / 4.0 + latin2 / 2.0).tan() / (PI / 4.0 + latin1 / 2.0).tan()).ln();
            ln_ratio / tan_ratio
        };

        if !n.is_finite() || n.abs() < 1e-10 {
            return None;
        }

        let f = (latin1.cos() * (PI / 4.0 + latin1 / 2.0).tan().powf(n)) / n;
        let rho0 = earth_radius * f / (PI / 4.0 + lat0 / 2.0).tan().powf(n);

        Some(Self {
            lon0,
            lat0,
            latin1,
            latin2,
            earth_radius,
            n,
            f,
            rho0,
        })
    }

    /// Convert geographic coordinates (degrees) to projected meters.
    pub fn forward(&self, lon_deg: f64, lat_deg: f64) -> (f64, f64) {
        let lat = lat_deg.to_radians();
        let dlon = normalize_lon(lon_deg.to_radians() - self.lon0);

        let rho = self.earth_radius * self.f / (PI / 4.0 + lat / 2.0).tan().powf(self.n);
        let theta = self.n * dlon;

        let x = rho * theta.sin();
        let y = self.rho0 - rho * theta.cos();
        (x, y)
    }

    /// Convert projected meters to geographic coordinates (lon, lat) in degrees.
    pub fn inverse(&self, x: f64, y: f64) -> (f64, f64) {
        let sign = self.n.signum();
        let dy = self.rho0 - y;

        let rho = sign * (x * x + dy * dy).sqrt();
        let theta = (sign * x).atan2(sign * dy);

        let lat = if rho == 0.0 {
            sign * PI / 2.0
        } else {
            2.0 * ((self.earth_radius * self.f / rho).powf(1.0 / self.n)).atan() - PI / 2.0
        };
        let lon = normalize_lon(self.lon0 + theta / self.n);

        (lon.to_degrees(), lat.to_degrees())
    }

    /// Cone constant.
    pub fn cone_constant(&self) -> f64 {
        self.n
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const R: f64 = 6371229.0;

    fn conus() -> LambertConformal {
        LambertConformal::from_degrees(-97.5, 38.5, 38.5, 38.5, R).unwrap()
    }

    #[test]
    fn test_origin_maps_to_zero() {
        let proj = conus();
        let (x, y) = proj.forward(-97.5, 38.5);
        assert!(x.abs() < 1e-6, "x should be ~0, got {}", x);
        assert!(y.abs() < 1e-6, "y should be ~0, got {}", y);
    }

    #[test]
    fn test_roundtrip() {
        let proj = conus();

        // Kansas City, MO
        let (x, y) = proj.forward(-94.5, 39.0);
        let (lon, lat) = proj.inverse(x, y);

        assert!((lon - (-94.5)).abs() < 1e-9, "lon roundtrip failed: {}", lon);
        assert!((lat - 39.0).abs() < 1e-9, "lat roundtrip failed: {}", lat);
    }

    #[test]
    fn test_secant_cone_roundtrip() {
        let proj = LambertConformal::from_degrees(25.0, 60.0, 50.0, 70.0, R).unwrap();
        let (x, y) = proj.forward(10.0, 55.0);
        let (lon, lat) = proj.inverse(x, y);
        assert!((lon - 10.0).abs() < 1e-9);
        assert!((lat - 55.0).abs() < 1e-9);
    }

    #[test]
    fn test_east_of_meridian_is_positive_x() {
        let proj = conus();
        let (x, _) = proj.forward(-90.0, 38.5);
        assert!(x > 0.0);
    }

    #[test]
    fn test_degenerate_cone_rejected() {
        assert!(LambertConformal::from_degrees(0.0, 0.0, 0.0, 0.0, R).is_none());
        assert!(LambertConformal::from_degrees(0.0, 10.0, 30.0, -30.0, R).is_none());
        assert!(LambertConformal::from_degrees(0.0, 90.0, 30.0, 30.0, R).is_none());
    }
}
