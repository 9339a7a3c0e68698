//! Projection definitions and their textual form.
//!
//! A projection definition is a comma-separated list: the projection name
//! followed by its parameters in degrees.
//!
//! | class     | definition                 |
//! |-----------|----------------------------|
//! | latlon    | `latlon`                   |
//! | stere     | `stere,lon0,lat0,lat_ts`   |
//! | merc      | `merc[,lon0]`              |
//! | lcc       | `lcc,lon0,lat0,lat1[,lat2]`|

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;

use crate::lambert::LambertConformal;
use crate::mercator::Mercator;
use crate::polar::PolarStereographic;

/// Normalize a longitude difference to [-π, π]. Non-finite input is
/// returned unchanged.
pub(crate) fn normalize_lon(lon: f64) -> f64 {
    if !lon.is_finite() || (-PI..=PI).contains(&lon) {
        return lon;
    }
    (lon + PI).rem_euclid(2.0 * PI) - PI
}

/// Largest magnitude accepted for any projection parameter, in degrees.
const MAX_PARAMETER_DEG: f64 = 360.0;

/// Projection class tag, used to match cached grids against areas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectionClass {
    LatLon,
    Stereographic,
    Mercator,
    LambertConformal,
}

impl ProjectionClass {
    /// Name used in projection definitions.
    pub fn name(&self) -> &'static str {
        match self {
            ProjectionClass::LatLon => "latlon",
            ProjectionClass::Stereographic => "stere",
            ProjectionClass::Mercator => "merc",
            ProjectionClass::LambertConformal => "lcc",
        }
    }
}

impl fmt::Display for ProjectionClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A resolved map projection.
#[derive(Debug, Clone, PartialEq)]
pub enum Projection {
    /// Plate carrée: x = lon, y = lat, in degrees.
    LatLon,
    PolarStereographic(PolarStereographic),
    Mercator(Mercator),
    LambertConformal(LambertConformal),
}

impl Projection {
    /// Resolve a projection definition such as "stere,10,90,60".
    ///
    /// Returns None for unknown projection names, a wrong parameter count,
    /// non-numeric parameters, or parameters the projection cannot use.
    pub fn parse(definition: &str, earth_radius: f64) -> Option<Self> {
        let mut parts = definition.split(',').map(str::trim);
        let name = parts.next()?.to_lowercase();

        let mut params = Vec::new();
        for part in parts {
            let value: f64 = part.parse().ok()?;
            if !value.is_finite() || value.abs() > MAX_PARAMETER_DEG {
                return None;
            }
            params.push(value);
        }

        match (name.as_str(), params.as_slice()) {
            ("latlon", []) => Some(Projection::LatLon),
            ("stere", [lon0, lat0, lat_ts]) => {
                PolarStereographic::from_degrees(*lon0, *lat0, *lat_ts, earth_radius)
                    .map(Projection::PolarStereographic)
            }
            ("merc", []) => Some(Projection::Mercator(Mercator::from_degrees(0.0, earth_radius))),
            ("merc", [lon0]) => Some(Projection::Mercator(Mercator::from_degrees(
                *lon0,
                earth_radius,
            ))),
            ("lcc", [lon0, lat0, lat1]) => {
                LambertConformal::from_degrees(*lon0, *lat0, *lat1, *lat1, earth_radius)
                    .map(Projection::LambertConformal)
            }
            ("lcc", [lon0, lat0, lat1, lat2]) => {
                LambertConformal::from_degrees(*lon0, *lat0, *lat1, *lat2, earth_radius)
                    .map(Projection::LambertConformal)
            }
            _ => None,
        }
    }

    pub fn class(&self) -> ProjectionClass {
        match self {
            Projection::LatLon => ProjectionClass::LatLon,
            Projection::PolarStereographic(_) => ProjectionClass::Stereographic,
            Projection::Mercator(_) => ProjectionClass::Mercator,
            Projection::LambertConformal(_) => ProjectionClass::LambertConformal,
        }
    }

    /// True when projected coordinates are degrees rather than meters.
    pub fn is_geographic(&self) -> bool {
        matches!(self, Projection::LatLon)
    }

    /// Convert geographic coordinates (degrees) to projected coordinates.
    pub fn forward(&self, lon: f64, lat: f64) -> (f64, f64) {
        match self {
            Projection::LatLon => (lon, lat),
            Projection::PolarStereographic(p) => p.forward(lon, lat),
            Projection::Mercator(p) => p.forward(lon, lat),
            Projection::LambertConformal(p) => p.forward(lon, lat),
        }
    }

    /// Convert projected coordinates to geographic (lon, lat) in degrees.
    pub fn inverse(&self, x: f64, y: f64) -> (f64, f64) {
        match self {
            Projection::LatLon => (x, y),
            Projection::PolarStereographic(p) => p.inverse(x, y),
            Projection::Mercator(p) => p.inverse(x, y),
            Projection::LambertConformal(p) => p.inverse(x, y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const R: f64 = 6371220.0;

    #[test]
    fn test_parse_classes() {
        assert_eq!(Projection::parse("latlon", R).unwrap().class(), ProjectionClass::LatLon);
        assert_eq!(
            Projection::parse("stere,10,90,60", R).unwrap().class(),
            ProjectionClass::Stereographic
        );
        assert_eq!(Projection::parse("merc", R).unwrap().class(), ProjectionClass::Mercator);
        assert_eq!(
            Projection::parse("LCC, 25, 60, 60", R).unwrap().class(),
            ProjectionClass::LambertConformal
        );
        assert_eq!(
            Projection::parse("lcc,25,60,50,70", R).unwrap().class(),
            ProjectionClass::LambertConformal
        );
    }

    #[test]
    fn test_parse_rejects_bad_definitions() {
        assert!(Projection::parse("", R).is_none());
        assert!(Projection::parse("foo,1,2,3", R).is_none());
        assert!(Projection::parse("stere,10,90", R).is_none());
        assert!(Projection::parse("stere,10,north,60", R).is_none());
        assert!(Projection::parse("stere,10,45,60", R).is_none());
        assert!(Projection::parse("latlon,1", R).is_none());
        assert!(Projection::parse("merc,inf", R).is_none());
        assert!(Projection::parse("merc,1e300", R).is_none());
        assert!(Projection::parse("lcc,-97.5,38.5,38.5,1e9", R).is_none());
    }

    #[test]
    fn test_latlon_is_identity() {
        let proj = Projection::LatLon;
        assert!(proj.is_geographic());
        assert_eq!(proj.forward(24.9, 60.2), (24.9, 60.2));
        assert_eq!(proj.inverse(24.9, 60.2), (24.9, 60.2));
    }

    #[test]
    fn test_normalize_lon() {
        assert!((normalize_lon(2.5 * PI) - 0.5 * PI).abs() < 1e-12);
        assert!((normalize_lon(-1.5 * PI) - 0.5 * PI).abs() < 1e-12);
        assert!((normalize_lon(-7.25 * PI) - 0.75 * PI).abs() < 1e-9);
        assert_eq!(normalize_lon(PI), PI);
        assert_eq!(normalize_lon(-PI), -PI);
        assert!(normalize_lon(1e300).abs() <= PI);
        assert!(normalize_lon(f64::INFINITY).is_infinite());
        assert!(normalize_lon(f64::NAN).is_nan());
    }

    #[test]
    fn test_class_names() {
        assert_eq!(ProjectionClass::Stereographic.to_string(), "stere");
        assert_eq!(ProjectionClass::LambertConformal.name(), "lcc");
    }
}
