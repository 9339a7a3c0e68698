//! Well-known coordinate reference system codes.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::BoundingBox;

/// Well-known CRS codes understood by the export core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CrsCode {
    /// WGS84 Geographic (lat/lon in degrees)
    Epsg4326,
    /// Web Mercator (meters)
    Epsg3857,
    /// NAD83 Geographic
    Epsg4269,
    /// Polar Stereographic North (NSIDC)
    Epsg3413,
    /// Polar Stereographic South (Antarctic)
    Epsg3031,
}

/// Geodetic datum of a reference system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Datum {
    Wgs84,
    Nad83,
    /// Spherical earth used by model output grids.
    Sphere,
}

impl CrsCode {
    /// Parse a CRS string.
    ///
    /// Accepts formats like:
    /// - "EPSG:4326"
    /// - "epsg:4326"
    /// - "CRS:84" and "WGS84" (equivalent to EPSG:4326)
    pub fn parse(s: &str) -> Result<Self, CrsParseError> {
        let normalized = s.trim().to_uppercase();

        match normalized.as_str() {
            "EPSG:4326" | "CRS:84" | "WGS84" => Ok(CrsCode::Epsg4326),
            "EPSG:3857" | "EPSG:900913" => Ok(CrsCode::Epsg3857),
            "EPSG:4269" => Ok(CrsCode::Epsg4269),
            "EPSG:3413" => Ok(CrsCode::Epsg3413),
            "EPSG:3031" => Ok(CrsCode::Epsg3031),
            _ => Err(CrsParseError::UnsupportedCrs(s.to_string())),
        }
    }

    /// Numeric EPSG code.
    pub fn epsg(&self) -> u32 {
        match self {
            CrsCode::Epsg4326 => 4326,
            CrsCode::Epsg3857 => 3857,
            CrsCode::Epsg4269 => 4269,
            CrsCode::Epsg3413 => 3413,
            CrsCode::Epsg3031 => 3031,
        }
    }

    /// Check if this is a geographic (lat/lon) CRS.
    pub fn is_geographic(&self) -> bool {
        matches!(self, CrsCode::Epsg4326 | CrsCode::Epsg4269)
    }

    pub fn datum(&self) -> Datum {
        match self {
            CrsCode::Epsg4269 => Datum::Nad83,
            _ => Datum::Wgs84,
        }
    }

    /// Get the valid bounds for this CRS.
    pub fn valid_bounds(&self) -> BoundingBox {
        match self {
            CrsCode::Epsg4326 | CrsCode::Epsg4269 => BoundingBox::new(-180.0, -90.0, 180.0, 90.0),
            CrsCode::Epsg3857 => {
                // Web Mercator bounds (approx ±85.06° latitude)
                let max_extent = 20037508.342789244;
                BoundingBox::new(-max_extent, -max_extent, max_extent, max_extent)
            }
            CrsCode::Epsg3413 | CrsCode::Epsg3031 => {
                // Polar stereographic - approximate bounds
                BoundingBox::new(-4000000.0, -4000000.0, 4000000.0, 4000000.0)
            }
        }
    }
}

impl fmt::Display for CrsCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EPSG:{}", self.epsg())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CrsParseError {
    #[error("Unsupported CRS: {0}")]
    UnsupportedCrs(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_crs() {
        assert_eq!(CrsCode::parse("EPSG:4326").unwrap(), CrsCode::Epsg4326);
        assert_eq!(CrsCode::parse("epsg:3857").unwrap(), CrsCode::Epsg3857);
        assert_eq!(CrsCode::parse("CRS:84").unwrap(), CrsCode::Epsg4326);
        assert_eq!(CrsCode::parse(" wgs84 ").unwrap(), CrsCode::Epsg4326);
        assert!(CrsCode::parse("EPSG:99999").is_err());
    }

    #[test]
    fn test_display_roundtrip() {
        for code in [
            CrsCode::Epsg4326,
            CrsCode::Epsg3857,
            CrsCode::Epsg4269,
            CrsCode::Epsg3413,
            CrsCode::Epsg3031,
        ] {
            assert_eq!(CrsCode::parse(&code.to_string()).unwrap(), code);
        }
    }

    #[test]
    fn test_datum() {
        assert_eq!(CrsCode::Epsg4269.datum(), Datum::Nad83);
        assert_eq!(CrsCode::Epsg3413.datum(), Datum::Wgs84);
        assert!(CrsCode::Epsg4269.is_geographic());
        assert!(!CrsCode::Epsg3031.is_geographic());
    }
}
