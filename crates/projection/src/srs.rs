//! Spatial reference descriptors and coordinate transformations.

use export_common::crs::{CrsCode, Datum};

use crate::area::ProjectedArea;
use crate::definition::Projection;

/// WGS84 semi-major axis, used as the sphere radius of well-known
/// projected systems.
pub const WGS84_RADIUS: f64 = 6378137.0;

/// Geographic or projected coordinate system.
#[derive(Debug, Clone, PartialEq)]
pub enum SrsKind {
    Geographic,
    Projected(Projection),
}

/// A coordinate reference system descriptor (projection + datum).
#[derive(Debug, Clone, PartialEq)]
pub struct SpatialReference {
    name: String,
    datum: Datum,
    kind: SrsKind,
}

impl SpatialReference {
    /// Geographic coordinates (lon/lat degrees) on a datum.
    pub fn geographic(datum: Datum) -> Self {
        let name = match datum {
            Datum::Wgs84 => "WGS84",
            Datum::Nad83 => "NAD83",
            Datum::Sphere => "Sphere",
        };
        Self {
            name: name.to_string(),
            datum,
            kind: SrsKind::Geographic,
        }
    }

    /// Descriptor for a well-known CRS code.
    ///
    /// Projected systems are evaluated on a sphere of WGS84 radius.
    pub fn from_code(code: CrsCode) -> Self {
        let projection = match code {
            CrsCode::Epsg4326 | CrsCode::Epsg4269 => None,
            CrsCode::Epsg3857 => Projection::parse("merc,0", WGS84_RADIUS),
            CrsCode::Epsg3413 => Projection::parse("stere,-45,90,70", WGS84_RADIUS),
            CrsCode::Epsg3031 => Projection::parse("stere,0,-90,-71", WGS84_RADIUS),
        };

        Self {
            name: code.to_string(),
            datum: code.datum(),
            kind: projection.map_or(SrsKind::Geographic, SrsKind::Projected),
        }
    }

    /// Parse user input: a CRS code ("EPSG:4326", "WGS84") or a projection
    /// definition ("stere,10,90,60") on the model sphere.
    pub fn from_user_input(input: &str, earth_radius: f64) -> Option<Self> {
        if let Ok(code) = CrsCode::parse(input) {
            return Some(Self::from_code(code));
        }

        let projection = Projection::parse(input, earth_radius)?;
        let kind = if projection.is_geographic() {
            SrsKind::Geographic
        } else {
            SrsKind::Projected(projection)
        };
        Some(Self {
            name: input.trim().to_string(),
            datum: Datum::Sphere,
            kind,
        })
    }

    /// The reference system native to a projected area.
    pub fn from_area(area: &ProjectedArea) -> Self {
        let kind = if area.projection().is_geographic() {
            SrsKind::Geographic
        } else {
            SrsKind::Projected(area.projection().clone())
        };
        Self {
            name: area.definition().to_string(),
            datum: Datum::Sphere,
            kind,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn datum(&self) -> Datum {
        self.datum
    }

    pub fn kind(&self) -> &SrsKind {
        &self.kind
    }

    pub fn is_geographic(&self) -> bool {
        matches!(self.kind, SrsKind::Geographic)
    }

    pub fn projection(&self) -> Option<&Projection> {
        match &self.kind {
            SrsKind::Geographic => None,
            SrsKind::Projected(p) => Some(p),
        }
    }

    /// The geographic subset of this reference: same datum, no projection.
    pub fn geog_cs(&self) -> Self {
        Self::geographic(self.datum)
    }

    /// Same coordinate system, ignoring the name.
    pub fn is_same(&self, other: &SpatialReference) -> bool {
        self.datum == other.datum && self.kind == other.kind
    }

    /// Convert coordinates of this system to lon/lat degrees.
    pub fn to_geographic(&self, x: f64, y: f64) -> (f64, f64) {
        match &self.kind {
            SrsKind::Geographic => (x, y),
            SrsKind::Projected(p) => p.inverse(x, y),
        }
    }

    /// Convert lon/lat degrees to coordinates of this system.
    pub fn project_geographic(&self, lon: f64, lat: f64) -> (f64, f64) {
        match &self.kind {
            SrsKind::Geographic => (lon, lat),
            SrsKind::Projected(p) => p.forward(lon, lat),
        }
    }
}

/// Whether coordinates on two datums can be related without a datum shift.
///
/// The model sphere is treated as compatible with any datum.
pub fn datums_compatible(a: Datum, b: Datum) -> bool {
    a == b || a == Datum::Sphere || b == Datum::Sphere
}

/// A mapping of coordinates from one spatial reference to another.
#[derive(Debug, Clone)]
pub struct CoordinateTransformation {
    source: SpatialReference,
    target: SpatialReference,
}

impl CoordinateTransformation {
    /// Relate two references. Returns None when their datums differ.
    pub fn new(source: SpatialReference, target: SpatialReference) -> Option<Self> {
        if !datums_compatible(source.datum(), target.datum()) {
            return None;
        }
        Some(Self { source, target })
    }

    pub fn source(&self) -> &SpatialReference {
        &self.source
    }

    pub fn target(&self) -> &SpatialReference {
        &self.target
    }

    /// Transform one coordinate pair. Returns None if the result is not finite.
    pub fn transform(&self, x: f64, y: f64) -> Option<(f64, f64)> {
        let (lon, lat) = self.source.to_geographic(x, y);
        if !lon.is_finite() || !lat.is_finite() {
            return None;
        }
        let (tx, ty) = self.target.project_geographic(lon, lat);
        (tx.is_finite() && ty.is_finite()).then_some((tx, ty))
    }
}
