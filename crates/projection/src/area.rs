//! Projected areas: a projection plus a rectangular extent in that projection.

use export_common::bbox::{BboxParseError, BoundingBox};
use serde::{Deserialize, Serialize};

use crate::definition::{Projection, ProjectionClass};

/// Mean length of one degree of latitude on the model sphere.
pub const KM_PER_DEGREE: f64 = 111.195;

/// A geographic point in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lon: f64,
    pub lat: f64,
}

impl GeoPoint {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }
}

/// How the extent of an area is given.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AreaExtent {
    /// Bottom-left and top-right corners.
    Corners {
        bottom_left: GeoPoint,
        top_right: GeoPoint,
    },
    /// A center point with the area's width and height in kilometres.
    Center {
        center: GeoPoint,
        width_km: f64,
        height_km: f64,
    },
}

impl AreaExtent {
    /// Whether every coordinate and size of the extent is a finite number.
    pub fn is_finite(&self) -> bool {
        let values = match *self {
            AreaExtent::Corners {
                bottom_left,
                top_right,
            } => [bottom_left.lon, bottom_left.lat, top_right.lon, top_right.lat],
            AreaExtent::Center {
                center,
                width_km,
                height_km,
            } => [center.lon, center.lat, width_km, height_km],
        };
        values.iter().all(|v| v.is_finite())
    }

    /// Parse a corner list "lon1,lat1,lon2,lat2".
    pub fn from_corner_string(s: &str) -> Result<Self, BboxParseError> {
        let bbox = BoundingBox::from_corner_string(s)?;
        Ok(AreaExtent::Corners {
            bottom_left: GeoPoint::new(bbox.min_x, bbox.min_y),
            top_right: GeoPoint::new(bbox.max_x, bbox.max_y),
        })
    }
}

/// An immutable projection with a rectangular extent.
///
/// The extent is rectangular in projected coordinates; its geographic
/// corners are kept alongside.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedArea {
    definition: String,
    projection: Projection,
    bottom_left: GeoPoint,
    top_right: GeoPoint,
    xy_bounds: BoundingBox,
}

impl ProjectedArea {
    /// Build an area from a resolved projection and an extent.
    ///
    /// Returns None if the extent is empty or not finite in the projection.
    pub fn new(
        definition: impl Into<String>,
        projection: Projection,
        extent: &AreaExtent,
    ) -> Option<Self> {
        if !extent.is_finite() {
            return None;
        }

        let xy_bounds = match *extent {
            AreaExtent::Corners {
                bottom_left,
                top_right,
            } => {
                let (x1, y1) = projection.forward(bottom_left.lon, bottom_left.lat);
                let (x2, y2) = projection.forward(top_right.lon, top_right.lat);
                BoundingBox::new(x1, y1, x2, y2)
            }
            AreaExtent::Center {
                center,
                width_km,
                height_km,
            } => {
                let (cx, cy) = projection.forward(center.lon, center.lat);
                let (half_w, half_h) = if projection.is_geographic() {
                    let cos_lat = center.lat.to_radians().cos().max(1e-6);
                    (
                        width_km / (2.0 * KM_PER_DEGREE * cos_lat),
                        height_km / (2.0 * KM_PER_DEGREE),
                    )
                } else {
                    (width_km * 500.0, height_km * 500.0)
                };
                BoundingBox::new(cx - half_w, cy - half_h, cx + half_w, cy + half_h)
            }
        };

        let finite = [xy_bounds.min_x, xy_bounds.min_y, xy_bounds.max_x, xy_bounds.max_y]
            .iter()
            .all(|v| v.is_finite());
        if !finite || xy_bounds.width() <= 0.0 || xy_bounds.height() <= 0.0 {
            return None;
        }

        let (lon1, lat1) = projection.inverse(xy_bounds.min_x, xy_bounds.min_y);
        let (lon2, lat2) = projection.inverse(xy_bounds.max_x, xy_bounds.max_y);

        Some(Self {
            definition: definition.into(),
            projection,
            bottom_left: GeoPoint::new(lon1, lat1),
            top_right: GeoPoint::new(lon2, lat2),
            xy_bounds,
        })
    }

    /// Projection definition the area was built from, e.g. "stere,10,90,60".
    pub fn definition(&self) -> &str {
        &self.definition
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    pub fn class(&self) -> ProjectionClass {
        self.projection.class()
    }

    pub fn bottom_left(&self) -> GeoPoint {
        self.bottom_left
    }

    pub fn top_right(&self) -> GeoPoint {
        self.top_right
    }

    /// Extent in projected coordinates.
    pub fn xy_bounds(&self) -> BoundingBox {
        self.xy_bounds
    }

    /// Project a geographic point.
    pub fn to_xy(&self, point: GeoPoint) -> (f64, f64) {
        self.projection.forward(point.lon, point.lat)
    }

    /// Unproject projected coordinates.
    pub fn to_latlon(&self, x: f64, y: f64) -> GeoPoint {
        let (lon, lat) = self.projection.inverse(x, y);
        GeoPoint::new(lon, lat)
    }

    /// Check whether a geographic point falls inside the area.
    pub fn contains(&self, point: GeoPoint) -> bool {
        let (x, y) = self.to_xy(point);
        self.xy_bounds.contains_point(x, y)
    }

    /// Width along the bottom edge in kilometres.
    pub fn width_km(&self) -> f64 {
        if self.projection.is_geographic() {
            let (_, mid_lat) = self.xy_bounds.center();
            self.xy_bounds.width() * KM_PER_DEGREE * mid_lat.to_radians().cos()
        } else {
            self.xy_bounds.width() / 1000.0
        }
    }

    /// Height in kilometres.
    pub fn height_km(&self) -> f64 {
        if self.projection.is_geographic() {
            self.xy_bounds.height() * KM_PER_DEGREE
        } else {
            self.xy_bounds.height() / 1000.0
        }
    }
}
