//! Projection resources for streaming forecast data into output grids.
//!
//! Areas, grids, spatial references and coordinate transformations are
//! produced through a [`GisBackend`] and owned by a per-query
//! [`ResourceCache`]. Projection math is implemented in-crate on a sphere.

pub mod area;
pub mod config;
pub mod definition;
pub mod gis;
pub mod grid;
pub mod lambert;
pub mod mercator;
pub mod polar;
pub mod pool;
pub mod resource_cache;
pub mod srs;

pub use area::{AreaExtent, GeoPoint, ProjectedArea};
pub use config::GisConfig;
pub use definition::{Projection, ProjectionClass};
pub use gis::{BuiltinGis, CrsService, GisBackend, ProjectionFactory};
pub use grid::{Grid, GridKey};
pub use lambert::LambertConformal;
pub use mercator::Mercator;
pub use polar::PolarStereographic;
pub use pool::{Pool, Slot};
pub use resource_cache::{ResourceCache, ResourceStats};
pub use srs::{CoordinateTransformation, SpatialReference, SrsKind};
