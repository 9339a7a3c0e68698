//! GIS capabilities the resource cache builds on.
//!
//! The cache never does geometry itself. It asks a [`ProjectionFactory`] for
//! areas and grids and a [`CrsService`] for reference clones and
//! transformations. Each operation signals failure with `None`.

use std::sync::Arc;

use tracing::debug;

use crate::area::{AreaExtent, ProjectedArea};
use crate::config::GisConfig;
use crate::definition::Projection;
use crate::grid::Grid;
use crate::srs::{CoordinateTransformation, SpatialReference};

/// Builds projected areas and grids.
pub trait ProjectionFactory {
    /// Resolve a projection definition over an extent.
    fn create_area(&self, projection: &str, extent: &AreaExtent) -> Option<ProjectedArea>;

    /// Sample an area at a fixed resolution.
    fn create_grid(&self, area: &Arc<ProjectedArea>, columns: usize, rows: usize)
        -> Option<Grid>;
}

/// Clones spatial references and relates them to each other.
pub trait CrsService {
    /// Full, independently owned copy of a reference.
    fn clone_srs(&self, srs: &SpatialReference) -> Option<SpatialReference>;

    /// Copy of the geographic part of a reference.
    fn clone_geog_cs(&self, srs: &SpatialReference) -> Option<SpatialReference>;

    /// Transformation from `from` to `to`, if the two can be related.
    fn create_transformation(
        &self,
        from: &SpatialReference,
        to: &SpatialReference,
    ) -> Option<CoordinateTransformation>;
}

/// Both GIS capabilities together.
pub trait GisBackend: ProjectionFactory + CrsService {}

impl<T: ProjectionFactory + CrsService> GisBackend for T {}

/// Spherical-earth GIS backend implemented in this crate.
#[derive(Debug, Clone, Default)]
pub struct BuiltinGis {
    config: GisConfig,
}

impl BuiltinGis {
    pub fn new(config: GisConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GisConfig {
        &self.config
    }
}

impl ProjectionFactory for BuiltinGis {
    fn create_area(&self, projection: &str, extent: &AreaExtent) -> Option<ProjectedArea> {
        let Some(resolved) = Projection::parse(projection, self.config.earth_radius_m) else {
            debug!(projection = %projection, "Unknown projection definition");
            return None;
        };
        ProjectedArea::new(projection.trim(), resolved, extent)
    }

    fn create_grid(
        &self,
        area: &Arc<ProjectedArea>,
        columns: usize,
        rows: usize,
    ) -> Option<Grid> {
        Grid::new(Arc::clone(area), columns, rows)
    }
}

impl CrsService for BuiltinGis {
    fn clone_srs(&self, srs: &SpatialReference) -> Option<SpatialReference> {
        Some(srs.clone())
    }

    fn clone_geog_cs(&self, srs: &SpatialReference) -> Option<SpatialReference> {
        Some(srs.geog_cs())
    }

    fn create_transformation(
        &self,
        from: &SpatialReference,
        to: &SpatialReference,
    ) -> Option<CoordinateTransformation> {
        CoordinateTransformation::new(from.clone(), to.clone())
    }
}
