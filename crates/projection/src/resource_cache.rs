//! Per-query cache of projection resources.
//!
//! A `ResourceCache` lives for exactly one query. It owns every projected
//! area, reference clone and coordinate transformation created during the
//! query and releases them together when it is dropped. Only the sampling
//! grid is replaced during the cache's lifetime: at most one grid is current,
//! and asking for a different resolution discards it.
//!
//! The cache is not meant for concurrent use; parallel sub-queries each own
//! their own instance.

use std::sync::Arc;

use export_common::{ExportError, ExportResult};
use serde::Serialize;
use tracing::{debug, warn};

use crate::area::{AreaExtent, GeoPoint, ProjectedArea};
use crate::config::GisConfig;
use crate::gis::{BuiltinGis, GisBackend};
use crate::grid::{Grid, GridKey};
use crate::pool::{Pool, Slot};
use crate::srs::{CoordinateTransformation, SpatialReference};

/// Counters describing what a cache has produced so far.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ResourceStats {
    pub areas: usize,
    pub spatial_references: usize,
    pub transformations: usize,
    pub grid_builds: u64,
    pub grid_reuses: u64,
}

/// Owns and reuses projection resources for the duration of one query.
pub struct ResourceCache<G = BuiltinGis> {
    gis: G,
    areas: Pool<ProjectedArea>,
    grid: Slot<Arc<Grid>>,
    spatial_references: Pool<SpatialReference>,
    transformations: Pool<CoordinateTransformation>,
    geometry_srs: Slot<Arc<SpatialReference>>,
    grid_builds: u64,
    grid_reuses: u64,
}

impl ResourceCache<BuiltinGis> {
    /// Create a cache backed by the built-in GIS backend.
    pub fn new() -> Self {
        Self::with_backend(BuiltinGis::default())
    }

    /// Create a cache backed by a built-in backend with the given settings.
    ///
    /// Fails with a Configuration error if the settings do not validate.
    pub fn from_config(config: GisConfig) -> ExportResult<Self> {
        if let Err(message) = config.validate() {
            return Err(ExportError::configuration(
                "from_config",
                config.earth_radius_m.to_string(),
                message,
            ));
        }
        Ok(Self::with_backend(BuiltinGis::new(config)))
    }
}

impl Default for ResourceCache<BuiltinGis> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: GisBackend> ResourceCache<G> {
    pub fn with_backend(gis: G) -> Self {
        Self {
            gis,
            areas: Pool::new(),
            grid: Slot::new(),
            spatial_references: Pool::new(),
            transformations: Pool::new(),
            geometry_srs: Slot::new(),
            grid_builds: 0,
            grid_reuses: 0,
        }
    }

    pub fn backend(&self) -> &G {
        &self.gis
    }

    /// Create an area from a definition with embedded corners, e.g.
    /// "stere,10,90,60:6,51.3,49,70.2". The new area becomes current.
    pub fn create_area(&mut self, spec: &str) -> ExportResult<Arc<ProjectedArea>> {
        const OP: &str = "create_area";

        let Some((projection, corners)) = spec.split_once(':') else {
            return Err(ExportError::configuration(OP, spec, "missing corner list"));
        };
        let extent = AreaExtent::from_corner_string(corners)
            .map_err(|e| ExportError::configuration(OP, spec, e.to_string()))?;

        self.register_area(OP, spec, projection, &extent)
    }

    /// Create an area around a center point. The new area becomes current.
    pub fn create_area_centered(
        &mut self,
        projection: &str,
        center: GeoPoint,
        width_km: f64,
        height_km: f64,
    ) -> ExportResult<Arc<ProjectedArea>> {
        let extent = AreaExtent::Center {
            center,
            width_km,
            height_km,
        };
        self.register_area("create_area_centered", projection, projection, &extent)
    }

    fn register_area(
        &mut self,
        operation: &'static str,
        spec: &str,
        projection: &str,
        extent: &AreaExtent,
    ) -> ExportResult<Arc<ProjectedArea>> {
        let Some(area) = self.gis.create_area(projection, extent) else {
            warn!(spec = %spec, "Unresolvable projection");
            return Err(ExportError::configuration(
                operation,
                spec,
                "projection cannot be resolved",
            ));
        };

        debug!(
            class = %area.class(),
            width_km = area.width_km(),
            height_km = area.height_km(),
            "Created projected area"
        );
        Ok(self.areas.insert(area))
    }

    /// The most recently created area.
    pub fn area(&self) -> Option<Arc<ProjectedArea>> {
        self.areas.last().cloned()
    }

    /// Return a grid of `columns` x `rows` over `area`.
    ///
    /// The current grid is reused when its (area class, columns, rows)
    /// matches; otherwise it is discarded and a new one becomes current.
    /// Callers still holding the discarded grid keep it alive.
    pub fn get_grid(
        &mut self,
        area: &Arc<ProjectedArea>,
        columns: usize,
        rows: usize,
    ) -> ExportResult<Arc<Grid>> {
        let key = GridKey {
            class: area.class(),
            columns,
            rows,
        };

        if let Some(grid) = self.grid.get() {
            if grid.key() == key {
                self.grid_reuses += 1;
                return Ok(Arc::clone(grid));
            }
        }

        if let Some(previous) = self.grid.invalidate() {
            debug!(
                columns = previous.columns(),
                rows = previous.rows(),
                "Discarding current grid"
            );
        }

        let Some(grid) = self.gis.create_grid(area, columns, rows) else {
            return Err(ExportError::internal(
                "get_grid",
                format!("{} {}x{}", key.class, columns, rows),
                "grid construction returned no grid",
            ));
        };

        debug!(class = %key.class, columns, rows, "Built grid");
        let grid = Arc::new(grid);
        self.grid.replace(Arc::clone(&grid));
        self.grid_builds += 1;
        Ok(grid)
    }

    /// The current grid, if any.
    pub fn current_grid(&self) -> Option<&Arc<Grid>> {
        self.grid.get()
    }

    /// Independently owned copy of a reference, kept for the cache's lifetime.
    pub fn clone_cs(&mut self, srs: &SpatialReference) -> Option<Arc<SpatialReference>> {
        let clone = self.gis.clone_srs(srs)?;
        debug!(srs = %clone.name(), "Cloned spatial reference");
        Some(self.spatial_references.insert(clone))
    }

    /// Copy of the geographic part of a reference, kept for the cache's lifetime.
    pub fn clone_geog_cs(&mut self, srs: &SpatialReference) -> Option<Arc<SpatialReference>> {
        let clone = self.gis.clone_geog_cs(srs)?;
        debug!(srs = %clone.name(), "Cloned geographic reference");
        Some(self.spatial_references.insert(clone))
    }

    /// Build a transformation from `from` to `to`.
    ///
    /// Returns `Ok(None)` when the references cannot be related. With
    /// `is_geometry_srs` set, a successful transformation also makes a clone
    /// of `to` the geometry reference; failing to clone it is an error even
    /// though the transformation itself was built.
    pub fn get_coordinate_transformation(
        &mut self,
        from: &SpatialReference,
        to: &SpatialReference,
        is_geometry_srs: bool,
    ) -> ExportResult<Option<Arc<CoordinateTransformation>>> {
        let Some(transformation) = self.gis.create_transformation(from, to) else {
            debug!(from = %from.name(), to = %to.name(), "References cannot be related");
            return Ok(None);
        };
        let transformation = self.transformations.insert(transformation);

        if is_geometry_srs {
            let Some(clone) = self.gis.clone_srs(to) else {
                warn!(srs = %to.name(), "Failed to clone geometry reference");
                return Err(ExportError::configuration(
                    "get_coordinate_transformation",
                    to.name(),
                    "failed to clone geometry spatial reference",
                ));
            };
            let clone = self.spatial_references.insert(clone);
            self.geometry_srs.replace(clone);
        }

        debug!(
            from = %from.name(),
            to = %to.name(),
            is_geometry_srs,
            "Created coordinate transformation"
        );
        Ok(Some(transformation))
    }

    /// The reference output geometries are expressed in, if one was set.
    pub fn geometry_srs(&self) -> Option<&Arc<SpatialReference>> {
        self.geometry_srs.get()
    }

    pub fn stats(&self) -> ResourceStats {
        ResourceStats {
            areas: self.areas.len(),
            spatial_references: self.spatial_references.len(),
            transformations: self.transformations.len(),
            grid_builds: self.grid_builds,
            grid_reuses: self.grid_reuses,
        }
    }
}
