//! Regular sampling grids over projected areas.

use std::sync::Arc;

use crate::area::{GeoPoint, ProjectedArea};
use crate::definition::ProjectionClass;

/// Identity of a grid for reuse decisions: (area class, columns, rows).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridKey {
    pub class: ProjectionClass,
    pub columns: usize,
    pub rows: usize,
}

/// A fixed-resolution sampling of a projected area.
///
/// Grid point (0, 0) is the bottom-left corner of the area and
/// (columns - 1, rows - 1) the top-right one.
#[derive(Debug, Clone)]
pub struct Grid {
    area: Arc<ProjectedArea>,
    columns: usize,
    rows: usize,
}

impl Grid {
    /// Create a grid over an area. Returns None for zero columns or rows.
    pub fn new(area: Arc<ProjectedArea>, columns: usize, rows: usize) -> Option<Self> {
        if columns == 0 || rows == 0 {
            return None;
        }
        Some(Self {
            area,
            columns,
            rows,
        })
    }

    pub fn key(&self) -> GridKey {
        GridKey {
            class: self.area.class(),
            columns: self.columns,
            rows: self.rows,
        }
    }

    pub fn area(&self) -> &Arc<ProjectedArea> {
        &self.area
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Total number of grid points.
    pub fn len(&self) -> usize {
        self.columns * self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Distance between adjacent grid points in projected units (dx, dy).
    pub fn cell_size(&self) -> (f64, f64) {
        let bounds = self.area.xy_bounds();
        let steps_x = self.columns.saturating_sub(1).max(1) as f64;
        let steps_y = self.rows.saturating_sub(1).max(1) as f64;
        (bounds.width() / steps_x, bounds.height() / steps_y)
    }

    /// Projected coordinates of grid point (i, j).
    pub fn point_xy(&self, i: usize, j: usize) -> Option<(f64, f64)> {
        if i >= self.columns || j >= self.rows {
            return None;
        }
        let bounds = self.area.xy_bounds();
        let (dx, dy) = self.cell_size();
        Some((bounds.min_x + i as f64 * dx, bounds.min_y + j as f64 * dy))
    }

    /// Geographic coordinates of grid point (i, j).
    pub fn point_latlon(&self, i: usize, j: usize) -> Option<GeoPoint> {
        self.point_xy(i, j)
            .map(|(x, y)| self.area.to_latlon(x, y))
    }

    /// Fractional grid indices of a geographic point, or None if the point
    /// falls outside the grid.
    pub fn latlon_to_grid(&self, point: GeoPoint) -> Option<(f64, f64)> {
        let bounds = self.area.xy_bounds();
        let (x, y) = self.area.to_xy(point);
        let (dx, dy) = self.cell_size();

        let i = (x - bounds.min_x) / dx;
        let j = (y - bounds.min_y) / dy;

        let max_i = self.columns.saturating_sub(1) as f64;
        let max_j = self.rows.saturating_sub(1) as f64;
        let eps = 1e-9;
        if !(i >= -eps && i <= max_i + eps && j >= -eps && j <= max_j + eps) {
            return None;
        }
        Some((i.clamp(0.0, max_i), j.clamp(0.0, max_j)))
    }
}
