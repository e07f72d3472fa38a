//! Grid geometry: mapping geographic sites onto raster cells

use crate::format::constants::DEFAULT_NO_DATA;
use crate::format::header::ByteOrder;
use crate::{Result, RiskError, Site};

/// Relative slack, in cells, within which an offset counts as a cell boundary
const BOUNDARY_TOLERANCE: f64 = 1e-9;

/// Raster dimensions plus the sentinel marking cells without data
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridDefinition {
    columns: usize,
    rows: usize,
    no_data_value: f64,
}

impl GridDefinition {
    pub const fn new(columns: usize, rows: usize, no_data_value: f64) -> Self {
        Self {
            columns,
            rows,
            no_data_value,
        }
    }

    pub const fn columns(&self) -> usize {
        self.columns
    }

    pub const fn rows(&self) -> usize {
        self.rows
    }

    pub const fn no_data_value(&self) -> f64 {
        self.no_data_value
    }

    /// Total number of cells, `None` on overflow
    pub const fn cell_count(&self) -> Option<usize> {
        self.columns.checked_mul(self.rows)
    }

    /// Whether `value` is the no-data sentinel
    ///
    /// Exact comparison: the sentinel is a stored constant, not a measured
    /// quantity. A NaN sentinel matches NaN cells.
    pub fn is_no_data(&self, value: f64) -> bool {
        value == self.no_data_value || (value.is_nan() && self.no_data_value.is_nan())
    }
}

impl Default for GridDefinition {
    fn default() -> Self {
        Self::new(0, 0, DEFAULT_NO_DATA)
    }
}

/// Position of a cell; row 0 is the northernmost row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellIndex {
    pub row: usize,
    pub col: usize,
}

impl CellIndex {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row-major offset of this cell in a grid with `columns` columns,
    /// `None` on overflow
    pub const fn offset(&self, columns: usize) -> Option<usize> {
        match self.row.checked_mul(columns) {
            Some(start) => start.checked_add(self.col),
            None => None,
        }
    }
}

/// Geometry of one binary grid file: origin, cell size, grid and byte order
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RasterFileDefinition {
    lower_left: Site,
    cell_size: f64,
    grid: GridDefinition,
    byte_order: ByteOrder,
}

impl RasterFileDefinition {
    /// Create a definition, rejecting non-positive or non-finite cell sizes
    /// and grids whose cell count overflows
    pub fn new(lower_left: Site, cell_size: f64, grid: GridDefinition) -> Result<Self> {
        if !(cell_size.is_finite() && cell_size > 0.0) {
            return Err(RiskError::InvalidCellSize);
        }
        if grid.cell_count().is_none() {
            return Err(RiskError::InvalidGrid);
        }
        Ok(Self {
            lower_left,
            cell_size,
            grid,
            byte_order: ByteOrder::default(),
        })
    }

    /// Set the byte order of the stored cells
    pub fn with_byte_order(mut self, byte_order: ByteOrder) -> Self {
        self.byte_order = byte_order;
        self
    }

    pub const fn lower_left(&self) -> Site {
        self.lower_left
    }

    pub const fn cell_size(&self) -> f64 {
        self.cell_size
    }

    pub const fn grid(&self) -> &GridDefinition {
        &self.grid
    }

    pub const fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    /// Resolve a site to the cell enclosing it
    ///
    /// Interior boundaries belong to the cell east/north of them; the outer
    /// east and north edges belong to the last column and first row. Offsets
    /// within a relative `1e-9` of a boundary count as on it, so decimal
    /// cell sizes such as `0.1` align the same way as exact ones.
    /// Returns [`RiskError::OutOfGrid`] for anything outside the coverage.
    pub fn resolve(&self, site: &Site) -> Result<CellIndex> {
        let x = (site.longitude() - self.lower_left.longitude()) / self.cell_size;
        let y = (site.latitude() - self.lower_left.latitude()) / self.cell_size;

        let col = axis_index(x, self.grid.columns)?;
        let from_south = axis_index(y, self.grid.rows)?;

        Ok(CellIndex::new(self.grid.rows - 1 - from_south, col))
    }

    /// Row-major cell offset for a site
    pub fn offset_of(&self, site: &Site) -> Result<usize> {
        let cell = self.resolve(site)?;
        cell.offset(self.grid.columns).ok_or(RiskError::InvalidGrid)
    }
}

/// Tolerance around the boundary at `boundary` cells from the origin
fn slack(boundary: f64) -> f64 {
    BOUNDARY_TOLERANCE * boundary.max(1.0)
}

/// Cell index along one axis for an offset measured in cells
fn axis_index(offset: f64, count: usize) -> Result<usize> {
    let limit = count as f64;
    // NaN fails the range check
    if count == 0 || !(offset >= -slack(0.0) && offset <= limit + slack(limit)) {
        return Err(RiskError::OutOfGrid);
    }

    // Non-negative from here, so truncation is floor
    let offset = offset.max(0.0);
    let nearest = (offset + 0.5) as usize;
    let distance = if offset > nearest as f64 {
        offset - nearest as f64
    } else {
        nearest as f64 - offset
    };
    let index = if distance <= slack(nearest as f64) {
        nearest
    } else {
        offset as usize
    };
    Ok(index.min(count - 1))
}
