//! In-memory exposure grids

use alloc::vec::Vec;

use crate::validation::bounds::expected_data_len;
use crate::format::constants::CELL_SIZE_BYTES;
use crate::{ExposureReader, GridSource, RasterFileDefinition, Result, RiskError, Site};

/// Exposure values held in memory, row-major with the northern row first
#[derive(Debug, Clone, PartialEq)]
pub struct GridValues {
    definition: RasterFileDefinition,
    values: Vec<f64>,
}

impl GridValues {
    /// Wrap `values`, which must hold exactly one value per grid cell
    pub fn new(definition: RasterFileDefinition, values: Vec<f64>) -> Result<Self> {
        let expected = expected_data_len(definition.grid())? / CELL_SIZE_BYTES;
        if values.len() != expected {
            return Err(RiskError::InsufficientBuffer);
        }
        Ok(Self { definition, values })
    }

    /// Grid of `value` everywhere
    pub fn filled(definition: RasterFileDefinition, value: f64) -> Result<Self> {
        let cells = definition
            .grid()
            .cell_count()
            .ok_or(RiskError::InvalidGrid)?;
        Self::new(definition, alloc::vec![value; cells])
    }

    pub fn definition(&self) -> &RasterFileDefinition {
        &self.definition
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Overwrite the cell enclosing `site`
    pub fn set_at(&mut self, site: &Site, value: f64) -> Result<()> {
        let offset = self.definition.offset_of(site)?;
        self.values[offset] = value;
        Ok(())
    }
}

impl ExposureReader for GridValues {
    fn read_at(&self, site: &Site) -> Result<f64> {
        let offset = self.definition.offset_of(site)?;
        self.values
            .get(offset)
            .copied()
            .ok_or(RiskError::InsufficientBuffer)
    }
}

impl GridSource for GridValues {
    fn definition(&self) -> &RasterFileDefinition {
        &self.definition
    }
}
