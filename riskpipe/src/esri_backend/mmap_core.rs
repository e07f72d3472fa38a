//! Memory-mapped exposure grids

use std::{fs::File, path::Path};

use memmap2::{Mmap, MmapOptions};
use riskpipe_core::validation::{cell_byte_range, validate_data_len};
use riskpipe_core::{ExposureReader, GridSource, RasterFileDefinition, RiskError, Site};
use tracing::info;

use crate::{Error, Result};

/// Exposure source over a memory-mapped `.flt` file
///
/// The map is read-only and never mutated after construction, so reads
/// from many threads need no locking.
pub struct MmapExposure {
    mmap: Mmap,
    definition: RasterFileDefinition,
}

impl MmapExposure {
    /// Map `data_path` and check its size against the definition's grid
    pub fn from_file<P: AsRef<Path>>(data_path: P, definition: RasterFileDefinition) -> Result<Self> {
        let path = data_path.as_ref();
        let file = File::open(path).map_err(Error::io(path))?;

        // SAFETY: Read-only mapping; the size is validated before any cell is read
        let mmap = unsafe { MmapOptions::new().map(&file).map_err(Error::io(path))? };

        validate_data_len(mmap.len(), definition.grid())?;

        info!(
            path = %path.display(),
            bytes = mmap.len(),
            native_order = definition.byte_order().is_native(),
            "mapped exposure data"
        );

        Ok(Self { mmap, definition })
    }

    pub fn definition(&self) -> &RasterFileDefinition {
        &self.definition
    }

    /// All cells as a typed slice, when stored in host byte order
    pub fn cells(&self) -> Option<&[f32]> {
        if !self.definition.byte_order().is_native() {
            return None;
        }
        bytemuck::try_cast_slice(&self.mmap[..]).ok()
    }

    /// Cell at a row-major offset
    pub fn cell(&self, offset: usize) -> riskpipe_core::Result<f32> {
        if let Some(cells) = self.cells() {
            return cells
                .get(offset)
                .copied()
                .ok_or(RiskError::InsufficientBuffer);
        }

        let range = cell_byte_range(offset, self.mmap.len())?;
        let bytes: [u8; 4] = self.mmap[range]
            .try_into()
            .map_err(|_| RiskError::InsufficientBuffer)?;
        Ok(self.definition.byte_order().decode(bytes))
    }
}

impl ExposureReader for MmapExposure {
    fn read_at(&self, site: &Site) -> riskpipe_core::Result<f64> {
        let offset = self.definition.offset_of(site)?;
        self.cell(offset).map(f64::from)
    }
}

impl GridSource for MmapExposure {
    fn definition(&self) -> &RasterFileDefinition {
        &self.definition
    }
}
