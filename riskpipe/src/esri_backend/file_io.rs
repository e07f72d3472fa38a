//! File I/O for ESRI binary float grids
//!
//! An ESRI grid is a `.hdr` text header plus a `.flt` file of f32 cells.
//! [`EsriFile`] locates and validates the pair; [`SeekingExposure`] reads
//! single cells without keeping a handle open between reads.

use std::fs::File;
use std::io::{BufWriter, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use riskpipe_core::format::constants::{CELL_SIZE_BYTES, DATA_EXTENSION, HEADER_EXTENSION};
use riskpipe_core::validation::bounds::expected_data_len;
use riskpipe_core::validation::{cell_byte_range, validate_data_len};
use riskpipe_core::{
    ExposureReader, GridSource, RasterFileDefinition, RasterHeader, RiskError, Site,
};
use tracing::info;

use crate::{Error, Result};

/// Header and data file pair of an ESRI binary grid
#[derive(Debug, Clone, PartialEq)]
pub struct EsriFile {
    pub header: RasterHeader,
    pub header_path: PathBuf,
    pub data_path: PathBuf,
}

impl EsriFile {
    /// Open a grid from its header; the data file is the `.flt` sibling
    pub fn open<P: AsRef<Path>>(header_path: P) -> Result<Self> {
        let header_path = header_path.as_ref();
        Self::open_with_data(header_path, header_path.with_extension(DATA_EXTENSION))
    }

    /// Open a grid whose data file does not follow the naming convention
    pub fn open_with_data<P: AsRef<Path>, Q: AsRef<Path>>(header_path: P, data_path: Q) -> Result<Self> {
        let header_path = header_path.as_ref().to_path_buf();
        let data_path = data_path.as_ref().to_path_buf();

        let text = std::fs::read_to_string(&header_path).map_err(Error::io(&header_path))?;
        let header = RasterHeader::parse(&text)?;

        let file = Self {
            header,
            header_path,
            data_path,
        };
        file.validate_data()?;

        info!(
            header = %file.header_path.display(),
            ncols = file.header.ncols,
            nrows = file.header.nrows,
            "opened exposure grid"
        );
        Ok(file)
    }

    /// Check that the data file holds exactly one cell per grid position
    pub fn validate_data(&self) -> Result<()> {
        let metadata = std::fs::metadata(&self.data_path).map_err(Error::io(&self.data_path))?;
        let byte_len = usize::try_from(metadata.len()).map_err(|_| RiskError::InvalidGrid)?;
        validate_data_len(byte_len, &self.header.grid())?;
        Ok(())
    }

    /// Geometry for cell lookups
    pub fn definition(&self) -> Result<RasterFileDefinition> {
        Ok(self.header.to_definition()?)
    }

    /// Write a grid as `<stem>.hdr` + `<stem>.flt`
    ///
    /// `values` are row-major with the northern row first and are stored
    /// in the header's byte order.
    pub fn write_grid<P: AsRef<Path>>(path: P, header: &RasterHeader, values: &[f32]) -> Result<Self> {
        let path = path.as_ref();
        let header_path = path.with_extension(HEADER_EXTENSION);
        let data_path = path.with_extension(DATA_EXTENSION);

        validate_data_len(values.len() * CELL_SIZE_BYTES, &header.grid())?;

        std::fs::write(&header_path, header.to_text()).map_err(Error::io(&header_path))?;

        let file = File::create(&data_path).map_err(Error::io(&data_path))?;
        let mut writer = BufWriter::new(file);
        if header.byte_order.is_native() {
            writer
                .write_all(bytemuck::cast_slice(values))
                .map_err(Error::io(&data_path))?;
        } else {
            for &value in values {
                writer
                    .write_all(&header.byte_order.encode(value))
                    .map_err(Error::io(&data_path))?;
            }
        }
        writer.flush().map_err(Error::io(&data_path))?;

        info!(
            data = %data_path.display(),
            cells = values.len(),
            byte_order = %header.byte_order,
            "wrote exposure grid"
        );

        Ok(Self {
            header: *header,
            header_path,
            data_path,
        })
    }

    /// Exposure source that opens the data file for each read
    pub fn seeking_exposure(&self) -> Result<SeekingExposure> {
        Ok(SeekingExposure::new(&self.data_path, self.definition()?))
    }

    /// Exposure source backed by a memory map of the data file
    #[cfg(feature = "mmap")]
    pub fn mmap_exposure(&self) -> Result<super::MmapExposure> {
        super::MmapExposure::from_file(&self.data_path, self.definition()?)
    }
}

/// Exposure source that seeks to the requested cell on every read
///
/// The file handle lives only for the duration of one read, so any number
/// of threads can read concurrently without sharing a cursor.
#[derive(Debug, Clone)]
pub struct SeekingExposure {
    data_path: PathBuf,
    definition: RasterFileDefinition,
}

impl SeekingExposure {
    pub fn new<P: AsRef<Path>>(data_path: P, definition: RasterFileDefinition) -> Self {
        Self {
            data_path: data_path.as_ref().to_path_buf(),
            definition,
        }
    }

    pub fn definition(&self) -> &RasterFileDefinition {
        &self.definition
    }

    fn read_cell(&self, offset: usize) -> riskpipe_core::Result<f32> {
        let byte_len = expected_data_len(self.definition.grid())?;
        let range = cell_byte_range(offset, byte_len)?;

        // Scoped to this read; dropped on every return path
        let mut file = File::open(&self.data_path).map_err(|_| RiskError::ReadFailed)?;
        file.seek(SeekFrom::Start(range.start as u64))
            .map_err(|_| RiskError::ReadFailed)?;

        let mut bytes = [0u8; CELL_SIZE_BYTES];
        file.read_exact(&mut bytes)
            .map_err(|_| RiskError::ReadFailed)?;

        Ok(self.definition.byte_order().decode(bytes))
    }
}

impl ExposureReader for SeekingExposure {
    fn read_at(&self, site: &Site) -> riskpipe_core::Result<f64> {
        let offset = self.definition.offset_of(site)?;
        self.read_cell(offset).map(f64::from)
    }
}

impl GridSource for SeekingExposure {
    fn definition(&self) -> &RasterFileDefinition {
        &self.definition
    }
}
