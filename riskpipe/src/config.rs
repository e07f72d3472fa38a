//! JSON configuration for exposure sources

use std::path::{Path, PathBuf};

use riskpipe_core::format::constants::DATA_EXTENSION;
use riskpipe_core::GridSource;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{EsriBinaryFileAssetReader, EsriFile, Error, Result};

/// How cell data is accessed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessMode {
    /// Memory-map the data file once
    #[default]
    Mmap,
    /// Open and seek the data file on every read
    Seek,
}

/// Exposure source selected by a caller
pub type DynExposure = Box<dyn GridSource + Send + Sync>;

/// Where an exposure grid lives and how to read it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExposureConfig {
    /// Path of the `.hdr` header file
    pub header: PathBuf,
    /// Data file, defaults to the header path with a `.flt` extension
    #[serde(default)]
    pub data: Option<PathBuf>,
    #[serde(default)]
    pub access: AccessMode,
    /// Sentinel to use instead of the header's `NODATA_value`
    #[serde(default)]
    pub no_data_override: Option<f64>,
}

impl ExposureConfig {
    pub fn new<P: AsRef<Path>>(header: P) -> Self {
        Self {
            header: header.as_ref().to_path_buf(),
            data: None,
            access: AccessMode::default(),
            no_data_override: None,
        }
    }

    /// Set an explicit data file path
    pub fn with_data_path<P: AsRef<Path>>(mut self, data: P) -> Self {
        self.data = Some(data.as_ref().to_path_buf());
        self
    }

    /// Set the access mode
    pub fn with_access(mut self, access: AccessMode) -> Self {
        self.access = access;
        self
    }

    /// Override the header's no-data sentinel
    pub fn with_no_data_override(mut self, no_data: f64) -> Self {
        self.no_data_override = Some(no_data);
        self
    }

    /// Resolved data file path
    pub fn data_path(&self) -> PathBuf {
        self.data
            .clone()
            .unwrap_or_else(|| self.header.with_extension(DATA_EXTENSION))
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load from a JSON file; relative grid paths resolve against its directory
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(Error::io(path))?;
        let mut config = Self::from_json_str(&text)?;

        if let Some(base) = path.parent() {
            config.header = base.join(&config.header);
            config.data = config.data.map(|data| base.join(data));
        }

        info!(config = %path.display(), header = %config.header.display(), "loaded exposure config");
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Open the grid, applying the sentinel override
    pub fn open_file(&self) -> Result<EsriFile> {
        let mut file = EsriFile::open_with_data(&self.header, self.data_path())?;
        if let Some(no_data) = self.no_data_override {
            file.header = file.header.with_nodata_value(no_data);
        }
        Ok(file)
    }

    /// Open the configured exposure source
    pub fn open_exposure(&self) -> Result<DynExposure> {
        self.exposure_for(&self.open_file()?)
    }

    /// Build an asset reader for the configured grid
    pub fn open_reader(&self) -> Result<EsriBinaryFileAssetReader<DynExposure>> {
        Ok(EsriBinaryFileAssetReader::from_source(self.open_exposure()?))
    }

    fn exposure_for(&self, file: &EsriFile) -> Result<DynExposure> {
        match self.access {
            #[cfg(feature = "mmap")]
            AccessMode::Mmap => Ok(Box::new(file.mmap_exposure()?)),
            #[cfg(not(feature = "mmap"))]
            AccessMode::Mmap => Err(Error::Config(
                "memory-mapped access requires the `mmap` feature".to_string(),
            )),
            AccessMode::Seek => Ok(Box::new(file.seeking_exposure()?)),
        }
    }
}
