//! riskpipe - exposure raster access and pipeline gating
//!
//! This library reads exposure values from ESRI binary float grids and
//! gates risk computations with composable specifications over a typed
//! pipe of intermediate values.
//!
//! ## Architecture
//!
//! riskpipe follows a definitions/implementation separation:
//!
//! - **riskpipe-core**: data model, grid geometry, header format, pipe and
//!   specifications (no I/O)
//! - **riskpipe**: file access, memory mapping, command execution and
//!   configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use riskpipe::{AssetReader, ExposureConfig, Site};
//!
//! fn example() -> riskpipe::Result<()> {
//!     let reader = ExposureConfig::new("exposure.hdr").open_reader()?;
//!
//!     let asset = reader.read_at(&Site::new(10.25, 45.5))?;
//!     if asset.is_computable() {
//!         println!("exposure at {} = {}", asset.defined_at(), asset.value());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **mmap**: memory-mapped grid access (default)
//! - **serde**: JSON configuration and serializable core types (default)
//! - **cli**: command line example dependencies

// Re-export core abstractions and format definitions
pub use riskpipe_core::{
    // Data model
    Asset, DiscreteVulnerabilityFunction, Site,
    // Grid and format
    ByteOrder, CellIndex, GridDefinition, GridValues, RasterFileDefinition, RasterHeader,
    // Collaborator traits
    AssetReader, CommandRunner, ExposureReader, GridSource,
    // Pipe and gating
    AllOf, AnyOf, ExposureAsset, IsAssetComputable, IsHazardImlInRange, MeanFunction, MeanIml,
    Pipe, PipeKey, PipeSlot, Specification,
    // Core errors
    RiskError,
};

pub mod asset_reader;
pub mod command;
#[cfg(feature = "serde")]
pub mod config;
pub mod error;
pub mod esri_backend;

pub use asset_reader::EsriBinaryFileAssetReader;
pub use command::ShellCommandRunner;
#[cfg(feature = "serde")]
pub use config::{AccessMode, ExposureConfig};
pub use error::{Error, Result};
#[cfg(feature = "mmap")]
pub use esri_backend::MmapExposure;
pub use esri_backend::{EsriFile, SeekingExposure};
