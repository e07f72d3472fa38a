//! Raster format definitions for ESRI binary float grids
//!
//! Pure data structures describing grid geometry and the text header that
//! accompanies a binary grid file. No I/O happens here.

pub mod constants;
pub mod grid;
pub mod header;

pub use grid::{CellIndex, GridDefinition, RasterFileDefinition};
pub use header::{ByteOrder, RasterHeader, Registration};
