//! Validation utilities for raster data and headers
//!
//! Pure functions over sizes and text with no I/O dependencies.

pub mod bounds;
pub mod parsing;

pub use bounds::{cell_byte_range, validate_data_len};
pub use parsing::{parse_coordinate, parse_count};
