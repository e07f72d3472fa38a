//! Size and range validation for binary cell data

use core::ops::Range;

use crate::format::constants::CELL_SIZE_BYTES;
use crate::{GridDefinition, Result, RiskError};

/// Expected data length in bytes for a grid
pub const fn expected_data_len(grid: &GridDefinition) -> Result<usize> {
    match grid.cell_count() {
        Some(cells) => match cells.checked_mul(CELL_SIZE_BYTES) {
            Some(len) => Ok(len),
            None => Err(RiskError::InvalidGrid),
        },
        None => Err(RiskError::InvalidGrid),
    }
}

/// Validate that a data buffer holds exactly one f32 per grid cell
pub const fn validate_data_len(byte_len: usize, grid: &GridDefinition) -> Result<()> {
    match expected_data_len(grid) {
        Ok(expected) if expected == byte_len => Ok(()),
        Ok(_) => Err(RiskError::InsufficientBuffer),
        Err(err) => Err(err),
    }
}

/// Byte range of the cell at `offset`, checked against `byte_len`
pub fn cell_byte_range(offset: usize, byte_len: usize) -> Result<Range<usize>> {
    let start = offset
        .checked_mul(CELL_SIZE_BYTES)
        .ok_or(RiskError::OutOfGrid)?;
    let end = start
        .checked_add(CELL_SIZE_BYTES)
        .ok_or(RiskError::OutOfGrid)?;

    if end > byte_len {
        return Err(RiskError::InsufficientBuffer);
    }

    Ok(start..end)
}
