//! Error types for exposure access and pipeline gating

use crate::pipe::PipeKey;

/// Errors that can occur while reading exposure or evaluating a pipe
///
/// A no-data cell is not an error: it yields a non-computable
/// [`Asset`](crate::Asset). Likewise an IML outside a vulnerability
/// function's domain is a `false` gating result, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskError {
    /// Malformed or incomplete raster header
    InvalidHeader,
    /// Grid dimensions are unusable (zero or overflowing)
    InvalidGrid,
    /// Cell size is not a positive finite number
    InvalidCellSize,
    /// Queried site lies outside the raster coverage
    OutOfGrid,
    /// Data buffer does not hold the expected number of cells
    InsufficientBuffer,
    /// Underlying read of the exposure source failed
    ReadFailed,
    /// Pipe was queried for a slot that was never set
    MissingKey(PipeKey),
    /// Vulnerability function tables are inconsistent
    InvalidVulnerabilityFunction,
}

impl core::fmt::Display for RiskError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RiskError::InvalidHeader => write!(f, "Invalid raster header"),
            RiskError::InvalidGrid => write!(f, "Invalid grid dimensions"),
            RiskError::InvalidCellSize => write!(f, "Cell size must be positive"),
            RiskError::OutOfGrid => write!(f, "Site outside of grid coverage"),
            RiskError::InsufficientBuffer => write!(f, "Insufficient cell data"),
            RiskError::ReadFailed => write!(f, "Failed to read exposure value"),
            RiskError::MissingKey(key) => write!(f, "Pipe key not set: {key}"),
            RiskError::InvalidVulnerabilityFunction => {
                write!(f, "Invalid vulnerability function")
            }
        }
    }
}

impl core::error::Error for RiskError {}

/// Result type for riskpipe core operations
pub type Result<T> = core::result::Result<T, RiskError>;
