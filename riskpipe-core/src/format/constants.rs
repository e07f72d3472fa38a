//! Format constants for ESRI binary float grids

/// Conventional no-data sentinel when a header omits `NODATA_value`
pub const DEFAULT_NO_DATA: f64 = -9999.0;

/// Bytes per stored cell (IEEE-754 single precision)
pub const CELL_SIZE_BYTES: usize = 4;

/// Extension of the text header file
pub const HEADER_EXTENSION: &str = "hdr";

/// Extension of the binary cell data file
pub const DATA_EXTENSION: &str = "flt";

/// Header keywords, matched case-insensitively
pub mod keywords {
    pub const NCOLS: &str = "ncols";
    pub const NROWS: &str = "nrows";
    pub const XLLCORNER: &str = "xllcorner";
    pub const YLLCORNER: &str = "yllcorner";
    pub const XLLCENTER: &str = "xllcenter";
    pub const YLLCENTER: &str = "yllcenter";
    pub const CELLSIZE: &str = "cellsize";
    pub const NODATA_VALUE: &str = "NODATA_value";
    pub const BYTEORDER: &str = "byteorder";

    pub const LSBFIRST: &str = "LSBFIRST";
    pub const MSBFIRST: &str = "MSBFIRST";
}
