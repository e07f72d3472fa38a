//! ESRI binary grid header (`.hdr`) definitions
//!
//! The header is a short text file of `keyword value` lines describing the
//! layout of the companion `.flt` data file.

use alloc::string::{String, ToString};

use crate::format::constants::{keywords, DEFAULT_NO_DATA};
use crate::format::grid::{GridDefinition, RasterFileDefinition};
use crate::validation::parsing::{parse_coordinate, parse_count, split_keyword};
use crate::{Result, RiskError, Site};

/// Byte order of the stored cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ByteOrder {
    /// Little-endian (`LSBFIRST`)
    #[default]
    LsbFirst,
    /// Big-endian (`MSBFIRST`)
    MsbFirst,
}

impl ByteOrder {
    /// Byte order of the host
    pub const fn native() -> Self {
        if cfg!(target_endian = "little") {
            ByteOrder::LsbFirst
        } else {
            ByteOrder::MsbFirst
        }
    }

    pub fn is_native(self) -> bool {
        self == Self::native()
    }

    /// Decode one stored cell
    pub fn decode(self, bytes: [u8; 4]) -> f32 {
        match self {
            ByteOrder::LsbFirst => f32::from_le_bytes(bytes),
            ByteOrder::MsbFirst => f32::from_be_bytes(bytes),
        }
    }

    /// Encode one cell for storage
    pub fn encode(self, value: f32) -> [u8; 4] {
        match self {
            ByteOrder::LsbFirst => value.to_le_bytes(),
            ByteOrder::MsbFirst => value.to_be_bytes(),
        }
    }

    fn parse(token: &str) -> Result<Self> {
        if token.eq_ignore_ascii_case(keywords::LSBFIRST) {
            Ok(ByteOrder::LsbFirst)
        } else if token.eq_ignore_ascii_case(keywords::MSBFIRST) {
            Ok(ByteOrder::MsbFirst)
        } else {
            Err(RiskError::InvalidHeader)
        }
    }
}

impl core::fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ByteOrder::LsbFirst => write!(f, "{}", keywords::LSBFIRST),
            ByteOrder::MsbFirst => write!(f, "{}", keywords::MSBFIRST),
        }
    }
}

/// Whether the origin coordinates name the corner or the center of the
/// lower-left cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Registration {
    #[default]
    Corner,
    Center,
}

/// Parsed `.hdr` file
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RasterHeader {
    pub ncols: usize,
    pub nrows: usize,
    /// Origin x, interpreted according to `registration`
    pub xll: f64,
    /// Origin y, interpreted according to `registration`
    pub yll: f64,
    pub registration: Registration,
    pub cellsize: f64,
    pub nodata_value: f64,
    pub byte_order: ByteOrder,
}

impl RasterHeader {
    /// Create a corner-registered little-endian header
    pub const fn new(ncols: usize, nrows: usize, lower_left: Site, cellsize: f64) -> Self {
        Self {
            ncols,
            nrows,
            xll: lower_left.longitude(),
            yll: lower_left.latitude(),
            registration: Registration::Corner,
            cellsize,
            nodata_value: DEFAULT_NO_DATA,
            byte_order: ByteOrder::LsbFirst,
        }
    }

    pub fn with_nodata_value(mut self, nodata_value: f64) -> Self {
        self.nodata_value = nodata_value;
        self
    }

    pub fn with_byte_order(mut self, byte_order: ByteOrder) -> Self {
        self.byte_order = byte_order;
        self
    }

    /// Parse header text
    ///
    /// `ncols`, `nrows`, an x/y origin and `cellsize` are required.
    /// Unknown keywords are skipped.
    pub fn parse(text: &str) -> Result<Self> {
        let mut ncols = None;
        let mut nrows = None;
        let mut xll = None;
        let mut yll = None;
        let mut x_center = false;
        let mut y_center = false;
        let mut cellsize = None;
        let mut nodata_value = DEFAULT_NO_DATA;
        let mut byte_order = ByteOrder::default();

        for line in text.lines() {
            let Some((keyword, value)) = split_keyword(line)? else {
                continue;
            };
            let is = |name: &str| keyword.eq_ignore_ascii_case(name);

            if is(keywords::NCOLS) {
                ncols = Some(parse_count(value)?);
            } else if is(keywords::NROWS) {
                nrows = Some(parse_count(value)?);
            } else if is(keywords::XLLCORNER) || is(keywords::XLLCENTER) {
                xll = Some(parse_coordinate(value)?);
                x_center = is(keywords::XLLCENTER);
            } else if is(keywords::YLLCORNER) || is(keywords::YLLCENTER) {
                yll = Some(parse_coordinate(value)?);
                y_center = is(keywords::YLLCENTER);
            } else if is(keywords::CELLSIZE) {
                cellsize = Some(parse_coordinate(value)?);
            } else if is(keywords::NODATA_VALUE) {
                // NaN is a legal sentinel, so no finiteness check
                nodata_value = value.parse().map_err(|_| RiskError::InvalidHeader)?;
            } else if is(keywords::BYTEORDER) {
                byte_order = ByteOrder::parse(value)?;
            }
        }

        if x_center != y_center {
            return Err(RiskError::InvalidHeader);
        }

        let (Some(ncols), Some(nrows), Some(xll), Some(yll), Some(cellsize)) =
            (ncols, nrows, xll, yll, cellsize)
        else {
            return Err(RiskError::InvalidHeader);
        };

        Ok(Self {
            ncols,
            nrows,
            xll,
            yll,
            registration: if x_center {
                Registration::Center
            } else {
                Registration::Corner
            },
            cellsize,
            nodata_value,
            byte_order,
        })
    }

    /// Render the header as `.hdr` text, keeping its registration
    pub fn to_text(&self) -> String {
        self.to_string()
    }

    /// Lower-left corner of the lower-left cell
    pub fn lower_left(&self) -> Site {
        match self.registration {
            Registration::Corner => Site::new(self.xll, self.yll),
            Registration::Center => {
                let half = self.cellsize / 2.0;
                Site::new(self.xll - half, self.yll - half)
            }
        }
    }

    /// Grid with the sentinel rounded to the stored f32 precision
    pub fn grid(&self) -> GridDefinition {
        let sentinel = self.nodata_value as f32 as f64;
        GridDefinition::new(self.ncols, self.nrows, sentinel)
    }

    /// Convert into the geometry used for cell lookups
    pub fn to_definition(&self) -> Result<RasterFileDefinition> {
        if self.grid().cell_count().is_none() {
            return Err(RiskError::InvalidGrid);
        }
        Ok(RasterFileDefinition::new(self.lower_left(), self.cellsize, self.grid())?
            .with_byte_order(self.byte_order))
    }
}

impl core::fmt::Display for RasterHeader {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let (x_key, y_key) = match self.registration {
            Registration::Corner => (keywords::XLLCORNER, keywords::YLLCORNER),
            Registration::Center => (keywords::XLLCENTER, keywords::YLLCENTER),
        };

        writeln!(f, "{:<14}{}", keywords::NCOLS, self.ncols)?;
        writeln!(f, "{:<14}{}", keywords::NROWS, self.nrows)?;
        writeln!(f, "{:<14}{:?}", x_key, self.xll)?;
        writeln!(f, "{:<14}{:?}", y_key, self.yll)?;
        writeln!(f, "{:<14}{:?}", keywords::CELLSIZE, self.cellsize)?;
        writeln!(f, "{:<14}{:?}", keywords::NODATA_VALUE, self.nodata_value)?;
        writeln!(f, "{:<14}{}", keywords::BYTEORDER, self.byte_order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "ncols         4\n\
                          nrows         3\n\
                          xllcorner     10.0\n\
                          yllcorner     40.0\n\
                          cellsize      0.5\n\
                          NODATA_value  -9999\n\
                          byteorder     LSBFIRST\n";

    #[test]
    fn test_parse_header() {
        let header = RasterHeader::parse(HEADER).unwrap();

        assert_eq!(header.ncols, 4);
        assert_eq!(header.nrows, 3);
        assert_eq!(header.lower_left(), Site::new(10.0, 40.0));
        assert_eq!(header.cellsize, 0.5);
        assert_eq!(header.nodata_value, -9999.0);
        assert_eq!(header.byte_order, ByteOrder::LsbFirst);
    }

    #[test]
    fn test_keywords_are_case_insensitive() {
        let text = "NCOLS 2\nNROWS 2\nXLLCORNER 0\nYLLCORNER 0\nCELLSIZE 1\nnodata_value -1\n";
        let header = RasterHeader::parse(text).unwrap();

        assert_eq!(header.ncols, 2);
        assert_eq!(header.nodata_value, -1.0);
    }

    #[test]
    fn test_optional_fields_default() {
        let text = "ncols 2\nnrows 2\nxllcorner 0\nyllcorner 0\ncellsize 1\nunknown 7\n";
        let header = RasterHeader::parse(text).unwrap();

        assert_eq!(header.nodata_value, DEFAULT_NO_DATA);
        assert_eq!(header.byte_order, ByteOrder::LsbFirst);
    }

    #[test]
    fn test_center_registration_shifts_origin() {
        let text = "ncols 2\nnrows 2\nxllcenter 0.5\nyllcenter 1.5\ncellsize 1\n";
        let header = RasterHeader::parse(text).unwrap();

        assert_eq!(header.registration, Registration::Center);
        assert_eq!(header.lower_left(), Site::new(0.0, 1.0));
    }

    #[test]
    fn test_invalid_headers() {
        // Missing cellsize
        let text = "ncols 2\nnrows 2\nxllcorner 0\nyllcorner 0\n";
        assert_eq!(RasterHeader::parse(text), Err(RiskError::InvalidHeader));

        // Mixed registration
        let text = "ncols 2\nnrows 2\nxllcorner 0\nyllcenter 0\ncellsize 1\n";
        assert_eq!(RasterHeader::parse(text), Err(RiskError::InvalidHeader));

        // Bad byte order
        let text = "ncols 2\nnrows 2\nxllcorner 0\nyllcorner 0\ncellsize 1\nbyteorder VMS\n";
        assert_eq!(RasterHeader::parse(text), Err(RiskError::InvalidHeader));

        // Keyword without value
        assert_eq!(RasterHeader::parse("ncols\n"), Err(RiskError::InvalidHeader));
    }

    #[test]
    fn test_text_round_trip() {
        let header = RasterHeader::new(5, 7, Site::new(-3.25, 12.0), 0.1)
            .with_nodata_value(-1.0)
            .with_byte_order(ByteOrder::MsbFirst);

        assert_eq!(RasterHeader::parse(&header.to_text()), Ok(header));
    }

    #[test]
    fn test_text_layout() {
        let header = RasterHeader::new(2, 3, Site::new(1.0, 2.0), 0.5);
        let expected = "ncols         2\n\
                        nrows         3\n\
                        xllcorner     1.0\n\
                        yllcorner     2.0\n\
                        cellsize      0.5\n\
                        NODATA_value  -9999.0\n\
                        byteorder     LSBFIRST\n";

        assert_eq!(header.to_text(), expected);
    }

    #[test]
    fn test_definition_rejects_zero_cellsize() {
        let header = RasterHeader::new(1, 1, Site::new(0.0, 0.0), 0.0);
        assert_eq!(header.to_definition(), Err(RiskError::InvalidCellSize));
    }

    #[test]
    fn test_sentinel_rounded_to_cell_precision() {
        let header =
            RasterHeader::new(1, 1, Site::new(0.0, 0.0), 1.0).with_nodata_value(-3.40282e38);
        let stored = -3.40282e38_f32 as f64;

        assert!(header.to_definition().unwrap().grid().is_no_data(stored));
    }

    #[test]
    fn test_byte_order_codec() {
        let value = 111.5_f32;
        for order in [ByteOrder::LsbFirst, ByteOrder::MsbFirst] {
            assert_eq!(order.decode(order.encode(value)), value);
        }
        assert_eq!(ByteOrder::MsbFirst.encode(1.0), [0x3f, 0x80, 0, 0]);
    }
}
