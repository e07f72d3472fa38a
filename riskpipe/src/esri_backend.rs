//! ESRI binary float grid backend
//!
//! Concrete [`ExposureReader`](riskpipe_core::ExposureReader) sources for
//! `.hdr`/`.flt` grid pairs: a memory-mapped source for bulk lookups and a
//! seek-per-read source that holds no open handle between reads.

pub mod file_io;
#[cfg(feature = "mmap")]
pub mod mmap_core;

pub use file_io::{EsriFile, SeekingExposure};
#[cfg(feature = "mmap")]
pub use mmap_core::MmapExposure;

#[cfg(test)]
mod tests {
    use super::*;
    use riskpipe_core::{ByteOrder, ExposureReader, RasterHeader, RiskError, Site};
    use tempfile::tempdir;

    const NO_DATA: f32 = -9999.0;

    // 3 columns x 2 rows, northern row first
    const VALUES: [f32; 6] = [1.0, 2.0, NO_DATA, 0.0, -5.5, 6.0];

    fn header(byte_order: ByteOrder) -> RasterHeader {
        RasterHeader::new(3, 2, Site::new(100.0, -10.0), 1.0)
            .with_nodata_value(NO_DATA as f64)
            .with_byte_order(byte_order)
    }

    fn sites() -> [(Site, f64); 6] {
        [
            (Site::new(100.5, -8.5), 1.0),
            (Site::new(101.5, -8.5), 2.0),
            (Site::new(102.5, -8.5), NO_DATA as f64),
            (Site::new(100.5, -9.5), 0.0),
            (Site::new(101.5, -9.5), -5.5),
            (Site::new(102.5, -9.5), 6.0),
        ]
    }

    fn check_reader(reader: &dyn ExposureReader) {
        for (site, expected) in sites() {
            assert_eq!(reader.read_at(&site), Ok(expected), "site {site}");
        }
        assert_eq!(
            reader.read_at(&Site::new(99.0, -9.0)),
            Err(RiskError::OutOfGrid)
        );
    }

    #[test]
    fn test_write_then_open() {
        let dir = tempdir().unwrap();
        let written =
            EsriFile::write_grid(dir.path().join("exposure"), &header(ByteOrder::LsbFirst), &VALUES)
                .unwrap();

        let opened = EsriFile::open(&written.header_path).unwrap();
        assert_eq!(opened, written);
        assert_eq!(opened.data_path, dir.path().join("exposure.flt"));
    }

    #[test]
    fn test_seeking_exposure_both_byte_orders() {
        let dir = tempdir().unwrap();
        for order in [ByteOrder::LsbFirst, ByteOrder::MsbFirst] {
            let file =
                EsriFile::write_grid(dir.path().join(format!("{order}")), &header(order), &VALUES)
                    .unwrap();
            check_reader(&file.seeking_exposure().unwrap());
        }
    }

    #[cfg(feature = "mmap")]
    #[test]
    fn test_mmap_exposure_both_byte_orders() {
        let dir = tempdir().unwrap();
        for order in [ByteOrder::LsbFirst, ByteOrder::MsbFirst] {
            let file =
                EsriFile::write_grid(dir.path().join(format!("{order}")), &header(order), &VALUES)
                    .unwrap();
            let exposure = file.mmap_exposure().unwrap();

            check_reader(&exposure);
            assert_eq!(exposure.cells().is_some(), order.is_native());
        }
    }

    #[test]
    fn test_truncated_data_is_rejected() {
        let dir = tempdir().unwrap();
        let file =
            EsriFile::write_grid(dir.path().join("short"), &header(ByteOrder::LsbFirst), &VALUES)
                .unwrap();
        std::fs::write(&file.data_path, [0u8; 8]).unwrap();

        assert!(matches!(
            EsriFile::open(&file.header_path),
            Err(crate::Error::Risk(RiskError::InsufficientBuffer))
        ));
    }

    #[test]
    fn test_write_rejects_wrong_cell_count() {
        let dir = tempdir().unwrap();
        let result =
            EsriFile::write_grid(dir.path().join("bad"), &header(ByteOrder::LsbFirst), &VALUES[..5]);

        assert!(matches!(
            result,
            Err(crate::Error::Risk(RiskError::InsufficientBuffer))
        ));
    }

    #[test]
    fn test_missing_header_reports_path() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.hdr");

        match EsriFile::open(&missing) {
            Err(crate::Error::Io { path, .. }) => assert_eq!(path, missing),
            other => panic!("expected I/O error, got {other:?}"),
        }
    }

    #[test]
    fn test_seeking_exposure_reports_vanished_file() {
        let dir = tempdir().unwrap();
        let file =
            EsriFile::write_grid(dir.path().join("gone"), &header(ByteOrder::LsbFirst), &VALUES)
                .unwrap();
        let exposure = file.seeking_exposure().unwrap();
        std::fs::remove_file(&file.data_path).unwrap();

        assert_eq!(
            exposure.read_at(&Site::new(100.5, -8.5)),
            Err(RiskError::ReadFailed)
        );
        // Out-of-grid is detected before touching the file
        assert_eq!(
            exposure.read_at(&Site::new(0.0, 0.0)),
            Err(RiskError::OutOfGrid)
        );
    }
}
