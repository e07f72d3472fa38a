//! Write a small exposure grid to `example_exposure.hdr` / `.flt`

use riskpipe::{EsriFile, RasterHeader, Site};

const NO_DATA: f32 = -9999.0;

fn main() -> riskpipe::Result<()> {
    let ncols = 20;
    let nrows = 10;
    let header = RasterHeader::new(ncols, nrows, Site::new(10.0, 44.0), 0.1)
        .with_nodata_value(NO_DATA as f64);

    // Every seventh cell has no data, the rest grow from west to east
    let values: Vec<f32> = (0..ncols * nrows)
        .map(|i| {
            if i % 7 == 0 {
                NO_DATA
            } else {
                (1_000 + (i % ncols) * 250) as f32
            }
        })
        .collect();

    let file = EsriFile::write_grid("example_exposure", &header, &values)?;

    println!("Wrote {}x{} exposure grid", ncols, nrows);
    println!("   Header: {}", file.header_path.display());
    println!("   Data:   {}", file.data_path.display());
    println!("Query it with:");
    println!(
        "   cargo run --features cli --example read_asset -- query {} 10.25 44.55",
        file.header_path.display()
    );
    Ok(())
}
