#[cfg(feature = "cli")]
use clap::{Parser, Subcommand, ValueEnum};

#[cfg(feature = "cli")]
use riskpipe::{AccessMode, AssetReader, ExposureConfig, Site};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(about = "riskpipe CLI - Read exposure assets from ESRI binary float grids")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Clone, Copy, ValueEnum)]
enum Access {
    Mmap,
    Seek,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Read the asset at a site
    Query {
        /// Path to the `.hdr` header, or a JSON config with --config
        source: std::path::PathBuf,

        /// Longitude of the site
        #[arg(allow_hyphen_values = true)]
        longitude: f64,

        /// Latitude of the site
        #[arg(allow_hyphen_values = true)]
        latitude: f64,

        /// Treat SOURCE as a JSON exposure config
        #[arg(long)]
        config: bool,

        /// Cell access mode (ignored with --config)
        #[arg(long, value_enum, default_value = "mmap")]
        access: Access,
    },
    /// Show grid header information
    Info {
        /// Path to the `.hdr` header
        header: std::path::PathBuf,
    },
}

#[cfg(feature = "cli")]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    let start_time = std::time::Instant::now();

    match cli.command {
        Commands::Query {
            source,
            longitude,
            latitude,
            config,
            access,
        } => {
            let config = if config {
                ExposureConfig::from_file(&source)?
            } else {
                let access = match access {
                    Access::Mmap => AccessMode::Mmap,
                    Access::Seek => AccessMode::Seek,
                };
                ExposureConfig::new(&source).with_access(access)
            };
            let reader = config.open_reader()?;
            let site = Site::new(longitude, latitude);

            match reader.read_at(&site) {
                Ok(asset) if asset.is_computable() => {
                    println!("Asset at {}: {}", asset.defined_at(), asset.value());
                }
                Ok(asset) => {
                    println!(
                        "No data at {} (raw value {})",
                        asset.defined_at(),
                        asset.value()
                    );
                }
                Err(err) => println!("Cannot read {site}: {err}"),
            }
        }
        Commands::Info { header } => {
            let file = riskpipe::EsriFile::open(&header)?;
            let h = file.header;
            println!("Grid Information:");
            println!("   Dimensions: {} cols x {} rows", h.ncols, h.nrows);
            println!("   Lower left: {}", h.lower_left());
            println!("   Cell size: {}", h.cellsize);
            println!("   No data: {}", h.nodata_value);
            println!("   Byte order: {}", h.byte_order);
            println!("   Data file: {}", file.data_path.display());
        }
    }

    let elapsed = start_time.elapsed();
    println!("Completed in {elapsed:.2?}");

    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("This example requires the 'cli' feature to be enabled.");
    eprintln!("Run with: cargo run --features cli --example read_asset");
    std::process::exit(1);
}
