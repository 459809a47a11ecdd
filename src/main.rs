use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use gpsexif::exporter::GeometryExporter;
use gpsexif::image_finder::{ImageFinder, WalkDirImageFinder};
use gpsexif::metadata::ExifMetadataReader;
use gpsexif::path_normalizer::PathNormalizer;
use gpsexif::point_writer::CsvPointWriter;

/// Write the GPS position of every JPEG under a directory to a CSV point file

#[derive(Parser, Debug)]
#[command(name = "gpsexif")]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory to search for images
    directory: PathBuf,

    /// Output file path
    outfile: PathBuf,

    /// Log every image, not just failures
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    info!(directory = %args.directory.display(), outfile = %args.outfile.display(), "Exporting GPS positions");

    // Create components
    let image_finder = WalkDirImageFinder::new(&args.directory);
    let metadata_reader = ExifMetadataReader::new();
    let path_normalizer = PathNormalizer::from_current_dir()?;

    let images = image_finder.find_images()?;
    info!(count = images.len(), "Found images");

    let mut point_writer = CsvPointWriter::create(&args.outfile)?;

    let exporter = GeometryExporter::new(&metadata_reader, &path_normalizer);
    let result = exporter.export(&images, &mut point_writer)?;
    point_writer.into_inner()?;

    info!(
        total = result.total_images,
        exported = result.exported_points,
        skipped = result.skipped_images,
        errors = result.errors.len(),
        "Export complete"
    );

    Ok(())
}
