use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::gps::{GeoPoint, GpsFields};
use crate::metadata::{MetadataReader, GPS_INFO_KEY};
use crate::path_normalizer::PathNormalizer;
use crate::point_writer::PointWriter;
use crate::tag_value::TagValue;

/// Orchestrates reading image metadata and writing one point per GPS-tagged image
pub struct GeometryExporter<'a> {
    metadata_reader: &'a dyn MetadataReader,
    path_normalizer: &'a PathNormalizer,
}

impl<'a> GeometryExporter<'a> {
    pub fn new(metadata_reader: &'a dyn MetadataReader, path_normalizer: &'a PathNormalizer) -> Self {
        Self {
            metadata_reader,
            path_normalizer,
        }
    }

    /// Writes a point for every image that carries GPS tags, in input order.
    ///
    /// Per-image failures are logged and counted; only a failing writer
    /// aborts the export.
    pub fn export(&self, images: &[PathBuf], writer: &mut dyn PointWriter) -> Result<ExportResult> {
        let mut result = ExportResult {
            total_images: images.len(),
            ..ExportResult::default()
        };

        for image in images {
            match self.process_image(image) {
                Ok(Some(point)) => {
                    writer.write_point(&point)?;
                    result.exported_points += 1;
                }
                Ok(None) => {
                    debug!(path = %image.display(), "No GPS data");
                    result.skipped_images += 1;
                }
                Err(e) => {
                    warn!(path = %image.display(), error = %format!("{:#}", e), "Error getting exif data");
                    result.skipped_images += 1;
                    result.errors.push(format!("{}: {:#}", image.display(), e));
                }
            }
        }

        Ok(result)
    }

    fn process_image(&self, image: &Path) -> Result<Option<GeoPoint>> {
        let tags = self.metadata_reader.read_metadata(image)?;

        let gps_info = match tags.get(GPS_INFO_KEY) {
            Some(TagValue::Map(gps_info)) => gps_info,
            Some(other) => anyhow::bail!("{} is {} instead of a tag map", GPS_INFO_KEY, other.kind()),
            None => return Ok(None),
        };

        let fields = GpsFields::from_gps_info(gps_info).context("Incomplete GPS data")?;
        let point = GeoPoint::from_gps_fields(self.path_column(image), &fields)
            .context("Invalid GPS coordinates")?;

        debug!(path = %point.path, latitude = point.latitude, longitude = point.longitude, "Located image");
        Ok(Some(point))
    }

    /// Path column text; bytes that are not UTF-8 become U+FFFD
    fn path_column(&self, image: &Path) -> String {
        let path = self.path_normalizer.display_path(image);
        match path.to_str() {
            Some(text) => text.to_string(),
            None => {
                let lossy = path.to_string_lossy().into_owned();
                warn!(path = %lossy, "Path is not valid UTF-8, writing it lossily");
                lossy
            }
        }
    }
}

/// Counts of one export run
#[derive(Debug, Default, PartialEq)]
pub struct ExportResult {
    pub total_images: usize,
    pub exported_points: usize,
    pub skipped_images: usize,
    pub errors: Vec<String>,
}
