use anyhow::{Context, Result};
use exif::{In, Tag};
use std::fs::File;
use std::io::{BufRead, BufReader, Seek};
use std::path::Path;

use crate::tag_value::{TagMap, TagValue};

/// Key under which the GPS sub-tags are nested
pub const GPS_INFO_KEY: &str = "GPSInfo";

const IFD_POINTERS: [Tag; 3] = [Tag::ExifIFDPointer, Tag::GPSInfoIFDPointer, Tag::InteropIFDPointer];

/// Trait for reading the metadata tags of an image
#[cfg_attr(test, mockall::automock)]
pub trait MetadataReader {
    /// Returns every tag of the image keyed by its name. An image without
    /// an EXIF segment yields an empty map.
    fn read_metadata(&self, path: &Path) -> Result<TagMap>;
}

/// Reads tags from the EXIF segment of an image file
pub struct ExifMetadataReader;

impl ExifMetadataReader {
    pub fn new() -> Self {
        Self
    }

    /// Parses the tags from any container kamadak-exif understands
    pub fn read_from_container<R: BufRead + Seek>(&self, reader: &mut R) -> Result<TagMap> {
        let exif_reader = exif::Reader::new();

        match exif_reader.read_from_container(reader) {
            Ok(exif_data) => Ok(collect_tags(&exif_data)),
            Err(exif::Error::NotFound(_)) => Ok(TagMap::new()),
            Err(e) => Err(e).context("Failed to read EXIF data from image"),
        }
    }
}

impl Default for ExifMetadataReader {
    fn default() -> Self {
        Self::new()
    }
}

impl MetadataReader for ExifMetadataReader {
    fn read_metadata(&self, path: &Path) -> Result<TagMap> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open image: {}", path.display()))?;
        let mut reader = BufReader::new(file);

        self.read_from_container(&mut reader)
    }
}

/// Flattens the primary image fields into a map, nesting GPS fields under GPSInfo
fn collect_tags(exif_data: &exif::Exif) -> TagMap {
    let mut tags = TagMap::new();
    let mut gps_tags = TagMap::new();

    for field in exif_data.fields() {
        // Thumbnail (IFD1) fields are not part of the image's own metadata
        if field.ifd_num != In::PRIMARY || IFD_POINTERS.contains(&field.tag) {
            continue;
        }

        let name = field.tag.to_string();
        let value = TagValue::from(&field.value);

        if field.tag.context() == exif::Context::Gps {
            gps_tags.insert(name, value);
        } else {
            tags.insert(name, value);
        }
    }

    if !gps_tags.is_empty() {
        tags.insert(GPS_INFO_KEY.to_string(), TagValue::Map(gps_tags));
    }

    tags
}
