use anyhow::{Context, Result};
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::gps::GeoPoint;

/// Column names of the output table
pub const HEADER: [&str; 3] = ["Path", "Latitude", "Longitude"];

/// Trait for the sink that receives exported points
pub trait PointWriter {
    fn write_point(&mut self, point: &GeoPoint) -> Result<()>;
}

/// Writes points as comma separated rows, one flush per row
pub struct CsvPointWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl CsvPointWriter<File> {
    /// Creates or truncates the file at `path` and writes the header
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;

        Self::new(file).with_context(|| format!("Failed to write header to: {}", path.display()))
    }
}

impl<W: Write> CsvPointWriter<W> {
    pub fn new(inner: W) -> Result<Self> {
        // Header goes out explicitly so an empty export still has one
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .terminator(csv::Terminator::CRLF)
            .from_writer(inner);
        writer.write_record(HEADER).context("Failed to write header row")?;
        writer.flush().context("Failed to flush header row")?;

        Ok(Self { writer })
    }

    /// Flushes and hands back the underlying writer
    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| anyhow::anyhow!("Failed to flush output: {}", e.error()))
    }
}

impl<W: Write> PointWriter for CsvPointWriter<W> {
    fn write_point(&mut self, point: &GeoPoint) -> Result<()> {
        self.writer
            .serialize(point)
            .with_context(|| format!("Failed to write row for: {}", point.path))?;
        self.writer.flush().context("Failed to flush row")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn point(path: &str, latitude: f64, longitude: f64) -> GeoPoint {
        GeoPoint {
            path: path.to_string(),
            latitude,
            longitude,
        }
    }

    fn written(writer: CsvPointWriter<Vec<u8>>) -> String {
        String::from_utf8(writer.into_inner().unwrap()).unwrap()
    }

    #[test]
    fn test_header_written_without_rows() {
        // Arrange & Act
        let writer = CsvPointWriter::new(Vec::new()).unwrap();

        // Assert
        assert_eq!(written(writer), "Path,Latitude,Longitude\r\n");
    }

    #[test]
    fn test_rows_follow_header_in_order() {
        // Arrange
        let mut writer = CsvPointWriter::new(Vec::new()).unwrap();

        // Act
        writer.write_point(&point("a/one.jpg", 40.5, -79.25)).unwrap();
        writer.write_point(&point("./two.jpg", -33.0, 151.125)).unwrap();

        // Assert
        assert_eq!(
            written(writer),
            "Path,Latitude,Longitude\r\na/one.jpg,40.5,-79.25\r\n./two.jpg,-33.0,151.125\r\n"
        );
    }

    #[test]
    fn test_path_with_comma_is_quoted() {
        let mut writer = CsvPointWriter::new(Vec::new()).unwrap();

        writer.write_point(&point("trip, day 1/a.jpg", 1.5, 2.5)).unwrap();

        assert_eq!(
            written(writer),
            "Path,Latitude,Longitude\r\n\"trip, day 1/a.jpg\",1.5,2.5\r\n"
        );
    }

    #[test]
    fn test_create_truncates_existing_file() {
        // Arrange
        let temp_dir = tempfile::tempdir().unwrap();
        let out = temp_dir.path().join("points.csv");
        fs::write(&out, "stale contents\nmore\n").unwrap();

        // Act
        let mut writer = CsvPointWriter::create(&out).unwrap();
        writer.write_point(&point("x.jpg", 1.0, 2.0)).unwrap();
        drop(writer);

        // Assert
        assert_eq!(fs::read_to_string(&out).unwrap(), "Path,Latitude,Longitude\r\nx.jpg,1.0,2.0\r\n");
    }

    #[test]
    fn test_rows_visible_before_writer_is_dropped() {
        let temp_dir = tempfile::tempdir().unwrap();
        let out = temp_dir.path().join("points.csv");

        let mut writer = CsvPointWriter::create(&out).unwrap();
        writer.write_point(&point("x.jpg", 1.0, 2.0)).unwrap();

        assert!(fs::read_to_string(&out).unwrap().ends_with("x.jpg,1.0,2.0\r\n"));
    }

    #[test]
    fn test_create_in_missing_directory_returns_error() {
        let result = CsvPointWriter::create(Path::new("/nonexistent_dir_for_gpsexif/points.csv"));

        assert!(result.is_err());
    }
}
