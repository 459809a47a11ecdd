use anyhow::{bail, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Trait for discovering the images to export
pub trait ImageFinder {
    fn find_images(&self) -> Result<Vec<PathBuf>>;
}

/// Walks a directory tree and collects JPEG files
pub struct WalkDirImageFinder {
    root: PathBuf,
}

impl WalkDirImageFinder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

/// True for names ending in .jpg or .jpeg, in any case
pub fn is_jpeg_file(filename: &str) -> bool {
    let lower = filename.to_lowercase();
    lower.ends_with(".jpg") || lower.ends_with(".jpeg")
}

impl ImageFinder for WalkDirImageFinder {
    fn find_images(&self) -> Result<Vec<PathBuf>> {
        if !self.root.is_dir() {
            bail!("Not a directory: {}", self.root.display());
        }

        let mut images = Vec::new();

        // Files of a directory come before its subdirectories, each group by name
        let walker = WalkDir::new(&self.root).sort_by(|a, b| {
            a.file_type()
                .is_dir()
                .cmp(&b.file_type().is_dir())
                .then_with(|| a.file_name().cmp(b.file_name()))
        });

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    // Unreadable subtrees are skipped like any other bad file
                    warn!(path = ?e.path().map(Path::display), error = %e, "Skipping unreadable entry");
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let is_jpeg = entry.file_name().to_str().is_some_and(is_jpeg_file);
            if !is_jpeg {
                continue;
            }

            debug!(path = %entry.path().display(), "Found image");
            images.push(entry.into_path());
        }

        Ok(images)
    }
}
