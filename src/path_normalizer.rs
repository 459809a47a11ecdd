use anyhow::{Context, Result};
use std::env;
use std::path::{Component, Path, PathBuf};

/// Builds the path written to the Path column: the image's directory made
/// relative to a base directory, joined with the file name
pub struct PathNormalizer {
    base: PathBuf,
}

impl PathNormalizer {
    pub fn new(base: PathBuf) -> Self {
        Self {
            base: normalize(&base),
        }
    }

    /// Uses the process working directory as the base
    pub fn from_current_dir() -> Result<Self> {
        let cwd = env::current_dir().context("Failed to determine current directory")?;
        Ok(Self::new(cwd))
    }

    /// Generates the display path, e.g. `photos/2024/IMG_1234.jpg` or `./IMG_1.jpg`
    pub fn display_path(&self, image: &Path) -> PathBuf {
        let directory = image.parent().unwrap_or(Path::new(""));
        let file_name = image.file_name().map(PathBuf::from).unwrap_or_default();

        self.relative_dir(directory).join(file_name)
    }

    fn relative_dir(&self, directory: &Path) -> PathBuf {
        let absolute = normalize(&self.base.join(directory));

        let base_components: Vec<Component> = self.base.components().collect();
        let dir_components: Vec<Component> = absolute.components().collect();

        let common = base_components
            .iter()
            .zip(&dir_components)
            .take_while(|(a, b)| a == b)
            .count();

        let mut relative = PathBuf::new();
        for _ in common..base_components.len() {
            relative.push("..");
        }
        for component in &dir_components[common..] {
            relative.push(component.as_os_str());
        }

        if relative.as_os_str().is_empty() {
            PathBuf::from(".")
        } else {
            relative
        }
    }
}

/// Lexically resolves `.` and `..` without touching the filesystem
fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}
