//! Batch output of the icon sets.
//!
//! [`OutputPlanner`] walks every [`IconSet`](crate::icon::IconSet) in order,
//! renders each target at its size and writes it as a PNG below a root
//! directory. There is no retry or rollback: the first failing entry ends the
//! run, leaving already written files in place.

use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbaImage};

use crate::error::GenerateError;
use crate::icon::{self, IconTarget, Platform};
use crate::seedling;

/// A file produced by [`OutputPlanner::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenIcon {
    pub path: PathBuf,
    pub size: u32,
}

/// Writes every platform icon set below a root directory.
#[derive(Debug, Clone)]
pub struct OutputPlanner {
    root: PathBuf,
}

impl OutputPlanner {
    /// Creates a planner that resolves target paths against `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the directory target paths are resolved against.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns every target with its platform, in generation order.
    pub fn targets() -> impl Iterator<Item = (Platform, &'static IconTarget)> {
        icon::ALL
            .into_iter()
            .flat_map(|set| set.targets.iter().map(move |target| (set.platform, target)))
    }

    /// Renders and writes every target.
    ///
    /// Missing parent directories are created. Returns the written files in
    /// order, or the first error encountered.
    #[tracing::instrument(skip(self), fields(root = %self.root.display()))]
    pub fn run(&self) -> Result<Vec<WrittenIcon>, GenerateError> {
        let mut written = Vec::new();

        for set in icon::ALL {
            tracing::info!(platform = %set.platform, count = set.len(), "generating icons");
            for target in set.iter() {
                written.push(self.write_target(target)?);
            }
        }

        tracing::info!(count = written.len(), "all icons generated");
        Ok(written)
    }

    /// Renders a single target and writes it below the root.
    pub fn write_target(&self, target: &IconTarget) -> Result<WrittenIcon, GenerateError> {
        let path = self.root.join(target.path);

        let image = seedling::render(target.size);
        let bytes = encode_png(&image).map_err(|source| GenerateError::Encode {
            path: path.clone(),
            source,
        })?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| GenerateError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        std::fs::write(&path, bytes).map_err(|source| GenerateError::Write {
            path: path.clone(),
            source,
        })?;

        tracing::info!(path = target.path, size = target.size, "created icon");
        Ok(WrittenIcon {
            path,
            size: target.size,
        })
    }
}

impl Default for OutputPlanner {
    /// A planner writing into the current directory.
    fn default() -> Self {
        Self::new(".")
    }
}

/// Encodes an image as PNG bytes.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, image::ImageError> {
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "seedling_{name}_{}_{}",
            std::process::id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ))
    }

    #[test]
    fn targets_follow_table_order() {
        let targets: Vec<_> = OutputPlanner::targets().collect();
        assert_eq!(targets.len(), 29);
        assert_eq!(targets[0].0, Platform::Ios);
        assert_eq!(targets[0].1.size, 20);
        assert_eq!(targets[15].0, Platform::MacOs);
        assert_eq!(targets[22].0, Platform::Android);
        assert_eq!(targets[27].1.path, "web/icons/Icon-192.png");
        assert_eq!(targets[28].1.size, 512);
    }

    #[test]
    fn encode_png_produces_png_signature() {
        for size in [16, 1024] {
            let bytes = encode_png(&seedling::render(size)).unwrap();
            assert!(bytes.starts_with(&[0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n']));
        }
    }

    #[test]
    fn write_target_creates_parent_directories() {
        let root = temp_dir("write_target");
        let planner = OutputPlanner::new(&root);

        let target = IconTarget::new("nested/deeper/icon.png", 24);
        let written = planner.write_target(&target).unwrap();

        assert_eq!(written.path, root.join("nested/deeper/icon.png"));
        let decoded = image::open(&written.path).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (24, 24));

        std::fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn write_target_reports_blocked_directory() {
        let root = temp_dir("blocked");
        std::fs::create_dir_all(&root).unwrap();
        // A regular file where a directory is expected.
        std::fs::write(root.join("web"), b"").unwrap();

        let planner = OutputPlanner::new(&root);
        let err = planner
            .write_target(&IconTarget::new("web/icons/Icon-192.png", 8))
            .unwrap_err();
        assert!(matches!(err, GenerateError::CreateDir { .. }), "{err:?}");

        std::fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn default_planner_writes_to_current_directory() {
        assert_eq!(OutputPlanner::default().root(), Path::new("."));
    }
}
