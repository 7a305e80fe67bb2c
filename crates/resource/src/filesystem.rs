//! Filesystem-based artifact store for native platforms.
//!
//! # Security
//!
//! Artifact names are plain file names. Names containing path separators,
//! parent-directory components or absolute paths are rejected, so a sheet name
//! from the input data can never direct a write outside the output root.

use shelfplot_traits::{ArtifactStore, StoreError};
use std::fs;
use std::path::{Component, Path, PathBuf};

/// An artifact store that writes into a single output directory.
#[derive(Debug)]
pub struct FilesystemArtifactStore {
    root: PathBuf,
}

impl FilesystemArtifactStore {
    /// Creates a store rooted at `root`. Nothing is touched on disk until
    /// [`ArtifactStore::prepare`] is called.
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolves `name` to a path directly inside the root.
    ///
    /// Returns `None` if the name is not a single normal path component.
    fn resolve_name_safe(&self, name: &str) -> Option<PathBuf> {
        if name.is_empty() || name.contains('/') || name.contains('\\') {
            return None;
        }
        let mut components = Path::new(name).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => Some(self.root.join(name)),
            _ => None,
        }
    }
}

impl ArtifactStore for FilesystemArtifactStore {
    fn prepare(&self) -> Result<(), StoreError> {
        fs::create_dir_all(&self.root).map_err(|e| StoreError::PrepareFailed {
            location: self.root.display().to_string(),
            message: e.to_string(),
        })?;
        log::debug!("Output directory ready at {}", self.root.display());
        Ok(())
    }

    fn write(&self, name: &str, contents: &[u8]) -> Result<PathBuf, StoreError> {
        let path = self
            .resolve_name_safe(name)
            .ok_or_else(|| StoreError::InvalidName(name.to_string()))?;

        fs::write(&path, contents).map_err(|e| StoreError::WriteFailed {
            name: path.display().to_string(),
            message: e.to_string(),
        })?;
        Ok(path)
    }

    fn location(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    fn name(&self) -> &'static str {
        "FilesystemArtifactStore"
    }
}
