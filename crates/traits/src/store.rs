//! ArtifactStore trait for abstracting where rendered documents are written.
//!
//! The exporter and the index builder only ever talk to this trait, so the
//! output root is an explicit value chosen at construction time rather than a
//! path computed inside the pipeline.

use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};
use thiserror::Error;

/// Error type for artifact storage operations.
#[derive(Error, Debug, Clone)]
pub enum StoreError {
    #[error("Invalid artifact name '{0}'")]
    InvalidName(String),

    #[error("Failed to prepare output location '{location}': {message}")]
    PrepareFailed { location: String, message: String },

    #[error("Failed to write artifact '{name}': {message}")]
    WriteFailed { name: String, message: String },
}

/// Shared artifact bytes.
pub type SharedArtifactData = Arc<Vec<u8>>;

/// A destination for rendered artifacts.
///
/// # Implementations
///
/// - `FilesystemArtifactStore` (shelfplot-resource): writes into an output directory
/// - `InMemoryArtifactStore`: keeps artifacts in memory, used by tests and dry runs
pub trait ArtifactStore: Send + Sync + Debug {
    /// Makes the store ready for writes.
    ///
    /// Must be idempotent: preparing an already prepared store succeeds.
    fn prepare(&self) -> Result<(), StoreError>;

    /// Writes `contents` under `name`, replacing any previous artifact of that name.
    ///
    /// Returns the location the artifact was written to.
    fn write(&self, name: &str, contents: &[u8]) -> Result<PathBuf, StoreError>;

    /// The location an artifact named `name` is (or would be) stored at.
    fn location(&self, name: &str) -> PathBuf;

    /// Returns a human-readable name for this store (for logging).
    fn name(&self) -> &'static str;
}

/// An in-memory artifact store.
#[derive(Debug, Default)]
pub struct InMemoryArtifactStore {
    artifacts: RwLock<HashMap<String, SharedArtifactData>>,
    rejected: RwLock<HashSet<String>>,
    write_order: RwLock<Vec<String>>,
}

impl InMemoryArtifactStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `name` as unwritable: every later write to it fails.
    pub fn reject(&self, name: impl Into<String>) {
        if let Ok(mut rejected) = self.rejected.write() {
            rejected.insert(name.into());
        }
    }

    /// Returns the stored bytes for `name`, if any.
    pub fn get(&self, name: &str) -> Option<SharedArtifactData> {
        self.artifacts.read().ok()?.get(name).cloned()
    }

    /// Names in the order they were successfully written.
    ///
    /// Returns an empty list if the lock is poisoned.
    pub fn write_order(&self) -> Vec<String> {
        self.write_order
            .read()
            .map(|order| order.clone())
            .unwrap_or_default()
    }

    /// Returns 0 if the lock is poisoned.
    pub fn len(&self) -> usize {
        self.artifacts.read().map(|a| a.len()).unwrap_or(0)
    }

    /// Returns `true` if the lock is poisoned.
    pub fn is_empty(&self) -> bool {
        self.artifacts.read().map(|a| a.is_empty()).unwrap_or(true)
    }
}

impl ArtifactStore for InMemoryArtifactStore {
    fn prepare(&self) -> Result<(), StoreError> {
        Ok(())
    }

    fn write(&self, name: &str, contents: &[u8]) -> Result<PathBuf, StoreError> {
        if name.is_empty() {
            return Err(StoreError::InvalidName(name.to_string()));
        }
        let is_rejected = self
            .rejected
            .read()
            .map(|rejected| rejected.contains(name))
            .unwrap_or(false);
        if is_rejected {
            return Err(StoreError::WriteFailed {
                name: name.to_string(),
                message: "destination rejected the write".to_string(),
            });
        }

        let poisoned = || StoreError::WriteFailed {
            name: name.to_string(),
            message: "artifact store lock poisoned".to_string(),
        };
        self.artifacts
            .write()
            .map_err(|_| poisoned())?
            .insert(name.to_string(), Arc::new(contents.to_vec()));
        self.write_order
            .write()
            .map_err(|_| poisoned())?
            .push(name.to_string());
        Ok(self.location(name))
    }

    fn location(&self, name: &str) -> PathBuf {
        PathBuf::from(name)
    }

    fn name(&self) -> &'static str {
        "InMemoryArtifactStore"
    }
}
