//! Artifact stores for the shelfplot pipeline.
//!
//! This crate provides the on-disk implementation of the `ArtifactStore`
//! trait from shelfplot-traits.
//!
//! ## Available Stores
//!
//! - [`FilesystemArtifactStore`]: Writes artifacts into an output directory
//!
//! ## Re-exports
//!
//! For convenience, we also re-export the in-memory store from shelfplot-traits:
//! - [`InMemoryArtifactStore`]

mod filesystem;

pub use filesystem::FilesystemArtifactStore;

pub use shelfplot_traits::InMemoryArtifactStore;
