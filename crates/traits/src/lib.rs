pub mod store;

pub use store::{ArtifactStore, InMemoryArtifactStore, SharedArtifactData, StoreError};
