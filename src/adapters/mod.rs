//! Adapters - concrete implementations of ports (traits)

mod fs_store;

#[cfg(test)]
pub mod memory_store;

// Re-export for convenience
pub use fs_store::FsArtifactStore;
