//! Ports (traits) for artifact persistence
//!
//! The use cases depend on these abstractions, never on the filesystem
//! directly. Adapters in `crate::adapters` provide the implementations.

mod artifact_reader;
mod artifact_writer;

pub use artifact_reader::ArtifactReader;
pub use artifact_writer::ArtifactWriter;

/// Combined trait for stores that can both read and write artifacts
pub trait ArtifactStore: ArtifactReader + ArtifactWriter {}

// Blanket implementation for types that implement both traits
impl<T> ArtifactStore for T where T: ArtifactReader + ArtifactWriter {}
