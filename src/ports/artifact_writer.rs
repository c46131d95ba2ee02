//! ArtifactWriter trait - capability to persist text artifacts

use crate::error::CronusResult;
use std::path::Path;

/// Capability to persist a text artifact (PEM file, signature file)
pub trait ArtifactWriter {
    /// Write `contents` to `path`, replacing any previous artifact
    ///
    /// The write must be all-or-nothing for this one path: a reader sees
    /// either the old contents or the new ones, never a mix. No guarantee
    /// is made across two different paths.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::WriteFailed` if the artifact cannot be written
    fn write_artifact(&mut self, path: &Path, contents: &str) -> CronusResult<()>;
}
