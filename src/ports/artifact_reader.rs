use crate::error::CronusResult;
use std::path::Path;

pub trait ArtifactReader {
    /// # Errors
    ///
    /// Returns `StorageError::ReadFailed` if the artifact is missing or unreadable
    fn read_artifact(&self, path: &Path) -> CronusResult<String>;

    fn exists(&self, path: &Path) -> bool;
}
