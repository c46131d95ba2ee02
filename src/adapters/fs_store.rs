//! Filesystem implementation of the artifact ports
//!
//! Writes go to a temporary file in the destination directory which is then
//! renamed over the target, so each artifact is replaced atomically.

use crate::error::{CronusResult, StorageError};
use crate::ports::{ArtifactReader, ArtifactWriter};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

/// Artifact store backed by the local filesystem
///
/// Files are created owner-readable only, which suits private keys and is
/// harmless for the public half.
#[derive(Debug, Clone, Default)]
pub struct FsArtifactStore;

impl ArtifactReader for FsArtifactStore {
    fn read_artifact(&self, path: &Path) -> CronusResult<String> {
        let contents = fs::read_to_string(path).map_err(|e| StorageError::ReadFailed {
            location: path.display().to_string(),
            reason: e.to_string(),
        })?;
        debug!("Read {} bytes from {}", contents.len(), path.display());
        Ok(contents)
    }

    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }
}

impl ArtifactWriter for FsArtifactStore {
    fn write_artifact(&mut self, path: &Path, contents: &str) -> CronusResult<()> {
        let write_failed = |reason: String| StorageError::WriteFailed {
            destination: path.display().to_string(),
            reason,
        };

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut file = NamedTempFile::new_in(dir).map_err(|e| write_failed(e.to_string()))?;
        file.write_all(contents.as_bytes())
            .map_err(|e| write_failed(e.to_string()))?;
        file.as_file()
            .sync_all()
            .map_err(|e| write_failed(e.to_string()))?;
        file.persist(path)
            .map_err(|e| write_failed(e.error.to_string()))?;

        debug!("Wrote {} bytes to {}", contents.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract_tests_for;
    use crate::ports::contract_tests::store_contract;
    use tempfile::TempDir;

    contract_tests_for!(
        fs_store_contract,
        make = || (FsArtifactStore, TempDir::new().expect("create temp directory")),
        tests = {
            test_write_then_read => store_contract::test_write_then_read,
            test_overwrite_replaces => store_contract::test_overwrite_replaces,
            test_read_missing_fails => store_contract::test_read_missing_fails,
            test_paths_are_independent => store_contract::test_paths_are_independent,
        }
    );

    #[test]
    fn test_write_into_missing_directory_fails() {
        let root = TempDir::new().unwrap();
        let path = root.path().join("no/such/dir/public.pem");

        let result = FsArtifactStore.write_artifact(&path, "x");
        assert!(matches!(
            result.unwrap_err(),
            crate::CronusError::Storage(StorageError::WriteFailed { .. })
        ));
        assert!(!path.exists());
    }

    #[test]
    fn test_no_temporary_files_left_behind() {
        let root = TempDir::new().unwrap();
        let path = root.path().join("private.pem");
        FsArtifactStore.write_artifact(&path, "secret").unwrap();

        let entries: Vec<_> = fs::read_dir(root.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }
}
