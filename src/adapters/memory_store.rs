//! In-memory artifact store for tests

use crate::error::{CronusResult, StorageError};
use crate::ports::{ArtifactReader, ArtifactWriter};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default)]
pub struct MemoryArtifactStore {
    pub artifacts: HashMap<PathBuf, String>,
    /// Writes to this path fail, to exercise partial-failure paths
    pub fail_writes_to: Option<PathBuf>,
}

impl MemoryArtifactStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_artifact(mut self, path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        self.artifacts.insert(path.into(), contents.into());
        self
    }

    pub fn failing_on(path: impl Into<PathBuf>) -> Self {
        Self {
            fail_writes_to: Some(path.into()),
            ..Self::default()
        }
    }
}

impl ArtifactReader for MemoryArtifactStore {
    fn read_artifact(&self, path: &Path) -> CronusResult<String> {
        self.artifacts.get(path).cloned().ok_or_else(|| {
            StorageError::ReadFailed {
                location: path.display().to_string(),
                reason: "not found".to_string(),
            }
            .into()
        })
    }

    fn exists(&self, path: &Path) -> bool {
        self.artifacts.contains_key(path)
    }
}

impl ArtifactWriter for MemoryArtifactStore {
    fn write_artifact(&mut self, path: &Path, contents: &str) -> CronusResult<()> {
        if self.fail_writes_to.as_deref() == Some(path) {
            return Err(StorageError::WriteFailed {
                destination: path.display().to_string(),
                reason: "injected failure".to_string(),
            }
            .into());
        }
        self.artifacts.insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract_tests_for;
    use crate::ports::contract_tests::store_contract;

    contract_tests_for!(
        memory_store_contract,
        make = || (MemoryArtifactStore::new(), PathBuf::from("/virtual")),
        tests = {
            test_write_then_read => store_contract::test_write_then_read,
            test_overwrite_replaces => store_contract::test_overwrite_replaces,
            test_read_missing_fails => store_contract::test_read_missing_fails,
            test_paths_are_independent => store_contract::test_paths_are_independent,
        }
    );

    #[test]
    fn test_injected_failure() {
        let mut store = MemoryArtifactStore::failing_on("private.pem");
        assert!(store.write_artifact(Path::new("public.pem"), "ok").is_ok());
        assert!(store.write_artifact(Path::new("private.pem"), "no").is_err());
        assert!(!store.exists(Path::new("private.pem")));
    }
}
