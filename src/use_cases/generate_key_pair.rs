//! Generate key pair use case
//!
//! Generates a fresh RSA key pair and persists both halves as PEM files.

use crate::error::CronusResult;
use crate::logic::{keygen, pem_codec};
use crate::model::{AsymmetricKeyPair, GenerateConfig, DEFAULT_KEY_BITS};
use crate::ports::ArtifactWriter;
use tracing::info;

/// Generate a 2048-bit key pair and write it out
///
/// Both halves are encoded before anything is written, so a generation or
/// encoding failure leaves no file behind. The two writes are independent:
/// if the private key write fails the public key file stays in place.
///
/// # Errors
///
/// Returns errors if:
/// - Key generation fails
/// - Either PEM file cannot be written
pub fn generate_key_pair<S>(store: &mut S, config: GenerateConfig) -> CronusResult<AsymmetricKeyPair>
where
    S: ArtifactWriter,
{
    let pair = keygen::generate(DEFAULT_KEY_BITS)?;

    let public_pem = pem_codec::encode_public(pair.public())?;
    let private_pem = pem_codec::encode_private(pair.private())?;

    store.write_artifact(&config.public_path, public_pem.as_str())?;
    info!("Public key written to {}", config.public_path.display());

    store.write_artifact(&config.private_path, private_pem.as_str())?;
    info!("Private key written to {}", config.private_path.display());

    Ok(pair)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory_store::MemoryArtifactStore;
    use crate::error::StorageError;
    use crate::ports::ArtifactReader;
    use crate::CronusError;
    use std::path::Path;

    #[test]
    fn test_generate_writes_default_files() {
        let mut store = MemoryArtifactStore::new();
        let pair = generate_key_pair(&mut store, GenerateConfig::default()).unwrap();

        assert_eq!(store.artifacts.len(), 2);
        let public = store.read_artifact(Path::new("public.pem")).unwrap();
        let private = store.read_artifact(Path::new("private.pem")).unwrap();

        assert_eq!(&pem_codec::decode_public(&public).unwrap(), pair.public());
        assert_eq!(&pem_codec::decode_private(&private).unwrap(), pair.private());
        assert_eq!(pair.public().bits(), DEFAULT_KEY_BITS);
    }

    #[test]
    fn test_generate_resolves_suffix() {
        let mut store = MemoryArtifactStore::new();
        let config = GenerateConfig::resolve(Some("keys"), Some("archive.pem.bak"));
        generate_key_pair(&mut store, config).unwrap();

        assert!(store.exists(Path::new("keys.pem")));
        assert!(store.exists(Path::new("archive.pem.bak")));
        assert!(!store.exists(Path::new("archive.pem.bak.pem")));
    }

    #[test]
    fn test_private_write_failure_is_reported() {
        let mut store = MemoryArtifactStore::failing_on("private.pem");
        let result = generate_key_pair(&mut store, GenerateConfig::default());

        assert!(matches!(
            result.unwrap_err(),
            CronusError::Storage(StorageError::WriteFailed { .. })
        ));
        // No cross-file transaction: the public half was already written
        assert!(store.exists(Path::new("public.pem")));
        assert!(!store.exists(Path::new("private.pem")));
    }
}
