//! Key-encapsulation exchange use case
//!
//! Plays both sides of one exchange: the sender encapsulates a key under the
//! public key and seals the plaintext, the receiver decapsulates with the
//! private key and opens it. Nothing is persisted.

use super::load_keys::{load_private_key, load_public_key};
use crate::error::CronusResult;
use crate::logic::{aead, kem};
use crate::model::{ExchangeConfig, ExchangeTranscript};
use crate::ports::ArtifactReader;
use tracing::{debug, info};

/// Run encapsulate, encrypt, decapsulate, decrypt
///
/// # Errors
///
/// Returns errors if:
/// - Either key file is missing or not valid PEM of the right type
/// - Decapsulation fails
/// - The recovered key does not authenticate the ciphertext
pub fn run_exchange<S>(store: &S, config: ExchangeConfig) -> CronusResult<ExchangeTranscript>
where
    S: ArtifactReader,
{
    let public = load_public_key(store, &config.public_path)?;
    let private = load_private_key(store, &config.private_path)?;

    // Sender
    let encapsulated = kem::encapsulate(&public, config.key_length)?;
    let sealed = aead::seal(encapsulated.shared_key().as_bytes(), &config.plaintext)?;
    let (_, encapsulation) = encapsulated.into_parts();
    debug!(
        "Encapsulation {} bytes, ciphertext {} bytes",
        encapsulation.len(),
        sealed.ciphertext.len()
    );

    // Receiver
    let shared_key = kem::decapsulate(&private, &encapsulation, config.key_length)?;
    let recovered = aead::open(shared_key.as_bytes(), &sealed)?;
    info!("Exchange completed, {} bytes recovered", recovered.len());

    Ok(ExchangeTranscript {
        encapsulation,
        sealed,
        recovered,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CryptoError, ValidationError};
    use crate::model::IV_LEN;
    use crate::ports::ArtifactReader;
    use crate::test_support::{key_pair, other_key_pair, store_with_keys};
    use crate::CronusError;
    use std::path::Path;

    fn config(plaintext: &[u8]) -> ExchangeConfig {
        ExchangeConfig::new(Some("public.pem"), Some("private.pem"), plaintext.to_vec()).unwrap()
    }

    #[test]
    fn test_round_trip() {
        let store = store_with_keys(key_pair());
        for plaintext in [&b""[..], &b"hello"[..], &[0x5a; 10_000][..]] {
            let transcript = run_exchange(&store, config(plaintext)).unwrap();
            assert_eq!(transcript.recovered, plaintext);
            assert_eq!(transcript.sealed.iv.len(), IV_LEN);
            assert_eq!(transcript.encapsulation.len(), key_pair().public().size());
        }
    }

    #[test]
    fn test_each_run_is_fresh() {
        let store = store_with_keys(key_pair());
        let a = run_exchange(&store, config(b"hello")).unwrap();
        let b = run_exchange(&store, config(b"hello")).unwrap();
        assert_ne!(a.encapsulation, b.encapsulation);
        assert_ne!(a.sealed.iv, b.sealed.iv);
    }

    #[test]
    fn test_foreign_private_key_fails() {
        let other = store_with_keys(other_key_pair());
        let store = store_with_keys(key_pair()).with_artifact(
            "private.pem",
            other.read_artifact(Path::new("private.pem")).unwrap(),
        );

        match run_exchange(&store, config(b"hello")).unwrap_err() {
            CronusError::Crypto(CryptoError::AuthenticationFailed)
            | CronusError::Crypto(CryptoError::DecryptionFailed { .. }) => { /* ok */ }
            other => panic!("expected error: {other:?}"),
        }
    }

    #[test]
    fn test_key_length_must_match_cipher() {
        let store = store_with_keys(key_pair());
        let mut config = config(b"hello");
        config.key_length = 32;

        assert!(matches!(
            run_exchange(&store, config).unwrap_err(),
            CronusError::Validation(ValidationError::InvalidLength { expected: 16, actual: 32, .. })
        ));
    }
}
