//! Sign message use case
//!
//! Loads both PEM files, signs the configured message and writes the
//! base64 signature artifact.

use super::load_keys::{load_private_key, load_public_key};
use crate::error::{CryptoError, CronusResult};
use crate::logic::signature_engine;
use crate::model::{SignConfig, Signature};
use crate::ports::ArtifactStore;
use tracing::{debug, info};

/// Sign `config.message` and write the signature to `config.signature_path`
///
/// The fresh signature is checked against the supplied public key before it
/// is written, so a mismatched key pair never produces an artifact.
///
/// # Errors
///
/// Returns errors if:
/// - Either key file is missing or not valid PEM of the right type
/// - The keys do not belong together
/// - Signing fails
/// - The signature file cannot be written
pub fn sign_message<S>(store: &mut S, config: SignConfig) -> CronusResult<Signature>
where
    S: ArtifactStore,
{
    let public = load_public_key(store, &config.public_path)?;
    let private = load_private_key(store, &config.private_path)?;

    let signature = signature_engine::sign(&private, &config.message, config.scheme)?;
    debug!("Signed {} bytes: {:?}", config.message.len(), signature);

    if !signature_engine::verify(&public, &config.message, &signature, config.scheme) {
        return Err(CryptoError::SigningFailed {
            reason: format!(
                "signature does not verify under {}",
                config.public_path.display()
            ),
        }
        .into());
    }

    store.write_artifact(&config.signature_path, &signature.to_base64())?;
    info!(
        "{} signature written to {}",
        config.scheme,
        config.signature_path.display()
    );

    Ok(signature)
}
