use super::load_keys::load_public_key;
use crate::error::CronusResult;
use crate::logic::signature_engine;
use crate::model::{Signature, VerifyConfig};
use crate::ports::ArtifactReader;
use tracing::{info, warn};

/// Check a stored signature artifact against a message
///
/// Only missing or unreadable inputs are errors. A signature that does not
/// verify is `Ok(false)`.
pub fn verify_signature<S>(store: &S, config: VerifyConfig) -> CronusResult<bool>
where
    S: ArtifactReader,
{
    let public = load_public_key(store, &config.public_path)?;
    let text = store.read_artifact(&config.signature_path)?;
    let location = config.signature_path.display().to_string();
    let signature = Signature::from_base64(config.scheme, &text, &location)?;

    let valid = signature_engine::verify(&public, &config.message, &signature, config.scheme);
    if valid {
        info!("{} signature in {} is valid", config.scheme, location);
    } else {
        warn!("{} signature in {} does not verify", config.scheme, location);
    }
    Ok(valid)
}
