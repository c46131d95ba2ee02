use crate::error::CronusResult;
use crate::logic::pem_codec;
use crate::model::{PrivateKey, PublicKey};
use crate::ports::ArtifactReader;
use std::path::Path;
use tracing::debug;

pub(crate) fn load_public_key<S: ArtifactReader>(store: &S, path: &Path) -> CronusResult<PublicKey> {
    let text = store.read_artifact(path)?;
    let key = pem_codec::decode_public(&text)?;
    debug!("Loaded public key from {}: {:?}", path.display(), key);
    Ok(key)
}

pub(crate) fn load_private_key<S: ArtifactReader>(store: &S, path: &Path) -> CronusResult<PrivateKey> {
    let text = store.read_artifact(path)?;
    let key = pem_codec::decode_private(&text)?;
    debug!("Loaded private key from {}", path.display());
    Ok(key)
}
