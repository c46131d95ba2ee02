//! Shared test fixtures
//!
//! 2048-bit key generation takes long enough that every test module shares
//! the same two pairs.

use crate::adapters::memory_store::MemoryArtifactStore;
use crate::logic::{keygen, pem_codec};
use crate::model::{AsymmetricKeyPair, DEFAULT_KEY_BITS};
use std::sync::OnceLock;

static KEY_PAIR: OnceLock<AsymmetricKeyPair> = OnceLock::new();
static OTHER_KEY_PAIR: OnceLock<AsymmetricKeyPair> = OnceLock::new();

pub fn key_pair() -> &'static AsymmetricKeyPair {
    KEY_PAIR.get_or_init(|| keygen::generate(DEFAULT_KEY_BITS).unwrap())
}

pub fn other_key_pair() -> &'static AsymmetricKeyPair {
    OTHER_KEY_PAIR.get_or_init(|| keygen::generate(DEFAULT_KEY_BITS).unwrap())
}

/// A store holding `public.pem` and `private.pem` for `pair`
pub fn store_with_keys(pair: &AsymmetricKeyPair) -> MemoryArtifactStore {
    let public = pem_codec::encode_public(pair.public()).unwrap();
    let private = pem_codec::encode_private(pair.private()).unwrap();
    MemoryArtifactStore::new()
        .with_artifact("public.pem", public.as_str())
        .with_artifact("private.pem", private.as_str())
}
