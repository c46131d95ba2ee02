//! Values produced by the key-encapsulation exchange

use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// AES-GCM iv length in bytes
pub const IV_LEN: usize = 12;

/// AES-GCM tag length in bytes
pub const TAG_LEN: usize = 16;

/// AES-128 key length, and the default KEM output length
pub const AEAD_KEY_LEN: usize = 16;

/// Symmetric key derived by the KEM
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SharedKey(Vec<u8>);

impl SharedKey {
    pub(crate) fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for SharedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SharedKey([REDACTED; {}])", self.0.len())
    }
}

/// Output of `encapsulate`: the shared key and the ciphertext that lets the
/// private key holder recover it
#[derive(Clone, Debug)]
pub struct EncapsulatedKey {
    shared_key: SharedKey,
    encapsulation: Vec<u8>,
}

impl EncapsulatedKey {
    pub(crate) fn new(shared_key: SharedKey, encapsulation: Vec<u8>) -> Self {
        Self {
            shared_key,
            encapsulation,
        }
    }

    pub fn shared_key(&self) -> &SharedKey {
        &self.shared_key
    }

    pub fn encapsulation(&self) -> &[u8] {
        &self.encapsulation
    }

    pub fn into_parts(self) -> (SharedKey, Vec<u8>) {
        (self.shared_key, self.encapsulation)
    }
}

/// AES-GCM output with its iv
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AeadCiphertext {
    pub iv: [u8; IV_LEN],
    pub tag: [u8; TAG_LEN],
    pub ciphertext: Vec<u8>,
}

/// Everything the sender transmits, plus what the receiver recovered
#[derive(Clone, Debug)]
pub struct ExchangeTranscript {
    pub encapsulation: Vec<u8>,
    pub sealed: AeadCiphertext,
    pub recovered: Vec<u8>,
}
