//! PEM encoding and decoding of RSA keys
//!
//! Public keys travel as SubjectPublicKeyInfo under `PUBLIC KEY`, private
//! keys as PKCS#1 under `RSA PRIVATE KEY`. Bodies are base64 wrapped at 64
//! columns with LF line endings.

use crate::error::{CryptoError, CronusResult, PemParseError};
use crate::model::{KeyType, PemDocument, PrivateKey, PublicKey};
use rsa::pkcs1::{DecodeRsaPrivateKey, EncodeRsaPrivateKey};
use rsa::pkcs8::{DecodePublicKey, EncodePublicKey, LineEnding};
use rsa::{RsaPrivateKey, RsaPublicKey};

/// Either half of a key pair, as recovered from a PEM document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Public(PublicKey),
    Private(PrivateKey),
}

impl Key {
    pub fn key_type(&self) -> KeyType {
        match self {
            Key::Public(_) => KeyType::Public,
            Key::Private(_) => KeyType::Private,
        }
    }
}

pub fn encode(key: &Key) -> CronusResult<PemDocument> {
    match key {
        Key::Public(public) => encode_public(public),
        Key::Private(private) => encode_private(private),
    }
}

pub fn encode_public(key: &PublicKey) -> CronusResult<PemDocument> {
    let text = key
        .as_rsa()
        .to_public_key_pem(LineEnding::LF)
        .map_err(|e| CryptoError::InvalidKey {
            reason: format!("cannot encode public key: {}", e),
        })?;
    Ok(PemDocument::new_unchecked(KeyType::Public, text))
}

pub fn encode_private(key: &PrivateKey) -> CronusResult<PemDocument> {
    let text = key
        .as_rsa()
        .to_pkcs1_pem(LineEnding::LF)
        .map_err(|e| CryptoError::InvalidKey {
            reason: format!("cannot encode private key: {}", e),
        })?;
    Ok(PemDocument::new_unchecked(KeyType::Private, text.to_string()))
}

/// Decode whichever key type the label announces.
pub fn decode(text: &str) -> CronusResult<Key> {
    let document = PemDocument::parse(text)?;
    match document.key_type() {
        KeyType::Public => decode_public_document(&document).map(Key::Public),
        KeyType::Private => decode_private_document(&document).map(Key::Private),
    }
}

pub fn decode_public(text: &str) -> CronusResult<PublicKey> {
    let document = PemDocument::parse(text)?;
    expect_label(&document, KeyType::Public)?;
    decode_public_document(&document)
}

pub fn decode_private(text: &str) -> CronusResult<PrivateKey> {
    let document = PemDocument::parse(text)?;
    expect_label(&document, KeyType::Private)?;
    decode_private_document(&document)
}

fn expect_label(document: &PemDocument, expected: KeyType) -> Result<(), PemParseError> {
    if document.key_type() == expected {
        Ok(())
    } else {
        Err(PemParseError::UnexpectedLabel {
            expected: expected.label(),
            found: document.label(),
        })
    }
}

fn decode_public_document(document: &PemDocument) -> CronusResult<PublicKey> {
    let key = RsaPublicKey::from_public_key_pem(document.as_str().trim_start())?;
    Ok(key.into())
}

fn decode_private_document(document: &PemDocument) -> CronusResult<PrivateKey> {
    let key = RsaPrivateKey::from_pkcs1_pem(document.as_str().trim_start())?;
    Ok(key.into())
}
