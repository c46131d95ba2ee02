//! AES-128-GCM with detached tags

use crate::error::{CryptoError, CronusResult, ValidationError};
use crate::model::{AeadCiphertext, AEAD_KEY_LEN, IV_LEN, TAG_LEN};
use aes_gcm::aead::{AeadInPlace, KeyInit};
use aes_gcm::{Aes128Gcm, Key, Nonce, Tag};
use rand::rngs::OsRng;
use rand::RngCore;

/// A new random iv. Never reuse one under the same key.
pub fn fresh_iv() -> [u8; IV_LEN] {
    let mut iv = [0u8; IV_LEN];
    OsRng.fill_bytes(&mut iv);
    iv
}

/// Encrypt `plaintext` under `key` with the caller's `iv`.
pub fn encrypt_with_aead(key: &[u8], iv: &[u8], plaintext: &[u8]) -> CronusResult<AeadCiphertext> {
    let cipher = cipher(key)?;
    let iv = check_len::<IV_LEN>("iv", iv)?;

    let mut buffer = plaintext.to_vec();
    let tag = cipher
        .encrypt_in_place_detached(Nonce::from_slice(&iv), b"", &mut buffer)
        .map_err(|e| CryptoError::EncryptionFailed {
            reason: e.to_string(),
        })?;

    let mut tag_bytes = [0u8; TAG_LEN];
    tag_bytes.copy_from_slice(tag.as_slice());

    Ok(AeadCiphertext {
        iv,
        tag: tag_bytes,
        ciphertext: buffer,
    })
}

/// Encrypt under a freshly drawn iv.
pub fn seal(key: &[u8], plaintext: &[u8]) -> CronusResult<AeadCiphertext> {
    encrypt_with_aead(key, &fresh_iv(), plaintext)
}

/// Decrypt and authenticate. Nothing is returned unless the tag verifies.
///
/// # Errors
///
/// `CryptoError::AuthenticationFailed` on any tag mismatch.
pub fn decrypt_with_aead(key: &[u8], iv: &[u8], tag: &[u8], ciphertext: &[u8]) -> CronusResult<Vec<u8>> {
    let cipher = cipher(key)?;
    let iv = check_len::<IV_LEN>("iv", iv)?;
    let tag = check_len::<TAG_LEN>("tag", tag)?;

    let mut buffer = ciphertext.to_vec();
    cipher
        .decrypt_in_place_detached(Nonce::from_slice(&iv), b"", &mut buffer, Tag::from_slice(&tag))
        .map_err(|_| CryptoError::AuthenticationFailed)?;

    Ok(buffer)
}

pub fn open(key: &[u8], sealed: &AeadCiphertext) -> CronusResult<Vec<u8>> {
    decrypt_with_aead(key, &sealed.iv, &sealed.tag, &sealed.ciphertext)
}

fn cipher(key: &[u8]) -> CronusResult<Aes128Gcm> {
    let key = check_len::<AEAD_KEY_LEN>("AEAD key", key)?;
    Ok(Aes128Gcm::new(Key::<Aes128Gcm>::from_slice(&key)))
}

fn check_len<const N: usize>(what: &'static str, bytes: &[u8]) -> Result<[u8; N], ValidationError> {
    bytes.try_into().map_err(|_| ValidationError::InvalidLength {
        what,
        expected: N,
        actual: bytes.len(),
    })
}
