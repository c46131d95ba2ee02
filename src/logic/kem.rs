//! RSA key encapsulation with a KDF1(SHA-256) key derivation
//!
//! The sender picks a random integer `1 < r < n`, sends `r^e mod n` and keeps
//! `KDF1(I2OSP(r, k))` as the shared key, where `k` is the modulus length in
//! bytes. The receiver recovers `r` with the private key and derives the same
//! key.

use crate::error::{CryptoError, CronusResult, ValidationError};
use crate::model::{EncapsulatedKey, PrivateKey, PublicKey, SharedKey};
use rand::rngs::OsRng;
use rand::RngCore;
use rsa::hazmat::{rsa_decrypt_and_check, rsa_encrypt};
use rsa::traits::PublicKeyParts;
use rsa::BigUint;
use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

/// Draws needed to find `1 < r < n`. Each draw succeeds with probability
/// above one half for any modulus, so exhausting this means the random
/// source is broken.
const MAX_SEED_DRAWS: usize = 64;

/// KDF1: `H(seed || 0) || H(seed || 1) || ...` truncated to `key_length`.
pub fn kdf1(seed: &[u8], key_length: usize) -> Vec<u8> {
    let mut output = Vec::with_capacity(key_length + Sha256::output_size());
    let mut counter: u32 = 0;
    while output.len() < key_length {
        let mut hasher = Sha256::new();
        hasher.update(seed);
        hasher.update(counter.to_be_bytes());
        output.extend_from_slice(&hasher.finalize());
        counter += 1;
    }
    output.truncate(key_length);
    output
}

pub fn encapsulate(key: &PublicKey, key_length: usize) -> CronusResult<EncapsulatedKey> {
    if key_length == 0 {
        return Err(ValidationError::ZeroKeyLength.into());
    }

    let k = key.size();
    let r = random_seed_integer(key.modulus(), k)?;
    let seed = Zeroizing::new(i2osp(&r, k)?);

    let c = rsa_encrypt(key.as_rsa(), &r).map_err(|e| CryptoError::EncryptionFailed {
        reason: e.to_string(),
    })?;
    let encapsulation = i2osp(&c, k)?;

    let shared_key = SharedKey::new(kdf1(&seed, key_length));
    Ok(EncapsulatedKey::new(shared_key, encapsulation))
}

/// # Errors
///
/// `CryptoError::DecryptionFailed` if the encapsulation has the wrong
/// length, is not below the modulus, or fails the private key consistency
/// check.
pub fn decapsulate(
    key: &PrivateKey,
    encapsulation: &[u8],
    key_length: usize,
) -> CronusResult<SharedKey> {
    if key_length == 0 {
        return Err(ValidationError::ZeroKeyLength.into());
    }

    let key = key.as_rsa();
    let k = key.size();
    if encapsulation.len() != k {
        return Err(CryptoError::DecryptionFailed {
            reason: format!("encapsulation is {} bytes, expected {}", encapsulation.len(), k),
        }
        .into());
    }

    let c = BigUint::from_bytes_be(encapsulation);
    let r = rsa_decrypt_and_check(key, Some(&mut OsRng), &c).map_err(|e| {
        CryptoError::DecryptionFailed {
            reason: e.to_string(),
        }
    })?;
    let seed = Zeroizing::new(i2osp(&r, k)?);

    Ok(SharedKey::new(kdf1(&seed, key_length)))
}

fn random_seed_integer(n: &BigUint, k: usize) -> CronusResult<BigUint> {
    let one = BigUint::from(1u8);
    let mut buf = Zeroizing::new(vec![0u8; k]);
    for _ in 0..MAX_SEED_DRAWS {
        OsRng.fill_bytes(&mut buf);
        let candidate = BigUint::from_bytes_be(&buf) % n;
        if candidate > one {
            return Ok(candidate);
        }
    }
    Err(CryptoError::EncryptionFailed {
        reason: "random source produced no usable seed".to_string(),
    }
    .into())
}

/// Big-endian encoding left-padded to `len` bytes.
fn i2osp(x: &BigUint, len: usize) -> CronusResult<Vec<u8>> {
    let bytes = x.to_bytes_be();
    if bytes.len() > len {
        return Err(CryptoError::DecryptionFailed {
            reason: format!("integer too large for {} bytes", len),
        }
        .into());
    }
    let mut out = vec![0u8; len - bytes.len()];
    out.extend_from_slice(&bytes);
    Ok(out)
}
