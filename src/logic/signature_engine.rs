//! RSA signing and verification over SHA-256 digests

use crate::error::{CryptoError, CronusResult};
use crate::model::{PrivateKey, PublicKey, Signature, SignatureScheme};
use rand::rngs::OsRng;
use rsa::{Pkcs1v15Sign, Pss};
use sha2::{Digest, Sha256};

fn pss() -> Pss {
    Pss::new_with_salt::<Sha256>(SignatureScheme::PSS_SALT_LEN)
}

/// Sign the SHA-256 digest of `message`.
///
/// # Errors
///
/// `CryptoError::InvalidKey` if the key fails structural validation,
/// `CryptoError::SigningFailed` for any other primitive failure.
pub fn sign(key: &PrivateKey, message: &[u8], scheme: SignatureScheme) -> CronusResult<Signature> {
    let key = key.as_rsa();
    key.validate().map_err(|e| CryptoError::InvalidKey {
        reason: e.to_string(),
    })?;

    let digest = Sha256::digest(message);

    let bytes = match scheme {
        SignatureScheme::Pkcs1v15Sha256 => key.sign(Pkcs1v15Sign::new::<Sha256>(), &digest),
        SignatureScheme::PssSha256 => key.sign_with_rng(&mut OsRng, pss(), &digest),
    }
    .map_err(|e| CryptoError::SigningFailed {
        reason: e.to_string(),
    })?;

    Ok(Signature::new(scheme, bytes))
}

/// Check `signature` over `message` under `scheme`.
///
/// Never fails: a malformed signature, a different key, a changed message or
/// a signature produced under another scheme all give `false`.
pub fn verify(key: &PublicKey, message: &[u8], signature: &Signature, scheme: SignatureScheme) -> bool {
    if signature.scheme() != scheme {
        return false;
    }

    let digest = Sha256::digest(message);
    let key = key.as_rsa();

    match scheme {
        SignatureScheme::Pkcs1v15Sha256 => key
            .verify(Pkcs1v15Sign::new::<Sha256>(), &digest, signature.as_bytes())
            .is_ok(),
        SignatureScheme::PssSha256 => key.verify(pss(), &digest, signature.as_bytes()).is_ok(),
    }
}
