use crate::error::{CryptoError, CronusResult};
use crate::model::{AsymmetricKeyPair, DEFAULT_KEY_BITS};
use rand::rngs::OsRng;
use rsa::RsaPrivateKey;
use tracing::debug;

/// Generate a fresh RSA key pair from the OS random source.
///
/// A failure is returned as is; retrying on a degraded entropy source is
/// never safe, so no second attempt is made.
pub fn generate(bit_length: usize) -> CronusResult<AsymmetricKeyPair> {
    if bit_length < DEFAULT_KEY_BITS {
        return Err(CryptoError::KeyGenerationFailed {
            reason: format!(
                "modulus of {} bits is below the {} bit minimum",
                bit_length, DEFAULT_KEY_BITS
            ),
        }
        .into());
    }

    debug!("Generating {}-bit RSA key pair", bit_length);

    let private_key = RsaPrivateKey::new(&mut OsRng, bit_length).map_err(|e| {
        CryptoError::KeyGenerationFailed {
            reason: e.to_string(),
        }
    })?;

    Ok(AsymmetricKeyPair::from(private_key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CronusError;

    #[test]
    fn test_generate_rejects_short_modulus() {
        let result = generate(1024);
        assert!(matches!(
            result.unwrap_err(),
            CronusError::Crypto(CryptoError::KeyGenerationFailed { .. })
        ));
    }

    #[test]
    fn test_generate_default_size() {
        let pair = generate(DEFAULT_KEY_BITS).unwrap();
        assert_eq!(pair.public().bits(), DEFAULT_KEY_BITS);
        assert!(pair.private().as_rsa().validate().is_ok());
    }
}
