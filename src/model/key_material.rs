use rsa::traits::PublicKeyParts;
use rsa::{BigUint, RsaPrivateKey, RsaPublicKey};
use std::fmt;

/// Modulus size of every generated key pair
pub const DEFAULT_KEY_BITS: usize = 2048;

#[derive(Clone, PartialEq, Eq)]
pub struct PublicKey(RsaPublicKey);

impl PublicKey {
    pub fn modulus(&self) -> &BigUint {
        self.0.n()
    }

    pub fn public_exponent(&self) -> &BigUint {
        self.0.e()
    }

    /// Modulus length in bits
    pub fn bits(&self) -> usize {
        self.0.n().bits()
    }

    /// Modulus length in bytes
    pub fn size(&self) -> usize {
        self.0.size()
    }

    pub(crate) fn as_rsa(&self) -> &RsaPublicKey {
        &self.0
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.0.n().to_bytes_be();
        write!(
            f,
            "PublicKey({} bits, n={}..)",
            self.bits(),
            hex::encode(&n[..n.len().min(8)])
        )
    }
}

impl From<RsaPublicKey> for PublicKey {
    fn from(key: RsaPublicKey) -> Self {
        Self(key)
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct PrivateKey(RsaPrivateKey);

impl PrivateKey {
    pub fn public_key(&self) -> PublicKey {
        PublicKey(self.0.to_public_key())
    }

    /// Modulus length in bits
    pub fn bits(&self) -> usize {
        self.0.n().bits()
    }

    pub(crate) fn as_rsa(&self) -> &RsaPrivateKey {
        &self.0
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PrivateKey([REDACTED])")
    }
}

impl From<RsaPrivateKey> for PrivateKey {
    fn from(key: RsaPrivateKey) -> Self {
        Self(key)
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct AsymmetricKeyPair {
    public: PublicKey,
    private: PrivateKey,
}

impl AsymmetricKeyPair {
    pub fn public(&self) -> &PublicKey {
        &self.public
    }

    pub fn private(&self) -> &PrivateKey {
        &self.private
    }
}

impl fmt::Debug for AsymmetricKeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "KeyPair {{ private: [REDACTED], public: {:?} }}",
            self.public
        )
    }
}

/// Both halves are derived from the same private key, so they always match.
impl From<RsaPrivateKey> for AsymmetricKeyPair {
    fn from(key: RsaPrivateKey) -> Self {
        let public = PublicKey(key.to_public_key());
        Self {
            public,
            private: PrivateKey(key),
        }
    }
}
