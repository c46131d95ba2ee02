use crate::error::StorageError;
use crate::model::SignatureScheme;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::fmt;

/// A signature together with the scheme that produced it
#[derive(Clone, PartialEq, Eq)]
pub struct Signature {
    scheme: SignatureScheme,
    bytes: Vec<u8>,
}

impl Signature {
    pub fn new(scheme: SignatureScheme, bytes: Vec<u8>) -> Self {
        Self { scheme, bytes }
    }

    pub fn scheme(&self) -> SignatureScheme {
        self.scheme
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Text written to the signature artifact
    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.bytes)
    }

    /// Read back a signature artifact. The artifact does not record the
    /// scheme, so the caller states it.
    pub fn from_base64(
        scheme: SignatureScheme,
        text: &str,
        location: &str,
    ) -> Result<Self, StorageError> {
        let bytes = STANDARD
            .decode(text.trim())
            .map_err(|e| StorageError::Malformed {
                location: location.to_string(),
                reason: format!("invalid base64: {}", e),
            })?;
        Ok(Self { scheme, bytes })
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Signature({}, {}..)",
            self.scheme,
            hex::encode(&self.bytes[..self.bytes.len().min(8)])
        )
    }
}
