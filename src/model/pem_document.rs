//! PEM document type
//!
//! A `PemDocument` is the textual envelope around a DER-encoded key. It is
//! pure text; turning it back into a key is the job of `logic::pem_codec`.

use crate::error::PemParseError;
use std::fmt;
use zeroize::Zeroizing;

/// Key type carried by a PEM document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyType {
    /// SubjectPublicKeyInfo, label `PUBLIC KEY`
    Public,
    /// PKCS#1 RSAPrivateKey, label `RSA PRIVATE KEY`
    Private,
}

impl KeyType {
    pub fn label(self) -> &'static str {
        match self {
            KeyType::Public => "PUBLIC KEY",
            KeyType::Private => "RSA PRIVATE KEY",
        }
    }

    pub fn from_label(label: &str) -> Result<Self, PemParseError> {
        match label {
            "PUBLIC KEY" => Ok(KeyType::Public),
            "RSA PRIVATE KEY" => Ok(KeyType::Private),
            other => Err(PemParseError::UnsupportedLabel {
                label: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct PemDocument {
    key_type: KeyType,
    text: Zeroizing<String>,
}

impl PemDocument {
    /// Check the framing of `text` and remember its label.
    ///
    /// Only the header/footer pair is inspected here. The base64 body is
    /// validated when the payload is decoded.
    pub fn parse(text: &str) -> Result<Self, PemParseError> {
        let mut lines = text.lines().map(str::trim).skip_while(|l| l.is_empty());

        let header = lines.next().ok_or(PemParseError::MissingHeader)?;
        let label = header
            .strip_prefix("-----BEGIN ")
            .and_then(|rest| rest.strip_suffix("-----"))
            .ok_or(PemParseError::MissingHeader)?;

        let footer = format!("-----END {}-----", label);
        let closed = lines
            .find(|l| l.starts_with("-----"))
            .is_some_and(|l| l == footer);
        if !closed {
            return Err(PemParseError::MismatchedFooter {
                label: label.to_string(),
            });
        }

        let key_type = KeyType::from_label(label)?;
        Ok(Self {
            key_type,
            text: Zeroizing::new(text.to_string()),
        })
    }

    pub(crate) fn new_unchecked(key_type: KeyType, text: String) -> Self {
        Self {
            key_type,
            text: Zeroizing::new(text),
        }
    }

    pub fn key_type(&self) -> KeyType {
        self.key_type
    }

    pub fn label(&self) -> &'static str {
        self.key_type.label()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Debug for PemDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.key_type {
            KeyType::Private => write!(f, "PemDocument({}, [REDACTED])", self.label()),
            KeyType::Public => write!(f, "PemDocument({}, {} bytes)", self.label(), self.text.len()),
        }
    }
}
