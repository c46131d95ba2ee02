//! Error types for cronus
//!
//! This module defines the error hierarchy for all cronus operations.
//! Errors are organized hierarchically and use thiserror for implementation.

use thiserror::Error;

/// Result type alias for cronus operations
///
/// This is a convenience alias for `Result<T, CronusError>`.
pub type CronusResult<T> = Result<T, CronusError>;

/// Top-level error type for all cronus operations
#[derive(Error, Debug)]
pub enum CronusError {
    /// Caller-supplied configuration or argument errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Cryptographic operation errors
    #[error("Cryptographic error: {0}")]
    Crypto(#[from] CryptoError),

    /// PEM framing or payload errors
    #[error("PEM parse error: {0}")]
    PemParse(#[from] PemParseError),

    /// Artifact persistence errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Configuration and argument errors
///
/// These are raised before any cryptographic primitive is touched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required input was not supplied
    #[error("Missing required argument: {name}")]
    MissingArgument { name: &'static str },

    /// A byte string had the wrong length
    #[error("{what} must be exactly {expected} bytes, got {actual}")]
    InvalidLength {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Requested derived key length is unusable
    #[error("Key length must be greater than zero")]
    ZeroKeyLength,

    /// Unknown signature scheme name
    #[error("Unknown signature scheme: {name}")]
    UnknownScheme { name: String },
}

/// Cryptographic operation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CryptoError {
    /// Key generation failed
    #[error("Failed to generate key pair: {reason}")]
    KeyGenerationFailed { reason: String },

    /// Key is structurally unusable
    #[error("Invalid key: {reason}")]
    InvalidKey { reason: String },

    /// Signature generation failed
    #[error("Failed to generate signature: {reason}")]
    SigningFailed { reason: String },

    /// RSA decryption of an encapsulation failed
    #[error("Failed to decrypt encapsulation: {reason}")]
    DecryptionFailed { reason: String },

    /// AEAD tag did not verify
    #[error("Authentication tag mismatch")]
    AuthenticationFailed,

    /// AEAD encryption failed
    #[error("Failed to encrypt: {reason}")]
    EncryptionFailed { reason: String },
}

/// PEM framing and payload errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PemParseError {
    /// No `-----BEGIN ...-----` line
    #[error("Missing PEM header")]
    MissingHeader,

    /// No `-----END ...-----` line matching the header
    #[error("Missing or mismatched PEM footer for label {label}")]
    MismatchedFooter { label: String },

    /// Label is not one cronus understands
    #[error("Unsupported PEM label: {label}")]
    UnsupportedLabel { label: String },

    /// Label does not match the key type being decoded
    #[error("Expected PEM label {expected}, found {found}")]
    UnexpectedLabel {
        expected: &'static str,
        found: &'static str,
    },

    /// Payload is not valid base64 or not a valid key structure
    #[error("Invalid PEM payload: {reason}")]
    InvalidPayload { reason: String },
}

/// Artifact persistence errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// Failed to read an artifact
    #[error("Failed to read {location}: {reason}")]
    ReadFailed { location: String, reason: String },

    /// Failed to write an artifact
    #[error("Failed to write {destination}: {reason}")]
    WriteFailed { destination: String, reason: String },

    /// Artifact content is not what was expected
    #[error("Malformed artifact {location}: {reason}")]
    Malformed { location: String, reason: String },
}

/// Convert rsa crate errors raised outside a more specific context
impl From<rsa::Error> for CronusError {
    fn from(err: rsa::Error) -> Self {
        CronusError::Crypto(CryptoError::InvalidKey {
            reason: err.to_string(),
        })
    }
}

/// Convert pkcs1 errors (private key PEM)
impl From<rsa::pkcs1::Error> for CronusError {
    fn from(err: rsa::pkcs1::Error) -> Self {
        CronusError::PemParse(PemParseError::InvalidPayload {
            reason: format!("PKCS#1: {}", err),
        })
    }
}

/// Convert SPKI errors (public key PEM)
impl From<rsa::pkcs8::spki::Error> for CronusError {
    fn from(err: rsa::pkcs8::spki::Error) -> Self {
        CronusError::PemParse(PemParseError::InvalidPayload {
            reason: format!("SPKI: {}", err),
        })
    }
}
