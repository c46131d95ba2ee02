//! Resolved, immutable configuration values
//!
//! The command line layer builds one of these per invocation and hands it to
//! a use case by value. Constructors are pure: they either return a complete
//! value or a `ValidationError`, and they never log.

use crate::error::ValidationError;
use crate::model::{SignatureScheme, AEAD_KEY_LEN};
use std::path::PathBuf;

pub const DEFAULT_PUBLIC_PATH: &str = "public.pem";
pub const DEFAULT_PRIVATE_PATH: &str = "private.pem";
pub const SIGNATURE_FILE: &str = "sign.txt";

const PEM_SUFFIX: &str = ".pem";

/// Resolve an optional PEM output path.
///
/// A path that contains `.pem` anywhere is used verbatim, so
/// `archive.pem.bak` stays as is while `keys` becomes `keys.pem`.
pub fn resolve_pem_path(path: Option<&str>, default: &str) -> PathBuf {
    match path {
        None => PathBuf::from(default),
        Some(p) if p.contains(PEM_SUFFIX) => PathBuf::from(p),
        Some(p) => PathBuf::from(format!("{}{}", p, PEM_SUFFIX)),
    }
}

/// Output locations for a freshly generated key pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateConfig {
    pub public_path: PathBuf,
    pub private_path: PathBuf,
}

impl GenerateConfig {
    pub fn resolve(public: Option<&str>, private: Option<&str>) -> Self {
        Self {
            public_path: resolve_pem_path(public, DEFAULT_PUBLIC_PATH),
            private_path: resolve_pem_path(private, DEFAULT_PRIVATE_PATH),
        }
    }
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self::resolve(None, None)
    }
}

/// Inputs for signing a message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignConfig {
    pub public_path: PathBuf,
    pub private_path: PathBuf,
    pub signature_path: PathBuf,
    pub scheme: SignatureScheme,
    pub message: Vec<u8>,
}

impl SignConfig {
    /// Both key paths are required; nothing is touched when either is absent.
    pub fn new(
        public: Option<&str>,
        private: Option<&str>,
        scheme: SignatureScheme,
        message: Vec<u8>,
    ) -> Result<Self, ValidationError> {
        let (public_path, private_path) = require_key_paths(public, private)?;
        Ok(Self {
            public_path,
            private_path,
            signature_path: PathBuf::from(SIGNATURE_FILE),
            scheme,
            message,
        })
    }

    pub fn with_signature_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.signature_path = path.into();
        self
    }
}

/// Inputs for checking a stored signature
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyConfig {
    pub public_path: PathBuf,
    pub signature_path: PathBuf,
    pub scheme: SignatureScheme,
    pub message: Vec<u8>,
}

impl VerifyConfig {
    pub fn new(
        public: Option<&str>,
        signature: Option<&str>,
        scheme: SignatureScheme,
        message: Vec<u8>,
    ) -> Result<Self, ValidationError> {
        let public_path = public
            .map(PathBuf::from)
            .ok_or(ValidationError::MissingArgument { name: "public" })?;
        Ok(Self {
            public_path,
            signature_path: PathBuf::from(signature.unwrap_or(SIGNATURE_FILE)),
            scheme,
            message,
        })
    }
}

/// Inputs for the encapsulate/encrypt/decapsulate/decrypt round trip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeConfig {
    pub public_path: PathBuf,
    pub private_path: PathBuf,
    pub key_length: usize,
    pub plaintext: Vec<u8>,
}

impl ExchangeConfig {
    pub fn new(
        public: Option<&str>,
        private: Option<&str>,
        plaintext: Vec<u8>,
    ) -> Result<Self, ValidationError> {
        let (public_path, private_path) = require_key_paths(public, private)?;
        Ok(Self {
            public_path,
            private_path,
            key_length: AEAD_KEY_LEN,
            plaintext,
        })
    }
}

fn require_key_paths(
    public: Option<&str>,
    private: Option<&str>,
) -> Result<(PathBuf, PathBuf), ValidationError> {
    let public = public.ok_or(ValidationError::MissingArgument { name: "public" })?;
    let private = private.ok_or(ValidationError::MissingArgument { name: "private" })?;
    Ok((PathBuf::from(public), PathBuf::from(private)))
}
