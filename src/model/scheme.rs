//! Signature padding schemes

use crate::error::ValidationError;
use std::fmt;
use std::str::FromStr;

/// RSA signature padding scheme
///
/// Both schemes hash the full message with SHA-256 before padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SignatureScheme {
    /// RSASSA-PKCS1-v1_5 with SHA-256 (deterministic)
    #[default]
    Pkcs1v15Sha256,
    /// RSASSA-PSS with SHA-256, MGF1-SHA256 and a fixed salt
    PssSha256,
}

impl SignatureScheme {
    /// Salt length used by `PssSha256`
    pub const PSS_SALT_LEN: usize = 28;

    pub fn name(self) -> &'static str {
        match self {
            SignatureScheme::Pkcs1v15Sha256 => "PKCS1v15-SHA256",
            SignatureScheme::PssSha256 => "PSS-SHA256",
        }
    }

    /// Whether two signatures over the same message and key are identical
    pub fn is_deterministic(self) -> bool {
        matches!(self, SignatureScheme::Pkcs1v15Sha256)
    }
}

impl fmt::Display for SignatureScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SignatureScheme {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pkcs1v15" | "pkcs1v15-sha256" | "pkcs1" => Ok(SignatureScheme::Pkcs1v15Sha256),
            "pss" | "pss-sha256" => Ok(SignatureScheme::PssSha256),
            _ => Err(ValidationError::UnknownScheme {
                name: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scheme() {
        assert_eq!(SignatureScheme::default(), SignatureScheme::Pkcs1v15Sha256);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("pss".parse::<SignatureScheme>().unwrap(), SignatureScheme::PssSha256);
        assert_eq!(
            "PKCS1v15-SHA256".parse::<SignatureScheme>().unwrap(),
            SignatureScheme::Pkcs1v15Sha256
        );
        assert_eq!(
            SignatureScheme::PssSha256.name().parse::<SignatureScheme>().unwrap(),
            SignatureScheme::PssSha256
        );
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            "ecdsa".parse::<SignatureScheme>().unwrap_err(),
            ValidationError::UnknownScheme {
                name: "ecdsa".to_string()
            }
        );
    }

    #[test]
    fn test_determinism() {
        assert!(SignatureScheme::Pkcs1v15Sha256.is_deterministic());
        assert!(!SignatureScheme::PssSha256.is_deterministic());
    }
}
