mod config;
mod exchange;
mod key_material;
mod pem_document;
mod scheme;
mod signature;

pub use config::{
    resolve_pem_path, ExchangeConfig, GenerateConfig, SignConfig, VerifyConfig,
    DEFAULT_PRIVATE_PATH, DEFAULT_PUBLIC_PATH, SIGNATURE_FILE,
};
pub use exchange::{
    AeadCiphertext, EncapsulatedKey, ExchangeTranscript, SharedKey, AEAD_KEY_LEN, IV_LEN, TAG_LEN,
};
pub use key_material::{AsymmetricKeyPair, PrivateKey, PublicKey, DEFAULT_KEY_BITS};
pub use pem_document::{KeyType, PemDocument};
pub use scheme::SignatureScheme;
pub use signature::Signature;
