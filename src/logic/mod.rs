//! Pure cryptographic logic
//!
//! Nothing in here touches the filesystem. Each function is a single
//! request/response transformation over in-memory values.

pub mod aead;
pub mod kem;
pub mod keygen;
pub mod pem_codec;
pub mod signature_engine;

pub use pem_codec::Key;
