//! RSA key generation, PEM files, signatures and a KEM + AEAD exchange.

mod adapters;
pub mod api;
pub mod error;
pub mod logic;
pub mod model;
pub mod ports;
pub mod use_cases;

#[cfg(test)]
mod test_support;

// Re-export commonly used types
pub use error::{CronusError, CronusResult};

// Re-export public API
pub use adapters::FsArtifactStore;
pub use api::{exchange, generate_pem, generate_pem_with_config, sign, verify};
