//! Use cases (orchestration)
//!
//! Each use case loads its inputs through the artifact ports, runs the pure
//! logic and hands artifacts back to the ports.

mod generate_key_pair;
mod load_keys;
mod run_exchange;
mod sign_message;
mod verify_signature;

pub use generate_key_pair::generate_key_pair;
pub use run_exchange::run_exchange;
pub use sign_message::sign_message;
pub use verify_signature::verify_signature;
