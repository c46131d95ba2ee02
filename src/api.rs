use crate::adapters::FsArtifactStore;
use crate::error::CronusResult;
use crate::use_cases::{
    generate_key_pair as generate_key_pair_use_case, run_exchange as run_exchange_use_case,
    sign_message as sign_message_use_case, verify_signature as verify_signature_use_case,
};

pub use crate::model::*;

/// Generate `public.pem` and `private.pem` in the working directory
pub fn generate_pem() -> CronusResult<AsymmetricKeyPair> {
    generate_pem_with_config(GenerateConfig::default())
}

pub fn generate_pem_with_config(config: GenerateConfig) -> CronusResult<AsymmetricKeyPair> {
    let mut store = FsArtifactStore;
    generate_key_pair_use_case(&mut store, config)
}

pub fn sign(config: SignConfig) -> CronusResult<Signature> {
    let mut store = FsArtifactStore;
    sign_message_use_case(&mut store, config)
}

pub fn verify(config: VerifyConfig) -> CronusResult<bool> {
    verify_signature_use_case(&FsArtifactStore, config)
}

pub fn exchange(config: ExchangeConfig) -> CronusResult<ExchangeTranscript> {
    run_exchange_use_case(&FsArtifactStore, config)
}
