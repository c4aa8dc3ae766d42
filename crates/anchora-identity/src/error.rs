/// Identity system errors.
#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    #[error("identity not found: {0}")]
    NotFound(String),

    #[error("identity resolution failed: {0}")]
    Resolution(String),

    #[error("crypto error: {0}")]
    Crypto(#[from] anchora_crypto::CryptoError),

    #[error("core error: {0}")]
    Core(#[from] anchora_core::CoreError),
}
