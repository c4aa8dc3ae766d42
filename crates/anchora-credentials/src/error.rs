use anchora_core::ErrorCode;
use anchora_crypto::CryptoError;

/// Credential content errors raised while producing canonical bytes or the
/// content hash.
#[derive(Debug, thiserror::Error)]
pub enum CredentialError {
    #[error("credential id is missing or empty")]
    IdMissing,

    #[error("credential issuer is invalid: {0}")]
    IssuerInvalid(String),

    #[error("claim-type id must be positive, got {0}")]
    CptIdIllegal(i64),

    #[error("credential expired at {expiration}, now {now}")]
    Expired { expiration: i64, now: i64 },

    #[error("crypto error: {0}")]
    Crypto(#[from] CryptoError),

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl CredentialError {
    /// Map this error onto the closed caller-facing code taxonomy.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::IdMissing => ErrorCode::CredentialIdMissing,
            Self::IssuerInvalid(_) => ErrorCode::CredentialIssuerInvalid,
            Self::CptIdIllegal(_) => ErrorCode::CptIdIllegal,
            Self::Expired { .. } => ErrorCode::CredentialExpired,
            Self::Crypto(CryptoError::EmptyInput) => ErrorCode::IllegalInput,
            Self::Crypto(_) | Self::Serialization(_) => ErrorCode::IllegalInput,
        }
    }
}
