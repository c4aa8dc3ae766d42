use serde::{Deserialize, Serialize};
use std::fmt;

/// Core protocol errors.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("invalid DID format: {0}")]
    InvalidDid(String),

    #[error("validation error: {0}")]
    ValidationError(String),
}

/// Closed taxonomy of caller-facing result codes.
///
/// Every caller-facing operation resolves to exactly one code. `Success` is
/// the only code ever paired with a usable payload; all other codes identify
/// a distinct failure condition. Infrastructure faults (`EvidenceBaseError`)
/// are deliberately kept apart from cryptographic or content failures so that
/// operators can tell "invalid credential" from "system unavailable".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    /// All pipeline stages passed.
    Success,
    /// Null/empty required argument at the API boundary.
    IllegalInput,
    /// Credential `id` missing or empty during hash computation.
    CredentialIdMissing,
    /// Credential `issuer` missing, empty, or not a well-formed identifier.
    CredentialIssuerInvalid,
    /// Claim-type (CPT) identifier is non-positive.
    CptIdIllegal,
    /// Credential `expiration_date` lies in the past at hash-compute time.
    CredentialExpired,
    /// Recomputed credential hash disagrees with the anchored hash.
    EvidenceHashMismatch,
    /// Signer identity missing, malformed, or lacking authentication
    /// permission for the signing key used.
    SignerDocumentIllegal,
    /// Ledger or cryptographic-verifier infrastructure fault.
    EvidenceBaseError,
}

impl ErrorCode {
    /// Stable numeric code for logging and alerting.
    pub fn code(&self) -> u32 {
        match self {
            Self::Success => 0,
            Self::IllegalInput => 160_004,
            Self::CredentialIdMissing => 100_401,
            Self::CredentialIssuerInvalid => 100_402,
            Self::CptIdIllegal => 100_403,
            Self::CredentialExpired => 100_404,
            Self::EvidenceHashMismatch => 100_405,
            Self::SignerDocumentIllegal => 100_406,
            Self::EvidenceBaseError => 100_407,
        }
    }

    /// Whether this code represents a successful outcome.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Short machine-readable name for the code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::IllegalInput => "illegal_input",
            Self::CredentialIdMissing => "credential_id_missing",
            Self::CredentialIssuerInvalid => "credential_issuer_invalid",
            Self::CptIdIllegal => "cpt_id_illegal",
            Self::CredentialExpired => "credential_expired",
            Self::EvidenceHashMismatch => "evidence_hash_mismatch",
            Self::SignerDocumentIllegal => "signer_document_illegal",
            Self::EvidenceBaseError => "evidence_base_error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.as_str(), self.code())
    }
}
