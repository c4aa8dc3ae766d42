use anchora_core::ErrorCode;

use crate::ledger::LedgerError;
use crate::verifier::VerifierFault;

/// Failures surfaced by the evidence write and verification pipelines.
///
/// Infrastructure faults (`Base`) are never conflated with content or
/// permission failures; each variant maps to exactly one [`ErrorCode`].
#[derive(Debug, thiserror::Error)]
pub enum EvidenceError {
    #[error("illegal input: {0}")]
    IllegalInput(String),

    #[error("presented hash does not match the anchored hash")]
    HashMismatch,

    #[error("signer document illegal: {0}")]
    SignerDocumentIllegal(String),

    #[error("evidence infrastructure fault: {0}")]
    Base(String),
}

impl EvidenceError {
    /// Map this error onto the closed caller-facing code taxonomy.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::IllegalInput(_) => ErrorCode::IllegalInput,
            Self::HashMismatch => ErrorCode::EvidenceHashMismatch,
            Self::SignerDocumentIllegal(_) => ErrorCode::SignerDocumentIllegal,
            Self::Base(_) => ErrorCode::EvidenceBaseError,
        }
    }
}

impl From<LedgerError> for EvidenceError {
    fn from(e: LedgerError) -> Self {
        Self::Base(e.to_string())
    }
}

impl From<VerifierFault> for EvidenceError {
    fn from(e: VerifierFault) -> Self {
        Self::Base(e.to_string())
    }
}
