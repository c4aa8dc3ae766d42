//! Anchora Evidence — Ledger-anchored evidence records and the layered
//! verification pipeline.
//!
//! The write path anchors a credential content hash as an immutable
//! [`EvidenceRecord`]; the read path re-verifies a presented hash against the
//! anchored record, the signer's resolved identity document, and the
//! anchoring signature. Each pipeline stage maps to exactly one code in the
//! closed [`anchora_core::ErrorCode`] taxonomy.

pub mod error;
pub mod ledger;
pub mod record;
pub mod service;
pub mod verifier;

pub use error::EvidenceError;
pub use ledger::{EvidenceLedger, LedgerError, MemoryLedger};
pub use record::EvidenceRecord;
pub use service::EvidenceService;
pub use verifier::{Ed25519SignatureVerifier, SignatureVerifier, VerifierFault};
