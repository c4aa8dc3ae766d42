use async_trait::async_trait;
use dashmap::DashMap;

use anchora_core::now_seconds;
use anchora_crypto::{digest, sign, KeyPair};
use anchora_identity::did_for_key;

use crate::record::EvidenceRecord;

/// Ledger transport errors: the write or read could not be carried out.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("ledger unavailable: {0}")]
    Unavailable(String),

    #[error("ledger write rejected: {0}")]
    WriteRejected(String),
}

/// Write and read seam to the evidence ledger.
///
/// The transport behind it is opaque; the orchestrator only requires that a
/// completed `anchor` is immediately visible to subsequent `fetch` calls on
/// the returned reference.
#[async_trait]
pub trait EvidenceLedger: Send + Sync {
    /// Anchor a content hash under the signer's identity.
    ///
    /// Idempotent per `(hash, signer)`: re-anchoring the same hash with the
    /// same signer returns the existing reference. A different signer
    /// produces a distinct record under a distinct reference; the ledger
    /// key is the reference, not the hash alone.
    async fn anchor(&self, hash: &str, signer: &KeyPair) -> Result<String, LedgerError>;

    /// Fetch the record anchored under `reference`.
    ///
    /// Unknown or malformed references yield `Ok(None)`; `Err` is reserved
    /// for transport faults.
    async fn fetch(&self, reference: &str) -> Result<Option<EvidenceRecord>, LedgerError>;
}

/// In-memory reference ledger with read-after-write visibility.
pub struct MemoryLedger {
    records: DashMap<String, EvidenceRecord>,
}

impl MemoryLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
        }
    }

    /// Number of anchored records.
    pub fn count(&self) -> usize {
        self.records.len()
    }

    /// Deterministic reference for a `(hash, signer)` pair.
    fn reference_for(hash: &str, signer_did: &str) -> String {
        // Never empty, so the digest cannot fail.
        let material = format!("{}:{}", hash, signer_did);
        let digest = digest(material.as_bytes()).unwrap_or_default();
        hex::encode(&digest[..20])
    }
}

impl Default for MemoryLedger {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EvidenceLedger for MemoryLedger {
    async fn anchor(&self, hash: &str, signer: &KeyPair) -> Result<String, LedgerError> {
        let did = did_for_key(&signer.public_key());
        let reference = Self::reference_for(hash, did.uri());

        if self.records.contains_key(&reference) {
            tracing::debug!(hash = hash, anchor_ref = %reference, "evidence already anchored");
            return Ok(reference);
        }

        let signature = sign(hash.as_bytes(), signer);
        let record = EvidenceRecord {
            hash: hash.to_string(),
            anchor_reference: reference.clone(),
            signer: did.uri().to_string(),
            signature: signature.to_hex(),
            timestamp: now_seconds(),
        };
        self.records.insert(reference.clone(), record);
        tracing::info!(hash = hash, signer = %did, anchor_ref = %reference, "evidence anchored");
        Ok(reference)
    }

    async fn fetch(&self, reference: &str) -> Result<Option<EvidenceRecord>, LedgerError> {
        Ok(self.records.get(reference).map(|r| r.clone()))
    }
}
