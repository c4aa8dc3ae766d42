use serde::{Deserialize, Serialize};

/// A ledger-anchored evidence record binding a content hash to a signer.
///
/// Created exactly once per `(hash, signer)` pair and immutable thereafter;
/// ledger-backed permanence is the point of "evidence".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceRecord {
    /// The hex-encoded content hash that was anchored.
    pub hash: String,
    /// Ledger handle under which this record is addressable.
    pub anchor_reference: String,
    /// DID URI of the identity that produced the anchoring signature.
    pub signer: String,
    /// Hex-encoded Ed25519 signature over the anchored hash, proving the
    /// anchoring transaction's authenticity.
    pub signature: String,
    /// Anchoring time, UNIX seconds.
    pub timestamp: i64,
}
