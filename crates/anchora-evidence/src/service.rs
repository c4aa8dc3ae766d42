use std::sync::Arc;
use std::time::Duration;

use anchora_crypto::{KeyPair, Signature};
use anchora_identity::IdentityResolver;

use crate::error::EvidenceError;
use crate::ledger::EvidenceLedger;
use crate::record::EvidenceRecord;
use crate::verifier::{Ed25519SignatureVerifier, SignatureVerifier};

/// Default upper bound on a single ledger call.
const DEFAULT_LEDGER_TIMEOUT: Duration = Duration::from_secs(5);

/// Sequences hashing artifacts, ledger reads, identity resolution, and
/// signature verification into the `create_evidence` and `verify`
/// operations.
///
/// Stateless between calls: every invocation reads its inputs, performs at
/// most one ledger write or read, and returns. Concurrent `verify` calls are
/// independent pure reads.
pub struct EvidenceService {
    ledger: Arc<dyn EvidenceLedger>,
    resolver: Arc<dyn IdentityResolver>,
    verifier: Arc<dyn SignatureVerifier>,
    ledger_timeout: Duration,
}

impl EvidenceService {
    /// Create a service over the given ledger and resolver, verifying
    /// signatures with Ed25519 and bounding ledger calls at 5 seconds.
    pub fn new(ledger: Arc<dyn EvidenceLedger>, resolver: Arc<dyn IdentityResolver>) -> Self {
        Self {
            ledger,
            resolver,
            verifier: Arc::new(Ed25519SignatureVerifier),
            ledger_timeout: DEFAULT_LEDGER_TIMEOUT,
        }
    }

    /// Substitute the signature verifier implementation.
    pub fn with_verifier(mut self, verifier: Arc<dyn SignatureVerifier>) -> Self {
        self.verifier = verifier;
        self
    }

    /// Override the per-call ledger timeout.
    pub fn with_ledger_timeout(mut self, timeout: Duration) -> Self {
        self.ledger_timeout = timeout;
        self
    }

    /// Anchor a credential content hash on the evidence ledger.
    ///
    /// Returns the anchor reference under which the record is addressable.
    pub async fn create_evidence(
        &self,
        hash: &str,
        signer: &KeyPair,
    ) -> Result<String, EvidenceError> {
        if hash.trim().is_empty() {
            return Err(EvidenceError::IllegalInput("hash must not be empty".into()));
        }

        let reference = tokio::time::timeout(self.ledger_timeout, self.ledger.anchor(hash, signer))
            .await
            .map_err(|_| EvidenceError::Base("ledger anchor timed out".into()))??;

        tracing::info!(hash = hash, anchor_ref = %reference, "evidence created");
        Ok(reference)
    }

    /// Verify a presented content hash against an anchored evidence record.
    ///
    /// Pipeline, each stage short-circuiting on failure:
    /// 1. non-empty inputs;
    /// 2. fetch the record (missing or faulting fetch is an infrastructure
    ///    error);
    /// 3. presented hash equals the anchored hash; any upstream credential
    ///    mutation surfaces here, deliberately undistinguished;
    /// 4. the signer's identity document exists and is well-formed;
    /// 5. some authenticated key of that document validates the anchoring
    ///    signature.
    pub async fn verify(&self, hash: &str, anchor_reference: &str) -> Result<bool, EvidenceError> {
        if hash.trim().is_empty() {
            return Err(EvidenceError::IllegalInput("hash must not be empty".into()));
        }
        if anchor_reference.trim().is_empty() {
            return Err(EvidenceError::IllegalInput(
                "anchor reference must not be empty".into(),
            ));
        }

        let record = self.fetch_record(anchor_reference).await?;

        if record.hash != hash {
            tracing::warn!(anchor_ref = anchor_reference, "evidence hash mismatch");
            return Err(EvidenceError::HashMismatch);
        }

        let document = self
            .resolver
            .resolve(&record.signer)
            .await
            .map_err(|e| EvidenceError::Base(e.to_string()))?;
        if !document.is_wellformed() {
            tracing::warn!(signer = %record.signer, "signer document missing or malformed");
            return Err(EvidenceError::SignerDocumentIllegal(record.signer.clone()));
        }

        self.check_anchor_signature(&record, &document).await?;

        tracing::info!(hash = hash, signer = %record.signer, "evidence verified");
        Ok(true)
    }

    async fn fetch_record(&self, reference: &str) -> Result<EvidenceRecord, EvidenceError> {
        let fetched = tokio::time::timeout(self.ledger_timeout, self.ledger.fetch(reference))
            .await
            .map_err(|_| EvidenceError::Base("ledger fetch timed out".into()))??;
        fetched.ok_or_else(|| {
            EvidenceError::Base(format!("no evidence record under reference {}", reference))
        })
    }

    async fn check_anchor_signature(
        &self,
        record: &EvidenceRecord,
        document: &anchora_identity::IdentityDocument,
    ) -> Result<(), EvidenceError> {
        // A corrupt stored signature is ledger damage, not a permission issue.
        let signature = Signature::from_hex(&record.signature)
            .map_err(|e| EvidenceError::Base(format!("stored signature malformed: {}", e)))?;

        let mut attempted = false;
        for key in document.authenticated_keys() {
            attempted = true;
            if self.verifier.verify(record.hash.as_bytes(), &signature, key)? {
                return Ok(());
            }
        }

        let reason = if attempted {
            "no authenticated key validates the anchoring signature"
        } else {
            "identity grants no authentication keys"
        };
        tracing::warn!(signer = %record.signer, reason = reason, "anchoring signature rejected");
        Err(EvidenceError::SignerDocumentIllegal(format!(
            "{}: {}",
            record.signer, reason
        )))
    }
}
