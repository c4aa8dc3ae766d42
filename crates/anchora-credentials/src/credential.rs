use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

use anchora_core::{now_seconds, Did};
use anchora_crypto::{sign, verify, KeyPair, PublicKey, Signature};

use crate::canonical::signing_payload;
use crate::error::CredentialError;

/// Proof entry carrying the issuer's signature over the signing payload.
pub const SIGNATURE_VALUE_KEY: &str = "signatureValue";

/// A signed claim about a subject, issued against a registered claim type.
///
/// Timestamps are UNIX seconds; sub-second precision never exists in this
/// representation, so it cannot leak into canonical bytes. The proof map is a
/// `BTreeMap` so its entries always serialize in key order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credential {
    /// Unique credential identifier.
    pub id: String,
    /// DID URI of the issuer.
    pub issuer: String,
    /// Claim-type (CPT) identifier; must be strictly positive.
    pub cpt_id: i64,
    /// When the credential was issued, UNIX seconds.
    pub issuance_date: i64,
    /// When the credential expires, UNIX seconds.
    pub expiration_date: i64,
    /// Claim payload as arbitrary JSON.
    pub claim: serde_json::Value,
    /// Proof entries; a signed credential holds at least `signatureValue`.
    pub proof: BTreeMap<String, String>,
}

impl Credential {
    /// Create a new unsigned credential valid for `validity_secs` from now.
    pub fn new(issuer: &Did, cpt_id: i64, claim: serde_json::Value, validity_secs: i64) -> Self {
        let now = now_seconds();
        Self {
            id: format!("urn:uuid:{}", Uuid::now_v7()),
            issuer: issuer.uri().to_string(),
            cpt_id,
            issuance_date: now,
            expiration_date: now + validity_secs,
            claim,
            proof: BTreeMap::new(),
        }
    }

    /// Sign this credential with the issuer's key pair.
    ///
    /// The signature covers every semantic field plus any proof entries
    /// already present, excluding `signatureValue` itself.
    pub fn sign(mut self, keypair: &KeyPair) -> Result<Self, CredentialError> {
        self.proof
            .insert("type".to_string(), "Ed25519Signature2020".to_string());
        self.proof
            .insert("created".to_string(), now_seconds().to_string());
        self.proof.insert(
            "creator".to_string(),
            format!("{}#keys-1", self.issuer),
        );

        let payload = signing_payload(&self)?;
        let signature = sign(&payload, keypair);
        self.proof
            .insert(SIGNATURE_VALUE_KEY.to_string(), signature.to_hex());

        tracing::debug!(credential_id = %self.id, issuer = %self.issuer, "credential signed");
        Ok(self)
    }

    /// The hex-encoded signature value, if the credential is signed.
    pub fn signature_value(&self) -> Option<&str> {
        self.proof.get(SIGNATURE_VALUE_KEY).map(String::as_str)
    }

    /// Whether the credential carries a signature.
    pub fn is_signed(&self) -> bool {
        self.signature_value().is_some()
    }

    /// Verify the credential's own signature against the given public key.
    pub fn verify_signature(&self, pubkey: &PublicKey) -> Result<(), CredentialError> {
        let sig_hex = self
            .signature_value()
            .ok_or_else(|| CredentialError::Serialization("credential is unsigned".into()))?;
        let signature = Signature::from_hex(sig_hex)?;
        let payload = signing_payload(self)?;
        verify(&payload, &signature, pubkey)?;
        Ok(())
    }

    /// Whether the credential is expired relative to `now` (UNIX seconds).
    pub fn is_expired(&self, now: i64) -> bool {
        now > self.expiration_date
    }
}
