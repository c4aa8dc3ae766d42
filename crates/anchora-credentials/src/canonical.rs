//! Canonical byte production for credential hashing.
//!
//! Two byte forms exist, and the difference between them is deliberate:
//!
//! - the **signing payload** excludes `proof.signatureValue` (the signature
//!   is computed over everything else);
//! - the **canonical form** includes the full proof, signature and all, so
//!   that tampering with the signature changes the content hash and surfaces
//!   as a hash mismatch at verification time rather than a false "not found".
//!
//! Determinism comes from `serde_json`'s sorted object maps plus a fixed
//! top-level field set; field insertion order and incidental formatting can
//! never influence the output.

use anchora_core::{now_seconds, Did};
use anchora_crypto::digest_hex;

use crate::credential::{Credential, SIGNATURE_VALUE_KEY};
use crate::error::CredentialError;

fn credential_value(credential: &Credential, include_signature: bool) -> serde_json::Value {
    let mut proof = credential.proof.clone();
    if !include_signature {
        proof.remove(SIGNATURE_VALUE_KEY);
    }
    serde_json::json!({
        "id": credential.id,
        "issuer": credential.issuer,
        "cptId": credential.cpt_id,
        "issuanceDate": credential.issuance_date,
        "expirationDate": credential.expiration_date,
        "claim": credential.claim,
        "proof": proof,
    })
}

/// Validate the credential's content fields.
///
/// Check order is fixed: id, issuer, claim-type id, expiration. The first
/// failing check wins.
fn validate(credential: &Credential, now: i64) -> Result<(), CredentialError> {
    if credential.id.trim().is_empty() {
        return Err(CredentialError::IdMissing);
    }
    if credential.issuer.trim().is_empty() {
        return Err(CredentialError::IssuerInvalid("empty issuer".into()));
    }
    Did::new(credential.issuer.clone())
        .map_err(|e| CredentialError::IssuerInvalid(e.to_string()))?;
    if credential.cpt_id <= 0 {
        return Err(CredentialError::CptIdIllegal(credential.cpt_id));
    }
    if credential.is_expired(now) {
        return Err(CredentialError::Expired {
            expiration: credential.expiration_date,
            now,
        });
    }
    Ok(())
}

/// Deterministic bytes the issuer signs: the full credential content minus
/// `proof.signatureValue`.
pub fn signing_payload(credential: &Credential) -> Result<Vec<u8>, CredentialError> {
    serde_json::to_vec(&credential_value(credential, false))
        .map_err(|e| CredentialError::Serialization(e.to_string()))
}

/// Deterministic bytes the content hash is computed over: the full
/// credential including the signature.
///
/// Fails if the content is invalid relative to `now`; no bytes are produced
/// for an invalid credential.
pub fn canonical_bytes(credential: &Credential, now: i64) -> Result<Vec<u8>, CredentialError> {
    validate(credential, now)?;
    serde_json::to_vec(&credential_value(credential, true))
        .map_err(|e| CredentialError::Serialization(e.to_string()))
}

/// Compute the hex-encoded content hash anchored on the evidence ledger.
///
/// This is what callers run before `verify`: the same credential always
/// yields the same hash, and any single-field mutation (signature included)
/// yields a different one.
pub fn compute_credential_hash(credential: &Credential) -> Result<String, CredentialError> {
    let bytes = canonical_bytes(credential, now_seconds())?;
    Ok(digest_hex(&bytes)?)
}
