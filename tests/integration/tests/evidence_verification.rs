//! Integration test: evidence anchoring and verification across crates.
//!
//! Exercises the full pipeline — credential → canonical hash → ledger anchor
//! → identity resolution → signature verification — using
//! anchora-credentials, anchora-identity, and anchora-evidence together.

use std::sync::Arc;

use anchora_core::{now_seconds, Did, ErrorCode};
use anchora_credentials::{canonical_bytes, compute_credential_hash, Credential};
use anchora_crypto::{digest_hex, KeyPair, PublicKey, Signature};
use anchora_evidence::{EvidenceService, MemoryLedger, SignatureVerifier, VerifierFault};
use anchora_identity::{IdentityRegistry, LocalResolver};

struct World {
    registry: Arc<IdentityRegistry>,
    service: EvidenceService,
}

/// Fresh registry, ledger, and service per test — no shared fixtures.
fn world() -> World {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    let registry = Arc::new(IdentityRegistry::new());
    let ledger = Arc::new(MemoryLedger::new());
    let service = EvidenceService::new(ledger, Arc::new(LocalResolver::new(registry.clone())));
    World { registry, service }
}

/// Register an identity for the key pair and grant it signing permission.
fn authenticated_signer(world: &World) -> (KeyPair, Did) {
    let kp = KeyPair::generate();
    let did = world.registry.register(&kp.public_key());
    world
        .registry
        .grant_authentication(&did, &kp.public_key())
        .unwrap();
    (kp, did)
}

/// Issue a signed credential from the given issuer, valid for one hour.
fn issue_credential(issuer_did: &Did, issuer_key: &KeyPair) -> Credential {
    Credential::new(
        issuer_did,
        12,
        serde_json::json!({
            "degree": "Bachelor of Science",
            "graduation_year": 2024,
        }),
        3600,
    )
    .sign(issuer_key)
    .expect("signing should succeed")
}

// =========================================================================
// Round trip: hash → anchor → verify
// =========================================================================

#[tokio::test]
async fn test_round_trip_success() {
    let world = world();
    let (issuer_key, issuer_did) = authenticated_signer(&world);
    let credential = issue_credential(&issuer_did, &issuer_key);

    let hash = compute_credential_hash(&credential).unwrap();
    let reference = world
        .service
        .create_evidence(&hash, &issuer_key)
        .await
        .unwrap();

    assert!(world.service.verify(&hash, &reference).await.unwrap());
}

#[tokio::test]
async fn test_hash_is_deterministic_across_verifications() {
    let world = world();
    let (issuer_key, issuer_did) = authenticated_signer(&world);
    let credential = issue_credential(&issuer_did, &issuer_key);

    let hash = compute_credential_hash(&credential).unwrap();
    let reference = world
        .service
        .create_evidence(&hash, &issuer_key)
        .await
        .unwrap();

    // A holder re-presents the same credential later; the recomputed hash
    // still matches the anchored one.
    let recomputed = compute_credential_hash(&credential).unwrap();
    assert_eq!(hash, recomputed);
    assert!(world.service.verify(&recomputed, &reference).await.unwrap());
}

// =========================================================================
// Tamper sensitivity: content mutations collapse into hash mismatch
// =========================================================================

#[tokio::test]
async fn test_issuance_date_mutation_is_hash_mismatch() {
    let world = world();
    let (issuer_key, issuer_did) = authenticated_signer(&world);
    let credential = issue_credential(&issuer_did, &issuer_key);

    let hash = compute_credential_hash(&credential).unwrap();
    let reference = world
        .service
        .create_evidence(&hash, &issuer_key)
        .await
        .unwrap();

    let mut mutated = credential.clone();
    mutated.issuance_date += 1;
    let mutated_hash = compute_credential_hash(&mutated).unwrap();
    assert_ne!(hash, mutated_hash);

    let err = world
        .service
        .verify(&mutated_hash, &reference)
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::EvidenceHashMismatch);
}

#[tokio::test]
async fn test_signature_tamper_is_hash_mismatch_not_not_found() {
    let world = world();
    let (issuer_key, issuer_did) = authenticated_signer(&world);
    let credential = issue_credential(&issuer_did, &issuer_key);

    let hash = compute_credential_hash(&credential).unwrap();
    let reference = world
        .service
        .create_evidence(&hash, &issuer_key)
        .await
        .unwrap();

    // Flip one hex digit of the stored signature. The lookup hash covers the
    // signature, so the tamper shows up as a mismatch against the anchor,
    // never as a missing record.
    let mut mutated = credential.clone();
    let mut sig = mutated.signature_value().unwrap().to_string();
    let flipped = if sig.ends_with('0') { "1" } else { "0" };
    sig.replace_range(sig.len() - 1.., flipped);
    mutated
        .proof
        .insert(anchora_credentials::SIGNATURE_VALUE_KEY.into(), sig);

    let mutated_hash = compute_credential_hash(&mutated).unwrap();
    assert_ne!(hash, mutated_hash);

    let err = world
        .service
        .verify(&mutated_hash, &reference)
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::EvidenceHashMismatch);
}

#[tokio::test]
async fn test_expiration_mutation_is_hash_mismatch() {
    let world = world();
    let (issuer_key, issuer_did) = authenticated_signer(&world);
    let credential = issue_credential(&issuer_did, &issuer_key);

    let hash = compute_credential_hash(&credential).unwrap();
    let reference = world
        .service
        .create_evidence(&hash, &issuer_key)
        .await
        .unwrap();

    // Shift the expiration into the past. Recomputing the hash as of a time
    // when the credential was still live shows the collapse: the changed
    // field manifests as a mismatch against the anchor, with no hint of
    // which field was altered.
    let mut mutated = credential.clone();
    mutated.expiration_date = now_seconds() - 5;
    let bytes = canonical_bytes(&mutated, mutated.expiration_date - 60).unwrap();
    let mutated_hash = digest_hex(&bytes).unwrap();
    assert_ne!(hash, mutated_hash);

    let err = world
        .service
        .verify(&mutated_hash, &reference)
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::EvidenceHashMismatch);
}

// =========================================================================
// Content validation at hash-compute time
// =========================================================================

#[tokio::test]
async fn test_invalid_content_is_caught_before_verify() {
    let world = world();
    let (issuer_key, issuer_did) = authenticated_signer(&world);
    let credential = issue_credential(&issuer_did, &issuer_key);

    let mut blank_id = credential.clone();
    blank_id.id = String::new();
    let err = compute_credential_hash(&blank_id).unwrap_err();
    assert_eq!(err.code(), ErrorCode::CredentialIdMissing);

    let mut blank_issuer = credential.clone();
    blank_issuer.issuer = String::new();
    let err = compute_credential_hash(&blank_issuer).unwrap_err();
    assert_eq!(err.code(), ErrorCode::CredentialIssuerInvalid);

    let mut bad_cpt = credential.clone();
    bad_cpt.cpt_id = -1;
    let err = compute_credential_hash(&bad_cpt).unwrap_err();
    assert_eq!(err.code(), ErrorCode::CptIdIllegal);

    let mut expired = credential.clone();
    expired.expiration_date = now_seconds() - 5;
    let err = compute_credential_hash(&expired).unwrap_err();
    assert_eq!(err.code(), ErrorCode::CredentialExpired);
}

// =========================================================================
// Signer identity failure modes
// =========================================================================

#[tokio::test]
async fn test_unregistered_signer_rejected() {
    let world = world();
    let (issuer_key, issuer_did) = authenticated_signer(&world);
    let credential = issue_credential(&issuer_did, &issuer_key);
    let hash = compute_credential_hash(&credential).unwrap();

    // Anchoring succeeds with any key; verification rejects the unknown
    // signer identity.
    let stranger = KeyPair::generate();
    let reference = world
        .service
        .create_evidence(&hash, &stranger)
        .await
        .unwrap();

    let err = world.service.verify(&hash, &reference).await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::SignerDocumentIllegal);
}

#[tokio::test]
async fn test_reanchor_with_ungranted_signer() {
    let world = world();
    let (issuer_key, issuer_did) = authenticated_signer(&world);
    let credential = issue_credential(&issuer_did, &issuer_key);
    let hash = compute_credential_hash(&credential).unwrap();

    // Signer A: registered and granted. Signer B: registered, never granted.
    let signer_b = KeyPair::generate();
    world.registry.register(&signer_b.public_key());

    let ref_a = world
        .service
        .create_evidence(&hash, &issuer_key)
        .await
        .unwrap();
    let ref_b = world
        .service
        .create_evidence(&hash, &signer_b)
        .await
        .unwrap();
    assert_ne!(ref_a, ref_b);

    assert!(world.service.verify(&hash, &ref_a).await.unwrap());
    let err = world.service.verify(&hash, &ref_b).await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::SignerDocumentIllegal);

    // A's evidence remains verifiable after B's anchor.
    assert!(world.service.verify(&hash, &ref_a).await.unwrap());
}

// =========================================================================
// Input guards and infrastructure faults
// =========================================================================

#[tokio::test]
async fn test_empty_arguments_rejected() {
    let world = world();
    let (issuer_key, issuer_did) = authenticated_signer(&world);
    let credential = issue_credential(&issuer_did, &issuer_key);
    let hash = compute_credential_hash(&credential).unwrap();
    let reference = world
        .service
        .create_evidence(&hash, &issuer_key)
        .await
        .unwrap();

    let err = world.service.verify(&hash, "").await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::IllegalInput);

    let err = world.service.verify("", &reference).await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::IllegalInput);
}

struct FaultyVerifier;

impl SignatureVerifier for FaultyVerifier {
    fn verify(
        &self,
        _message: &[u8],
        _signature: &Signature,
        _key: &PublicKey,
    ) -> Result<bool, VerifierFault> {
        Err(VerifierFault("verifier backend unreachable".into()))
    }
}

#[tokio::test]
async fn test_verifier_fault_is_infrastructure_error() {
    let registry = Arc::new(IdentityRegistry::new());
    let ledger = Arc::new(MemoryLedger::new());
    let service = EvidenceService::new(
        ledger.clone(),
        Arc::new(LocalResolver::new(registry.clone())),
    )
    .with_verifier(Arc::new(FaultyVerifier));

    let kp = KeyPair::generate();
    let did = registry.register(&kp.public_key());
    registry.grant_authentication(&did, &kp.public_key()).unwrap();

    let credential = issue_credential(&did, &kp);
    let hash = compute_credential_hash(&credential).unwrap();
    let reference = service.create_evidence(&hash, &kp).await.unwrap();

    // A broken verifier is reported as an infrastructure fault, never as a
    // success or a cryptographic rejection.
    let err = service.verify(&hash, &reference).await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::EvidenceBaseError);
}

// =========================================================================
// Concurrency: verify is a pure read
// =========================================================================

#[tokio::test]
async fn test_concurrent_verifications_are_independent() {
    let world = world();
    let (issuer_key, issuer_did) = authenticated_signer(&world);
    let credential = issue_credential(&issuer_did, &issuer_key);
    let hash = compute_credential_hash(&credential).unwrap();
    let reference = world
        .service
        .create_evidence(&hash, &issuer_key)
        .await
        .unwrap();

    let service = Arc::new(world.service);
    let mut handles = Vec::new();
    for _ in 0..16 {
        let service = Arc::clone(&service);
        let hash = hash.clone();
        let reference = reference.clone();
        handles.push(tokio::spawn(async move {
            service.verify(&hash, &reference).await
        }));
    }
    for handle in handles {
        assert!(handle.await.unwrap().unwrap());
    }
}
