use anchora_crypto::{verify, CryptoError, PublicKey, Signature};

/// The verifier could not even attempt verification.
///
/// Distinct from a cryptographically invalid signature: a fault means the
/// verifier itself is broken or unreachable, which the orchestrator reports
/// as an infrastructure error rather than a falsified credential.
#[derive(Debug, thiserror::Error)]
#[error("signature verifier fault: {0}")]
pub struct VerifierFault(pub String);

/// Checks a signature against a message and a candidate public key.
///
/// `Ok(false)` means "cryptographically invalid"; `Err` means the check
/// could not be attempted at all. Implementations never panic. The trait is
/// the injection seam for fault simulation: substitute an implementation,
/// never patch internals.
pub trait SignatureVerifier: Send + Sync {
    /// Verify `signature` over `message` with `key`.
    fn verify(
        &self,
        message: &[u8],
        signature: &Signature,
        key: &PublicKey,
    ) -> Result<bool, VerifierFault>;
}

/// Verifier backed by the Ed25519 implementation in `anchora-crypto`.
pub struct Ed25519SignatureVerifier;

impl SignatureVerifier for Ed25519SignatureVerifier {
    fn verify(
        &self,
        message: &[u8],
        signature: &Signature,
        key: &PublicKey,
    ) -> Result<bool, VerifierFault> {
        match verify(message, signature, key) {
            Ok(()) => Ok(true),
            Err(CryptoError::SignatureVerificationFailed) => Ok(false),
            Err(e) => Err(VerifierFault(e.to_string())),
        }
    }
}
