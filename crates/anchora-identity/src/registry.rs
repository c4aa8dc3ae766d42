use dashmap::DashMap;

use anchora_core::{now_seconds, Did};
use anchora_crypto::{digest, PublicKey};

use crate::document::{IdentityDocument, PublicKeyEntry};
use crate::error::IdentityError;

/// Derive the DID for an Ed25519 public key.
///
/// The identifier is the first 20 bytes of the BLAKE3 digest of the raw
/// public key, hex-encoded. Any party holding the key pair derives the same
/// DID, which is how a private-key handle names its signer identity.
pub fn did_for_key(key: &PublicKey) -> Did {
    // to_bytes() is never empty, so the digest cannot fail.
    let hash = digest(&key.to_bytes()).unwrap_or_default();
    Did::from_identifier(&hex::encode(&hash[..20]))
}

/// In-memory identity registry.
///
/// Stands in for the on-ledger identity document store: registration creates
/// a document listing the key *without* an authentication grant; the grant is
/// a separate, explicit step.
pub struct IdentityRegistry {
    documents: DashMap<String, IdentityDocument>,
}

impl IdentityRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            documents: DashMap::new(),
        }
    }

    /// Register a new identity for the given public key.
    ///
    /// The resulting document lists the key but grants it no authentication
    /// permission; call [`grant_authentication`](Self::grant_authentication)
    /// to allow the key to sign on the identity's behalf.
    pub fn register(&self, key: &PublicKey) -> Did {
        let did = did_for_key(key);
        self.documents
            .entry(did.uri().to_string())
            .or_insert_with(|| {
                tracing::info!(did = %did, "identity registered");
                IdentityDocument {
                    id: did.uri().to_string(),
                    public_keys: vec![PublicKeyEntry {
                        key: key.clone(),
                        authentication: false,
                    }],
                    exists: true,
                    created: now_seconds(),
                }
            });
        did
    }

    /// Grant the given key authentication permission on an identity.
    pub fn grant_authentication(&self, did: &Did, key: &PublicKey) -> Result<(), IdentityError> {
        let mut doc = self
            .documents
            .get_mut(did.uri())
            .ok_or_else(|| IdentityError::NotFound(did.uri().to_string()))?;
        match doc.public_keys.iter_mut().find(|entry| entry.key == *key) {
            Some(entry) => entry.authentication = true,
            None => doc.public_keys.push(PublicKeyEntry {
                key: key.clone(),
                authentication: true,
            }),
        }
        tracing::info!(did = %did, "authentication granted");
        Ok(())
    }

    /// Look up a document by DID URI. `None` means unregistered.
    pub fn get(&self, did: &str) -> Option<IdentityDocument> {
        self.documents.get(did).map(|doc| doc.clone())
    }

    /// Number of registered identities.
    pub fn count(&self) -> usize {
        self.documents.len()
    }
}

impl Default for IdentityRegistry {
    fn default() -> Self {
        Self::new()
    }
}
