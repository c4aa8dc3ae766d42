use serde::{Deserialize, Serialize};

use anchora_crypto::PublicKey;

/// A public key listed in an identity document, together with its
/// authentication grant.
///
/// A key may be present without carrying an authentication grant — a freshly
/// registered identity lists its key but is not yet permitted to sign on the
/// identity's behalf until the grant is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicKeyEntry {
    /// The public key itself.
    pub key: PublicKey,
    /// Whether this key is authorized for signing on behalf of the identity.
    pub authentication: bool,
}

/// The resolved view of an identity.
///
/// Resolution always produces a document; `exists == false` represents
/// "no such identity" rather than an error, so callers can distinguish an
/// unregistered signer from a resolver infrastructure fault.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentityDocument {
    /// Full DID URI of the identity.
    pub id: String,
    /// Public keys and their authentication grants.
    pub public_keys: Vec<PublicKeyEntry>,
    /// Whether the identity is registered at all.
    pub exists: bool,
    /// Registration time, UNIX seconds. Zero for missing documents.
    pub created: i64,
}

impl IdentityDocument {
    /// Placeholder document for an unregistered identity.
    pub fn missing(id: &str) -> Self {
        Self {
            id: id.to_string(),
            public_keys: Vec::new(),
            exists: false,
            created: 0,
        }
    }

    /// Whether the document is present and structurally usable.
    ///
    /// An existing document with no public keys at all cannot authenticate
    /// anything and is treated as malformed by the verification pipeline.
    pub fn is_wellformed(&self) -> bool {
        self.exists && !self.public_keys.is_empty()
    }

    /// Whether the given key is listed with an authentication grant.
    pub fn has_authentication_key(&self, candidate: &PublicKey) -> bool {
        self.public_keys
            .iter()
            .any(|entry| entry.authentication && entry.key == *candidate)
    }

    /// Iterate over the keys that carry an authentication grant.
    pub fn authenticated_keys(&self) -> impl Iterator<Item = &PublicKey> {
        self.public_keys
            .iter()
            .filter(|entry| entry.authentication)
            .map(|entry| &entry.key)
    }
}
