use async_trait::async_trait;
use std::sync::Arc;

use crate::document::IdentityDocument;
use crate::error::IdentityError;
use crate::registry::IdentityRegistry;

/// Trait for resolving identifiers to their identity documents.
///
/// An unregistered identifier resolves to a document with `exists == false`;
/// `Err` is reserved for infrastructure faults (backend unreachable).
#[async_trait]
pub trait IdentityResolver: Send + Sync {
    /// Resolve a DID URI to its identity document.
    async fn resolve(&self, did: &str) -> Result<IdentityDocument, IdentityError>;
}

/// Resolves identities from an in-memory [`IdentityRegistry`].
pub struct LocalResolver {
    registry: Arc<IdentityRegistry>,
}

impl LocalResolver {
    /// Create a new local resolver backed by a registry.
    pub fn new(registry: Arc<IdentityRegistry>) -> Self {
        Self { registry }
    }
}

#[async_trait]
impl IdentityResolver for LocalResolver {
    async fn resolve(&self, did: &str) -> Result<IdentityDocument, IdentityError> {
        Ok(self
            .registry
            .get(did)
            .unwrap_or_else(|| IdentityDocument::missing(did)))
    }
}

/// Composite resolver that tries multiple backends in order.
///
/// Returns the first existing document. Backends that fault are skipped; if
/// every backend faults, the last error is returned. If all backends answer
/// but none knows the identity, a missing document is returned.
pub struct CompositeResolver {
    resolvers: Vec<Box<dyn IdentityResolver>>,
}

impl CompositeResolver {
    /// Create a new composite resolver with no backends.
    pub fn new() -> Self {
        Self {
            resolvers: Vec::new(),
        }
    }

    /// Add a resolver to the chain.
    pub fn add_resolver(&mut self, resolver: Box<dyn IdentityResolver>) {
        self.resolvers.push(resolver);
    }

    /// Number of registered resolvers.
    pub fn resolver_count(&self) -> usize {
        self.resolvers.len()
    }
}

impl Default for CompositeResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IdentityResolver for CompositeResolver {
    async fn resolve(&self, did: &str) -> Result<IdentityDocument, IdentityError> {
        let mut last_error: Option<IdentityError> = None;
        let mut answered = false;

        for resolver in &self.resolvers {
            match resolver.resolve(did).await {
                Ok(doc) if doc.exists => return Ok(doc),
                Ok(_) => answered = true,
                Err(e) => {
                    tracing::debug!(did = did, error = %e, "resolver failed, trying next");
                    last_error = Some(e);
                }
            }
        }

        if answered {
            return Ok(IdentityDocument::missing(did));
        }
        Err(last_error
            .unwrap_or_else(|| IdentityError::Resolution("no resolvers configured".into())))
    }
}
