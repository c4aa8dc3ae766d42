use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CoreError;

/// Decentralized identifier in the Anchora protocol.
/// Format: `did:anchora:<identifier>`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Did(pub String);

impl Did {
    /// Create a new DID from a full URI string.
    pub fn new(uri: String) -> Result<Self, CoreError> {
        if !uri.starts_with("did:anchora:") {
            return Err(CoreError::InvalidDid(format!(
                "DID must start with 'did:anchora:', got: {}",
                uri
            )));
        }
        let identifier = &uri["did:anchora:".len()..];
        if identifier.is_empty() {
            return Err(CoreError::InvalidDid(format!(
                "DID must have format 'did:anchora:<identifier>', got: {}",
                uri
            )));
        }
        Ok(Self(uri))
    }

    /// Create a DID from its identifier component.
    pub fn from_identifier(identifier: &str) -> Self {
        Self(format!("did:anchora:{}", identifier))
    }

    /// Get the full DID URI.
    pub fn uri(&self) -> &str {
        &self.0
    }

    /// Extract the identifier component.
    pub fn identifier(&self) -> Option<&str> {
        self.0.strip_prefix("did:anchora:")
    }
}

impl fmt::Display for Did {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Current UNIX time in whole seconds.
///
/// All protocol timestamps are second-precision integers; sub-second
/// precision never enters canonical byte production.
pub fn now_seconds() -> i64 {
    chrono::Utc::now().timestamp()
}
