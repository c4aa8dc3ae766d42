//! Anchora Identity Layer
//!
//! Provides the identity primitives the evidence pipeline verifies against:
//! - Identity documents (public keys with authentication grants)
//! - In-memory identity registry (create, grant authentication)
//! - Identity resolution (local, composite)

pub mod document;
pub mod error;
pub mod registry;
pub mod resolver;

pub use document::{IdentityDocument, PublicKeyEntry};
pub use error::IdentityError;
pub use registry::{did_for_key, IdentityRegistry};
pub use resolver::{CompositeResolver, IdentityResolver, LocalResolver};
