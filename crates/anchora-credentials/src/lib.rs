//! Anchora Credentials — Credential data model, canonical byte production,
//! and content hash computation.
//!
//! The content hash produced here is what gets anchored on the evidence
//! ledger and recomputed at verification time. Determinism of the canonical
//! form is the load-bearing property: identical semantic content must always
//! yield identical bytes.

pub mod canonical;
pub mod credential;
pub mod error;

pub use canonical::{canonical_bytes, compute_credential_hash, signing_payload};
pub use credential::{Credential, SIGNATURE_VALUE_KEY};
pub use error::CredentialError;
