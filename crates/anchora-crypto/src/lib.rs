//! Anchora Crypto — Ed25519 key pairs and signatures, BLAKE3 content digests.

pub mod error;
pub mod hashing;
pub mod keys;
pub mod signing;

pub use error::CryptoError;
pub use hashing::{digest, digest_hex, Hash};
pub use keys::{KeyPair, PublicKey};
pub use signing::{sign, verify, Signature};
