//! Anchora Core — Fundamental types, errors, and constants for the
//! Anchora evidence anchoring protocol.

pub mod error;
pub mod types;

pub use error::{CoreError, ErrorCode};
pub use types::{now_seconds, Did};
