//! Integration test crate for the Anchora workspace.
//!
//! All tests live under `tests/`; this library is intentionally empty.
