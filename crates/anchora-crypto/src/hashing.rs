use crate::error::CryptoError;

/// BLAKE3 hash (32 bytes).
pub type Hash = [u8; 32];

/// Compute the BLAKE3 digest of the given bytes.
///
/// Empty input is rejected: a zero-length canonical form never represents a
/// real credential, so hashing it would only mask an upstream bug.
pub fn digest(data: &[u8]) -> Result<Hash, CryptoError> {
    if data.is_empty() {
        return Err(CryptoError::EmptyInput);
    }
    Ok(*blake3::hash(data).as_bytes())
}

/// Compute the BLAKE3 digest and render it as a lowercase hex string.
pub fn digest_hex(data: &[u8]) -> Result<String, CryptoError> {
    Ok(hex::encode(digest(data)?))
}
