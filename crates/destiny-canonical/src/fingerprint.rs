//! Fingerprints over canonical bytes.
//!
//! Fingerprints are computed as: `sha256(domain_separator || canonical_bytes(value))`.

use crate::{CanonicalizationError, Canonicalizer, Digest, DigestAlg, ValidationError};
use serde::Serialize;
use sha2::{Digest as Sha2Digest, Sha256};

/// Domain separator for matrix fingerprints: `b"destiny:matrix:v1\0"`.
pub const MATRIX_DOMAIN_SEPARATOR: &[u8] = b"destiny:matrix:v1\0";

/// Errors from fingerprint computation.
#[derive(thiserror::Error, Debug)]
pub enum FingerprintError {
    /// Value could not be serialized to JSON.
    #[error("serialization error: {0}")]
    Serialization(String),
    /// Canonicalization failed.
    #[error("canonicalization error: {0}")]
    Canonicalization(#[from] CanonicalizationError),
    /// The encoded digest failed validation.
    #[error("digest validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Computes a domain-separated SHA-256 fingerprint of `value`.
///
/// # Example
///
/// ```rust
/// use destiny_canonical::{compute_fingerprint, Canonicalizer, MATRIX_DOMAIN_SEPARATOR};
/// use serde_json::json;
///
/// let value = json!({ "channels": { "money": [5, 11, 6] } });
/// let digest = compute_fingerprint(&value, MATRIX_DOMAIN_SEPARATOR, &Canonicalizer::integers_only())?;
/// assert_eq!(digest.b64.len(), 43);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn compute_fingerprint<T: Serialize>(
    value: &T,
    domain_separator: &[u8],
    canonicalizer: &Canonicalizer,
) -> Result<Digest, FingerprintError> {
    let value =
        serde_json::to_value(value).map_err(|e| FingerprintError::Serialization(e.to_string()))?;
    let bytes = canonicalizer.canonicalize(&value)?;

    let mut hasher = Sha256::new();
    hasher.update(domain_separator);
    hasher.update(&bytes);
    let hash_bytes = hasher.finalize();

    use base64::Engine;
    let b64 = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(hash_bytes);
    Ok(Digest::new(DigestAlg::Sha256, b64)?)
}
