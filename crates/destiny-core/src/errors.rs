use thiserror::Error;

/// Core error types.
///
/// Derivation itself never fails; these cover encoding a finished matrix.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Fingerprint computation failed.
    #[error("fingerprint computation failed: {0}")]
    Fingerprint(#[from] destiny_canonical::FingerprintError),
    /// Canonical encoding failed.
    #[error("canonicalization error: {0}")]
    Canonicalization(#[from] destiny_canonical::CanonicalizationError),
    /// Matrix could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
