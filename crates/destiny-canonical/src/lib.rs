//! Canonical encoding primitives for Destiny Matrix results.
//!
//! A matrix computed for a given birth date must be bit-exact across
//! implementations. This crate pins down what "bit-exact" means: RFC 8785
//! canonical JSON bytes, and a domain-separated SHA-256 fingerprint over
//! those bytes.
//!
#![deny(missing_docs)]

/// Canonicalization helpers for deterministic encoding.
pub mod canonicalizer;
/// Digest primitives.
pub mod digest;
/// Domain-separated fingerprints over canonical bytes.
pub mod fingerprint;
/// Validation helpers used by canonical types.
pub mod validation;

pub use canonicalizer::{CanonicalizationError, Canonicalizer};
pub use digest::{Digest, DigestAlg};
pub use fingerprint::{compute_fingerprint, FingerprintError, MATRIX_DOMAIN_SEPARATOR};
pub use validation::ValidationError;
