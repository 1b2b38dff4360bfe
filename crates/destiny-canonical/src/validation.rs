use thiserror::Error;

/// Rejections for textual input: birth dates, category names, and fingerprints.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The text does not have the expected shape (`YYYY-MM-DD`, a known
    /// category name, a `sha-256:` fingerprint).
    #[error("{field} '{value}' does not have the expected format")]
    PatternMismatch {
        /// Which input was rejected.
        field: &'static str,
        /// The rejected text.
        value: String,
    },
    /// Well-formed, but a component falls outside its range (month 13, day 0).
    #[error("{field} {value} is outside the accepted range")]
    OutOfBounds {
        /// Which component was rejected.
        field: &'static str,
        /// The rejected component.
        value: String,
    },
}
