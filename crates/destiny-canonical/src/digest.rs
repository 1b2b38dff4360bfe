use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::validation::ValidationError;

/// Hash used for matrix fingerprints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DigestAlg {
    /// SHA-256, written `sha-256` on the wire and in the text form.
    #[serde(rename = "sha-256")]
    Sha256,
}

impl DigestAlg {
    /// Wire name of the algorithm.
    pub fn as_str(self) -> &'static str {
        match self {
            DigestAlg::Sha256 => "sha-256",
        }
    }
}

/// A matrix fingerprint: algorithm plus unpadded base64url hash.
///
/// The text form `sha-256:<b64>` is what the CLI prints and what [`FromStr`]
/// accepts, so fingerprints from two implementations can be compared directly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Digest {
    /// Hash algorithm.
    pub alg: DigestAlg,
    /// Unpadded base64url hash bytes (43 characters for SHA-256).
    pub b64: String,
}

impl Digest {
    /// Builds a digest, checking that `b64` is unpadded base64url of hash length.
    pub fn new(alg: DigestAlg, b64: impl Into<String>) -> Result<Self, ValidationError> {
        let b64 = b64.into();
        let re = Regex::new(r"^[A-Za-z0-9_-]{43}$").expect("invalid regex");
        if !re.is_match(&b64) {
            return Err(ValidationError::PatternMismatch {
                field: "fingerprint",
                value: b64,
            });
        }
        Ok(Digest { alg, b64 })
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.alg.as_str(), self.b64)
    }
}

impl FromStr for Digest {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let b64 = s
            .strip_prefix("sha-256:")
            .ok_or_else(|| ValidationError::PatternMismatch {
                field: "fingerprint",
                value: s.to_string(),
            })?;
        Digest::new(DigestAlg::Sha256, b64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_short_hash() {
        let err = Digest::new(DigestAlg::Sha256, "abc").unwrap_err();
        assert!(matches!(err, ValidationError::PatternMismatch { field: "fingerprint", .. }));
    }

    #[test]
    fn rejects_padded_hash() {
        let padded = format!("{}=", "A".repeat(43));
        assert!(Digest::new(DigestAlg::Sha256, padded).is_err());
    }

    #[test]
    fn text_form_parses_back() {
        let digest = Digest::new(DigestAlg::Sha256, "A".repeat(43)).unwrap();
        let text = digest.to_string();
        assert_eq!(text, format!("sha-256:{}", "A".repeat(43)));
        assert_eq!(text.parse::<Digest>().unwrap(), digest);
    }

    #[test]
    fn text_form_requires_algorithm_prefix() {
        assert!("A".repeat(43).parse::<Digest>().is_err());
        assert!(format!("sha-512:{}", "A".repeat(43)).parse::<Digest>().is_err());
    }
}
