use canonical_json::to_string;
use serde_json::Value;
use std::fmt;

/// Error returned when canonicalization fails.
#[derive(thiserror::Error, Debug)]
pub enum CanonicalizationError {
    /// Non-finite number (NaN/Infinity) detected.
    #[error("non-finite number detected at {0}")]
    NonFiniteNumber(String),
    /// Fractional number detected while running in integer-only mode.
    #[error("fractional number detected at {0}")]
    FractionalNumber(String),
    /// Generic failure.
    #[error("other error: {0}")]
    Other(String),
}

/// Helper for building JSON paths during validation.
#[derive(Debug, Clone)]
struct Path {
    segments: Vec<String>,
}

impl Path {
    fn root() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    fn push_field(&self, field: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(field.to_string());
        Self { segments }
    }

    fn push_index(&self, index: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(format!("[{}]", index));
        Self { segments }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            write!(f, "root")
        } else {
            write!(f, "{}", self.segments.join("."))
        }
    }
}

/// Canonicalizer that emits deterministic RFC 8785 bytes.
///
/// Matrix results only ever carry integers and strings, so [`Canonicalizer::integers_only`]
/// is the profile used for fingerprints: float formatting is where independent
/// encoders most often disagree, and refusing it keeps the bytes portable.
#[derive(Debug, Clone, Copy, Default)]
pub struct Canonicalizer {
    integers_only: bool,
}

impl Canonicalizer {
    /// Creates a canonicalizer that accepts any finite number.
    pub fn new() -> Self {
        Self {
            integers_only: false,
        }
    }

    /// Creates a canonicalizer that rejects fractional numbers.
    pub fn integers_only() -> Self {
        Self {
            integers_only: true,
        }
    }

    /// Produces canonical UTF-8 bytes for `value`.
    pub fn canonicalize(&self, value: &Value) -> Result<Vec<u8>, CanonicalizationError> {
        self.validate(value, Path::root())?;

        let canonical =
            to_string(value).map_err(|err| CanonicalizationError::Other(err.to_string()))?;
        Ok(canonical.into_bytes())
    }

    fn validate(&self, value: &Value, path: Path) -> Result<(), CanonicalizationError> {
        match value {
            Value::Object(map) => {
                for (key, child) in map {
                    self.validate(child, path.push_field(key))?;
                }
                Ok(())
            }
            Value::Array(items) => {
                for (idx, item) in items.iter().enumerate() {
                    self.validate(item, path.push_index(idx))?;
                }
                Ok(())
            }
            Value::Number(num) => {
                if let Some(f) = num.as_f64().filter(|_| num.is_f64()) {
                    if !f.is_finite() {
                        return Err(CanonicalizationError::NonFiniteNumber(path.to_string()));
                    }
                    if self.integers_only {
                        return Err(CanonicalizationError::FractionalNumber(path.to_string()));
                    }
                }
                Ok(())
            }
            Value::String(_) | Value::Bool(_) | Value::Null => Ok(()),
        }
    }
}
