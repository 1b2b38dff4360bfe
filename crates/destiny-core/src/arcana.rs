use log::trace;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper bound of the Arcana range.
const ARCANA_MAX: u32 = 22;

/// A value in the Arcana range `1..=22`.
///
/// Values are produced by [`reduce`]; [`Arcana::new`] only admits values that
/// are already in range. Serializes as a bare integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Arcana(u8);

impl Arcana {
    /// The master value, 22. Terminal: never reduced further.
    pub const MASTER: Arcana = Arcana(22);

    /// Returns the Arcana for `value` if it is already within `1..=22`.
    pub fn new(value: u32) -> Option<Self> {
        if (1..=ARCANA_MAX).contains(&value) {
            Some(Arcana(value as u8))
        } else {
            None
        }
    }

    /// Numeric value.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Returns `true` for the master value 22.
    pub fn is_master(self) -> bool {
        self == Self::MASTER
    }
}

impl From<Arcana> for u8 {
    fn from(value: Arcana) -> Self {
        value.0
    }
}

impl From<Arcana> for u32 {
    fn from(value: Arcana) -> Self {
        u32::from(value.0)
    }
}

impl From<Arcana> for u64 {
    fn from(value: Arcana) -> Self {
        u64::from(value.0)
    }
}

impl TryFrom<u8> for Arcana {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Arcana::new(u32::from(value)).ok_or_else(|| format!("arcana {} is outside 1..=22", value))
    }
}

impl fmt::Display for Arcana {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Reduces `n` into the Arcana range by repeated base-10 digit summation.
///
/// Values already at or below 22 are returned unchanged. Zero has no digit
/// chain to follow and maps to [`Arcana::MASTER`], so the result is always
/// within `1..=22`.
pub fn reduce(n: u64) -> Arcana {
    let mut value = n;
    while value > u64::from(ARCANA_MAX) {
        value = digit_sum(value);
        trace!("reduce({}): digit sum -> {}", n, value);
    }
    u32::try_from(value)
        .ok()
        .and_then(Arcana::new)
        .unwrap_or(Arcana::MASTER)
}

/// Sum of the base-10 digits of `n`.
pub(crate) fn digit_sum(mut n: u64) -> u64 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}
