use destiny_canonical::ValidationError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::arcana::digit_sum;

/// A calendar date of birth.
///
/// The engine trusts this value: whether it names a real day, lies in the
/// past, or falls in a sane year range is checked by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BirthDate {
    /// Four-digit year.
    pub year: u32,
    /// Month, `1..=12`.
    pub month: u32,
    /// Day of month, `1..=31`.
    pub day: u32,
}

impl BirthDate {
    /// Creates a birth date without validation; callers are responsible for conformity.
    pub fn new(year: u32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Parses `YYYY-MM-DD`.
    ///
    /// Only the shape is checked (pattern, month `1..=12`, day `1..=31`);
    /// `2023-02-31` parses.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        let mismatch = || ValidationError::PatternMismatch {
            field: "birth_date",
            value: value.to_string(),
        };
        let re = Regex::new(r"^([0-9]{4})-([0-9]{2})-([0-9]{2})$").expect("invalid regex");
        let caps = re.captures(value).ok_or_else(mismatch)?;

        let field = |idx: usize| caps[idx].parse::<u32>().map_err(|_| mismatch());
        let (year, month, day) = (field(1)?, field(2)?, field(3)?);

        if !(1..=12).contains(&month) {
            return Err(ValidationError::OutOfBounds {
                field: "month",
                value: month.to_string(),
            });
        }
        if !(1..=31).contains(&day) {
            return Err(ValidationError::OutOfBounds {
                field: "day",
                value: day.to_string(),
            });
        }
        Ok(Self { year, month, day })
    }

    /// Sum of the base-10 digits of the year (`1990` -> `19`).
    pub fn year_digit_sum(&self) -> u64 {
        digit_sum(u64::from(self.year))
    }
}

impl fmt::Display for BirthDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}
