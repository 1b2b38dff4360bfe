//! Birth-date validation performed before the engine is invoked.
//!
//! The engine trusts its input, so the CLI enforces a real calendar date,
//! not in the future, with a year no earlier than 1900.

use chrono::{Datelike, Local, NaiveDate};
use destiny_core::BirthDate;
use thiserror::Error;

/// Earliest accepted birth year.
pub const MIN_YEAR: i32 = 1900;

/// Reasons a birth date is refused.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateError {
    /// Not `YYYY-MM-DD`, or not a real calendar day.
    #[error("'{0}' is not a valid date (expected YYYY-MM-DD)")]
    Invalid(String),
    /// Before the supported range.
    #[error("year {0} is before 1900")]
    TooEarly(i32),
    /// After today.
    #[error("{0} is in the future")]
    InFuture(NaiveDate),
}

/// Parses and validates `input` against today's local date.
pub fn parse_birth_date(input: &str) -> Result<BirthDate, DateError> {
    validate(input, Local::now().date_naive())
}

fn validate(input: &str, today: NaiveDate) -> Result<BirthDate, DateError> {
    let birth_date =
        BirthDate::parse(input.trim()).map_err(|_| DateError::Invalid(input.to_string()))?;
    let date = NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| DateError::Invalid(input.to_string()))?;

    if date.year() < MIN_YEAR {
        return Err(DateError::TooEarly(date.year()));
    }
    if date > today {
        return Err(DateError::InFuture(date));
    }
    log::debug!("validated birth date {}", birth_date);
    Ok(birth_date)
}
