//! HIYES document-number codec.
//!
//! Document numbers follow the fixed 13-character format `HIYES{YY}{M}{DD}{NNN}`:
//!
//! - `YY`: last two digits of the year
//! - `M`: month letter, `A` for January through `L` for December
//! - `DD`: day-of-month as a double-letter code (`AA` = 1 .. `AZ` = 26, `BA` = 27 .. `BE` = 31)
//! - `NNN`: per-day serial number, 001-999
//!
//! `HIYES25JBA001` is the first document of October 27, 2025. Encoding and
//! decoding are exact inverses over the valid domain. Reserving the next free
//! serial for a calendar day requires a transactional query against persisted
//! documents and is the caller's responsibility; this module only fixes the
//! contract that reservation must honor.

use chrono::{Datelike, NaiveDate};
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;
use thiserror::Error;

static PARSE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^HIYES(\d{2})([A-L])([A-Z]{2})(\d{3})$").expect("parse pattern is valid")
});

/// Decoded components of a HIYES document number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentNumber {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub counter: u16,
    /// The calendar date the components describe. `None` when the decoded day
    /// does not exist in the decoded month (day is a 1-31 ordinal independent
    /// of month length, so e.g. `BE` = 31 decodes fine inside April).
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NumberingError {
    #[error("invalid month: {0}, must be between 1 and 12")]
    MonthOutOfRange(u32),
    #[error("invalid day: {0}, must be between 1 and 31")]
    DayOutOfRange(u32),
    #[error("invalid counter: {0}, must be between 1 and 999")]
    CounterOutOfRange(u16),
}

/// Convert a month number (1-12) to its letter (A-L).
pub fn month_to_letter(month: u32) -> Result<char, NumberingError> {
    if !(1..=12).contains(&month) {
        return Err(NumberingError::MonthOutOfRange(month));
    }
    Ok(char::from(64 + month as u8))
}

/// Convert a day of month (1-31) to the double-letter code.
///
/// The first letter advances every 26 days (`A` for 1-26, `B` for 27-31) and
/// the second cycles A-Z inside each group, with day 26 landing on `AZ`
/// rather than rolling over.
pub fn day_to_double_letters(day: u32) -> Result<[char; 2], NumberingError> {
    if !(1..=31).contains(&day) {
        return Err(NumberingError::DayOutOfRange(day));
    }

    let first = 64 + (day / 26) as u8 + if day % 26 != 0 { 1 } else { 0 };
    let second = 64 + if day % 26 != 0 { (day % 26) as u8 } else { 26 };
    Ok([char::from(first), char::from(second)])
}

/// Encode a date and an already-reserved per-day serial into a HIYES number.
pub fn generate_document_number(date: NaiveDate, counter: u16) -> Result<String, NumberingError> {
    if !(1..=999).contains(&counter) {
        return Err(NumberingError::CounterOutOfRange(counter));
    }

    let year = date.year().rem_euclid(100);
    let month = month_to_letter(date.month())?;
    let [day_first, day_second] = day_to_double_letters(date.day())?;

    Ok(format!(
        "HIYES{year:02}{month}{day_first}{day_second}{counter:03}"
    ))
}

/// Decode a HIYES number back into its components.
///
/// Returns `None` when the string does not match the HIYES format at all;
/// callers routinely probe arbitrary identifiers, so a mismatch is a normal
/// outcome rather than an error.
pub fn parse_document_number(value: &str) -> Option<DocumentNumber> {
    let captures = PARSE_PATTERN.captures(value)?;

    // The pattern guarantees every group parses.
    let year = 2000 + captures[1].parse::<i32>().ok()?;
    let month = u32::from(captures[2].as_bytes()[0] - 64);
    let day_letters = captures[3].as_bytes();
    let day = (u32::from(day_letters[0] - 64) - 1) * 26 + u32::from(day_letters[1] - 64);
    let counter = captures[4].parse::<u16>().ok()?;

    let date = NaiveDate::from_ymd_opt(year, month, day);

    Some(DocumentNumber {
        year,
        month,
        day,
        counter,
        date,
    })
}

/// Lexical format check. Deliberately ignores whether the decoded day fits the
/// decoded month.
pub fn is_valid_document_number(value: &str) -> bool {
    PARSE_PATTERN.is_match(value)
}
