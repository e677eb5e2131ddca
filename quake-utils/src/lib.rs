//! Shared utility functions for quake crates.

/// Date utility functions
pub mod dates {
    use chrono::{DateTime, Local, NaiveDate};

    use crate::error::DateError;

    /// Date format expected by the earthquake API: "YYYY-MM-DD"
    pub const WIRE_FORMAT: &str = "%Y-%m-%d";

    /// Calendar formats a date picker or a user may hand us, tried in order.
    const INPUT_FORMATS: [&str; 4] = [WIRE_FORMAT, "%d/%m/%Y", "%d-%m-%Y", "%Y/%m/%d"];

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format(WIRE_FORMAT).to_string()
    }

    /// Parse user date input into a calendar date.
    ///
    /// Accepts the picker's `YYYY-MM-DD`, the Chilean display forms
    /// `DD/MM/YYYY` and `DD-MM-YYYY`, `YYYY/MM/DD`, and RFC 3339 timestamps.
    /// A timestamp keeps the calendar date written in it; the offset never
    /// shifts the day.
    pub fn parse_date_input(input: &str) -> Result<NaiveDate, DateError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(DateError::Empty);
        }
        for format in INPUT_FORMATS {
            if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
                return Ok(date);
            }
        }
        DateTime::parse_from_rfc3339(trimmed)
            .map(|timestamp| timestamp.date_naive())
            .map_err(|_| DateError::Malformed(input.to_string()))
    }

    /// Re-serialize user date input as the zero-padded wire format.
    pub fn to_wire_format(input: &str) -> Result<String, DateError> {
        parse_date_input(input).map(|date| format_date(&date))
    }

    /// Today's calendar date on the local clock.
    pub fn today() -> NaiveDate {
        Local::now().date_naive()
    }

    /// True unless `date` falls after `today`. Today itself is allowed.
    pub fn is_not_future(date: &NaiveDate, today: NaiveDate) -> bool {
        *date <= today
    }

    /// String form of [`is_not_future`] against the local clock.
    /// Input that does not parse is never acceptable, so it reports `false`.
    pub fn input_is_not_future(input: &str) -> bool {
        parse_date_input(input)
            .map(|date| is_not_future(&date, today()))
            .unwrap_or(false)
    }

}

/// Error types
pub mod error {
    use thiserror::Error;

    /// Why a date input could not be used.
    #[derive(Error, Debug, Clone, PartialEq, Eq)]
    pub enum DateError {
        #[error("Date is required")]
        Empty,

        #[error("Date error: {0:?} is not a calendar date (expected YYYY-MM-DD)")]
        Malformed(String),
    }
}
