/// Error types for the quake library
use thiserror::Error;

use crate::response::BoundsRejection;
use quake_utils::error::DateError;

/// Main error type for quake operations
#[derive(Error, Debug)]
pub enum QuakeError {
    /// Region name is not one of the known Chilean regions
    #[error("Select a valid region ({0:?} is not a known region)")]
    UnknownRegion(String),

    /// Bounding box corners are out of order or not finite
    #[error("Invalid bounding box: {0}")]
    InvalidBounds(String),

    /// Date input could not be parsed
    #[error("Invalid {field} date: {source}")]
    InvalidDate {
        field: &'static str,
        #[source]
        source: DateError,
    },

    /// Date input lies after today
    #[error("The {field} date {date} is in the future")]
    FutureDate { field: &'static str, date: String },

    /// Start of the date range comes after its end
    #[error("The start date {date_min} is after the end date {date_max}")]
    DateOrder { date_min: String, date_max: String },

    /// Page size of zero
    #[error("Page size must be greater than zero")]
    InvalidPageSize,

    /// Server refused the query bounds (HTTP 400)
    #[error("{0}")]
    Rejected(BoundsRejection),

    /// Server answered with a status we do not handle
    #[error("Unexpected response status: {0}")]
    UnexpectedStatus(u16),

    /// Failed to parse HTTP response
    #[error("Failed to parse HTTP response: {0}")]
    ResponseParse(#[from] serde_json::Error),

    /// HTTP request failed
    #[cfg(feature = "api")]
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// Failed to write CSV data
    #[error("Failed to write CSV: {0}")]
    CsvWrite(#[from] csv::Error),

    /// Failed to write output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl QuakeError {
    /// True for mistakes the user can fix in the search form before anything
    /// is sent. These never reach the network layer.
    pub fn is_user_input(&self) -> bool {
        matches!(
            self,
            QuakeError::UnknownRegion(_)
                | QuakeError::InvalidBounds(_)
                | QuakeError::InvalidDate { .. }
                | QuakeError::FutureDate { .. }
                | QuakeError::DateOrder { .. }
                | QuakeError::InvalidPageSize
        )
    }
}

/// Type alias for Results using QuakeError
pub type Result<T> = std::result::Result<T, QuakeError>;
