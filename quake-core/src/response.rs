//! Decoding of earthquake API responses.
//!
//! Kept free of any HTTP client so it can be exercised with canned bodies.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::earthquake::EarthquakeRecord;
use crate::error::{QuakeError, Result};

/// Status the API uses when the query bounds fall outside Chile.
pub const STATUS_BAD_REQUEST: u16 = 400;

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub struct ChileBounds {
    pub latitude: Range,
    pub longitude: Range,
}

/// Body of a 400 answer: the server's message plus the acceptable range.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct BoundsRejection {
    pub error: String,
    #[serde(rename = "chileBounds")]
    pub chile_bounds: ChileBounds,
}

impl fmt::Display for BoundsRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bounds = &self.chile_bounds;
        write!(
            f,
            "{}: Values must be between {} and {} for latitude, and {} and {} for longitude.",
            self.error,
            bounds.latitude.min,
            bounds.latitude.max,
            bounds.longitude.min,
            bounds.longitude.max
        )
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Option<Vec<EarthquakeRecord>>,
}

/// Turn a status code and body into records or the matching error.
///
/// A missing or null `results` field is an empty result set.
pub fn interpret_response(status: u16, body: &str) -> Result<Vec<EarthquakeRecord>> {
    if status == STATUS_BAD_REQUEST {
        let rejection: BoundsRejection = serde_json::from_str(body)?;
        return Err(QuakeError::Rejected(rejection));
    }
    if !(200..300).contains(&status) {
        return Err(QuakeError::UnexpectedStatus(status));
    }
    let response: SearchResponse = serde_json::from_str(body)?;
    Ok(response.results.unwrap_or_default())
}
