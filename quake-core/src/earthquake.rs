use serde::{Deserialize, Serialize};
use std::fmt;

/// Magnitude at or above which a quake gets the high severity marker.
pub const HIGH_MAGNITUDE: f64 = 7.0;

/// Magnitude at or above which a quake gets the medium severity marker.
pub const MEDIUM_MAGNITUDE: f64 = 5.0;

/// Record identifier; the API sends either a number or a string.
#[derive(Debug, PartialEq, Eq, Clone, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{n}"),
            RecordId::Text(s) => write!(f, "{s}"),
        }
    }
}

/// A single earthquake as returned by the API.
///
/// `latitude` and `longitude` are positive magnitudes; every quake in the
/// data source lies in the southern and western hemispheres, so display and
/// plotting negate them.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct EarthquakeRecord {
    #[serde(default)]
    pub id: Option<RecordId>,
    #[serde(default)]
    pub day: Option<u32>,
    #[serde(default)]
    pub month: Option<u32>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub hour: Option<u32>,
    #[serde(default)]
    pub minute: Option<u32>,
    pub latitude: f64,
    pub longitude: f64,
    pub magnitude_mwg: f64,
    #[serde(default)]
    pub depth: Option<f64>,
}

/// Marker class for the map view.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn from_magnitude(magnitude: f64) -> Severity {
        if magnitude >= HIGH_MAGNITUDE {
            Severity::High
        } else if magnitude >= MEDIUM_MAGNITUDE {
            Severity::Medium
        } else {
            Severity::Low
        }
    }

    /// Marker colour used by the map.
    pub fn color(&self) -> &'static str {
        match self {
            Severity::High => "red",
            Severity::Medium => "yellow",
            Severity::Low => "green",
        }
    }
}

/// What the map collaborator needs to plot one quake.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct MapMarker {
    pub id: Option<RecordId>,
    /// Signed latitude, already negated.
    pub latitude: f64,
    /// Signed longitude, already negated.
    pub longitude: f64,
    pub magnitude_mwg: f64,
    pub severity: Severity,
}

fn or_blank<T: fmt::Display>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

impl EarthquakeRecord {
    /// A record needs its day and month to be listed at all.
    pub fn has_date(&self) -> bool {
        self.day.is_some() && self.month.is_some()
    }

    /// Signed latitude for display and plotting.
    pub fn display_latitude(&self) -> f64 {
        -self.latitude
    }

    /// Signed longitude for display and plotting.
    pub fn display_longitude(&self) -> f64 {
        -self.longitude
    }

    pub fn severity(&self) -> Severity {
        Severity::from_magnitude(self.magnitude_mwg)
    }

    /// "H:M D/M/YYYY" as the results table shows it, fields unpadded.
    pub fn timestamp_label(&self) -> String {
        format!(
            "{}:{} {}/{}/{}",
            or_blank(self.hour),
            or_blank(self.minute),
            or_blank(self.day),
            or_blank(self.month),
            or_blank(self.year)
        )
    }

    pub fn to_marker(&self) -> MapMarker {
        MapMarker {
            id: self.id.clone(),
            latitude: self.display_latitude(),
            longitude: self.display_longitude(),
            magnitude_mwg: self.magnitude_mwg,
            severity: self.severity(),
        }
    }
}

/// Drop records that are missing their day or month, keeping the order of
/// the rest.
pub fn retain_dated(records: Vec<EarthquakeRecord>) -> Vec<EarthquakeRecord> {
    records.into_iter().filter(EarthquakeRecord::has_date).collect()
}
