//! Writers for result sets: CSV for the table, GeoJSON for the map.

use csv::WriterBuilder;
use serde::Serialize;
use serde_json::{json, Value};
use std::io::Write;

use crate::earthquake::{EarthquakeRecord, MapMarker};
use crate::error::Result;

#[derive(Serialize)]
struct CsvRow {
    id: String,
    date: String,
    magnitude_mwg: f64,
    latitude: f64,
    longitude: f64,
    depth: Option<f64>,
}

impl From<&EarthquakeRecord> for CsvRow {
    fn from(record: &EarthquakeRecord) -> Self {
        CsvRow {
            id: record.id.as_ref().map(|id| id.to_string()).unwrap_or_default(),
            date: record.timestamp_label(),
            magnitude_mwg: record.magnitude_mwg,
            latitude: record.display_latitude(),
            longitude: record.display_longitude(),
            depth: record.depth,
        }
    }
}

/// Write records as CSV with a header row, signed coordinates.
pub fn write_records_csv<W: Write>(records: &[EarthquakeRecord], writer: W) -> Result<()> {
    let mut wtr = WriterBuilder::new().has_headers(true).from_writer(writer);
    for record in records {
        wtr.serialize(CsvRow::from(record))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Markers as a GeoJSON FeatureCollection (coordinates are `[lon, lat]`).
pub fn markers_geojson(markers: &[MapMarker]) -> Value {
    let features: Vec<Value> = markers
        .iter()
        .map(|m| {
            json!({
                "type": "Feature",
                "geometry": {
                    "type": "Point",
                    "coordinates": [m.longitude, m.latitude],
                },
                "properties": {
                    "id": m.id,
                    "magnitude_mwg": m.magnitude_mwg,
                    "severity": m.severity,
                    "marker-color": m.severity.color(),
                },
            })
        })
        .collect();
    json!({
        "type": "FeatureCollection",
        "features": features,
    })
}
