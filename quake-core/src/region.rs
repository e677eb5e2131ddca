use serde::{Deserialize, Serialize};

use crate::error::{QuakeError, Result};

/// A latitude/longitude rectangle in signed decimal degrees
/// (south and west are negative).
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub struct BoundingBox {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lon_min: f64,
    pub lon_max: f64,
}

impl BoundingBox {
    /// Build a box from user supplied corners.
    pub fn new(lat_min: f64, lat_max: f64, lon_min: f64, lon_max: f64) -> Result<BoundingBox> {
        if ![lat_min, lat_max, lon_min, lon_max].iter().all(|v| v.is_finite()) {
            return Err(QuakeError::InvalidBounds(
                "coordinates must be finite numbers".to_string(),
            ));
        }
        if lat_min > lat_max {
            return Err(QuakeError::InvalidBounds(format!(
                "latitude minimum {lat_min} is greater than maximum {lat_max}"
            )));
        }
        if lon_min > lon_max {
            return Err(QuakeError::InvalidBounds(format!(
                "longitude minimum {lon_min} is greater than maximum {lon_max}"
            )));
        }
        Ok(BoundingBox {
            lat_min,
            lat_max,
            lon_min,
            lon_max,
        })
    }

    /// Midpoint of the box as `(latitude, longitude)`.
    pub fn center(&self) -> (f64, f64) {
        (
            (self.lat_min + self.lat_max) / 2.0,
            (self.lon_min + self.lon_max) / 2.0,
        )
    }
}

/// One of the Chilean administrative regions the search form offers.
#[derive(Debug, PartialEq, Clone, Copy, Serialize)]
pub struct Region {
    /// Display name, including the Roman numeral code in parentheses.
    /// This is the lookup key and is matched literally.
    pub name: &'static str,
    pub code: &'static str,
    pub bounds: BoundingBox,
}

const fn region(
    name: &'static str,
    code: &'static str,
    lat_min: f64,
    lat_max: f64,
    lon_min: f64,
    lon_max: f64,
) -> Region {
    Region {
        name,
        code,
        bounds: BoundingBox {
            lat_min,
            lat_max,
            lon_min,
            lon_max,
        },
    }
}

/// Continental extents of each region, north to south in form order.
/// Oceanic islands (Juan Fernández, Rapa Nui) are outside every box.
static REGIONS: [Region; 16] = [
    region("Tarapacá (I)", "I", -21.65, -18.95, -70.30, -68.40),
    region("Antofagasta (II)", "II", -26.10, -20.90, -70.75, -67.00),
    region("Atacama (III)", "III", -29.55, -25.30, -71.60, -68.30),
    region("Coquimbo (IV)", "IV", -32.30, -29.00, -71.75, -69.80),
    region("Valparaíso (V)", "V", -33.95, -32.00, -71.85, -69.95),
    region("Metropolitana de Santiago (RM)", "RM", -34.30, -32.90, -71.75, -69.75),
    region("O'Higgins (VI)", "VI", -35.05, -33.85, -72.10, -70.00),
    region("Maule (VII)", "VII", -36.55, -34.70, -72.80, -70.30),
    region("Biobío (VIII)", "VIII", -38.50, -36.45, -73.95, -70.95),
    region("La Araucanía (IX)", "IX", -39.65, -37.55, -73.55, -70.80),
    region("Los Lagos (X)", "X", -44.10, -40.25, -74.90, -71.55),
    region("Aysén (XI)", "XI", -49.20, -43.60, -75.75, -71.05),
    region("Magallanes (XII)", "XII", -56.00, -48.60, -75.70, -66.40),
    region("Los Ríos (XIV)", "XIV", -40.70, -39.25, -73.75, -71.55),
    region("Arica y Parinacota (XV)", "XV", -19.25, -17.50, -70.40, -68.90),
    region("Ñuble (XVI)", "XVI", -37.20, -36.00, -72.90, -71.00),
];

/// The full region table.
pub fn regions() -> &'static [Region] {
    &REGIONS
}

impl Region {
    /// Look up a region by its exact display name.
    pub fn find(name: &str) -> Option<&'static Region> {
        REGIONS.iter().find(|r| r.name == name)
    }
}

/// Resolve a region name to its bounding box.
///
/// Names are compared byte for byte: no trimming, case folding or accent
/// stripping, so `"Valparaiso (V)"` is unknown.
pub fn resolve(name: &str) -> Result<BoundingBox> {
    Region::find(name)
        .map(|r| r.bounds)
        .ok_or_else(|| QuakeError::UnknownRegion(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_region_table() {
        assert_eq!(regions().len(), 16);
        let names: HashSet<&str> = regions().iter().map(|r| r.name).collect();
        assert_eq!(names.len(), 16);
        let codes: HashSet<&str> = regions().iter().map(|r| r.code).collect();
        assert_eq!(codes.len(), 16);
    }

    #[test]
    fn test_every_region_resolves_to_ordered_box() {
        for r in regions() {
            let bounds = resolve(r.name).unwrap();
            assert_eq!(bounds, r.bounds);
            assert!(bounds.lat_min <= bounds.lat_max, "{}", r.name);
            assert!(bounds.lon_min <= bounds.lon_max, "{}", r.name);
            assert!(r.name.ends_with(&format!("({})", r.code)));
        }
    }

    #[test]
    fn test_resolve_returns_configured_values() {
        let bounds = resolve("Metropolitana de Santiago (RM)").unwrap();
        assert_eq!(bounds.lat_min, -34.30);
        assert_eq!(bounds.lat_max, -32.90);
        assert_eq!(bounds.lon_min, -71.75);
        assert_eq!(bounds.lon_max, -69.75);
        assert!(resolve("Ñuble (XVI)").is_ok());
        assert!(resolve("O'Higgins (VI)").is_ok());
    }

    #[test]
    fn test_unknown_region() {
        for name in ["", "Valparaiso (V)", "valparaíso (v)", " Maule (VII)", "Maule", "Santiago"] {
            match resolve(name) {
                Err(QuakeError::UnknownRegion(n)) => assert_eq!(n, name),
                other => panic!("expected lookup failure for {name:?}, got {other:?}"),
            }
        }
        assert!(resolve("").unwrap_err().is_user_input());
    }

    #[test]
    fn test_bounding_box_new() {
        let b = BoundingBox::new(-34.0, -32.0, -72.0, -70.0).unwrap();
        assert_eq!(b.center(), (-33.0, -71.0));
        assert!(BoundingBox::new(-30.0, -32.0, -72.0, -70.0).is_err());
        assert!(BoundingBox::new(-34.0, -32.0, -70.0, -72.0).is_err());
        assert!(BoundingBox::new(f64::NAN, -32.0, -72.0, -70.0).is_err());
        assert!(BoundingBox::new(-33.0, -33.0, -71.0, -71.0).is_ok());
    }
}
