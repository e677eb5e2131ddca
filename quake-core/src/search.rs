//! Validated search parameters and the request URL built from them.

use chrono::NaiveDate;
use log::debug;
use quake_utils::dates::{format_date, is_not_future, parse_date_input};

use crate::error::{QuakeError, Result};
use crate::region::{resolve, BoundingBox};

/// Host serving the earthquake API.
pub const DEFAULT_API_URL: &str = "https://backend-qxo7.onrender.com";

/// Everything one search submits. Only constructible from validated input.
#[derive(Debug, PartialEq, Clone)]
pub struct SearchQuery {
    pub bounds: BoundingBox,
    pub date_min: NaiveDate,
    pub date_max: NaiveDate,
    /// Region name when the search came from the region form.
    pub region: Option<String>,
}

fn parse_field(field: &'static str, input: &str, today: NaiveDate) -> Result<NaiveDate> {
    let date = parse_date_input(input).map_err(|source| QuakeError::InvalidDate { field, source })?;
    if !is_not_future(&date, today) {
        return Err(QuakeError::FutureDate {
            field,
            date: format_date(&date),
        });
    }
    Ok(date)
}

impl SearchQuery {
    /// Validate a region search. `today` is the date future checks run against.
    pub fn for_region(region: &str, date_min: &str, date_max: &str, today: NaiveDate) -> Result<SearchQuery> {
        let bounds = resolve(region)?;
        let mut query = SearchQuery::for_bounds(bounds, date_min, date_max, today)?;
        query.region = Some(region.to_string());
        Ok(query)
    }

    /// Validate a coordinate box search.
    pub fn for_bounds(bounds: BoundingBox, date_min: &str, date_max: &str, today: NaiveDate) -> Result<SearchQuery> {
        let date_min = parse_field("start", date_min, today)?;
        let date_max = parse_field("end", date_max, today)?;
        if date_min > date_max {
            return Err(QuakeError::DateOrder {
                date_min: format_date(&date_min),
                date_max: format_date(&date_max),
            });
        }
        debug!("validated search {bounds:?} from {date_min} to {date_max}");
        Ok(SearchQuery {
            bounds,
            date_min,
            date_max,
            region: None,
        })
    }

    /// Request URL for this search against `base_url`.
    ///
    /// `page` and `limit` are sent bare; the server returns everything and
    /// paging happens locally.
    pub fn url(&self, base_url: &str) -> String {
        format!(
            "{}/api/earthquake?latmin={}&latmax={}&lonmin={}&lonmax={}&datemin={}&datemax={}&page&limit",
            base_url.trim_end_matches('/'),
            self.bounds.lat_min,
            self.bounds.lat_max,
            self.bounds.lon_min,
            self.bounds.lon_max,
            format_date(&self.date_min),
            format_date(&self.date_max)
        )
    }
}
