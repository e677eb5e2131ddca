//! Results handed from a search to the results view, and the paging state
//! that lives with them.

use log::info;

use crate::earthquake::{retain_dated, EarthquakeRecord, MapMarker};
use crate::error::Result;
use crate::pagination::{PageItem, PageWindow};
use crate::region::BoundingBox;
use crate::search::SearchQuery;

/// Map centre used when the search area is unknown.
pub const DEFAULT_MAP_CENTER: (f64, f64) = (-20.0, -70.0);

/// Records that survived filtering. Never empty.
#[derive(Debug, PartialEq, Clone)]
pub struct ResultSet {
    records: Vec<EarthquakeRecord>,
}

impl ResultSet {
    /// Filter out undated records; `None` when nothing is left to show.
    pub fn new(records: Vec<EarthquakeRecord>) -> Option<ResultSet> {
        let received = records.len();
        let records = retain_dated(records);
        if received != records.len() {
            info!("dropped {} of {} records without a day or month", received - records.len(), received);
        }
        if records.is_empty() {
            None
        } else {
            Some(ResultSet { records })
        }
    }

    pub fn records(&self) -> &[EarthquakeRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Where the results came from, for the "Search area" line and map centre.
#[derive(Debug, PartialEq, Clone)]
pub struct SearchOrigin {
    pub region: Option<String>,
    pub bounds: Option<BoundingBox>,
}

impl From<&SearchQuery> for SearchOrigin {
    fn from(query: &SearchQuery) -> Self {
        SearchOrigin {
            region: query.region.clone(),
            bounds: Some(query.bounds),
        }
    }
}

/// Navigation state passed from the search step to the results view.
#[derive(Debug, PartialEq, Clone)]
pub struct Handoff {
    pub results: Vec<EarthquakeRecord>,
    pub origin: SearchOrigin,
}

/// A result set with its paging state.
#[derive(Debug, Clone)]
pub struct ResultsSession {
    results: ResultSet,
    window: PageWindow,
    origin: SearchOrigin,
}

/// What the results view renders.
#[derive(Debug, Clone)]
pub enum ResultsView {
    Results(ResultsSession),
    /// No hand-off state, or every record lacked its date.
    NoResults,
}

impl ResultsView {
    pub fn from_handoff(handoff: Option<Handoff>, page_size: usize) -> Result<ResultsView> {
        let Some(handoff) = handoff else {
            return Ok(ResultsView::NoResults);
        };
        match ResultSet::new(handoff.results) {
            Some(results) => Ok(ResultsView::Results(ResultsSession::new(results, handoff.origin, page_size)?)),
            None => Ok(ResultsView::NoResults),
        }
    }
}

impl ResultsSession {
    pub fn new(results: ResultSet, origin: SearchOrigin, page_size: usize) -> Result<ResultsSession> {
        let window = PageWindow::new(page_size, results.len())?;
        Ok(ResultsSession {
            results,
            window,
            origin,
        })
    }

    pub fn results(&self) -> &ResultSet {
        &self.results
    }

    pub fn window(&self) -> &PageWindow {
        &self.window
    }

    pub fn origin(&self) -> &SearchOrigin {
        &self.origin
    }

    /// Records on the current page.
    pub fn visible(&self) -> &[EarthquakeRecord] {
        self.window.window(self.results.records())
    }

    pub fn strip(&self, delta: usize) -> Vec<PageItem> {
        self.window.strip(delta)
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.window.go_to_page(page);
    }

    pub fn previous(&mut self) {
        self.window.previous();
    }

    pub fn next(&mut self) {
        self.window.next();
    }

    /// Change the page size; the view returns to page 1.
    pub fn set_page_size(&mut self, page_size: usize) -> Result<()> {
        self.window.resize(page_size)
    }

    /// A new search arrived: swap the records and start over at page 1.
    pub fn replace_results(&mut self, results: ResultSet, origin: SearchOrigin) {
        self.window.reset(results.len());
        self.results = results;
        self.origin = origin;
    }

    /// "Showing a–b of n results"
    pub fn summary(&self) -> String {
        let (start, end) = self.window.item_range();
        format!("Showing {}–{} of {} results", start + 1, end, self.results.len())
    }

    /// Human description of the searched area, if known.
    pub fn search_area(&self) -> Option<String> {
        let b = self.origin.bounds?;
        let ranges = format!(
            "between {} and {}, longitude between {} and {}.",
            b.lat_min, b.lat_max, b.lon_min, b.lon_max
        );
        Some(match &self.origin.region {
            Some(region) => format!("Search area: Region of {region}, latitude {ranges}"),
            None => format!("Search area: Latitude {ranges}"),
        })
    }

    pub fn map_center(&self) -> (f64, f64) {
        self.origin
            .bounds
            .map(|b| b.center())
            .unwrap_or(DEFAULT_MAP_CENTER)
    }

    /// Map markers for the current page.
    pub fn markers(&self) -> Vec<MapMarker> {
        self.visible().iter().map(EarthquakeRecord::to_marker).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::earthquake::RecordId;
    use crate::pagination::PageItem::{Ellipsis, Page};
    use crate::region::resolve;

    fn record(id: i64, day: Option<u32>, month: Option<u32>) -> EarthquakeRecord {
        EarthquakeRecord {
            id: Some(RecordId::Number(id)),
            day,
            month,
            year: Some(2015),
            hour: Some(19),
            minute: Some(54),
            latitude: 31.5 + id as f64 / 100.0,
            longitude: 71.6,
            magnitude_mwg: 4.0 + (id % 5) as f64,
            depth: Some(23.0),
        }
    }

    fn dated(count: i64) -> Vec<EarthquakeRecord> {
        (1..=count).map(|id| record(id, Some(16), Some(9))).collect()
    }

    fn ids(records: &[EarthquakeRecord]) -> Vec<i64> {
        records
            .iter()
            .map(|r| match r.id {
                Some(RecordId::Number(n)) => n,
                _ => panic!("numeric id expected"),
            })
            .collect()
    }

    fn region_origin() -> SearchOrigin {
        SearchOrigin {
            region: Some("Coquimbo (IV)".to_string()),
            bounds: Some(resolve("Coquimbo (IV)").unwrap()),
        }
    }

    #[test]
    fn test_filter_keeps_only_fully_dated() {
        let set = ResultSet::new(vec![
            record(1, Some(1), Some(1)),
            record(2, None, Some(5)),
            record(3, Some(2), None),
        ])
        .unwrap();
        assert_eq!(ids(set.records()), vec![1]);
    }

    #[test]
    fn test_no_results_states() {
        let view = ResultsView::from_handoff(None, 13).unwrap();
        assert!(matches!(view, ResultsView::NoResults));

        let handoff = Handoff {
            results: vec![record(1, None, None), record(2, None, Some(3))],
            origin: region_origin(),
        };
        let view = ResultsView::from_handoff(Some(handoff), 13).unwrap();
        assert!(matches!(view, ResultsView::NoResults));

        let handoff = Handoff {
            results: Vec::new(),
            origin: region_origin(),
        };
        assert!(matches!(ResultsView::from_handoff(Some(handoff), 13).unwrap(), ResultsView::NoResults));
    }

    #[test]
    fn test_twenty_seven_records_in_pages_of_thirteen() {
        let handoff = Handoff {
            results: dated(27),
            origin: region_origin(),
        };
        let ResultsView::Results(mut session) = ResultsView::from_handoff(Some(handoff), 13).unwrap() else {
            panic!("expected results");
        };
        assert_eq!(session.window().total_pages(), 3);
        assert_eq!(ids(session.visible()), (1..=13).collect::<Vec<_>>());
        assert_eq!(session.summary(), "Showing 1–13 of 27 results");
        assert_eq!(session.strip(1), vec![Page(1), Page(2), Page(3)]);

        session.go_to_page(3);
        assert_eq!(ids(session.visible()), vec![27]);
        assert_eq!(session.summary(), "Showing 27–27 of 27 results");
        session.next();
        assert_eq!(session.window().current_page(), 3);
        session.previous();
        assert_eq!(ids(session.visible()), (14..=26).collect::<Vec<_>>());
    }

    #[test]
    fn test_new_results_reset_to_first_page() {
        let mut session = ResultsSession::new(ResultSet::new(dated(40)).unwrap(), region_origin(), 5).unwrap();
        session.go_to_page(6);
        assert_eq!(
            session.strip(1),
            vec![Page(1), Ellipsis, Page(5), Page(6), Page(7), Page(8)]
        );
        let origin = SearchOrigin {
            region: None,
            bounds: None,
        };
        session.replace_results(ResultSet::new(dated(7)).unwrap(), origin);
        assert_eq!(session.window().current_page(), 1);
        assert_eq!(session.window().total_pages(), 2);
        assert_eq!(session.map_center(), DEFAULT_MAP_CENTER);
        assert_eq!(session.search_area(), None);

        session.next();
        session.set_page_size(3).unwrap();
        assert_eq!(session.window().current_page(), 1);
        assert_eq!(session.window().total_pages(), 3);
        assert!(session.set_page_size(0).is_err());
    }

    #[test]
    fn test_search_area_and_map() {
        let session = ResultsSession::new(ResultSet::new(dated(3)).unwrap(), region_origin(), 13).unwrap();
        assert_eq!(
            session.search_area().unwrap(),
            "Search area: Region of Coquimbo (IV), latitude between -32.3 and -29, longitude between -71.75 and -69.8."
        );
        let (lat, lon) = session.map_center();
        assert!((lat - -30.65).abs() < 1e-9);
        assert!((lon - -70.775).abs() < 1e-9);

        let markers = session.markers();
        assert_eq!(markers.len(), 3);
        assert!(markers.iter().all(|m| m.latitude < 0.0 && m.longitude < 0.0));

        let box_only = ResultsSession::new(
            ResultSet::new(dated(1)).unwrap(),
            SearchOrigin {
                region: None,
                bounds: Some(BoundingBox::new(-20.0, -18.0, -70.0, -69.0).unwrap()),
            },
            13,
        )
        .unwrap();
        assert_eq!(
            box_only.search_area().unwrap(),
            "Search area: Latitude between -20 and -18, longitude between -70 and -69."
        );
    }
}
