//! Search commands: validate the form input, fetch once, show the results.

use anyhow::Context;
use log::{info, warn};
use quake_core::client::EarthquakeClient;
use quake_core::export::{markers_geojson, write_records_csv};
use quake_core::region::BoundingBox;
use quake_core::search::SearchQuery;
use quake_core::session::{Handoff, ResultsSession, ResultsView, SearchOrigin};
use quake_core::QuakeError;
use quake_utils::dates::today;
use std::fs::File;
use std::io::{self, BufWriter};

use crate::interactive::{run_interactive, TerminalInput};
use crate::view::{render_page, NO_RESULTS};
use crate::Settings;

/// Search a named region.
pub async fn run_region_search(region: &str, from: &str, to: &str, settings: &Settings) -> anyhow::Result<()> {
    let query = validated(SearchQuery::for_region(region, from, to, today()))?;
    run_search(&query, settings).await
}

/// Search a coordinate box given as `[lat_min, lat_max, lon_min, lon_max]`.
pub async fn run_bbox_search(corners: [f64; 4], from: &str, to: &str, settings: &Settings) -> anyhow::Result<()> {
    let [lat_min, lat_max, lon_min, lon_max] = corners;
    let query = validated(
        BoundingBox::new(lat_min, lat_max, lon_min, lon_max)
            .and_then(|bounds| SearchQuery::for_bounds(bounds, from, to, today())),
    )?;
    run_search(&query, settings).await
}

fn validated(query: quake_core::Result<SearchQuery>) -> anyhow::Result<SearchQuery> {
    query.map_err(|e| {
        warn!("search not submitted: {}", e);
        anyhow::Error::new(e)
    })
}

async fn run_search(query: &SearchQuery, settings: &Settings) -> anyhow::Result<()> {
    if settings.page_size == 0 {
        return Err(QuakeError::InvalidPageSize.into());
    }
    let client = EarthquakeClient::new(&settings.api_url);
    info!("Searching {} from {} to {}...", describe(query), query.date_min, query.date_max);

    let records = match client.search(query).await {
        Ok(records) => records,
        Err(QuakeError::Rejected(rejection)) => {
            anyhow::bail!("{}", rejection);
        }
        Err(e) => {
            return Err(anyhow::Error::new(e).context("Search failed, check the dates or region and retry"));
        }
    };

    let handoff = Handoff {
        results: records,
        origin: SearchOrigin::from(query),
    };
    match ResultsView::from_handoff(Some(handoff), settings.page_size)? {
        ResultsView::NoResults => {
            println!("{NO_RESULTS}");
            Ok(())
        }
        ResultsView::Results(session) => show_results(session, settings),
    }
}

fn describe(query: &SearchQuery) -> String {
    match &query.region {
        Some(region) => region.clone(),
        None => format!("{:?}", query.bounds),
    }
}

/// Position the session on the requested page, write any exports, then
/// print or page through the results.
pub fn show_results(mut session: ResultsSession, settings: &Settings) -> anyhow::Result<()> {
    let last = session.window().total_pages().max(1);
    session.go_to_page(settings.page.clamp(1, last));

    if let Some(path) = &settings.csv_out {
        let file = File::create(path).with_context(|| format!("creating {path}"))?;
        write_records_csv(session.results().records(), BufWriter::new(file))?;
        info!("wrote {} records to {}", session.results().len(), path);
    }
    if let Some(path) = &settings.map_out {
        let geojson = markers_geojson(&session.markers());
        std::fs::write(path, serde_json::to_string_pretty(&geojson)?).with_context(|| format!("writing {path}"))?;
        info!("wrote map markers for page {} to {}", session.window().current_page(), path);
    }

    if settings.interactive {
        run_interactive(&mut session, settings.delta, &mut TerminalInput, io::stdout().lock())?;
    } else {
        print!("{}", render_page(&session, settings.delta));
    }
    Ok(())
}
