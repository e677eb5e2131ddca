//! Plain-text rendering of the results view.

use quake_core::earthquake::EarthquakeRecord;
use quake_core::pagination::PageItem;
use quake_core::region::regions;
use quake_core::session::ResultsSession;
use std::fmt::Write;

/// Shown when the search returned nothing usable.
pub const NO_RESULTS: &str = "No valid results found.\n\
Some earthquake records had missing date information. Adjust the search and try again.";

const HEADERS: [&str; 5] = ["Date", "Magnitude (Mwg)", "Latitude", "Longitude", "Depth"];

fn row(record: &EarthquakeRecord) -> [String; 5] {
    [
        record.timestamp_label(),
        record.magnitude_mwg.to_string(),
        record.display_latitude().to_string(),
        record.display_longitude().to_string(),
        record.depth.map(|d| d.to_string()).unwrap_or_default(),
    ]
}

/// Centered, fixed-width table of `records`.
pub fn render_table(records: &[EarthquakeRecord]) -> String {
    let rows: Vec<[String; 5]> = records.iter().map(row).collect();
    let mut widths = HEADERS.map(|h| h.chars().count());
    for r in &rows {
        for (width, cell) in widths.iter_mut().zip(r.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let line = |cells: &[&str]| -> String {
        cells
            .iter()
            .zip(widths.iter())
            .map(|(cell, &width)| format!("{cell:^width$}"))
            .collect::<Vec<_>>()
            .join(" | ")
    };
    let header = line(&HEADERS);
    let _ = writeln!(out, "{}", header.trim_end());
    let _ = writeln!(out, "{}", "-".repeat(header.chars().count()));
    for r in &rows {
        let cells: Vec<&str> = r.iter().map(String::as_str).collect();
        let _ = writeln!(out, "{}", line(&cells).trim_end());
    }
    out
}

/// Page strip with the current page bracketed, e.g. `1 ... 4 [5] 6 ... 20`.
pub fn render_strip(strip: &[PageItem], current: usize) -> String {
    strip
        .iter()
        .map(|item| match item {
            PageItem::Page(n) if *n == current => format!("[{n}]"),
            other => other.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Previous/next controls; a control that would not move is shown disabled.
pub fn render_controls(session: &ResultsSession) -> String {
    let window = session.window();
    let previous = if window.is_first() { "(previous)" } else { "< previous (p)" };
    let next = if window.is_last() { "(next)" } else { "next (n) >" };
    format!("{previous}   {next}")
}

/// The whole results page: area, summary, table and navigation.
pub fn render_page(session: &ResultsSession, delta: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Earthquake Results");
    if let Some(area) = session.search_area() {
        let _ = writeln!(out, "{area}");
    }
    let _ = writeln!(out, "{}", session.summary());
    let _ = writeln!(out);
    out.push_str(&render_table(session.visible()));
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{}",
        render_strip(&session.strip(delta), session.window().current_page())
    );
    let _ = writeln!(out, "{}", render_controls(session));
    out
}

/// The region list with each bounding box.
pub fn render_regions() -> String {
    let mut out = String::new();
    for r in regions() {
        let b = r.bounds;
        let _ = writeln!(
            out,
            "{:<32} lat {:>7} .. {:>7}  lon {:>7} .. {:>7}",
            r.name, b.lat_min, b.lat_max, b.lon_min, b.lon_max
        );
    }
    out
}
