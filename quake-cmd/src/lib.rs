//! Command implementations for the quake CLI.
//!
//! Provides subcommands for searching Chilean earthquakes by region or by
//! coordinate box, and for listing the known regions.

use clap::{Args, Subcommand};
use quake_core::pagination::DEFAULT_DELTA;
use quake_core::{DEFAULT_API_URL, RESULTS_PER_PAGE};

pub mod interactive;
pub mod query;
pub mod view;

/// Options shared by every search: where to ask and how to show the answer.
#[derive(Args, Debug, Clone, PartialEq)]
pub struct Settings {
    /// Base URL of the earthquake API
    #[arg(long, default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Results shown per page
    #[arg(long, default_value_t = RESULTS_PER_PAGE)]
    pub page_size: usize,

    /// Page to show first (clamped to the available pages)
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Pages listed either side of the current one in the page strip
    #[arg(long, default_value_t = DEFAULT_DELTA)]
    pub delta: usize,

    /// Page through the results from stdin (n, p, a page number, q)
    #[arg(short, long)]
    pub interactive: bool,

    /// Write every valid result to this CSV file
    #[arg(long)]
    pub csv_out: Option<String>,

    /// Write the shown page's map markers to this GeoJSON file
    #[arg(long)]
    pub map_out: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            api_url: DEFAULT_API_URL.to_string(),
            page_size: RESULTS_PER_PAGE,
            page: 1,
            delta: DEFAULT_DELTA,
            interactive: false,
            csv_out: None,
            map_out: None,
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// List the regions that can be searched and their bounding boxes
    Regions,

    /// Search earthquakes inside a Chilean region
    Region {
        /// Region name exactly as listed by `regions`, e.g. "Valparaíso (V)"
        #[arg(short = 'r', long)]
        region: String,

        /// First day of the range (YYYY-MM-DD or DD/MM/YYYY)
        #[arg(long)]
        from: String,

        /// Last day of the range (YYYY-MM-DD or DD/MM/YYYY)
        #[arg(long)]
        to: String,

        #[command(flatten)]
        settings: Settings,
    },

    /// Search earthquakes inside a latitude/longitude box (signed degrees)
    Bbox {
        #[arg(long, allow_hyphen_values = true)]
        lat_min: f64,

        #[arg(long, allow_hyphen_values = true)]
        lat_max: f64,

        #[arg(long, allow_hyphen_values = true)]
        lon_min: f64,

        #[arg(long, allow_hyphen_values = true)]
        lon_max: f64,

        /// First day of the range (YYYY-MM-DD or DD/MM/YYYY)
        #[arg(long)]
        from: String,

        /// Last day of the range (YYYY-MM-DD or DD/MM/YYYY)
        #[arg(long)]
        to: String,

        #[command(flatten)]
        settings: Settings,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Regions => {
            print!("{}", view::render_regions());
            Ok(())
        }
        Command::Region {
            region,
            from,
            to,
            settings,
        } => query::run_region_search(&region, &from, &to, &settings).await,
        Command::Bbox {
            lat_min,
            lat_max,
            lon_min,
            lon_max,
            from,
            to,
            settings,
        } => query::run_bbox_search([lat_min, lat_max, lon_min, lon_max], &from, &to, &settings).await,
    }
}
