use log::{info, warn};
use reqwest::Client;

use crate::earthquake::EarthquakeRecord;
use crate::error::Result;
use crate::response::interpret_response;
use crate::search::{SearchQuery, DEFAULT_API_URL};

/// Client for the earthquake search endpoint.
///
/// One request per search: no retries and no client-side timeout, the
/// server decides how long a search takes.
#[derive(Debug, Clone)]
pub struct EarthquakeClient {
    client: Client,
    base_url: String,
}

impl Default for EarthquakeClient {
    fn default() -> Self {
        EarthquakeClient::new(DEFAULT_API_URL)
    }
}

impl EarthquakeClient {
    pub fn new(base_url: &str) -> EarthquakeClient {
        EarthquakeClient {
            client: Client::new(),
            base_url: base_url.to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Run a validated search and return the raw, unfiltered records.
    pub async fn search(&self, query: &SearchQuery) -> Result<Vec<EarthquakeRecord>> {
        let url = query.url(&self.base_url);
        info!("GET {}", url);
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;
        let result = interpret_response(status.as_u16(), &body);
        match &result {
            Ok(records) => info!("received {} records ({})", records.len(), status),
            Err(e) => warn!("search failed with {}: {}", status, e),
        }
        result
    }
}
