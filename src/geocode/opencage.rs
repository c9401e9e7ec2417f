//! OpenCage forward-geocoding client.
//!
//! One blocking request per lookup: no retry, no rate-limit handling.

use super::types::{ApiKey, Coordinate, GeocodeError, Geocoder};
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.opencagedata.com";

const USER_AGENT: &str = concat!("phonemap/", env!("CARGO_PKG_VERSION"));

#[derive(Deserialize, Debug)]
pub struct OpenCageResponse {
    #[serde(default)]
    pub results: Vec<OpenCageResult>,
    #[serde(default)]
    pub status: Option<OpenCageStatus>,
}

#[derive(Deserialize, Debug)]
pub struct OpenCageResult {
    pub geometry: Geometry,
    #[serde(default)]
    pub formatted: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Copy)]
pub struct Geometry {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Deserialize, Debug)]
pub struct OpenCageStatus {
    pub code: u16,
    #[serde(default)]
    pub message: String,
}

impl OpenCageResponse {
    /// The best (first) match, if any.
    pub fn first_coordinate(&self) -> Option<Coordinate> {
        self.results
            .first()
            .map(|r| Coordinate::new(r.geometry.lat, r.geometry.lng))
    }
}

/// Blocking OpenCage client.
pub struct OpenCageClient {
    agent: ureq::Agent,
    api_key: ApiKey,
    base_url: String,
}

impl OpenCageClient {
    pub fn new(api_key: ApiKey) -> Self {
        Self::with_options(api_key, DEFAULT_BASE_URL, Duration::from_secs(10))
    }

    /// Create a client against a specific endpoint (proxies, tests).
    pub fn with_options(api_key: ApiKey, base_url: &str, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build();
        Self {
            agent,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/geocode/v1/json", self.base_url)
    }
}

impl Geocoder for OpenCageClient {
    fn geocode(&self, query: &str) -> Result<Option<Coordinate>, GeocodeError> {
        log::info!("geocoding '{}' via {}", query, self.base_url);

        let response = self
            .agent
            .get(&self.endpoint())
            .query("q", query)
            .query("key", self.api_key.expose())
            .query("limit", "1")
            .query("no_annotations", "1")
            .call()
            .map_err(map_ureq_error)?;

        let body: OpenCageResponse = response
            .into_json()
            .map_err(|e| GeocodeError::Service(format!("invalid response: {}", e)))?;

        let coordinate = body.first_coordinate();
        match (&coordinate, body.results.first()) {
            (Some(c), Some(r)) => log::debug!(
                "first result for '{}': {} ({})",
                query,
                c.display(),
                r.formatted.as_deref().unwrap_or("unnamed")
            ),
            _ => log::debug!("no results for '{}'", query),
        }
        Ok(coordinate)
    }
}

fn map_ureq_error(err: ureq::Error) -> GeocodeError {
    match err {
        ureq::Error::Status(code @ (401 | 403), _) => GeocodeError::CredentialRejected(code),
        ureq::Error::Status(code, response) => {
            let detail = response
                .into_json::<OpenCageResponse>()
                .ok()
                .and_then(|b| b.status)
                .map(|s| s.message)
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| "no detail".to_string());
            GeocodeError::Service(format!("HTTP {}: {}", code, detail))
        }
        ureq::Error::Transport(t) => GeocodeError::Network(t.to_string()),
    }
}
