//! WeatherAPI.com client
//!
//! The service answers both found and unresolvable locations with a JSON
//! body; an unresolvable location carries `error.message` instead of the
//! `location`/`current` pair. The body decides, not the HTTP status.

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, instrument};

use crate::config::ApiConfig;
use crate::state::WeatherSnapshot;

/// Anything that prevents reading a usable payload
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("response has neither weather data nor an error message")]
    Incomplete,
}

/// What the service said about a location
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    Resolved(WeatherSnapshot),
    /// The service's own error message, verbatim
    Rejected(String),
}

// ============================================================================
// Wire format
// ============================================================================

#[derive(Debug, Deserialize)]
struct Payload {
    location: Option<PayloadLocation>,
    current: Option<PayloadCurrent>,
    error: Option<PayloadError>,
}

#[derive(Debug, Deserialize)]
struct PayloadLocation {
    name: String,
}

#[derive(Debug, Deserialize)]
struct PayloadCurrent {
    temp_c: f64,
    humidity: i64,
    wind_kph: f64,
    uv: f64,
    /// Absent condition renders as an unknown reading
    #[serde(default)]
    condition: PayloadCondition,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PayloadCondition {
    code: i64,
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PayloadError {
    message: String,
}

/// Interpret a response body.
pub fn parse_payload(body: &str) -> Result<Outcome, FetchError> {
    let payload: Payload = serde_json::from_str(body)?;

    if let Some(error) = payload.error {
        return Ok(Outcome::Rejected(error.message));
    }

    let (Some(location), Some(current)) = (payload.location, payload.current) else {
        return Err(FetchError::Incomplete);
    };

    Ok(Outcome::Resolved(WeatherSnapshot {
        location_name: location.name,
        condition_code: current.condition.code,
        condition_text: current.condition.text.filter(|t| !t.is_empty()),
        temp_c: current.temp_c,
        humidity: current.humidity,
        wind_kph: current.wind_kph,
        uv: current.uv,
    }))
}

// ============================================================================
// Client
// ============================================================================

/// Current-conditions client; cheap to clone into spawned tasks
#[derive(Debug, Clone)]
pub struct WeatherClient {
    http: Client,
    config: ApiConfig,
}

impl WeatherClient {
    pub fn new(config: ApiConfig) -> Result<Self, FetchError> {
        let http = Client::builder().timeout(config.timeout()).build()?;
        Ok(Self { http, config })
    }

    pub fn current_url(&self, location: &str) -> String {
        format!(
            "{}/current.json?key={}&q={}",
            self.config.base_url.trim_end_matches('/'),
            urlencoding::encode(&self.config.api_key),
            urlencoding::encode(location)
        )
    }

    /// Fetch current conditions for a raw location string
    #[instrument(skip(self))]
    pub async fn fetch_current(&self, location: &str) -> Result<Outcome, FetchError> {
        let response = self.http.get(self.current_url(location)).send().await?;
        let status = response.status();
        let body = response.text().await?;
        debug!(%status, bytes = body.len(), "weather response received");
        parse_payload(&body)
    }
}
