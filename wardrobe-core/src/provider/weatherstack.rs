use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, warn};
use url::Url;

use crate::{FetchError, WeatherSnapshot, config::DEFAULT_BASE_URL};

use super::WeatherProvider;

/// Client for a weatherstack-compatible "current conditions" endpoint.
#[derive(Debug, Clone)]
pub struct WeatherstackProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl WeatherstackProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_client(api_key, DEFAULT_BASE_URL.to_string(), Client::new())
    }

    pub fn with_client(api_key: String, base_url: String, http: Client) -> Self {
        Self { api_key, base_url, http }
    }

    async fn fetch_current(&self, location_query: &str) -> Result<WeatherSnapshot, FetchError> {
        let url = build_url(&self.base_url, &self.api_key, location_query)?;

        debug!(
            host = url.host_str().unwrap_or_default(),
            query = location_query,
            "requesting current conditions"
        );

        let res = self.http.get(url).send().await.map_err(classify_send_error)?;

        let status = res.status();
        let body = res.bytes().await.map_err(|e| FetchError::Transport(e.to_string()))?;

        let result = interpret(status, &body);
        match &result {
            Ok(snapshot) => debug!(
                location = %snapshot.location_name,
                temperature_c = snapshot.temperature_c,
                "received current conditions"
            ),
            Err(err) => warn!(%status, error = %err, "weather request failed"),
        }
        result
    }
}

#[async_trait]
impl WeatherProvider for WeatherstackProvider {
    async fn fetch_weather(&self, location_query: &str) -> Result<WeatherSnapshot, FetchError> {
        self.fetch_current(location_query).await
    }
}

/// Build the request URL with the location percent-encoded as a query value.
///
/// Fails with [`FetchError::InvalidQuery`] before any network activity.
pub fn build_url(base_url: &str, api_key: &str, location_query: &str) -> Result<Url, FetchError> {
    let query = location_query.trim();
    if query.is_empty() || query.chars().any(char::is_control) {
        return Err(FetchError::InvalidQuery);
    }

    Url::parse_with_params(base_url, &[("access_key", api_key), ("query", query)])
        .map_err(|_| FetchError::InvalidQuery)
}

/// Classify a received response into a snapshot or a fetch error.
pub fn interpret(status: StatusCode, body: &[u8]) -> Result<WeatherSnapshot, FetchError> {
    if status != StatusCode::OK {
        return Err(match serde_json::from_slice::<WsErrorResponse>(body) {
            Ok(payload) => FetchError::ProviderMessage(payload.error.info),
            Err(_) => FetchError::NoData,
        });
    }

    let parsed: WsResponse =
        serde_json::from_slice(body).map_err(|_| FetchError::DecodingError)?;

    Ok(WeatherSnapshot {
        location_name: parsed.location.name,
        temperature_c: parsed.current.temperature,
        feels_like_c: parsed.current.feelslike,
        humidity_pct: parsed.current.humidity,
        condition_descriptions: parsed.current.weather_descriptions,
    })
}

fn classify_send_error(err: reqwest::Error) -> FetchError {
    if err.is_builder() {
        FetchError::Unknown(err.to_string())
    } else {
        FetchError::Transport(err.to_string())
    }
}

#[derive(Debug, Deserialize)]
struct WsCurrent {
    temperature: i32,
    feelslike: i32,
    humidity: i32,
    weather_descriptions: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct WsLocation {
    name: String,
}

#[derive(Debug, Deserialize)]
struct WsResponse {
    current: WsCurrent,
    location: WsLocation,
}

#[derive(Debug, Deserialize)]
struct WsError {
    info: String,
}

#[derive(Debug, Deserialize)]
struct WsErrorResponse {
    error: WsError,
}
