use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use std::fmt::Debug;

use crate::{Config, FetchError, WeatherSnapshot, provider::weatherstack::WeatherstackProvider};

pub mod weatherstack;

/// Source of current weather conditions for a location string.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Performs exactly one request; never retries.
    async fn fetch_weather(&self, location_query: &str) -> Result<WeatherSnapshot, FetchError>;
}

/// Construct the configured provider, applying the HTTP timeout if one is set.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let api_key = config.api_key()?;

    let mut builder = Client::builder();
    if let Some(timeout) = config.timeout() {
        builder = builder.timeout(timeout);
    }
    let http = builder.build().context("Failed to build HTTP client")?;

    Ok(Box::new(WeatherstackProvider::with_client(
        api_key.to_owned(),
        config.base_url().to_owned(),
        http,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_from_config_errors_when_missing_api_key() {
        let cfg = Config::default();
        let err = provider_from_config(&cfg).unwrap_err();
        assert!(err.to_string().contains("No API key configured"));
    }

    #[test]
    fn provider_from_config_works_when_configured() {
        let mut cfg = Config::default();
        cfg.set_api_key("KEY".into());
        cfg.set_timeout_secs(Some(5));

        assert!(provider_from_config(&cfg).is_ok());
    }
}
