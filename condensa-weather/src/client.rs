//! Open-Meteo client
//!
//! Two sequential requests, no API key:
//!
//! 1. geocoding search by name → latitude, longitude, resolved name
//! 2. forecast `current=temperature_2m,relative_humidity_2m` at those coordinates
//!
//! One attempt only. Cancellation is the caller's business: dropping the
//! future aborts the in-flight request.

use std::future::Future;
use std::time::Duration;

use condensa_core::Reading;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{WeatherError, WeatherResult};
use crate::models::{CurrentConditions, ForecastResponse, GeocodingResponse, Observation, Place};

pub const DEFAULT_GEOCODING_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";
pub const DEFAULT_FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Where and how to reach the provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherConfig {
    pub geocoding_url: String,
    pub forecast_url: String,
    /// Language of the resolved place name
    pub language: String,
    /// Whole-request timeout in seconds (0 disables it)
    pub timeout_secs: u64,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            geocoding_url: DEFAULT_GEOCODING_URL.to_string(),
            forecast_url: DEFAULT_FORECAST_URL.to_string(),
            language: "en".to_string(),
            timeout_secs: 10,
        }
    }
}

impl WeatherConfig {
    /// Defaults overridden by `CONDENSA_*` environment variables
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// Applies `CONDENSA_GEOCODING_URL`, `CONDENSA_FORECAST_URL`,
    /// `CONDENSA_LANGUAGE` and `CONDENSA_TIMEOUT_SECS` on top of `self`
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = std::env::var("CONDENSA_GEOCODING_URL") {
            self.geocoding_url = url;
        }
        if let Ok(url) = std::env::var("CONDENSA_FORECAST_URL") {
            self.forecast_url = url;
        }
        if let Ok(language) = std::env::var("CONDENSA_LANGUAGE") {
            self.language = language;
        }
        if let Some(secs) = std::env::var("CONDENSA_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            self.timeout_secs = secs;
        }
        self
    }
}

/// Source of current outdoor conditions
pub trait WeatherLookup {
    /// Resolves `place` and fetches its current temperature and humidity
    fn lookup(&self, place: &str) -> impl Future<Output = WeatherResult<Observation>> + Send;
}

/// [`WeatherLookup`] backed by the Open-Meteo public API
#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    http: reqwest::Client,
    config: WeatherConfig,
}

impl OpenMeteoClient {
    pub fn new() -> WeatherResult<Self> {
        Self::with_config(WeatherConfig::default())
    }

    pub fn with_config(config: WeatherConfig) -> WeatherResult<Self> {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("condensa/", env!("CARGO_PKG_VERSION")));
        if config.timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(config.timeout_secs));
        }

        Ok(Self {
            http: builder.build()?,
            config,
        })
    }

    pub fn config(&self) -> &WeatherConfig {
        &self.config
    }

    /// First geocoding match for `name`
    pub async fn geocode(&self, name: &str) -> WeatherResult<Place> {
        let name = name.trim();
        if name.is_empty() {
            return Err(WeatherError::PlaceNotFound("(empty name)".to_string()));
        }

        debug!(place = name, url = %self.config.geocoding_url, "geocoding");

        let response: GeocodingResponse = self
            .http
            .get(&self.config.geocoding_url)
            .query(&[
                ("name", name),
                ("count", "1"),
                ("language", self.config.language.as_str()),
                ("format", "json"),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        response
            .results
            .and_then(|places| places.into_iter().next())
            .ok_or_else(|| WeatherError::PlaceNotFound(name.to_string()))
    }

    async fn current(&self, place: &Place) -> WeatherResult<CurrentConditions> {
        debug!(
            latitude = place.latitude,
            longitude = place.longitude,
            "fetching current conditions"
        );

        let response: ForecastResponse = self
            .http
            .get(&self.config.forecast_url)
            .query(&[
                ("latitude", place.latitude.to_string()),
                ("longitude", place.longitude.to_string()),
                ("current", "temperature_2m,relative_humidity_2m".to_string()),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(response.current)
    }

    async fn fetch(&self, place: &str) -> WeatherResult<Observation> {
        let resolved = self.geocode(place).await?;
        let current = self.current(&resolved).await?;
        let reading = Reading::new(current.temperature_2m, current.relative_humidity_2m)?;

        Ok(Observation {
            reading,
            resolved_name: resolved.display_name(),
            latitude: resolved.latitude,
            longitude: resolved.longitude,
        })
    }
}

impl WeatherLookup for OpenMeteoClient {
    async fn lookup(&self, place: &str) -> WeatherResult<Observation> {
        let outcome = self.fetch(place).await;
        if let Err(e) = &outcome {
            warn!(place, error = %e, "weather lookup failed");
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = WeatherConfig::default();
        assert_eq!(config.geocoding_url, DEFAULT_GEOCODING_URL);
        assert_eq!(config.forecast_url, DEFAULT_FORECAST_URL);
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn test_config_partial_deserialize() {
        let config: WeatherConfig =
            serde_json::from_str(r#"{"language": "it", "timeout_secs": 0}"#).unwrap();
        assert_eq!(config.language, "it");
        assert_eq!(config.timeout_secs, 0);
        assert_eq!(config.forecast_url, DEFAULT_FORECAST_URL);
    }

    #[test]
    fn test_client_builds_without_timeout() {
        let config = WeatherConfig {
            timeout_secs: 0,
            ..WeatherConfig::default()
        };
        let client = OpenMeteoClient::with_config(config).unwrap();
        assert_eq!(client.config().timeout_secs, 0);
    }
}
