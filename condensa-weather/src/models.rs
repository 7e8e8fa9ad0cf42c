//! Open-Meteo payloads and the observation handed to the core

use condensa_core::Reading;
use serde::{Deserialize, Serialize};

/// Geocoding search response; `results` is absent when nothing matched
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct GeocodingResponse {
    #[serde(default)]
    pub results: Option<Vec<Place>>,
}

/// A geocoded place
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub country: Option<String>,
}

impl Place {
    /// `"Name, Country"`, or just the name when the country is unknown
    pub fn display_name(&self) -> String {
        match &self.country {
            Some(country) if !country.is_empty() => format!("{}, {}", self.name, country),
            _ => self.name.clone(),
        }
    }
}

/// Forecast response restricted to the current block
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ForecastResponse {
    pub current: CurrentConditions,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub(crate) struct CurrentConditions {
    pub temperature_2m: f64,
    pub relative_humidity_2m: f64,
}

/// Current outdoor conditions at a resolved place
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub reading: Reading,
    pub resolved_name: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geocoding_without_results() {
        let resp: GeocodingResponse =
            serde_json::from_str(r#"{"generationtime_ms": 0.4}"#).unwrap();
        assert!(resp.results.is_none());
    }

    #[test]
    fn test_geocoding_with_results() {
        let json = r#"{
            "results": [
                {"id": 3173435, "name": "Milan", "latitude": 45.46427, "longitude": 9.18951,
                 "country": "Italy", "admin1": "Lombardy"}
            ]
        }"#;
        let resp: GeocodingResponse = serde_json::from_str(json).unwrap();
        let places = resp.results.unwrap();
        assert_eq!(places[0].display_name(), "Milan, Italy");
    }

    #[test]
    fn test_display_name_without_country() {
        let place = Place {
            name: "Nowhere".into(),
            latitude: 0.0,
            longitude: 0.0,
            country: None,
        };
        assert_eq!(place.display_name(), "Nowhere");
    }

    #[test]
    fn test_forecast_current_block() {
        let json = r#"{
            "latitude": 45.46, "longitude": 9.18,
            "current_units": {"temperature_2m": "°C", "relative_humidity_2m": "%"},
            "current": {"time": "2026-01-10T12:00", "interval": 900,
                        "temperature_2m": 4.3, "relative_humidity_2m": 87}
        }"#;
        let resp: ForecastResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.current.temperature_2m, 4.3);
        assert_eq!(resp.current.relative_humidity_2m, 87.0);
    }
}
