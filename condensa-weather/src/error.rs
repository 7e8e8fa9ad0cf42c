//! Errors at the weather lookup boundary

use thiserror::Error;

pub type WeatherResult<T> = Result<T, WeatherError>;

/// Why a lookup failed
///
/// A failed lookup never touches readings the caller already holds.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum WeatherError {
    #[error("Place not found: {0}")]
    PlaceNotFound(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid weather data: {0}")]
    InvalidData(String),
}

impl From<reqwest::Error> for WeatherError {
    fn from(err: reqwest::Error) -> Self {
        WeatherError::Network(err.to_string())
    }
}

impl From<condensa_core::PsychroError> for WeatherError {
    fn from(err: condensa_core::PsychroError) -> Self {
        WeatherError::InvalidData(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use condensa_core::PsychroError;

    #[test]
    fn test_error_display() {
        let err = WeatherError::PlaceNotFound("Atlantis".into());
        assert_eq!(err.to_string(), "Place not found: Atlantis");
    }

    #[test]
    fn test_psychro_error_becomes_invalid_data() {
        let err: WeatherError = PsychroError::InvalidInput("humidity 130".into()).into();
        match err {
            WeatherError::InvalidData(msg) => assert!(msg.contains("humidity 130")),
            other => panic!("Expected InvalidData, got {:?}", other),
        }
    }
}
