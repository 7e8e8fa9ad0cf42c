//! Value records shared by the calculation pipeline
//!
//! All of them are immutable snapshots recomputed on every calculation pass.

use serde::{Deserialize, Serialize};

use crate::error::{PsychroError, PsychroResult};

/// A temperature/humidity pair, either typed by the user or fetched
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Dry-bulb temperature in °C
    pub temperature: f64,

    /// Relative humidity in percent (0.0 - 100.0)
    pub relative_humidity: f64,
}

impl Reading {
    /// Creates a validated reading
    pub fn new(temperature: f64, relative_humidity: f64) -> PsychroResult<Self> {
        let reading = Self {
            temperature,
            relative_humidity,
        };
        reading.validate()?;
        Ok(reading)
    }

    /// Checks the record invariants: finite temperature, RH in [0, 100]
    pub fn validate(&self) -> PsychroResult<()> {
        if !self.temperature.is_finite() {
            return Err(PsychroError::invalid(format!(
                "temperature must be a finite number, got {}",
                self.temperature
            )));
        }

        if !(0.0..=100.0).contains(&self.relative_humidity) {
            return Err(PsychroError::invalid(format!(
                "relative humidity must be within [0, 100], got {}",
                self.relative_humidity
            )));
        }

        Ok(())
    }
}

/// Inputs of one calculation pass
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationInput {
    /// Outdoor air before it enters the home
    pub outdoor: Reading,

    /// Target indoor temperature in °C
    pub indoor_temperature: f64,
}

impl CalculationInput {
    pub fn new(outdoor: Reading, indoor_temperature: f64) -> Self {
        Self {
            outdoor,
            indoor_temperature,
        }
    }

    /// Validates everything the pipeline needs before computing anything
    ///
    /// RH = 0 passes [`Reading::validate`] but is rejected here, since the
    /// dew point is undefined for completely dry air.
    pub fn validate(&self) -> PsychroResult<()> {
        self.outdoor.validate()?;

        if self.outdoor.relative_humidity <= 0.0 {
            return Err(PsychroError::invalid(
                "outdoor relative humidity must be greater than 0",
            ));
        }

        if !self.indoor_temperature.is_finite() {
            return Err(PsychroError::invalid(format!(
                "indoor temperature must be a finite number, got {}",
                self.indoor_temperature
            )));
        }

        Ok(())
    }
}

/// Result of the psychrometric pipeline
///
/// `resulting_indoor_rh` is never clamped: values above 100 mean the air
/// will condense once it reaches the indoor temperature.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PsychrometricResult {
    /// Saturation vapor pressure at the outdoor temperature (Pa)
    pub saturation_pressure_outdoor: f64,

    /// Partial pressure of the vapor carried indoors (Pa)
    pub actual_vapor_pressure: f64,

    /// Saturation vapor pressure at the indoor temperature (Pa)
    pub saturation_pressure_indoor: f64,

    /// Relative humidity once the air reaches the indoor temperature (%)
    pub resulting_indoor_rh: f64,

    /// Dew point of the outdoor air (°C)
    pub dew_point: f64,
}

impl PsychrometricResult {
    /// True when the indoor air is at or past saturation
    pub fn is_supersaturated(&self) -> bool {
        self.resulting_indoor_rh >= 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reading_accepts_bounds() {
        assert!(Reading::new(10.0, 0.0).is_ok());
        assert!(Reading::new(10.0, 100.0).is_ok());
        assert!(Reading::new(-40.0, 55.5).is_ok());
    }

    #[test]
    fn test_reading_rejects_out_of_range_humidity() {
        assert!(matches!(
            Reading::new(10.0, 100.1),
            Err(PsychroError::InvalidInput(_))
        ));
        assert!(matches!(
            Reading::new(10.0, -1.0),
            Err(PsychroError::InvalidInput(_))
        ));
        assert!(Reading::new(10.0, f64::NAN).is_err());
    }

    #[test]
    fn test_reading_rejects_non_finite_temperature() {
        assert!(Reading::new(f64::INFINITY, 50.0).is_err());
        assert!(Reading::new(f64::NAN, 50.0).is_err());
    }

    #[test]
    fn test_input_rejects_zero_humidity() {
        let outdoor = Reading::new(10.0, 0.0).unwrap();
        let input = CalculationInput::new(outdoor, 22.0);
        let err = input.validate().unwrap_err();
        assert!(err.to_string().contains("greater than 0"));
    }

    #[test]
    fn test_input_rejects_non_finite_indoor() {
        let outdoor = Reading::new(10.0, 80.0).unwrap();
        let input = CalculationInput::new(outdoor, f64::NAN);
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_supersaturation_flag() {
        let result = PsychrometricResult {
            saturation_pressure_outdoor: 2000.0,
            actual_vapor_pressure: 1900.0,
            saturation_pressure_indoor: 1800.0,
            resulting_indoor_rh: 105.5,
            dew_point: 16.0,
        };
        assert!(result.is_supersaturated());
    }

    #[test]
    fn test_reading_serde() {
        let reading = Reading::new(12.5, 64.0).unwrap();
        let json = serde_json::to_string(&reading).unwrap();
        assert!(json.contains("relative_humidity"));
        let back: Reading = serde_json::from_str(&json).unwrap();
        assert_eq!(back, reading);
    }
}
