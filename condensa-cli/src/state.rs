//! Inputs held between interactions
//!
//! The calculation core is stateless; the "last good reading" lives here.
//! A lookup only ever replaces the outdoor reading when it succeeds.

use condensa_core::{CalculationInput, PsychroResult, Reading};
use condensa_weather::{Observation, WeatherResult};
use serde::Serialize;

use crate::config::InputDefaults;

/// Where the outdoor reading came from
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReadingSource {
    Manual,
    Fetched { resolved_name: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct InputState {
    outdoor: Reading,
    indoor_temperature: f64,
    source: ReadingSource,
}

impl InputState {
    pub fn new(outdoor: Reading, indoor_temperature: f64) -> Self {
        Self {
            outdoor,
            indoor_temperature,
            source: ReadingSource::Manual,
        }
    }

    /// Manual values, each falling back to the configured default
    pub fn manual(
        outdoor_temperature: Option<f64>,
        outdoor_humidity: Option<f64>,
        indoor_temperature: Option<f64>,
        defaults: &InputDefaults,
    ) -> PsychroResult<Self> {
        let outdoor = Reading::new(
            outdoor_temperature.unwrap_or(defaults.outdoor_temperature),
            outdoor_humidity.unwrap_or(defaults.outdoor_humidity),
        )?;
        Ok(Self::new(
            outdoor,
            indoor_temperature.unwrap_or(defaults.indoor_temperature),
        ))
    }

    pub fn outdoor(&self) -> Reading {
        self.outdoor
    }

    pub fn indoor_temperature(&self) -> f64 {
        self.indoor_temperature
    }

    pub fn source(&self) -> &ReadingSource {
        &self.source
    }

    /// Takes the fetched reading on success; leaves everything as it was on failure
    pub fn apply_lookup(&mut self, outcome: WeatherResult<Observation>) -> WeatherResult<()> {
        let observation = outcome?;
        self.outdoor = observation.reading;
        self.source = ReadingSource::Fetched {
            resolved_name: observation.resolved_name,
        };
        Ok(())
    }

    pub fn calculation_input(&self) -> CalculationInput {
        CalculationInput::new(self.outdoor, self.indoor_temperature)
    }
}
