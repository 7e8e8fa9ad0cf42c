//! Configuration file (condensa.toml)
//!
//! Every section is optional; missing keys fall back to the defaults.
//!
//! ```toml
//! [thresholds]
//! mite_caution = 45.0
//! mite_danger = 50.0
//! condensation_caution = 10.0
//! condensation_danger = 15.0
//! dry_air = 30.0
//!
//! [diagram]
//! samples = 100
//! levels = [20.0, 40.0, 50.0, 60.0, 80.0, 100.0]
//! safe_level = 45.0
//!
//! [weather]
//! language = "it"
//! timeout_secs = 10
//!
//! [defaults]
//! outdoor_temperature = 10.0
//! outdoor_humidity = 80.0
//! indoor_temperature = 22.0
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use condensa_core::{DiagramConfig, Thresholds};
use condensa_weather::WeatherConfig;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_FILE: &str = "condensa.toml";

/// Values used when an input is not given on the command line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputDefaults {
    pub outdoor_temperature: f64,
    pub outdoor_humidity: f64,
    pub indoor_temperature: f64,
}

impl Default for InputDefaults {
    fn default() -> Self {
        Self {
            outdoor_temperature: 10.0,
            outdoor_humidity: 80.0,
            indoor_temperature: 22.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CondensaConfig {
    pub thresholds: Thresholds,
    pub diagram: DiagramConfig,
    pub weather: WeatherConfig,
    pub defaults: InputDefaults,
}

impl CondensaConfig {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source).context("invalid configuration")?;
        config.thresholds.validate()?;
        config.diagram.validate()?;
        Ok(config)
    }

    /// Loads `path`, or `./condensa.toml` when present, or the defaults
    ///
    /// An explicit path must exist. Environment overrides for the weather
    /// section are applied last.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::read(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                Self::read(Path::new(DEFAULT_CONFIG_FILE))?
            }
            None => Self::default(),
        };

        Ok(Self {
            weather: config.weather.clone().with_env_overrides(),
            ..config
        })
    }

    fn read(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path)
            .with_context(|| format!("cannot read config file {}", path.display()))?;
        Self::from_toml_str(&source).with_context(|| format!("in {}", path.display()))
    }
}
