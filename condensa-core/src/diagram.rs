//! Psychrometric chart geometry
//!
//! Produces the curves, region and markers of a vapor-pressure vs
//! temperature chart. Rendering is left to whoever consumes [`DiagramSpec`]
//! (it serializes to JSON for that purpose).

use serde::{Deserialize, Serialize};

use crate::error::{PsychroError, PsychroResult};
use crate::psychro::saturation_pressure;
use crate::types::{CalculationInput, PsychrometricResult};

/// Geometry settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagramConfig {
    /// Points per curve (>= 2)
    pub samples: usize,
    /// Reference RH levels in percent, drawn in this order
    pub levels: Vec<f64>,
    /// Degrees added on each side of the interesting temperatures
    pub margin: f64,
    /// The upper end of the domain never drops below this (°C)
    pub min_upper: f64,
    /// RH level (%) whose area underneath is shaded as safe; `None` disables it
    pub safe_level: Option<f64>,
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            samples: 100,
            levels: vec![20.0, 40.0, 50.0, 60.0, 80.0, 100.0],
            margin: 5.0,
            min_upper: 30.0,
            safe_level: Some(45.0),
        }
    }
}

impl DiagramConfig {
    pub fn validate(&self) -> PsychroResult<()> {
        if self.samples < 2 {
            return Err(PsychroError::OutOfRange(format!(
                "diagram needs at least 2 samples per curve, got {}",
                self.samples
            )));
        }

        if !self.margin.is_finite() || self.margin < 0.0 {
            return Err(PsychroError::OutOfRange(format!(
                "diagram margin must be a non-negative number, got {}",
                self.margin
            )));
        }

        if !self.min_upper.is_finite() {
            return Err(PsychroError::OutOfRange("min_upper must be finite".into()));
        }

        let levels = self.levels.iter().chain(self.safe_level.iter());
        for level in levels {
            if !(*level > 0.0 && *level <= 100.0) {
                return Err(PsychroError::OutOfRange(format!(
                    "reference level {} is outside (0, 100]",
                    level
                )));
            }
        }

        Ok(())
    }
}

/// One (temperature, vapor pressure) point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// °C
    pub temperature: f64,
    /// Pa
    pub pressure: f64,
}

impl ChartPoint {
    pub const fn new(temperature: f64, pressure: f64) -> Self {
        Self {
            temperature,
            pressure,
        }
    }
}

/// Closed temperature interval sampled by every curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureDomain {
    pub min: f64,
    pub max: f64,
}

impl TemperatureDomain {
    pub fn contains(&self, t: f64) -> bool {
        t >= self.min && t <= self.max
    }

    /// `samples` evenly spaced temperatures, both ends included
    pub fn sample(&self, samples: usize) -> Vec<f64> {
        let last = samples.saturating_sub(1).max(1) as f64;
        let step = (self.max - self.min) / last;
        (0..samples)
            .map(|i| {
                if i + 1 == samples {
                    self.max
                } else {
                    self.min + step * i as f64
                }
            })
            .collect()
    }
}

/// Constant-RH background curve
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceCurve {
    /// RH as a fraction (0.0 - 1.0]
    pub fraction: f64,
    /// Label drawn next to the curve end, e.g. `"60%"`
    pub label: String,
    pub points: Vec<ChartPoint>,
}

impl ReferenceCurve {
    /// Right-hand end of the curve, where the label goes
    pub fn label_anchor(&self) -> Option<ChartPoint> {
        self.points.last().copied()
    }
}

/// Area between zero pressure and a constant-RH curve
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SafeRegion {
    pub fraction: f64,
    pub upper: Vec<ChartPoint>,
}

/// Heating/cooling at constant absolute moisture
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProcessSegment {
    /// Outdoor state
    pub start: ChartPoint,
    /// Indoor state
    pub end: ChartPoint,
}

/// Everything a renderer needs to draw the chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagramSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub domain: TemperatureDomain,
    pub background_curves: Vec<ReferenceCurve>,
    pub safe_region: Option<SafeRegion>,
    pub process_segment: ProcessSegment,
    pub dew_point_marker: ChartPoint,
}

/// Plotting domain for a calculation
///
/// `[min(Td, Tout, Tin) − margin, max(min_upper, Tout, Tin) + margin]`, so
/// both temperatures always sit at least `margin` degrees inside it.
pub fn plot_domain(
    outdoor_temperature: f64,
    indoor_temperature: f64,
    dew_point: f64,
    config: &DiagramConfig,
) -> TemperatureDomain {
    let low = dew_point.min(outdoor_temperature).min(indoor_temperature);
    let high = config
        .min_upper
        .max(outdoor_temperature)
        .max(indoor_temperature);

    TemperatureDomain {
        min: low - config.margin,
        max: high + config.margin,
    }
}

/// Builds chart geometry from a finished calculation
#[derive(Debug, Clone, Default)]
pub struct DiagramBuilder {
    config: DiagramConfig,
}

impl DiagramBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DiagramConfig) -> PsychroResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &DiagramConfig {
        &self.config
    }

    pub fn build(
        &self,
        input: &CalculationInput,
        result: &PsychrometricResult,
    ) -> DiagramSpec {
        let outdoor_t = input.outdoor.temperature;
        let indoor_t = input.indoor_temperature;
        let pv = result.actual_vapor_pressure;

        let domain = plot_domain(outdoor_t, indoor_t, result.dew_point, &self.config);
        let temps = domain.sample(self.config.samples);

        let background_curves = self
            .config
            .levels
            .iter()
            .map(|&level| ReferenceCurve {
                fraction: level / 100.0,
                label: format!("{}%", level),
                points: curve(&temps, level / 100.0),
            })
            .collect();

        let safe_region = self.config.safe_level.map(|level| SafeRegion {
            fraction: level / 100.0,
            upper: curve(&temps, level / 100.0),
        });

        DiagramSpec {
            title: "Psychrometric diagram".to_string(),
            x_label: "Temperature (°C)".to_string(),
            y_label: "Vapor pressure (Pa)".to_string(),
            domain,
            background_curves,
            safe_region,
            process_segment: ProcessSegment {
                start: ChartPoint::new(outdoor_t, pv),
                end: ChartPoint::new(indoor_t, pv),
            },
            dew_point_marker: ChartPoint::new(result.dew_point, pv),
        }
    }
}

fn curve(temps: &[f64], fraction: f64) -> Vec<ChartPoint> {
    temps
        .iter()
        .map(|&t| ChartPoint::new(t, saturation_pressure(t) * fraction))
        .collect()
}
