//! # 💧 condensa-core — Indoor Humidity and Condensation Core
//!
//! Computes what happens to outdoor air once it is heated (or cooled) to
//! the indoor temperature: resulting relative humidity, dew point, the
//! advisories derived from them and the geometry of a psychrometric chart.
//!
//! ## Pipeline
//!
//! ```text
//! (Tout, RHout, Tin) ──► psychro ──► {RHin, Td} ──► risk ──► advisories
//!                            │
//!                            └──────► diagram ──► chart geometry
//! ```
//!
//! The core is stateless: any "last known reading" belongs to the caller.
//!
//! ## Example
//!
//! ```rust
//! use condensa_core::{assess, CalculationInput, DiagramConfig, Reading, RiskLevel, Thresholds};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let input = CalculationInput::new(Reading::new(10.0, 80.0)?, 22.0);
//! let assessment = assess(&input, &Thresholds::default(), &DiagramConfig::default())?;
//!
//! assert!((assessment.result.resulting_indoor_rh - 37.0).abs() < 1.0);
//! assert_eq!(assessment.verdict().level, RiskLevel::Safe);
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`psychro`] - Magnus-formula functions
//! - [`risk`] - Threshold ladders and advisories
//! - [`diagram`] - Chart geometry
//! - [`types`] - Value records
//! - [`error`] - Error handling

pub mod error;
pub mod types;
pub mod psychro;
pub mod risk;
pub mod diagram;

pub use error::{PsychroError, PsychroResult};
pub use types::{CalculationInput, PsychrometricResult, Reading};
pub use psychro::{compute, dew_point, relative_humidity, saturation_pressure, vapor_pressure};
pub use risk::{Advisory, AdvisoryCategory, RiskLevel, Thresholds, Verdict};
pub use diagram::{
    ChartPoint, DiagramBuilder, DiagramConfig, DiagramSpec, ProcessSegment, ReferenceCurve,
    SafeRegion, TemperatureDomain, plot_domain,
};

use serde::{Deserialize, Serialize};

/// Output of one complete calculation pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub input: CalculationInput,
    pub result: PsychrometricResult,
    pub advisories: Vec<Advisory>,
    pub diagram: DiagramSpec,
}

impl Assessment {
    /// Advisory for a given category, if it was produced
    pub fn advisory(&self, category: AdvisoryCategory) -> Option<&Advisory> {
        self.advisories.iter().find(|a| a.category == category)
    }

    /// Worst level across all advisories, with a headline
    pub fn verdict(&self) -> Verdict {
        Verdict::from_advisories(&self.advisories)
    }
}

/// Validates the inputs and runs math, classification and chart geometry
///
/// Invalid inputs stop the pass before anything is computed, so no
/// advisory is ever derived from a NaN.
pub fn assess(
    input: &CalculationInput,
    thresholds: &Thresholds,
    diagram: &DiagramConfig,
) -> PsychroResult<Assessment> {
    thresholds.validate()?;
    let builder = DiagramBuilder::with_config(diagram.clone())?;

    let result = compute(input)?;
    let advisories = thresholds.classify(&result);
    let diagram = builder.build(input, &result);

    Ok(Assessment {
        input: *input,
        result,
        advisories,
        diagram,
    })
}
