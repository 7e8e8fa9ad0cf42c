//! Threshold ladders turning computed values into advisories
//!
//! Each ladder is a total function of a single number. The thresholds live
//! in [`Thresholds`] so they can be tuned from configuration; the defaults
//! are the documented table:
//!
//! | Ladder | Safe | Caution | Danger |
//! |:-------|:-----|:--------|:-------|
//! | Dust mites (indoor RH %) | `< 45` | `45 ..= 50` | `> 50` |
//! | Condensation (dew point °C) | `<= 10` | `(10, 15]` | `> 15` |
//! | Dry air (indoor RH %) | `>= 30` | `< 30` | — |

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{PsychroError, PsychroResult};
use crate::types::PsychrometricResult;

/// Severity of an advisory, ordered from harmless to worst
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Safe,
    Caution,
    Danger,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Safe => "safe",
            RiskLevel::Caution => "caution",
            RiskLevel::Danger => "danger",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What an advisory is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvisoryCategory {
    /// Dust mites and mould from indoor humidity
    MiteRisk,
    /// Water on cold surfaces from the dew point
    CondensationRisk,
    /// Air dry enough to be uncomfortable
    DryAir,
}

impl AdvisoryCategory {
    /// Short title used in headlines
    pub fn title(&self) -> &'static str {
        match self {
            AdvisoryCategory::MiteRisk => "Dust mites",
            AdvisoryCategory::CondensationRisk => "Condensation",
            AdvisoryCategory::DryAir => "Dry air",
        }
    }
}

/// A classified value with a human-readable message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advisory {
    pub category: AdvisoryCategory,
    pub level: RiskLevel,
    pub message: String,
}

impl Advisory {
    fn new(category: AdvisoryCategory, level: RiskLevel, message: String) -> Self {
        Self {
            category,
            level,
            message,
        }
    }
}

/// Threshold table for all ladders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// Indoor RH (%) from which mite risk becomes Caution (inclusive)
    pub mite_caution: f64,
    /// Indoor RH (%) above which mite risk becomes Danger
    pub mite_danger: f64,
    /// Dew point (°C) above which condensation becomes Caution
    pub condensation_caution: f64,
    /// Dew point (°C) above which condensation becomes Danger
    pub condensation_danger: f64,
    /// Indoor RH (%) below which the air counts as too dry
    pub dry_air: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            mite_caution: 45.0,
            mite_danger: 50.0,
            condensation_caution: 10.0,
            condensation_danger: 15.0,
            dry_air: 30.0,
        }
    }
}

impl Thresholds {
    /// Rejects tables whose Caution band is inverted or non-finite
    pub fn validate(&self) -> PsychroResult<()> {
        let all = [
            self.mite_caution,
            self.mite_danger,
            self.condensation_caution,
            self.condensation_danger,
            self.dry_air,
        ];
        if all.iter().any(|v| !v.is_finite()) {
            return Err(PsychroError::invalid("thresholds must be finite numbers"));
        }

        if self.mite_caution > self.mite_danger {
            return Err(PsychroError::invalid(format!(
                "mite caution threshold {} is above danger threshold {}",
                self.mite_caution, self.mite_danger
            )));
        }

        if self.condensation_caution > self.condensation_danger {
            return Err(PsychroError::invalid(format!(
                "condensation caution threshold {} is above danger threshold {}",
                self.condensation_caution, self.condensation_danger
            )));
        }

        Ok(())
    }

    /// Mite ladder over the resulting indoor RH (%)
    pub fn mite_level(&self, indoor_rh: f64) -> RiskLevel {
        if indoor_rh < self.mite_caution {
            RiskLevel::Safe
        } else if indoor_rh <= self.mite_danger {
            RiskLevel::Caution
        } else {
            RiskLevel::Danger
        }
    }

    /// Condensation ladder over the dew point (°C)
    pub fn condensation_level(&self, dew_point: f64) -> RiskLevel {
        if dew_point > self.condensation_danger {
            RiskLevel::Danger
        } else if dew_point > self.condensation_caution {
            RiskLevel::Caution
        } else {
            RiskLevel::Safe
        }
    }

    /// Dry-air ladder over the resulting indoor RH (%)
    pub fn dry_air_level(&self, indoor_rh: f64) -> RiskLevel {
        if indoor_rh < self.dry_air {
            RiskLevel::Caution
        } else {
            RiskLevel::Safe
        }
    }

    pub fn classify_mite(&self, indoor_rh: f64) -> Advisory {
        let level = self.mite_level(indoor_rh);
        let message = match level {
            RiskLevel::Safe => format!(
                "Indoor humidity {:.1}% is below {:.0}%: dust mites cannot thrive.",
                indoor_rh, self.mite_caution
            ),
            RiskLevel::Caution => format!(
                "Indoor humidity {:.1}% is borderline for dust mites; keep it at or below {:.0}%.",
                indoor_rh, self.mite_danger
            ),
            RiskLevel::Danger => format!(
                "Indoor humidity {:.1}% lets dust mites and mould thrive; bring it below {:.0}%.",
                indoor_rh, self.mite_caution
            ),
        };
        Advisory::new(AdvisoryCategory::MiteRisk, level, message)
    }

    pub fn classify_condensation(&self, dew_point: f64) -> Advisory {
        let level = self.condensation_level(dew_point);
        let message = match level {
            RiskLevel::Safe => format!(
                "Dew point {:.1}°C: low condensation risk.",
                dew_point
            ),
            RiskLevel::Caution => format!(
                "Dew point {:.1}°C: cold spots such as window frames may fog up.",
                dew_point
            ),
            RiskLevel::Danger => format!(
                "Dew point {:.1}°C: walls colder than this will get wet. Mould danger!",
                dew_point
            ),
        };
        Advisory::new(AdvisoryCategory::CondensationRisk, level, message)
    }

    pub fn classify_dry_air(&self, indoor_rh: f64) -> Advisory {
        let level = self.dry_air_level(indoor_rh);
        let message = match level {
            RiskLevel::Caution => format!(
                "Indoor humidity {:.1}% is too dry and may irritate the throat.",
                indoor_rh
            ),
            _ => format!("Indoor humidity {:.1}% is not too dry.", indoor_rh),
        };
        Advisory::new(AdvisoryCategory::DryAir, level, message)
    }

    /// Runs every ladder, condensation first
    pub fn classify(&self, result: &PsychrometricResult) -> Vec<Advisory> {
        vec![
            self.classify_condensation(result.dew_point),
            self.classify_mite(result.resulting_indoor_rh),
            self.classify_dry_air(result.resulting_indoor_rh),
        ]
    }
}

/// Headline verdict across a set of advisories
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub level: RiskLevel,
    pub headline: String,
}

impl Verdict {
    /// Picks the worst advisory; ties go to the earliest one
    pub fn from_advisories(advisories: &[Advisory]) -> Self {
        let worst = advisories
            .iter()
            .fold(None::<&Advisory>, |acc, a| match acc {
                Some(best) if best.level >= a.level => Some(best),
                _ => Some(a),
            });

        match worst {
            Some(a) if a.level > RiskLevel::Safe => Self {
                level: a.level,
                headline: format!("{}: {}", a.level.as_str().to_uppercase(), a.category.title()),
            },
            _ => Self {
                level: RiskLevel::Safe,
                headline: "All good: ideal parameters".to_string(),
            },
        }
    }
}
