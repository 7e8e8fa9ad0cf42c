//! Terminal and JSON rendering

use std::fmt::Write;

use colored::*;
use condensa_core::{Advisory, Assessment, CalculationInput, PsychrometricResult, RiskLevel, Verdict};
use condensa_weather::Observation;
use serde::Serialize;

use crate::state::ReadingSource;

/// Machine-readable `calc --json` output
#[derive(Debug, Serialize)]
pub struct CalcReport<'a> {
    pub source: &'a ReadingSource,
    pub input: &'a CalculationInput,
    pub result: &'a PsychrometricResult,
    pub advisories: &'a [Advisory],
    pub verdict: Verdict,
}

impl<'a> CalcReport<'a> {
    pub fn new(assessment: &'a Assessment, source: &'a ReadingSource) -> Self {
        Self {
            source,
            input: &assessment.input,
            result: &assessment.result,
            advisories: &assessment.advisories,
            verdict: assessment.verdict(),
        }
    }
}

fn level_tag(level: RiskLevel) -> ColoredString {
    match level {
        RiskLevel::Safe => "  OK   ".green().bold(),
        RiskLevel::Caution => "CAUTION".yellow().bold(),
        RiskLevel::Danger => "DANGER ".red().bold(),
    }
}

fn source_line(source: &ReadingSource) -> String {
    match source {
        ReadingSource::Manual => "manual input".to_string(),
        ReadingSource::Fetched { resolved_name } => format!("current weather in {}", resolved_name),
    }
}

/// Human-readable report: inputs, the two metrics, advisories, verdict
pub fn render_assessment(assessment: &Assessment, source: &ReadingSource) -> String {
    let input = &assessment.input;
    let result = &assessment.result;
    let mut out = String::new();

    let _ = writeln!(out, "{}", "Condensation check".bold());
    let _ = writeln!(
        out,
        "  Outdoor  {:>6.1}°C  {:>5.1}%   ({})",
        input.outdoor.temperature,
        input.outdoor.relative_humidity,
        source_line(source).dimmed()
    );
    let _ = writeln!(out, "  Indoor   {:>6.1}°C", input.indoor_temperature);
    let _ = writeln!(out);

    let _ = writeln!(
        out,
        "  {:<18} {}",
        "Indoor humidity",
        format!("{:.1}%", result.resulting_indoor_rh).cyan().bold()
    );
    let _ = writeln!(
        out,
        "  {:<18} {}",
        "Dew point",
        format!("{:.1}°C", result.dew_point).cyan().bold()
    );
    if result.is_supersaturated() {
        let _ = writeln!(
            out,
            "  {}",
            "Air will be saturated indoors: condensation is certain.".red()
        );
    }
    let _ = writeln!(out);

    for advisory in &assessment.advisories {
        let _ = writeln!(
            out,
            "  [{}] {:<13} {}",
            level_tag(advisory.level),
            advisory.category.title(),
            advisory.message
        );
    }

    let verdict = assessment.verdict();
    let _ = writeln!(out);
    let headline = match verdict.level {
        RiskLevel::Safe => verdict.headline.green().bold(),
        RiskLevel::Caution => verdict.headline.yellow().bold(),
        RiskLevel::Danger => verdict.headline.red().bold(),
    };
    let _ = writeln!(out, "  {}", headline);

    out
}

pub fn render_observation(observation: &Observation) -> String {
    format!(
        "{} {}\n  Temperature {:>6.1}°C\n  Humidity    {:>6.1}%\n  Coordinates {:.4}, {:.4}\n",
        "Current weather in".bold(),
        observation.resolved_name.cyan().bold(),
        observation.reading.temperature,
        observation.reading.relative_humidity,
        observation.latitude,
        observation.longitude
    )
}
