//! Magnus-formula psychrometrics
//!
//! Pure functions over `f64`. Nothing here allocates or keeps state, so
//! every function is safe to call from any thread.
//!
//! ## Formulas
//!
//! ```text
//! Psat(T)  = A · exp(B·T / (C + T))              [Pa]
//! γ(T, RH) = ln(RH / 100) + B·T / (C + T)
//! Td       = C·γ / (B − γ)                       [°C]
//! ```
//!
//! `Psat` has a singularity at `T = −C` (−243.5 °C), far outside any
//! weather or room temperature; it is left unguarded.

use crate::error::{PsychroError, PsychroResult};
use crate::types::{CalculationInput, PsychrometricResult, Reading};

/// Saturation pressure at 0 °C (Pa)
pub const MAGNUS_A: f64 = 611.2;

/// Magnus coefficient `b` (dimensionless)
pub const MAGNUS_B: f64 = 17.67;

/// Magnus coefficient `c` (°C)
pub const MAGNUS_C: f64 = 243.5;

/// Saturation vapor pressure in pascals at temperature `t` (°C)
#[inline]
pub fn saturation_pressure(t: f64) -> f64 {
    MAGNUS_A * magnus_exponent(t).exp()
}

/// Partial vapor pressure (Pa) carried by air in the given state
#[inline]
pub fn vapor_pressure(reading: &Reading) -> f64 {
    saturation_pressure(reading.temperature) * (reading.relative_humidity / 100.0)
}

/// Relative humidity (%) of air holding `vapor_pressure` at temperature `t`
///
/// Not clamped; anything above 100 is supersaturated air.
#[inline]
pub fn relative_humidity(vapor_pressure: f64, t: f64) -> f64 {
    vapor_pressure / saturation_pressure(t) * 100.0
}

/// Dew point (°C) of air at temperature `t` with relative humidity `rh` (%)
///
/// Fails with [`PsychroError::InvalidInput`] unless `rh` is in `(0, 100]`:
/// the logarithm is undefined for completely dry air.
pub fn dew_point(t: f64, rh: f64) -> PsychroResult<f64> {
    if !(rh > 0.0 && rh <= 100.0) {
        return Err(PsychroError::invalid(format!(
            "dew point needs relative humidity in (0, 100], got {}",
            rh
        )));
    }

    if !t.is_finite() {
        return Err(PsychroError::invalid(format!(
            "dew point needs a finite temperature, got {}",
            t
        )));
    }

    let gamma = (rh / 100.0).ln() + magnus_exponent(t);
    Ok(MAGNUS_C * gamma / (MAGNUS_B - gamma))
}

/// Runs the full pipeline for one set of inputs
///
/// Outdoor air is brought to the indoor temperature at constant absolute
/// moisture, i.e. its vapor pressure is carried over unchanged.
pub fn compute(input: &CalculationInput) -> PsychroResult<PsychrometricResult> {
    input.validate()?;

    let outdoor = &input.outdoor;
    let saturation_pressure_outdoor = saturation_pressure(outdoor.temperature);
    let actual_vapor_pressure = saturation_pressure_outdoor * (outdoor.relative_humidity / 100.0);
    let saturation_pressure_indoor = saturation_pressure(input.indoor_temperature);

    Ok(PsychrometricResult {
        saturation_pressure_outdoor,
        actual_vapor_pressure,
        saturation_pressure_indoor,
        resulting_indoor_rh: actual_vapor_pressure / saturation_pressure_indoor * 100.0,
        dew_point: dew_point(outdoor.temperature, outdoor.relative_humidity)?,
    })
}

#[inline]
fn magnus_exponent(t: f64) -> f64 {
    MAGNUS_B * t / (MAGNUS_C + t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saturation_pressure_reference_points() {
        assert!((saturation_pressure(20.0) - 2338.0).abs() < 5.0);
        assert!((saturation_pressure(10.0) - 1228.0).abs() < 3.0);
        assert!((saturation_pressure(0.0) - MAGNUS_A).abs() < 1e-9);
    }

    #[test]
    fn test_saturation_pressure_strictly_increasing() {
        let mut previous = saturation_pressure(-50.0);
        let mut t = -49.5;
        while t <= 60.0 {
            let current = saturation_pressure(t);
            assert!(current > previous, "not increasing at {}°C", t);
            previous = current;
            t += 0.5;
        }
    }

    #[test]
    fn test_dew_point_reference() {
        let td = dew_point(10.0, 80.0).unwrap();
        assert!((td - 6.7).abs() < 0.2, "got {}", td);
    }

    #[test]
    fn test_dew_point_never_above_temperature() {
        for t in [-30.0, -5.0, 0.0, 12.0, 25.0, 40.0] {
            for rh in [1.0, 10.0, 35.0, 60.0, 90.0, 99.9] {
                let td = dew_point(t, rh).unwrap();
                assert!(td < t, "Td {} >= T {} at RH {}", td, t, rh);
            }
        }
    }

    #[test]
    fn test_dew_point_equals_temperature_at_saturation() {
        for t in [-10.0, 0.0, 15.0, 30.0] {
            let td = dew_point(t, 100.0).unwrap();
            assert!((td - t).abs() < 1e-9);
        }
    }

    #[test]
    fn test_dew_point_rejects_dry_air() {
        assert!(matches!(
            dew_point(10.0, 0.0),
            Err(PsychroError::InvalidInput(_))
        ));
        assert!(dew_point(10.0, -5.0).is_err());
        assert!(dew_point(10.0, f64::NAN).is_err());
        assert!(dew_point(10.0, 120.0).is_err());
    }

    #[test]
    fn test_relative_humidity_identity() {
        // Same temperature indoors and outdoors: RH must not change
        for (t, rh) in [(10.0, 80.0), (-3.0, 45.0), (28.0, 62.5)] {
            let pv = vapor_pressure(&Reading::new(t, rh).unwrap());
            assert!((relative_humidity(pv, t) - rh).abs() < 0.1);
        }
    }

    #[test]
    fn test_compute_reference_scenario() {
        let input = CalculationInput::new(Reading::new(10.0, 80.0).unwrap(), 22.0);
        let result = compute(&input).unwrap();

        assert!((result.resulting_indoor_rh - 36.8).abs() < 1.0);
        assert!((result.dew_point - 6.7).abs() < 0.2);
        assert!(
            (result.actual_vapor_pressure - result.saturation_pressure_outdoor * 0.8).abs() < 1e-9
        );
    }

    #[test]
    fn test_compute_does_not_clamp() {
        // Warm humid air cooled indoors goes past saturation
        let input = CalculationInput::new(Reading::new(30.0, 90.0).unwrap(), 18.0);
        let result = compute(&input).unwrap();
        assert!(result.resulting_indoor_rh > 100.0);
        assert!(result.is_supersaturated());
    }

    #[test]
    fn test_compute_rejects_zero_humidity() {
        let input = CalculationInput::new(Reading::new(10.0, 0.0).unwrap(), 22.0);
        assert!(matches!(compute(&input), Err(PsychroError::InvalidInput(_))));
    }
}
