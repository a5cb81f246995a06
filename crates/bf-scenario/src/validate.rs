//! Scenario validation logic.
//!
//! Validation guards the file boundary only: malformed numbers never reach
//! the pipeline. A degenerate operating point (feedwater hot enough to zero
//! the total heat per pound) is deliberately NOT rejected; the pipeline is
//! total over doubles and the caller renders whatever comes out.

use crate::schema::{SCHEMA_VERSION, Scenario};
use bf_boiler::{BoilerParams, Range};
use bf_core::numeric::ensure_finite;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },

    #[error("Non-finite value: {field} = {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("Negative value: {field} = {value}")]
    Negative { field: &'static str, value: f64 },

    #[error("Efficiency out of range: {value} (must be within 0..=1)")]
    EfficiencyOutOfRange { value: f64 },

    #[error("Inverted range: {field} ({min} > {max})")]
    InvertedRange {
        field: &'static str,
        min: f64,
        max: f64,
    },
}

pub fn validate_scenario(scenario: &Scenario) -> Result<(), ValidationError> {
    if scenario.version > SCHEMA_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: scenario.version,
        });
    }

    check_non_negative("fuel.quantity_per_h", scenario.fuel.quantity_per_h)?;
    check_non_negative("fuel.heat_content_btu", scenario.fuel.heat_content_btu)?;
    check_non_negative("water.flow_lb_per_h", scenario.water.flow_lb_per_h)?;
    check_finite("water.temperature_c", scenario.water.temperature_c)?;
    check_non_negative("air.flow_cf_per_h", scenario.air.flow_cf_per_h)?;
    check_finite("air.temperature_c", scenario.air.temperature_c)?;
    check_non_negative("electricity_kw", scenario.electricity_kw)?;
    check_non_negative("controls.pressure_psig", scenario.controls.pressure_psig)?;
    check_finite("controls.temperature_f", scenario.controls.temperature_f)?;

    validate_params(&scenario.params)
}

/// Validate a parameter set on its own (the CLI accepts override files).
pub fn validate_params(params: &BoilerParams) -> Result<(), ValidationError> {
    check_finite("params.efficiency", params.efficiency)?;
    if !(0.0..=1.0).contains(&params.efficiency) {
        return Err(ValidationError::EfficiencyOutOfRange {
            value: params.efficiency,
        });
    }

    check_range("params.horsepower", &params.horsepower)?;
    check_range("params.steam_output", &params.steam_output)?;
    check_range("params.pressure", &params.pressure)?;

    check_non_negative("params.tubes.diameter_in", params.tubes.diameter_in)?;
    check_non_negative("params.tubes.length_ft", params.tubes.length_ft)?;
    check_non_negative(
        "params.refractory.thermal_conductivity",
        params.refractory.thermal_conductivity,
    )?;
    check_finite("params.refractory.max_temp_c", params.refractory.max_temp_c)?;
    check_non_negative("params.heat_transfer_coeff", params.heat_transfer_coeff)?;

    Ok(())
}

fn check_finite(field: &'static str, value: f64) -> Result<(), ValidationError> {
    ensure_finite(value, field).map_err(|_| ValidationError::NonFinite { field, value })?;
    Ok(())
}

fn check_non_negative(field: &'static str, value: f64) -> Result<(), ValidationError> {
    check_finite(field, value)?;
    if value < 0.0 {
        return Err(ValidationError::Negative { field, value });
    }
    Ok(())
}

fn check_range(field: &'static str, range: &Range) -> Result<(), ValidationError> {
    check_finite(field, range.min)?;
    check_finite(field, range.max)?;
    if range.min > range.max {
        return Err(ValidationError::InvertedRange {
            field,
            min: range.min,
            max: range.max,
        });
    }
    Ok(())
}
