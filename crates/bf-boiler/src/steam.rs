//! Steam generation from absorbed heat.

use crate::heat_transfer::HeatAbsorption;
use crate::inputs::{ControlSettings, Water};
use crate::output::Steam;
use crate::params::BoilerParams;
use bf_core::units::fahrenheit_from_celsius;

/// Atmospheric boiling point [°F], base of the saturation fit.
pub const ATMOSPHERIC_BOILING_F: f64 = 212.0;

/// Saturation temperature rise per psi of gauge pressure [°F/psi].
pub const SATURATION_SLOPE_F_PER_PSI: f64 = 1.7;

/// Latent heat of vaporization at 0 psig [BTU/lb].
pub const LATENT_HEAT_BASE_BTU_PER_LB: f64 = 970.0;

/// Latent heat falloff per psi of gauge pressure [BTU/(lb·psi)].
pub const LATENT_HEAT_SLOPE: f64 = 0.5;

/// Saturation temperature at gauge pressure [°F]. Linear fit.
#[inline]
pub fn saturation_temp_f(pressure_psig: f64) -> f64 {
    ATMOSPHERIC_BOILING_F + pressure_psig * SATURATION_SLOPE_F_PER_PSI
}

/// Latent heat of vaporization at gauge pressure [BTU/lb]. Linear fit.
#[inline]
pub fn latent_heat_btu_per_lb(pressure_psig: f64) -> f64 {
    LATENT_HEAT_BASE_BTU_PER_LB - pressure_psig * LATENT_HEAT_SLOPE
}

/// Convert absorbed heat into steam at the target operating point.
///
/// The target pressure is floored at `params.pressure.min`. The division by
/// total heat per pound is deliberately unguarded: feedwater hot enough to
/// drive the denominator to zero yields an infinite flow rate rather than
/// an error, and the caller renders whatever comes out.
pub fn generate(
    heat: &HeatAbsorption,
    water: &Water,
    controls: &ControlSettings,
    params: &BoilerParams,
) -> Steam {
    let pressure_psig = controls.pressure_psig.max(params.pressure.min);
    let temperature_f = saturation_temp_f(pressure_psig);
    let latent = latent_heat_btu_per_lb(pressure_psig);
    let sensible = temperature_f - fahrenheit_from_celsius(water.temperature_c);
    let total_heat_per_lb = sensible + latent;

    Steam {
        flow_rate_pph: heat.heat_to_water_btu_per_h / total_heat_per_lb,
        pressure_psig,
        temperature_f,
    }
}
