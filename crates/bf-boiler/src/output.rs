//! Output records.

use bf_combustion::{EmissionsProfile, FlueComposition};
use serde::{Deserialize, Serialize};

/// Steam delivered at the drum outlet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Steam {
    /// Steam production [lb/h]
    pub flow_rate_pph: f64,
    /// Delivery pressure [psig]
    pub pressure_psig: f64,
    /// Saturation temperature at delivery pressure [°F]
    pub temperature_f: f64,
}

/// Flue gas leaving the stack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlueGases {
    /// Discharge rate [ft³/h]
    pub volume_cf_per_h: f64,
    /// Stack temperature [°C]
    pub temperature_c: f64,
    pub composition: FlueComposition,
}

/// One complete steady-state result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoilerOutput {
    pub steam: Steam,
    pub flue_gases: FlueGases,
    /// Heat released but not recovered to steam [BTU/h]
    pub waste_heat_btu_per_h: f64,
    pub emissions: EmissionsProfile,
}
