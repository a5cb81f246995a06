//! Input records for one simulate call.

use bf_combustion::{Air, Fuel};
use serde::{Deserialize, Serialize};

/// Feedwater supply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Water {
    /// Feed rate [lb/h]
    pub flow_lb_per_h: f64,
    /// Feed temperature [°C]
    pub temperature_c: f64,
}

/// Target operating point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlSettings {
    /// Target steam pressure [psig]
    pub pressure_psig: f64,
    /// Target steam temperature [°F]; accepted, but the saturation fit is
    /// pressure-driven and never reads it
    pub temperature_f: f64,
}

/// Everything one simulate call consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoilerInputs {
    pub fuel: Fuel,
    pub water: Water,
    pub air: Air,
    /// Auxiliary electrical load (draft fans, feed pump) [kW]; outside the
    /// heat balance
    pub electricity_kw: f64,
    pub controls: ControlSettings,
}
