//! Combustion air supply.

use serde::{Deserialize, Serialize};

/// Combustion air delivered to the furnace for one simulate call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Air {
    /// Supply rate [ft³/h]
    pub flow_cf_per_h: f64,
    /// Supply temperature [°C]
    pub temperature_c: f64,
}
