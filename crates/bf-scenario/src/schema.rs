//! Scenario document definitions.

use bf_boiler::{Air, BoilerInputs, BoilerParams, ControlSettings, Fuel, Water};
use serde::{Deserialize, Serialize};

/// Current scenario document version.
pub const SCHEMA_VERSION: u32 = 1;

/// One operating case: everything a simulate call needs, plus a name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Scenario {
    pub version: u32,
    pub name: String,
    pub fuel: Fuel,
    pub water: Water,
    pub air: Air,
    pub electricity_kw: f64,
    pub controls: ControlSettings,
    /// Boiler rating overrides; documented defaults apply where omitted
    #[serde(default)]
    pub params: BoilerParams,
}

impl Scenario {
    /// Assemble the simulate-call inputs.
    pub fn inputs(&self) -> BoilerInputs {
        BoilerInputs {
            fuel: self.fuel.clone(),
            water: self.water.clone(),
            air: self.air.clone(),
            electricity_kw: self.electricity_kw,
            controls: self.controls.clone(),
        }
    }
}
