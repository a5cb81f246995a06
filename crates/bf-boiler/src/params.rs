//! Boiler rating and construction parameters.

use serde::{Deserialize, Serialize};

/// Inclusive min/max band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

/// Furnace construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FurnaceDesign {
    pub corrugated: bool,
    /// e.g. "wet-back", "dry-back"
    pub kind: String,
}

/// Fire-tube bundle geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TubeConfig {
    pub count: u32,
    /// Tube inner diameter [in]
    pub diameter_in: f64,
    /// Tube length [ft]
    pub length_ft: f64,
}

/// Refractory lining properties.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Refractory {
    /// Thermal conductivity [BTU/(h·ft·°F)]
    pub thermal_conductivity: f64,
    /// Service temperature limit [°C]
    pub max_temp_c: f64,
}

/// Rating and construction parameters for one boiler.
///
/// A plain immutable value: construct it once (or take `Default`), thread
/// it through, never mutate it. Of these fields only `efficiency` and
/// `pressure.min` enter the calculation; the rest describe the unit for
/// sizing context and are carried unchanged. Regression tests pin that
/// contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoilerParams {
    /// Overall fuel-to-steam efficiency (0–1); sets the waste-heat split
    pub efficiency: f64,
    /// Rated horsepower band [BHP]
    pub horsepower: Range,
    /// Rated steam output band [lb/h]
    pub steam_output: Range,
    /// Allowable operating pressure band [psig]; `min` floors the target
    pub pressure: Range,
    pub furnace: FurnaceDesign,
    pub tubes: TubeConfig,
    pub refractory: Refractory,
    /// Overall heat transfer coefficient [BTU/(h·ft²·°F)]
    pub heat_transfer_coeff: f64,
}

impl Default for BoilerParams {
    fn default() -> Self {
        Self {
            efficiency: 0.9,
            horsepower: Range {
                min: 50.0,
                max: 2500.0,
            },
            steam_output: Range {
                min: 1725.0,
                max: 86250.0,
            },
            pressure: Range {
                min: 15.0,
                max: 350.0,
            },
            furnace: FurnaceDesign {
                corrugated: true,
                kind: "wet-back".to_string(),
            },
            tubes: TubeConfig {
                count: 100,
                diameter_in: 2.0,
                length_ft: 10.0,
            },
            refractory: Refractory {
                thermal_conductivity: 0.5,
                max_temp_c: 1200.0,
            },
            heat_transfer_coeff: 50.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documented_defaults() {
        let params = BoilerParams::default();
        assert_eq!(params.efficiency, 0.9);
        assert_eq!(params.pressure.min, 15.0);
        assert_eq!(params.pressure.max, 350.0);
        assert_eq!(params.tubes.count, 100);
        assert_eq!(params.furnace.kind, "wet-back");
        assert!(params.furnace.corrugated);
    }
}
