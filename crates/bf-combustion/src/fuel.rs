//! Fuel definitions.

use serde::{Deserialize, Serialize};

/// Fuels the simulator accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FuelKind {
    /// Cordwood / hogged wood waste
    Wood,
    /// Bituminous coal
    Coal,
    /// No. 2 fuel oil
    FuelOil,
    /// Pipeline natural gas
    NaturalGas,
    /// Propane (LPG)
    Propane,
}

impl FuelKind {
    pub const ALL: [FuelKind; 5] = [
        FuelKind::Wood,
        FuelKind::Coal,
        FuelKind::FuelOil,
        FuelKind::NaturalGas,
        FuelKind::Propane,
    ];

    /// Canonical key, as spelled in scenario files.
    pub fn key(&self) -> &'static str {
        match self {
            FuelKind::Wood => "wood",
            FuelKind::Coal => "coal",
            FuelKind::FuelOil => "fuel_oil",
            FuelKind::NaturalGas => "natural_gas",
            FuelKind::Propane => "propane",
        }
    }

    /// Get human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            FuelKind::Wood => "Wood",
            FuelKind::Coal => "Coal",
            FuelKind::FuelOil => "Fuel Oil",
            FuelKind::NaturalGas => "Natural Gas",
            FuelKind::Propane => "Propane",
        }
    }
}

impl std::str::FromStr for FuelKind {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "WOOD" => Ok(FuelKind::Wood),
            "COAL" => Ok(FuelKind::Coal),
            "FUEL_OIL" | "FUEL OIL" | "OIL" => Ok(FuelKind::FuelOil),
            "NATURAL_GAS" | "NATURAL GAS" | "GAS" | "NG" => Ok(FuelKind::NaturalGas),
            "PROPANE" | "LPG" => Ok(FuelKind::Propane),
            _ => Err("unknown fuel kind"),
        }
    }
}

/// Fuel feed for one simulate call.
///
/// The feed rate is per "fuel unit": mass for solids and liquids, volume
/// for gases. Heat content is BTU per that same unit, so the product of
/// the two is always energy per hour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fuel {
    pub kind: FuelKind,
    /// Feed rate [fuel units/h]
    pub quantity_per_h: f64,
    /// Heating value [BTU per fuel unit]
    pub heat_content_btu: f64,
}
