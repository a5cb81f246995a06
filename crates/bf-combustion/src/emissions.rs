//! Pollutant emission profiles.

use crate::error::{CombustionError, CombustionResult};
use bf_core::numeric::ensure_finite;
use serde::{Deserialize, Serialize};

/// Pollutants reported in the stack discharge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pollutant {
    /// Carbon monoxide
    CO,
    /// Nitrogen oxides (reported as NO₂ equivalent)
    NOx,
}

impl Pollutant {
    pub const ALL: [Pollutant; 2] = [Pollutant::CO, Pollutant::NOx];

    pub fn key(&self) -> &'static str {
        match self {
            Pollutant::CO => "CO",
            Pollutant::NOx => "NOx",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Pollutant::CO => "Carbon Monoxide",
            Pollutant::NOx => "Nitrogen Oxides",
        }
    }
}

impl std::str::FromStr for Pollutant {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "CO" | "CARBON MONOXIDE" => Ok(Pollutant::CO),
            "NOX" | "NITROGEN OXIDES" => Ok(Pollutant::NOx),
            _ => Err("unknown pollutant"),
        }
    }
}

/// Pollutant discharge rates [lb/h].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmissionsProfile {
    pub(crate) items: Vec<(Pollutant, f64)>,
}

impl EmissionsProfile {
    /// Create a profile from pollutant rates.
    ///
    /// Rejects non-finite and negative rates.
    pub fn from_rates(items: Vec<(Pollutant, f64)>) -> CombustionResult<Self> {
        for (_, rate) in &items {
            ensure_finite(*rate, "emission rate").map_err(|_| CombustionError::NonPhysical {
                what: "non-finite emission rate",
            })?;
            if *rate < 0.0 {
                return Err(CombustionError::NonPhysical {
                    what: "negative emission rate",
                });
            }
        }
        Ok(Self { items })
    }

    /// Get the rate for a pollutant (0.0 if not reported).
    pub fn rate(&self, pollutant: Pollutant) -> f64 {
        self.items
            .iter()
            .find(|(p, _)| *p == pollutant)
            .map(|(_, rate)| *rate)
            .unwrap_or(0.0)
    }

    /// Iterate over all reported pollutants.
    pub fn iter(&self) -> impl Iterator<Item = (Pollutant, f64)> + '_ {
        self.items.iter().copied()
    }
}
