//! Flue-gas species definitions.

use serde::{Deserialize, Serialize};

/// Gas species reported in the flue composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlueSpecies {
    /// Carbon dioxide (CO₂)
    CO2,
    /// Water vapor (H₂O)
    H2O,
    /// Oxygen (O₂)
    O2,
    /// Nitrogen (N₂)
    N2,
}

impl FlueSpecies {
    pub const ALL: [FlueSpecies; 4] = [
        FlueSpecies::CO2,
        FlueSpecies::H2O,
        FlueSpecies::O2,
        FlueSpecies::N2,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            FlueSpecies::CO2 => "CO2",
            FlueSpecies::H2O => "H2O",
            FlueSpecies::O2 => "O2",
            FlueSpecies::N2 => "N2",
        }
    }

    /// Get human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            FlueSpecies::CO2 => "Carbon Dioxide",
            FlueSpecies::H2O => "Water Vapor",
            FlueSpecies::O2 => "Oxygen",
            FlueSpecies::N2 => "Nitrogen",
        }
    }
}

impl std::str::FromStr for FlueSpecies {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "CO2" | "CARBON DIOXIDE" => Ok(FlueSpecies::CO2),
            "H2O" | "WATER" | "WATER VAPOR" => Ok(FlueSpecies::H2O),
            "O2" | "OXYGEN" => Ok(FlueSpecies::O2),
            "N2" | "NITROGEN" => Ok(FlueSpecies::N2),
            _ => Err("unknown flue species"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_key_roundtrip() {
        for species in FlueSpecies::ALL {
            let parsed = species.key().parse::<FlueSpecies>().expect("canonical key should parse");
            assert_eq!(parsed, species);
        }
    }

    #[test]
    fn parse_aliases() {
        assert_eq!("oxygen".parse::<FlueSpecies>().unwrap(), FlueSpecies::O2);
        assert_eq!("Water Vapor".parse::<FlueSpecies>().unwrap(), FlueSpecies::H2O);
        assert!("argon".parse::<FlueSpecies>().is_err());
    }
}
