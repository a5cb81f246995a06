//! Combustion stage: fuel heat release and the furnace-side flue snapshot.

use bf_combustion::{Air, CombustionModel, FlueComposition, Fuel};

/// Flue-gas state on the furnace side.
#[derive(Debug, Clone, PartialEq)]
pub struct FlueGasState {
    /// Gas volume [ft³/h]
    pub volume_cf_per_h: f64,
    /// Gas temperature [°C]
    pub temperature_c: f64,
    pub composition: FlueComposition,
}

/// What the furnace hands to the convective pass.
#[derive(Debug, Clone, PartialEq)]
pub struct CombustionProducts {
    /// Heat released by the fired fuel [BTU/h]
    pub energy_btu_per_h: f64,
    pub flue: FlueGasState,
}

/// Fire the furnace: release the fuel's heat and form the flue-gas stream.
pub fn fire(fuel: &Fuel, air: &Air, model: &dyn CombustionModel) -> CombustionProducts {
    let energy_btu_per_h = fuel.quantity_per_h * fuel.heat_content_btu;
    CombustionProducts {
        energy_btu_per_h,
        flue: FlueGasState {
            volume_cf_per_h: model.flue_volume_cf_per_h(air),
            temperature_c: model.furnace_exit_temp_c(),
            composition: model.flue_composition(fuel, air),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bf_combustion::{FlueSpecies, FuelKind, ReferenceCombustion};

    fn wood(quantity_per_h: f64) -> Fuel {
        Fuel {
            kind: FuelKind::Wood,
            quantity_per_h,
            heat_content_btu: 8000.0,
        }
    }

    fn air() -> Air {
        Air {
            flow_cf_per_h: 12000.0,
            temperature_c: 20.0,
        }
    }

    #[test]
    fn heat_release_is_quantity_times_heating_value() {
        let products = fire(&wood(1000.0), &air(), &ReferenceCombustion);
        assert_eq!(products.energy_btu_per_h, 8_000_000.0);
    }

    #[test]
    fn zero_fuel_releases_nothing() {
        let products = fire(&wood(0.0), &air(), &ReferenceCombustion);
        assert_eq!(products.energy_btu_per_h, 0.0);
    }

    #[test]
    fn furnace_side_flue_snapshot() {
        let products = fire(&wood(1000.0), &air(), &ReferenceCombustion);
        assert_eq!(products.flue.volume_cf_per_h, 10_800.0);
        assert_eq!(products.flue.temperature_c, 1100.0);
        assert_eq!(products.flue.composition.percent(FlueSpecies::N2), 70.0);
    }
}
