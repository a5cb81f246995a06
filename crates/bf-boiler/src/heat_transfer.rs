//! Convective pass: furnace heat absorbed into the water side.

use crate::furnace::CombustionProducts;
use bf_combustion::CombustionModel;

/// Fraction of released heat absorbed by the water side.
///
/// Fixed fit: tube count, geometry, and the film coefficient carried in
/// `BoilerParams` do not enter it yet.
pub const TRANSFER_FRACTION: f64 = 0.9;

/// Heat duty handed to steam generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatAbsorption {
    /// Heat absorbed into the water side [BTU/h]
    pub heat_to_water_btu_per_h: f64,
    /// Gas temperature after the convective pass [°C]
    pub flue_exit_temp_c: f64,
}

/// Run the convective pass over the furnace products.
pub fn absorb(products: &CombustionProducts, model: &dyn CombustionModel) -> HeatAbsorption {
    HeatAbsorption {
        heat_to_water_btu_per_h: products.energy_btu_per_h * TRANSFER_FRACTION,
        flue_exit_temp_c: model.stack_exit_temp_c(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::furnace;
    use bf_combustion::{Air, Fuel, FuelKind, ReferenceCombustion};

    fn products(energy_source_quantity: f64) -> CombustionProducts {
        let fuel = Fuel {
            kind: FuelKind::Coal,
            quantity_per_h: energy_source_quantity,
            heat_content_btu: 10_000.0,
        };
        let air = Air {
            flow_cf_per_h: 9000.0,
            temperature_c: 25.0,
        };
        furnace::fire(&fuel, &air, &ReferenceCombustion)
    }

    #[test]
    fn fixed_transfer_fraction() {
        let absorbed = absorb(&products(500.0), &ReferenceCombustion);
        assert_eq!(absorbed.heat_to_water_btu_per_h, 4_500_000.0);
    }

    #[test]
    fn gas_cools_to_stack_temperature() {
        let absorbed = absorb(&products(500.0), &ReferenceCombustion);
        assert_eq!(absorbed.flue_exit_temp_c, 180.0);
    }

    #[test]
    fn zero_energy_transfers_nothing() {
        let absorbed = absorb(&products(0.0), &ReferenceCombustion);
        assert_eq!(absorbed.heat_to_water_btu_per_h, 0.0);
    }
}
