//! Stack-side finalization: the flue-gas record and emissions.

use crate::furnace::CombustionProducts;
use crate::output::FlueGases;
use bf_combustion::{CombustionModel, EmissionsProfile, Fuel};

/// Assemble the stack discharge from the furnace-side snapshot.
///
/// Volume and composition carry over from the furnace stage; the stack
/// temperature is queried from the sub-model again rather than threaded
/// through the convective pass, so both stages report the same figure by
/// convention.
pub fn exhaust(
    products: &CombustionProducts,
    fuel: &Fuel,
    model: &dyn CombustionModel,
) -> (FlueGases, EmissionsProfile) {
    let gases = FlueGases {
        volume_cf_per_h: products.flue.volume_cf_per_h,
        temperature_c: model.stack_exit_temp_c(),
        composition: products.flue.composition.clone(),
    };
    let emissions = model.emissions(fuel.kind);
    (gases, emissions)
}
