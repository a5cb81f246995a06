//! Combustion sub-model trait and the reference implementation.

use crate::air::Air;
use crate::composition::FlueComposition;
use crate::emissions::{EmissionsProfile, Pollutant};
use crate::fuel::{Fuel, FuelKind};
use crate::species::FlueSpecies;

/// Trait for combustion-side sub-models.
///
/// Implementations must be thread-safe (Send + Sync) so simulations can run
/// concurrently. The pipeline consumes exactly these five quantities; a
/// correlation-based model can vary them per fuel and furnace type without
/// touching the pipeline shape.
pub trait CombustionModel: Send + Sync {
    /// Get the model name (for debugging/logging).
    fn name(&self) -> &str;

    /// Flue-gas composition leaving the furnace [percent by volume].
    fn flue_composition(&self, fuel: &Fuel, air: &Air) -> FlueComposition;

    /// Pollutant discharge rates for the fired fuel [lb/h].
    fn emissions(&self, fuel: FuelKind) -> EmissionsProfile;

    /// Flue-gas volume produced from the supplied combustion air [ft³/h].
    fn flue_volume_cf_per_h(&self, air: &Air) -> f64;

    /// Gas temperature at the furnace exit [°C].
    fn furnace_exit_temp_c(&self) -> f64;

    /// Gas temperature at the stack, after the convective pass [°C].
    fn stack_exit_temp_c(&self) -> f64;
}

/// Reference sub-model: fixed placeholder figures, not fitted physics.
///
/// Composition and emissions do not vary with fuel or air. This is the
/// compatibility baseline the golden tests pin; real correlations belong in
/// a separate `CombustionModel` implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReferenceCombustion;

impl ReferenceCombustion {
    /// Gas temperature leaving the furnace [°C].
    pub const FURNACE_EXIT_TEMP_C: f64 = 1100.0;

    /// Gas temperature at the stack [°C].
    pub const STACK_EXIT_TEMP_C: f64 = 180.0;

    /// Fraction of the supplied air volume leaving as flue gas.
    pub const FLUE_VOLUME_FRACTION: f64 = 0.9;
}

impl CombustionModel for ReferenceCombustion {
    fn name(&self) -> &str {
        "reference"
    }

    fn flue_composition(&self, _fuel: &Fuel, _air: &Air) -> FlueComposition {
        FlueComposition {
            items: vec![
                (FlueSpecies::CO2, 10.0),
                (FlueSpecies::H2O, 15.0),
                (FlueSpecies::O2, 5.0),
                (FlueSpecies::N2, 70.0),
            ],
        }
    }

    fn emissions(&self, _fuel: FuelKind) -> EmissionsProfile {
        EmissionsProfile {
            items: vec![(Pollutant::CO, 100.0), (Pollutant::NOx, 50.0)],
        }
    }

    fn flue_volume_cf_per_h(&self, air: &Air) -> f64 {
        air.flow_cf_per_h * Self::FLUE_VOLUME_FRACTION
    }

    fn furnace_exit_temp_c(&self) -> f64 {
        Self::FURNACE_EXIT_TEMP_C
    }

    fn stack_exit_temp_c(&self) -> f64 {
        Self::STACK_EXIT_TEMP_C
    }
}
