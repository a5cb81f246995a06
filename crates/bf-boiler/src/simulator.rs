//! The steady-state pipeline.

use crate::flue;
use crate::furnace;
use crate::heat_transfer;
use crate::inputs::BoilerInputs;
use crate::output::BoilerOutput;
use crate::params::BoilerParams;
use crate::steam;
use bf_combustion::{CombustionModel, ReferenceCombustion};

static REFERENCE_MODEL: ReferenceCombustion = ReferenceCombustion;

/// Steady-state boiler simulator.
///
/// Holds a combustion sub-model and an immutable parameter set. Each
/// `simulate` call is an independent pure evaluation: identical inputs give
/// bit-identical outputs, and concurrent calls need no coordination.
pub struct BoilerSimulator<'m> {
    model: &'m dyn CombustionModel,
    params: BoilerParams,
}

impl<'m> BoilerSimulator<'m> {
    pub fn new(model: &'m dyn CombustionModel, params: BoilerParams) -> Self {
        Self { model, params }
    }

    pub fn params(&self) -> &BoilerParams {
        &self.params
    }

    pub fn model_name(&self) -> &str {
        self.model.name()
    }

    /// Run the four-stage pipeline once.
    pub fn simulate(&self, inputs: &BoilerInputs) -> BoilerOutput {
        tracing::debug!(
            model = self.model.name(),
            fuel = inputs.fuel.kind.key(),
            quantity_per_h = inputs.fuel.quantity_per_h,
            pressure_psig = inputs.controls.pressure_psig,
            "simulate"
        );

        let products = furnace::fire(&inputs.fuel, &inputs.air, self.model);
        let absorbed = heat_transfer::absorb(&products, self.model);
        let steam = steam::generate(&absorbed, &inputs.water, &inputs.controls, &self.params);
        let (flue_gases, emissions) = flue::exhaust(&products, &inputs.fuel, self.model);

        let waste_heat_btu_per_h = products.energy_btu_per_h * (1.0 - self.params.efficiency);

        BoilerOutput {
            steam,
            flue_gases,
            waste_heat_btu_per_h,
            emissions,
        }
    }
}

impl BoilerSimulator<'static> {
    /// Simulator over the reference sub-model.
    pub fn reference(params: BoilerParams) -> Self {
        Self {
            model: &REFERENCE_MODEL,
            params,
        }
    }
}
