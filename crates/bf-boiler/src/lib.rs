//! bf-boiler: steady-state boiler calculation pipeline.
//!
//! Four stages run in a straight line (furnace, heat transfer, steam
//! generation, flue finalization), then the results are aggregated into
//! one `BoilerOutput`. Every stage is a total, deterministic function of
//! its inputs; nothing is cached or mutated between calls.
//!
//! # Example
//!
//! ```
//! use bf_boiler::{Air, BoilerInputs, BoilerParams, BoilerSimulator};
//! use bf_boiler::{ControlSettings, Fuel, FuelKind, Water};
//!
//! let inputs = BoilerInputs {
//!     fuel: Fuel {
//!         kind: FuelKind::Wood,
//!         quantity_per_h: 1000.0,
//!         heat_content_btu: 8000.0,
//!     },
//!     water: Water {
//!         flow_lb_per_h: 34500.0,
//!         temperature_c: 20.0,
//!     },
//!     air: Air {
//!         flow_cf_per_h: 12000.0,
//!         temperature_c: 20.0,
//!     },
//!     electricity_kw: 50.0,
//!     controls: ControlSettings {
//!         pressure_psig: 200.0,
//!         temperature_f: 382.0,
//!     },
//! };
//!
//! let sim = BoilerSimulator::reference(BoilerParams::default());
//! let out = sim.simulate(&inputs);
//! assert!(out.steam.flow_rate_pph > 5000.0);
//! ```

pub mod flue;
pub mod furnace;
pub mod heat_transfer;
pub mod inputs;
pub mod output;
pub mod params;
pub mod simulator;
pub mod steam;

// Re-exports
pub use bf_combustion::{Air, CombustionModel, Fuel, FuelKind, ReferenceCombustion};
pub use inputs::{BoilerInputs, ControlSettings, Water};
pub use output::{BoilerOutput, FlueGases, Steam};
pub use params::{BoilerParams, FurnaceDesign, Range, Refractory, TubeConfig};
pub use simulator::BoilerSimulator;
