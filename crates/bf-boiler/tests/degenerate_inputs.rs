//! The pipeline is total over IEEE-754 doubles: degenerate operating
//! points flow through as inf/NaN/negative values, never as panics.

use bf_boiler::{
    Air, BoilerInputs, BoilerParams, BoilerSimulator, ControlSettings, Fuel, FuelKind, Water,
};

fn inputs_with_water_temp(temperature_c: f64) -> BoilerInputs {
    BoilerInputs {
        fuel: Fuel {
            kind: FuelKind::FuelOil,
            quantity_per_h: 1000.0,
            heat_content_btu: 8000.0,
        },
        water: Water {
            flow_lb_per_h: 34_500.0,
            temperature_c,
        },
        air: Air {
            flow_cf_per_h: 12_000.0,
            temperature_c: 20.0,
        },
        electricity_kw: 50.0,
        controls: ControlSettings {
            pressure_psig: 200.0,
            temperature_f: 382.0,
        },
    }
}

// Total heat per pound is 1150 + 1.2 * p - 1.8 * t_water_c; at 200 psig it
// crosses zero near 772.2 °C feedwater.
const ZERO_CROSSING_WATER_C: f64 = (1150.0 + 1.2 * 200.0) / 1.8;

#[test]
fn denominator_at_zero_gives_unbounded_flow() {
    let sim = BoilerSimulator::reference(BoilerParams::default());
    let out = sim.simulate(&inputs_with_water_temp(ZERO_CROSSING_WATER_C));

    let flow = out.steam.flow_rate_pph;
    assert!(
        flow.is_infinite() || flow.abs() > 1e15,
        "expected unbounded flow, got {flow}"
    );
}

#[test]
fn denominator_below_zero_gives_negative_flow() {
    let sim = BoilerSimulator::reference(BoilerParams::default());
    let out = sim.simulate(&inputs_with_water_temp(900.0));

    assert!(out.steam.flow_rate_pph < 0.0);
    // Everything else is unaffected by the steam-side degeneracy
    assert_eq!(out.waste_heat_btu_per_h, 8_000_000.0 * (1.0 - 0.9));
}

#[test]
fn zero_heat_at_degenerate_point_does_not_panic() {
    let sim = BoilerSimulator::reference(BoilerParams::default());
    let mut inputs = inputs_with_water_temp(ZERO_CROSSING_WATER_C);
    inputs.fuel.quantity_per_h = 0.0;
    let out = sim.simulate(&inputs);

    let flow = out.steam.flow_rate_pph;
    assert!(flow == 0.0 || flow.is_nan(), "expected 0-over-~0 result, got {flow}");
}

#[test]
fn non_finite_inputs_propagate_instead_of_panicking() {
    let sim = BoilerSimulator::reference(BoilerParams::default());
    let mut inputs = inputs_with_water_temp(20.0);
    inputs.fuel.quantity_per_h = f64::NAN;
    let out = sim.simulate(&inputs);

    assert!(out.steam.flow_rate_pph.is_nan());
    assert!(out.waste_heat_btu_per_h.is_nan());
}
