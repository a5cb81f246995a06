//! The shipped demo scenarios must load, validate, and simulate.

use bf_boiler::BoilerSimulator;
use bf_core::numeric::{Tolerances, nearly_equal};
use std::path::PathBuf;

fn scenarios_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../scenarios")
}

#[test]
fn all_demo_scenarios_load_and_validate() {
    let dir = scenarios_dir();
    let mut seen = 0;
    for entry in std::fs::read_dir(&dir).unwrap() {
        let path = entry.unwrap().path();
        if path.extension().is_some_and(|ext| ext == "yaml") {
            let scenario = bf_scenario::load_yaml(&path)
                .unwrap_or_else(|e| panic!("{} failed to load: {e}", path.display()));
            assert!(!scenario.name.is_empty());
            seen += 1;
        }
    }
    assert!(seen >= 2, "expected at least two demo scenarios, saw {seen}");
}

#[test]
fn reference_wood_scenario_reproduces_golden_figures() {
    let scenario = bf_scenario::load_yaml(&scenarios_dir().join("reference_wood.yaml")).unwrap();
    let sim = BoilerSimulator::reference(scenario.params.clone());
    let out = sim.simulate(&scenario.inputs());

    let tol = Tolerances::default();
    assert!(nearly_equal(out.waste_heat_btu_per_h, 800_000.0, tol));
    assert!(nearly_equal(out.steam.flow_rate_pph, 7_200_000.0 / 1354.0, tol));
    assert_eq!(out.flue_gases.volume_cf_per_h, 10_800.0);
}

#[test]
fn natural_gas_scenario_uses_its_derated_efficiency() {
    let scenario =
        bf_scenario::load_yaml(&scenarios_dir().join("natural_gas_highfire.yaml")).unwrap();
    assert_eq!(scenario.params.efficiency, 0.82);

    let sim = BoilerSimulator::reference(scenario.params.clone());
    let out = sim.simulate(&scenario.inputs());

    let energy = scenario.fuel.quantity_per_h * scenario.fuel.heat_content_btu;
    assert_eq!(out.waste_heat_btu_per_h, energy * (1.0 - 0.82));
}
