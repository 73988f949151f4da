use std::path::PathBuf;

use cs_models::{Alkaline, ResistorLoad};
use cs_sim::{SimOptions, Simulator, StopReason};

fn workspace_root() -> PathBuf {
    let crate_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    crate_dir
        .parent()
        .and_then(|p| p.parent())
        .expect("workspace root")
        .to_path_buf()
}

#[test]
fn bundled_scenarios_validate() {
    let scenarios = [
        "scenarios/01_resistor_continuous.yaml",
        "scenarios/02_constant_current.yaml",
        "scenarios/03_half_discharged_power.yaml",
    ];

    for rel in scenarios {
        let path = workspace_root().join(rel);
        let result = cs_project::load_yaml(&path);
        assert!(
            result.is_ok(),
            "scenario failed validation: {} => {:?}",
            path.display(),
            result.err()
        );
    }
}

#[test]
fn resistor_scenario_matches_direct_construction() {
    let path = workspace_root().join("scenarios/01_resistor_continuous.yaml");
    let scenario = cs_project::load_yaml(&path).unwrap();
    let from_file = cs_project::run_scenario(&scenario).unwrap();

    let mut direct = Simulator::new(Alkaline::default(), ResistorLoad::new(10.0).unwrap());
    let expected = direct.run_with(&SimOptions::default()).unwrap();

    assert_eq!(from_file.stop_reason, StopReason::Depleted);
    assert_eq!(from_file.series, expected);
}

#[test]
fn half_discharged_cell_runs_to_depletion() {
    let path = workspace_root().join("scenarios/03_half_discharged_power.yaml");
    let scenario = cs_project::load_yaml(&path).unwrap();
    let mut compiled = cs_project::compile_scenario(&scenario).unwrap();
    let outcome = compiled.run().unwrap();

    assert_eq!(compiled.name, "half-discharged-constant-power");
    assert_eq!(outcome.stop_reason, StopReason::Depleted);
    let first = outcome.series.first().unwrap();
    // Starts at the open-circuit voltage of a half-used cell
    assert!(first.voltage_v < 1.3 && first.voltage_v > 1.2);
    assert!(outcome.series.last().unwrap().t_s < 86_400.0);
}
