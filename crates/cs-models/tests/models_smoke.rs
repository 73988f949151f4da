//! Integration tests: alkaline cell driven by the load models by hand.

use cs_core::units::{s, si};
use cs_models::{
    Alkaline, AlkalineParams, BatteryModel, ConstantCurrentLoad, ConstantPowerLoad, LoadModel,
    ModelError, ResistorLoad,
};

/// Drive a cell until it reports depletion, returning the voltages seen.
fn discharge(battery: &mut dyn BatteryModel, load: &dyn LoadModel, dt: f64) -> Vec<f64> {
    let mut voltages = vec![si::volts_of(battery.terminal_voltage())];
    loop {
        let current = load.current_for(battery.terminal_voltage()).unwrap();
        match battery.voltage_and_energy(current, s(dt)) {
            Ok((u, _)) => voltages.push(si::volts_of(u)),
            Err(ModelError::Depleted { .. }) => break,
            Err(e) => panic!("unexpected model error: {e}"),
        }
        assert!(voltages.len() < 1_000_000, "discharge did not terminate");
    }
    voltages
}

#[test]
fn resistor_discharge_ends_below_cutoff() {
    let mut cell = Alkaline::default();
    let load = ResistorLoad::new(10.0).unwrap();

    let voltages = discharge(&mut cell, &load, 10.0);

    let cutoff = si::volts_of(cell.cutoff_voltage());
    assert!(*voltages.last().unwrap() < cutoff);
    assert!(voltages.windows(2).all(|w| w[1] <= w[0]));
    assert!(cell.depth_of_discharge().value < 1.0);
}

#[test]
fn heavier_load_depletes_sooner() {
    let mut light = Alkaline::default();
    let mut heavy = Alkaline::default();

    let n_light = discharge(&mut light, &ResistorLoad::new(20.0).unwrap(), 10.0).len();
    let n_heavy = discharge(&mut heavy, &ResistorLoad::new(5.0).unwrap(), 10.0).len();

    assert!(n_heavy < n_light);
}

#[test]
fn constant_loads_discharge_to_depletion() {
    let mut cell = Alkaline::default();
    let v = discharge(&mut cell, &ConstantCurrentLoad::new(0.5).unwrap(), 10.0);
    assert!(v.len() > 1);

    let mut cell = Alkaline::default();
    let v = discharge(&mut cell, &ConstantPowerLoad::new(0.2).unwrap(), 10.0);
    assert!(v.len() > 1);
}

#[test]
fn boxed_models_dispatch() {
    let mut battery: Box<dyn BatteryModel> = Box::new(
        Alkaline::new(AlkalineParams::default())
            .unwrap()
            .with_name("aa-cell"),
    );
    let load: Box<dyn LoadModel> = Box::new(ResistorLoad::new(10.0).unwrap());

    assert_eq!(battery.name(), "aa-cell");
    assert_eq!(load.name(), "resistor");

    let i = load.current_for(battery.terminal_voltage()).unwrap();
    assert!((si::amps_of(i) - 0.16).abs() < 1e-12);
    battery.voltage_and_energy(i, s(1.0)).unwrap();
    assert!(battery.depth_of_discharge().value > 0.0);
}
