//! Build a runnable simulator from a validated scenario.

use crate::schema::{BatteryDef, LoadDef, OptionsDef, Scenario};
use crate::validate::validate_scenario;
use crate::ProjectResult;
use cs_core::units::{amp_hours, amps, ohms, volts};
use cs_models::{
    Alkaline, AlkalineParams, BatteryModel, ConstantCurrentLoad, ConstantPowerLoad,
    DischargeCurve, LoadModel, ResistorLoad,
};
use cs_sim::{SimOptions, SimOutcome, Simulator};

/// Simulator with models chosen at runtime by the scenario.
pub type DynSimulator = Simulator<Box<dyn BatteryModel>, Box<dyn LoadModel>>;

/// A scenario ready to run.
pub struct CompiledScenario {
    pub name: String,
    pub simulator: DynSimulator,
    pub options: SimOptions,
}

impl CompiledScenario {
    pub fn run(&mut self) -> ProjectResult<SimOutcome> {
        Ok(self.simulator.run_detailed(&self.options)?)
    }
}

pub fn compile_scenario(scenario: &Scenario) -> ProjectResult<CompiledScenario> {
    validate_scenario(scenario)?;
    let battery = compile_battery(&scenario.battery)?;
    let load = compile_load(&scenario.load)?;
    let options = compile_options(&scenario.options);
    tracing::debug!(
        scenario = %scenario.name,
        battery = battery.name(),
        load = load.name(),
        "compiled scenario"
    );
    Ok(CompiledScenario {
        name: scenario.name.clone(),
        simulator: Simulator::new(battery, load),
        options,
    })
}

/// Compile and run in one go.
pub fn run_scenario(scenario: &Scenario) -> ProjectResult<SimOutcome> {
    compile_scenario(scenario)?.run()
}

fn compile_battery(def: &BatteryDef) -> ProjectResult<Box<dyn BatteryModel>> {
    match def {
        BatteryDef::Alkaline {
            capacity_ah,
            reference_current_a,
            peukert_exponent,
            internal_resistance_ohm,
            resistance_growth_ohm,
            cutoff_v,
            initial_depth_of_discharge,
            curve,
        } => {
            let defaults = AlkalineParams::default();
            let curve = match curve {
                Some(points) => DischargeCurve::new(
                    points
                        .iter()
                        .map(|p| (p.depth_of_discharge, p.voltage_v))
                        .collect(),
                )?,
                None => defaults.curve.clone(),
            };
            let params = AlkalineParams {
                capacity: capacity_ah.map_or(defaults.capacity, amp_hours),
                reference_current: reference_current_a.map_or(defaults.reference_current, amps),
                peukert_exponent: peukert_exponent.unwrap_or(defaults.peukert_exponent),
                internal_resistance: internal_resistance_ohm
                    .map_or(defaults.internal_resistance, ohms),
                resistance_growth: resistance_growth_ohm.map_or(defaults.resistance_growth, ohms),
                cutoff_voltage: cutoff_v.map_or(defaults.cutoff_voltage, volts),
                initial_depth_of_discharge: initial_depth_of_discharge
                    .unwrap_or(defaults.initial_depth_of_discharge),
                curve,
            };
            let battery: Box<dyn BatteryModel> = Box::new(Alkaline::new(params)?);
            Ok(battery)
        }
    }
}

fn compile_load(def: &LoadDef) -> ProjectResult<Box<dyn LoadModel>> {
    let load: Box<dyn LoadModel> = match def {
        LoadDef::Resistor { ohms } => Box::new(ResistorLoad::new(*ohms)?),
        LoadDef::ConstantCurrent { amps } => Box::new(ConstantCurrentLoad::new(*amps)?),
        LoadDef::ConstantPower { watts } => Box::new(ConstantPowerLoad::new(*watts)?),
    };
    Ok(load)
}

fn compile_options(def: &OptionsDef) -> SimOptions {
    let defaults = SimOptions::default();
    SimOptions {
        dt: def.dt_s,
        max_time: def.max_time_s,
        max_steps: def.max_steps.unwrap_or(defaults.max_steps),
        record_every: def.record_every.unwrap_or(defaults.record_every),
        progress_every: defaults.progress_every,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::CurvePointDef;

    fn scenario(load: LoadDef) -> Scenario {
        Scenario {
            version: 1,
            name: "unit".to_string(),
            battery: BatteryDef::alkaline(),
            load,
            options: OptionsDef {
                dt_s: 10.0,
                max_time_s: Some(100.0),
                max_steps: None,
                record_every: None,
            },
        }
    }

    #[test]
    fn compiles_each_load_kind() {
        for (load, name) in [
            (LoadDef::Resistor { ohms: 10.0 }, "resistor"),
            (LoadDef::ConstantCurrent { amps: 0.1 }, "constant-current"),
            (LoadDef::ConstantPower { watts: 0.2 }, "constant-power"),
        ] {
            let compiled = compile_scenario(&scenario(load)).unwrap();
            assert_eq!(compiled.simulator.load().name(), name);
            assert_eq!(compiled.simulator.battery().name(), "alkaline");
        }
    }

    #[test]
    fn options_map_onto_sim_options() {
        let compiled = compile_scenario(&scenario(LoadDef::Resistor { ohms: 10.0 })).unwrap();
        assert_eq!(compiled.options.dt, 10.0);
        assert_eq!(compiled.options.max_time, Some(100.0));
        assert_eq!(compiled.options.record_every, 1);
    }

    #[test]
    fn custom_curve_is_checked_by_the_model() {
        let mut s = scenario(LoadDef::Resistor { ohms: 10.0 });
        s.battery = BatteryDef::Alkaline {
            capacity_ah: None,
            reference_current_a: None,
            peukert_exponent: None,
            internal_resistance_ohm: None,
            resistance_growth_ohm: None,
            cutoff_v: None,
            initial_depth_of_discharge: None,
            // Voltage rises with depth
            curve: Some(vec![
                CurvePointDef {
                    depth_of_discharge: 0.0,
                    voltage_v: 1.2,
                },
                CurvePointDef {
                    depth_of_discharge: 1.0,
                    voltage_v: 1.5,
                },
            ]),
        };
        assert!(matches!(
            compile_scenario(&s),
            Err(crate::ProjectError::Model(_))
        ));
    }
}
