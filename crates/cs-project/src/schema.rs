//! Scenario schema definitions.

use serde::{Deserialize, Serialize};

/// One battery, one load and the run options that couple them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Scenario {
    pub version: u32,
    pub name: String,
    pub battery: BatteryDef,
    pub load: LoadDef,
    #[serde(default)]
    pub options: OptionsDef,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum BatteryDef {
    /// Alkaline cell; unset fields take the AA defaults.
    Alkaline {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        capacity_ah: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        reference_current_a: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        peukert_exponent: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        internal_resistance_ohm: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        resistance_growth_ohm: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        cutoff_v: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        initial_depth_of_discharge: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        curve: Option<Vec<CurvePointDef>>,
    },
}

impl BatteryDef {
    /// Alkaline cell with every parameter at its default.
    pub fn alkaline() -> Self {
        BatteryDef::Alkaline {
            capacity_ah: None,
            reference_current_a: None,
            peukert_exponent: None,
            internal_resistance_ohm: None,
            resistance_growth_ohm: None,
            cutoff_v: None,
            initial_depth_of_discharge: None,
            curve: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CurvePointDef {
    pub depth_of_discharge: f64,
    pub voltage_v: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum LoadDef {
    Resistor { ohms: f64 },
    ConstantCurrent { amps: f64 },
    ConstantPower { watts: f64 },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OptionsDef {
    #[serde(default = "default_dt_s")]
    pub dt_s: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_time_s: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_steps: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record_every: Option<usize>,
}

fn default_dt_s() -> f64 {
    1.0
}

impl Default for OptionsDef {
    fn default() -> Self {
        Self {
            dt_s: default_dt_s(),
            max_time_s: None,
            max_steps: None,
            record_every: None,
        }
    }
}
