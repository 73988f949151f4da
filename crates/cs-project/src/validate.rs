//! Scenario validation logic.

use crate::schema::{BatteryDef, LoadDef, OptionsDef, Scenario};

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_scenario(scenario: &Scenario) -> Result<(), ValidationError> {
    if scenario.version == 0 || scenario.version > crate::LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: scenario.version,
        });
    }
    if scenario.name.trim().is_empty() {
        return Err(invalid("name", &scenario.name, "must not be empty"));
    }
    validate_battery(&scenario.battery)?;
    validate_load(&scenario.load)?;
    validate_options(&scenario.options)?;
    validate_termination(&scenario.load, &scenario.options)?;
    Ok(())
}

fn validate_battery(battery: &BatteryDef) -> Result<(), ValidationError> {
    match battery {
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
            positive_opt("battery.capacity_ah", *capacity_ah)?;
            positive_opt("battery.reference_current_a", *reference_current_a)?;
            positive_opt("battery.cutoff_v", *cutoff_v)?;
            non_negative_opt("battery.internal_resistance_ohm", *internal_resistance_ohm)?;
            non_negative_opt("battery.resistance_growth_ohm", *resistance_growth_ohm)?;
            if let Some(k) = peukert_exponent {
                if !k.is_finite() || *k < 1.0 {
                    return Err(invalid("battery.peukert_exponent", k, "must be at least 1"));
                }
            }
            if let Some(d) = initial_depth_of_discharge {
                if !(0.0..=1.0).contains(d) {
                    return Err(invalid(
                        "battery.initial_depth_of_discharge",
                        d,
                        "must be within [0, 1]",
                    ));
                }
            }
            if let Some(points) = curve {
                if points.len() < 2 {
                    return Err(invalid(
                        "battery.curve",
                        points.len(),
                        "needs at least two points",
                    ));
                }
            }
        }
    }
    Ok(())
}

fn validate_load(load: &LoadDef) -> Result<(), ValidationError> {
    match load {
        LoadDef::Resistor { ohms } => positive("load.ohms", *ohms),
        LoadDef::ConstantCurrent { amps } => non_negative("load.amps", *amps),
        LoadDef::ConstantPower { watts } => positive("load.watts", *watts),
    }
}

// A zero-current load never depletes the cell; the run needs an explicit bound.
fn validate_termination(load: &LoadDef, options: &OptionsDef) -> Result<(), ValidationError> {
    match load {
        LoadDef::ConstantCurrent { amps }
            if *amps == 0.0 && options.max_time_s.is_none() && options.max_steps.is_none() =>
        {
            Err(invalid(
                "load.amps",
                amps,
                "zero current needs options.max_time_s or options.max_steps",
            ))
        }
        _ => Ok(()),
    }
}

fn validate_options(options: &OptionsDef) -> Result<(), ValidationError> {
    positive("options.dt_s", options.dt_s)?;
    non_negative_opt("options.max_time_s", options.max_time_s)?;
    if options.max_steps == Some(0) {
        return Err(invalid("options.max_steps", 0, "must be positive"));
    }
    if options.record_every == Some(0) {
        return Err(invalid("options.record_every", 0, "must be positive"));
    }
    Ok(())
}

fn invalid(field: &str, value: impl ToString, reason: &str) -> ValidationError {
    ValidationError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

fn positive(field: &str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, value, "must be positive"))
    }
}

fn non_negative(field: &str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(invalid(field, value, "must be non-negative"))
    }
}

fn positive_opt(field: &str, value: Option<f64>) -> Result<(), ValidationError> {
    value.map_or(Ok(()), |v| positive(field, v))
}

fn non_negative_opt(field: &str, value: Option<f64>) -> Result<(), ValidationError> {
    value.map_or(Ok(()), |v| non_negative(field, v))
}
