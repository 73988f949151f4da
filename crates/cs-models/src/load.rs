//! Load models drawing current from the battery terminals.

use crate::common::check_voltage;
use crate::error::{ModelError, ModelResult};
use crate::traits::LoadModel;
use cs_core::numeric::{ensure_non_negative, ensure_positive};
use cs_core::units::{Current, Power, Resistance, Voltage, amps, ohms, si, watts};

/// Ohmic load: `I = U / R`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResistorLoad {
    /// Resistance, strictly positive
    resistance: Resistance,
}

impl ResistorLoad {
    /// Create a resistor of `ohms` Ω.
    ///
    /// # Errors
    /// `InvalidParameter` if the resistance is not finite and positive.
    pub fn new(ohms_value: f64) -> ModelResult<Self> {
        let r = ensure_positive(ohms_value, "resistance must be positive")?;
        Ok(Self {
            resistance: ohms(r),
        })
    }

    pub fn from_resistance(resistance: Resistance) -> ModelResult<Self> {
        Self::new(si::ohms_of(resistance))
    }

    pub fn resistance(&self) -> Resistance {
        self.resistance
    }
}

impl LoadModel for ResistorLoad {
    fn name(&self) -> &str {
        "resistor"
    }

    fn current_for(&self, voltage: Voltage) -> ModelResult<Current> {
        let u = check_voltage(voltage)?;
        Ok(amps(u / si::ohms_of(self.resistance)))
    }
}

/// Load that draws a fixed current regardless of voltage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantCurrentLoad {
    current: Current,
}

impl ConstantCurrentLoad {
    /// # Errors
    /// `InvalidParameter` if the current is negative or not finite.
    pub fn new(amperes: f64) -> ModelResult<Self> {
        let i = ensure_non_negative(amperes, "load current must be non-negative")?;
        Ok(Self { current: amps(i) })
    }

    pub fn current(&self) -> Current {
        self.current
    }
}

impl LoadModel for ConstantCurrentLoad {
    fn name(&self) -> &str {
        "constant-current"
    }

    fn current_for(&self, voltage: Voltage) -> ModelResult<Current> {
        check_voltage(voltage)?;
        Ok(self.current)
    }
}

/// Load that draws a fixed power: `I = P / U`.
///
/// At zero terminal voltage the power cannot be delivered and the load
/// reports `NonPhysical`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantPowerLoad {
    power: Power,
}

impl ConstantPowerLoad {
    /// # Errors
    /// `InvalidParameter` if the power is not finite and positive.
    pub fn new(watts_value: f64) -> ModelResult<Self> {
        let p = ensure_positive(watts_value, "load power must be positive")?;
        Ok(Self { power: watts(p) })
    }

    pub fn power(&self) -> Power {
        self.power
    }
}

impl LoadModel for ConstantPowerLoad {
    fn name(&self) -> &str {
        "constant-power"
    }

    fn current_for(&self, voltage: Voltage) -> ModelResult<Current> {
        let u = check_voltage(voltage)?;
        if u == 0.0 {
            return Err(ModelError::NonPhysical {
                what: "constant power load at zero voltage",
            });
        }
        Ok(amps(si::watts_of(self.power) / u))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cs_core::units::volts;

    #[test]
    fn resistor_follows_ohms_law() {
        let load = ResistorLoad::new(10.0).unwrap();
        let i = load.current_for(volts(1.5)).unwrap();
        assert_eq!(si::amps_of(i), 1.5 / 10.0);
        assert_eq!(si::ohms_of(load.resistance()), 10.0);
    }

    #[test]
    fn resistor_rejects_non_positive() {
        for r in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                ResistorLoad::new(r),
                Err(ModelError::InvalidParameter { .. })
            ));
        }
        assert!(ResistorLoad::from_resistance(ohms(-5.0)).is_err());
    }

    #[test]
    fn resistor_rejects_negative_voltage() {
        let load = ResistorLoad::new(10.0).unwrap();
        assert!(matches!(
            load.current_for(volts(-0.1)),
            Err(ModelError::InvalidParameter { .. })
        ));
        assert_eq!(si::amps_of(load.current_for(volts(0.0)).unwrap()), 0.0);
    }

    #[test]
    fn constant_current_ignores_voltage() {
        let load = ConstantCurrentLoad::new(0.1).unwrap();
        assert_eq!(si::amps_of(load.current_for(volts(1.5)).unwrap()), 0.1);
        assert_eq!(si::amps_of(load.current_for(volts(0.9)).unwrap()), 0.1);
        assert!(ConstantCurrentLoad::new(-0.1).is_err());
    }

    #[test]
    fn constant_power_draws_more_as_voltage_falls() {
        let load = ConstantPowerLoad::new(0.3).unwrap();
        let hi = si::amps_of(load.current_for(volts(1.5)).unwrap());
        let lo = si::amps_of(load.current_for(volts(1.0)).unwrap());
        assert!((hi - 0.2).abs() < 1e-12);
        assert!((lo - 0.3).abs() < 1e-12);
        assert!(matches!(
            load.current_for(volts(0.0)),
            Err(ModelError::NonPhysical { .. })
        ));
        assert!(ConstantPowerLoad::new(0.0).is_err());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use cs_core::units::volts;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn resistor_current_is_exactly_u_over_r(r in 1e-3_f64..1e6, u in 0.0_f64..2.0) {
            let load = ResistorLoad::new(r).unwrap();
            let i = load.current_for(volts(u)).unwrap();
            prop_assert_eq!(si::amps_of(i), u / r);
        }
    }
}
