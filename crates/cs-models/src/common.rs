//! Common argument checks shared by battery and load models.

use crate::error::{ModelError, ModelResult};
use cs_core::numeric::{ensure_non_negative, ensure_positive};
use cs_core::units::{Current, Time, Voltage, si};

/// Drawn current must be finite and non-negative (discharge only).
pub fn check_current(current: Current) -> ModelResult<f64> {
    ensure_non_negative(si::amps_of(current), "current must be finite and non-negative")
        .map_err(ModelError::from)
}

/// Time step must be finite and strictly positive.
pub fn check_dt(dt: Time) -> ModelResult<f64> {
    ensure_positive(si::seconds_of(dt), "dt must be positive").map_err(ModelError::from)
}

/// Terminal voltage presented to a load must be finite and non-negative.
pub fn check_voltage(voltage: Voltage) -> ModelResult<f64> {
    ensure_non_negative(si::volts_of(voltage), "voltage must be finite and non-negative")
        .map_err(ModelError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cs_core::units::{amps, s, volts};

    #[test]
    fn current_checks() {
        assert_eq!(check_current(amps(0.0)), Ok(0.0));
        assert!(check_current(amps(-0.1)).is_err());
        assert!(check_current(amps(f64::NAN)).is_err());
    }

    #[test]
    fn dt_checks() {
        assert_eq!(check_dt(s(0.5)), Ok(0.5));
        assert!(check_dt(s(0.0)).is_err());
        assert!(check_dt(s(-1.0)).is_err());
    }

    #[test]
    fn voltage_checks() {
        assert!(check_voltage(volts(0.0)).is_ok());
        assert!(check_voltage(volts(-0.01)).is_err());
    }
}
