//! Core traits for battery and load models.

use crate::error::ModelResult;
use cs_core::units::{Current, Energy, Ratio, Time, Voltage};

/// A battery that is discharged step by step under a drawn current.
///
/// Implementations accumulate discharge state internally, so a single
/// instance belongs to one simulation run at a time.
pub trait BatteryModel: Send {
    /// Model name for debugging and identification.
    fn name(&self) -> &str;

    /// Present terminal voltage.
    ///
    /// Before any discharge step this is the open-circuit voltage of the
    /// configured initial state.
    fn terminal_voltage(&self) -> Voltage;

    /// Voltage below which the battery counts as depleted.
    fn cutoff_voltage(&self) -> Voltage;

    /// Fraction of nominal capacity already delivered, in [0, 1].
    fn depth_of_discharge(&self) -> Ratio;

    /// Advance the battery by `dt` while `current_drawn` flows out of it.
    ///
    /// # Returns
    /// The terminal voltage at the end of the step and the energy delivered
    /// during the step.
    ///
    /// # Errors
    /// - `InvalidParameter` if `current_drawn < 0` or `dt <= 0`
    /// - `Depleted` if the battery cannot sustain the current any longer
    fn voltage_and_energy(
        &mut self,
        current_drawn: Current,
        dt: Time,
    ) -> ModelResult<(Voltage, Energy)>;

    /// Return to the configured initial state.
    fn reset(&mut self);
}

/// A load that draws current from the battery terminals.
///
/// Loads are deterministic functions of the applied voltage.
pub trait LoadModel: Send + Sync {
    /// Model name for debugging and identification.
    fn name(&self) -> &str;

    /// Current drawn at the given terminal voltage.
    ///
    /// # Errors
    /// `InvalidParameter` if `voltage` is negative or not finite.
    fn current_for(&self, voltage: Voltage) -> ModelResult<Current>;
}

impl<B: BatteryModel + ?Sized> BatteryModel for Box<B> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn terminal_voltage(&self) -> Voltage {
        (**self).terminal_voltage()
    }

    fn cutoff_voltage(&self) -> Voltage {
        (**self).cutoff_voltage()
    }

    fn depth_of_discharge(&self) -> Ratio {
        (**self).depth_of_discharge()
    }

    fn voltage_and_energy(
        &mut self,
        current_drawn: Current,
        dt: Time,
    ) -> ModelResult<(Voltage, Energy)> {
        (**self).voltage_and_energy(current_drawn, dt)
    }

    fn reset(&mut self) {
        (**self).reset()
    }
}

impl<L: LoadModel + ?Sized> LoadModel for Box<L> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn current_for(&self, voltage: Voltage) -> ModelResult<Current> {
        (**self).current_for(voltage)
    }
}
