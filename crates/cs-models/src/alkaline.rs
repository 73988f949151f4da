//! Alkaline (Zn/MnO2) primary cell.

use crate::common::{check_current, check_dt};
use crate::curve::DischargeCurve;
use crate::error::{ModelError, ModelResult};
use crate::traits::BatteryModel;
use cs_core::numeric::{ensure_finite, ensure_positive};
use cs_core::units::{
    Charge, Current, Energy, Ratio, Resistance, Time, Voltage, amp_hours, amps, joules, ohms,
    si, unitless, volts,
};

/// Chemistry and capacity configuration of an alkaline cell.
#[derive(Debug, Clone)]
pub struct AlkalineParams {
    /// Nominal capacity delivered at `reference_current`
    pub capacity: Charge,
    /// Discharge current at which `capacity` is rated
    pub reference_current: Current,
    /// Peukert exponent (1.0 disables rate dependence)
    pub peukert_exponent: f64,
    /// Internal resistance of a full cell
    pub internal_resistance: Resistance,
    /// Resistance added at full depth of discharge (grows quadratically)
    pub resistance_growth: Resistance,
    /// Depletion threshold for the terminal voltage
    pub cutoff_voltage: Voltage,
    /// Depth of discharge the cell starts (and resets) at, in [0, 1]
    pub initial_depth_of_discharge: f64,
    /// Open-circuit voltage profile
    pub curve: DischargeCurve,
}

impl Default for AlkalineParams {
    /// AA-size cell: 2.6 Ah at 25 mA, 0.9 V end point.
    fn default() -> Self {
        Self {
            capacity: amp_hours(2.6),
            reference_current: amps(0.025),
            peukert_exponent: 1.15,
            internal_resistance: ohms(0.15),
            resistance_growth: ohms(0.45),
            cutoff_voltage: volts(0.9),
            initial_depth_of_discharge: 0.0,
            curve: DischargeCurve::alkaline(),
        }
    }
}

impl AlkalineParams {
    fn validate(&self) -> ModelResult<()> {
        ensure_positive(si::coulombs_of(self.capacity), "capacity must be positive")?;
        ensure_positive(
            si::amps_of(self.reference_current),
            "reference current must be positive",
        )?;
        let k = ensure_finite(self.peukert_exponent, "peukert exponent must be finite")?;
        if k < 1.0 {
            return Err(ModelError::InvalidParameter {
                what: "peukert exponent must be at least 1",
            });
        }
        let r0 = ensure_finite(
            si::ohms_of(self.internal_resistance),
            "internal resistance must be finite",
        )?;
        let dr = ensure_finite(
            si::ohms_of(self.resistance_growth),
            "resistance growth must be finite",
        )?;
        if r0 < 0.0 || dr < 0.0 {
            return Err(ModelError::InvalidParameter {
                what: "internal resistance cannot be negative",
            });
        }
        ensure_positive(si::volts_of(self.cutoff_voltage), "cutoff voltage must be positive")?;
        let d0 = ensure_finite(
            self.initial_depth_of_discharge,
            "initial depth of discharge must be finite",
        )?;
        if !(0.0..=1.0).contains(&d0) {
            return Err(ModelError::InvalidParameter {
                what: "initial depth of discharge must be within [0, 1]",
            });
        }
        Ok(())
    }
}

/// Alkaline cell with a lookup-table open-circuit voltage, an internal
/// resistance that rises towards empty, and Peukert rate dependence.
///
/// Under load the terminal voltage is
///
/// ```text
/// U = OCV(dod) - I * (R0 + dR * dod²)
/// ```
///
/// held non-increasing over a run: the model does not recover voltage while
/// discharging. Charge is drawn at the Peukert-scaled rate
/// `I * (I / I_ref)^(k - 1)`.
#[derive(Debug, Clone)]
pub struct Alkaline {
    name: String,
    params: AlkalineParams,
    capacity_c: f64,
    delivered_c: f64,
    voltage_v: f64,
}

impl Alkaline {
    /// Create an alkaline cell from validated parameters.
    ///
    /// # Errors
    /// `InvalidParameter` for non-positive capacity, reference current or
    /// cutoff, a Peukert exponent below 1, negative resistance, or an initial
    /// depth of discharge outside [0, 1].
    pub fn new(params: AlkalineParams) -> ModelResult<Self> {
        params.validate()?;
        Ok(Self::from_params(params))
    }

    fn from_params(params: AlkalineParams) -> Self {
        let capacity_c = si::coulombs_of(params.capacity);
        let mut cell = Self {
            name: "alkaline".to_string(),
            params,
            capacity_c,
            delivered_c: 0.0,
            voltage_v: 0.0,
        };
        cell.reset();
        cell
    }

    /// Rename the cell (used in logs).
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn params(&self) -> &AlkalineParams {
        &self.params
    }

    /// Internal resistance (Ω) at the given depth of discharge.
    pub fn internal_resistance_at(&self, depth_of_discharge: f64) -> f64 {
        let d = depth_of_discharge.clamp(0.0, 1.0);
        si::ohms_of(self.params.internal_resistance) + si::ohms_of(self.params.resistance_growth) * d * d
    }

    /// Rate at which charge leaves the nominal capacity (A) for a drawn
    /// current `i` (A).
    pub fn effective_draw(&self, i: f64) -> f64 {
        if i <= 0.0 {
            return 0.0;
        }
        let i_ref = si::amps_of(self.params.reference_current);
        i * (i / i_ref).powf(self.params.peukert_exponent - 1.0)
    }

    fn dod(&self) -> f64 {
        (self.delivered_c / self.capacity_c).clamp(0.0, 1.0)
    }

    fn depleted(&self) -> ModelError {
        ModelError::Depleted {
            depth_of_discharge: self.dod(),
            voltage: self.voltage_v,
        }
    }
}

impl Default for Alkaline {
    fn default() -> Self {
        Self::from_params(AlkalineParams::default())
    }
}

impl BatteryModel for Alkaline {
    fn name(&self) -> &str {
        &self.name
    }

    fn terminal_voltage(&self) -> Voltage {
        volts(self.voltage_v)
    }

    fn cutoff_voltage(&self) -> Voltage {
        self.params.cutoff_voltage
    }

    fn depth_of_discharge(&self) -> Ratio {
        unitless(self.dod())
    }

    fn voltage_and_energy(
        &mut self,
        current_drawn: Current,
        dt: Time,
    ) -> ModelResult<(Voltage, Energy)> {
        let i = check_current(current_drawn)?;
        let dt = check_dt(dt)?;

        if self.voltage_v < si::volts_of(self.params.cutoff_voltage)
            || self.delivered_c >= self.capacity_c
        {
            return Err(self.depleted());
        }

        let delivered_next = self.delivered_c + self.effective_draw(i) * dt;
        if delivered_next > self.capacity_c {
            return Err(self.depleted());
        }

        let dod_next = delivered_next / self.capacity_c;
        let ocv = self.params.curve.voltage_at(dod_next);
        let loaded = ocv - i * self.internal_resistance_at(dod_next);
        let voltage_next = loaded.max(0.0).min(self.voltage_v);

        // Trapezoidal over the step
        let energy = 0.5 * (self.voltage_v + voltage_next) * i * dt;

        self.delivered_c = delivered_next;
        self.voltage_v = voltage_next;

        Ok((volts(voltage_next), joules(energy)))
    }

    fn reset(&mut self) {
        self.delivered_c = self.params.initial_depth_of_discharge * self.capacity_c;
        self.voltage_v = self.params.curve.voltage_at(self.params.initial_depth_of_discharge);
    }
}
