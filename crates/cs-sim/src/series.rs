//! Discharge samples and their index-aligned series.

use crate::error::{SimError, SimResult};

/// System state at one instant of a run, in SI units.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BatteryState {
    /// Elapsed time (s)
    pub t_s: f64,
    /// Cumulative energy delivered (W·s)
    pub energy_ws: f64,
    /// Terminal voltage (V)
    pub voltage_v: f64,
    /// Current drawn (A)
    pub current_a: f64,
}

/// Four parallel sequences describing a discharge run.
///
/// Sample `i` of every sequence belongs to the same instant. All sequences
/// have equal length; time and cumulative energy never decrease.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SampleSeries {
    t: Vec<f64>,
    energy: Vec<f64>,
    voltage: Vec<f64>,
    current: Vec<f64>,
}

impl SampleSeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            t: Vec::with_capacity(capacity),
            energy: Vec::with_capacity(capacity),
            voltage: Vec::with_capacity(capacity),
            current: Vec::with_capacity(capacity),
        }
    }

    /// Append a sample.
    ///
    /// # Errors
    /// `Invariant` if any value is non-finite, or if time or energy would
    /// decrease.
    pub fn push(&mut self, sample: BatteryState) -> SimResult<()> {
        let BatteryState {
            t_s,
            energy_ws,
            voltage_v,
            current_a,
        } = sample;
        if ![t_s, energy_ws, voltage_v, current_a]
            .iter()
            .all(|v| v.is_finite())
        {
            return Err(SimError::Invariant {
                what: "sample values must be finite",
            });
        }
        if let Some(last) = self.last() {
            if t_s < last.t_s {
                return Err(SimError::Invariant {
                    what: "time must not decrease",
                });
            }
            if energy_ws < last.energy_ws {
                return Err(SimError::Invariant {
                    what: "cumulative energy must not decrease",
                });
            }
        }
        self.t.push(t_s);
        self.energy.push(energy_ws);
        self.voltage.push(voltage_v);
        self.current.push(current_a);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<BatteryState> {
        Some(BatteryState {
            t_s: *self.t.get(index)?,
            energy_ws: self.energy[index],
            voltage_v: self.voltage[index],
            current_a: self.current[index],
        })
    }

    pub fn first(&self) -> Option<BatteryState> {
        self.get(0)
    }

    pub fn last(&self) -> Option<BatteryState> {
        self.len().checked_sub(1).and_then(|i| self.get(i))
    }

    pub fn iter(&self) -> impl Iterator<Item = BatteryState> + '_ {
        (0..self.len()).filter_map(|i| self.get(i))
    }

    /// Elapsed time (s)
    pub fn t(&self) -> &[f64] {
        &self.t
    }

    /// Cumulative energy delivered (W·s)
    pub fn energy(&self) -> &[f64] {
        &self.energy
    }

    /// Terminal voltage (V)
    pub fn voltage(&self) -> &[f64] {
        &self.voltage
    }

    /// Current drawn (A)
    pub fn current(&self) -> &[f64] {
        &self.current
    }

    /// Split into `(t, energy, voltage, current)` columns.
    pub fn into_columns(self) -> (Vec<f64>, Vec<f64>, Vec<f64>, Vec<f64>) {
        (self.t, self.energy, self.voltage, self.current)
    }
}
