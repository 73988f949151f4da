//! Simulation runner coupling a battery to a load.

use crate::error::{SimError, SimResult};
use crate::progress::SimProgress;
use crate::series::{BatteryState, SampleSeries};
use cs_core::units::{amps, s, si, volts};
use cs_models::{BatteryModel, LoadModel, ModelError};
use tracing::{debug, info, trace, warn};

/// Options for discharge runs.
#[derive(Clone, Debug, PartialEq)]
pub struct SimOptions {
    /// Fixed time step (seconds)
    pub dt: f64,
    /// Time limit (seconds); no sample is recorded past it. Unbounded if `None`
    pub max_time: Option<f64>,
    /// Maximum number of steps (safety limit)
    pub max_steps: usize,
    /// Record every N-th step (decimation); the final sample is always recorded
    pub record_every: usize,
    /// Report progress every N steps
    pub progress_every: usize,
}

impl Default for SimOptions {
    fn default() -> Self {
        Self {
            dt: 1.0,
            max_time: None,
            max_steps: 10_000_000,
            record_every: 1,
            progress_every: 10_000,
        }
    }
}

impl SimOptions {
    /// Options with the given step and everything else at defaults.
    pub fn with_dt(dt: f64) -> Self {
        Self {
            dt,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> SimResult<()> {
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(SimError::InvalidParameter {
                what: "dt must be positive",
            });
        }
        if let Some(max_time) = self.max_time {
            if !max_time.is_finite() || max_time < 0.0 {
                return Err(SimError::InvalidParameter {
                    what: "max_time must be non-negative",
                });
            }
        }
        if self.max_steps == 0 {
            return Err(SimError::InvalidParameter {
                what: "max_steps must be positive",
            });
        }
        if self.record_every == 0 {
            return Err(SimError::InvalidParameter {
                what: "record_every must be positive",
            });
        }
        if self.progress_every == 0 {
            return Err(SimError::InvalidParameter {
                what: "progress_every must be positive",
            });
        }
        Ok(())
    }
}

/// Why a run stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    /// The battery could no longer sustain the load
    Depleted,
    /// Simulated time reached `max_time`
    MaxTime,
    /// The step limit truncated the run
    MaxSteps,
}

/// Completed run: the recorded series and why it ended.
#[derive(Clone, Debug)]
pub struct SimOutcome {
    pub series: SampleSeries,
    pub stop_reason: StopReason,
    /// Time steps taken
    pub steps: usize,
}

/// Couples one battery and one load over fixed time steps.
///
/// Each step asks the load for its current at the present terminal voltage,
/// advances the battery under that current and records `(t, E, U, I)`.
/// Battery depletion ends the run normally.
#[derive(Debug)]
pub struct Simulator<B, L> {
    battery: B,
    load: L,
}

impl<B: BatteryModel, L: LoadModel> Simulator<B, L> {
    pub fn new(battery: B, load: L) -> Self {
        Self { battery, load }
    }

    pub fn battery(&self) -> &B {
        &self.battery
    }

    pub fn load(&self) -> &L {
        &self.load
    }

    pub fn into_parts(self) -> (B, L) {
        (self.battery, self.load)
    }

    /// Run with default options (1 s step, no time limit).
    pub fn run(&mut self) -> SimResult<SampleSeries> {
        self.run_with(&SimOptions::default())
    }

    pub fn run_with(&mut self, opts: &SimOptions) -> SimResult<SampleSeries> {
        Ok(self.run_detailed(opts)?.series)
    }

    pub fn run_detailed(&mut self, opts: &SimOptions) -> SimResult<SimOutcome> {
        self.run_with_progress(opts, |_| {})
    }

    /// Run the discharge loop, calling `on_progress` every
    /// `opts.progress_every` steps.
    ///
    /// The battery is reset first, so every run starts from its configured
    /// initial state.
    ///
    /// # Errors
    /// `InvalidParameter` for malformed options, or any model failure other
    /// than depletion.
    pub fn run_with_progress<F>(
        &mut self,
        opts: &SimOptions,
        mut on_progress: F,
    ) -> SimResult<SimOutcome>
    where
        F: FnMut(&SimProgress),
    {
        opts.validate()?;
        self.battery.reset();

        debug!(
            battery = self.battery.name(),
            load = self.load.name(),
            dt = opts.dt,
            max_time = ?opts.max_time,
            "starting discharge run"
        );

        let dt = s(opts.dt);
        let mut series = SampleSeries::new();
        let mut step = 0usize;
        let mut t = 0.0;
        let mut energy = 0.0;
        let mut voltage = si::volts_of(self.battery.terminal_voltage());

        let stop_reason = loop {
            let current = match self.load.current_for(volts(voltage)) {
                Ok(i) => si::amps_of(i),
                Err(ModelError::NonPhysical { what }) => {
                    debug!(what, voltage, "load cannot be supplied");
                    series.push(sample(t, energy, voltage, 0.0))?;
                    break StopReason::Depleted;
                }
                Err(e) => return Err(e.into()),
            };
            let here = sample(t, energy, voltage, current);

            // Stop on the last grid point not past max_time
            if opts
                .max_time
                .is_some_and(|max_time| (step + 1) as f64 * opts.dt > max_time)
            {
                series.push(here)?;
                break StopReason::MaxTime;
            }
            if step >= opts.max_steps {
                warn!(
                    max_steps = opts.max_steps,
                    t, "step limit reached before depletion"
                );
                series.push(here)?;
                break StopReason::MaxSteps;
            }

            let (next_voltage, delivered) =
                match self.battery.voltage_and_energy(amps(current), dt) {
                    Ok(v) => v,
                    Err(ModelError::Depleted {
                        depth_of_discharge,
                        voltage,
                    }) => {
                        debug!(depth_of_discharge, voltage, "battery depleted");
                        series.push(here)?;
                        break StopReason::Depleted;
                    }
                    Err(e) => return Err(e.into()),
                };

            if step % opts.record_every == 0 {
                trace!(t, energy, voltage, current, "sample");
                series.push(here)?;
            }

            energy += si::joules_of(delivered);
            voltage = si::volts_of(next_voltage);
            step += 1;
            // Not accumulated: t stays an exact multiple of dt
            t = step as f64 * opts.dt;

            if step % opts.progress_every == 0 {
                on_progress(&SimProgress {
                    step,
                    sim_time_s: t,
                    voltage_v: voltage,
                    energy_ws: energy,
                    depth_of_discharge: self.battery.depth_of_discharge().value,
                    fraction_complete: opts
                        .max_time
                        .filter(|max_time| *max_time > 0.0)
                        .map(|max_time| (t / max_time).min(1.0)),
                });
            }
        };

        let last = series.last();
        info!(
            battery = self.battery.name(),
            load = self.load.name(),
            ?stop_reason,
            steps = step,
            samples = series.len(),
            final_voltage = ?last.map(|x| x.voltage_v),
            energy_ws = ?last.map(|x| x.energy_ws),
            "discharge run finished"
        );

        Ok(SimOutcome {
            series,
            stop_reason,
            steps: step,
        })
    }
}

fn sample(t_s: f64, energy_ws: f64, voltage_v: f64, current_a: f64) -> BatteryState {
    BatteryState {
        t_s,
        energy_ws,
        voltage_v,
        current_a,
    }
}
