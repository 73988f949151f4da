//! Discharge simulation for cellsim.
//!
//! Provides:
//! - `Simulator` coupling one battery and one load over fixed time steps
//! - `SampleSeries` index-aligned time, energy, voltage and current records
//! - Progress reporting for long runs

pub mod error;
pub mod progress;
pub mod series;
pub mod sim;

pub use error::{SimError, SimResult};
pub use progress::SimProgress;
pub use series::{BatteryState, SampleSeries};
pub use sim::{SimOptions, SimOutcome, Simulator, StopReason};
