//! cs-models: battery and load models for discharge simulation.
//!
//! Provides:
//! - `BatteryModel` capability with the `Alkaline` chemistry profile
//! - `DischargeCurve` open-circuit voltage lookup
//! - `LoadModel` capability with resistive, constant-current and
//!   constant-power loads
//!
//! # Example
//!
//! ```
//! use cs_core::units::{s, si};
//! use cs_models::{Alkaline, BatteryModel, LoadModel, ResistorLoad};
//!
//! let mut cell = Alkaline::default();
//! let load = ResistorLoad::new(10.0).unwrap();
//!
//! let current = load.current_for(cell.terminal_voltage()).unwrap();
//! let (voltage, energy) = cell.voltage_and_energy(current, s(1.0)).unwrap();
//!
//! assert!(si::volts_of(voltage) < 1.6);
//! assert!(si::joules_of(energy) > 0.0);
//! ```

pub mod alkaline;
pub mod common;
pub mod curve;
pub mod error;
pub mod load;
pub mod traits;

// Re-exports
pub use alkaline::{Alkaline, AlkalineParams};
pub use curve::DischargeCurve;
pub use error::{ModelError, ModelResult};
pub use load::{ConstantCurrentLoad, ConstantPowerLoad, ResistorLoad};
pub use traits::{BatteryModel, LoadModel};
