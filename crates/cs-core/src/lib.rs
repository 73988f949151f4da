//! cs-core: shared foundation for cellsim.
//!
//! Contains:
//! - units (uom SI electrical types + constructors and display conversions)
//! - numeric (float checks + interpolation)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

pub use error::{CsError, CsResult};
pub use numeric::*;
pub use units::*;
