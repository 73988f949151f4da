//! Error types for simulation runs.

use cs_core::error::CsError;
use cs_models::ModelError;
use thiserror::Error;

/// Errors encountered while running a discharge simulation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("Invalid parameter: {what}")]
    InvalidParameter { what: &'static str },

    #[error("Non-physical condition: {what}")]
    NonPhysical { what: &'static str },

    #[error("Invariant violated: {what}")]
    Invariant { what: &'static str },

    #[error("Backend error: {message}")]
    Backend { message: String },
}

pub type SimResult<T> = Result<T, SimError>;

impl From<ModelError> for SimError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::InvalidParameter { what } => SimError::InvalidParameter { what },
            ModelError::NonPhysical { what } => SimError::NonPhysical { what },
            ModelError::Depleted { .. } => SimError::Backend {
                message: e.to_string(),
            },
        }
    }
}

impl From<CsError> for SimError {
    fn from(e: CsError) -> Self {
        match e {
            CsError::NonFinite { what, .. } | CsError::InvalidArg { what } => {
                SimError::InvalidParameter { what }
            }
            CsError::Invariant { what } => SimError::Invariant { what },
        }
    }
}
