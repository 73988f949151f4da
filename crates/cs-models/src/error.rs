//! Error types for battery and load models.

use cs_core::error::CsError;
use thiserror::Error;

/// Errors that can occur while evaluating a model.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("Invalid parameter: {what}")]
    InvalidParameter { what: &'static str },

    #[error("Non-physical value: {what}")]
    NonPhysical { what: &'static str },

    /// The battery cannot sustain the requested current any longer.
    #[error("Battery depleted at depth of discharge {depth_of_discharge:.4} ({voltage:.4} V)")]
    Depleted {
        depth_of_discharge: f64,
        voltage: f64,
    },
}

pub type ModelResult<T> = Result<T, ModelError>;

impl From<CsError> for ModelError {
    fn from(e: CsError) -> Self {
        match e {
            CsError::NonFinite { what, .. } => ModelError::InvalidParameter { what },
            CsError::InvalidArg { what } => ModelError::InvalidParameter { what },
            CsError::Invariant { what } => ModelError::NonPhysical { what },
        }
    }
}

impl ModelError {
    pub fn is_depleted(&self) -> bool {
        matches!(self, ModelError::Depleted { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ModelError::InvalidParameter {
            what: "resistance must be positive",
        };
        assert!(err.to_string().contains("resistance"));

        let err = ModelError::Depleted {
            depth_of_discharge: 0.97,
            voltage: 0.89,
        };
        assert!(err.to_string().contains("0.9700"));
        assert!(err.is_depleted());
    }

    #[test]
    fn error_conversion() {
        let core_err = CsError::InvalidArg { what: "dt" };
        let model_err: ModelError = core_err.into();
        assert_eq!(model_err, ModelError::InvalidParameter { what: "dt" });
        assert!(!model_err.is_depleted());
    }
}
