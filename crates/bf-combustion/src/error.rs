//! Error types for combustion-side operations.

use thiserror::Error;

/// Errors a combustion sub-model or its value types can produce.
#[derive(Error, Debug, Clone)]
pub enum CombustionError {
    #[error("Non-physical value: {what}")]
    NonPhysical { what: &'static str },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}

pub type CombustionResult<T> = Result<T, CombustionError>;
