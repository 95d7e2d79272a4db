use thiserror::Error;

use cadence_core::error::CoreError;
use cadence_rfc::ValidationError;
use cadence_rfc::error::RuleError;

/// Errors surfaced by command execution.
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    RuleError(#[from] RuleError),

    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationError),

    #[error(transparent)]
    CoreError(#[from] CoreError),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type AppResult<T> = std::result::Result<T, AppError>;
