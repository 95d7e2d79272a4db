use thiserror::Error;

use crate::rfc::rrule::core::ValidationError;
use crate::rfc::rrule::parse::ParseError;

/// Errors surfaced by rule building, parsing, rendering and expansion.
#[derive(Error, Debug)]
pub enum RuleError {
    #[error("Parse error: {0}")]
    ParseError(#[from] ParseError),

    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationError),

    #[error("Expansion error: {0}")]
    ExpansionError(#[from] rrule::RRuleError),

    #[error(transparent)]
    CoreError(#[from] cadence_core::error::CoreError),
}

pub type RuleResult<T> = std::result::Result<T, RuleError>;
