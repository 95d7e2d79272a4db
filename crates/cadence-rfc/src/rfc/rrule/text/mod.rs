//! Natural-language rendering of recurrence rules.

mod describe;
mod ordinal;

pub use describe::{RuleDescriber, describe, describe_options};
pub use ordinal::ordinal;
