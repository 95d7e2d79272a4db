//! Occurrence expansion for rule previews.
//!
//! Uses the `rrule` crate as an independent RRULE engine.

mod occurrences;

pub use occurrences::{ExpansionOptions, expand_rule};
