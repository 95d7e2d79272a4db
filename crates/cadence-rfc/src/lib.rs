//! Recurrence rule authoring core.
//!
//! Converts between structured [`RecurrenceOptions`](rfc::rrule::RecurrenceOptions),
//! the RFC 5545 `DTSTART`/`RRULE` serialized form and a human-readable sentence.

pub mod error;
pub mod rfc;

pub use rfc::rrule::{
    EndCondition, ExpansionOptions, Frequency, MonthlyRule, ParseError, ParseErrorKind,
    RecurrenceOptions, RuleDescriber, SetPosition, ValidationError, Weekday, build_rule, describe,
    describe_options, expand_rule, ordinal, parse_rule,
};
