//! iCalendar recurrence rules (RFC 5545 §3.3.10, §3.8.5.3).
//!
//! - `core`: rule value types and the structured [`RecurrenceOptions`]
//! - `parse`: serialized rule string to structured options
//! - `build`: structured options to serialized rule string
//! - `text`: natural-language rendering
//! - `expand`: occurrence expansion for previews
//!
//! ## Example
//!
//! ```rust
//! use cadence_rfc::rfc::rrule::{Frequency, RecurrenceOptions, Weekday, build_rule, describe};
//! use chrono::NaiveDate;
//! use chrono_tz::Tz;
//!
//! let options = RecurrenceOptions::new(Frequency::Weekly)
//!     .with_interval(2)
//!     .with_weekdays([Weekday::Wednesday, Weekday::Monday])
//!     .with_start_date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
//!
//! let rule = build_rule(&options, Tz::UTC).unwrap();
//! assert_eq!(rule, "DTSTART:20240101T000000Z\nRRULE:FREQ=WEEKLY;INTERVAL=2;BYDAY=MO,WE");
//!
//! let text = describe(&rule, Tz::UTC).unwrap();
//! assert_eq!(text, "Repeats every 2 weeks on MO, WE starting 2024-01-01 ");
//! ```

pub mod build;
pub mod core;
pub mod expand;
pub mod parse;
pub mod text;

#[cfg(test)]
mod tests;

pub use build::{build_rule, serialize};
pub use core::{
    EndCondition, Frequency, MonthlyRule, RecurrenceOptions, RuleDocument, SetPosition,
    ValidationError, Weekday,
};
pub use expand::{ExpansionOptions, expand_rule};
pub use parse::{ParseError, ParseErrorKind, ParseResult, parse_document, parse_rule};
pub use text::{RuleDescriber, describe, describe_options, ordinal};
