//! Recurrence rule type definitions.

mod document;
mod options;
mod rrule;
mod value;
mod zone;

pub use document::{DtStart, RuleDocument};
pub use options::{EndCondition, MonthlyRule, RecurrenceOptions, SetPosition, ValidationError};
pub use rrule::{Frequency, RRule, RRuleUntil, Weekday, WeekdayNum};
pub use value::{Date, DateTime, DateTimeForm};
pub use zone::{ConversionError, local_date, local_midnight_utc, resolve_tzid};
