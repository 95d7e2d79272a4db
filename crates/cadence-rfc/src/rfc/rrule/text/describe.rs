//! Rule to sentence rendering.
//!
//! The sentence is built from clauses that each end in a single space, so the
//! rendered text keeps a trailing space. Weekly and monthly rules with no day
//! selection name the day of their start date.

use std::fmt::Write as _;

use cadence_core::config::Settings;
use chrono::{Datelike, NaiveDate};
use chrono_tz::Tz;

use super::ordinal::ordinal;
use crate::error::RuleResult;
use crate::rfc::rrule::core::{
    Frequency, MonthlyRule, RecurrenceOptions, ValidationError, Weekday,
};
use crate::rfc::rrule::parse::parse_rule;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// ## Summary
/// Renders a serialized rule as a sentence such as
/// `"Repeats weekly on MO, WE starting 2024-01-01 "`.
///
/// Dates in the rule are shown as calendar dates in `tz`.
///
/// ## Errors
///
/// Returns `RuleError::ParseError` if the rule cannot be parsed. No partial
/// text is produced.
#[tracing::instrument(skip(serialized))]
pub fn describe(serialized: &str, tz: Tz) -> RuleResult<String> {
    let options = parse_rule(serialized, tz)?;
    Ok(describe_options(&options)?)
}

/// ## Summary
/// Renders structured options as a sentence.
///
/// ## Errors
///
/// Returns the first invariant the options violate.
pub fn describe_options(options: &RecurrenceOptions) -> Result<String, ValidationError> {
    options.validate()?;

    let mut text = String::from("Repeats ");
    frequency_clause(&mut text, options);

    if let Some(count) = options.count {
        let noun = if count == 1 {
            "occurrence"
        } else {
            "occurrences"
        };
        let _ = write!(text, "for {count} {noun} ");
    }
    if let Some(start) = options.start_date {
        date_clause(&mut text, "starting", start);
    }
    if let Some(until) = options.until {
        date_clause(&mut text, "until", until);
    }

    Ok(text)
}

fn frequency_clause(text: &mut String, options: &RecurrenceOptions) {
    let interval = options.interval;
    match options.frequency {
        Frequency::Daily => interval_clause(text, interval, "daily", "days"),
        Frequency::Weekly => {
            interval_clause(text, interval, "weekly", "weeks");
            if options.by_weekday.is_empty() {
                if let Some(start) = options.start_date {
                    let _ = write!(text, "on {} ", Weekday::from(start.weekday()));
                }
            } else {
                // BTreeSet iterates Monday first
                let days: Vec<&str> =
                    options.by_weekday.iter().copied().map(Weekday::as_str).collect();
                let _ = write!(text, "on {} ", days.join(", "));
            }
        }
        Frequency::Monthly => {
            interval_clause(text, interval, "monthly", "months");
            match &options.monthly {
                Some(MonthlyRule::ByMonthDays { days }) if !days.is_empty() => {
                    let days: Vec<String> = days.iter().map(|d| ordinal(u32::from(*d))).collect();
                    let _ = write!(text, "on the {} of the month ", days.join(", "));
                }
                Some(MonthlyRule::ByWeekdayOrdinal { position, weekday }) => {
                    let _ = write!(text, "on the {position} {} of the month ", weekday.name());
                }
                None if options.by_weekday.is_empty() => {
                    if let Some(start) = options.start_date {
                        let day = ordinal(start.day());
                        let _ = write!(text, "on the {day} of the month ");
                    }
                }
                Some(MonthlyRule::ByMonthDays { .. }) | None => {}
            }
        }
        other => {
            tracing::trace!(frequency = %other, "No frequency clause for this frequency");
        }
    }
}

fn interval_clause(text: &mut String, interval: u32, single: &str, unit: &str) {
    if interval == 1 {
        let _ = write!(text, "{single} ");
    } else {
        let _ = write!(text, "every {interval} {unit} ");
    }
}

fn date_clause(text: &mut String, label: &str, date: NaiveDate) {
    let _ = write!(text, "{label} {} ", date.format(DATE_FORMAT));
}

/// Renders rules for a fixed display timezone.
#[derive(Debug, Clone, Copy)]
pub struct RuleDescriber {
    tz: Tz,
}

impl RuleDescriber {
    #[must_use]
    pub const fn new(tz: Tz) -> Self {
        Self { tz }
    }

    /// ## Summary
    /// Creates a describer for the configured `display.timezone`.
    ///
    /// ## Errors
    ///
    /// Returns `RuleError::CoreError` if the configured timezone is unknown.
    pub fn from_settings(settings: &Settings) -> RuleResult<Self> {
        Ok(Self::new(settings.display.timezone()?))
    }

    #[must_use]
    pub const fn timezone(self) -> Tz {
        self.tz
    }

    /// ## Summary
    /// Renders a serialized rule. See [`describe`].
    ///
    /// ## Errors
    ///
    /// Returns `RuleError::ParseError` if the rule cannot be parsed.
    pub fn describe(self, serialized: &str) -> RuleResult<String> {
        describe(serialized, self.tz)
    }
}

#[cfg(test)]
#[path = "describe_tests.rs"]
mod tests;
