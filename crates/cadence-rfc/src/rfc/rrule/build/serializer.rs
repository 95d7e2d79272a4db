//! Structured options to serialized rule conversion.

use chrono_tz::Tz;

use crate::error::RuleResult;
use crate::rfc::rrule::core::{
    DateTime, DtStart, MonthlyRule, RRule, RRuleUntil, RecurrenceOptions, RuleDocument,
    ValidationError, WeekdayNum, local_midnight_utc,
};

/// ## Summary
/// Serializes structured options into the canonical rule string.
///
/// The start and until dates are written as midnight in `tz`, converted to UTC.
///
/// ## Errors
///
/// Returns `RuleError::ValidationError` if the options violate an invariant
/// or carry a date outside the iCalendar range.
#[tracing::instrument(skip(options), fields(frequency = %options.frequency))]
pub fn build_rule(options: &RecurrenceOptions, tz: Tz) -> RuleResult<String> {
    let document = to_document(options, tz)?;
    let serialized = serialize(&document);

    tracing::debug!(rule = %serialized, "Built recurrence rule");

    Ok(serialized)
}

/// Serializes a rule document with `\n` between its lines.
#[must_use]
pub fn serialize(document: &RuleDocument) -> String {
    document.to_string()
}

/// ## Summary
/// Maps validated options onto a [`RuleDocument`].
///
/// Nth-weekday rules are written as a plain `BYDAY` weekday with a single
/// `BYSETPOS` value.
///
/// ## Errors
///
/// Returns the first violated invariant, or
/// `ValidationError::UnrepresentableDate` for dates outside years 0..=9999.
pub fn to_document(options: &RecurrenceOptions, tz: Tz) -> Result<RuleDocument, ValidationError> {
    options.validate()?;

    let mut rrule = RRule::with_freq(options.frequency);
    rrule.interval = (options.interval != 1).then_some(options.interval);
    rrule.count = options.count;

    if let Some(until) = options.until {
        let instant = local_midnight_utc(until, tz);
        let value = DateTime::from_chrono_utc(instant)
            .ok_or(ValidationError::UnrepresentableDate(until))?;
        rrule.until = Some(RRuleUntil::DateTime(value));
    }

    rrule.by_day = options
        .by_weekday
        .iter()
        .copied()
        .map(WeekdayNum::every)
        .collect();

    match &options.monthly {
        None => {}
        Some(MonthlyRule::ByMonthDays { days }) => {
            rrule.by_monthday = days
                .iter()
                .map(|day| {
                    i8::try_from(*day).map_err(|_e| ValidationError::MonthDayOutOfRange(*day))
                })
                .collect::<Result<_, _>>()?;
        }
        Some(MonthlyRule::ByWeekdayOrdinal { position, weekday }) => {
            rrule.by_day = vec![WeekdayNum::every(*weekday)];
            rrule.by_setpos = vec![position.ordinal()];
        }
    }

    let dtstart = options
        .start_date
        .map(|start| {
            DateTime::from_chrono_utc(local_midnight_utc(start, tz))
                .map(DtStart::DateTime)
                .ok_or(ValidationError::UnrepresentableDate(start))
        })
        .transpose()?;

    Ok(RuleDocument { dtstart, rrule })
}
