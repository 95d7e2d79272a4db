//! Rule document parser.
//!
//! Parses a serialized rule into a [`RuleDocument`] and maps the document onto
//! [`RecurrenceOptions`].

use std::collections::BTreeSet;

use chrono::NaiveDate;
use chrono_tz::Tz;

use super::error::{ParseError, ParseErrorKind, ParseResult};
use super::lexer::{ContentLine, parse_content_line, split_lines};
use super::values::{parse_date, parse_datetime, parse_rrule};
use crate::rfc::rrule::core::{
    ConversionError, Date, DtStart, MonthlyRule, RRule, RRuleUntil, RecurrenceOptions,
    RuleDocument, SetPosition, ValidationError, Weekday, WeekdayNum, local_date,
};

/// A parsed document together with the position of its `RRULE` value.
struct Located {
    document: RuleDocument,
    line: usize,
    column: usize,
}

/// Parses a serialized rule into its `DTSTART` and `RRULE` parts.
///
/// Accepts the two-line `DTSTART`/`RRULE` form as well as a single bare rule
/// value (`FREQ=DAILY;COUNT=5`).
///
/// ## Errors
///
/// Returns an error if the input is empty, a line is malformed, a property
/// other than `DTSTART` or `RRULE` appears, or the `RRULE` is missing.
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn parse_document(input: &str) -> ParseResult<RuleDocument> {
    parse_located(input).map(|located| located.document)
}

/// ## Summary
/// Parses a serialized rule into structured options.
///
/// Dates are read as calendar dates in `tz`: UTC and zoned values are
/// converted into `tz`, floating values are taken as written.
///
/// ## Errors
///
/// Returns an error if the document cannot be parsed or does not describe a
/// valid [`RecurrenceOptions`] (for example `UNTIL` with `COUNT`, or
/// `BYMONTHDAY` with `BYSETPOS`).
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn parse_rule(input: &str, tz: Tz) -> ParseResult<RecurrenceOptions> {
    let located = parse_located(input)?;
    let options = to_options(&located, tz)?;

    tracing::debug!(frequency = %options.frequency, "Parsed recurrence rule");

    Ok(options)
}

fn parse_located(input: &str) -> ParseResult<Located> {
    let lines = split_lines(input);

    if lines.is_empty() {
        return Err(ParseError::new(ParseErrorKind::EmptyInput, 1, 1));
    }

    let mut dtstart: Option<DtStart> = None;
    let mut rrule: Option<(RRule, usize, usize)> = None;

    for (line_num, line) in &lines {
        // A rule value without the `RRULE:` prefix
        if !line.contains(':') && line.contains('=') {
            rrule = Some(parse_rule_value(rrule.is_some(), line, *line_num, 1)?);
            continue;
        }

        let content_line = parse_content_line(line, *line_num)?;

        match content_line.name.as_str() {
            "DTSTART" => {
                if dtstart.is_some() {
                    return Err(duplicate("DTSTART", *line_num));
                }
                dtstart = Some(parse_dtstart(&content_line, *line_num)?);
            }
            "RRULE" => {
                let column = content_line.value_column;
                rrule = Some(parse_rule_value(
                    rrule.is_some(),
                    &content_line.value,
                    *line_num,
                    column,
                )?);
            }
            other => {
                return Err(
                    ParseError::new(ParseErrorKind::UnsupportedProperty, *line_num, 1)
                        .with_context(other),
                );
            }
        }
    }

    let (rrule, line, column) =
        rrule.ok_or_else(|| ParseError::new(ParseErrorKind::MissingRRule, 1, 1))?;

    Ok(Located {
        document: RuleDocument { dtstart, rrule },
        line,
        column,
    })
}

fn duplicate(name: &str, line_num: usize) -> ParseError {
    ParseError::new(ParseErrorKind::DuplicateProperty, line_num, 1).with_context(name)
}

fn parse_rule_value(
    seen: bool,
    value: &str,
    line_num: usize,
    column: usize,
) -> ParseResult<(RRule, usize, usize)> {
    if seen {
        return Err(duplicate("RRULE", line_num));
    }
    let parsed = parse_rrule(value, line_num, column)?;
    require_frequency(&parsed, line_num, column)?;
    Ok((parsed, line_num, column))
}

fn require_frequency(rrule: &RRule, line: usize, column: usize) -> ParseResult<()> {
    if rrule.freq.is_none() {
        return Err(ParseError::new(
            ParseErrorKind::MissingFrequency,
            line,
            column,
        ));
    }
    Ok(())
}

/// Parses a `DTSTART` content line according to its `VALUE` and `TZID` parameters.
fn parse_dtstart(content_line: &ContentLine, line_num: usize) -> ParseResult<DtStart> {
    let column = content_line.value_column;
    let value = content_line.value.as_str();

    match content_line.param("VALUE").map(str::to_ascii_uppercase).as_deref() {
        Some("DATE") => Ok(DtStart::Date(parse_date(value, line_num, column)?)),
        None | Some("DATE-TIME") => Ok(DtStart::DateTime(parse_datetime(
            value,
            content_line.param("TZID"),
            line_num,
            column,
        )?)),
        Some(other) => Err(
            ParseError::new(ParseErrorKind::InvalidParameter, line_num, 1)
                .with_context(format!("VALUE={other}")),
        ),
    }
}

/// Maps a parsed document onto structured options.
fn to_options(located: &Located, tz: Tz) -> ParseResult<RecurrenceOptions> {
    let Located {
        document,
        line,
        column,
    } = located;
    let (line, column) = (*line, *column);
    let rrule = &document.rrule;
    let err = |kind: ParseErrorKind| ParseError::new(kind, line, column);

    let frequency = rrule
        .freq
        .ok_or_else(|| err(ParseErrorKind::MissingFrequency))?;

    let start_date = document
        .dtstart
        .as_ref()
        .map(|dtstart| match dtstart {
            DtStart::Date(date) => naive_date(*date, line, 1),
            DtStart::DateTime(dt) => local_date(dt, tz).map_err(|e| conversion(&e, line, 1)),
        })
        .transpose()?;

    let until = rrule
        .until
        .as_ref()
        .map(|until| match until {
            RRuleUntil::Date(date) => naive_date(*date, line, column),
            RRuleUntil::DateTime(dt) => {
                local_date(dt, tz).map_err(|e| conversion(&e, line, column))
            }
        })
        .transpose()?;

    let (by_weekday, monthly) = day_selection(rrule, line, column)?;

    let options = RecurrenceOptions {
        frequency,
        interval: rrule.interval.unwrap_or(1),
        by_weekday,
        monthly,
        start_date,
        until,
        count: rrule.count,
    };

    options.validate().map_err(|e| {
        ParseError::new(validation_kind(&e), line, column).with_context(e.to_string())
    })?;

    Ok(options)
}

/// Splits `BYDAY`, `BYMONTHDAY` and `BYSETPOS` into a weekday set and a monthly rule.
fn day_selection(
    rrule: &RRule,
    line: usize,
    column: usize,
) -> ParseResult<(BTreeSet<Weekday>, Option<MonthlyRule>)> {
    let err = |kind: ParseErrorKind| ParseError::new(kind, line, column);

    let plain: BTreeSet<Weekday> = rrule
        .by_day
        .iter()
        .filter(|day| day.ordinal.is_none())
        .map(|day| day.weekday)
        .collect();
    let ordinal_days: Vec<&WeekdayNum> = rrule
        .by_day
        .iter()
        .filter(|day| day.ordinal.is_some())
        .collect();

    if !rrule.by_monthday.is_empty() && !rrule.by_setpos.is_empty() {
        return Err(err(ParseErrorKind::MonthDaySetPositionConflict));
    }

    if let [setpos] = rrule.by_setpos.as_slice() {
        let weekday = match (plain.len(), ordinal_days.is_empty()) {
            (1, true) => plain.iter().next().copied(),
            _ => None,
        }
        .ok_or_else(|| {
            err(ParseErrorKind::InvalidSetPosition)
                .with_context("BYSETPOS requires exactly one BYDAY weekday")
        })?;
        let position = SetPosition::from_ordinal(*setpos).ok_or_else(|| {
            err(ParseErrorKind::InvalidSetPosition).with_context(setpos.to_string())
        })?;
        return Ok((
            BTreeSet::new(),
            Some(MonthlyRule::ByWeekdayOrdinal { position, weekday }),
        ));
    }
    if !rrule.by_setpos.is_empty() {
        return Err(err(ParseErrorKind::InvalidSetPosition)
            .with_context("only a single BYSETPOS value is supported"));
    }

    if let Some(first) = ordinal_days.first() {
        if ordinal_days.len() > 1 || !plain.is_empty() || !rrule.by_monthday.is_empty() {
            return Err(err(ParseErrorKind::InvalidRRule)
                .with_context("an ordinal BYDAY must be the only day selection"));
        }
        let ordinal = first.ordinal.map_or(1, i16::from);
        let position = SetPosition::from_ordinal(ordinal).ok_or_else(|| {
            err(ParseErrorKind::InvalidSetPosition).with_context(first.to_string())
        })?;
        return Ok((
            BTreeSet::new(),
            Some(MonthlyRule::ByWeekdayOrdinal {
                position,
                weekday: first.weekday,
            }),
        ));
    }

    if rrule.by_monthday.is_empty() {
        return Ok((plain, None));
    }

    let days = rrule
        .by_monthday
        .iter()
        .map(|day| {
            u8::try_from(*day)
                .ok()
                .filter(|d| (1..=31).contains(d))
                .ok_or_else(|| {
                    err(ParseErrorKind::InvalidMonthDay).with_context(day.to_string())
                })
        })
        .collect::<ParseResult<Vec<u8>>>()?;

    // Weekdays written next to BYMONTHDAY stay in the weekday set
    Ok((plain, Some(MonthlyRule::ByMonthDays { days })))
}

fn naive_date(date: Date, line: usize, column: usize) -> ParseResult<NaiveDate> {
    date.to_naive().ok_or_else(|| {
        ParseError::new(ParseErrorKind::InvalidDate, line, column).with_context(date.to_string())
    })
}

fn conversion(error: &ConversionError, line: usize, column: usize) -> ParseError {
    let kind = match error {
        ConversionError::UnknownTimezone(_) => ParseErrorKind::UnknownTimezone,
        ConversionError::InvalidDateTime(_) => ParseErrorKind::InvalidDateTime,
    };
    ParseError::new(kind, line, column).with_context(error.to_string())
}

const fn validation_kind(error: &ValidationError) -> ParseErrorKind {
    match error {
        ValidationError::UntilCountConflict => ParseErrorKind::UntilCountConflict,
        ValidationError::ZeroInterval => ParseErrorKind::InvalidInterval,
        ValidationError::ZeroCount => ParseErrorKind::InvalidCount,
        ValidationError::EmptyMonthDays | ValidationError::MonthDayOutOfRange(_) => {
            ParseErrorKind::InvalidMonthDay
        }
        ValidationError::SetPositionOutOfRange(_) => ParseErrorKind::InvalidSetPosition,
        ValidationError::MonthlyRuleFrequency(_) => ParseErrorKind::UnsupportedRulePart,
        ValidationError::OrdinalWithWeekdaySet
        | ValidationError::UnrepresentableDate(_)
        | ValidationError::MissingStartDate => ParseErrorKind::InvalidRRule,
    }
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
