//! Value type parsers for rule content (RFC 5545 §3.3).
//!
//! Error sources are intentionally discarded during parsing (`map_err_ignore`);
//! the error kind and position identify the failing value.
#![expect(
    clippy::map_err_ignore,
    reason = "Value parsers report kind and position instead of the std parse error"
)]

use super::error::{ParseError, ParseErrorKind, ParseResult};
use crate::rfc::rrule::core::{
    Date, DateTime, DateTimeForm, Frequency, RRule, RRuleUntil, Weekday, WeekdayNum,
};

/// Parses a DATE value (RFC 5545 §3.3.4).
///
/// Format: YYYYMMDD (e.g., "19970714")
///
/// ## Errors
/// Returns an error if the string is not a valid 8-digit date.
pub fn parse_date(s: &str, line: usize, col: usize) -> ParseResult<Date> {
    if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::new(ParseErrorKind::InvalidDate, line, col));
    }

    let year = s[0..4]
        .parse::<u16>()
        .map_err(|_| ParseError::new(ParseErrorKind::InvalidDate, line, col))?;
    let month = s[4..6]
        .parse::<u8>()
        .map_err(|_| ParseError::new(ParseErrorKind::InvalidDate, line, col))?;
    let day = s[6..8]
        .parse::<u8>()
        .map_err(|_| ParseError::new(ParseErrorKind::InvalidDate, line, col))?;

    let date = Date { year, month, day };
    if date.to_naive().is_none() {
        return Err(ParseError::new(ParseErrorKind::InvalidDate, line, col).with_context(s));
    }

    Ok(date)
}

/// Parses the HHMMSS[Z] part of a DATE-TIME (RFC 5545 §3.3.12).
fn parse_time(s: &str, line: usize, col: usize) -> ParseResult<(u8, u8, u8, bool)> {
    let (time_str, is_utc) = if let Some(stripped) = s.strip_suffix('Z') {
        (stripped, true)
    } else {
        (s, false)
    };

    if time_str.len() != 6 || !time_str.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::new(ParseErrorKind::InvalidTime, line, col));
    }

    let hour = time_str[0..2]
        .parse::<u8>()
        .map_err(|_| ParseError::new(ParseErrorKind::InvalidTime, line, col))?;
    let minute = time_str[2..4]
        .parse::<u8>()
        .map_err(|_| ParseError::new(ParseErrorKind::InvalidTime, line, col))?;
    let second = time_str[4..6]
        .parse::<u8>()
        .map_err(|_| ParseError::new(ParseErrorKind::InvalidTime, line, col))?;

    // Allow 60 for leap seconds
    if hour > 23 || minute > 59 || second > 60 {
        return Err(ParseError::new(ParseErrorKind::InvalidTime, line, col));
    }

    Ok((hour, minute, second, is_utc))
}

/// Parses a DATE-TIME value (RFC 5545 §3.3.5).
///
/// Format: YYYYMMDD"T"HHMMSS[Z] (e.g., "19970714T133000Z")
///
/// TZID is handled at the property level, not in the value itself.
///
/// ## Errors
/// Returns an error if the string is not a valid datetime format.
pub fn parse_datetime(
    s: &str,
    tzid: Option<&str>,
    line: usize,
    col: usize,
) -> ParseResult<DateTime> {
    let t_pos = s
        .find('T')
        .ok_or_else(|| ParseError::new(ParseErrorKind::InvalidDateTime, line, col))?;

    let date = parse_date(&s[..t_pos], line, col)
        .map_err(|_| ParseError::new(ParseErrorKind::InvalidDateTime, line, col).with_context(s))?;
    let (hour, minute, second, is_utc) = parse_time(&s[t_pos + 1..], line, col + t_pos + 1)?;

    let form = if is_utc {
        DateTimeForm::Utc
    } else if let Some(tz) = tzid {
        DateTimeForm::Zoned {
            tzid: tz.to_string(),
        }
    } else {
        DateTimeForm::Floating
    };

    Ok(DateTime {
        year: date.year,
        month: date.month,
        day: date.day,
        hour,
        minute,
        second,
        form,
    })
}

/// Parses a RECUR (RRULE) value (RFC 5545 §3.3.10).
///
/// `col` is the column of the first character of `s`; errors point at the
/// offending rule part.
///
/// ## Errors
/// Returns an error if the string is not a valid recurrence rule or carries a
/// rule part authored rules do not support.
pub fn parse_rrule(s: &str, line: usize, col: usize) -> ParseResult<RRule> {
    let mut rrule = RRule::new();
    let mut offset = 0;

    for part in s.split(';') {
        let part_col = col + offset;
        offset += part.len() + 1;

        if part.trim().is_empty() {
            continue;
        }

        let eq_pos = part.find('=').ok_or_else(|| {
            ParseError::new(ParseErrorKind::InvalidRRule, line, part_col).with_context(part)
        })?;

        let key = part[..eq_pos].trim();
        let value = part[eq_pos + 1..].trim();

        parse_rrule_part(&mut rrule, key, value, line, part_col)?;
    }

    Ok(rrule)
}

/// Parses a single RRULE key-value pair.
fn parse_rrule_part(
    rrule: &mut RRule,
    key: &str,
    value: &str,
    line: usize,
    col: usize,
) -> ParseResult<()> {
    match key.to_ascii_uppercase().as_str() {
        "FREQ" => {
            rrule.freq = Some(Frequency::parse(value).ok_or_else(|| {
                ParseError::new(ParseErrorKind::InvalidFrequency, line, col).with_context(value)
            })?);
        }
        "INTERVAL" => {
            rrule.interval = Some(
                value
                    .parse()
                    .map_err(|_| ParseError::new(ParseErrorKind::InvalidInterval, line, col))?,
            );
        }
        "COUNT" => parse_rrule_count(rrule, value, line, col)?,
        "UNTIL" => parse_rrule_until(rrule, value, line, col)?,
        "WKST" => {
            rrule.wkst = Some(
                Weekday::parse(value)
                    .ok_or_else(|| ParseError::new(ParseErrorKind::InvalidWeekday, line, col))?,
            );
        }
        "BYDAY" => rrule.by_day = parse_byday(value, line, col)?,
        "BYMONTHDAY" => rrule.by_monthday = parse_i8_list(value, line, col)?,
        "BYSETPOS" => rrule.by_setpos = parse_i16_list(value, line, col)?,
        unsupported @ ("BYSECOND" | "BYMINUTE" | "BYHOUR" | "BYYEARDAY" | "BYWEEKNO"
        | "BYMONTH" | "RSCALE" | "SKIP") => {
            return Err(
                ParseError::new(ParseErrorKind::UnsupportedRulePart, line, col)
                    .with_context(unsupported),
            );
        }
        other => {
            tracing::trace!(part = other, "Ignoring unknown rule part");
        }
    }
    Ok(())
}

/// Parses the COUNT component of an RRULE.
fn parse_rrule_count(rrule: &mut RRule, value: &str, line: usize, col: usize) -> ParseResult<()> {
    if rrule.until.is_some() {
        return Err(ParseError::new(
            ParseErrorKind::UntilCountConflict,
            line,
            col,
        ));
    }
    rrule.count = Some(
        value
            .parse()
            .map_err(|_| ParseError::new(ParseErrorKind::InvalidCount, line, col))?,
    );
    Ok(())
}

/// Parses the UNTIL component of an RRULE.
fn parse_rrule_until(rrule: &mut RRule, value: &str, line: usize, col: usize) -> ParseResult<()> {
    if rrule.count.is_some() {
        return Err(ParseError::new(
            ParseErrorKind::UntilCountConflict,
            line,
            col,
        ));
    }
    // UNTIL can be DATE or DATE-TIME
    if value.contains('T') {
        rrule.until = Some(RRuleUntil::DateTime(parse_datetime(
            value, None, line, col,
        )?));
    } else {
        rrule.until = Some(RRuleUntil::Date(parse_date(value, line, col)?));
    }
    Ok(())
}

/// Parses a comma-separated list of i8 values.
fn parse_i8_list(s: &str, line: usize, col: usize) -> ParseResult<Vec<i8>> {
    s.split(',')
        .map(|v| {
            v.trim()
                .parse()
                .map_err(|_| ParseError::new(ParseErrorKind::InvalidRRule, line, col).with_context(s))
        })
        .collect()
}

/// Parses a comma-separated list of i16 values.
fn parse_i16_list(s: &str, line: usize, col: usize) -> ParseResult<Vec<i16>> {
    s.split(',')
        .map(|v| {
            v.trim()
                .parse()
                .map_err(|_| ParseError::new(ParseErrorKind::InvalidRRule, line, col).with_context(s))
        })
        .collect()
}

/// Parses a BYDAY value (weekdays with optional ordinals).
fn parse_byday(s: &str, line: usize, col: usize) -> ParseResult<Vec<WeekdayNum>> {
    s.split(',')
        .map(|v| parse_weekday_num(v.trim(), line, col))
        .collect()
}

/// Parses a single weekday with optional ordinal (e.g., "MO", "1MO", "-1FR").
fn parse_weekday_num(s: &str, line: usize, col: usize) -> ParseResult<WeekdayNum> {
    // The weekday is always the last two characters
    if s.len() < 2 || !s.is_char_boundary(s.len() - 2) {
        return Err(ParseError::new(ParseErrorKind::InvalidWeekday, line, col).with_context(s));
    }

    let weekday_str = &s[s.len() - 2..];
    let ordinal_str = &s[..s.len() - 2];

    let weekday = Weekday::parse(weekday_str).ok_or_else(|| {
        ParseError::new(ParseErrorKind::InvalidWeekday, line, col).with_context(s)
    })?;

    let ordinal = if ordinal_str.is_empty() {
        None
    } else {
        let n: i8 = ordinal_str
            .parse()
            .map_err(|_| ParseError::new(ParseErrorKind::InvalidWeekday, line, col).with_context(s))?;
        if n == 0 || !(-53..=53).contains(&n) {
            return Err(ParseError::new(ParseErrorKind::InvalidWeekday, line, col).with_context(s));
        }
        Some(n)
    };

    Ok(WeekdayNum { ordinal, weekday })
}
