//! Tests for rule parse errors.

use super::*;

#[test]
fn test_parse_error_new() {
    let error = ParseError::new(ParseErrorKind::EmptyInput, 10, 5);
    assert_eq!(error.kind, ParseErrorKind::EmptyInput);
    assert_eq!(error.line, 10);
    assert_eq!(error.column, 5);
    assert!(error.context.is_none());
}

#[test]
fn test_parse_error_with_context() {
    let error =
        ParseError::new(ParseErrorKind::InvalidDate, 3, 2).with_context("Expected YYYYMMDD format");

    assert_eq!(error.kind, ParseErrorKind::InvalidDate);
    assert_eq!(error.context.as_deref(), Some("Expected YYYYMMDD format"));
}

#[test]
fn test_parse_error_display() {
    let error = ParseError::new(ParseErrorKind::MissingColon, 1, 10);
    let display = format!("{error}");
    assert!(display.contains("missing colon separator"));
    assert!(display.contains("line 1"));
    assert!(display.contains("column 10"));
}

#[test]
fn test_parse_error_display_with_context() {
    let error = ParseError::new(ParseErrorKind::UnsupportedRulePart, 2, 15)
        .with_context("BYHOUR");
    let display = format!("{error}");
    assert!(display.contains("unsupported rule part"));
    assert!(display.contains("line 2"));
    assert!(display.ends_with(": BYHOUR"));
}

#[test]
fn test_all_error_kinds_display() {
    let kinds = [
        (ParseErrorKind::EmptyInput, "empty input"),
        (ParseErrorKind::MissingPropertyName, "missing property name"),
        (ParseErrorKind::InvalidPropertyName, "invalid property name"),
        (ParseErrorKind::MissingColon, "missing colon separator"),
        (ParseErrorKind::InvalidParameter, "invalid parameter format"),
        (ParseErrorKind::UnclosedQuote, "unclosed quoted string"),
        (ParseErrorKind::UnsupportedProperty, "unsupported property"),
        (ParseErrorKind::DuplicateProperty, "duplicate property"),
        (ParseErrorKind::MissingRRule, "missing RRULE"),
        (ParseErrorKind::InvalidDate, "invalid date format"),
        (ParseErrorKind::InvalidTime, "invalid time format"),
        (ParseErrorKind::InvalidDateTime, "invalid date-time format"),
        (ParseErrorKind::UnknownTimezone, "unknown timezone"),
        (ParseErrorKind::InvalidRRule, "invalid recurrence rule"),
        (ParseErrorKind::MissingFrequency, "missing frequency"),
        (ParseErrorKind::InvalidFrequency, "invalid frequency"),
        (ParseErrorKind::InvalidInterval, "invalid interval"),
        (ParseErrorKind::InvalidCount, "invalid count"),
        (ParseErrorKind::InvalidWeekday, "invalid weekday"),
        (
            ParseErrorKind::UntilCountConflict,
            "UNTIL and COUNT are mutually exclusive",
        ),
        (ParseErrorKind::UnsupportedRulePart, "unsupported rule part"),
        (ParseErrorKind::InvalidMonthDay, "invalid day of month"),
        (ParseErrorKind::InvalidSetPosition, "invalid set position"),
        (
            ParseErrorKind::MonthDaySetPositionConflict,
            "BYMONTHDAY and BYSETPOS are mutually exclusive",
        ),
    ];

    for (kind, expected) in kinds {
        let display = format!("{kind}");
        assert_eq!(display, expected, "Mismatch for {kind:?}");
    }
}

#[test]
fn test_parse_error_is_error_trait() {
    let error = ParseError::new(ParseErrorKind::InvalidCount, 2, 3);
    let _: &dyn std::error::Error = &error;
}
