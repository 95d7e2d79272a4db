//! Rule parsing error types.

use std::fmt;

/// Result type for rule parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Error type for rule parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// Kind of error.
    pub kind: ParseErrorKind,
    /// Line number where the error occurred (1-based).
    pub line: usize,
    /// Column number where the error occurred (1-based).
    pub column: usize,
    /// Additional context about the error.
    pub context: Option<String>,
}

impl ParseError {
    /// Creates a new parse error.
    #[must_use]
    pub fn new(kind: ParseErrorKind, line: usize, column: usize) -> Self {
        Self {
            kind,
            line,
            column,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at line {}, column {}", self.kind, self.line, self.column)?;
        if let Some(ref ctx) = self.context {
            write!(f, ": {ctx}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

/// Kinds of parse errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Input contains no content lines.
    EmptyInput,
    /// Missing property name.
    MissingPropertyName,
    /// Invalid property name character.
    InvalidPropertyName,
    /// Missing colon separator.
    MissingColon,
    /// Invalid parameter format.
    InvalidParameter,
    /// Unclosed quoted string.
    UnclosedQuote,
    /// Property other than DTSTART or RRULE.
    UnsupportedProperty,
    /// Property appears more than once.
    DuplicateProperty,
    /// No RRULE line present.
    MissingRRule,
    /// Invalid date format.
    InvalidDate,
    /// Invalid time format.
    InvalidTime,
    /// Invalid date-time format.
    InvalidDateTime,
    /// Unknown TZID.
    UnknownTimezone,
    /// Invalid recurrence rule.
    InvalidRRule,
    /// FREQ rule part is missing.
    MissingFrequency,
    /// Invalid frequency.
    InvalidFrequency,
    /// Invalid or zero interval.
    InvalidInterval,
    /// Invalid or zero count.
    InvalidCount,
    /// Invalid weekday.
    InvalidWeekday,
    /// UNTIL and COUNT are mutually exclusive.
    UntilCountConflict,
    /// Rule part that authored rules cannot carry.
    UnsupportedRulePart,
    /// Day of month outside 1..=31.
    InvalidMonthDay,
    /// Set position outside 1..=4 or last.
    InvalidSetPosition,
    /// BYMONTHDAY and BYSETPOS are mutually exclusive.
    MonthDaySetPositionConflict,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "empty input"),
            Self::MissingPropertyName => write!(f, "missing property name"),
            Self::InvalidPropertyName => write!(f, "invalid property name"),
            Self::MissingColon => write!(f, "missing colon separator"),
            Self::InvalidParameter => write!(f, "invalid parameter format"),
            Self::UnclosedQuote => write!(f, "unclosed quoted string"),
            Self::UnsupportedProperty => write!(f, "unsupported property"),
            Self::DuplicateProperty => write!(f, "duplicate property"),
            Self::MissingRRule => write!(f, "missing RRULE"),
            Self::InvalidDate => write!(f, "invalid date format"),
            Self::InvalidTime => write!(f, "invalid time format"),
            Self::InvalidDateTime => write!(f, "invalid date-time format"),
            Self::UnknownTimezone => write!(f, "unknown timezone"),
            Self::InvalidRRule => write!(f, "invalid recurrence rule"),
            Self::MissingFrequency => write!(f, "missing frequency"),
            Self::InvalidFrequency => write!(f, "invalid frequency"),
            Self::InvalidInterval => write!(f, "invalid interval"),
            Self::InvalidCount => write!(f, "invalid count"),
            Self::InvalidWeekday => write!(f, "invalid weekday"),
            Self::UntilCountConflict => write!(f, "UNTIL and COUNT are mutually exclusive"),
            Self::UnsupportedRulePart => write!(f, "unsupported rule part"),
            Self::InvalidMonthDay => write!(f, "invalid day of month"),
            Self::InvalidSetPosition => write!(f, "invalid set position"),
            Self::MonthDaySetPositionConflict => {
                write!(f, "BYMONTHDAY and BYSETPOS are mutually exclusive")
            }
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
