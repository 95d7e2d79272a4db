//! The serialized rule: an optional `DTSTART` line followed by an `RRULE` line.

use std::fmt;

use super::{Date, DateTime, RRule};

/// `DTSTART` value (RFC 5545 §3.8.2.4).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DtStart {
    /// `DTSTART;VALUE=DATE:YYYYMMDD`
    Date(Date),
    /// `DTSTART:...Z`, `DTSTART;TZID=...:...` or floating.
    DateTime(DateTime),
}

impl fmt::Display for DtStart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date(date) => write!(f, "DTSTART;VALUE=DATE:{date}"),
            Self::DateTime(dt) => match dt.tzid() {
                Some(tzid) => write!(f, "DTSTART;TZID={tzid}:{dt}"),
                None => write!(f, "DTSTART:{dt}"),
            },
        }
    }
}

/// A parsed or to-be-serialized rule string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleDocument {
    pub dtstart: Option<DtStart>,
    pub rrule: RRule,
}

impl RuleDocument {
    /// Creates a document without a start.
    #[must_use]
    pub fn new(rrule: RRule) -> Self {
        Self {
            dtstart: None,
            rrule,
        }
    }
}

impl fmt::Display for RuleDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref dtstart) = self.dtstart {
            writeln!(f, "{dtstart}")?;
        }
        write!(f, "RRULE:{}", self.rrule)
    }
}
