//! Structured recurrence options as edited by a rule authoring form.

use std::collections::BTreeSet;
use std::fmt;

use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use super::{Frequency, Weekday};

/// Ordinal selecting the Nth (or last) matching weekday in a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i16", into = "i16")]
pub enum SetPosition {
    First,
    Second,
    Third,
    Fourth,
    Last,
}

impl SetPosition {
    /// Maps an RRULE ordinal to a position.
    ///
    /// `1..=4` map directly and anything below 1 means "last". Ordinals above
    /// 4 have no position.
    #[must_use]
    pub const fn from_ordinal(ordinal: i16) -> Option<Self> {
        match ordinal {
            1 => Some(Self::First),
            2 => Some(Self::Second),
            3 => Some(Self::Third),
            4 => Some(Self::Fourth),
            n if n < 1 => Some(Self::Last),
            _ => None,
        }
    }

    /// Returns the RRULE ordinal for this position.
    #[must_use]
    pub const fn ordinal(self) -> i16 {
        match self {
            Self::First => 1,
            Self::Second => 2,
            Self::Third => 3,
            Self::Fourth => 4,
            Self::Last => -1,
        }
    }

    /// Returns the position as an English word.
    #[must_use]
    pub const fn word(self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Second => "second",
            Self::Third => "third",
            Self::Fourth => "fourth",
            Self::Last => "last",
        }
    }
}

impl TryFrom<i16> for SetPosition {
    type Error = ValidationError;

    fn try_from(ordinal: i16) -> Result<Self, Self::Error> {
        Self::from_ordinal(ordinal).ok_or(ValidationError::SetPositionOutOfRange(ordinal))
    }
}

impl From<SetPosition> for i16 {
    fn from(position: SetPosition) -> Self {
        position.ordinal()
    }
}

impl fmt::Display for SetPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.word())
    }
}

/// How a monthly rule picks its days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MonthlyRule {
    /// Fixed days of the month, in the order they were chosen.
    ByMonthDays { days: Vec<u8> },
    /// The Nth (or last) given weekday of the month.
    ByWeekdayOrdinal {
        position: SetPosition,
        weekday: Weekday,
    },
}

/// How a recurrence terminates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum EndCondition {
    Never,
    OnDate(NaiveDate),
    AfterOccurrences(u32),
}

/// Invariant violations in caller-supplied [`RecurrenceOptions`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("UNTIL and COUNT are mutually exclusive")]
    UntilCountConflict,

    #[error("interval must be at least 1")]
    ZeroInterval,

    #[error("count must be at least 1")]
    ZeroCount,

    #[error("month-day list is empty")]
    EmptyMonthDays,

    #[error("day of month {0} is outside 1..=31")]
    MonthDayOutOfRange(u8),

    #[error("set position {0} is not one of 1, 2, 3, 4 or last")]
    SetPositionOutOfRange(i16),

    #[error("monthly day selection is not allowed for {0} rules")]
    MonthlyRuleFrequency(Frequency),

    #[error("an Nth-weekday rule cannot be combined with a weekday set")]
    OrdinalWithWeekdaySet,

    #[error("date {0} cannot be written as an iCalendar date")]
    UnrepresentableDate(NaiveDate),

    #[error("a start date is required to expand occurrences")]
    MissingStartDate,
}

/// ## Summary
/// A structured recurrence rule.
///
/// `until` and `count` are kept as two fields so that a form can hold either
/// while it is being edited; [`validate`](Self::validate) rejects a value
/// carrying both. Month-day and Nth-weekday selection are exclusive by
/// construction through [`MonthlyRule`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurrenceOptions {
    pub frequency: Frequency,
    #[serde(default = "default_interval")]
    pub interval: u32,
    #[serde(default)]
    pub by_weekday: BTreeSet<Weekday>,
    #[serde(default)]
    pub monthly: Option<MonthlyRule>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub until: Option<NaiveDate>,
    #[serde(default)]
    pub count: Option<u32>,
}

const fn default_interval() -> u32 {
    1
}

impl RecurrenceOptions {
    /// Creates options repeating at `frequency` every period, with no bounds.
    #[must_use]
    pub fn new(frequency: Frequency) -> Self {
        Self {
            frequency,
            interval: default_interval(),
            by_weekday: BTreeSet::new(),
            monthly: None,
            start_date: None,
            until: None,
            count: None,
        }
    }

    /// ## Summary
    /// Creates options starting on the current date in `tz`.
    ///
    /// ## Side Effects
    /// Reads the system clock.
    #[must_use]
    pub fn starting_today(frequency: Frequency, tz: Tz) -> Self {
        let today = Utc::now().with_timezone(&tz).date_naive();
        Self::new(frequency).with_start_date(today)
    }

    /// Sets the interval.
    #[must_use]
    pub fn with_interval(mut self, interval: u32) -> Self {
        self.interval = interval;
        self
    }

    /// Replaces the weekday set.
    #[must_use]
    pub fn with_weekdays(mut self, days: impl IntoIterator<Item = Weekday>) -> Self {
        self.by_weekday = days.into_iter().collect();
        self
    }

    /// Selects fixed days of the month.
    #[must_use]
    pub fn with_month_days(mut self, days: impl IntoIterator<Item = u8>) -> Self {
        self.monthly = Some(MonthlyRule::ByMonthDays {
            days: days.into_iter().collect(),
        });
        self
    }

    /// Selects the Nth (or last) weekday of the month.
    #[must_use]
    pub fn with_weekday_ordinal(mut self, position: SetPosition, weekday: Weekday) -> Self {
        self.monthly = Some(MonthlyRule::ByWeekdayOrdinal { position, weekday });
        self
    }

    /// Sets the start date.
    #[must_use]
    pub fn with_start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    /// Sets the until date. Does not clear `count`.
    #[must_use]
    pub fn with_until(mut self, date: NaiveDate) -> Self {
        self.until = Some(date);
        self
    }

    /// Sets the occurrence count. Does not clear `until`.
    #[must_use]
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    /// Sets `until`/`count` from an end condition, clearing the other.
    #[must_use]
    pub fn with_end(mut self, end: EndCondition) -> Self {
        (self.until, self.count) = match end {
            EndCondition::Never => (None, None),
            EndCondition::OnDate(date) => (Some(date), None),
            EndCondition::AfterOccurrences(count) => (None, Some(count)),
        };
        self
    }

    /// Returns the end condition. A value carrying both bounds reports the date.
    #[must_use]
    pub fn end(&self) -> EndCondition {
        match (self.until, self.count) {
            (Some(date), _) => EndCondition::OnDate(date),
            (None, Some(count)) => EndCondition::AfterOccurrences(count),
            (None, None) => EndCondition::Never,
        }
    }

    /// Returns the selected days of the month, empty when unset.
    #[must_use]
    pub fn by_month_day(&self) -> &[u8] {
        match &self.monthly {
            Some(MonthlyRule::ByMonthDays { days }) => days,
            _ => &[],
        }
    }

    /// Returns the Nth-weekday selection, if any.
    #[must_use]
    pub fn by_set_position(&self) -> Option<(SetPosition, Weekday)> {
        match self.monthly {
            Some(MonthlyRule::ByWeekdayOrdinal { position, weekday }) => Some((position, weekday)),
            _ => None,
        }
    }

    /// ## Summary
    /// Checks the invariants a rule must satisfy before it is serialized.
    ///
    /// ## Errors
    /// Returns the first violated invariant.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.until.is_some() && self.count.is_some() {
            return Err(ValidationError::UntilCountConflict);
        }
        if self.interval == 0 {
            return Err(ValidationError::ZeroInterval);
        }
        if self.count == Some(0) {
            return Err(ValidationError::ZeroCount);
        }

        match &self.monthly {
            None => {}
            Some(_) if self.frequency != Frequency::Monthly => {
                return Err(ValidationError::MonthlyRuleFrequency(self.frequency));
            }
            Some(MonthlyRule::ByMonthDays { days }) => {
                if days.is_empty() {
                    return Err(ValidationError::EmptyMonthDays);
                }
                if let Some(day) = days.iter().find(|d| !(1..=31).contains(*d)) {
                    return Err(ValidationError::MonthDayOutOfRange(*day));
                }
            }
            Some(MonthlyRule::ByWeekdayOrdinal { .. }) => {
                if !self.by_weekday.is_empty() {
                    return Err(ValidationError::OrdinalWithWeekdaySet);
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "options_tests.rs"]
mod tests;
