//! iCalendar DATE and DATE-TIME value types (RFC 5545 §3.3.4, §3.3.5).

use std::fmt;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike, Utc};

/// DATE value (RFC 5545 §3.3.4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Date {
    /// Year (e.g., 2026).
    pub year: u16,
    /// Month (1-12).
    pub month: u8,
    /// Day of month (1-31).
    pub day: u8,
}

impl Date {
    /// Creates a new date.
    #[must_use]
    pub const fn new(year: u16, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Converts to a calendar date, or `None` if the day does not exist.
    #[must_use]
    pub fn to_naive(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(
            i32::from(self.year),
            u32::from(self.month),
            u32::from(self.day),
        )
    }

    /// Creates a DATE from a calendar date, or `None` outside years 0..=9999.
    #[must_use]
    pub fn from_naive(date: NaiveDate) -> Option<Self> {
        let year = u16::try_from(date.year()).ok().filter(|y| *y <= 9999)?;
        let month = u8::try_from(date.month()).ok()?;
        let day = u8::try_from(date.day()).ok()?;
        Some(Self { year, month, day })
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}{:02}{:02}", self.year, self.month, self.day)
    }
}

/// Form of DATE-TIME value (RFC 5545 §3.3.5).
///
/// iCalendar DATE-TIME values come in three mutually exclusive forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateTimeForm {
    /// Floating time - same wall-clock time in any timezone.
    ///
    /// Example: `19980118T230000`
    Floating,

    /// UTC time - absolute instant, indicated by 'Z' suffix.
    ///
    /// Example: `19980119T070000Z`
    Utc,

    /// Zoned time - local time with TZID reference.
    ///
    /// Example: `TZID=America/New_York:19980119T020000`
    Zoned {
        /// The timezone identifier as written.
        tzid: String,
    },
}

/// DATE-TIME value (RFC 5545 §3.3.5).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateTime {
    /// Year (e.g., 2026).
    pub year: u16,
    /// Month (1-12).
    pub month: u8,
    /// Day of month (1-31).
    pub day: u8,
    /// Hour (0-23).
    pub hour: u8,
    /// Minute (0-59).
    pub minute: u8,
    /// Second (0-60, allowing for leap seconds).
    pub second: u8,
    /// The form of this DATE-TIME (floating, UTC, or zoned).
    pub form: DateTimeForm,
}

impl DateTime {
    /// Creates a floating DATE-TIME.
    #[must_use]
    #[expect(
        clippy::too_many_arguments,
        reason = "Constructor mirrors RFC 5545 DATE-TIME components"
    )]
    pub fn floating(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            form: DateTimeForm::Floating,
        }
    }

    /// Creates a UTC DATE-TIME.
    #[must_use]
    #[expect(
        clippy::too_many_arguments,
        reason = "Constructor mirrors RFC 5545 DATE-TIME components"
    )]
    pub fn utc(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            form: DateTimeForm::Utc,
        }
    }

    /// Creates a UTC DATE-TIME from a `chrono` instant.
    ///
    /// Returns `None` outside years 0..=9999.
    #[must_use]
    pub fn from_chrono_utc(instant: chrono::DateTime<Utc>) -> Option<Self> {
        let date = Date::from_naive(instant.date_naive())?;
        let time = instant.time();
        Some(Self {
            year: date.year,
            month: date.month,
            day: date.day,
            hour: u8::try_from(time.hour()).ok()?,
            minute: u8::try_from(time.minute()).ok()?,
            second: u8::try_from(time.second()).ok()?,
            form: DateTimeForm::Utc,
        })
    }

    /// Returns whether this is a UTC time.
    #[must_use]
    pub fn is_utc(&self) -> bool {
        matches!(self.form, DateTimeForm::Utc)
    }

    /// Returns whether this is a floating time.
    #[must_use]
    pub fn is_floating(&self) -> bool {
        matches!(self.form, DateTimeForm::Floating)
    }

    /// Returns the timezone ID if this is a zoned time.
    #[must_use]
    pub fn tzid(&self) -> Option<&str> {
        match &self.form {
            DateTimeForm::Zoned { tzid } => Some(tzid),
            _ => None,
        }
    }

    /// Returns the date component.
    #[must_use]
    pub const fn date(&self) -> Date {
        Date::new(self.year, self.month, self.day)
    }

    /// Returns the wall-clock value, or `None` if it does not exist.
    ///
    /// A leap second (60) is clamped to 59.
    #[must_use]
    pub fn to_naive(&self) -> Option<NaiveDateTime> {
        self.date().to_naive()?.and_hms_opt(
            u32::from(self.hour),
            u32::from(self.minute),
            u32::from(self.second.min(59)),
        )
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}{:02}{:02}T{:02}{:02}{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )?;
        if self.is_utc() {
            write!(f, "Z")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn date_display() {
        assert_eq!(Date::new(2024, 1, 5).to_string(), "20240105");
    }

    #[test]
    fn date_naive_round_trip() {
        let naive = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        let date = Date::from_naive(naive).unwrap();
        assert_eq!(date, Date::new(2024, 2, 29));
        assert_eq!(date.to_naive(), Some(naive));
    }

    #[test]
    fn date_to_naive_rejects_impossible_day() {
        assert_eq!(Date::new(2023, 2, 29).to_naive(), None);
    }

    #[test]
    fn datetime_display() {
        let dt = DateTime::utc(2026, 1, 23, 12, 0, 0);
        assert_eq!(dt.to_string(), "20260123T120000Z");

        let dt = DateTime::floating(2026, 1, 23, 12, 0, 0);
        assert_eq!(dt.to_string(), "20260123T120000");
    }

    #[test]
    fn datetime_from_chrono_utc() {
        let instant = Utc.with_ymd_and_hms(2024, 3, 10, 5, 30, 15).unwrap();
        let dt = DateTime::from_chrono_utc(instant).unwrap();
        assert_eq!(dt, DateTime::utc(2024, 3, 10, 5, 30, 15));
    }

    #[test]
    fn datetime_to_naive_clamps_leap_second() {
        let dt = DateTime::floating(2016, 12, 31, 23, 59, 60);
        let naive = dt.to_naive().unwrap();
        assert_eq!(naive.second(), 59);
    }
}
