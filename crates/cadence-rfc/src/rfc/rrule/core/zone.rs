//! Timezone resolution and local-date conversion for rule dates.

use cadence_core::timezone::resolve_timezone;
use chrono::{LocalResult, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

use super::DateTime;

/// Error during timezone conversion.
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    /// Unknown or invalid timezone identifier.
    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),

    /// Invalid datetime value.
    #[error("Invalid datetime: {0}")]
    InvalidDateTime(String),
}

/// ## Summary
/// Resolves a TZID as written in a `DTSTART` parameter to a `chrono_tz::Tz`.
///
/// Windows zone names and client prefixes are accepted the same way as for the
/// configured display timezone.
///
/// ## Errors
/// Returns `ConversionError::UnknownTimezone` if the TZID cannot be resolved.
pub fn resolve_tzid(tzid: &str) -> Result<Tz, ConversionError> {
    resolve_timezone(tzid).map_err(|_e| ConversionError::UnknownTimezone(tzid.to_string()))
}

/// ## Summary
/// Returns the UTC instant of the start of `date` in `tz`.
///
/// Midnight can fall in a DST gap in a few zones; the wall clock is then
/// shifted forward hour by hour to the first instant that exists. For an
/// ambiguous midnight the earlier instant is used (RFC 5545 §3.3.5).
#[must_use]
pub fn local_midnight_utc(date: NaiveDate, tz: Tz) -> chrono::DateTime<Utc> {
    let midnight = NaiveDateTime::from(date);

    for hour in 0..24 {
        let candidate = midnight + chrono::Duration::hours(hour);
        match tz.from_local_datetime(&candidate) {
            LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => {
                return dt.with_timezone(&Utc);
            }
            LocalResult::None => {}
        }
    }

    // No zone skips a full day at midnight; treat the wall clock as UTC.
    Utc.from_utc_datetime(&midnight)
}

/// ## Summary
/// Returns the calendar date of a DATE-TIME as seen in `tz`.
///
/// UTC values are converted into `tz`, zoned values are converted from their
/// own TZID into `tz`, and floating values are read as wall-clock time in `tz`.
///
/// ## Errors
/// Returns an error if the value does not name a real instant or its TZID is unknown.
pub fn local_date(value: &DateTime, tz: Tz) -> Result<NaiveDate, ConversionError> {
    let naive = value
        .to_naive()
        .ok_or_else(|| ConversionError::InvalidDateTime(value.to_string()))?;

    if value.is_floating() {
        return Ok(naive.date());
    }

    let Some(tzid) = value.tzid() else {
        return Ok(Utc
            .from_utc_datetime(&naive)
            .with_timezone(&tz)
            .date_naive());
    };

    let source = resolve_tzid(tzid)?;
    let instant = match source.from_local_datetime(&naive) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => dt,
        // Inside a DST gap the wall clock still names the intended day
        LocalResult::None => return Ok(naive.date()),
    };
    Ok(instant.with_timezone(&tz).date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rfc::rrule::core::DateTimeForm;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_resolve_standard_timezone() {
        let tz = resolve_tzid("America/New_York").expect("should resolve");
        assert_eq!(tz, Tz::America__New_York);
    }

    #[test]
    fn test_resolve_unknown_timezone() {
        let err = resolve_tzid("Nowhere/Special").expect_err("should not resolve");
        assert!(matches!(err, ConversionError::UnknownTimezone(ref name) if name == "Nowhere/Special"));
    }

    #[test]
    fn test_resolve_windows_tzid() {
        let tz = resolve_tzid("Pacific Standard Time").expect("should resolve");
        assert_eq!(tz, Tz::America__Los_Angeles);
    }

    #[test]
    fn test_local_midnight_utc_basic() {
        let utc = local_midnight_utc(date(2024, 1, 15), Tz::America__New_York);
        assert_eq!(utc, Utc.with_ymd_and_hms(2024, 1, 15, 5, 0, 0).unwrap());
    }

    #[test]
    fn test_local_midnight_utc_summer_offset() {
        let utc = local_midnight_utc(date(2024, 7, 15), Tz::Europe__Berlin);
        assert_eq!(utc, Utc.with_ymd_and_hms(2024, 7, 14, 22, 0, 0).unwrap());
    }

    #[test]
    fn test_local_midnight_utc_in_dst_gap() {
        // Santiago springs forward at midnight: 2024-09-08 00:00 does not exist
        let utc = local_midnight_utc(date(2024, 9, 8), Tz::America__Santiago);
        let local = utc.with_timezone(&Tz::America__Santiago);
        assert_eq!(local.date_naive(), date(2024, 9, 8));
    }

    #[test]
    fn test_local_date_from_utc() {
        let value = DateTime::utc(2024, 1, 1, 3, 0, 0);
        assert_eq!(
            local_date(&value, Tz::America__Los_Angeles).unwrap(),
            date(2023, 12, 31)
        );
        assert_eq!(local_date(&value, Tz::UTC).unwrap(), date(2024, 1, 1));
    }

    #[test]
    fn test_local_date_from_floating() {
        let value = DateTime::floating(2024, 1, 1, 23, 0, 0);
        assert_eq!(
            local_date(&value, Tz::Asia__Tokyo).unwrap(),
            date(2024, 1, 1)
        );
    }

    #[test]
    fn test_local_date_from_zoned() {
        let value = DateTime {
            form: DateTimeForm::Zoned {
                tzid: "Asia/Tokyo".to_string(),
            },
            ..DateTime::floating(2024, 1, 1, 8, 0, 0)
        };
        // 08:00 Tokyo is 23:00 the previous day in UTC
        assert_eq!(local_date(&value, Tz::UTC).unwrap(), date(2023, 12, 31));
    }
}
