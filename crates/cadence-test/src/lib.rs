//! Integration test support for the cadence workspace.
//!
//! Re-exports the workspace crates and shared helpers used by the
//! integration tests.

use chrono::NaiveDate;
use chrono_tz::Tz;

pub use cadence_core as core;
pub use cadence_rfc as rfc;

/// Zones exercised by cross-zone tests, with and without daylight saving time.
pub const ZONES: [Tz; 6] = [
    Tz::UTC,
    Tz::America__New_York,
    Tz::America__Santiago,
    Tz::Europe__Berlin,
    Tz::Asia__Kolkata,
    Tz::Pacific__Auckland,
];

/// ## Summary
/// Builds a calendar date.
///
/// ## Panics
/// Panics if the date does not exist.
#[must_use]
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap_or_else(|| panic!("invalid test date {year}-{month}-{day}"))
}
