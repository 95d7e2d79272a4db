//! Timezone name resolution.
//!
//! Uses ICU4X for Windows timezone ID to IANA mapping and timezone canonicalization.

use std::str::FromStr;

use chrono_tz::Tz;
use icu::time::zone::WindowsParser;
use icu::time::zone::iana::IanaParserExtended;

use crate::error::{CoreError, CoreResult};

/// ## Summary
/// Resolves a timezone name to a `chrono_tz::Tz`.
///
/// Accepts IANA names and their aliases, Windows zone names and the
/// `/mozilla.org/` and `/softwarestudio.org/` prefixes some clients write in
/// a TZID. Surrounding whitespace is ignored.
///
/// ## Errors
/// Returns `CoreError::UnknownTimezone` with the name as given if it cannot be
/// resolved.
pub fn resolve_timezone(name: &str) -> CoreResult<Tz> {
    let normalized = normalize_tzid(name.trim());

    Tz::from_str(&normalized).map_err(|_e| CoreError::UnknownTimezone(name.to_string()))
}

/// Normalizes common CalDAV/iCalendar timezone identifiers to IANA names.
fn normalize_tzid(tzid: &str) -> String {
    let stripped = tzid
        .strip_prefix("/mozilla.org/")
        .or_else(|| tzid.strip_prefix("/softwarestudio.org/"))
        .unwrap_or(tzid);

    let windows_parser = WindowsParser::new();
    if let Some(tz) = windows_parser.parse(stripped, None) {
        let iana_parser = IanaParserExtended::new();
        for entry in iana_parser.iter() {
            if entry.time_zone == tz {
                return entry.canonical.to_string();
            }
        }
    }

    // Handles aliases like Europe/Kiev -> Europe/Kyiv
    let iana_parser = IanaParserExtended::new();
    let parsed = iana_parser.parse(stripped);
    if parsed.time_zone != icu::time::TimeZone::UNKNOWN {
        return parsed.canonical.to_string();
    }

    stripped.to_string()
}
