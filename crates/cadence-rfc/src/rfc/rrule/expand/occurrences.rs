//! RRULE expansion using the `rrule` crate.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::error::RuleResult;
use crate::rfc::rrule::build::{serialize, to_document};
use crate::rfc::rrule::core::{DateTime as RuleDateTime, DateTimeForm, DtStart, ValidationError};
use crate::rfc::rrule::parse::parse_rule;

/// Options for recurrence expansion.
#[derive(Debug, Clone)]
pub struct ExpansionOptions {
    /// Maximum number of occurrences to generate.
    pub max_instances: u16,

    /// Start of time range filter.
    pub range_start: Option<DateTime<Utc>>,

    /// End of time range filter.
    pub range_end: Option<DateTime<Utc>>,
}

impl Default for ExpansionOptions {
    fn default() -> Self {
        Self {
            max_instances: 100,
            range_start: None,
            range_end: None,
        }
    }
}

impl ExpansionOptions {
    /// Creates expansion options with a time range.
    #[must_use]
    pub fn with_range(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            range_start: Some(start),
            range_end: Some(end),
            ..Self::default()
        }
    }

    /// Sets the maximum number of instances.
    #[must_use]
    pub fn with_max_instances(mut self, max: u16) -> Self {
        self.max_instances = max;
        self
    }
}

/// ## Summary
/// Expands a serialized rule into occurrence instants.
///
/// The rule is parsed with dates read in `tz` and re-serialized with a
/// `DTSTART;TZID=` start, so occurrences keep local midnight across DST
/// transitions.
///
/// ## Errors
///
/// Returns an error if:
/// - the rule cannot be parsed
/// - the rule has no start date
/// - the `rrule` engine rejects the rule
#[tracing::instrument(skip(serialized, options), fields(max_instances = options.max_instances))]
pub fn expand_rule(
    serialized: &str,
    tz: Tz,
    options: &ExpansionOptions,
) -> RuleResult<Vec<DateTime<Utc>>> {
    let recurrence = parse_rule(serialized, tz)?;
    let mut document = to_document(&recurrence, tz)?;

    let Some(DtStart::DateTime(start)) = document.dtstart.take() else {
        return Err(ValidationError::MissingStartDate.into());
    };
    document.dtstart = Some(DtStart::DateTime(zoned_start(start, tz)));

    let mut rrule_set = serialize(&document).parse::<rrule::RRuleSet>()?;

    if let Some(start) = options.range_start {
        rrule_set = rrule_set.after(start.with_timezone(&rrule::Tz::Tz(chrono_tz::UTC)));
    }
    if let Some(end) = options.range_end {
        rrule_set = rrule_set.before(end.with_timezone(&rrule::Tz::Tz(chrono_tz::UTC)));
    }

    let result = rrule_set.all(options.max_instances);
    let occurrences: Vec<DateTime<Utc>> = result
        .dates
        .into_iter()
        .map(|dt| dt.with_timezone(&Utc))
        .collect();

    tracing::debug!(
        count = occurrences.len(),
        limited = result.limited,
        "Expanded recurrence rule"
    );

    Ok(occurrences)
}

/// Rewrites a UTC start as local wall-clock time in `tz`.
fn zoned_start(start: RuleDateTime, tz: Tz) -> RuleDateTime {
    if tz == Tz::UTC {
        return start;
    }
    let Some(local) = start
        .to_naive()
        .map(|naive| naive.and_utc().with_timezone(&tz).naive_local())
    else {
        return start;
    };
    let Some(mut zoned) = RuleDateTime::from_chrono_utc(local.and_utc()) else {
        return start;
    };
    zoned.form = DateTimeForm::Zoned {
        tzid: tz.name().to_string(),
    };
    zoned
}
