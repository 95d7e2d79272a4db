use cadence_rfc::{ExpansionOptions, build_rule, describe, expand_rule, parse_rule};
use chrono::DateTime;
use chrono_tz::Tz;

pub struct RuleCase {
    pub name: &'static str,
    pub rule: &'static str,
    pub timezone: Tz,
    pub text: &'static str,
    /// Builder output after parsing `rule`, when it differs from `rule`.
    pub canonical: Option<&'static str>,
    /// Leading occurrences; empty when the rule has no start.
    pub occurrences: &'static [&'static str],
}

pub fn rule_cases() -> Vec<RuleCase> {
    vec![
        RuleCase {
            name: "daily_count",
            rule: "DTSTART:20240101T000000Z\nRRULE:FREQ=DAILY;COUNT=5",
            timezone: Tz::UTC,
            text: "Repeats daily for 5 occurrences starting 2024-01-01 ",
            canonical: None,
            occurrences: &["2024-01-01T00:00:00+00:00", "2024-01-02T00:00:00+00:00"],
        },
        RuleCase {
            name: "weekly_days_reordered",
            rule: "DTSTART:20240101T000000Z\nRRULE:FREQ=WEEKLY;INTERVAL=2;BYDAY=WE,MO",
            timezone: Tz::UTC,
            text: "Repeats every 2 weeks on MO, WE starting 2024-01-01 ",
            canonical: Some("DTSTART:20240101T000000Z\nRRULE:FREQ=WEEKLY;INTERVAL=2;BYDAY=MO,WE"),
            occurrences: &[
                "2024-01-01T00:00:00+00:00",
                "2024-01-03T00:00:00+00:00",
                "2024-01-15T00:00:00+00:00",
            ],
        },
        RuleCase {
            name: "monthly_month_days",
            rule: "DTSTART:20240101T000000Z\nRRULE:FREQ=MONTHLY;BYMONTHDAY=1,15",
            timezone: Tz::UTC,
            text: "Repeats monthly on the 1st, 15th of the month starting 2024-01-01 ",
            canonical: None,
            occurrences: &[
                "2024-01-01T00:00:00+00:00",
                "2024-01-15T00:00:00+00:00",
                "2024-02-01T00:00:00+00:00",
            ],
        },
        RuleCase {
            name: "monthly_last_friday_ordinal_form",
            rule: "DTSTART:20240101T000000Z\nRRULE:FREQ=MONTHLY;BYDAY=-1FR;COUNT=3",
            timezone: Tz::UTC,
            text: "Repeats monthly on the last Friday of the month for 3 occurrences starting 2024-01-01 ",
            canonical: Some(
                "DTSTART:20240101T000000Z\nRRULE:FREQ=MONTHLY;COUNT=3;BYDAY=FR;BYSETPOS=-1",
            ),
            occurrences: &[
                "2024-01-26T00:00:00+00:00",
                "2024-02-23T00:00:00+00:00",
                "2024-03-29T00:00:00+00:00",
            ],
        },
        RuleCase {
            name: "zoned_start_across_dst",
            rule: "DTSTART;TZID=America/New_York:20240301T000000\n\
                   RRULE:FREQ=WEEKLY;BYDAY=FR;UNTIL=20240315T040000Z",
            timezone: Tz::America__New_York,
            text: "Repeats weekly on FR starting 2024-03-01 until 2024-03-15 ",
            canonical: Some(
                "DTSTART:20240301T050000Z\nRRULE:FREQ=WEEKLY;UNTIL=20240315T040000Z;BYDAY=FR",
            ),
            occurrences: &[
                "2024-03-01T05:00:00+00:00",
                "2024-03-08T05:00:00+00:00",
                "2024-03-15T04:00:00+00:00",
            ],
        },
        RuleCase {
            name: "date_start_tokyo",
            rule: "DTSTART;VALUE=DATE:20240701\nRRULE:FREQ=DAILY;INTERVAL=10;UNTIL=20240731",
            timezone: Tz::Asia__Tokyo,
            text: "Repeats every 10 days starting 2024-07-01 until 2024-07-31 ",
            canonical: Some(
                "DTSTART:20240630T150000Z\nRRULE:FREQ=DAILY;INTERVAL=10;UNTIL=20240730T150000Z",
            ),
            occurrences: &[
                "2024-06-30T15:00:00+00:00",
                "2024-07-10T15:00:00+00:00",
                "2024-07-20T15:00:00+00:00",
                "2024-07-30T15:00:00+00:00",
            ],
        },
        RuleCase {
            name: "single_weekly_occurrence",
            rule: "RRULE:FREQ=WEEKLY;COUNT=1;BYDAY=SU",
            timezone: Tz::UTC,
            text: "Repeats weekly on SU for 1 occurrence ",
            canonical: None,
            occurrences: &[],
        },
        RuleCase {
            name: "bare_yearly_value",
            rule: "FREQ=YEARLY;INTERVAL=2",
            timezone: Tz::UTC,
            text: "Repeats ",
            canonical: Some("RRULE:FREQ=YEARLY;INTERVAL=2"),
            occurrences: &[],
        },
    ]
}

fn parse_rfc3339(value: &str) -> i64 {
    DateTime::parse_from_rfc3339(value)
        .unwrap_or_else(|err| panic!("Invalid RFC3339 value {value}: {err}"))
        .timestamp()
}

pub fn assert_case(case: &RuleCase) {
    tracing::debug!(case = case.name, "Checking rule case");

    let text = describe(case.rule, case.timezone)
        .unwrap_or_else(|err| panic!("Failed to describe {}: {}", case.name, err));
    assert_eq!(text, case.text, "Case {} text did not match", case.name);

    let options = parse_rule(case.rule, case.timezone)
        .unwrap_or_else(|err| panic!("Failed to parse {}: {}", case.name, err));
    let rebuilt = build_rule(&options, case.timezone)
        .unwrap_or_else(|err| panic!("Failed to build {}: {}", case.name, err));
    assert_eq!(
        rebuilt,
        case.canonical.unwrap_or(case.rule),
        "Case {} canonical form did not match",
        case.name
    );

    if case.occurrences.is_empty() {
        return;
    }

    let limit = u16::try_from(case.occurrences.len()).unwrap_or(u16::MAX);
    let actual: Vec<i64> = expand_rule(
        case.rule,
        case.timezone,
        &ExpansionOptions::default().with_max_instances(limit),
    )
    .unwrap_or_else(|err| panic!("Failed to expand {}: {}", case.name, err))
    .iter()
    .map(DateTime::timestamp)
    .collect();
    let expected: Vec<i64> = case.occurrences.iter().map(|v| parse_rfc3339(v)).collect();
    assert_eq!(actual, expected, "Case {} occurrences did not match", case.name);
}
