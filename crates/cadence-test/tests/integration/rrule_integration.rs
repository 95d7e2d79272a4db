use cadence_rfc::{Frequency, ParseErrorKind, RecurrenceOptions, SetPosition, Weekday};
use cadence_test::{ZONES, date};

include!(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/rrule_cases_data/mod.rs"));

/// ## Summary
/// Integration-level validation of describe, canonical form and expansion
/// using shared cases.
#[test_log::test]
fn rule_cases_integration() {
    for case in rule_cases() {
        assert_case(&case);
    }
}

#[test_log::test]
fn editor_options_round_trip_in_every_zone() {
    let options = [
        RecurrenceOptions::new(Frequency::Weekly)
            .with_weekdays([Weekday::Saturday, Weekday::Tuesday])
            .with_start_date(date(2024, 3, 31))
            .with_until(date(2024, 11, 3)),
        RecurrenceOptions::new(Frequency::Monthly)
            .with_interval(3)
            .with_month_days([29, 30, 31])
            .with_start_date(date(2024, 9, 8)),
        RecurrenceOptions::new(Frequency::Monthly)
            .with_weekday_ordinal(SetPosition::Fourth, Weekday::Thursday)
            .with_start_date(date(2024, 4, 7))
            .with_count(24),
        RecurrenceOptions::new(Frequency::Daily)
            .with_interval(7)
            .with_start_date(date(1999, 12, 31))
            .with_until(date(2000, 1, 1)),
    ];

    for tz in ZONES {
        for option in &options {
            let rule = build_rule(option, tz).unwrap();
            assert_eq!(&parse_rule(&rule, tz).unwrap(), option, "zone {tz}: {rule}");
        }
    }
}

#[test_log::test]
fn every_built_rule_is_accepted_by_rrule_crate() {
    let options = RecurrenceOptions::new(Frequency::Monthly)
        .with_weekday_ordinal(SetPosition::Last, Weekday::Sunday)
        .with_start_date(date(2024, 1, 1))
        .with_until(date(2024, 12, 31));

    for tz in ZONES {
        let rule = build_rule(&options, tz).unwrap();
        assert!(rule.parse::<rrule::RRuleSet>().is_ok(), "zone {tz}: {rule}");

        let dates = expand_rule(&rule, tz, &ExpansionOptions::default()).unwrap();
        assert_eq!(dates.len(), 12, "zone {tz}: {rule}");
    }
}

#[test_log::test]
fn options_from_json_build_a_rule() {
    let json = r#"{
        "frequency": "MONTHLY",
        "interval": 2,
        "monthly": { "kind": "by_month_days", "days": [1, 15] },
        "start_date": "2024-01-01",
        "count": 6
    }"#;
    let options: RecurrenceOptions = serde_json::from_str(json).unwrap();
    assert_eq!(
        build_rule(&options, Tz::UTC).unwrap(),
        "DTSTART:20240101T000000Z\nRRULE:FREQ=MONTHLY;INTERVAL=2;COUNT=6;BYMONTHDAY=1,15"
    );
}

#[test_log::test]
fn conflicting_strings_are_parse_errors() {
    let err = parse_rule("RRULE:FREQ=DAILY;UNTIL=20240101;COUNT=2", Tz::UTC).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::UntilCountConflict);

    let err = parse_rule(
        "RRULE:FREQ=MONTHLY;BYMONTHDAY=2;BYDAY=MO;BYSETPOS=2",
        Tz::UTC,
    )
    .unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::MonthDaySetPositionConflict);

    let err = parse_rule("RRULE:FREQ=DAILY;BYHOUR=9,17", Tz::UTC).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::UnsupportedRulePart);
}
