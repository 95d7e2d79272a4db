use cadence_core::config::Settings;
use cadence_rfc::error::RuleError;
use cadence_rfc::{
    Frequency, RecurrenceOptions, RuleDescriber, SetPosition, ValidationError, Weekday,
    build_rule, describe, describe_options, ordinal,
};
use cadence_test::{ZONES, date};
use chrono_tz::Tz;

#[test]
fn ordinal_table() {
    let expected = [
        (1, "1st"),
        (2, "2nd"),
        (3, "3rd"),
        (4, "4th"),
        (11, "11th"),
        (12, "12th"),
        (13, "13th"),
        (21, "21st"),
        (22, "22nd"),
        (23, "23rd"),
        (101, "101st"),
        (111, "111th"),
    ];
    for (n, text) in expected {
        assert_eq!(ordinal(n), text);
    }
}

#[test_log::test]
fn built_rules_describe_the_same_as_their_options() {
    let options = [
        RecurrenceOptions::new(Frequency::Daily)
            .with_count(5)
            .with_start_date(date(2024, 1, 1)),
        RecurrenceOptions::new(Frequency::Weekly)
            .with_weekdays([Weekday::Wednesday, Weekday::Monday]),
        RecurrenceOptions::new(Frequency::Monthly).with_month_days([1, 15]),
        RecurrenceOptions::new(Frequency::Monthly)
            .with_weekday_ordinal(SetPosition::Last, Weekday::Friday)
            .with_until(date(2024, 12, 31)),
    ];

    for tz in ZONES {
        for option in &options {
            let rule = build_rule(option, tz).unwrap();
            assert_eq!(
                describe(&rule, tz).unwrap(),
                describe_options(option).unwrap(),
                "zone {tz}: {rule}"
            );
        }
    }
}

#[test_log::test]
fn documented_sentences() {
    let daily = RecurrenceOptions::new(Frequency::Daily)
        .with_count(5)
        .with_start_date(date(2024, 1, 1));
    assert_eq!(
        describe_options(&daily).unwrap(),
        "Repeats daily for 5 occurrences starting 2024-01-01 "
    );

    let weekly =
        RecurrenceOptions::new(Frequency::Weekly).with_weekdays([Weekday::Wednesday, Weekday::Monday]);
    assert!(describe_options(&weekly).unwrap().contains("on MO, WE "));

    let month_days = RecurrenceOptions::new(Frequency::Monthly).with_month_days([1, 15]);
    assert!(
        describe_options(&month_days)
            .unwrap()
            .contains("on the 1st, 15th of the month")
    );

    let last_friday = RecurrenceOptions::new(Frequency::Monthly)
        .with_weekday_ordinal(SetPosition::Last, Weekday::Friday);
    assert!(
        describe_options(&last_friday)
            .unwrap()
            .contains("on the last Friday of the month")
    );
}

#[test]
fn until_and_count_together_is_a_validation_error() {
    let options = RecurrenceOptions::new(Frequency::Weekly)
        .with_until(date(2025, 1, 1))
        .with_count(4);

    assert_eq!(options.validate(), Err(ValidationError::UntilCountConflict));
    assert!(matches!(
        build_rule(&options, Tz::UTC),
        Err(RuleError::ValidationError(ValidationError::UntilCountConflict))
    ));
}

#[test]
fn describing_twice_is_identical() {
    let describer = RuleDescriber::from_settings(&Settings::default()).unwrap();
    let rule = "DTSTART:20240105T000000Z\nRRULE:FREQ=WEEKLY;INTERVAL=3;BYDAY=FR,TU;COUNT=9";
    assert_eq!(
        describer.describe(rule).unwrap(),
        describer.describe(rule).unwrap()
    );
}
