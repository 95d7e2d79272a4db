use cadence_core::config::Settings;
use cadence_rfc::RuleDescriber;
use chrono_tz::Tz;

#[test_log::test]
fn settings_file_drives_describer_zone() {
    let toml = r#"
        [display]
        timezone = "Pacific/Auckland"

        [preview]
        max_instances = 5
    "#;
    let settings =
        Settings::load_from(config_source(toml)).expect("settings should load from TOML");

    assert_eq!(settings.preview.limit(), 5);
    let describer = RuleDescriber::from_settings(&settings).unwrap();
    assert_eq!(describer.timezone(), Tz::Pacific__Auckland);

    // 2024-01-01T11:00Z is 2024-01-02 00:00 in Auckland (NZDT)
    assert_eq!(
        describer
            .describe("DTSTART:20240101T110000Z\nRRULE:FREQ=DAILY")
            .unwrap(),
        "Repeats daily starting 2024-01-02 "
    );
}

fn config_source(toml: &str) -> config::File<config::FileSourceString, config::FileFormat> {
    config::File::from_str(toml, config::FileFormat::Toml)
}
