//! Command execution.

use chrono_tz::Tz;
use serde::Serialize;

use cadence_core::config::{MAX_PREVIEW_INSTANCES, Settings};
use cadence_core::error::CoreError;
use cadence_core::timezone::resolve_timezone;
use cadence_rfc::{
    EndCondition, ExpansionOptions, RecurrenceOptions, RuleDescriber, SetPosition, Weekday,
    build_rule, expand_rule, ordinal,
};

use super::{BuildArgs, CommandLine, Commands};
use crate::error::AppResult;

const OCCURRENCE_FORMAT: &str = "%Y-%m-%d %H:%M %Z";

#[derive(Serialize)]
struct BuildOutput<'a> {
    options: &'a RecurrenceOptions,
    end: EndCondition,
    rule: String,
    text: String,
}

/// ## Summary
/// Runs a parsed command line and returns the text to print.
///
/// ## Errors
/// Returns an error if an argument is invalid, the timezone is unknown, or the
/// rule cannot be built, parsed or expanded.
pub fn execute(command_line: &CommandLine, settings: &Settings) -> AppResult<String> {
    let tz = if let Some(name) = &command_line.tz {
        resolve_timezone(name)?
    } else {
        settings.display.timezone()?
    };
    let describer = RuleDescriber::new(tz);

    tracing::debug!(timezone = %tz, command = ?command_line.command, "Executing command");

    match &command_line.command {
        Commands::Describe { rule } => Ok(describer.describe(rule)?),
        Commands::Build(args) => build(args, describer),
        Commands::Preview { rule, limit } => {
            let limit = limit.map_or_else(
                || settings.preview.limit(),
                |n| n.clamp(1, MAX_PREVIEW_INSTANCES),
            );
            let options = ExpansionOptions::default().with_max_instances(limit);
            let lines: Vec<String> = expand_rule(rule, tz, &options)?
                .into_iter()
                .map(|dt| dt.with_timezone(&tz).format(OCCURRENCE_FORMAT).to_string())
                .collect();
            Ok(lines.join("\n"))
        }
        Commands::Ordinal { n } => Ok(ordinal(*n)),
    }
}

fn build(args: &BuildArgs, describer: RuleDescriber) -> AppResult<String> {
    let options = options_from_args(args, describer.timezone())?;
    let rule = build_rule(&options, describer.timezone())?;
    let text = describer.describe(&rule)?;

    if args.json {
        let output = BuildOutput {
            options: &options,
            end: options.end(),
            rule,
            text,
        };
        return Ok(serde_json::to_string_pretty(&output)?);
    }

    Ok(format!("{rule}\n{text}"))
}

fn options_from_args(args: &BuildArgs, tz: Tz) -> AppResult<RecurrenceOptions> {
    let mut options = if args.today {
        RecurrenceOptions::starting_today(args.freq.into(), tz)
    } else {
        RecurrenceOptions::new(args.freq.into())
    }
    .with_interval(args.interval)
    .with_weekdays(parse_weekdays(&args.on)?);

    if let Some(start) = args.start {
        options = options.with_start_date(start);
    }
    if !args.month_days.is_empty() {
        options = options.with_month_days(args.month_days.iter().copied());
    }
    if let (Some(nth), Some(weekday)) = (args.nth, &args.weekday) {
        let position = SetPosition::try_from(nth)?;
        options = options.with_weekday_ordinal(position, parse_weekday(weekday)?);
    }
    if let Some(until) = args.until {
        options = options.with_until(until);
    }
    if let Some(count) = args.count {
        options = options.with_count(count);
    }

    Ok(options)
}

fn parse_weekdays(values: &[String]) -> AppResult<Vec<Weekday>> {
    values.iter().map(|value| parse_weekday(value)).collect()
}

fn parse_weekday(value: &str) -> AppResult<Weekday> {
    Weekday::parse(value.trim())
        .ok_or_else(|| CoreError::InvalidInput(format!("unknown weekday: {value}")).into())
}
