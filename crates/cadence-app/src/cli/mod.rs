//! Command-line definitions.

mod run;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};

use cadence_rfc::Frequency;

pub use run::execute;

#[derive(Parser, Debug)]
#[command(name = "cadence")]
#[command(about = "Build, describe and preview recurrence rules.", version)]
pub struct CommandLine {
    /// IANA timezone to use instead of `display.timezone`
    #[arg(long, global = true)]
    pub tz: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a serialized rule as a sentence
    Describe { rule: String },
    /// Build a serialized rule from options
    Build(BuildArgs),
    /// List the first occurrences of a serialized rule
    Preview {
        rule: String,
        /// Number of occurrences to list (defaults to `preview.max_instances`)
        #[arg(long)]
        limit: Option<u16>,
    },
    /// Format a number as an ordinal
    Ordinal { n: u32 },
}

#[derive(Args, Debug)]
pub struct BuildArgs {
    #[arg(long, value_enum)]
    pub freq: FrequencyArg,

    #[arg(long, default_value_t = 1)]
    pub interval: u32,

    /// Weekdays, e.g. `MO,WE`
    #[arg(long, value_delimiter = ',')]
    pub on: Vec<String>,

    /// Days of the month, e.g. `1,15`
    #[arg(long = "month-days", value_delimiter = ',', conflicts_with = "nth")]
    pub month_days: Vec<u8>,

    /// Position of the weekday in the month: 1 to 4, or -1 for last
    #[arg(long, allow_hyphen_values = true, requires = "weekday")]
    pub nth: Option<i16>,

    /// Weekday paired with `--nth`
    #[arg(long, requires = "nth")]
    pub weekday: Option<String>,

    /// First date, `YYYY-MM-DD`
    #[arg(long, conflicts_with = "today")]
    pub start: Option<NaiveDate>,

    /// Start on the current date in the display timezone
    #[arg(long)]
    pub today: bool,

    /// Last date, `YYYY-MM-DD`
    #[arg(long)]
    pub until: Option<NaiveDate>,

    #[arg(long)]
    pub count: Option<u32>,

    /// Print options, rule and description as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum FrequencyArg {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl From<FrequencyArg> for Frequency {
    fn from(arg: FrequencyArg) -> Self {
        match arg {
            FrequencyArg::Daily => Self::Daily,
            FrequencyArg::Weekly => Self::Weekly,
            FrequencyArg::Monthly => Self::Monthly,
            FrequencyArg::Yearly => Self::Yearly,
        }
    }
}
