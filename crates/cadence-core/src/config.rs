use anyhow::Result;
use chrono_tz::Tz;
use config::Config;
use serde::Deserialize;

use crate::error::CoreResult;
use crate::timezone::resolve_timezone;

/// Upper bound accepted for `preview.max_instances`.
pub const MAX_PREVIEW_INSTANCES: u16 = 1000;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
    pub preview: PreviewConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    /// Zone rule dates are authored and displayed in. IANA or Windows name.
    pub timezone: String,
}

impl DisplayConfig {
    /// ## Summary
    /// Resolves the configured timezone name.
    ///
    /// ## Errors
    /// Returns `CoreError::UnknownTimezone` if the name cannot be resolved.
    pub fn timezone(&self) -> CoreResult<Tz> {
        resolve_timezone(&self.timezone)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PreviewConfig {
    pub max_instances: u16,
}

impl PreviewConfig {
    /// ## Summary
    /// Returns the configured preview limit clamped to `1..=MAX_PREVIEW_INSTANCES`.
    #[must_use]
    pub fn limit(&self) -> u16 {
        self.max_instances.clamp(1, MAX_PREVIEW_INSTANCES)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            display: DisplayConfig {
                timezone: "UTC".to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            preview: PreviewConfig { max_instances: 10 },
        }
    }
}

impl Settings {
    /// ## Summary
    /// Loads configuration from `CADENCE_*` environment variables and an optional
    /// `cadence.toml`. Environment variables take precedence over the file.
    ///
    /// Nested keys use a double underscore, e.g. `CADENCE_DISPLAY__TIMEZONE`.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Self::load_from(config::File::with_name("cadence.toml").required(false))
    }

    /// ## Summary
    /// Loads configuration layered over the given file source.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load_from<S>(file: S) -> Result<Self>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let settings = Config::builder()
            .set_default("display.timezone", "UTC")?
            .set_default("logging.level", "info")?
            .set_default("preview.max_instances", 10)?
            .add_source(file)
            .add_source(
                config::Environment::with_prefix("CADENCE")
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Settings>()?;

        tracing::debug!(timezone = %settings.display.timezone, "Settings loaded");

        Ok(settings)
    }
}

/// ## Summary
/// Loads configuration from environment variables, `.env` and `cadence.toml`.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
