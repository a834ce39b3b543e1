//! Logging configuration shared by every subcommand.
//!
//! Values come from global flags with environment fallbacks, so
//! `TINCT_LOG=debug tinct highlight ...` behaves like passing
//! `--log-filter debug`.

use clap::Args;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Filter applied when neither flag nor environment provides one.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Supported logging output formats.
#[derive(
    Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, EnumString, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum LogFormat {
    /// Structured JSON suitable for ingestion by logging stacks.
    Json,
    /// Human-readable single line output.
    #[default]
    Compact,
}

/// Errors encountered while parsing a [`LogFormat`] from text.
pub type LogFormatParseError = strum::ParseError;

/// Telemetry settings resolved from the command line and environment.
#[derive(Debug, Clone, PartialEq, Eq, Args)]
pub struct LoggingConfig {
    /// Tracing filter expression, for example `tinct_core=debug`.
    #[arg(
        id = "log_filter",
        long = "log-filter",
        env = "TINCT_LOG",
        value_name = "EXPR",
        default_value = DEFAULT_LOG_FILTER,
        global = true
    )]
    filter: String,
    /// Log output format.
    #[arg(
        id = "log_format",
        long = "log-format",
        env = "TINCT_LOG_FORMAT",
        value_name = "FORMAT",
        default_value_t = LogFormat::Compact,
        global = true
    )]
    format: LogFormat,
}

impl LoggingConfig {
    /// Creates a configuration with explicit values.
    #[must_use]
    pub fn new(filter: impl Into<String>, format: LogFormat) -> Self {
        Self {
            filter: filter.into(),
            format,
        }
    }

    /// Returns the tracing filter expression.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        &self.filter
    }

    /// Returns the log output format.
    #[must_use]
    pub const fn log_format(&self) -> LogFormat {
        self.format
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_FILTER, LogFormat::default())
    }
}
