//! Diagnostic logging for the `tinct` CLI.
//!
//! Diagnostics are written to stderr so stdout carries token output only.
//! The tracing subscriber is process-global: the first [`initialise`] call
//! installs it and later calls keep it. That matters whenever
//! [`crate::run`] is invoked more than once in one process, as the
//! in-process tests do; every call still validates its own filter so a
//! malformed `--log-filter` is always reported.

use std::io::{self, IsTerminal};

use once_cell::sync::OnceCell;
use tracing::{Subscriber, debug, subscriber::SetGlobalDefaultError};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;

use crate::config::{LogFormat, LoggingConfig};

/// Log target for subscriber installation.
const TELEMETRY_TARGET: &str = "tinct_cli::telemetry";

static TELEMETRY_GUARD: OnceCell<()> = OnceCell::new();

/// Confirms that diagnostics are configured for this process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TelemetryHandle {
    installed: bool,
}

impl TelemetryHandle {
    /// Returns whether this call installed the subscriber, rather than an
    /// earlier call in the same process.
    #[must_use]
    pub const fn installed(self) -> bool {
        self.installed
    }
}

/// Errors encountered while configuring telemetry.
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// The `--log-filter` expression does not parse.
    #[error("invalid log filter '{expression}': {reason}")]
    Filter {
        /// The rejected expression.
        expression: String,
        /// Why the expression was rejected.
        reason: String,
    },
    /// Something outside tinct already installed a global subscriber.
    #[error("failed to install telemetry subscriber: {0}")]
    Subscriber(SetGlobalDefaultError),
}

/// Validates `config` and installs the stderr subscriber on first use.
///
/// # Errors
///
/// Returns [`TelemetryError::Filter`] for an unparsable filter expression,
/// whether or not a subscriber is already installed, and
/// [`TelemetryError::Subscriber`] when another library claimed the global
/// default first.
pub fn initialise(config: &LoggingConfig) -> Result<TelemetryHandle, TelemetryError> {
    let expression = config.log_filter();
    let filter = EnvFilter::try_new(expression).map_err(|error| TelemetryError::Filter {
        expression: expression.to_owned(),
        reason: error.to_string(),
    })?;

    let mut installed = false;
    TELEMETRY_GUARD.get_or_try_init(|| {
        install_subscriber(filter, config.log_format())?;
        installed = true;
        Ok::<(), TelemetryError>(())
    })?;

    if installed {
        debug!(
            target: TELEMETRY_TARGET,
            filter = expression,
            format = %config.log_format(),
            "installed stderr subscriber"
        );
    }
    Ok(TelemetryHandle { installed })
}

fn install_subscriber(filter: EnvFilter, format: LogFormat) -> Result<(), TelemetryError> {
    let builder = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_timer(fmt::time::UtcTime::rfc_3339());

    let subscriber: Box<dyn Subscriber + Send + Sync> = match format {
        LogFormat::Json => Box::new(builder.json().flatten_event(true).finish()),
        LogFormat::Compact => Box::new(builder.compact().finish()),
    };

    tracing::subscriber::set_global_default(subscriber).map_err(TelemetryError::Subscriber)
}
