//! Error types for the CLI runtime.

use std::io;

use camino::{Utf8Path, Utf8PathBuf};
use thiserror::Error;
use tinct_core::ParseError;

use crate::telemetry::TelemetryError;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("{0}")]
    CliUsage(clap::Error),
    #[error("failed to configure logging: {0}")]
    Telemetry(#[from] TelemetryError),
    #[error("either --tree or --parser must be provided")]
    MissingTreeSource,
    #[error("failed to read {path}: {source}")]
    ReadInput {
        path: Utf8PathBuf,
        source: io::Error,
    },
    #[error("failed to highlight {path}: {source}")]
    Highlight {
        path: Utf8PathBuf,
        #[source]
        source: ParseError,
    },
    #[error("failed to serialise output: {0}")]
    Serialise(#[from] serde_json::Error),
    #[error("failed to write output: {0}")]
    WriteOutput(#[from] io::Error),
}

impl AppError {
    pub(crate) fn read_input(path: &Utf8Path, source: io::Error) -> Self {
        Self::ReadInput {
            path: path.to_owned(),
            source,
        }
    }

    pub(crate) fn highlight(path: &Utf8Path, source: ParseError) -> Self {
        Self::Highlight {
            path: path.to_owned(),
            source,
        }
    }
}
